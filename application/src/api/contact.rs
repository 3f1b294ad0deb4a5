//! Contact details shared by `Employee`s and `Employer`s.

use derive_more::{AsRef, Display, From, Into};
use juniper::GraphQLScalar;
use service::domain::contact;

use crate::api::scalar;

/// Full name of a person.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "PersonName", with = scalar::Via::<contact::Name>)]
pub struct Name(contact::Name);

/// Email address, case-insensitive.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "Email", with = scalar::Via::<contact::Email>)]
pub struct Email(contact::Email);

/// Phone number.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "Phone", with = scalar::Via::<contact::Phone>)]
pub struct Phone(contact::Phone);

/// Postal address.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "Address", with = scalar::Via::<contact::Address>)]
pub struct Address(contact::Address);
