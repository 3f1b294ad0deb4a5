//! [`Query`] collection related to a single [`Employer`].

use common::operations::By;

use crate::domain::{employer, Employer};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries an [`Employer`] by its [`employer::Id`].
pub type ById = DatabaseQuery<By<Option<Employer>, employer::Id>>;
