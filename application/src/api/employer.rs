//! [`Employer`]-related definitions.

use common::DateTime;
use derive_more::{AsRef, Display, From, Into};
use futures::{future, TryFutureExt as _};
use juniper::{graphql_object, GraphQLScalar};
use service::{domain, query, read, Query as _};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{
    api::{self, contact, scalar},
    AsError, Context, Error,
};

/// Company employing `Employee`s.
#[derive(Clone, Debug)]
pub struct Employer {
    /// ID of this [`Employer`].
    pub id: Id,

    /// [`domain::Employer`] representing this [`Employer`].
    employer: OnceCell<domain::Employer>,
}

impl From<domain::Employer> for Employer {
    fn from(employer: domain::Employer) -> Self {
        Self {
            id: employer.id.into(),
            employer: OnceCell::new_with(Some(employer)),
        }
    }
}

impl Employer {
    /// Creates a new [`Employer`] with the provided ID.
    ///
    /// # Safety
    ///
    /// Caller must ensure that [`Employer`] with the provided ID exists,
    /// otherwise accessing this [`Employer`] will result with an error.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            employer: OnceCell::new(),
        }
    }

    /// Returns the [`domain::Employer`] representing this [`Employer`].
    ///
    /// # Errors
    ///
    /// Error if the [`domain::Employer`] doesn't exist.
    async fn employer(
        &self,
        ctx: &Context,
    ) -> Result<&domain::Employer, Error> {
        let id = self.id.into();
        self.employer
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::employer::ById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|e| {
                        future::ready(
                            e.ok_or_else(|| {
                                api::EmployerError::NotExists.into()
                            })
                            .map_err(ctx.error()),
                        )
                    })
            })
            .await
    }
}

/// Company employing `Employee`s.
#[graphql_object(context = Context)]
impl Employer {
    /// Unique identifier of this `Employer`.
    #[must_use]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Name of the contact person of this `Employer`.
    pub async fn name(&self, ctx: &Context) -> Result<contact::Name, Error> {
        Ok(self.employer(ctx).await?.name.clone().into())
    }

    /// Email of this `Employer`.
    pub async fn email(&self, ctx: &Context) -> Result<contact::Email, Error> {
        Ok(self.employer(ctx).await?.email.clone().into())
    }

    /// Phone of this `Employer`.
    pub async fn phone(
        &self,
        ctx: &Context,
    ) -> Result<Option<contact::Phone>, Error> {
        Ok(self.employer(ctx).await?.phone.clone().map(Into::into))
    }

    /// Postal address of this `Employer`.
    pub async fn address(
        &self,
        ctx: &Context,
    ) -> Result<Option<contact::Address>, Error> {
        Ok(self.employer(ctx).await?.address.clone().map(Into::into))
    }

    /// Registered company name of this `Employer`.
    pub async fn company_name(
        &self,
        ctx: &Context,
    ) -> Result<CompanyName, Error> {
        Ok(self.employer(ctx).await?.company_name.clone().into())
    }

    /// Industry this `Employer` operates in.
    pub async fn industry(
        &self,
        ctx: &Context,
    ) -> Result<Option<Industry>, Error> {
        Ok(self.employer(ctx).await?.industry.clone().map(Into::into))
    }

    /// Declared number of employees of this `Employer`.
    pub async fn employee_count(
        &self,
        ctx: &Context,
    ) -> Result<Option<i32>, Error> {
        Ok(self.employer(ctx).await?.employee_count.map(api::int))
    }

    /// Indicator whether this `Employer` is active.
    pub async fn is_active(&self, ctx: &Context) -> Result<bool, Error> {
        Ok(self.employer(ctx).await?.is_active)
    }

    /// `DateTime` when this `Employer` was created.
    pub async fn created_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.employer(ctx).await?.created_at.coerce())
    }

    /// `Employee`s working for this `Employer`, newest first.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Employer.employees",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn employees(
        &self,
        ctx: &Context,
    ) -> Result<Vec<api::Employee>, Error> {
        ctx.service()
            .execute(query::employees::List::by(read::employee::list::Filter {
                employer_id: Some(self.id.into()),
                ..read::employee::list::Filter::default()
            }))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|list| list.into_iter().map(Into::into).collect())
    }
}

/// Unique identifier of an `Employer`.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, GraphQLScalar, Into, PartialEq,
)]
#[from(domain::employer::Id)]
#[into(domain::employer::Id)]
#[graphql(name = "EmployerId", transparent)]
pub struct Id(Uuid);

/// Registered name of an `Employer` company.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "CompanyName",
    with = scalar::Via::<domain::employer::CompanyName>,
)]
pub struct CompanyName(domain::employer::CompanyName);

/// Industry an `Employer` operates in.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "Industry",
    with = scalar::Via::<domain::employer::Industry>,
)]
pub struct Industry(domain::employer::Industry);
