//! [`Employee`]-related definitions.

use common::{Date, DateTime, Money};
use derive_more::{AsRef, Display, From, Into};
use futures::{future, TryFutureExt as _};
use juniper::{
    graphql_object, GraphQLEnum, GraphQLInputObject, GraphQLObject,
    GraphQLScalar,
};
use service::{domain, query, Query as _};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{
    api::{self, contact, scalar},
    AsError, Context, Error,
};

/// Person working for an `Employer`.
#[derive(Clone, Debug)]
pub struct Employee {
    /// ID of this [`Employee`].
    pub id: Id,

    /// [`domain::Employee`] representing this [`Employee`].
    employee: OnceCell<domain::Employee>,
}

impl From<domain::Employee> for Employee {
    fn from(employee: domain::Employee) -> Self {
        Self {
            id: employee.id.into(),
            employee: OnceCell::new_with(Some(employee)),
        }
    }
}

impl Employee {
    /// Creates a new [`Employee`] with the provided ID.
    ///
    /// # Safety
    ///
    /// Caller must ensure that [`Employee`] with the provided ID exists,
    /// otherwise accessing this [`Employee`] will result with an error.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            employee: OnceCell::new(),
        }
    }

    /// Returns the [`domain::Employee`] representing this [`Employee`].
    ///
    /// # Errors
    ///
    /// Error if the [`domain::Employee`] doesn't exist.
    async fn employee(
        &self,
        ctx: &Context,
    ) -> Result<&domain::Employee, Error> {
        let id = self.id.into();
        self.employee
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::employee::ById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|e| {
                        future::ready(
                            e.ok_or_else(|| {
                                api::EmployeeError::NotExists.into()
                            })
                            .map_err(ctx.error()),
                        )
                    })
            })
            .await
    }
}

/// Person working for an `Employer`.
#[graphql_object(context = Context)]
impl Employee {
    /// Unique identifier of this `Employee`.
    #[must_use]
    pub fn id(&self) -> Id {
        self.id
    }

    /// `Employer` this `Employee` works for, if any.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Employee.employer",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn employer(
        &self,
        ctx: &Context,
    ) -> Result<Option<api::Employer>, Error> {
        Ok(self.employee(ctx).await?.employer_id.map(|id| {
            #[expect(
                unsafe_code,
                reason = "`Employee` is never stored with a missing `Employer`"
            )]
            unsafe {
                api::Employer::new_unchecked(id)
            }
        }))
    }

    /// Name of this `Employee`.
    pub async fn name(&self, ctx: &Context) -> Result<contact::Name, Error> {
        Ok(self.employee(ctx).await?.name.clone().into())
    }

    /// Email of this `Employee`.
    pub async fn email(&self, ctx: &Context) -> Result<contact::Email, Error> {
        Ok(self.employee(ctx).await?.email.clone().into())
    }

    /// Bank account this `Employee` is paid to.
    pub async fn bank_account(
        &self,
        ctx: &Context,
    ) -> Result<Option<BankAccount>, Error> {
        Ok(self.employee(ctx).await?.bank_account.clone().map(Into::into))
    }

    /// Role of this `Employee`.
    pub async fn role(&self, ctx: &Context) -> Result<Role, Error> {
        Ok(self.employee(ctx).await?.role.into())
    }

    /// Maximum number of `Project`s this `Employee` may be assigned to.
    pub async fn max_projects(&self, ctx: &Context) -> Result<i32, Error> {
        Ok(api::int(self.employee(ctx).await?.role.max_projects()))
    }

    /// Type of the employment of this `Employee`.
    pub async fn employment_type(
        &self,
        ctx: &Context,
    ) -> Result<EmploymentType, Error> {
        Ok(self.employee(ctx).await?.employment_type.into())
    }

    /// `Project`s this `Employee` is assigned to.
    pub async fn projects(&self, ctx: &Context) -> Result<Vec<Project>, Error> {
        Ok(self
            .employee(ctx)
            .await?
            .projects
            .iter()
            .cloned()
            .map(Into::into)
            .collect())
    }

    /// Employment `Contract` of this `Employee`.
    pub async fn contract(&self, ctx: &Context) -> Result<Contract, Error> {
        Ok(self.employee(ctx).await?.contract.into())
    }

    /// `LeaveExtension` granted to this `Employee`, if any.
    pub async fn leave_extension(
        &self,
        ctx: &Context,
    ) -> Result<Option<api::leave::Extension>, Error> {
        Ok(self
            .employee(ctx)
            .await?
            .leave_extension
            .clone()
            .map(Into::into))
    }

    /// Working `Schedule` of this `Employee`.
    pub async fn schedule(
        &self,
        ctx: &Context,
    ) -> Result<api::schedule::Schedule, Error> {
        Ok(self.employee(ctx).await?.schedule.clone().into())
    }

    /// Hourly rate paid to this `Employee`.
    ///
    /// Always present for part-time `Employee`s.
    pub async fn hourly_rate(
        &self,
        ctx: &Context,
    ) -> Result<Option<Money>, Error> {
        Ok(self.employee(ctx).await?.hourly_rate)
    }

    /// `DateTime` when this `Employee` was created.
    pub async fn created_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.employee(ctx).await?.created_at.coerce())
    }

    /// `LeaveBalance` of this `Employee` on the provided `Date` (today by
    /// default).
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Employee.leaveBalance",
            on = ?on.as_ref().map(ToString::to_string),
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn leave_balance(
        &self,
        on: Option<Date>,
        ctx: &Context,
    ) -> Result<api::leave::Balance, Error> {
        ctx.service()
            .execute(query::leave_balance::Balance {
                employee_id: self.id.into(),
                on,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }
}

/// Unique identifier of an `Employee`.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, GraphQLScalar, Into, PartialEq,
)]
#[from(domain::employee::Id)]
#[into(domain::employee::Id)]
#[graphql(name = "EmployeeId", transparent)]
pub struct Id(Uuid);

/// Bank account an `Employee` is paid to.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "BankAccount",
    with = scalar::Via::<domain::employee::BankAccount>,
)]
pub struct BankAccount(domain::employee::BankAccount);

/// Code of a `Project`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "ProjectCode", with = scalar::Via::<domain::Project>)]
pub struct ProjectCode(domain::Project);

/// Project an `Employee` is assigned to.
#[derive(Clone, Debug, From)]
pub struct Project(domain::Project);

/// Project an `Employee` is assigned to.
#[graphql_object(context = Context)]
impl Project {
    /// Code of this `Project`.
    #[must_use]
    pub fn code(&self) -> ProjectCode {
        self.0.clone().into()
    }

    /// Badge color of this `Project`.
    #[must_use]
    pub fn color(&self) -> ProjectColor {
        self.0.color().into()
    }
}

/// Badge color of a `Project`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
pub enum ProjectColor {
    /// Blue badge.
    Blue,

    /// Green badge.
    Green,

    /// Purple badge.
    Purple,

    /// Orange badge.
    Orange,

    /// Red badge.
    Red,

    /// Indigo badge.
    Indigo,

    /// Gray badge of an unknown `Project`.
    Gray,
}

impl From<domain::project::Color> for ProjectColor {
    fn from(color: domain::project::Color) -> Self {
        use domain::project::Color as C;
        match color {
            C::Blue => Self::Blue,
            C::Green => Self::Green,
            C::Purple => Self::Purple,
            C::Orange => Self::Orange,
            C::Red => Self::Red,
            C::Indigo => Self::Indigo,
            C::Gray => Self::Gray,
        }
    }
}

/// Role of an `Employee`.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "EmployeeRole")]
pub enum Role {
    /// Software engineer, assigned to a single `Project`.
    Engineer,

    /// Product manager, assigned to up to three `Project`s.
    ProductManager,

    /// Designer, assigned to a single `Project`.
    Designer,
}

impl From<domain::employee::Role> for Role {
    fn from(role: domain::employee::Role) -> Self {
        use domain::employee::Role as R;
        match role {
            R::Engineer => Self::Engineer,
            R::ProductManager => Self::ProductManager,
            R::Designer => Self::Designer,
        }
    }
}

impl From<Role> for domain::employee::Role {
    fn from(role: Role) -> Self {
        match role {
            Role::Engineer => Self::Engineer,
            Role::ProductManager => Self::ProductManager,
            Role::Designer => Self::Designer,
        }
    }
}

/// Type of an `Employee` employment.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
pub enum EmploymentType {
    /// Salaried full-time employment.
    FullTime,

    /// Part-time employment paid per logged hour.
    PartTime,
}

impl From<domain::employee::EmploymentType> for EmploymentType {
    fn from(ty: domain::employee::EmploymentType) -> Self {
        use domain::employee::EmploymentType as T;
        match ty {
            T::FullTime => Self::FullTime,
            T::PartTime => Self::PartTime,
        }
    }
}

impl From<EmploymentType> for domain::employee::EmploymentType {
    fn from(ty: EmploymentType) -> Self {
        match ty {
            EmploymentType::FullTime => Self::FullTime,
            EmploymentType::PartTime => Self::PartTime,
        }
    }
}

/// Employment contract window of an `Employee`.
#[derive(Clone, Copy, Debug, GraphQLObject)]
#[graphql(name = "EmploymentContract")]
pub struct Contract {
    /// `Date` the contract starts at.
    pub start: Date,

    /// `Date` the contract ends at (inclusive).
    pub end: Date,
}

impl From<domain::employee::Contract> for Contract {
    fn from(contract: domain::employee::Contract) -> Self {
        Self {
            start: contract.start.coerce(),
            end: contract.end.coerce(),
        }
    }
}

/// Employment contract window of an `Employee`.
#[derive(Clone, Copy, Debug, GraphQLInputObject)]
#[graphql(name = "EmploymentContractInput")]
pub struct ContractInput {
    /// `Date` the contract starts at.
    pub start: Date,

    /// `Date` the contract ends at (inclusive), not before `start`.
    pub end: Date,
}

impl TryFrom<ContractInput> for domain::employee::Contract {
    type Error = Error;

    fn try_from(input: ContractInput) -> Result<Self, Self::Error> {
        contract(input.start, input.end)
    }
}

/// Builds a [`domain::employee::Contract`] out of the provided `start` and
/// `end` [`Date`]s.
///
/// # Errors
///
/// With [`api::InputError::Contract`] if `start` is after `end`.
pub(crate) fn contract(
    start: Date,
    end: Date,
) -> Result<domain::employee::Contract, Error> {
    domain::employee::Contract::new(start.coerce(), end.coerce())
        .ok_or_else(|| api::InputError::Contract.into())
}

#[cfg(test)]
mod spec {
    use common::Date;
    use service::domain::employee;

    use super::{contract, ContractInput, EmploymentType, Role};

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn converts_kinds_both_ways() {
        for role in employee::Role::ALL {
            assert_eq!(employee::Role::from(Role::from(*role)), *role);
        }
        for ty in employee::EmploymentType::ALL {
            assert_eq!(
                employee::EmploymentType::from(EmploymentType::from(*ty)),
                *ty,
            );
        }
    }

    #[test]
    fn rejects_reversed_contract() {
        assert!(contract(date("2024-01-15"), date("2024-12-31")).is_ok());
        assert!(contract(date("2024-01-15"), date("2024-01-15")).is_ok());

        let err = contract(date("2024-12-31"), date("2024-01-15")).unwrap_err();
        assert_eq!(err.code, "INVALID_INPUT");
    }

    #[test]
    fn builds_contract_from_input() {
        let contract = employee::Contract::try_from(ContractInput {
            start: date("2024-01-15"),
            end: date("2024-12-31"),
        })
        .unwrap();

        assert_eq!(contract.start.to_string(), "2024-01-15");
        assert_eq!(contract.end.to_string(), "2024-12-31");
    }
}
