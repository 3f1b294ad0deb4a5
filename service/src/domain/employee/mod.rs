//! [`Employee`] definitions.

pub mod schedule;

use std::collections::BTreeSet;

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, DateOf, DateTimeOf, Money};
use derive_more::{Display, Error, From, FromStr, Into};
use uuid::Uuid;

use crate::domain::{
    contact::{Email, Name},
    employer, leave,
    text::define_text,
    Project,
};

pub use self::schedule::Schedule;

/// Person working for an [`Employer`].
///
/// [`Employer`]: crate::domain::Employer
#[derive(Clone, Debug)]
pub struct Employee {
    /// ID of this [`Employee`].
    pub id: Id,

    /// ID of the [`Employer`] this [`Employee`] works for, if any.
    ///
    /// [`Employer`]: crate::domain::Employer
    pub employer_id: Option<employer::Id>,

    /// [`Name`] of this [`Employee`].
    pub name: Name,

    /// [`Email`] of this [`Employee`].
    pub email: Email,

    /// [`BankAccount`] to pay this [`Employee`] to.
    pub bank_account: Option<BankAccount>,

    /// [`Role`] of this [`Employee`].
    pub role: Role,

    /// [`EmploymentType`] of this [`Employee`].
    pub employment_type: EmploymentType,

    /// [`Project`]s this [`Employee`] is assigned to.
    pub projects: BTreeSet<Project>,

    /// Employment [`Contract`] of this [`Employee`].
    pub contract: Contract,

    /// [`leave::Extension`] granted to this [`Employee`], if any.
    pub leave_extension: Option<leave::Extension>,

    /// Working [`Schedule`] of this [`Employee`].
    pub schedule: Schedule,

    /// Hourly rate paid to this [`Employee`].
    ///
    /// Always present for [`EmploymentType::PartTime`] [`Employee`]s.
    pub hourly_rate: Option<Money>,

    /// [`DateTime`] when this [`Employee`] was created.
    pub created_at: CreationDateTime,
}

impl Employee {
    /// Returns the [`leave::Accrual`] of this [`Employee`] with the provided
    /// number of already used leave days.
    #[must_use]
    pub fn leave_accrual(&self, used_days: u32) -> leave::Accrual {
        leave::Accrual {
            contract_start: self.contract.start.coerce(),
            contract_end: self.contract.end.coerce(),
            used_days,
            extended_until: self
                .leave_extension
                .as_ref()
                .map(|e| e.extended_until.coerce()),
        }
    }

    /// Indicates whether this [`Employee`] is paid per logged hour.
    #[must_use]
    pub fn is_part_time(&self) -> bool {
        self.employment_type == EmploymentType::PartTime
    }
}

/// ID of an [`Employee`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

define_kind! {
    #[doc = "Role of an [`Employee`]."]
    enum Role {
        #[doc = "Software engineer."]
        Engineer = 1,

        #[doc = "Product manager."]
        ProductManager = 2,

        #[doc = "Designer."]
        Designer = 3,
    }
}

impl Role {
    /// Returns the maximum number of [`Project`]s an [`Employee`] with this
    /// [`Role`] may be assigned to.
    #[must_use]
    pub const fn max_projects(self) -> usize {
        match self {
            Self::ProductManager => 3,
            Self::Engineer | Self::Designer => 1,
        }
    }

    /// Checks whether an [`Employee`] with this [`Role`] may be assigned to
    /// the provided `projects`.
    ///
    /// # Errors
    ///
    /// With [`TooManyProjects`] if the number of `projects` exceeds
    /// [`Role::max_projects()`].
    pub fn check_projects(
        self,
        projects: &BTreeSet<Project>,
    ) -> Result<(), TooManyProjects> {
        let max = self.max_projects();
        if projects.len() > max {
            return Err(TooManyProjects {
                role: self,
                max,
                requested: projects.len(),
            });
        }
        Ok(())
    }
}

/// Error of assigning more [`Project`]s than a [`Role`] allows.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("`{role}` may have at most {max} project(s), {requested} requested")]
pub struct TooManyProjects {
    /// [`Role`] of the [`Employee`].
    pub role: Role,

    /// Maximum allowed number of [`Project`]s.
    pub max: usize,

    /// Requested number of [`Project`]s.
    pub requested: usize,
}

/// Checks whether the provided `hourly_rate` suits an [`Employee`] with the
/// provided [`EmploymentType`].
///
/// # Errors
///
/// - [`InvalidHourlyRate::Missing`] if a part-time [`Employee`] has no hourly
///   rate;
/// - [`InvalidHourlyRate::NotPositive`] if the `hourly_rate` is not positive.
pub fn check_hourly_rate(
    employment_type: EmploymentType,
    hourly_rate: Option<&Money>,
) -> Result<(), InvalidHourlyRate> {
    match hourly_rate {
        None if employment_type == EmploymentType::PartTime => {
            Err(InvalidHourlyRate::Missing)
        }
        Some(rate) if !rate.is_positive() => {
            Err(InvalidHourlyRate::NotPositive(*rate))
        }
        None | Some(_) => Ok(()),
    }
}

/// Error of an [`Employee`] hourly rate being invalid.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum InvalidHourlyRate {
    /// Part-time [`Employee`] has no hourly rate.
    #[display("part-time `Employee` must have an hourly rate")]
    Missing,

    /// Hourly rate is zero or negative.
    #[display("hourly rate `{_0}` must be positive")]
    NotPositive(#[error(not(source))] Money),
}

define_kind! {
    #[doc = "Type of an [`Employee`] employment."]
    enum EmploymentType {
        #[doc = "Salaried full-time employment."]
        FullTime = 1,

        #[doc = "Part-time employment paid per logged hour."]
        PartTime = 2,
    }
}

define_text! {
    #[doc = "Bank account an [`Employee`] is paid to."]
    BankAccount(max = 64)
}

/// Employment contract window of an [`Employee`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Contract {
    /// [`Date`] this [`Contract`] starts at.
    ///
    /// [`Date`]: common::Date
    pub start: ContractStartDate,

    /// [`Date`] this [`Contract`] ends at (inclusive).
    ///
    /// [`Date`]: common::Date
    pub end: ContractEndDate,
}

impl Contract {
    /// Creates a new [`Contract`] if `start` is not after `end`.
    #[must_use]
    pub fn new(start: ContractStartDate, end: ContractEndDate) -> Option<Self> {
        (start.coerce::<()>() <= end.coerce()).then_some(Self { start, end })
    }
}

/// [`Date`] when a [`Contract`] starts.
///
/// [`Date`]: common::Date
pub type ContractStartDate = DateOf<(Contract, unit::Start)>;

/// [`Date`] when a [`Contract`] ends.
///
/// [`Date`]: common::Date
pub type ContractEndDate = DateOf<(Contract, unit::End)>;

/// [`DateTime`] when an [`Employee`] was created.
pub type CreationDateTime = DateTimeOf<(Employee, unit::Creation)>;
