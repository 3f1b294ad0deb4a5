//! Leave [`Request`] definitions.

pub mod balance;
pub mod extension;

#[cfg(doc)]
use common::{Date, DateTime};
use common::{define_kind, unit, DateOf, DateTimeOf};
use derive_more::{Display, From, FromStr, Into};
use uuid::Uuid;

use crate::domain::{employee, text::define_text, Review};

pub use self::{
    balance::{Accrual, Balance},
    extension::Extension,
};

/// Request of an [`Employee`] to leave work for a [`Period`].
///
/// [`Employee`]: crate::domain::Employee
#[derive(Clone, Debug)]
pub struct Request {
    /// ID of this [`Request`].
    pub id: Id,

    /// ID of the requesting [`Employee`].
    ///
    /// [`Employee`]: crate::domain::Employee
    pub employee_id: employee::Id,

    /// [`Period`] of this [`Request`].
    pub period: Period,

    /// [`Kind`] of this [`Request`].
    pub kind: Kind,

    /// [`Reason`] of this [`Request`].
    pub reason: Reason,

    /// [`Review`] of this [`Request`].
    pub review: Review,

    /// [`DateTime`] when this [`Request`] was created.
    pub created_at: CreationDateTime,
}

/// ID of a leave [`Request`].
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
    PartialEq,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Inclusive range of leave days.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Period {
    /// First day of this [`Period`].
    start: StartDate,

    /// Last day of this [`Period`].
    end: EndDate,
}

impl Period {
    /// Creates a new [`Period`] if `start` is not after `end`.
    #[must_use]
    pub fn new(start: StartDate, end: EndDate) -> Option<Self> {
        (start.coerce::<()>() <= end.coerce()).then_some(Self { start, end })
    }

    /// Returns the first day of this [`Period`].
    #[must_use]
    pub fn start(&self) -> StartDate {
        self.start
    }

    /// Returns the last day of this [`Period`].
    #[must_use]
    pub fn end(&self) -> EndDate {
        self.end
    }

    /// Returns the number of days in this [`Period`], both ends included.
    #[must_use]
    pub fn days(&self) -> u32 {
        u32::try_from(self.end.days_since(self.start) + 1).unwrap_or(u32::MAX)
    }
}

define_kind! {
    #[doc = "Kind of a leave [`Request`]."]
    enum Kind {
        #[doc = "Annual vacation."]
        Vacation = 1,

        #[doc = "Sick leave."]
        Sick = 2,

        #[doc = "Personal day off."]
        Personal = 3,

        #[doc = "Any other reason."]
        Other = 4,
    }
}

define_text! {
    #[doc = "Reason of a leave [`Request`]."]
    Reason(max = 2048)
}

/// [`Date`] a leave [`Period`] starts at.
pub type StartDate = DateOf<(Period, unit::Start)>;

/// [`Date`] a leave [`Period`] ends at.
pub type EndDate = DateOf<(Period, unit::End)>;

/// [`DateTime`] when a leave [`Request`] was created.
pub type CreationDateTime = DateTimeOf<(Request, unit::Creation)>;

#[cfg(test)]
mod spec {
    use common::Date;

    use super::Period;

    fn period(start: &str, end: &str) -> Option<Period> {
        Period::new(
            start.parse::<Date>().unwrap().coerce(),
            end.parse::<Date>().unwrap().coerce(),
        )
    }

    #[test]
    fn counts_days_inclusively() {
        assert_eq!(period("2024-06-10", "2024-06-14").unwrap().days(), 5);
        assert_eq!(period("2024-06-10", "2024-06-10").unwrap().days(), 1);
        assert_eq!(period("2024-02-28", "2024-03-01").unwrap().days(), 3);
    }

    #[test]
    fn rejects_reversed_period() {
        assert!(period("2024-06-14", "2024-06-10").is_none());
    }
}
