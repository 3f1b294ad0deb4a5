//! [`TimeLog`] definitions.

#[cfg(doc)]
use common::{Date, DateTime};
use common::{unit, DateOf, DateTimeOf, TimeOfDay};
use derive_more::{Display, Error, From, FromStr, Into};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::{employee, text::define_text, Project, Review};

/// Hours worked by a part-time [`Employee`] on a single day.
///
/// [`Employee`]: crate::domain::Employee
#[derive(Clone, Debug)]
pub struct TimeLog {
    /// ID of this [`TimeLog`].
    pub id: Id,

    /// ID of the logging [`Employee`].
    ///
    /// [`Employee`]: crate::domain::Employee
    pub employee_id: employee::Id,

    /// [`Date`] the work was done on.
    pub date: WorkDate,

    /// [`Shift`] worked.
    pub shift: Shift,

    /// [`Description`] of the done work.
    pub description: Description,

    /// [`Project`] the work was done for.
    pub project: Project,

    /// [`Review`] of this [`TimeLog`].
    pub review: Review,

    /// [`DateTime`] when this [`TimeLog`] was created.
    pub created_at: CreationDateTime,
}

/// ID of a [`TimeLog`].
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

/// Continuous span of work within a single day.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Shift {
    /// [`TimeOfDay`] the work started at.
    started_at: TimeOfDay,

    /// [`TimeOfDay`] the work ended at.
    ended_at: TimeOfDay,
}

impl Shift {
    /// Creates a new [`Shift`].
    ///
    /// # Errors
    ///
    /// With [`EmptyShift`] if `ended_at` is not after `started_at`.
    pub fn new(
        started_at: TimeOfDay,
        ended_at: TimeOfDay,
    ) -> Result<Self, EmptyShift> {
        if ended_at <= started_at {
            return Err(EmptyShift);
        }
        Ok(Self {
            started_at,
            ended_at,
        })
    }

    /// Returns [`TimeOfDay`] the work started at.
    #[must_use]
    pub fn started_at(&self) -> TimeOfDay {
        self.started_at
    }

    /// Returns [`TimeOfDay`] the work ended at.
    #[must_use]
    pub fn ended_at(&self) -> TimeOfDay {
        self.ended_at
    }

    /// Returns the worked hours, rounded to two decimal places.
    #[must_use]
    pub fn hours(&self) -> Decimal {
        let minutes = self.ended_at.minutes_since(self.started_at);
        (Decimal::from(minutes) / Decimal::from(60)).round_dp(2)
    }
}

/// Error of creating a [`Shift`] which doesn't end after it starts.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("`Shift` must end after it starts")]
pub struct EmptyShift;

define_text! {
    #[doc = "Description of the work logged in a [`TimeLog`]."]
    Description(max = 4096)
}

/// [`Date`] the work of a [`TimeLog`] was done on.
pub type WorkDate = DateOf<(TimeLog, unit::Start)>;

/// [`DateTime`] when a [`TimeLog`] was created.
pub type CreationDateTime = DateTimeOf<(TimeLog, unit::Creation)>;

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::TimeOfDay;
    use rust_decimal::Decimal;

    use super::Shift;

    fn shift(start: &str, end: &str) -> Result<Shift, super::EmptyShift> {
        Shift::new(start.parse().unwrap(), end.parse().unwrap())
    }

    #[test]
    fn derives_hours() {
        assert_eq!(
            shift("09:00", "17:30").unwrap().hours(),
            Decimal::from_str("8.5").unwrap(),
        );
        assert_eq!(
            shift("13:00", "13:20").unwrap().hours(),
            Decimal::from_str("0.33").unwrap(),
        );
    }

    #[test]
    fn must_end_after_start() {
        assert!(shift("17:00", "09:00").is_err());
        assert!(shift("09:00", "09:00").is_err());
        assert_eq!(
            shift("09:00", "09:01").unwrap().started_at(),
            TimeOfDay::new(9, 0).unwrap(),
        );
    }
}
