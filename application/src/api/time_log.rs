//! [`TimeLog`]-related definitions.

use common::{Date, DateTime, TimeOfDay};
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLScalar};
use rust_decimal::Decimal;
use service::domain::{self, time_log};
use uuid::Uuid;

use crate::{
    api::{self, scalar},
    Context, Error,
};

/// Hours worked by a part-time `Employee` on a single day.
#[derive(Clone, Debug, From)]
pub struct TimeLog(domain::TimeLog);

/// Hours worked by a part-time `Employee` on a single day.
#[graphql_object(context = Context)]
impl TimeLog {
    /// Unique identifier of this `TimeLog`.
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Logging `Employee`.
    #[must_use]
    pub fn employee(&self) -> api::Employee {
        #[expect(
            unsafe_code,
            reason = "`TimeLog` is never stored without its `Employee`"
        )]
        unsafe {
            api::Employee::new_unchecked(self.0.employee_id)
        }
    }

    /// `Date` the work was done on.
    #[must_use]
    pub fn date(&self) -> Date {
        self.0.date.coerce()
    }

    /// `TimeOfDay` the work started at.
    #[must_use]
    pub fn started_at(&self) -> TimeOfDay {
        self.0.shift.started_at()
    }

    /// `TimeOfDay` the work ended at.
    #[must_use]
    pub fn ended_at(&self) -> TimeOfDay {
        self.0.shift.ended_at()
    }

    /// Worked hours, rounded to two decimal places.
    #[must_use]
    pub fn hours(&self) -> Hours {
        self.0.shift.hours().into()
    }

    /// Description of the done work.
    #[must_use]
    pub fn description(&self) -> Description {
        self.0.description.clone().into()
    }

    /// `Project` the work was done for.
    #[must_use]
    pub fn project(&self) -> api::employee::Project {
        self.0.project.clone().into()
    }

    /// `Review` of this `TimeLog`.
    #[must_use]
    pub fn review(&self) -> api::review::Review {
        self.0.review.clone().into()
    }

    /// `DateTime` when this `TimeLog` was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }
}

/// Unique identifier of a `TimeLog`.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, GraphQLScalar, Into, PartialEq,
)]
#[from(time_log::Id)]
#[into(time_log::Id)]
#[graphql(name = "TimeLogId", transparent)]
pub struct Id(Uuid);

/// Description of the work logged in a `TimeLog`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "TimeLogDescription",
    with = scalar::Via::<time_log::Description>,
)]
pub struct Description(time_log::Description);

/// Decimal number of worked hours (`7.5`, `0.33`, etc.).
#[derive(AsRef, Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(with = scalar::Via::<Decimal>)]
pub struct Hours(Decimal);

/// Builds a [`time_log::Shift`] out of the provided `started_at` and
/// `ended_at` [`TimeOfDay`]s.
///
/// # Errors
///
/// With [`api::InputError::Shift`] if `ended_at` is not after `started_at`.
pub(crate) fn shift(
    started_at: TimeOfDay,
    ended_at: TimeOfDay,
) -> Result<time_log::Shift, Error> {
    time_log::Shift::new(started_at, ended_at)
        .map_err(|_| api::InputError::Shift.into())
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::TimeOfDay;
    use rust_decimal::Decimal;

    use super::{shift, Hours};

    fn time(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn derives_hours_of_shift() {
        let shift = shift(time("09:00"), time("16:30")).unwrap();

        assert_eq!(
            Decimal::from(Hours::from(shift.hours())),
            Decimal::from_str("7.5").unwrap(),
        );
    }

    #[test]
    fn rejects_empty_shift() {
        let err = shift(time("17:00"), time("09:00")).unwrap_err();

        assert_eq!(err.code, "INVALID_INPUT");
    }
}
