//! Working [`Schedule`] and its [`Change`]s definitions.

use common::{Date, DateTime, TimeOfDay};
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLInputObject, GraphQLScalar};
use service::domain::{self, employee::schedule, schedule_change};
use uuid::Uuid;

use crate::{
    api::{self, scalar},
    Context, Error,
};

/// Weekly working schedule of an `Employee`.
#[derive(Clone, Debug, From)]
pub struct Schedule(domain::employee::Schedule);

/// Weekly working schedule of an `Employee`.
#[graphql_object(context = Context)]
impl Schedule {
    /// Working days, in a week order.
    #[must_use]
    pub fn days(&self) -> Vec<Weekday> {
        self.0.days().map(Into::into).collect()
    }

    /// `TimeOfDay` the working day starts at.
    #[must_use]
    pub fn starts_at(&self) -> TimeOfDay {
        self.0.starts_at()
    }

    /// `TimeOfDay` the working day ends at.
    #[must_use]
    pub fn ends_at(&self) -> TimeOfDay {
        self.0.ends_at()
    }

    /// Timezone the working hours are specified in.
    #[must_use]
    pub fn timezone(&self) -> Timezone {
        self.0.timezone().clone().into()
    }
}

/// Weekly working schedule of an `Employee`.
#[derive(Clone, Debug, GraphQLInputObject)]
pub struct ScheduleInput {
    /// Working days, at least one.
    pub days: Vec<Weekday>,

    /// `TimeOfDay` the working day starts at.
    pub starts_at: TimeOfDay,

    /// `TimeOfDay` the working day ends at, after `startsAt`.
    pub ends_at: TimeOfDay,

    /// Timezone the working hours are specified in.
    pub timezone: Timezone,
}

impl TryFrom<ScheduleInput> for domain::employee::Schedule {
    type Error = Error;

    fn try_from(input: ScheduleInput) -> Result<Self, Self::Error> {
        let ScheduleInput {
            days,
            starts_at,
            ends_at,
            timezone,
        } = input;
        Self::new(
            days.into_iter().map(Into::into),
            starts_at,
            ends_at,
            timezone.into(),
        )
        .map_err(|_| api::InputError::Schedule.into())
    }
}

/// Day of a week.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
pub enum Weekday {
    /// Monday.
    Monday,

    /// Tuesday.
    Tuesday,

    /// Wednesday.
    Wednesday,

    /// Thursday.
    Thursday,

    /// Friday.
    Friday,

    /// Saturday.
    Saturday,

    /// Sunday.
    Sunday,
}

impl From<schedule::Weekday> for Weekday {
    fn from(day: schedule::Weekday) -> Self {
        use schedule::Weekday as D;
        match day {
            D::Monday => Self::Monday,
            D::Tuesday => Self::Tuesday,
            D::Wednesday => Self::Wednesday,
            D::Thursday => Self::Thursday,
            D::Friday => Self::Friday,
            D::Saturday => Self::Saturday,
            D::Sunday => Self::Sunday,
        }
    }
}

impl From<Weekday> for schedule::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Monday => Self::Monday,
            Weekday::Tuesday => Self::Tuesday,
            Weekday::Wednesday => Self::Wednesday,
            Weekday::Thursday => Self::Thursday,
            Weekday::Friday => Self::Friday,
            Weekday::Saturday => Self::Saturday,
            Weekday::Sunday => Self::Sunday,
        }
    }
}

/// Name of a timezone (`UTC`, `Asia/Jakarta`, etc.).
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "Timezone", with = scalar::Via::<schedule::Timezone>)]
pub struct Timezone(schedule::Timezone);

/// Request of an `Employee` to change their working `Schedule`.
#[derive(Clone, Debug, From)]
pub struct Change(domain::ScheduleChange);

/// Request of an `Employee` to change their working `Schedule`.
#[graphql_object(name = "ScheduleChange", context = Context)]
impl Change {
    /// Unique identifier of this `ScheduleChange`.
    #[must_use]
    pub fn id(&self) -> ChangeId {
        self.0.id.into()
    }

    /// Requesting `Employee`.
    #[must_use]
    pub fn employee(&self) -> api::Employee {
        #[expect(
            unsafe_code,
            reason = "`ScheduleChange` is never stored without its `Employee`"
        )]
        unsafe {
            api::Employee::new_unchecked(self.0.employee_id)
        }
    }

    /// `Schedule` the `Employee` had when requesting.
    #[must_use]
    pub fn current(&self) -> Schedule {
        self.0.current.clone().into()
    }

    /// Requested `Schedule`.
    #[must_use]
    pub fn requested(&self) -> Schedule {
        self.0.requested.clone().into()
    }

    /// Reason of this `ScheduleChange`.
    #[must_use]
    pub fn reason(&self) -> ChangeReason {
        self.0.reason.clone().into()
    }

    /// `Date` the requested `Schedule` should be effective from.
    #[must_use]
    pub fn effective_on(&self) -> Date {
        self.0.effective_on.coerce()
    }

    /// `Review` of this `ScheduleChange`.
    #[must_use]
    pub fn review(&self) -> api::review::Review {
        self.0.review.clone().into()
    }

    /// `DateTime` when this `ScheduleChange` was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }
}

/// Unique identifier of a `ScheduleChange`.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, GraphQLScalar, Into, PartialEq,
)]
#[from(schedule_change::Id)]
#[into(schedule_change::Id)]
#[graphql(name = "ScheduleChangeId", transparent)]
pub struct ChangeId(Uuid);

/// Reason of a `ScheduleChange`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ScheduleChangeReason",
    with = scalar::Via::<schedule_change::Reason>,
)]
pub struct ChangeReason(schedule_change::Reason);

#[cfg(test)]
mod spec {
    use common::TimeOfDay;
    use service::domain::employee::{schedule, Schedule};

    use super::{ScheduleInput, Weekday};

    fn input(
        days: Vec<Weekday>,
        starts_at: &str,
        ends_at: &str,
    ) -> ScheduleInput {
        ScheduleInput {
            days,
            starts_at: starts_at.parse::<TimeOfDay>().unwrap(),
            ends_at: ends_at.parse::<TimeOfDay>().unwrap(),
            timezone: schedule::Timezone::new("Asia/Jakarta").unwrap().into(),
        }
    }

    #[test]
    fn builds_schedule_from_input() {
        let schedule = Schedule::try_from(input(
            vec![Weekday::Wednesday, Weekday::Monday],
            "10:00",
            "14:00",
        ))
        .unwrap();

        assert_eq!(
            schedule.days().collect::<Vec<_>>(),
            [schedule::Weekday::Monday, schedule::Weekday::Wednesday],
        );
        assert_eq!(schedule.timezone().to_string(), "Asia/Jakarta");
    }

    #[test]
    fn rejects_invalid_input() {
        let no_days = Schedule::try_from(input(vec![], "09:00", "17:00"));
        assert_eq!(no_days.unwrap_err().code, "INVALID_INPUT");

        let reversed = Schedule::try_from(input(
            vec![Weekday::Monday],
            "17:00",
            "09:00",
        ));
        assert_eq!(reversed.unwrap_err().code, "INVALID_INPUT");
    }
}
