//! Working [`Schedule`] of an [`Employee`].
//!
//! [`Employee`]: crate::domain::Employee

use std::collections::BTreeSet;

use common::{define_kind, TimeOfDay};
use derive_more::{Display, Error};

use crate::domain::text::define_text;

/// Weekly working schedule.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Schedule {
    /// Working [`Weekday`]s.
    days: BTreeSet<Weekday>,

    /// [`TimeOfDay`] the working day starts at.
    starts_at: TimeOfDay,

    /// [`TimeOfDay`] the working day ends at.
    ends_at: TimeOfDay,

    /// [`Timezone`] the working hours are specified in.
    timezone: Timezone,
}

impl Schedule {
    /// Creates a new [`Schedule`] out of the provided parts.
    ///
    /// # Errors
    ///
    /// - [`InvalidSchedule::NoDays`] if no working days are provided;
    /// - [`InvalidSchedule::Hours`] if `ends_at` is not after `starts_at`.
    pub fn new(
        days: impl IntoIterator<Item = Weekday>,
        starts_at: TimeOfDay,
        ends_at: TimeOfDay,
        timezone: Timezone,
    ) -> Result<Self, InvalidSchedule> {
        let days: BTreeSet<_> = days.into_iter().collect();
        if days.is_empty() {
            return Err(InvalidSchedule::NoDays);
        }
        if ends_at <= starts_at {
            return Err(InvalidSchedule::Hours);
        }
        Ok(Self {
            days,
            starts_at,
            ends_at,
            timezone,
        })
    }

    /// Returns working [`Weekday`]s of this [`Schedule`] in a week order.
    pub fn days(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.days.iter().copied()
    }

    /// Returns [`TimeOfDay`] the working day starts at.
    #[must_use]
    pub fn starts_at(&self) -> TimeOfDay {
        self.starts_at
    }

    /// Returns [`TimeOfDay`] the working day ends at.
    #[must_use]
    pub fn ends_at(&self) -> TimeOfDay {
        self.ends_at
    }

    /// Returns [`Timezone`] of this [`Schedule`].
    #[must_use]
    pub fn timezone(&self) -> &Timezone {
        &self.timezone
    }
}

impl Default for Schedule {
    /// Monday to Friday, 09:00-17:00 UTC.
    fn default() -> Self {
        let (Some(starts_at), Some(ends_at), Some(timezone)) = (
            TimeOfDay::new(9, 0),
            TimeOfDay::new(17, 0),
            Timezone::new("UTC"),
        ) else {
            unreachable!("default schedule parts are valid")
        };
        Self {
            days: [
                Weekday::Monday,
                Weekday::Tuesday,
                Weekday::Wednesday,
                Weekday::Thursday,
                Weekday::Friday,
            ]
            .into(),
            starts_at,
            ends_at,
            timezone,
        }
    }
}

define_kind! {
    #[doc = "Day of a week."]
    enum Weekday {
        #[doc = "Monday."]
        Monday = 1,

        #[doc = "Tuesday."]
        Tuesday = 2,

        #[doc = "Wednesday."]
        Wednesday = 3,

        #[doc = "Thursday."]
        Thursday = 4,

        #[doc = "Friday."]
        Friday = 5,

        #[doc = "Saturday."]
        Saturday = 6,

        #[doc = "Sunday."]
        Sunday = 7,
    }
}

define_text! {
    #[doc = "Name of a timezone (`UTC`, `Asia/Jakarta`, etc.)."]
    Timezone(max = 64)
}

/// Error of constructing an invalid [`Schedule`].
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum InvalidSchedule {
    /// No working days provided.
    #[display("`Schedule` must have at least one working day")]
    NoDays,

    /// Working day ends before it starts.
    #[display("`Schedule` working day must end after it starts")]
    Hours,
}

#[cfg(test)]
mod spec {
    use common::TimeOfDay;

    use super::{InvalidSchedule, Schedule, Timezone, Weekday};

    fn time(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn default_is_working_week() {
        let schedule = Schedule::default();

        assert_eq!(
            schedule.days().collect::<Vec<_>>(),
            [
                Weekday::Monday,
                Weekday::Tuesday,
                Weekday::Wednesday,
                Weekday::Thursday,
                Weekday::Friday,
            ],
        );
        assert_eq!(schedule.starts_at().to_string(), "09:00");
        assert_eq!(schedule.ends_at().to_string(), "17:00");
        assert_eq!(schedule.timezone().to_string(), "UTC");
    }

    #[test]
    fn deduplicates_and_orders_days() {
        let schedule = Schedule::new(
            [Weekday::Friday, Weekday::Monday, Weekday::Friday],
            time("10:00"),
            time("14:00"),
            Timezone::new("Asia/Jakarta").unwrap(),
        )
        .unwrap();

        assert_eq!(
            schedule.days().collect::<Vec<_>>(),
            [Weekday::Monday, Weekday::Friday],
        );
    }

    #[test]
    fn rejects_invalid_parts() {
        let tz = Timezone::new("UTC").unwrap();

        assert_eq!(
            Schedule::new([], time("09:00"), time("17:00"), tz.clone()),
            Err(InvalidSchedule::NoDays),
        );
        assert_eq!(
            Schedule::new(
                [Weekday::Monday],
                time("17:00"),
                time("09:00"),
                tz.clone(),
            ),
            Err(InvalidSchedule::Hours),
        );
        assert_eq!(
            Schedule::new([Weekday::Monday], time("09:00"), time("09:00"), tz),
            Err(InvalidSchedule::Hours),
        );
    }
}
