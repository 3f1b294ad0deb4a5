//! Calendar date and time of day utilities.

use std::{cmp::Ordering, fmt, hash, marker::PhantomData, str::FromStr};

use derive_more::{Debug, Display, Error};
use time::{Duration, Month};

/// Untyped calendar date.
pub type Date = DateOf;

/// Calendar date without any time zone attached.
///
/// `Of` parameter only distinguishes what the date describes (contract start,
/// leave extension, etc.) and never affects the representation.
#[derive(Debug)]
pub struct DateOf<Of: ?Sized = ()> {
    /// Inner representation of the date.
    inner: time::Date,

    /// Type parameter describing the kind of date.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateOf<Of> {
    /// Creates a new [`Date`] from the provided calendar components.
    ///
    /// [`None`] is returned if the components don't form a valid date.
    #[must_use]
    pub fn from_calendar(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .map(Self::from)
    }

    /// Returns the current (UTC) [`Date`].
    #[must_use]
    pub fn today() -> Self {
        time::OffsetDateTime::now_utc().date().into()
    }

    /// Returns the year of this [`Date`].
    #[must_use]
    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    /// Returns the month of this [`Date`] in `1..=12` range.
    #[must_use]
    pub fn month(&self) -> u8 {
        self.inner.month().into()
    }

    /// Returns the day of the month of this [`Date`] in `1..=31` range.
    #[must_use]
    pub fn day(&self) -> u8 {
        self.inner.day()
    }

    /// Returns the number of days passed from the `earlier` [`Date`] to this
    /// one.
    ///
    /// Negative if `earlier` is actually later.
    #[must_use]
    pub fn days_since<D: ?Sized>(&self, earlier: DateOf<D>) -> i64 {
        (self.inner - earlier.inner).whole_days()
    }

    /// Returns the [`Date`] shifted by the provided number of `days`.
    ///
    /// [`None`] is returned if the result is out of the supported range.
    #[must_use]
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        self.inner.checked_add(Duration::days(days)).map(Self::from)
    }

    /// Coerces one kind of [`Date`] into another.
    #[must_use]
    pub fn coerce<NewOf: ?Sized>(self) -> DateOf<NewOf> {
        DateOf {
            inner: self.inner,
            _of: PhantomData,
        }
    }
}

impl<Of: ?Sized> Copy for DateOf<Of> {}
impl<Of: ?Sized> Clone for DateOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateOf<Of> {}
impl<Of: ?Sized> PartialEq for DateOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Of: ?Sized> hash::Hash for DateOf<Of> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<Of: ?Sized> Ord for DateOf<Of> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<Of: ?Sized> PartialOrd for DateOf<Of> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Of: ?Sized> From<time::Date> for DateOf<Of> {
    fn from(inner: time::Date) -> Self {
        Self {
            inner,
            _of: PhantomData,
        }
    }
}

impl<Of: ?Sized> From<DateOf<Of>> for time::Date {
    fn from(date: DateOf<Of>) -> Self {
        date.inner
    }
}

impl<Of: ?Sized> fmt::Display for DateOf<Of> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month(),
            self.day(),
        )
    }
}

impl<Of: ?Sized> FromStr for DateOf<Of> {
    type Err = ParseError;

    /// Parses a [`Date`] from the `YYYY-MM-DD` format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '-');
        let (Some(year), Some(month), Some(day)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseError::Format);
        };
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(ParseError::Format);
        }

        let year = year.parse().map_err(|_| ParseError::Format)?;
        let month = month.parse().map_err(|_| ParseError::Format)?;
        let day = day.parse().map_err(|_| ParseError::Format)?;
        Self::from_calendar(year, month, day).ok_or(ParseError::OutOfRange)
    }
}

/// Error of parsing a [`Date`] or a [`TimeOfDay`] from a string.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum ParseError {
    /// Input doesn't match the expected format.
    #[display("invalid format")]
    Format,

    /// Input has an out of range component.
    #[display("component out of range")]
    OutOfRange,
}

/// Wall-clock time of day with a minute precision.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TimeOfDay(time::Time);

impl TimeOfDay {
    /// Creates a new [`TimeOfDay`] from the provided `hour` and `minute`.
    ///
    /// [`None`] is returned if the components are out of range.
    #[must_use]
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        time::Time::from_hms(hour, minute, 0).ok().map(Self)
    }

    /// Returns the hour of this [`TimeOfDay`].
    #[must_use]
    pub fn hour(&self) -> u8 {
        self.0.hour()
    }

    /// Returns the minute of this [`TimeOfDay`].
    #[must_use]
    pub fn minute(&self) -> u8 {
        self.0.minute()
    }

    /// Returns the number of minutes passed from the `earlier`
    /// [`TimeOfDay`] to this one.
    ///
    /// Negative if `earlier` is actually later.
    #[must_use]
    pub fn minutes_since(&self, earlier: Self) -> i64 {
        (self.0 - earlier.0).whole_minutes()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseError;

    /// Parses a [`TimeOfDay`] from the `HH:MM` format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s.split_once(':').ok_or(ParseError::Format)?;
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(ParseError::Format);
        }

        let hour = hour.parse().map_err(|_| ParseError::Format)?;
        let minute = minute.parse().map_err(|_| ParseError::Format)?;
        Self::new(hour, minute).ok_or(ParseError::OutOfRange)
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use std::str::FromStr as _;

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Calendar date in `YYYY-MM-DD` format.
    #[graphql_scalar(with = Self, parse_token(String))]
    type Date = crate::Date;

    impl Date {
        fn to_output<S: ScalarValue>(d: &Date) -> Value<S> {
            Value::scalar(d.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Date` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::from_str(s).map_err(|e| {
                        format!("Cannot parse `Date` input scalar: {e}")
                    })
                })
        }
    }

    /// Time of day in `HH:MM` 24-hour format.
    #[graphql_scalar(with = Self, parse_token(String))]
    type TimeOfDay = crate::TimeOfDay;

    impl TimeOfDay {
        fn to_output<S: ScalarValue>(t: &TimeOfDay) -> Value<S> {
            Value::scalar(t.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `TimeOfDay` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::from_str(s).map_err(|e| {
                        format!("Cannot parse `TimeOfDay` input scalar: {e}")
                    })
                })
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::{Date, ParseError, TimeOfDay};

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        let d = Date::from_str("2024-02-29").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2024, 2, 29));
        assert_eq!(d.to_string(), "2024-02-29");

        assert_eq!(Date::from_str("2023-02-29"), Err(ParseError::OutOfRange));
        assert_eq!(Date::from_str("2024-13-01"), Err(ParseError::OutOfRange));
        assert_eq!(Date::from_str("2024-3-01"), Err(ParseError::Format));
        assert_eq!(Date::from_str("20240301"), Err(ParseError::Format));
        assert_eq!(Date::from_str("not-a-date"), Err(ParseError::Format));
    }

    #[test]
    fn counts_days_between_dates() {
        assert_eq!(date("2024-03-01").days_since(date("2024-02-28")), 2);
        assert_eq!(date("2024-02-28").days_since(date("2024-03-01")), -2);
        assert_eq!(date("2024-12-31").days_since(date("2024-12-31")), 0);
        assert_eq!(
            date("2024-12-31").checked_add_days(1),
            Some(date("2025-01-01")),
        );
    }

    #[test]
    fn parses_time_of_day() {
        let t = TimeOfDay::from_str("09:05").unwrap();
        assert_eq!((t.hour(), t.minute()), (9, 5));
        assert_eq!(t.to_string(), "09:05");
        assert_eq!(TimeOfDay::from_str("9:30").unwrap().to_string(), "09:30");

        assert_eq!(TimeOfDay::from_str("24:00"), Err(ParseError::OutOfRange));
        assert_eq!(TimeOfDay::from_str("12:5"), Err(ParseError::Format));
        assert_eq!(TimeOfDay::from_str("noon"), Err(ParseError::Format));
    }

    #[test]
    fn measures_minutes_between_times() {
        let start = TimeOfDay::new(9, 0).unwrap();
        let end = TimeOfDay::new(13, 30).unwrap();

        assert_eq!(end.minutes_since(start), 270);
        assert_eq!(start.minutes_since(end), -270);
    }
}
