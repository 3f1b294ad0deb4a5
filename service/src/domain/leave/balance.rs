//! Leave balance accrual.
//!
//! An employee earns one leave day per each started month of the contract
//! window, counted up to the evaluation date. Earned days expire together
//! with the contract (or its [`Extension`]).
//!
//! [`Extension`]: super::Extension

use std::time::Duration;

use common::{Date, Percent};

/// Inputs of a leave balance computation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Accrual {
    /// [`Date`] the contract window starts at.
    pub contract_start: Date,

    /// [`Date`] the contract window ends at.
    pub contract_end: Date,

    /// Number of leave days already used.
    pub used_days: u32,

    /// [`Date`] the leave expiration is extended until, if any.
    pub extended_until: Option<Date>,
}

impl Accrual {
    /// Computes the [`Balance`] of this [`Accrual`] as of the provided
    /// `today` [`Date`].
    #[must_use]
    pub fn compute(&self, today: Date) -> Balance {
        let effective_end = self.extended_until.unwrap_or(self.contract_end);
        let evaluation_end = today.min(effective_end);

        let earned_days = clamp_months(started_months(
            self.contract_start,
            evaluation_end,
        ));
        let is_expired = today > effective_end;
        let available_days = if is_expired {
            0
        } else {
            earned_days.saturating_sub(self.used_days)
        };

        Balance {
            earned_days,
            used_days: self.used_days,
            available_days,
            is_expired,
            effective_end,
            has_extension: self.extended_until.is_some(),
        }
    }

    /// Returns the number of started months since the contract start as of
    /// the provided `today` [`Date`], not limited by the contract end.
    #[must_use]
    pub fn months_since_contract(&self, today: Date) -> u32 {
        clamp_months(started_months(self.contract_start, today))
    }
}

/// Leave balance computed out of an [`Accrual`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Balance {
    /// Number of leave days earned up to the evaluation date.
    pub earned_days: u32,

    /// Number of leave days already used.
    pub used_days: u32,

    /// Number of leave days still available to request.
    ///
    /// Always zero once [`Balance::is_expired`].
    pub available_days: u32,

    /// Indicator whether the earned leave days have expired.
    pub is_expired: bool,

    /// [`Date`] the earned leave days expire after.
    pub effective_end: Date,

    /// Indicator whether the expiration was extended beyond the contract end.
    pub has_extension: bool,
}

impl Balance {
    /// Indicates whether this [`Balance`] is not expired yet, but expires
    /// in less than the provided `warning` period as of `today`.
    #[must_use]
    pub fn expires_soon(&self, today: Date, warning: Duration) -> bool {
        if self.is_expired {
            return false;
        }
        u64::try_from(self.effective_end.days_since(today)).is_ok_and(|days| {
            Duration::from_secs(days.saturating_mul(86_400)) < warning
        })
    }

    /// Returns the share of the earned leave days being already used.
    ///
    /// Capped at `100%` and zero when nothing is earned yet.
    #[must_use]
    pub fn usage(&self) -> Percent {
        Percent::ratio(self.used_days, self.earned_days)
    }
}

/// Counts months started from the `start` [`Date`] up to the `end` one.
///
/// The month of the `end` is counted only once its day reaches the day of
/// the `start`.
fn started_months(start: Date, end: Date) -> i64 {
    let years = i64::from(end.year()) - i64::from(start.year());
    let months = i64::from(end.month()) - i64::from(start.month());
    let reached = i64::from(end.day() >= start.day());
    years * 12 + months + reached
}

/// Clamps the provided number of `months` into non-negative days.
fn clamp_months(months: i64) -> u32 {
    u32::try_from(months.max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::Date;

    use super::Accrual;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn accrual(used_days: u32, extended_until: Option<&str>) -> Accrual {
        Accrual {
            contract_start: date("2023-01-15"),
            contract_end: date("2024-12-31"),
            used_days,
            extended_until: extended_until.map(date),
        }
    }

    const MONTH: Duration = Duration::from_secs(30 * 86_400);

    #[test]
    fn earns_day_per_started_month() {
        let balance = accrual(0, None).compute(date("2024-03-20"));

        assert_eq!(balance.earned_days, 15);
        assert_eq!(balance.used_days, 0);
        assert_eq!(balance.available_days, 15);
        assert!(!balance.is_expired);
        assert_eq!(balance.effective_end, date("2024-12-31"));
        assert!(!balance.has_extension);
    }

    #[test]
    fn month_counts_once_day_is_reached() {
        let acc = accrual(0, None);

        assert_eq!(acc.compute(date("2024-03-14")).earned_days, 14);
        assert_eq!(acc.compute(date("2024-03-15")).earned_days, 15);
    }

    #[test]
    fn expires_after_contract_end() {
        let balance = accrual(0, None).compute(date("2025-01-01"));

        assert_eq!(balance.earned_days, 24);
        assert_eq!(balance.available_days, 0);
        assert!(balance.is_expired);
        assert_eq!(balance.effective_end, date("2024-12-31"));
    }

    #[test]
    fn contract_end_day_is_not_expired() {
        let balance = accrual(4, None).compute(date("2024-12-31"));

        assert!(!balance.is_expired);
        assert_eq!(balance.earned_days, 24);
        assert_eq!(balance.available_days, 20);
    }

    #[test]
    fn extension_postpones_expiration() {
        let balance =
            accrual(0, Some("2025-06-30")).compute(date("2025-01-01"));

        assert!(!balance.is_expired);
        assert!(balance.has_extension);
        assert_eq!(balance.effective_end, date("2025-06-30"));
        assert_eq!(balance.earned_days, 24);
        assert_eq!(balance.available_days, 24);
    }

    #[test]
    fn extension_is_not_limited_by_contract_end() {
        let balance =
            accrual(0, Some("2024-06-30")).compute(date("2024-08-01"));

        assert!(balance.is_expired);
        assert_eq!(balance.effective_end, date("2024-06-30"));
        assert_eq!(balance.earned_days, 18);
    }

    #[test]
    fn overused_balance_is_not_negative() {
        let balance = accrual(20, None).compute(date("2024-03-20"));

        assert_eq!(balance.earned_days, 15);
        assert_eq!(balance.used_days, 20);
        assert_eq!(balance.available_days, 0);
    }

    /// One day of a zero-length contract earns a whole leave day.
    #[test]
    fn same_day_contract_earns_one_day() {
        let today = date("2024-05-10");
        let balance = Accrual {
            contract_start: today,
            contract_end: today,
            used_days: 0,
            extended_until: None,
        }
        .compute(today);

        assert_eq!(balance.earned_days, 1);
        assert_eq!(balance.available_days, 1);
        assert!(!balance.is_expired);
    }

    #[test]
    fn nothing_earned_before_contract_start() {
        let balance = accrual(0, None).compute(date("2022-11-01"));

        assert_eq!(balance.earned_days, 0);
        assert_eq!(balance.available_days, 0);
        assert!(!balance.is_expired);
    }

    #[test]
    fn earned_days_never_decrease_until_end() {
        let acc = accrual(0, None);
        let mut day = date("2023-01-01");
        let mut earned = 0;
        while day <= date("2024-12-31") {
            let balance = acc.compute(day);
            assert!(balance.earned_days >= earned, "decreased at {day}");
            assert!(balance.available_days <= balance.earned_days);
            earned = balance.earned_days;
            day = day.checked_add_days(1).unwrap();
        }
        assert_eq!(earned, 24);
    }

    #[test]
    fn computation_is_idempotent() {
        let acc = accrual(3, Some("2025-03-01"));
        let today = date("2024-07-04");

        assert_eq!(acc.compute(today), acc.compute(today));
    }

    #[test]
    fn warns_about_soon_expiration() {
        let acc = accrual(0, None);

        let far = acc.compute(date("2024-11-30"));
        assert!(!far.expires_soon(date("2024-11-30"), MONTH));

        let near = acc.compute(date("2024-12-02"));
        assert!(near.expires_soon(date("2024-12-02"), MONTH));

        let last = acc.compute(date("2024-12-31"));
        assert!(last.expires_soon(date("2024-12-31"), MONTH));

        let expired = acc.compute(date("2025-01-01"));
        assert!(!expired.expires_soon(date("2025-01-01"), MONTH));
    }

    #[test]
    fn reports_usage_share() {
        assert_eq!(
            accrual(6, None).compute(date("2024-12-31")).usage().to_string(),
            "25",
        );
        assert_eq!(
            accrual(30, None).compute(date("2024-12-31")).usage().to_string(),
            "100",
        );
        assert_eq!(
            accrual(0, None).compute(date("2022-01-01")).usage().to_string(),
            "0",
        );
    }

    #[test]
    fn counts_months_since_contract() {
        let acc = accrual(0, None);

        assert_eq!(acc.months_since_contract(date("2024-03-20")), 15);
        assert_eq!(acc.months_since_contract(date("2026-01-15")), 37);
        assert_eq!(acc.months_since_contract(date("2022-01-01")), 0);
    }
}
