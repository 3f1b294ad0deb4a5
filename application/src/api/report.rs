//! Report-related definitions.

use common::{Date, Money};
use juniper::graphql_object;
use service::{domain::employee, query::report};

use crate::{api, Context};

/// Earnings of a part-time `Employee` for a period of `Date`s.
#[derive(Clone, Debug)]
pub struct Earnings {
    /// ID of the reported `Employee`.
    employee_id: employee::Id,

    /// First reported [`Date`].
    since: Date,

    /// Last reported [`Date`].
    until: Date,

    /// Computed [`report::earnings::Output`].
    output: report::earnings::Output,
}

impl Earnings {
    /// Wraps the provided [`report::earnings::Output`] computed for the
    /// provided [`report::Earnings`] query.
    #[must_use]
    pub fn new(
        query: report::Earnings,
        output: report::earnings::Output,
    ) -> Self {
        Self {
            employee_id: query.employee_id,
            since: query.since,
            until: query.until,
            output,
        }
    }
}

/// Earnings of a part-time `Employee` for a period of `Date`s.
///
/// Only approved `TimeLog`s are paid.
#[graphql_object(name = "EarningsReport", context = Context)]
impl Earnings {
    /// Reported `Employee`.
    #[must_use]
    pub fn employee(&self) -> api::Employee {
        #[expect(unsafe_code, reason = "report is built for existing ones")]
        unsafe {
            api::Employee::new_unchecked(self.employee_id)
        }
    }

    /// First reported `Date` (inclusive).
    #[must_use]
    pub fn since(&self) -> Date {
        self.since
    }

    /// Last reported `Date` (inclusive).
    #[must_use]
    pub fn until(&self) -> Date {
        self.until
    }

    /// IDs of the paid `TimeLog`s, newest first.
    #[must_use]
    pub fn time_logs(&self) -> Vec<api::time_log::Id> {
        self.output.logs.iter().copied().map(Into::into).collect()
    }

    /// Total paid hours.
    #[must_use]
    pub fn hours(&self) -> api::time_log::Hours {
        self.output.hours.into()
    }

    /// Hourly rate of the `Employee`.
    #[must_use]
    pub fn hourly_rate(&self) -> Money {
        self.output.hourly_rate
    }

    /// Total earnings for the period.
    #[must_use]
    pub fn earnings(&self) -> Money {
        self.output.earnings
    }
}
