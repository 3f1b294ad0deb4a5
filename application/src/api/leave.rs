//! Leave-related definitions.

use std::time::Duration;

use common::{Date, DateTime, Percent};
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLScalar};
use service::{domain, query};
use uuid::Uuid;

use crate::{
    api::{self, scalar},
    Context, Error,
};

/// Leave balance of an `Employee` evaluated on some `Date`.
#[derive(Clone, Copy, Debug)]
pub struct Balance {
    /// [`Date`] this [`Balance`] is evaluated on.
    on: Date,

    /// Underlying [`domain::leave::Balance`].
    balance: domain::leave::Balance,

    /// Indicator whether this [`Balance`] expires soon.
    expires_soon: bool,

    /// Share of the earned leave days being already used.
    usage: Percent,

    /// Number of started months since the contract start.
    months_since_contract: u32,
}

impl Balance {
    /// Evaluates the provided [`domain::leave::Accrual`] on the provided
    /// [`Date`], warning about the expiration within the `warning` period.
    #[must_use]
    pub fn compute(
        accrual: domain::leave::Accrual,
        on: Date,
        warning: Duration,
    ) -> Self {
        let balance = accrual.compute(on);
        Self {
            on,
            balance,
            expires_soon: balance.expires_soon(on, warning),
            usage: balance.usage(),
            months_since_contract: accrual.months_since_contract(on),
        }
    }
}

impl From<query::leave_balance::Output> for Balance {
    fn from(output: query::leave_balance::Output) -> Self {
        let query::leave_balance::Output {
            employee: _,
            on,
            balance,
            expires_soon,
            usage,
            months_since_contract,
        } = output;
        Self {
            on,
            balance,
            expires_soon,
            usage,
            months_since_contract,
        }
    }
}

/// Leave balance of an `Employee` evaluated on some `Date`.
#[graphql_object(name = "LeaveBalance", context = Context)]
impl Balance {
    /// `Date` this `LeaveBalance` is evaluated on.
    #[must_use]
    pub fn evaluated_on(&self) -> Date {
        self.on
    }

    /// Number of leave days earned up to the evaluation `Date`.
    ///
    /// One day per each started month of the contract.
    #[must_use]
    pub fn earned_days(&self) -> i32 {
        api::int(self.balance.earned_days)
    }

    /// Number of leave days already used by approved `LeaveRequest`s.
    #[must_use]
    pub fn used_days(&self) -> i32 {
        api::int(self.balance.used_days)
    }

    /// Number of leave days still available to request.
    ///
    /// Always zero once expired.
    #[must_use]
    pub fn available_days(&self) -> i32 {
        api::int(self.balance.available_days)
    }

    /// Indicator whether the earned leave days have expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.balance.is_expired
    }

    /// `Date` the earned leave days expire after.
    #[must_use]
    pub fn effective_end_date(&self) -> Date {
        self.balance.effective_end
    }

    /// Indicator whether the expiration is extended beyond the contract end.
    #[must_use]
    pub fn has_extension(&self) -> bool {
        self.balance.has_extension
    }

    /// Indicator whether the earned leave days expire soon.
    #[must_use]
    pub fn expires_soon(&self) -> bool {
        self.expires_soon
    }

    /// Share of the earned leave days being already used, capped at `100`.
    #[must_use]
    pub fn usage_percentage(&self) -> Percent {
        self.usage
    }

    /// Number of started months since the contract start.
    #[must_use]
    pub fn months_since_contract(&self) -> i32 {
        api::int(self.months_since_contract)
    }
}

/// Request of an `Employee` to leave work.
#[derive(Clone, Debug, From)]
pub struct Request(domain::LeaveRequest);

/// Request of an `Employee` to leave work.
#[graphql_object(name = "LeaveRequest", context = Context)]
impl Request {
    /// Unique identifier of this `LeaveRequest`.
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Requesting `Employee`.
    #[must_use]
    pub fn employee(&self) -> api::Employee {
        #[expect(
            unsafe_code,
            reason = "`LeaveRequest` is never stored without its `Employee`"
        )]
        unsafe {
            api::Employee::new_unchecked(self.0.employee_id)
        }
    }

    /// First day of the leave.
    #[must_use]
    pub fn start_date(&self) -> Date {
        self.0.period.start().coerce()
    }

    /// Last day of the leave (inclusive).
    #[must_use]
    pub fn end_date(&self) -> Date {
        self.0.period.end().coerce()
    }

    /// Number of leave days, both ends included.
    #[must_use]
    pub fn days(&self) -> i32 {
        api::int(self.0.period.days())
    }

    /// Kind of this `LeaveRequest`.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.0.kind.into()
    }

    /// Reason of this `LeaveRequest`.
    #[must_use]
    pub fn reason(&self) -> Reason {
        self.0.reason.clone().into()
    }

    /// `Review` of this `LeaveRequest`.
    #[must_use]
    pub fn review(&self) -> api::review::Review {
        self.0.review.clone().into()
    }

    /// `DateTime` when this `LeaveRequest` was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }
}

/// Unique identifier of a `LeaveRequest`.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, GraphQLScalar, Into, PartialEq,
)]
#[from(domain::leave::Id)]
#[into(domain::leave::Id)]
#[graphql(name = "LeaveRequestId", transparent)]
pub struct Id(Uuid);

/// Kind of a `LeaveRequest`.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "LeaveKind")]
pub enum Kind {
    /// Annual vacation.
    Vacation,

    /// Sick leave.
    Sick,

    /// Personal day off.
    Personal,

    /// Any other reason.
    Other,
}

impl From<domain::leave::Kind> for Kind {
    fn from(kind: domain::leave::Kind) -> Self {
        use domain::leave::Kind as K;
        match kind {
            K::Vacation => Self::Vacation,
            K::Sick => Self::Sick,
            K::Personal => Self::Personal,
            K::Other => Self::Other,
        }
    }
}

impl From<Kind> for domain::leave::Kind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Vacation => Self::Vacation,
            Kind::Sick => Self::Sick,
            Kind::Personal => Self::Personal,
            Kind::Other => Self::Other,
        }
    }
}

/// Reason of a `LeaveRequest`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "LeaveReason", with = scalar::Via::<domain::leave::Reason>)]
pub struct Reason(domain::leave::Reason);

/// Builds a [`domain::leave::Period`] out of the provided `start` and `end`
/// [`Date`]s.
///
/// # Errors
///
/// With [`api::InputError::Period`] if `start` is after `end`.
pub(crate) fn period(
    start: Date,
    end: Date,
) -> Result<domain::leave::Period, Error> {
    domain::leave::Period::new(start.coerce(), end.coerce())
        .ok_or_else(|| api::InputError::Period.into())
}

/// Extension of the leave expiration beyond the contract end.
#[derive(Clone, Debug, From)]
pub struct Extension(domain::leave::Extension);

/// Extension of the leave expiration beyond the contract end.
#[graphql_object(name = "LeaveExtension", context = Context)]
impl Extension {
    /// `Date` the leave expiration is extended until (inclusive).
    #[must_use]
    pub fn extended_until(&self) -> Date {
        self.0.extended_until.coerce()
    }

    /// Reason of this `LeaveExtension`.
    #[must_use]
    pub fn reason(&self) -> ExtensionReason {
        self.0.reason.clone().into()
    }

    /// `Employee` who approved this `LeaveExtension`.
    #[must_use]
    pub fn approved_by(&self) -> api::Employee {
        #[expect(
            unsafe_code,
            reason = "approver existence is checked on granting"
        )]
        unsafe {
            api::Employee::new_unchecked(self.0.approved_by)
        }
    }

    /// `DateTime` when this `LeaveExtension` was approved.
    #[must_use]
    pub fn approved_at(&self) -> DateTime {
        self.0.approved_at.coerce()
    }
}

/// Reason of a `LeaveExtension`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "LeaveExtensionReason",
    with = scalar::Via::<domain::leave::extension::Reason>,
)]
pub struct ExtensionReason(domain::leave::extension::Reason);
