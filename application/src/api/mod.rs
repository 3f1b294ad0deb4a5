//! GraphQL API definitions.

pub mod contact;
pub mod employee;
pub mod employer;
pub mod expense;
pub mod leave;
mod mutation;
pub mod notification;
mod query;
pub mod report;
pub mod review;
pub mod scalar;
pub mod schedule;
mod subscription;
pub mod time_log;

use crate::define_error;

pub use self::{
    employee::Employee,
    employer::Employer,
    expense::Claim as ExpenseClaim,
    leave::Request as LeaveRequest,
    mutation::Mutation,
    notification::Notification,
    query::Query,
    schedule::Change as ScheduleChange,
    subscription::Subscription,
    time_log::TimeLog,
};

/// GraphQL schema.
pub type Schema = juniper::RootNode<'static, Query, Mutation, Subscription>;

/// Converts the provided counter into a GraphQL `Int`, saturating on
/// overflow.
fn int(n: impl TryInto<i32>) -> i32 {
    n.try_into().unwrap_or(i32::MAX)
}

/// Converts the provided GraphQL `Int` into a non-negative counter.
///
/// # Errors
///
/// With [`InputError::NegativeNumber`] if the provided `n` is negative.
fn non_negative(n: i32) -> Result<u32, InputError> {
    u32::try_from(n).map_err(|_| InputError::NegativeNumber)
}

define_error! {
    enum InputError {
        #[code = "INVALID_INPUT"]
        #[status = BAD_REQUEST]
        #[message = "Number must not be negative"]
        NegativeNumber,

        #[code = "INVALID_INPUT"]
        #[status = BAD_REQUEST]
        #[message = "Period must not start after it ends"]
        Period,

        #[code = "INVALID_INPUT"]
        #[status = BAD_REQUEST]
        #[message = "Contract must not start after it ends"]
        Contract,

        #[code = "INVALID_INPUT"]
        #[status = BAD_REQUEST]
        #[message = "Schedule must have working days and end after it starts"]
        Schedule,

        #[code = "INVALID_INPUT"]
        #[status = BAD_REQUEST]
        #[message = "Shift must end after it starts"]
        Shift,
    }
}

define_error! {
    enum EmployeeError {
        #[code = "EMPLOYEE_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Employee` with the specified ID does not exist"]
        NotExists,

        #[code = "NOT_PART_TIME"]
        #[status = CONFLICT]
        #[message = "`Employee` is not a part-time one"]
        NotPartTime,
    }
}

define_error! {
    enum EmployerError {
        #[code = "EMPLOYER_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Employer` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum ContactError {
        #[code = "EMAIL_OCCUPIED"]
        #[status = CONFLICT]
        #[message = "`Email` is occupied by another person"]
        EmailOccupied,
    }
}

define_error! {
    enum LeaveError {
        #[code = "LEAVE_EXPIRED"]
        #[status = CONFLICT]
        #[message = "Leave balance of the `Employee` has expired"]
        Expired,

        #[code = "INSUFFICIENT_LEAVE_BALANCE"]
        #[status = CONFLICT]
        #[message = "Requested more leave days than available"]
        InsufficientBalance,
    }
}

define_error! {
    enum ReviewError {
        #[code = "REVIEWER_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "Reviewing `Employee` does not exist"]
        ReviewerNotExists,

        #[code = "SELF_REVIEW"]
        #[status = FORBIDDEN]
        #[message = "`Employee` cannot review own requests"]
        SelfReview,

        #[code = "NOT_PENDING"]
        #[status = CONFLICT]
        #[message = "Request has been reviewed already"]
        NotPending,
    }
}
