//! [`Command`] definition.

pub mod create_employee;
pub mod create_employer;
pub mod deactivate_employer;
pub mod grant_leave_extension;
pub mod log_time;
pub mod mark_notification_read;
pub mod request_schedule_change;
pub mod review_expense_claim;
pub mod review_leave_request;
pub mod review_schedule_change;
pub mod review_time_log;
pub mod submit_expense_claim;
pub mod submit_leave_request;
pub mod update_employee;
pub mod update_employer;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    create_employee::CreateEmployee, create_employer::CreateEmployer,
    deactivate_employer::DeactivateEmployer,
    grant_leave_extension::GrantLeaveExtension, log_time::LogTime,
    mark_notification_read::MarkNotificationRead,
    request_schedule_change::RequestScheduleChange,
    review_expense_claim::ReviewExpenseClaim,
    review_leave_request::ReviewLeaveRequest,
    review_schedule_change::ReviewScheduleChange,
    review_time_log::ReviewTimeLog, submit_expense_claim::SubmitExpenseClaim,
    submit_leave_request::SubmitLeaveRequest,
    update_employee::UpdateEmployee, update_employer::UpdateEmployer,
};
