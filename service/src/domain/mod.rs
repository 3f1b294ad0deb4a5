//! Domain definitions.

pub mod contact;
pub mod employee;
pub mod employer;
pub mod expense;
pub mod leave;
pub mod notification;
pub mod project;
pub mod review;
pub mod schedule_change;
mod text;
pub mod time_log;

pub use self::{
    employee::Employee, employer::Employer, expense::Claim as ExpenseClaim,
    leave::Request as LeaveRequest, notification::Notification,
    project::Project, review::Review, schedule_change::ScheduleChange,
    time_log::TimeLog,
};
