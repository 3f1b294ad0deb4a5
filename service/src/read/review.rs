//! Read model of reviewed requests ([`LeaveRequest`]s, [`ExpenseClaim`]s and
//! [`ScheduleChange`]s).
//!
//! [`ExpenseClaim`]: crate::domain::ExpenseClaim
//! [`LeaveRequest`]: crate::domain::LeaveRequest
//! [`ScheduleChange`]: crate::domain::ScheduleChange

pub mod list {
    //! Reviewed requests list definitions.

    use crate::domain::{employee, review};

    /// Filter of reviewed requests.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct Filter {
        /// ID of the requesting [`Employee`].
        ///
        /// [`Employee`]: crate::domain::Employee
        pub employee_id: Option<employee::Id>,

        /// [`review::Status`] of a request.
        pub status: Option<review::Status>,
    }
}
