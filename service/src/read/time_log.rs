//! [`TimeLog`] read model definition.
//!
//! [`TimeLog`]: crate::domain::TimeLog

pub mod list {
    //! [`TimeLog`]s list definitions.
    //!
    //! [`TimeLog`]: crate::domain::TimeLog

    use common::Date;

    use crate::domain::{employee, review};
    #[cfg(doc)]
    use crate::domain::TimeLog;

    /// Filter of [`TimeLog`]s.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct Filter {
        /// ID of the logging [`Employee`].
        ///
        /// [`Employee`]: crate::domain::Employee
        pub employee_id: Option<employee::Id>,

        /// [`review::Status`] of a [`TimeLog`].
        pub status: Option<review::Status>,

        /// Earliest work [`Date`] of a [`TimeLog`] (inclusive).
        pub since: Option<Date>,

        /// Latest work [`Date`] of a [`TimeLog`] (inclusive).
        pub until: Option<Date>,
    }
}
