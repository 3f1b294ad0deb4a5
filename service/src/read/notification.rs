//! [`Notification`] read model definition.
//!
//! [`Notification`]: crate::domain::Notification

pub mod list {
    //! [`Notification`]s list definitions.
    //!
    //! [`Notification`]: crate::domain::Notification

    use crate::domain::{employee, notification};
    #[cfg(doc)]
    use crate::domain::Notification;

    /// Filter of [`Notification`]s.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct Filter {
        /// ID of the notified [`Employee`].
        ///
        /// [`Employee`]: crate::domain::Employee
        pub employee_id: Option<employee::Id>,

        /// Whether to select only unread [`Notification`]s.
        pub unread_only: bool,

        /// [`notification::Topic`] of a [`Notification`].
        pub topic: Option<notification::Topic>,
    }
}
