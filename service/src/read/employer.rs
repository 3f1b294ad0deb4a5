//! [`Employer`] read model definition.
//!
//! [`Employer`]: crate::domain::Employer

pub mod list {
    //! [`Employer`]s list definitions.
    //!
    //! [`Employer`]: crate::domain::Employer

    use crate::{domain::contact::Email, read::Search};
    #[cfg(doc)]
    use crate::domain::Employer;

    /// Filter of [`Employer`]s.
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// [`Search`] in [`Employer`]'s name, company name or email.
        pub search: Option<Search>,

        /// Exact [`Email`] of an [`Employer`].
        pub email: Option<Email>,

        /// Whether to select only active or only deactivated [`Employer`]s.
        pub active: Option<bool>,
    }
}
