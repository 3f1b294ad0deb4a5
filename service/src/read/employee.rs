//! [`Employee`] read model definition.
//!
//! [`Employee`]: crate::domain::Employee

pub mod list {
    //! [`Employee`]s list definitions.
    //!
    //! [`Employee`]: crate::domain::Employee

    use crate::{
        domain::{contact::Email, employee, employer, Project},
        read::Search,
    };
    #[cfg(doc)]
    use crate::domain::Employee;

    /// Filter of [`Employee`]s.
    ///
    /// Default [`Filter`] selects all the [`Employee`]s.
    #[derive(Clone, Debug, Default)]
    pub struct Filter {
        /// [`Search`] in [`Employee`]'s name or email.
        pub search: Option<Search>,

        /// Exact [`Email`] of an [`Employee`].
        pub email: Option<Email>,

        /// [`employee::Role`] of an [`Employee`].
        pub role: Option<employee::Role>,

        /// [`Project`] an [`Employee`] is assigned to.
        pub project: Option<Project>,

        /// [`employee::EmploymentType`] of an [`Employee`].
        pub employment_type: Option<employee::EmploymentType>,

        /// ID of the [`Employer`] of an [`Employee`].
        ///
        /// [`Employer`]: crate::domain::Employer
        pub employer_id: Option<employer::Id>,
    }
}
