//! [`Employer`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf};
use derive_more::{Display, From, FromStr, Into};
use uuid::Uuid;

use super::{
    contact::{Address, Email, Name, Phone},
    text::define_text,
};

/// Company employing [`Employee`]s.
///
/// [`Employee`]: crate::domain::Employee
#[derive(Clone, Debug)]
pub struct Employer {
    /// ID of this [`Employer`].
    pub id: Id,

    /// [`Name`] of the contact person of this [`Employer`].
    pub name: Name,

    /// [`Email`] of this [`Employer`].
    pub email: Email,

    /// [`Phone`] of this [`Employer`].
    pub phone: Option<Phone>,

    /// [`Address`] of this [`Employer`].
    pub address: Option<Address>,

    /// [`CompanyName`] of this [`Employer`].
    pub company_name: CompanyName,

    /// [`Industry`] this [`Employer`] operates in.
    pub industry: Option<Industry>,

    /// Declared number of employees of this [`Employer`].
    pub employee_count: Option<u32>,

    /// Indicator whether this [`Employer`] is active.
    ///
    /// Deactivated [`Employer`]s are kept for history.
    pub is_active: bool,

    /// [`DateTime`] when this [`Employer`] was created.
    pub created_at: CreationDateTime,
}

/// ID of an [`Employer`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

define_text! {
    #[doc = "Registered name of an [`Employer`] company."]
    CompanyName(max = 256)
}

define_text! {
    #[doc = "Industry an [`Employer`] operates in."]
    Industry(max = 128)
}

/// [`DateTime`] when an [`Employer`] was created.
pub type CreationDateTime = DateTimeOf<(Employer, unit::Creation)>;
