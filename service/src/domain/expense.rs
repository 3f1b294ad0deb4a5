//! [`Claim`] of an expense definitions.

#[cfg(doc)]
use common::{Date, DateTime};
use common::{define_kind, unit, DateOf, DateTimeOf, Money};
use derive_more::{Display, From, FromStr, Into};
use uuid::Uuid;

use crate::domain::{employee, text::define_text, Project, Review};

/// Claim of an [`Employee`] to reimburse an expense.
///
/// [`Employee`]: crate::domain::Employee
#[derive(Clone, Debug)]
pub struct Claim {
    /// ID of this [`Claim`].
    pub id: Id,

    /// ID of the claiming [`Employee`].
    ///
    /// [`Employee`]: crate::domain::Employee
    pub employee_id: employee::Id,

    /// Claimed amount of [`Money`].
    ///
    /// Always positive.
    pub amount: Money,

    /// [`Category`] of the expense.
    pub category: Category,

    /// [`Description`] of the expense.
    pub description: Description,

    /// [`Date`] the expense was incurred on.
    pub incurred_on: IncurredDate,

    /// [`Project`] the expense relates to, if any.
    pub project: Option<Project>,

    /// [`Review`] of this [`Claim`].
    pub review: Review,

    /// [`DateTime`] when this [`Claim`] was created.
    pub created_at: CreationDateTime,
}

/// ID of an expense [`Claim`].
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

define_kind! {
    #[doc = "Category of an expense [`Claim`]."]
    enum Category {
        #[doc = "Meals and entertainment."]
        Meals = 1,

        #[doc = "Local transportation."]
        Transportation = 2,

        #[doc = "Software and tools."]
        Software = 3,

        #[doc = "Office supplies."]
        OfficeSupplies = 4,

        #[doc = "Travel and accommodation."]
        Travel = 5,

        #[doc = "Equipment and hardware."]
        Equipment = 6,
    }
}

define_text! {
    #[doc = "Description of an expense [`Claim`]."]
    Description(max = 4096)
}

/// [`Date`] an expense was incurred on.
pub type IncurredDate = DateOf<(Claim, unit::Creation)>;

/// [`DateTime`] when an expense [`Claim`] was created.
pub type CreationDateTime = DateTimeOf<(Claim, unit::Creation)>;
