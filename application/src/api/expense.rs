//! Expense [`Claim`]-related definitions.

use common::{Date, DateTime, Money};
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLScalar};
use service::domain::{self, expense};
use uuid::Uuid;

use crate::{
    api::{self, scalar},
    Context,
};

/// Claim of an `Employee` to reimburse an expense.
#[derive(Clone, Debug, From)]
pub struct Claim(domain::ExpenseClaim);

/// Claim of an `Employee` to reimburse an expense.
#[graphql_object(name = "ExpenseClaim", context = Context)]
impl Claim {
    /// Unique identifier of this `ExpenseClaim`.
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Claiming `Employee`.
    #[must_use]
    pub fn employee(&self) -> api::Employee {
        #[expect(
            unsafe_code,
            reason = "`ExpenseClaim` is never stored without its `Employee`"
        )]
        unsafe {
            api::Employee::new_unchecked(self.0.employee_id)
        }
    }

    /// Claimed amount, always positive.
    #[must_use]
    pub fn amount(&self) -> Money {
        self.0.amount
    }

    /// Category of the expense.
    #[must_use]
    pub fn category(&self) -> Category {
        self.0.category.into()
    }

    /// Description of the expense.
    #[must_use]
    pub fn description(&self) -> Description {
        self.0.description.clone().into()
    }

    /// `Date` the expense was incurred on.
    #[must_use]
    pub fn incurred_on(&self) -> Date {
        self.0.incurred_on.coerce()
    }

    /// `Project` the expense relates to, if any.
    #[must_use]
    pub fn project(&self) -> Option<api::employee::Project> {
        self.0.project.clone().map(Into::into)
    }

    /// `Review` of this `ExpenseClaim`.
    #[must_use]
    pub fn review(&self) -> api::review::Review {
        self.0.review.clone().into()
    }

    /// `DateTime` when this `ExpenseClaim` was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }
}

/// Unique identifier of an `ExpenseClaim`.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, GraphQLScalar, Into, PartialEq,
)]
#[from(expense::Id)]
#[into(expense::Id)]
#[graphql(name = "ExpenseClaimId", transparent)]
pub struct Id(Uuid);

/// Category of an `ExpenseClaim`.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "ExpenseCategory")]
pub enum Category {
    /// Meals and entertainment.
    Meals,

    /// Local transportation.
    Transportation,

    /// Software and tools.
    Software,

    /// Office supplies.
    OfficeSupplies,

    /// Travel and accommodation.
    Travel,

    /// Equipment and hardware.
    Equipment,
}

impl From<expense::Category> for Category {
    fn from(category: expense::Category) -> Self {
        use expense::Category as C;
        match category {
            C::Meals => Self::Meals,
            C::Transportation => Self::Transportation,
            C::Software => Self::Software,
            C::OfficeSupplies => Self::OfficeSupplies,
            C::Travel => Self::Travel,
            C::Equipment => Self::Equipment,
        }
    }
}

impl From<Category> for expense::Category {
    fn from(category: Category) -> Self {
        match category {
            Category::Meals => Self::Meals,
            Category::Transportation => Self::Transportation,
            Category::Software => Self::Software,
            Category::OfficeSupplies => Self::OfficeSupplies,
            Category::Travel => Self::Travel,
            Category::Equipment => Self::Equipment,
        }
    }
}

/// Description of an expense.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ExpenseDescription",
    with = scalar::Via::<expense::Description>,
)]
pub struct Description(expense::Description);

#[cfg(test)]
mod spec {
    use service::domain::expense;

    use super::Category;

    #[test]
    fn converts_categories_both_ways() {
        for category in expense::Category::ALL {
            assert_eq!(
                expense::Category::from(Category::from(*category)),
                *category,
            );
        }
    }
}
