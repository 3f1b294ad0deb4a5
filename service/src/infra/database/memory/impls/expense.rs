//! [`ExpenseClaim`]-related [`Database`] implementations.

use std::collections::HashMap;

use common::DateTime;

#[cfg(doc)]
use crate::infra::Database;
use crate::{
    domain::{expense, ExpenseClaim},
    infra::database::memory::{Entity, Filter, Tables},
    read,
};

impl Entity for ExpenseClaim {
    type Id = expense::Id;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn created_at(&self) -> DateTime {
        self.created_at.coerce()
    }

    fn table(tables: &Tables) -> &HashMap<Self::Id, Self> {
        &tables.expense_claims
    }

    fn table_mut(tables: &mut Tables) -> &mut HashMap<Self::Id, Self> {
        &mut tables.expense_claims
    }
}

impl Filter<ExpenseClaim> for read::review::list::Filter {
    fn matches(&self, r: &ExpenseClaim) -> bool {
        self.employee_id.map_or(true, |id| id == r.employee_id)
            && self.status.map_or(true, |s| s == r.review.status)
    }
}
