//! [`ScheduleChange`]-related [`Database`] implementations.

use std::collections::HashMap;

use common::DateTime;

#[cfg(doc)]
use crate::infra::Database;
use crate::{
    domain::{schedule_change, ScheduleChange},
    infra::database::memory::{Entity, Filter, Tables},
    read,
};

impl Entity for ScheduleChange {
    type Id = schedule_change::Id;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn created_at(&self) -> DateTime {
        self.created_at.coerce()
    }

    fn table(tables: &Tables) -> &HashMap<Self::Id, Self> {
        &tables.schedule_changes
    }

    fn table_mut(tables: &mut Tables) -> &mut HashMap<Self::Id, Self> {
        &mut tables.schedule_changes
    }
}

impl Filter<ScheduleChange> for read::review::list::Filter {
    fn matches(&self, r: &ScheduleChange) -> bool {
        self.employee_id.map_or(true, |id| id == r.employee_id)
            && self.status.map_or(true, |s| s == r.review.status)
    }
}
