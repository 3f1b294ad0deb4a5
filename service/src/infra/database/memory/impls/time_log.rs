//! [`TimeLog`]-related [`Database`] implementations.

use std::collections::HashMap;

use common::{Date, DateTime};

#[cfg(doc)]
use crate::infra::Database;
use crate::{
    domain::{time_log, TimeLog},
    infra::database::memory::{Entity, Filter, Tables},
    read,
};

impl Entity for TimeLog {
    type Id = time_log::Id;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn created_at(&self) -> DateTime {
        self.created_at.coerce()
    }

    fn table(tables: &Tables) -> &HashMap<Self::Id, Self> {
        &tables.time_logs
    }

    fn table_mut(tables: &mut Tables) -> &mut HashMap<Self::Id, Self> {
        &mut tables.time_logs
    }
}

impl Filter<TimeLog> for read::time_log::list::Filter {
    fn matches(&self, l: &TimeLog) -> bool {
        let date: Date = l.date.coerce();
        self.employee_id.map_or(true, |id| id == l.employee_id)
            && self.status.map_or(true, |s| s == l.review.status)
            && self.since.map_or(true, |d| date >= d)
            && self.until.map_or(true, |d| date <= d)
    }
}
