//! [`Notification`]-related [`Database`] implementations.

use std::collections::HashMap;

use common::DateTime;

#[cfg(doc)]
use crate::infra::Database;
use crate::{
    domain::{notification, Notification},
    infra::database::memory::{Entity, Filter, Tables},
    read,
};

impl Entity for Notification {
    type Id = notification::Id;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn created_at(&self) -> DateTime {
        self.created_at.coerce()
    }

    fn table(tables: &Tables) -> &HashMap<Self::Id, Self> {
        &tables.notifications
    }

    fn table_mut(tables: &mut Tables) -> &mut HashMap<Self::Id, Self> {
        &mut tables.notifications
    }
}

impl Filter<Notification> for read::notification::list::Filter {
    fn matches(&self, n: &Notification) -> bool {
        self.employee_id.map_or(true, |id| id == n.employee_id)
            && (!self.unread_only || !n.is_read)
            && self.topic.map_or(true, |t| t == n.topic)
    }
}
