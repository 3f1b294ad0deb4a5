//! [`LeaveRequest`]-related [`Database`] implementations.

use std::collections::HashMap;

use common::{
    operations::{By, Select},
    DateTime,
};
use tracerr::Traced;

use crate::{
    domain::{employee, leave, LeaveRequest},
    infra::{
        database::{
            self,
            memory::{Connection, Entity, Filter, Memory, Tables},
        },
        Database,
    },
    read,
};

impl Entity for LeaveRequest {
    type Id = leave::Id;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn created_at(&self) -> DateTime {
        self.created_at.coerce()
    }

    fn table(tables: &Tables) -> &HashMap<Self::Id, Self> {
        &tables.leave_requests
    }

    fn table_mut(tables: &mut Tables) -> &mut HashMap<Self::Id, Self> {
        &mut tables.leave_requests
    }
}

impl Filter<LeaveRequest> for read::review::list::Filter {
    fn matches(&self, r: &LeaveRequest) -> bool {
        self.employee_id.map_or(true, |id| id == r.employee_id)
            && self.status.map_or(true, |s| s == r.review.status)
    }
}

impl<C> Database<Select<By<read::leave::UsedDays, employee::Id>>> for Memory<C>
where
    C: Connection,
{
    type Ok = read::leave::UsedDays;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<read::leave::UsedDays, employee::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let employee_id = by.into_inner();
        self.read(|t| {
            t.leave_requests
                .values()
                .filter(|r| {
                    r.employee_id == employee_id && r.review.is_approved()
                })
                .map(|r| r.period.days())
                .fold(0, u32::saturating_add)
                .into()
        })
        .await
        .map_err(tracerr::wrap!())
    }
}
