//! [`Database`] implementations.

mod employee;
mod employer;
mod expense;
mod leave;
mod notification;
mod schedule_change;
mod time_log;

use std::cmp::Reverse;

use common::operations::{By, Commit, Insert, Select, Transact};
use itertools::Itertools as _;
use tracerr::Traced;

use crate::infra::{database, Database};

use super::{Connection, Entity, Filter, Memory, NonTx, Tx};

impl Database<Transact> for Memory<NonTx> {
    type Ok = Memory<Tx>;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Transact) -> Result<Self::Ok, Self::Err> {
        Ok(Memory(Tx::begin(&self.0).await))
    }
}

impl Database<Transact> for Memory<Tx> {
    type Ok = Self;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Transact) -> Result<Self::Ok, Self::Err> {
        Ok(self.clone())
    }
}

impl Database<Commit> for Memory<Tx> {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Commit) -> Result<Self::Ok, Self::Err> {
        self.commit().await.map_err(tracerr::wrap!())
    }
}

impl<C, E> Database<Select<By<Option<E>, E::Id>>> for Memory<C>
where
    C: Connection,
    E: Entity,
{
    type Ok = Option<E>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<E>, E::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.read(|t| E::table(t).get(&id).cloned())
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C, E, F> Database<Select<By<Vec<E>, F>>> for Memory<C>
where
    C: Connection,
    E: Entity,
    F: Filter<E>,
{
    type Ok = Vec<E>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<E>, F>>,
    ) -> Result<Self::Ok, Self::Err> {
        let filter = by.into_inner();
        self.read(|t| {
            E::table(t)
                .values()
                .filter(|e| filter.matches(e))
                .sorted_by_key(|e| Reverse(e.created_at()))
                .cloned()
                .collect()
        })
        .await
        .map_err(tracerr::wrap!())
    }
}

impl<C, E> Database<Insert<E>> for Memory<C>
where
    C: Connection,
    E: Entity,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(entity): Insert<E>,
    ) -> Result<Self::Ok, Self::Err> {
        self.write(|t| {
            entity.check_unique(t)?;
            drop(E::table_mut(t).insert(entity.id(), entity));
            Ok(())
        })
        .await
        .map_err(tracerr::wrap!())
    }
}
