//! In-memory [`Database`] implementation.

mod impls;

use std::{collections::HashMap, future::Future, hash::Hash, sync::Arc};

use common::DateTime;
use derive_more::{Deref, Display, Error as StdError};
use tokio::sync::{Mutex, OwnedRwLockWriteGuard, RwLock};
use tracerr::Traced;

use crate::{
    domain::{
        employee, employer, expense, leave, notification, schedule_change,
        time_log, Employee, Employer, ExpenseClaim, LeaveRequest,
        Notification, ScheduleChange, TimeLog,
    },
    infra::database,
};
#[cfg(doc)]
use crate::infra::Database;

/// In-memory [`Database`] client.
///
/// Cloned clients share the same data.
#[derive(Clone, Debug, Default, Deref)]
pub struct Memory<C = NonTx>(C);

impl Memory {
    /// Creates a new empty [`Memory`] database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Data stored in a [`Memory`] database.
#[derive(Clone, Debug, Default)]
pub struct Tables {
    /// Stored [`Employer`]s.
    employers: HashMap<employer::Id, Employer>,

    /// Stored [`Employee`]s.
    employees: HashMap<employee::Id, Employee>,

    /// Stored [`LeaveRequest`]s.
    leave_requests: HashMap<leave::Id, LeaveRequest>,

    /// Stored [`ExpenseClaim`]s.
    expense_claims: HashMap<expense::Id, ExpenseClaim>,

    /// Stored [`ScheduleChange`]s.
    schedule_changes: HashMap<schedule_change::Id, ScheduleChange>,

    /// Stored [`TimeLog`]s.
    time_logs: HashMap<time_log::Id, TimeLog>,

    /// Stored [`Notification`]s.
    notifications: HashMap<notification::Id, Notification>,
}

/// Access to the [`Tables`] of a [`Memory`] database.
pub trait Connection {
    /// Reads the [`Tables`] with the provided function.
    fn read<T>(
        &self,
        f: impl FnOnce(&Tables) -> T,
    ) -> impl Future<Output = Result<T, Traced<database::Error>>>;

    /// Modifies the [`Tables`] with the provided function.
    ///
    /// The function must not leave partial changes on failure.
    fn write<T>(
        &self,
        f: impl FnOnce(&mut Tables) -> Result<T, Error>,
    ) -> impl Future<Output = Result<T, Traced<database::Error>>>;
}

/// Non-transactional [`Memory`] database client.
///
/// Every operation is applied immediately.
#[derive(Clone, Debug, Default)]
pub struct NonTx(Arc<RwLock<Tables>>);

impl Connection for NonTx {
    async fn read<T>(
        &self,
        f: impl FnOnce(&Tables) -> T,
    ) -> Result<T, Traced<database::Error>> {
        Ok(f(&*self.0.read().await))
    }

    async fn write<T>(
        &self,
        f: impl FnOnce(&mut Tables) -> Result<T, Error>,
    ) -> Result<T, Traced<database::Error>> {
        f(&mut *self.0.write().await)
            .map_err(tracerr::from_and_wrap!(=> database::Error))
    }
}

/// Transactional [`Memory`] database client.
///
/// Holds an exclusive lock over the whole [`Memory`] database until
/// committed or dropped. Changes are staged and become visible only once
/// committed, so dropping a [`Tx`] without committing rolls them back.
///
/// No other client must be used by the same task while a [`Tx`] is alive.
#[derive(Clone, Debug)]
pub struct Tx(Arc<Mutex<Option<Staged>>>);

/// Changes staged by a [`Tx`].
#[derive(Debug)]
struct Staged {
    /// Exclusive lock over the committed [`Tables`].
    guard: OwnedRwLockWriteGuard<Tables>,

    /// [`Tables`] with the staged changes applied.
    tables: Tables,
}

impl Tx {
    /// Starts a new [`Tx`] over the provided [`NonTx`] client data.
    async fn begin(client: &NonTx) -> Self {
        let guard = Arc::clone(&client.0).write_owned().await;
        let tables = Tables::clone(&guard);
        Self(Arc::new(Mutex::new(Some(Staged { guard, tables }))))
    }

    /// Commits the staged changes of this [`Tx`].
    ///
    /// # Errors
    ///
    /// If this [`Tx`] has been committed already.
    pub async fn commit(&self) -> Result<(), Traced<database::Error>> {
        let Staged { mut guard, tables } = self
            .0
            .lock()
            .await
            .take()
            .ok_or_else(|| tracerr::new!(Error::TxCompleted))
            .map_err(tracerr::map_from)?;
        *guard = tables;
        Ok(())
    }
}

impl Connection for Tx {
    async fn read<T>(
        &self,
        f: impl FnOnce(&Tables) -> T,
    ) -> Result<T, Traced<database::Error>> {
        let staged = self.0.lock().await;
        let staged = staged
            .as_ref()
            .ok_or_else(|| tracerr::new!(Error::TxCompleted))
            .map_err(tracerr::map_from)?;
        Ok(f(&staged.tables))
    }

    async fn write<T>(
        &self,
        f: impl FnOnce(&mut Tables) -> Result<T, Error>,
    ) -> Result<T, Traced<database::Error>> {
        let mut staged = self.0.lock().await;
        let staged = staged
            .as_mut()
            .ok_or_else(|| tracerr::new!(Error::TxCompleted))
            .map_err(tracerr::map_from)?;
        f(&mut staged.tables)
            .map_err(tracerr::from_and_wrap!(=> database::Error))
    }
}

/// Entity stored in its own table of a [`Memory`] database.
pub trait Entity: Clone {
    /// Type of the primary key of this [`Entity`].
    type Id: Copy + Eq + Hash;

    /// Returns the primary key of this [`Entity`].
    fn id(&self) -> Self::Id;

    /// Returns the [`DateTime`] when this [`Entity`] was created.
    fn created_at(&self) -> DateTime;

    /// Returns the table of this [`Entity`].
    fn table(tables: &Tables) -> &HashMap<Self::Id, Self>;

    /// Returns the mutable table of this [`Entity`].
    fn table_mut(tables: &mut Tables) -> &mut HashMap<Self::Id, Self>;

    /// Checks whether this [`Entity`] may be stored along the existing ones.
    ///
    /// # Errors
    ///
    /// With [`Error::UniqueViolation`] if this [`Entity`] conflicts with
    /// another one.
    fn check_unique(&self, tables: &Tables) -> Result<(), Error> {
        _ = tables;
        Ok(())
    }
}

/// Condition selecting [`Entity`]s from a [`Memory`] database.
pub trait Filter<E> {
    /// Indicates whether the provided `entity` satisfies this [`Filter`].
    fn matches(&self, entity: &E) -> bool;
}

/// [`Memory`] database error.
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// Unique constraint violation.
    #[display("Unique constraint `{_0}` violated")]
    UniqueViolation(#[error(not(source))] &'static str),

    /// Operation on an already completed [`Tx`].
    #[display("`Tx` is already completed")]
    TxCompleted,
}

impl Error {
    /// Checks if the error is a unique violation of the specified constraint.
    #[must_use]
    pub fn is_unique_violation(&self, constraint: Option<&str>) -> bool {
        match self {
            Self::UniqueViolation(c) => constraint.map_or(true, |x| x == *c),
            Self::TxCompleted => false,
        }
    }
}
