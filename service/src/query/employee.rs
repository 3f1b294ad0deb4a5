//! [`Query`] collection related to a single [`Employee`].

use common::operations::By;

use crate::{
    domain::{employee, Employee},
    read,
};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries an [`Employee`] by its [`employee::Id`].
pub type ById = DatabaseQuery<By<Option<Employee>, employee::Id>>;

/// Queries the number of leave days used by an [`Employee`].
pub type UsedLeaveDays = DatabaseQuery<By<read::leave::UsedDays, employee::Id>>;
