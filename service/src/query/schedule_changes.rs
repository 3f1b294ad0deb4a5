//! [`Query`] collection related to [`ScheduleChange`]s.

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::{
    domain::{schedule_change, ScheduleChange},
    read,
};

use super::DatabaseQuery;

/// Queries a [`ScheduleChange`] by its [`schedule_change::Id`].
pub type ById = DatabaseQuery<By<Option<ScheduleChange>, schedule_change::Id>>;

/// Queries a list of [`ScheduleChange`]s, newest first.
pub type List =
    DatabaseQuery<By<Vec<ScheduleChange>, read::review::list::Filter>>;
