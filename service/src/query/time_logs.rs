//! [`Query`] collection related to [`TimeLog`]s.

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::{
    domain::{time_log, TimeLog},
    read,
};

use super::DatabaseQuery;

/// Queries a [`TimeLog`] by its [`time_log::Id`].
pub type ById = DatabaseQuery<By<Option<TimeLog>, time_log::Id>>;

/// Queries a list of [`TimeLog`]s, newest first.
pub type List = DatabaseQuery<By<Vec<TimeLog>, read::time_log::list::Filter>>;
