//! [`Query`] collection related to [`LeaveRequest`]s.

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::{
    domain::{leave, LeaveRequest},
    read,
};

use super::DatabaseQuery;

/// Queries a [`LeaveRequest`] by its [`leave::Id`].
pub type ById = DatabaseQuery<By<Option<LeaveRequest>, leave::Id>>;

/// Queries a list of [`LeaveRequest`]s, newest first.
pub type List =
    DatabaseQuery<By<Vec<LeaveRequest>, read::review::list::Filter>>;
