//! [`Query`] collection related to [`Notification`]s.

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::{domain::Notification, read};

use super::DatabaseQuery;

/// Queries a list of [`Notification`]s, newest first.
pub type List =
    DatabaseQuery<By<Vec<Notification>, read::notification::list::Filter>>;
