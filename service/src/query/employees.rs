//! [`Query`] collection related to the multiple [`Employee`]s.

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::{domain::Employee, read};

use super::DatabaseQuery;

/// Queries a list of [`Employee`]s, newest first.
pub type List = DatabaseQuery<By<Vec<Employee>, read::employee::list::Filter>>;
