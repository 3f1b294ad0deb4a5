//! [`Query`] collection related to [`ExpenseClaim`]s.

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::{
    domain::{expense, ExpenseClaim},
    read,
};

use super::DatabaseQuery;

/// Queries an [`ExpenseClaim`] by its [`expense::Id`].
pub type ById = DatabaseQuery<By<Option<ExpenseClaim>, expense::Id>>;

/// Queries a list of [`ExpenseClaim`]s, newest first.
pub type List =
    DatabaseQuery<By<Vec<ExpenseClaim>, read::review::list::Filter>>;
