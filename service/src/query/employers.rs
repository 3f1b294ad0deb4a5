//! [`Query`] collection related to the multiple [`Employer`]s.

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::{domain::Employer, read};

use super::DatabaseQuery;

/// Queries a list of [`Employer`]s, newest first.
pub type List = DatabaseQuery<By<Vec<Employer>, read::employer::list::Filter>>;
