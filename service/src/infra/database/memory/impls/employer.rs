//! [`Employer`]-related [`Database`] implementations.

use std::collections::HashMap;

use common::DateTime;

#[cfg(doc)]
use crate::infra::Database;
use crate::{
    domain::{employer, Employer},
    infra::database::memory::{Entity, Error, Filter, Tables},
    read,
};

impl Entity for Employer {
    type Id = employer::Id;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn created_at(&self) -> DateTime {
        self.created_at.coerce()
    }

    fn table(tables: &Tables) -> &HashMap<Self::Id, Self> {
        &tables.employers
    }

    fn table_mut(tables: &mut Tables) -> &mut HashMap<Self::Id, Self> {
        &mut tables.employers
    }

    fn check_unique(&self, tables: &Tables) -> Result<(), Error> {
        let occupied = tables
            .employers
            .values()
            .any(|e| e.id != self.id && e.email == self.email);
        if occupied {
            return Err(Error::UniqueViolation("employers_email_key"));
        }
        Ok(())
    }
}

impl Filter<Employer> for read::employer::list::Filter {
    fn matches(&self, e: &Employer) -> bool {
        let Self {
            search,
            email,
            active,
        } = self;

        search.as_ref().map_or(true, |s| {
            s.matches(&e.name)
                || s.matches(&e.company_name)
                || s.matches(&e.email)
        }) && email.as_ref().map_or(true, |m| *m == e.email)
            && active.map_or(true, |a| a == e.is_active)
    }
}
