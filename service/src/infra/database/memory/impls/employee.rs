//! [`Employee`]-related [`Database`] implementations.

use std::collections::HashMap;

use common::DateTime;

#[cfg(doc)]
use crate::infra::Database;
use crate::{
    domain::{employee, Employee},
    infra::database::memory::{Entity, Error, Filter, Tables},
    read,
};

impl Entity for Employee {
    type Id = employee::Id;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn created_at(&self) -> DateTime {
        self.created_at.coerce()
    }

    fn table(tables: &Tables) -> &HashMap<Self::Id, Self> {
        &tables.employees
    }

    fn table_mut(tables: &mut Tables) -> &mut HashMap<Self::Id, Self> {
        &mut tables.employees
    }

    fn check_unique(&self, tables: &Tables) -> Result<(), Error> {
        let occupied = tables
            .employees
            .values()
            .any(|e| e.id != self.id && e.email == self.email);
        if occupied {
            return Err(Error::UniqueViolation("employees_email_key"));
        }
        Ok(())
    }
}

impl Filter<Employee> for read::employee::list::Filter {
    fn matches(&self, e: &Employee) -> bool {
        let Self {
            search,
            email,
            role,
            project,
            employment_type,
            employer_id,
        } = self;

        search.as_ref().map_or(true, |s| {
            s.matches(&e.name) || s.matches(&e.email)
        }) && email.as_ref().map_or(true, |m| *m == e.email)
            && role.map_or(true, |r| r == e.role)
            && project.as_ref().map_or(true, |p| e.projects.contains(p))
            && employment_type.map_or(true, |t| t == e.employment_type)
            && employer_id.map_or(true, |id| Some(id) == e.employer_id)
    }
}
