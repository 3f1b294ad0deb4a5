//! Service contains the business logic of the application.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;
pub mod task;

use std::{error::Error, time::Duration};

use common::operations::{By, Start};

#[cfg(doc)]
use infra::Database;

pub use self::{command::Command, query::Query, task::Task};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Period before the leave expiration to warn [`domain::Employee`]s in.
    pub leave_expiry_warning: Duration,

    /// [`task::NotifyExpiringLeaves`] configuration.
    pub notify_expiring_leaves: task::notify_expiring_leaves::Config,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Db> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Database`] of this [`Service`].
    database: Db,
}

impl<Db> Service<Db> {
    /// Creates a new [`Service`] with the provided parameters.
    ///
    /// Returned [`task::Background`] runs the periodic [`Task`]s of the
    /// [`Service`] and must be polled to make them progress.
    pub fn new(config: Config, database: Db) -> (Self, task::Background)
    where
        Self: Task<
                Start<
                    By<
                        task::NotifyExpiringLeaves<Self>,
                        task::notify_expiring_leaves::Config,
                    >,
                >,
                Ok = (),
                Err: Error + 'static,
            > + Clone
            + 'static,
    {
        let this = Service { config, database };

        let mut bg = task::Background::default();
        let svc = this.clone();
        bg.spawn("notify_expiring_leaves", async move {
            svc.execute(Start(By::new(svc.config().notify_expiring_leaves)))
                .await
        });

        (this, bg)
    }

    /// Returns [`Config`] of this [`Service`].
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Database`] of this [`Service`].
    #[must_use]
    pub fn database(&self) -> &Db {
        &self.database
    }
}

#[cfg(all(test, feature = "memory"))]
mod test_util {
    //! Helpers for testing [`Service`] operations.

    use std::time::Duration;

    use common::{Date, DateTime};

    use crate::{
        domain::{
            contact, employee, employer, Employee, Employer, Project,
        },
        infra::Memory,
        task, Config, Service,
    };

    /// Creates a new [`Service`] over an empty [`Memory`] database.
    pub(crate) fn service() -> Service<Memory> {
        Service {
            config: Config {
                leave_expiry_warning: Duration::from_secs(30 * 86_400),
                notify_expiring_leaves: task::notify_expiring_leaves::Config {
                    interval: Duration::from_secs(3600),
                },
            },
            database: Memory::new(),
        }
    }

    /// Parses the provided `YYYY-MM-DD` string into a [`Date`].
    pub(crate) fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    /// Returns the [`Date`] shifted from today by the provided number of
    /// `days`.
    pub(crate) fn from_today(days: i64) -> Date {
        Date::today().checked_add_days(days).unwrap()
    }

    /// Returns a full-time [`Employee`] with a contract from `start` to
    /// `end`.
    pub(crate) fn employee(start: Date, end: Date) -> Employee {
        let id = employee::Id::new();
        Employee {
            id,
            employer_id: None,
            name: contact::Name::new("Sarah Johnson").unwrap(),
            email: contact::Email::new(format!("{id}@company.com")).unwrap(),
            bank_account: None,
            role: employee::Role::Engineer,
            employment_type: employee::EmploymentType::FullTime,
            projects: [Project::new("KNS").unwrap()].into(),
            contract: employee::Contract::new(start.coerce(), end.coerce())
            .unwrap(),
            leave_extension: None,
            schedule: employee::Schedule::default(),
            hourly_rate: None,
            created_at: DateTime::now().coerce(),
        }
    }

    /// Returns an active [`Employer`].
    pub(crate) fn employer() -> Employer {
        let id = employer::Id::new();
        Employer {
            id,
            name: contact::Name::new("Alex Morgan").unwrap(),
            email: contact::Email::new(format!("{id}@acme.com")).unwrap(),
            phone: None,
            address: None,
            company_name: employer::CompanyName::new("Acme Corp").unwrap(),
            industry: None,
            employee_count: None,
            is_active: true,
            created_at: DateTime::now().coerce(),
        }
    }
}
