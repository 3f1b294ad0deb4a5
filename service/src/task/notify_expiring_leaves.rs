//! [`NotifyExpiringLeaves`] [`Task`].

use std::{convert::Infallible, error::Error, time};

use common::{
    operations::{By, Insert, Perform, Select, Start},
    Date,
};
use tokio::time::interval;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{employee, notification::Topic, Employee, Notification},
    infra::{database, Database},
    read, Service,
};

use super::Task;

/// Configuration for [`NotifyExpiringLeaves`] [`Task`].
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Interval between checks of the leave balances.
    pub interval: time::Duration,
}

/// [`Task`] warning [`Employee`]s about their leave days expiring soon.
///
/// Every [`Employee`] is warned at most once per expiration date.
#[derive(Clone, Copy, Debug)]
pub struct NotifyExpiringLeaves<S> {
    /// [`Config`] of this [`Task`].
    config: Config,

    /// [`Service`] instance.
    service: S,
}

impl<Db> Task<Start<By<NotifyExpiringLeaves<Self>, Config>>> for Service<Db>
where
    NotifyExpiringLeaves<Service<Db>>:
        Task<Perform<()>, Ok = usize, Err: Error> + 'static,
    Self: Clone,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        Start(by): Start<By<NotifyExpiringLeaves<Self>, Config>>,
    ) -> Result<Self::Ok, Self::Err> {
        let config = by.into_inner();
        let task = NotifyExpiringLeaves {
            config,
            service: self.clone(),
        };

        let mut interval = interval(task.config.interval);
        loop {
            let _ = interval.tick().await;
            match task.execute(Perform(())).await {
                Ok(0) => {}
                Ok(n) => log::info!(
                    "`task::NotifyExpiringLeaves` warned {n} employee(s)",
                ),
                Err(e) => {
                    log::error!("`task::NotifyExpiringLeaves` failed: {e}");
                }
            }
        }
    }
}

impl<Db> Task<Perform<()>> for NotifyExpiringLeaves<Service<Db>>
where
    Db: Database<
            Select<By<Vec<Employee>, read::employee::list::Filter>>,
            Ok = Vec<Employee>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<read::leave::UsedDays, employee::Id>>,
            Ok = read::leave::UsedDays,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Notification>, read::notification::list::Filter>>,
            Ok = Vec<Notification>,
            Err = Traced<database::Error>,
        > + Database<Insert<Notification>, Err = Traced<database::Error>>,
{
    type Ok = usize;
    type Err = ExecutionError;

    async fn execute(&self, _: Perform<()>) -> Result<Self::Ok, Self::Err> {
        let db = self.service.database();
        let warning = self.service.config().leave_expiry_warning;
        let today = Date::today();

        let employees = db
            .execute(Select(By::new(read::employee::list::Filter::default())))
            .await
            .map_err(tracerr::wrap!())?;

        let mut notified = 0;
        for employee in employees {
            let used = db
                .execute(Select(By::<read::leave::UsedDays, _>::new(
                    employee.id,
                )))
                .await
                .map_err(tracerr::wrap!())?;
            let balance = employee.leave_accrual(used.into()).compute(today);
            if !balance.expires_soon(today, warning) {
                continue;
            }

            let topic = Topic::LeaveExpiresSoon(balance.effective_end);
            let warned = db
                .execute(Select(By::new(read::notification::list::Filter {
                    employee_id: Some(employee.id),
                    unread_only: false,
                    topic: Some(topic),
                })))
                .await
                .map_err(tracerr::wrap!())?;
            if !warned.is_empty() {
                continue;
            }

            db.execute(Insert(Notification::leave_expires_soon(
                employee.id,
                balance.effective_end,
                balance.available_days,
            )))
            .await
            .map_err(tracerr::wrap!())?;
            log::debug!(
                "`Employee(id: {})` warned about leave expiring after {}",
                employee.id,
                balance.effective_end,
            );
            notified += 1;
        }
        Ok(notified)
    }
}

/// Error of [`NotifyExpiringLeaves`] execution.
pub type ExecutionError = Traced<database::Error>;

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::operations::{By, Insert, Perform, Select};

    use crate::{
        domain::Notification,
        infra::Database as _,
        read,
        task::Task as _,
        test_util::{self, from_today},
    };

    use super::{Config, NotifyExpiringLeaves};

    #[tokio::test]
    async fn warns_once_per_expiration() {
        let svc = test_util::service();
        let expiring = test_util::employee(from_today(-200), from_today(10));
        let lasting = test_util::employee(from_today(-200), from_today(100));
        let expired = test_util::employee(from_today(-200), from_today(-1));
        for e in [expiring.clone(), lasting, expired] {
            svc.database().execute(Insert(e)).await.unwrap();
        }
        let task = NotifyExpiringLeaves {
            config: Config {
                interval: Duration::from_secs(60),
            },
            service: svc.clone(),
        };

        assert_eq!(task.execute(Perform(())).await.unwrap(), 1);
        assert_eq!(task.execute(Perform(())).await.unwrap(), 0);

        let notifications = svc
            .database()
            .execute(Select(By::<Vec<Notification>, _>::new(
                read::notification::list::Filter::default(),
            )))
            .await
            .unwrap();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].employee_id, expiring.id);
    }
}
