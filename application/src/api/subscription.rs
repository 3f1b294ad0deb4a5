//! GraphQL [`Subscription`]s definitions.

use common::{Date, DateTime};
use futures::{
    stream::{self, BoxStream},
    StreamExt as _,
};
use juniper::graphql_subscription;
use service::{
    domain::{employee, leave},
    query, Query as _,
};
use tracing as log;

use crate::{api, AsError, Context, Error, Service};

/// Root of all GraphQL subscription.
#[derive(Clone, Copy, Debug)]
pub struct Subscription;

#[graphql_subscription(context = Context)]
impl Subscription {
    /// Subscription emitting `true` once the leave balance of the specified
    /// `Employee` expires.
    ///
    /// Emits immediately if the leave balance has expired already. Extensions
    /// granted while waiting postpone the emission.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `EMPLOYEE_NOT_EXISTS` - the `Employee` with the specified ID does
    ///                           not exist.
    pub async fn wait_leave_expiration(
        &self,
        employee_id: api::employee::Id,
        ctx: &Context,
    ) -> Result<BoxStream<'static, Result<bool, Error>>, Error> {
        let employee_id = employee_id.into();
        let balance = current_balance(ctx.service(), employee_id)
            .await
            .map_err(ctx.error())?;
        if balance.is_expired {
            return Ok(stream::once(async { Ok(true) }).boxed());
        }

        Ok(stream::once(until_expired(
            ctx.service().clone(),
            employee_id,
            balance.effective_end,
        ))
        .boxed())
    }
}

/// Computes the current [`leave::Balance`] of the [`Employee`] with the
/// provided ID.
///
/// [`Employee`]: service::domain::Employee
async fn current_balance(
    service: &Service,
    employee_id: employee::Id,
) -> Result<leave::Balance, Error> {
    service
        .execute(query::leave_balance::Balance {
            employee_id,
            on: None,
        })
        .await
        .map(|out| out.balance)
        .map_err(AsError::into_error)
}

/// Waits until the leave balance of the [`Employee`] with the provided ID
/// expires, re-checking it each time the `effective_end` passes.
///
/// [`Employee`]: service::domain::Employee
async fn until_expired(
    service: Service,
    employee_id: employee::Id,
    mut effective_end: Date,
) -> Result<bool, Error> {
    loop {
        // Expiration happens once the effective end day is over.
        let expires_at = effective_end
            .checked_add_days(1)
            .map_or_else(DateTime::now, DateTime::start_of);
        log::debug!(
            employee_id = %employee_id,
            expires_at = ?expires_at,
            "waiting for leave expiration",
        );
        tokio::time::sleep(DateTime::now().until(expires_at)).await;

        let balance = current_balance(&service, employee_id).await?;
        if balance.is_expired {
            return Ok(true);
        }
        effective_end = balance.effective_end;
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::Date;
    use futures::StreamExt as _;
    use service::{
        command::{CreateEmployee, GrantLeaveExtension},
        domain::{
            contact::{Email, Name},
            employee::{Contract, EmploymentType, Role},
            leave, Employee, Project,
        },
        infra::Memory,
        Command as _,
    };

    use crate::{Context, Service};

    use super::Subscription;

    fn context() -> Context {
        let config = crate::Config::default().service.into();
        let (service, _) = crate::Service::new(config, Memory::new());
        Context::new(service)
    }

    async fn hire(service: &Service, email: &str, end: Date) -> Employee {
        service
            .execute(CreateEmployee {
                employer_id: None,
                name: Name::new("Sarah Johnson").unwrap(),
                email: Email::new(email).unwrap(),
                bank_account: None,
                role: Role::Engineer,
                employment_type: EmploymentType::FullTime,
                projects: [Project::new("KNS").unwrap()].into(),
                contract: Contract::new(
                    Date::today().checked_add_days(-200).unwrap().coerce(),
                    end.coerce(),
                )
                .unwrap(),
                schedule: None,
                hourly_rate: None,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn emits_at_once_for_expired_leave() {
        let ctx = context();
        let yesterday = Date::today().checked_add_days(-1).unwrap();
        let employee = hire(ctx.service(), "a@company.com", yesterday).await;

        let mut stream = Subscription
            .wait_leave_expiration(employee.id.into(), &ctx)
            .await
            .unwrap();

        assert_eq!(stream.next().await.map(Result::ok), Some(Some(true)));
    }

    #[tokio::test(start_paused = true)]
    async fn keeps_waiting_after_extension() {
        let ctx = context();
        let employee =
            hire(ctx.service(), "a@company.com", Date::today()).await;
        let approver =
            hire(ctx.service(), "b@company.com", Date::today()).await;

        let mut stream = Subscription
            .wait_leave_expiration(employee.id.into(), &ctx)
            .await
            .unwrap();
        _ = ctx
            .service()
            .execute(GrantLeaveExtension {
                employee_id: employee.id,
                extended_until: Date::today()
                    .checked_add_days(90)
                    .unwrap()
                    .coerce(),
                reason: leave::extension::Reason::new("Handover").unwrap(),
                approver_id: approver.id,
            })
            .await
            .unwrap();

        // Old effective end passes within a day, the extended one doesn't.
        let two_days = Duration::from_secs(2 * 86_400);
        assert!(
            tokio::time::timeout(two_days, stream.next()).await.is_err(),
            "emitted before the extended end",
        );
    }
}
