//! [`Command`] for granting a [`leave::Extension`] to an [`Employee`].

use common::{
    operations::{By, Commit, Insert, Select, Transact, Transacted},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{employee, leave, Employee, Notification},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for granting a [`leave::Extension`] to an [`Employee`].
///
/// Replaces any previously granted [`leave::Extension`].
#[derive(Clone, Debug)]
pub struct GrantLeaveExtension {
    /// ID of the [`Employee`] to extend the leave expiration of.
    pub employee_id: employee::Id,

    /// Date the leave expiration is extended until.
    pub extended_until: leave::extension::ExtendedUntilDate,

    /// [`leave::extension::Reason`] of the extension.
    pub reason: leave::extension::Reason,

    /// ID of the approving [`Employee`].
    pub approver_id: employee::Id,
}

impl<Db> Command<GrantLeaveExtension> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<database::Error>,
        > + Database<Insert<Employee>, Err = Traced<database::Error>>
        + Database<Insert<Notification>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Employee;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: GrantLeaveExtension,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let GrantLeaveExtension {
            employee_id,
            extended_until,
            reason,
            approver_id,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut employee = tx
            .execute(Select(By::<Option<Employee>, _>::new(employee_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::EmployeeNotExists(employee_id))
            .map_err(tracerr::wrap!())?;
        _ = tx
            .execute(Select(By::<Option<Employee>, _>::new(approver_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ApproverNotExists(approver_id))
            .map_err(tracerr::wrap!())?;

        let extension = leave::Extension {
            extended_until,
            reason,
            approved_by: approver_id,
            approved_at: DateTime::now().coerce(),
        };
        if !extension.fits(&employee.contract) {
            return Err(tracerr::new!(E::ExtensionBeforeContractEnd));
        }
        employee.leave_extension = Some(extension);

        tx.execute(Insert(employee.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Insert(Notification::leave_extended(
            employee_id,
            extended_until.coerce(),
        )))
        .await
        .map_err(tracerr::map_from_and_wrap!(=> E))
        .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!(
            "Leave of `Employee(id: {employee_id})` extended until \
             {extended_until}",
        );
        Ok(employee)
    }
}

/// Error of [`GrantLeaveExtension`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Employee`] with the provided ID doesn't exist.
    #[display("`Employee(id: {_0})` does not exist")]
    EmployeeNotExists(#[error(not(source))] employee::Id),

    /// Approving [`Employee`] doesn't exist.
    #[display("`Employee(id: {_0})` does not exist")]
    ApproverNotExists(#[error(not(source))] employee::Id),

    /// Extension doesn't go beyond the contract end.
    #[display("Leave must be extended until a date after the contract end")]
    ExtensionBeforeContractEnd,
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Insert, Select};

    use crate::{
        command::{grant_leave_extension::ExecutionError, Command as _},
        domain::{leave, notification::Topic, Employee, Notification},
        infra::Database as _,
        read,
        test_util::{self, date},
    };

    use super::GrantLeaveExtension;

    #[tokio::test]
    async fn extends_leave_and_notifies() {
        let svc = test_util::service();
        let employee =
            test_util::employee(date("2024-01-15"), date("2024-12-31"));
        let approver =
            test_util::employee(date("2024-01-01"), date("2025-12-31"));
        for e in [employee.clone(), approver.clone()] {
            svc.database().execute(Insert(e)).await.unwrap();
        }

        let extended = svc
            .execute(GrantLeaveExtension {
                employee_id: employee.id,
                extended_until: date("2025-03-31").coerce(),
                reason: leave::extension::Reason::new("Project delivery")
                    .unwrap(),
                approver_id: approver.id,
            })
            .await
            .unwrap();

        let accrual = extended.leave_accrual(5);
        assert_eq!(accrual.extended_until, Some(date("2025-03-31")));
        assert_eq!(extended.contract, employee.contract);
        let balance = accrual.compute(date("2025-03-15"));
        assert!(!balance.is_expired);
        assert!(balance.has_extension);

        let notifications = svc
            .database()
            .execute(Select(By::<Vec<Notification>, _>::new(
                read::notification::list::Filter {
                    employee_id: Some(employee.id),
                    unread_only: false,
                    topic: Some(Topic::LeaveExtended(date("2025-03-31"))),
                },
            )))
            .await
            .unwrap();
        assert_eq!(notifications.len(), 1);
    }

    #[tokio::test]
    async fn extension_must_follow_contract_end() {
        let svc = test_util::service();
        let employee =
            test_util::employee(date("2024-01-15"), date("2024-12-31"));
        svc.database()
            .execute(Insert(employee.clone()))
            .await
            .unwrap();
        let approver =
            test_util::employee(date("2024-01-01"), date("2025-12-31"));
        svc.database()
            .execute(Insert(approver.clone()))
            .await
            .unwrap();

        for until in ["2024-01-15", "2024-06-30", "2024-12-31"] {
            let err = svc
                .execute(GrantLeaveExtension {
                    employee_id: employee.id,
                    extended_until: date(until).coerce(),
                    reason: leave::extension::Reason::new("Typo").unwrap(),
                    approver_id: approver.id,
                })
                .await
                .unwrap_err();

            assert!(
                matches!(
                    err.as_ref(),
                    ExecutionError::ExtensionBeforeContractEnd,
                ),
                "accepted {until}",
            );
        }

        let stored = svc
            .database()
            .execute(Select(By::<Option<Employee>, _>::new(employee.id)))
            .await
            .unwrap()
            .unwrap();
        assert!(stored.leave_extension.is_none());
        let balance = stored.leave_accrual(0).compute(date("2024-08-01"));
        assert!(!balance.is_expired);
        assert_eq!(balance.available_days, 7);
    }
}
