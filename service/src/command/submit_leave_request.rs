//! [`Command`] for submitting a new [`LeaveRequest`].

use common::{
    operations::{By, Commit, Insert, Select, Transact, Transacted},
    Date, DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        employee,
        leave::{self, Period},
        Employee, LeaveRequest, Review,
    },
    infra::{database, Database},
    read, Service,
};

use super::Command;

/// [`Command`] for submitting a new [`LeaveRequest`].
///
/// The requested [`Period`] must fit into the leave days still available to
/// the [`Employee`] as of today. Only approved [`LeaveRequest`]s count as
/// used.
#[derive(Clone, Debug)]
pub struct SubmitLeaveRequest {
    /// ID of the [`Employee`] requesting the leave.
    pub employee_id: employee::Id,

    /// Requested [`Period`].
    pub period: Period,

    /// [`leave::Kind`] of the leave.
    pub kind: leave::Kind,

    /// [`leave::Reason`] of the leave.
    pub reason: leave::Reason,
}

impl<Db> Command<SubmitLeaveRequest> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<read::leave::UsedDays, employee::Id>>,
            Ok = read::leave::UsedDays,
            Err = Traced<database::Error>,
        > + Database<Insert<LeaveRequest>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = LeaveRequest;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SubmitLeaveRequest,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SubmitLeaveRequest {
            employee_id,
            period,
            kind,
            reason,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let employee = tx
            .execute(Select(By::<Option<Employee>, _>::new(employee_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::EmployeeNotExists(employee_id))
            .map_err(tracerr::wrap!())?;
        let used = tx
            .execute(Select(By::<read::leave::UsedDays, _>::new(employee_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let balance = employee
            .leave_accrual(used.into())
            .compute(Date::today());
        if balance.is_expired {
            return Err(tracerr::new!(E::LeaveExpired(balance.effective_end)));
        }
        if period.days() > balance.available_days {
            return Err(tracerr::new!(E::InsufficientLeaveBalance {
                requested: period.days(),
                available: balance.available_days,
            }));
        }

        let request = LeaveRequest {
            id: leave::Id::new(),
            employee_id,
            period,
            kind,
            reason,
            review: Review::pending(),
            created_at: DateTime::now().coerce(),
        };

        tx.execute(Insert(request.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!(
            "`LeaveRequest(id: {})` of {} day(s) submitted by \
             `Employee(id: {employee_id})`",
            request.id,
            period.days(),
        );
        Ok(request)
    }
}

/// Error of [`SubmitLeaveRequest`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Employee`] with the provided ID doesn't exist.
    #[display("`Employee(id: {_0})` does not exist")]
    EmployeeNotExists(#[error(not(source))] employee::Id),

    /// Leave days of the [`Employee`] expired after the contained [`Date`].
    #[display("Leave days expired after {_0}")]
    LeaveExpired(#[error(not(source))] Date),

    /// Requested more leave days than available.
    #[display(
        "Requested {requested} leave day(s), but only {available} available"
    )]
    InsufficientLeaveBalance {
        /// Number of requested leave days.
        requested: u32,

        /// Number of available leave days.
        available: u32,
    },
}

#[cfg(test)]
mod spec {
    use common::operations::Insert;

    use crate::{
        command::{submit_leave_request::ExecutionError, Command as _},
        domain::{
            employee,
            leave::{self, Period},
            review,
        },
        infra::Database as _,
        test_util::{self, from_today},
    };

    use super::SubmitLeaveRequest;

    fn command(
        employee_id: employee::Id,
        from: i64,
        to: i64,
    ) -> SubmitLeaveRequest {
        SubmitLeaveRequest {
            employee_id,
            period: Period::new(
                from_today(from).coerce(),
                from_today(to).coerce(),
            )
            .unwrap(),
            kind: leave::Kind::Vacation,
            reason: leave::Reason::new("Family trip").unwrap(),
        }
    }

    #[tokio::test]
    async fn submits_pending_request_within_balance() {
        let svc = test_util::service();
        let employee = test_util::employee(from_today(-100), from_today(300));
        svc.database()
            .execute(Insert(employee.clone()))
            .await
            .unwrap();

        let request = svc
            .execute(command(employee.id, 10, 11))
            .await
            .unwrap();

        assert_eq!(request.period.days(), 2);
        assert_eq!(request.review.status, review::Status::Pending);
    }

    #[tokio::test]
    async fn rejects_request_exceeding_balance() {
        let svc = test_util::service();
        let employee = test_util::employee(from_today(-100), from_today(300));
        svc.database()
            .execute(Insert(employee.clone()))
            .await
            .unwrap();

        let err = svc
            .execute(command(employee.id, 10, 29))
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::InsufficientLeaveBalance { requested: 20, .. },
        ));
    }

    #[tokio::test]
    async fn rejects_request_after_expiration() {
        let svc = test_util::service();
        let employee = test_util::employee(from_today(-400), from_today(-1));
        svc.database()
            .execute(Insert(employee.clone()))
            .await
            .unwrap();

        let err = svc
            .execute(command(employee.id, 1, 1))
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::LeaveExpired(_)));
    }

    #[tokio::test]
    async fn fails_for_unknown_employee() {
        let svc = test_util::service();

        let err = svc
            .execute(command(employee::Id::new(), 1, 1))
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::EmployeeNotExists(_),
        ));
    }
}
