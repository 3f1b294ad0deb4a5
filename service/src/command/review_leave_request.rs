//! [`Command`] for reviewing a [`LeaveRequest`].

use common::{
    operations::{By, Commit, Insert, Select, Transact, Transacted},
    Date, DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        employee, leave,
        notification::Topic,
        review::{self, Decision},
        Employee, LeaveRequest, Notification,
    },
    infra::{database, Database},
    read, Service,
};

use super::Command;

/// [`Command`] for approving or rejecting a pending [`LeaveRequest`].
///
/// Approval re-checks the leave balance of the requesting [`Employee`], as
/// other requests might have been approved since submission.
#[derive(Clone, Debug)]
pub struct ReviewLeaveRequest {
    /// ID of the [`LeaveRequest`] to review.
    pub request_id: leave::Id,

    /// ID of the reviewing [`Employee`].
    pub reviewer_id: employee::Id,

    /// [`Decision`] upon the [`LeaveRequest`].
    pub decision: Decision,

    /// [`review::Comment`] of the reviewer.
    pub comment: Option<review::Comment>,
}

impl<Db> Command<ReviewLeaveRequest> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<LeaveRequest>, leave::Id>>,
            Ok = Option<LeaveRequest>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<read::leave::UsedDays, employee::Id>>,
            Ok = read::leave::UsedDays,
            Err = Traced<database::Error>,
        > + Database<Insert<LeaveRequest>, Err = Traced<database::Error>>
        + Database<Insert<Notification>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = LeaveRequest;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: ReviewLeaveRequest,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ReviewLeaveRequest {
            request_id,
            reviewer_id,
            decision,
            comment,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut request = tx
            .execute(Select(By::<Option<LeaveRequest>, _>::new(request_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::LeaveRequestNotExists(request_id))
            .map_err(tracerr::wrap!())?;
        if request.employee_id == reviewer_id {
            return Err(tracerr::new!(E::SelfReview));
        }
        _ = tx
            .execute(Select(By::<Option<Employee>, _>::new(reviewer_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ReviewerNotExists(reviewer_id))
            .map_err(tracerr::wrap!())?;

        request
            .review
            .decide(decision, reviewer_id, comment, DateTime::now().coerce())
            .map_err(tracerr::from_and_wrap!(=> E))?;

        if decision == Decision::Approve {
            let employee = tx
                .execute(Select(By::<Option<Employee>, _>::new(
                    request.employee_id,
                )))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::EmployeeNotExists(request.employee_id))
                .map_err(tracerr::wrap!())?;
            let used = tx
                .execute(Select(By::<read::leave::UsedDays, _>::new(
                    employee.id,
                )))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;

            let balance =
                employee.leave_accrual(used.into()).compute(Date::today());
            if balance.is_expired {
                return Err(tracerr::new!(E::LeaveExpired(
                    balance.effective_end,
                )));
            }
            if request.period.days() > balance.available_days {
                return Err(tracerr::new!(E::InsufficientLeaveBalance {
                    requested: request.period.days(),
                    available: balance.available_days,
                }));
            }
        }

        tx.execute(Insert(request.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Insert(Notification::reviewed(
            request.employee_id,
            Topic::LeaveRequestReviewed(request_id),
            &request.review,
        )))
        .await
        .map_err(tracerr::map_from_and_wrap!(=> E))
        .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!(
            "`LeaveRequest(id: {request_id})` {} by \
             `Employee(id: {reviewer_id})`",
            request.review.status,
        );
        Ok(request)
    }
}

/// Error of [`ReviewLeaveRequest`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`LeaveRequest`] with the provided ID doesn't exist.
    #[display("`LeaveRequest(id: {_0})` does not exist")]
    LeaveRequestNotExists(#[error(not(source))] leave::Id),

    /// Reviewing [`Employee`] doesn't exist.
    #[display("`Employee(id: {_0})` does not exist")]
    ReviewerNotExists(#[error(not(source))] employee::Id),

    /// Requesting [`Employee`] doesn't exist anymore.
    #[display("`Employee(id: {_0})` does not exist")]
    EmployeeNotExists(#[error(not(source))] employee::Id),

    /// [`Employee`] attempts to review their own [`LeaveRequest`].
    #[display("`Employee` cannot review own `LeaveRequest`")]
    SelfReview,

    /// [`LeaveRequest`] has been reviewed already.
    #[display("{_0}")]
    #[from]
    NotPending(review::NotPending),

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
    use common::operations::{By, Insert, Select};

    use crate::{
        command::{
            review_leave_request::ExecutionError, Command as _,
            SubmitLeaveRequest,
        },
        domain::{
            leave::{self, Period},
            notification::Topic,
            review::{self, Decision},
            Employee, LeaveRequest, Notification,
        },
        infra::{Database as _, Memory},
        read,
        test_util::{self, from_today},
        Service,
    };

    use super::ReviewLeaveRequest;

    async fn setup(
        svc: &Service<Memory>,
        days: i64,
    ) -> (Employee, Employee, LeaveRequest) {
        let employee = test_util::employee(from_today(-100), from_today(300));
        let reviewer = test_util::employee(from_today(-100), from_today(300));
        for e in [employee.clone(), reviewer.clone()] {
            svc.database().execute(Insert(e)).await.unwrap();
        }
        let request = svc
            .execute(SubmitLeaveRequest {
                employee_id: employee.id,
                period: Period::new(
                    from_today(10).coerce(),
                    from_today(9 + days).coerce(),
                )
                .unwrap(),
                kind: leave::Kind::Personal,
                reason: leave::Reason::new("Moving out").unwrap(),
            })
            .await
            .unwrap();
        (employee, reviewer, request)
    }

    #[tokio::test]
    async fn approves_and_notifies() {
        let svc = test_util::service();
        let (employee, reviewer, request) = setup(&svc, 2).await;

        let reviewed = svc
            .execute(ReviewLeaveRequest {
                request_id: request.id,
                reviewer_id: reviewer.id,
                decision: Decision::Approve,
                comment: None,
            })
            .await
            .unwrap();
        assert_eq!(reviewed.review.status, review::Status::Approved);
        assert_eq!(reviewed.review.reviewer_id, Some(reviewer.id));

        let used = svc
            .database()
            .execute(Select(By::<read::leave::UsedDays, _>::new(employee.id)))
            .await
            .unwrap();
        assert_eq!(u32::from(used), 2);

        let notifications = svc
            .database()
            .execute(Select(By::<Vec<Notification>, _>::new(
                read::notification::list::Filter {
                    employee_id: Some(employee.id),
                    unread_only: true,
                    topic: Some(Topic::LeaveRequestReviewed(request.id)),
                },
            )))
            .await
            .unwrap();
        assert_eq!(notifications.len(), 1);
    }

    #[tokio::test]
    async fn reviews_only_once() {
        let svc = test_util::service();
        let (_, reviewer, request) = setup(&svc, 1).await;
        let cmd = ReviewLeaveRequest {
            request_id: request.id,
            reviewer_id: reviewer.id,
            decision: Decision::Reject,
            comment: review::Comment::new("Release week"),
        };
        _ = svc.execute(cmd.clone()).await.unwrap();

        let err = svc.execute(cmd).await.unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::NotPending(_)));
    }

    #[tokio::test]
    async fn forbids_self_review() {
        let svc = test_util::service();
        let (employee, _, request) = setup(&svc, 1).await;

        let err = svc
            .execute(ReviewLeaveRequest {
                request_id: request.id,
                reviewer_id: employee.id,
                decision: Decision::Approve,
                comment: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::SelfReview));
    }

    #[tokio::test]
    async fn rechecks_balance_on_approval() {
        let svc = test_util::service();
        let (employee, reviewer, first) = setup(&svc, 3).await;
        let second = svc
            .execute(SubmitLeaveRequest {
                employee_id: employee.id,
                period: Period::new(
                    from_today(20).coerce(),
                    from_today(22).coerce(),
                )
                .unwrap(),
                kind: leave::Kind::Vacation,
                reason: leave::Reason::new("Vacation").unwrap(),
            })
            .await
            .unwrap();
        _ = svc
            .execute(ReviewLeaveRequest {
                request_id: first.id,
                reviewer_id: reviewer.id,
                decision: Decision::Approve,
                comment: None,
            })
            .await
            .unwrap();

        let err = svc
            .execute(ReviewLeaveRequest {
                request_id: second.id,
                reviewer_id: reviewer.id,
                decision: Decision::Approve,
                comment: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::InsufficientLeaveBalance { requested: 3, .. },
        ));
        let stored = svc
            .database()
            .execute(Select(By::<Option<LeaveRequest>, _>::new(second.id)))
            .await
            .unwrap()
            .unwrap();
        assert!(stored.review.is_pending());
    }
}
