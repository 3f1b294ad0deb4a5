//! [`Command`] for reviewing a [`TimeLog`].

use common::{
    operations::{By, Commit, Insert, Select, Transact, Transacted},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        employee,
        notification::Topic,
        review::{self, Decision},
        time_log, Employee, Notification, TimeLog,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for approving or rejecting a pending [`TimeLog`].
///
/// Only approved [`TimeLog`]s are paid.
#[derive(Clone, Debug)]
pub struct ReviewTimeLog {
    /// ID of the [`TimeLog`] to review.
    pub log_id: time_log::Id,

    /// ID of the reviewing [`Employee`].
    pub reviewer_id: employee::Id,

    /// [`Decision`] upon the [`TimeLog`].
    pub decision: Decision,

    /// [`review::Comment`] of the reviewer.
    pub comment: Option<review::Comment>,
}

impl<Db> Command<ReviewTimeLog> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<TimeLog>, time_log::Id>>,
            Ok = Option<TimeLog>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<database::Error>,
        > + Database<Insert<TimeLog>, Err = Traced<database::Error>>
        + Database<Insert<Notification>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = TimeLog;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: ReviewTimeLog,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ReviewTimeLog {
            log_id,
            reviewer_id,
            decision,
            comment,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut entry = tx
            .execute(Select(By::<Option<TimeLog>, _>::new(log_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::TimeLogNotExists(log_id))
            .map_err(tracerr::wrap!())?;
        if entry.employee_id == reviewer_id {
            return Err(tracerr::new!(E::SelfReview));
        }
        _ = tx
            .execute(Select(By::<Option<Employee>, _>::new(reviewer_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ReviewerNotExists(reviewer_id))
            .map_err(tracerr::wrap!())?;

        entry
            .review
            .decide(decision, reviewer_id, comment, DateTime::now().coerce())
            .map_err(tracerr::from_and_wrap!(=> E))?;

        tx.execute(Insert(entry.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Insert(Notification::reviewed(
            entry.employee_id,
            Topic::TimeLogReviewed(log_id),
            &entry.review,
        )))
        .await
        .map_err(tracerr::map_from_and_wrap!(=> E))
        .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!(
            "`TimeLog(id: {log_id})` {} by \
             `Employee(id: {reviewer_id})`",
            entry.review.status,
        );
        Ok(entry)
    }
}

/// Error of [`ReviewTimeLog`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`TimeLog`] with the provided ID doesn't exist.
    #[display("`TimeLog(id: {_0})` does not exist")]
    TimeLogNotExists(#[error(not(source))] time_log::Id),

    /// Reviewing [`Employee`] doesn't exist.
    #[display("`Employee(id: {_0})` does not exist")]
    ReviewerNotExists(#[error(not(source))] employee::Id),

    /// [`Employee`] attempts to review their own [`TimeLog`].
    #[display("`Employee` cannot review own `TimeLog`")]
    SelfReview,

    /// [`TimeLog`] has been reviewed already.
    #[display("{_0}")]
    #[from]
    NotPending(review::NotPending),
}

#[cfg(test)]
mod spec {
    use common::{operations::Insert, TimeOfDay};

    use crate::{
        command::{
            review_time_log::ExecutionError, Command as _, LogTime,
        },
        domain::{
            employee::{self, EmploymentType},
            review::{self, Decision},
            time_log::{self, Shift},
            Employee, Project,
        },
        infra::Database as _,
        test_util::{self, from_today},
    };

    use super::ReviewTimeLog;

    #[tokio::test]
    async fn approves_logged_time() {
        let svc = test_util::service();
        let employee = Employee {
            employment_type: EmploymentType::PartTime,
            hourly_rate: Some("20USD".parse().unwrap()),
            ..test_util::employee(from_today(-30), from_today(300))
        };
        let reviewer = test_util::employee(from_today(-30), from_today(300));
        for e in [employee.clone(), reviewer.clone()] {
            svc.database().execute(Insert(e)).await.unwrap();
        }
        let entry = svc
            .execute(LogTime {
                employee_id: employee.id,
                date: from_today(-1).coerce(),
                shift: Shift::new(
                    TimeOfDay::new(14, 0).unwrap(),
                    TimeOfDay::new(18, 0).unwrap(),
                )
                .unwrap(),
                description: time_log::Description::new("Code review")
                    .unwrap(),
                project: Project::new("KNS").unwrap(),
            })
            .await
            .unwrap();
        let cmd = ReviewTimeLog {
            log_id: entry.id,
            reviewer_id: reviewer.id,
            decision: Decision::Approve,
            comment: None,
        };

        let reviewed = svc.execute(cmd.clone()).await.unwrap();
        assert_eq!(reviewed.review.status, review::Status::Approved);

        let err = svc.execute(cmd).await.unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::NotPending(_)));
    }

    #[tokio::test]
    async fn fails_for_unknown_time_log() {
        let svc = test_util::service();

        let err = svc
            .execute(ReviewTimeLog {
                log_id: time_log::Id::new(),
                reviewer_id: employee::Id::new(),
                decision: Decision::Reject,
                comment: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::TimeLogNotExists(_)));
    }
}
