//! [`Command`] for reviewing a [`ScheduleChange`].

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
        schedule_change, Employee, Notification, ScheduleChange,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for approving or rejecting a pending [`ScheduleChange`].
///
/// Approval replaces the [`Schedule`] of the requesting [`Employee`].
///
/// [`Schedule`]: employee::Schedule
#[derive(Clone, Debug)]
pub struct ReviewScheduleChange {
    /// ID of the [`ScheduleChange`] to review.
    pub change_id: schedule_change::Id,

    /// ID of the reviewing [`Employee`].
    pub reviewer_id: employee::Id,

    /// [`Decision`] upon the [`ScheduleChange`].
    pub decision: Decision,

    /// [`review::Comment`] of the reviewer.
    pub comment: Option<review::Comment>,
}

impl<Db> Command<ReviewScheduleChange> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<ScheduleChange>, schedule_change::Id>>,
            Ok = Option<ScheduleChange>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<database::Error>,
        > + Database<Insert<ScheduleChange>, Err = Traced<database::Error>>
        + Database<Insert<Employee>, Err = Traced<database::Error>>
        + Database<Insert<Notification>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = ScheduleChange;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: ReviewScheduleChange,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ReviewScheduleChange {
            change_id,
            reviewer_id,
            decision,
            comment,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut change = tx
            .execute(Select(By::<Option<ScheduleChange>, _>::new(change_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ScheduleChangeNotExists(change_id))
            .map_err(tracerr::wrap!())?;
        if change.employee_id == reviewer_id {
            return Err(tracerr::new!(E::SelfReview));
        }
        _ = tx
            .execute(Select(By::<Option<Employee>, _>::new(reviewer_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ReviewerNotExists(reviewer_id))
            .map_err(tracerr::wrap!())?;

        change
            .review
            .decide(decision, reviewer_id, comment, DateTime::now().coerce())
            .map_err(tracerr::from_and_wrap!(=> E))?;

        if decision == Decision::Approve {
            let mut employee = tx
                .execute(Select(By::<Option<Employee>, _>::new(
                    change.employee_id,
                )))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::EmployeeNotExists(change.employee_id))
                .map_err(tracerr::wrap!())?;
            employee.schedule = change.requested.clone();
            tx.execute(Insert(employee))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))
                .map(drop)?;
        }

        tx.execute(Insert(change.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Insert(Notification::reviewed(
            change.employee_id,
            Topic::ScheduleChangeReviewed(change_id),
            &change.review,
        )))
        .await
        .map_err(tracerr::map_from_and_wrap!(=> E))
        .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!(
            "`ScheduleChange(id: {change_id})` {} by \
             `Employee(id: {reviewer_id})`",
            change.review.status,
        );
        Ok(change)
    }
}

/// Error of [`ReviewScheduleChange`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`ScheduleChange`] with the provided ID doesn't exist.
    #[display("`ScheduleChange(id: {_0})` does not exist")]
    ScheduleChangeNotExists(#[error(not(source))] schedule_change::Id),

    /// Reviewing [`Employee`] doesn't exist.
    #[display("`Employee(id: {_0})` does not exist")]
    ReviewerNotExists(#[error(not(source))] employee::Id),

    /// Requesting [`Employee`] doesn't exist anymore.
    #[display("`Employee(id: {_0})` does not exist")]
    EmployeeNotExists(#[error(not(source))] employee::Id),

    /// [`Employee`] attempts to review their own [`ScheduleChange`].
    #[display("`Employee` cannot review own `ScheduleChange`")]
    SelfReview,

    /// [`ScheduleChange`] has been reviewed already.
    #[display("{_0}")]
    #[from]
    NotPending(review::NotPending),
}
