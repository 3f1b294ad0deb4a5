//! [`Command`] for reviewing an [`ExpenseClaim`].

use common::{
    operations::{By, Commit, Insert, Select, Transact, Transacted},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        employee, expense,
        notification::Topic,
        review::{self, Decision},
        Employee, ExpenseClaim, Notification,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for approving or rejecting a pending [`ExpenseClaim`].
#[derive(Clone, Debug)]
pub struct ReviewExpenseClaim {
    /// ID of the [`ExpenseClaim`] to review.
    pub claim_id: expense::Id,

    /// ID of the reviewing [`Employee`].
    pub reviewer_id: employee::Id,

    /// [`Decision`] upon the [`ExpenseClaim`].
    pub decision: Decision,

    /// [`review::Comment`] of the reviewer, usually a rejection reason.
    pub comment: Option<review::Comment>,
}

impl<Db> Command<ReviewExpenseClaim> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<ExpenseClaim>, expense::Id>>,
            Ok = Option<ExpenseClaim>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<database::Error>,
        > + Database<Insert<ExpenseClaim>, Err = Traced<database::Error>>
        + Database<Insert<Notification>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = ExpenseClaim;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: ReviewExpenseClaim,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ReviewExpenseClaim {
            claim_id,
            reviewer_id,
            decision,
            comment,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut claim = tx
            .execute(Select(By::<Option<ExpenseClaim>, _>::new(claim_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ExpenseClaimNotExists(claim_id))
            .map_err(tracerr::wrap!())?;
        if claim.employee_id == reviewer_id {
            return Err(tracerr::new!(E::SelfReview));
        }
        _ = tx
            .execute(Select(By::<Option<Employee>, _>::new(reviewer_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ReviewerNotExists(reviewer_id))
            .map_err(tracerr::wrap!())?;

        claim
            .review
            .decide(decision, reviewer_id, comment, DateTime::now().coerce())
            .map_err(tracerr::from_and_wrap!(=> E))?;

        tx.execute(Insert(claim.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Insert(Notification::reviewed(
            claim.employee_id,
            Topic::ExpenseClaimReviewed(claim_id),
            &claim.review,
        )))
        .await
        .map_err(tracerr::map_from_and_wrap!(=> E))
        .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!(
            "`ExpenseClaim(id: {claim_id})` {} by \
             `Employee(id: {reviewer_id})`",
            claim.review.status,
        );
        Ok(claim)
    }
}

/// Error of [`ReviewExpenseClaim`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`ExpenseClaim`] with the provided ID doesn't exist.
    #[display("`ExpenseClaim(id: {_0})` does not exist")]
    ExpenseClaimNotExists(#[error(not(source))] expense::Id),

    /// Reviewing [`Employee`] doesn't exist.
    #[display("`Employee(id: {_0})` does not exist")]
    ReviewerNotExists(#[error(not(source))] employee::Id),

    /// [`Employee`] attempts to review their own [`ExpenseClaim`].
    #[display("`Employee` cannot review own `ExpenseClaim`")]
    SelfReview,

    /// [`ExpenseClaim`] has been reviewed already.
    #[display("{_0}")]
    #[from]
    NotPending(review::NotPending),
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Insert, Select};

    use crate::{
        command::{
            review_expense_claim::ExecutionError, Command as _,
            SubmitExpenseClaim,
        },
        domain::{
            employee, expense,
            notification::{self, Topic},
            review::{self, Decision},
            Notification,
        },
        infra::Database as _,
        read,
        test_util::{self, from_today},
    };

    use super::ReviewExpenseClaim;

    #[tokio::test]
    async fn rejects_with_reason_and_notifies() {
        let svc = test_util::service();
        let employee = test_util::employee(from_today(-30), from_today(300));
        let reviewer = test_util::employee(from_today(-30), from_today(300));
        for e in [employee.clone(), reviewer.clone()] {
            svc.database().execute(Insert(e)).await.unwrap();
        }
        let claim = svc
            .execute(SubmitExpenseClaim {
                employee_id: employee.id,
                amount: "1200USD".parse().unwrap(),
                category: expense::Category::Equipment,
                description: expense::Description::new("Laptop").unwrap(),
                incurred_on: from_today(-1).coerce(),
                project: None,
            })
            .await
            .unwrap();
        let cmd = ReviewExpenseClaim {
            claim_id: claim.id,
            reviewer_id: reviewer.id,
            decision: Decision::Reject,
            comment: review::Comment::new("Use the company laptop"),
        };

        let reviewed = svc.execute(cmd.clone()).await.unwrap();
        assert_eq!(reviewed.review.status, review::Status::Rejected);

        let notifications = svc
            .database()
            .execute(Select(By::<Vec<Notification>, _>::new(
                read::notification::list::Filter {
                    employee_id: Some(employee.id),
                    unread_only: true,
                    topic: Some(Topic::ExpenseClaimReviewed(claim.id)),
                },
            )))
            .await
            .unwrap();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, notification::Kind::Error);
        assert!(notifications[0]
            .message
            .to_string()
            .ends_with("Comment: Use the company laptop"));

        let err = svc.execute(cmd).await.unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::NotPending(_)));
    }

    #[tokio::test]
    async fn fails_for_unknown_claim() {
        let svc = test_util::service();

        let err = svc
            .execute(ReviewExpenseClaim {
                claim_id: expense::Id::new(),
                reviewer_id: employee::Id::new(),
                decision: Decision::Approve,
                comment: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::ExpenseClaimNotExists(_),
        ));
    }
}
