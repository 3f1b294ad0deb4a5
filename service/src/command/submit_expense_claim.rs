//! [`Command`] for submitting a new [`ExpenseClaim`].

use common::{
    operations::{By, Commit, Insert, Select, Transact, Transacted},
    Date, DateTime, Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{employee, expense, Employee, ExpenseClaim, Project, Review},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for submitting a new [`ExpenseClaim`].
#[derive(Clone, Debug)]
pub struct SubmitExpenseClaim {
    /// ID of the claiming [`Employee`].
    pub employee_id: employee::Id,

    /// Claimed amount of [`Money`].
    pub amount: Money,

    /// [`expense::Category`] of the expense.
    pub category: expense::Category,

    /// [`expense::Description`] of the expense.
    pub description: expense::Description,

    /// [`Date`] the expense was incurred on.
    pub incurred_on: expense::IncurredDate,

    /// [`Project`] the expense relates to.
    pub project: Option<Project>,
}

impl<Db> Command<SubmitExpenseClaim> for Service<Db>
where
    Db: Database<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<database::Error>,
        > + Database<Insert<ExpenseClaim>, Err = Traced<database::Error>>,
{
    type Ok = ExpenseClaim;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SubmitExpenseClaim,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SubmitExpenseClaim {
            employee_id,
            amount,
            category,
            description,
            incurred_on,
            project,
        } = cmd;

        if !amount.is_positive() {
            return Err(tracerr::new!(E::NonPositiveAmount(amount)));
        }
        if incurred_on.coerce::<()>() > Date::today() {
            return Err(tracerr::new!(E::IncurredInFuture(
                incurred_on.coerce(),
            )));
        }

        _ = self
            .database()
            .execute(Select(By::<Option<Employee>, _>::new(employee_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::EmployeeNotExists(employee_id))
            .map_err(tracerr::wrap!())?;

        let claim = ExpenseClaim {
            id: expense::Id::new(),
            employee_id,
            amount,
            category,
            description,
            incurred_on,
            project,
            review: Review::pending(),
            created_at: DateTime::now().coerce(),
        };
        self.database()
            .execute(Insert(claim.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!(
            "`ExpenseClaim(id: {})` of {amount} submitted by \
             `Employee(id: {employee_id})`",
            claim.id,
        );
        Ok(claim)
    }
}

/// Error of [`SubmitExpenseClaim`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Employee`] with the provided ID doesn't exist.
    #[display("`Employee(id: {_0})` does not exist")]
    EmployeeNotExists(#[error(not(source))] employee::Id),

    /// Claimed amount is zero or negative.
    #[display("Claimed amount `{_0}` must be positive")]
    NonPositiveAmount(#[error(not(source))] Money),

    /// Expense is dated in the future.
    #[display("Expense cannot be incurred in the future: {_0}")]
    IncurredInFuture(#[error(not(source))] Date),
}

#[cfg(test)]
mod spec {
    use common::operations::Insert;

    use crate::{
        command::{submit_expense_claim::ExecutionError, Command as _},
        domain::{employee, expense, review, Project},
        infra::Database as _,
        test_util::{self, from_today},
    };

    use super::SubmitExpenseClaim;

    fn command(employee_id: employee::Id, amount: &str) -> SubmitExpenseClaim {
        SubmitExpenseClaim {
            employee_id,
            amount: amount.parse().unwrap(),
            category: expense::Category::Travel,
            description: expense::Description::new("Taxi to the client")
                .unwrap(),
            incurred_on: from_today(-2).coerce(),
            project: Project::new("KNS"),
        }
    }

    #[tokio::test]
    async fn submits_pending_claim() {
        let svc = test_util::service();
        let employee = test_util::employee(from_today(-30), from_today(300));
        svc.database()
            .execute(Insert(employee.clone()))
            .await
            .unwrap();

        let claim = svc
            .execute(command(employee.id, "42.50EUR"))
            .await
            .unwrap();

        assert_eq!(claim.amount.to_string(), "42.5EUR");
        assert_eq!(claim.review.status, review::Status::Pending);
    }

    #[tokio::test]
    async fn validates_amount_and_date() {
        let svc = test_util::service();
        let employee = test_util::employee(from_today(-30), from_today(300));
        svc.database()
            .execute(Insert(employee.clone()))
            .await
            .unwrap();

        let err = svc
            .execute(command(employee.id, "0USD"))
            .await
            .unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::NonPositiveAmount(_),
        ));

        let err = svc
            .execute(SubmitExpenseClaim {
                incurred_on: from_today(1).coerce(),
                ..command(employee.id, "10USD")
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::IncurredInFuture(_),
        ));
    }

    #[tokio::test]
    async fn fails_for_unknown_employee() {
        let svc = test_util::service();

        let err = svc
            .execute(command(employee::Id::new(), "10USD"))
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::EmployeeNotExists(_),
        ));
    }
}
