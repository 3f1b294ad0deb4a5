//! [`Balance`] query definition.

use common::{
    operations::{By, Select},
    Date, Percent,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{employee, leave, Employee},
    infra::{database, Database},
    read, Query, Service,
};

/// [`Query`] computing the leave balance of an [`Employee`].
#[derive(Clone, Copy, Debug)]
pub struct Balance {
    /// ID of the [`Employee`] to compute the leave balance of.
    pub employee_id: employee::Id,

    /// [`Date`] to compute the leave balance on.
    ///
    /// Today is used if [`None`].
    pub on: Option<Date>,
}

/// Output of the [`Balance`] [`Query`].
#[derive(Clone, Debug)]
pub struct Output {
    /// [`Employee`] the leave balance is computed for.
    pub employee: Employee,

    /// [`Date`] the leave balance is computed on.
    pub on: Date,

    /// Computed [`leave::Balance`].
    pub balance: leave::Balance,

    /// Indicator whether the leave balance expires within the configured
    /// warning period.
    pub expires_soon: bool,

    /// Share of the earned leave days being already used.
    pub usage: Percent,

    /// Number of started months since the contract start.
    pub months_since_contract: u32,
}

impl<Db> Query<Balance> for Service<Db>
where
    Db: Database<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<read::leave::UsedDays, employee::Id>>,
            Ok = read::leave::UsedDays,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        Balance { employee_id, on }: Balance,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let employee = self
            .database()
            .execute(Select(By::<Option<Employee>, _>::new(employee_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::EmployeeNotExists(employee_id))
            .map_err(tracerr::wrap!())?;
        let used = self
            .database()
            .execute(Select(By::<read::leave::UsedDays, _>::new(employee_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let on = on.unwrap_or_else(Date::today);
        let accrual = employee.leave_accrual(used.into());
        let balance = accrual.compute(on);

        Ok(Output {
            on,
            expires_soon: balance
                .expires_soon(on, self.config().leave_expiry_warning),
            usage: balance.usage(),
            months_since_contract: accrual.months_since_contract(on),
            balance,
            employee,
        })
    }
}

/// Error of [`Balance`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Employee`] with the provided ID doesn't exist.
    #[display("`Employee(id: {_0})` does not exist")]
    EmployeeNotExists(#[error(not(source))] employee::Id),
}
