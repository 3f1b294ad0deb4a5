//! [`Earnings`] definition.

use common::{
    operations::{By, Select},
    Date, Money,
};
use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use tracerr::Traced;

use crate::{
    domain::{employee, review, time_log, Employee, TimeLog},
    infra::{database, Database},
    read, Query, Service,
};

/// [`Query`] to calculate earnings of a part-time [`Employee`] for a given
/// period.
///
/// Only approved [`TimeLog`]s are paid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Earnings {
    /// ID of the [`Employee`] to calculate earnings of.
    pub employee_id: employee::Id,

    /// First day of the period (inclusive).
    pub since: Date,

    /// Last day of the period (inclusive).
    pub until: Date,
}

/// Output of the [`Earnings`] [`Query`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Output {
    /// Approved [`TimeLog`]s in the period, newest first.
    pub logs: Vec<time_log::Id>,

    /// Total approved hours in the period.
    pub hours: Decimal,

    /// Hourly rate of the [`Employee`].
    pub hourly_rate: Money,

    /// Total earnings in the period.
    pub earnings: Money,
}

impl<Db> Query<Earnings> for Service<Db>
where
    Db: Database<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<TimeLog>, read::time_log::list::Filter>>,
            Ok = Vec<TimeLog>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        Earnings {
            employee_id,
            since,
            until,
        }: Earnings,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let employee = self
            .database()
            .execute(Select(By::<Option<Employee>, _>::new(employee_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::EmployeeNotExists(employee_id))
            .map_err(tracerr::wrap!())?;
        let hourly_rate = employee
            .hourly_rate
            .filter(|_| employee.is_part_time())
            .ok_or(E::NotPartTime(employee_id))
            .map_err(tracerr::wrap!())?;

        let logs = self
            .database()
            .execute(Select(By::new(read::time_log::list::Filter {
                employee_id: Some(employee_id),
                status: Some(review::Status::Approved),
                since: Some(since),
                until: Some(until),
            })))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let hours = logs
            .iter()
            .map(|l| l.shift.hours())
            .fold(Decimal::ZERO, |acc, h| acc + h);
        let earnings = logs
            .iter()
            .try_fold(Money::zero(hourly_rate.currency), |acc, l| {
                acc.checked_add(hourly_rate.checked_mul(l.shift.hours())?)
            })
            .ok_or(E::Overflow)
            .map_err(tracerr::wrap!())?;

        Ok(Output {
            logs: logs.into_iter().map(|l| l.id).collect(),
            hours,
            hourly_rate,
            earnings,
        })
    }
}

/// Error of [`Earnings`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Employee`] with the provided ID doesn't exist.
    #[display("`Employee(id: {_0})` does not exist")]
    EmployeeNotExists(#[error(not(source))] employee::Id),

    /// [`Employee`] is not paid per hour.
    #[display("`Employee(id: {_0})` is not part-time")]
    NotPartTime(#[error(not(source))] employee::Id),

    /// Earnings don't fit into [`Money`].
    #[display("Earnings overflow")]
    Overflow,
}
