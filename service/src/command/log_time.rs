//! [`Command`] for logging worked time of a part-time [`Employee`].

use common::{
    operations::{By, Insert, Select},
    Date, DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        employee,
        time_log::{self, Shift},
        Employee, Project, Review, TimeLog,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for logging a worked [`Shift`] of a part-time [`Employee`].
#[derive(Clone, Debug)]
pub struct LogTime {
    /// ID of the working [`Employee`].
    pub employee_id: employee::Id,

    /// [`Date`] the work was done on.
    pub date: time_log::WorkDate,

    /// Worked [`Shift`].
    pub shift: Shift,

    /// [`time_log::Description`] of the work.
    pub description: time_log::Description,

    /// [`Project`] the work was done for.
    pub project: Project,
}

impl<Db> Command<LogTime> for Service<Db>
where
    Db: Database<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<database::Error>,
        > + Database<Insert<TimeLog>, Err = Traced<database::Error>>,
{
    type Ok = TimeLog;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: LogTime) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let LogTime {
            employee_id,
            date,
            shift,
            description,
            project,
        } = cmd;

        if date.coerce::<()>() > Date::today() {
            return Err(tracerr::new!(E::FutureDate(date.coerce())));
        }

        let employee = self
            .database()
            .execute(Select(By::<Option<Employee>, _>::new(employee_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::EmployeeNotExists(employee_id))
            .map_err(tracerr::wrap!())?;
        if !employee.is_part_time() {
            return Err(tracerr::new!(E::NotPartTime(employee_id)));
        }
        if !employee.projects.contains(&project) {
            return Err(tracerr::new!(E::ProjectNotAssigned(project)));
        }

        let entry = TimeLog {
            id: time_log::Id::new(),
            employee_id,
            date,
            shift,
            description,
            project,
            review: Review::pending(),
            created_at: DateTime::now().coerce(),
        };
        self.database()
            .execute(Insert(entry.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!(
            "`TimeLog(id: {})` of {}h logged by \
             `Employee(id: {employee_id})`",
            entry.id,
            shift.hours(),
        );
        Ok(entry)
    }
}

/// Error of [`LogTime`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Employee`] with the provided ID doesn't exist.
    #[display("`Employee(id: {_0})` does not exist")]
    EmployeeNotExists(#[error(not(source))] employee::Id),

    /// [`Employee`] is not employed part-time.
    #[display("`Employee(id: {_0})` is not part-time")]
    NotPartTime(#[error(not(source))] employee::Id),

    /// [`Employee`] is not assigned to the [`Project`].
    #[display("`Employee` is not assigned to `{_0}` project")]
    ProjectNotAssigned(#[error(not(source))] Project),

    /// Work is dated in the future.
    #[display("Time cannot be logged for a future date: {_0}")]
    FutureDate(#[error(not(source))] Date),
}

#[cfg(test)]
mod spec {
    use common::{operations::Insert, TimeOfDay};
    use rust_decimal::Decimal;

    use crate::{
        command::{log_time::ExecutionError, Command as _},
        domain::{
            employee::{self, EmploymentType},
            time_log::{self, Shift},
            Employee, Project,
        },
        infra::Database as _,
        test_util::{self, from_today},
    };

    use super::LogTime;

    fn part_timer() -> Employee {
        Employee {
            employment_type: EmploymentType::PartTime,
            hourly_rate: Some("25.50USD".parse().unwrap()),
            ..test_util::employee(from_today(-30), from_today(300))
        }
    }

    fn command(employee_id: employee::Id, days_ago: i64) -> LogTime {
        LogTime {
            employee_id,
            date: from_today(-days_ago).coerce(),
            shift: Shift::new(
                TimeOfDay::new(9, 0).unwrap(),
                TimeOfDay::new(13, 30).unwrap(),
            )
            .unwrap(),
            description: time_log::Description::new("API integration")
                .unwrap(),
            project: Project::new("KNS").unwrap(),
        }
    }

    #[tokio::test]
    async fn logs_pending_time() {
        let svc = test_util::service();
        let employee = part_timer();
        svc.database()
            .execute(Insert(employee.clone()))
            .await
            .unwrap();

        let entry = svc.execute(command(employee.id, 1)).await.unwrap();

        assert_eq!(entry.shift.hours(), Decimal::new(45, 1));
        assert!(entry.review.is_pending());
    }

    #[tokio::test]
    async fn only_part_timers_log_time() {
        let svc = test_util::service();
        let employee = test_util::employee(from_today(-30), from_today(300));
        svc.database()
            .execute(Insert(employee.clone()))
            .await
            .unwrap();

        let err = svc.execute(command(employee.id, 1)).await.unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::NotPartTime(_)));
    }

    #[tokio::test]
    async fn validates_date_and_project() {
        let svc = test_util::service();
        let employee = part_timer();
        svc.database()
            .execute(Insert(employee.clone()))
            .await
            .unwrap();

        let err = svc.execute(command(employee.id, -1)).await.unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::FutureDate(_)));

        let err = svc
            .execute(LogTime {
                project: Project::new("gsfm").unwrap(),
                ..command(employee.id, 0)
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::ProjectNotAssigned(_),
        ));
    }
}
