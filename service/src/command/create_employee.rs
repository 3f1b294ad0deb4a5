//! [`Command`] for creating a new [`Employee`].

use std::collections::BTreeSet;

use common::{
    operations::{By, Commit, Insert, Select, Transact, Transacted},
    DateTime, Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        contact::{Email, Name},
        employee::{self, BankAccount, Contract, EmploymentType, Role, Schedule},
        employer, Employee, Employer, Project,
    },
    infra::{database, Database},
    read, Service,
};

use super::Command;

/// [`Command`] for creating a new [`Employee`].
#[derive(Clone, Debug)]
pub struct CreateEmployee {
    /// ID of the [`Employer`] a new [`Employee`] works for.
    pub employer_id: Option<employer::Id>,

    /// [`Name`] of a new [`Employee`].
    pub name: Name,

    /// [`Email`] of a new [`Employee`].
    pub email: Email,

    /// [`BankAccount`] of a new [`Employee`].
    pub bank_account: Option<BankAccount>,

    /// [`Role`] of a new [`Employee`].
    pub role: Role,

    /// [`EmploymentType`] of a new [`Employee`].
    pub employment_type: EmploymentType,

    /// [`Project`]s a new [`Employee`] is assigned to.
    pub projects: BTreeSet<Project>,

    /// Employment [`Contract`] of a new [`Employee`].
    pub contract: Contract,

    /// Working [`Schedule`] of a new [`Employee`].
    ///
    /// [`Schedule::default()`] is used if [`None`].
    pub schedule: Option<Schedule>,

    /// Hourly rate of a new [`Employee`].
    pub hourly_rate: Option<Money>,
}

impl<Db> Command<CreateEmployee> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Employer>, employer::Id>>,
            Ok = Option<Employer>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Employee>, read::employee::list::Filter>>,
            Ok = Vec<Employee>,
            Err = Traced<database::Error>,
        > + Database<Insert<Employee>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Employee;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateEmployee,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateEmployee {
            employer_id,
            name,
            email,
            bank_account,
            role,
            employment_type,
            projects,
            contract,
            schedule,
            hourly_rate,
        } = cmd;

        role.check_projects(&projects)
            .map_err(tracerr::from_and_wrap!(=> E))?;
        employee::check_hourly_rate(employment_type, hourly_rate.as_ref())
            .map_err(tracerr::from_and_wrap!(=> E))?;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        if let Some(id) = employer_id {
            _ = tx
                .execute(Select(By::<Option<Employer>, _>::new(id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::EmployerNotExists(id))
                .map_err(tracerr::wrap!())?;
        }

        let occupied = tx
            .execute(Select(By::new(read::employee::list::Filter {
                email: Some(email.clone()),
                ..read::employee::list::Filter::default()
            })))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if !occupied.is_empty() {
            return Err(tracerr::new!(E::EmailOccupied(email)));
        }

        let employee = Employee {
            id: employee::Id::new(),
            employer_id,
            name,
            email,
            bank_account,
            role,
            employment_type,
            projects,
            contract,
            leave_extension: None,
            schedule: schedule.unwrap_or_default(),
            hourly_rate,
            created_at: DateTime::now().coerce(),
        };

        tx.execute(Insert(employee.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!("`Employee(id: {})` created", employee.id);
        Ok(employee)
    }
}

/// Error of [`CreateEmployee`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Employer`] with the provided ID doesn't exist.
    #[display("`Employer(id: {_0})` does not exist")]
    EmployerNotExists(#[error(not(source))] employer::Id),

    /// [`Email`] is already used by another [`Employee`].
    #[display("`{_0}` email is occupied")]
    EmailOccupied(#[error(not(source))] Email),

    /// [`Role`] doesn't allow that many [`Project`]s.
    #[display("{_0}")]
    #[from]
    TooManyProjects(employee::TooManyProjects),

    /// Hourly rate doesn't suit the [`EmploymentType`].
    #[display("{_0}")]
    #[from]
    InvalidHourlyRate(employee::InvalidHourlyRate),
}

#[cfg(test)]
mod spec {
    use std::collections::BTreeSet;

    use common::operations::Insert;

    use crate::{
        command::{create_employee::ExecutionError, Command as _},
        domain::{
            contact,
            employee::{Contract, EmploymentType, InvalidHourlyRate, Role},
            employer, Project,
        },
        infra::Database as _,
        test_util,
    };

    use super::CreateEmployee;

    fn command(email: &str) -> CreateEmployee {
        CreateEmployee {
            employer_id: None,
            name: contact::Name::new("Sarah Johnson").unwrap(),
            email: contact::Email::new(email).unwrap(),
            bank_account: None,
            role: Role::Engineer,
            employment_type: EmploymentType::FullTime,
            projects: [Project::new("KNS").unwrap()].into(),
            contract: Contract::new(
                test_util::date("2024-01-01").coerce(),
                test_util::date("2024-12-31").coerce(),
            )
            .unwrap(),
            schedule: None,
            hourly_rate: None,
        }
    }

    #[tokio::test]
    async fn creates_employee_with_default_schedule() {
        let svc = test_util::service();
        let employer = test_util::employer();
        svc.database()
            .execute(Insert(employer.clone()))
            .await
            .unwrap();

        let employee = svc
            .execute(CreateEmployee {
                employer_id: Some(employer.id),
                ..command("sarah@company.com")
            })
            .await
            .unwrap();

        assert_eq!(employee.employer_id, Some(employer.id));
        assert_eq!(employee.schedule, Default::default());
        assert!(employee.leave_extension.is_none());
    }

    #[tokio::test]
    async fn rejects_occupied_email() {
        let svc = test_util::service();
        _ = svc.execute(command("sarah@company.com")).await.unwrap();

        let err = svc
            .execute(command("sarah@company.com"))
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::EmailOccupied(_)));
    }

    #[tokio::test]
    async fn rejects_unknown_employer() {
        let svc = test_util::service();

        let err = svc
            .execute(CreateEmployee {
                employer_id: Some(employer::Id::new()),
                ..command("sarah@company.com")
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::EmployerNotExists(_),
        ));
    }

    #[tokio::test]
    async fn limits_projects_by_role() {
        let svc = test_util::service();
        let projects: BTreeSet<_> = ["KNS", "gsfm"]
            .into_iter()
            .map(|p| Project::new(p).unwrap())
            .collect();

        let err = svc
            .execute(CreateEmployee {
                projects: projects.clone(),
                ..command("sarah@company.com")
            })
            .await
            .unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::TooManyProjects(_)));

        let pm = svc
            .execute(CreateEmployee {
                role: Role::ProductManager,
                projects,
                ..command("sarah@company.com")
            })
            .await
            .unwrap();
        assert_eq!(pm.projects.len(), 2);
    }

    #[tokio::test]
    async fn part_time_requires_positive_hourly_rate() {
        let svc = test_util::service();

        let err = svc
            .execute(CreateEmployee {
                employment_type: EmploymentType::PartTime,
                ..command("sarah@company.com")
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::InvalidHourlyRate(InvalidHourlyRate::Missing),
        ));

        let err = svc
            .execute(CreateEmployee {
                employment_type: EmploymentType::PartTime,
                hourly_rate: Some("0USD".parse().unwrap()),
                ..command("sarah@company.com")
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::InvalidHourlyRate(_),
        ));

        let employee = svc
            .execute(CreateEmployee {
                employment_type: EmploymentType::PartTime,
                hourly_rate: Some("25.50USD".parse().unwrap()),
                ..command("sarah@company.com")
            })
            .await
            .unwrap();
        assert!(employee.is_part_time());
    }
}
