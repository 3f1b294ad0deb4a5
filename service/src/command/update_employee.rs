//! [`Command`] for updating an [`Employee`].

use std::collections::BTreeSet;

use common::{
    operations::{By, Commit, Insert, Select, Transact, Transacted},
    Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        contact::{Email, Name},
        employee::{self, BankAccount, Contract, EmploymentType, Role},
        employer, Employee, Employer, Project,
    },
    infra::{database, Database},
    read, Service,
};

use super::Command;

/// [`Command`] for updating an [`Employee`].
///
/// [`None`] fields are left unchanged. The resulting [`Employee`] is
/// validated as a whole, so changing a [`Role`] may require changing its
/// [`Project`]s as well.
#[derive(Clone, Debug)]
pub struct UpdateEmployee {
    /// ID of the [`Employee`] to update.
    pub employee_id: employee::Id,

    /// ID of the new [`Employer`].
    pub employer_id: Option<employer::Id>,

    /// New [`Name`].
    pub name: Option<Name>,

    /// New [`Email`].
    pub email: Option<Email>,

    /// New [`BankAccount`].
    pub bank_account: Option<BankAccount>,

    /// New [`Role`].
    pub role: Option<Role>,

    /// New [`EmploymentType`].
    pub employment_type: Option<EmploymentType>,

    /// New set of [`Project`]s.
    pub projects: Option<BTreeSet<Project>>,

    /// New employment [`Contract`].
    pub contract: Option<Contract>,

    /// New hourly rate.
    pub hourly_rate: Option<Money>,
}

impl<Db> Command<UpdateEmployee> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<database::Error>,
        > + Database<
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
        cmd: UpdateEmployee,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateEmployee {
            employee_id,
            employer_id,
            name,
            email,
            bank_account,
            role,
            employment_type,
            projects,
            contract,
            hourly_rate,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut employee = tx
            .execute(Select(By::<Option<Employee>, _>::new(employee_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::EmployeeNotExists(employee_id))
            .map_err(tracerr::wrap!())?;

        if let Some(id) = employer_id {
            _ = tx
                .execute(Select(By::<Option<Employer>, _>::new(id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::EmployerNotExists(id))
                .map_err(tracerr::wrap!())?;
            employee.employer_id = Some(id);
        }

        if let Some(email) = email {
            if email != employee.email {
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
                employee.email = email;
            }
        }

        if let Some(name) = name {
            employee.name = name;
        }
        if let Some(role) = role {
            employee.role = role;
        }
        if let Some(employment_type) = employment_type {
            employee.employment_type = employment_type;
        }
        if let Some(projects) = projects {
            employee.projects = projects;
        }
        if let Some(contract) = contract {
            employee.contract = contract;
        }
        employee.bank_account = bank_account.or(employee.bank_account);
        employee.hourly_rate = hourly_rate.or(employee.hourly_rate);

        employee
            .role
            .check_projects(&employee.projects)
            .map_err(tracerr::from_and_wrap!(=> E))?;
        employee::check_hourly_rate(
            employee.employment_type,
            employee.hourly_rate.as_ref(),
        )
        .map_err(tracerr::from_and_wrap!(=> E))?;
        if let Some(ext) = &employee.leave_extension {
            if !ext.fits(&employee.contract) {
                return Err(tracerr::new!(E::ContractConflictsExtension));
            }
        }

        tx.execute(Insert(employee.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!("`Employee(id: {employee_id})` updated");
        Ok(employee)
    }
}

/// Error of [`UpdateEmployee`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Employee`] with the provided ID doesn't exist.
    #[display("`Employee(id: {_0})` does not exist")]
    EmployeeNotExists(#[error(not(source))] employee::Id),

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

    /// New [`Contract`] ends on or after the granted leave extension.
    #[display("`Contract` must end before the granted leave extension")]
    ContractConflictsExtension,
}

#[cfg(test)]
mod spec {
    use common::{operations::Insert, DateTime};

    use crate::{
        command::{update_employee::ExecutionError, Command as _},
        domain::{
            employee::{self, Contract, EmploymentType, Role},
            leave, Project,
        },
        test_util,
    };

    use super::UpdateEmployee;

    fn command(employee_id: employee::Id) -> UpdateEmployee {
        UpdateEmployee {
            employee_id,
            employer_id: None,
            name: None,
            email: None,
            bank_account: None,
            role: None,
            employment_type: None,
            projects: None,
            contract: None,
            hourly_rate: None,
        }
    }

    #[tokio::test]
    async fn promotes_to_product_manager_with_more_projects() {
        let svc = test_util::service();
        let existing = test_util::employee(
            test_util::date("2024-01-01"),
            test_util::date("2024-12-31"),
        );
        svc.database()
            .execute(Insert(existing.clone()))
            .await
            .unwrap();

        let updated = svc
            .execute(UpdateEmployee {
                role: Some(Role::ProductManager),
                projects: Some(
                    ["KNS", "gsfm", "amass"]
                        .into_iter()
                        .map(|p| Project::new(p).unwrap())
                        .collect(),
                ),
                ..command(existing.id)
            })
            .await
            .unwrap();

        assert_eq!(updated.role, Role::ProductManager);
        assert_eq!(updated.projects.len(), 3);
        assert_eq!(updated.email, existing.email);
    }

    #[tokio::test]
    async fn validates_resulting_employee() {
        let svc = test_util::service();
        let existing = test_util::employee(
            test_util::date("2024-01-01"),
            test_util::date("2024-12-31"),
        );
        svc.database()
            .execute(Insert(existing.clone()))
            .await
            .unwrap();

        let err = svc
            .execute(UpdateEmployee {
                projects: Some(
                    ["KNS", "gsfm"]
                        .into_iter()
                        .map(|p| Project::new(p).unwrap())
                        .collect(),
                ),
                ..command(existing.id)
            })
            .await
            .unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::TooManyProjects(_)));

        let err = svc
            .execute(UpdateEmployee {
                employment_type: Some(EmploymentType::PartTime),
                ..command(existing.id)
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::InvalidHourlyRate(_),
        ));
    }

    #[tokio::test]
    async fn keeps_contract_ending_before_extension() {
        let svc = test_util::service();
        let mut existing = test_util::employee(
            test_util::date("2024-01-01"),
            test_util::date("2024-12-31"),
        );
        existing.leave_extension = Some(leave::Extension {
            extended_until: test_util::date("2025-03-31").coerce(),
            reason: leave::extension::Reason::new("Handover").unwrap(),
            approved_by: employee::Id::new(),
            approved_at: DateTime::now().coerce(),
        });
        svc.database()
            .execute(Insert(existing.clone()))
            .await
            .unwrap();
        let contract = |end| {
            Contract::new(
                test_util::date("2024-01-01").coerce(),
                test_util::date(end).coerce(),
            )
        };

        for end in ["2025-03-31", "2025-06-30"] {
            let err = svc
                .execute(UpdateEmployee {
                    contract: contract(end),
                    ..command(existing.id)
                })
                .await
                .unwrap_err();
            assert!(
                matches!(
                    err.as_ref(),
                    ExecutionError::ContractConflictsExtension,
                ),
                "accepted {end}",
            );
        }

        let updated = svc
            .execute(UpdateEmployee {
                contract: contract("2025-01-31"),
                ..command(existing.id)
            })
            .await
            .unwrap();
        assert_eq!(
            updated.contract.end.coerce::<()>(),
            test_util::date("2025-01-31"),
        );
        assert!(updated.leave_extension.is_some());
    }

    #[tokio::test]
    async fn rejects_email_of_another_employee() {
        let svc = test_util::service();
        let first = test_util::employee(
            test_util::date("2024-01-01"),
            test_util::date("2024-12-31"),
        );
        let second = test_util::employee(
            test_util::date("2024-01-01"),
            test_util::date("2024-12-31"),
        );
        for e in [first.clone(), second.clone()] {
            svc.database().execute(Insert(e)).await.unwrap();
        }

        let err = svc
            .execute(UpdateEmployee {
                email: Some(second.email.clone()),
                ..command(first.id)
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::EmailOccupied(_)));
    }

    #[tokio::test]
    async fn fails_for_unknown_employee() {
        let svc = test_util::service();

        let err = svc
            .execute(command(employee::Id::new()))
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::EmployeeNotExists(_),
        ));
    }
}
