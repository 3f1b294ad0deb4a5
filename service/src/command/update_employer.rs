//! [`Command`] for updating an [`Employer`].

use common::operations::{By, Commit, Insert, Select, Transact, Transacted};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        contact::{Address, Email, Name, Phone},
        employer, Employer,
    },
    infra::{database, Database},
    read, Service,
};

use super::Command;

/// [`Command`] for updating an [`Employer`].
///
/// [`None`] fields are left unchanged.
#[derive(Clone, Debug)]
pub struct UpdateEmployer {
    /// ID of the [`Employer`] to update.
    pub employer_id: employer::Id,

    /// New [`Name`] of the contact person.
    pub name: Option<Name>,

    /// New [`Email`].
    pub email: Option<Email>,

    /// New [`Phone`].
    pub phone: Option<Phone>,

    /// New [`Address`].
    pub address: Option<Address>,

    /// New [`employer::CompanyName`].
    pub company_name: Option<employer::CompanyName>,

    /// New [`employer::Industry`].
    pub industry: Option<employer::Industry>,

    /// New declared number of employees.
    pub employee_count: Option<u32>,
}

impl<Db> Command<UpdateEmployer> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Employer>, employer::Id>>,
            Ok = Option<Employer>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Employer>, read::employer::list::Filter>>,
            Ok = Vec<Employer>,
            Err = Traced<database::Error>,
        > + Database<Insert<Employer>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Employer;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateEmployer,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateEmployer {
            employer_id,
            name,
            email,
            phone,
            address,
            company_name,
            industry,
            employee_count,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut employer = tx
            .execute(Select(By::<Option<Employer>, _>::new(employer_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::EmployerNotExists(employer_id))
            .map_err(tracerr::wrap!())?;

        if let Some(email) = email {
            if email != employer.email {
                let occupied = tx
                    .execute(Select(By::new(read::employer::list::Filter {
                        email: Some(email.clone()),
                        ..read::employer::list::Filter::default()
                    })))
                    .await
                    .map_err(tracerr::map_from_and_wrap!(=> E))?;
                if !occupied.is_empty() {
                    return Err(tracerr::new!(E::EmailOccupied(email)));
                }
                employer.email = email;
            }
        }
        if let Some(name) = name {
            employer.name = name;
        }
        if let Some(company_name) = company_name {
            employer.company_name = company_name;
        }
        employer.phone = phone.or(employer.phone);
        employer.address = address.or(employer.address);
        employer.industry = industry.or(employer.industry);
        employer.employee_count = employee_count.or(employer.employee_count);

        tx.execute(Insert(employer.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!("`Employer(id: {employer_id})` updated");
        Ok(employer)
    }
}

/// Error of [`UpdateEmployer`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Employer`] with the provided ID doesn't exist.
    #[display("`Employer(id: {_0})` does not exist")]
    EmployerNotExists(#[error(not(source))] employer::Id),

    /// [`Email`] is already used by another [`Employer`].
    #[display("`{_0}` email is occupied")]
    EmailOccupied(#[error(not(source))] Email),
}

#[cfg(test)]
mod spec {
    use common::operations::Insert;

    use crate::{
        command::{update_employer::ExecutionError, Command as _},
        domain::employer,
        test_util,
    };

    use super::UpdateEmployer;

    fn command(employer_id: employer::Id) -> UpdateEmployer {
        UpdateEmployer {
            employer_id,
            name: None,
            email: None,
            phone: None,
            address: None,
            company_name: None,
            industry: None,
            employee_count: None,
        }
    }

    #[tokio::test]
    async fn updates_provided_fields_only() {
        let svc = test_util::service();
        let existing = test_util::employer();
        svc.database()
            .execute(Insert(existing.clone()))
            .await
            .unwrap();

        let updated = svc
            .execute(UpdateEmployer {
                company_name: employer::CompanyName::new("Acme Holdings"),
                employee_count: Some(120),
                ..command(existing.id)
            })
            .await
            .unwrap();

        assert_eq!(updated.company_name.to_string(), "Acme Holdings");
        assert_eq!(updated.employee_count, Some(120));
        assert_eq!(updated.name, existing.name);
        assert_eq!(updated.email, existing.email);
    }

    #[tokio::test]
    async fn keeps_own_email() {
        let svc = test_util::service();
        let existing = test_util::employer();
        svc.database()
            .execute(Insert(existing.clone()))
            .await
            .unwrap();

        let updated = svc
            .execute(UpdateEmployer {
                email: Some(existing.email.clone()),
                ..command(existing.id)
            })
            .await
            .unwrap();

        assert_eq!(updated.email, existing.email);
    }

    #[tokio::test]
    async fn rejects_email_of_another_employer() {
        let svc = test_util::service();
        let (first, second) = (test_util::employer(), test_util::employer());
        for e in [first.clone(), second.clone()] {
            svc.database().execute(Insert(e)).await.unwrap();
        }

        let err = svc
            .execute(UpdateEmployer {
                email: Some(second.email.clone()),
                ..command(first.id)
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::EmailOccupied(_)));
    }

    #[tokio::test]
    async fn fails_for_unknown_employer() {
        let svc = test_util::service();

        let err = svc
            .execute(command(employer::Id::new()))
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::EmployerNotExists(_),
        ));
    }
}
