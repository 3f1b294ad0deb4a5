//! [`Command`] for creating a new [`Employer`].

use common::{
    operations::{By, Commit, Insert, Select, Transact, Transacted},
    DateTime,
};
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

/// [`Command`] for creating a new [`Employer`].
#[derive(Clone, Debug)]
pub struct CreateEmployer {
    /// [`Name`] of the contact person of a new [`Employer`].
    pub name: Name,

    /// [`Email`] of a new [`Employer`].
    pub email: Email,

    /// [`Phone`] of a new [`Employer`].
    pub phone: Option<Phone>,

    /// [`Address`] of a new [`Employer`].
    pub address: Option<Address>,

    /// [`employer::CompanyName`] of a new [`Employer`].
    pub company_name: employer::CompanyName,

    /// [`employer::Industry`] of a new [`Employer`].
    pub industry: Option<employer::Industry>,

    /// Declared number of employees of a new [`Employer`].
    pub employee_count: Option<u32>,
}

impl<Db> Command<CreateEmployer> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
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
        cmd: CreateEmployer,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateEmployer {
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

        let employer = Employer {
            id: employer::Id::new(),
            name,
            email,
            phone,
            address,
            company_name,
            industry,
            employee_count,
            is_active: true,
            created_at: DateTime::now().coerce(),
        };

        tx.execute(Insert(employer.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!("`Employer(id: {})` created", employer.id);
        Ok(employer)
    }
}

/// Error of [`CreateEmployer`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Email`] is already used by another [`Employer`].
    #[display("`{_0}` email is occupied")]
    EmailOccupied(#[error(not(source))] Email),
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{create_employer::ExecutionError, Command as _},
        domain::{contact, employer},
        test_util,
    };

    use super::CreateEmployer;

    fn command(email: &str) -> CreateEmployer {
        CreateEmployer {
            name: contact::Name::new("Alex Morgan").unwrap(),
            email: contact::Email::new(email).unwrap(),
            phone: None,
            address: None,
            company_name: employer::CompanyName::new("Acme Corp").unwrap(),
            industry: employer::Industry::new("Software"),
            employee_count: Some(42),
        }
    }

    #[tokio::test]
    async fn creates_active_employer() {
        let svc = test_util::service();

        let employer = svc.execute(command("hr@acme.com")).await.unwrap();

        assert!(employer.is_active);
        assert_eq!(employer.employee_count, Some(42));
    }

    #[tokio::test]
    async fn rejects_occupied_email() {
        let svc = test_util::service();
        _ = svc.execute(command("hr@acme.com")).await.unwrap();

        let err = svc.execute(command("HR@acme.com")).await.unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::EmailOccupied(_)));
    }
}
