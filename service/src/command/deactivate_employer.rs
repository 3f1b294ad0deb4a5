//! [`Command`] for deactivating an [`Employer`].

use common::operations::{By, Commit, Insert, Select, Transact, Transacted};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{employer, Employer},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deactivating an [`Employer`].
///
/// Deactivating an already inactive [`Employer`] is a no-op.
#[derive(Clone, Copy, Debug)]
pub struct DeactivateEmployer {
    /// ID of the [`Employer`] to deactivate.
    pub employer_id: employer::Id,
}

impl<Db> Command<DeactivateEmployer> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Employer>, employer::Id>>,
            Ok = Option<Employer>,
            Err = Traced<database::Error>,
        > + Database<Insert<Employer>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Employer;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeactivateEmployer,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeactivateEmployer { employer_id } = cmd;

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
        if !employer.is_active {
            return Ok(employer);
        }

        employer.is_active = false;
        tx.execute(Insert(employer.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!("`Employer(id: {employer_id})` deactivated");
        Ok(employer)
    }
}

/// Error of [`DeactivateEmployer`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Employer`] with the provided ID doesn't exist.
    #[display("`Employer(id: {_0})` does not exist")]
    EmployerNotExists(#[error(not(source))] employer::Id),
}
