//! [`Handler`] abstraction.

use std::future::Future;

/// Something able to handle an operation described by `Args`.
///
/// Commands, queries, tasks and database operations are all expressed as
/// [`Handler`]s parametrized with the operation they handle.
pub trait Handler<Args = ()> {
    /// Successful outcome of this [`Handler`].
    type Ok;

    /// Error this [`Handler`] fails with.
    type Err;

    /// Handles the provided `args`.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
