//! Background environment for running [`Task`]s.

use std::{
    error::Error,
    future::{Future, IntoFuture},
    iter,
};

use futures::{
    future::{self, LocalBoxFuture},
    FutureExt as _, TryFutureExt as _,
};
use tokio::task;
use tracing as log;

#[cfg(doc)]
use crate::Task;

/// Error of a [`Task`] running in a [`Background`].
type BoxedError = Box<dyn Error + 'static>;

/// Background environment for running [`Task`]s.
///
/// [`Task`]s are spawned onto a [`task::LocalSet`], so the [`Background`]
/// must be awaited on the same thread it was created on.
#[derive(Debug, Default)]
pub struct Background {
    /// Local set of tasks.
    set: task::LocalSet,

    /// Handles of spawned tasks along with their names.
    handles: Vec<(&'static str, task::JoinHandle<Result<(), BoxedError>>)>,
}

impl Background {
    /// Spawns a new named [`Task`] inside the [`Background`] environment.
    pub fn spawn<F, E>(&mut self, name: &'static str, future: F)
    where
        F: Future<Output = Result<(), E>> + 'static,
        E: Error + 'static,
    {
        let handle = self
            .set
            .spawn_local(future.map_err(|e| BoxedError::from(Box::new(e))));
        self.handles.push((name, handle));
    }

    /// Returns the number of [`Task`]s spawned in this [`Background`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Indicates whether no [`Task`]s were spawned in this [`Background`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl IntoFuture for Background {
    type Output = Result<(), BoxedError>;
    type IntoFuture = LocalBoxFuture<'static, Self::Output>;

    /// Runs all the spawned [`Task`]s, resolving once all of them complete
    /// or any of them fails.
    fn into_future(self) -> Self::IntoFuture {
        let Self { set, handles } = self;
        future::try_join_all(iter::once(set.map(Ok).boxed_local()).chain(
            handles.into_iter().map(|(name, h)| {
                h.map(move |r| {
                    let res = match r {
                        Ok(res) => res,
                        Err(e) => Err(BoxedError::from(Box::new(e))),
                    };
                    if let Err(e) = &res {
                        log::error!("`{name}` background task failed: {e}");
                    }
                    res
                })
                .boxed_local()
            }),
        ))
        .map_ok(drop)
        .boxed_local()
    }
}

#[cfg(test)]
mod spec {
    use std::{cell::Cell, fmt, rc::Rc};

    use super::Background;

    #[derive(Debug)]
    struct Failure;

    impl fmt::Display for Failure {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("failure")
        }
    }

    impl std::error::Error for Failure {}

    #[tokio::test]
    async fn runs_spawned_tasks() {
        let runs = Rc::new(Cell::new(0));
        let mut bg = Background::default();
        for _ in 0..2 {
            let runs = Rc::clone(&runs);
            bg.spawn("counter", async move {
                runs.set(runs.get() + 1);
                Ok::<_, Failure>(())
            });
        }
        assert_eq!(bg.len(), 2);

        bg.await.unwrap();

        assert_eq!(runs.get(), 2);
    }

    #[tokio::test]
    async fn fails_with_failed_task() {
        let mut bg = Background::default();
        assert!(bg.is_empty());
        bg.spawn("failing", async { Err(Failure) });

        let err = bg.await.unwrap_err();

        assert_eq!(err.to_string(), "failure");
    }
}
