//! [`Command`] for marking a [`Notification`] as read.

use common::operations::{By, Insert, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{notification, Notification},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for marking a [`Notification`] as read.
#[derive(Clone, Copy, Debug)]
pub struct MarkNotificationRead {
    /// ID of the [`Notification`] to mark.
    pub notification_id: notification::Id,
}

impl<Db> Command<MarkNotificationRead> for Service<Db>
where
    Db: Database<
            Select<By<Option<Notification>, notification::Id>>,
            Ok = Option<Notification>,
            Err = Traced<database::Error>,
        > + Database<Insert<Notification>, Err = Traced<database::Error>>,
{
    type Ok = Notification;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: MarkNotificationRead,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let MarkNotificationRead { notification_id } = cmd;

        let mut notification = self
            .database()
            .execute(Select(By::<Option<Notification>, _>::new(
                notification_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::NotificationNotExists(notification_id))
            .map_err(tracerr::wrap!())?;
        if notification.is_read {
            return Ok(notification);
        }

        notification.is_read = true;
        self.database()
            .execute(Insert(notification.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        Ok(notification)
    }
}

/// Error of [`MarkNotificationRead`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Notification`] with the provided ID doesn't exist.
    #[display("`Notification(id: {_0})` does not exist")]
    NotificationNotExists(#[error(not(source))] notification::Id),
}

#[cfg(test)]
mod spec {
    use common::{
        operations::{By, Insert, Select},
        Date,
    };

    use crate::{
        command::{mark_notification_read::ExecutionError, Command as _},
        domain::{employee, notification, Notification},
        infra::Database as _,
        read,
        test_util,
    };

    use super::MarkNotificationRead;

    #[tokio::test]
    async fn marks_read_idempotently() {
        let svc = test_util::service();
        let employee_id = employee::Id::new();
        let notification =
            Notification::leave_extended(employee_id, Date::today());
        svc.database()
            .execute(Insert(notification.clone()))
            .await
            .unwrap();
        let cmd = MarkNotificationRead {
            notification_id: notification.id,
        };

        assert!(svc.execute(cmd).await.unwrap().is_read);
        assert!(svc.execute(cmd).await.unwrap().is_read);

        let unread = svc
            .database()
            .execute(Select(By::<Vec<Notification>, _>::new(
                read::notification::list::Filter {
                    employee_id: Some(employee_id),
                    unread_only: true,
                    topic: None,
                },
            )))
            .await
            .unwrap();
        assert!(unread.is_empty());
    }

    #[tokio::test]
    async fn fails_for_unknown_notification() {
        let svc = test_util::service();

        let err = svc
            .execute(MarkNotificationRead {
                notification_id: notification::Id::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::NotificationNotExists(_),
        ));
    }
}
