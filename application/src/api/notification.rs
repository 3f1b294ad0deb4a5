//! [`Notification`]-related definitions.

use common::DateTime;
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLScalar};
use service::domain::{self, notification};
use uuid::Uuid;

use crate::{
    api::{self, scalar},
    Context,
};

/// Message delivered to an `Employee`.
#[derive(Clone, Debug, From)]
pub struct Notification(domain::Notification);

/// Message delivered to an `Employee`.
#[graphql_object(context = Context)]
impl Notification {
    /// Unique identifier of this `Notification`.
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Notified `Employee`.
    #[must_use]
    pub fn employee(&self) -> api::Employee {
        #[expect(
            unsafe_code,
            reason = "`Notification` is never stored without its `Employee`"
        )]
        unsafe {
            api::Employee::new_unchecked(self.0.employee_id)
        }
    }

    /// Title of this `Notification`.
    #[must_use]
    pub fn title(&self) -> Title {
        self.0.title.clone().into()
    }

    /// Message of this `Notification`.
    #[must_use]
    pub fn message(&self) -> Message {
        self.0.message.clone().into()
    }

    /// Kind of this `Notification`.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.0.kind.into()
    }

    /// Indicator whether this `Notification` has been read.
    #[must_use]
    pub fn is_read(&self) -> bool {
        self.0.is_read
    }

    /// `DateTime` when this `Notification` was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }
}

/// Unique identifier of a `Notification`.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, GraphQLScalar, Into, PartialEq,
)]
#[from(notification::Id)]
#[into(notification::Id)]
#[graphql(name = "NotificationId", transparent)]
pub struct Id(Uuid);

/// Kind of a `Notification`.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "NotificationKind")]
pub enum Kind {
    /// Informational message.
    Info,

    /// Something requires attention.
    Warning,

    /// Something went wrong.
    #[graphql(name = "ERROR")]
    Failure,

    /// Something succeeded.
    Success,
}

impl From<notification::Kind> for Kind {
    fn from(kind: notification::Kind) -> Self {
        use notification::Kind as K;
        match kind {
            K::Info => Self::Info,
            K::Warning => Self::Warning,
            K::Error => Self::Failure,
            K::Success => Self::Success,
        }
    }
}

/// Title of a `Notification`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "NotificationTitle",
    with = scalar::Via::<notification::Title>,
)]
pub struct Title(notification::Title);

/// Message of a `Notification`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "NotificationMessage",
    with = scalar::Via::<notification::Message>,
)]
pub struct Message(notification::Message);

#[cfg(test)]
mod spec {
    use juniper::{DefaultScalarValue, InputValue, ToInputValue as _};
    use service::domain::notification;

    use super::Kind;

    #[test]
    fn exposes_error_kind_as_error() {
        let kind = Kind::from(notification::Kind::Error);

        assert_eq!(kind, Kind::Failure);
        assert_eq!(
            kind.to_input_value(),
            InputValue::<DefaultScalarValue>::enum_value("ERROR"),
        );
    }
}
