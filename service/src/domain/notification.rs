//! [`Notification`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, Date, DateTimeOf};
use derive_more::{Display, From, FromStr, Into};
use uuid::Uuid;

use crate::domain::{
    employee, expense, leave, schedule_change, text::define_text, time_log,
    Review,
};

/// Message delivered to an [`Employee`].
///
/// [`Employee`]: crate::domain::Employee
#[derive(Clone, Debug)]
pub struct Notification {
    /// ID of this [`Notification`].
    pub id: Id,

    /// ID of the notified [`Employee`].
    ///
    /// [`Employee`]: crate::domain::Employee
    pub employee_id: employee::Id,

    /// [`Topic`] this [`Notification`] is about.
    pub topic: Topic,

    /// [`Title`] of this [`Notification`].
    pub title: Title,

    /// [`Message`] of this [`Notification`].
    pub message: Message,

    /// [`Kind`] of this [`Notification`].
    pub kind: Kind,

    /// Indicator whether this [`Notification`] has been read.
    pub is_read: bool,

    /// [`DateTime`] when this [`Notification`] was created.
    pub created_at: CreationDateTime,
}

impl Notification {
    /// Creates a new unread [`Notification`] about the provided [`Topic`].
    fn new(
        employee_id: employee::Id,
        topic: Topic,
        kind: Kind,
        title: &'static str,
        message: String,
    ) -> Self {
        #[expect(unsafe_code, reason = "texts are built from valid parts")]
        let (title, message) = unsafe {
            (Title::new_unchecked(title), Message::new_unchecked(message))
        };
        Self {
            id: Id::new(),
            employee_id,
            topic,
            title,
            message,
            kind,
            is_read: false,
            created_at: CreationDateTime::now(),
        }
    }

    /// Creates a warning [`Notification`] about the leave balance of an
    /// [`Employee`] expiring after the provided `end` [`Date`].
    ///
    /// [`Employee`]: crate::domain::Employee
    #[must_use]
    pub fn leave_expires_soon(
        employee_id: employee::Id,
        end: Date,
        available_days: u32,
    ) -> Self {
        Self::new(
            employee_id,
            Topic::LeaveExpiresSoon(end),
            Kind::Warning,
            "Leave balance expires soon",
            format!(
                "Your {available_days} available leave day(s) expire after \
                 {end}. Request your leave or ask for an extension.",
            ),
        )
    }

    /// Creates a [`Notification`] about the leave expiration of an
    /// [`Employee`] being extended until the provided [`Date`].
    ///
    /// [`Employee`]: crate::domain::Employee
    #[must_use]
    pub fn leave_extended(employee_id: employee::Id, until: Date) -> Self {
        Self::new(
            employee_id,
            Topic::LeaveExtended(until),
            Kind::Success,
            "Leave extended",
            format!("Your leave expiration has been extended until {until}."),
        )
    }

    /// Creates a [`Notification`] about a reviewed request of an
    /// [`Employee`].
    ///
    /// [`Employee`]: crate::domain::Employee
    #[must_use]
    pub fn reviewed(
        employee_id: employee::Id,
        topic: Topic,
        review: &Review,
    ) -> Self {
        let subject = match topic {
            Topic::LeaveRequestReviewed(_) => "leave request",
            Topic::ExpenseClaimReviewed(_) => "expense claim",
            Topic::ScheduleChangeReviewed(_) => "schedule change request",
            Topic::TimeLogReviewed(_) => "time log",
            Topic::LeaveExpiresSoon(_) | Topic::LeaveExtended(_) => "request",
        };
        let (kind, title, verdict) = if review.is_approved() {
            (Kind::Success, "Request approved", "approved")
        } else {
            (Kind::Error, "Request rejected", "rejected")
        };
        let comment = review
            .comment
            .as_ref()
            .map(|c| format!(" Comment: {c}"))
            .unwrap_or_default();
        Self::new(
            employee_id,
            topic,
            kind,
            title,
            format!("Your {subject} has been {verdict}.{comment}"),
        )
    }
}

/// ID of a [`Notification`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Event a [`Notification`] is about.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Topic {
    /// Leave balance expires soon after the contained [`Date`].
    LeaveExpiresSoon(Date),

    /// Leave expiration has been extended until the contained [`Date`].
    LeaveExtended(Date),

    /// [`leave::Request`] has been reviewed.
    LeaveRequestReviewed(leave::Id),

    /// [`expense::Claim`] has been reviewed.
    ExpenseClaimReviewed(expense::Id),

    /// [`ScheduleChange`] has been reviewed.
    ///
    /// [`ScheduleChange`]: crate::domain::ScheduleChange
    ScheduleChangeReviewed(schedule_change::Id),

    /// [`TimeLog`] has been reviewed.
    ///
    /// [`TimeLog`]: crate::domain::TimeLog
    TimeLogReviewed(time_log::Id),
}

define_kind! {
    #[doc = "Kind of a [`Notification`]."]
    enum Kind {
        #[doc = "Informational message."]
        Info = 1,

        #[doc = "Something requires attention."]
        Warning = 2,

        #[doc = "Something went wrong."]
        Error = 3,

        #[doc = "Something succeeded."]
        Success = 4,
    }
}

define_text! {
    #[doc = "Title of a [`Notification`]."]
    Title(max = 256)
}

define_text! {
    #[doc = "Message of a [`Notification`]."]
    Message(max = 4096)
}

/// [`DateTime`] when a [`Notification`] was created.
pub type CreationDateTime = DateTimeOf<(Notification, unit::Creation)>;

#[cfg(test)]
mod spec {
    use super::{Kind, Notification, Topic};
    use crate::domain::{
        employee, leave,
        review::{Comment, Decision, DecisionDateTime},
        Review,
    };

    #[test]
    fn describes_rejection_with_comment() {
        let mut review = Review::pending();
        review
            .decide(
                Decision::Reject,
                employee::Id::new(),
                Comment::new("Overlaps with the release"),
                DecisionDateTime::now(),
            )
            .unwrap();
        let topic = Topic::LeaveRequestReviewed(leave::Id::new());

        let n = Notification::reviewed(employee::Id::new(), topic, &review);

        assert_eq!(n.kind, Kind::Error);
        assert_eq!(n.topic, topic);
        assert!(!n.is_read);
        assert_eq!(
            n.message.to_string(),
            "Your leave request has been rejected. \
             Comment: Overlaps with the release",
        );
    }

    #[test]
    fn warns_about_expiring_leave() {
        let end = "2024-12-31".parse().unwrap();

        let n = Notification::leave_expires_soon(employee::Id::new(), end, 5);

        assert_eq!(n.kind, Kind::Warning);
        assert_eq!(n.topic, Topic::LeaveExpiresSoon(end));
        assert!(n.message.to_string().contains("2024-12-31"));
    }
}
