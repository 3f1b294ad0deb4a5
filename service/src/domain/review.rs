//! [`Review`] of a request definitions.

use common::{define_kind, unit, DateTimeOf};
#[cfg(doc)]
use common::DateTime;
use derive_more::{Display, Error};

use crate::domain::employee;

use super::text::define_text;

/// Decision upon a request made by an employee (a leave request, an expense
/// claim, etc.).
///
/// Once decided, a [`Review`] cannot be changed anymore.
#[derive(Clone, Debug)]
pub struct Review {
    /// [`Status`] of this [`Review`].
    pub status: Status,

    /// ID of the [`Employee`] who decided this [`Review`].
    ///
    /// [`Employee`]: crate::domain::Employee
    pub reviewer_id: Option<employee::Id>,

    /// [`DateTime`] when this [`Review`] was decided.
    pub reviewed_at: Option<DecisionDateTime>,

    /// [`Comment`] left by the reviewer.
    pub comment: Option<Comment>,
}

impl Review {
    /// Creates a new [`Status::Pending`] [`Review`].
    #[must_use]
    pub const fn pending() -> Self {
        Self {
            status: Status::Pending,
            reviewer_id: None,
            reviewed_at: None,
            comment: None,
        }
    }

    /// Indicates whether this [`Review`] is still awaiting a [`Decision`].
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == Status::Pending
    }

    /// Indicates whether this [`Review`] is [`Status::Approved`].
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.status == Status::Approved
    }

    /// Applies the provided [`Decision`] to this [`Review`].
    ///
    /// # Errors
    ///
    /// With [`NotPending`] if this [`Review`] has been decided already.
    pub fn decide(
        &mut self,
        decision: Decision,
        reviewer_id: employee::Id,
        comment: Option<Comment>,
        at: DecisionDateTime,
    ) -> Result<(), NotPending> {
        if !self.is_pending() {
            return Err(NotPending(self.status));
        }

        self.status = match decision {
            Decision::Approve => Status::Approved,
            Decision::Reject => Status::Rejected,
        };
        self.reviewer_id = Some(reviewer_id);
        self.reviewed_at = Some(at);
        self.comment = comment;
        Ok(())
    }
}

define_kind! {
    #[doc = "Status of a [`Review`]."]
    enum Status {
        #[doc = "Awaiting a [`Decision`]."]
        Pending = 1,

        #[doc = "Approved by a reviewer."]
        Approved = 2,

        #[doc = "Rejected by a reviewer."]
        Rejected = 3,
    }
}

/// Decision taken upon a pending [`Review`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Decision {
    /// Approve the request.
    Approve,

    /// Reject the request.
    Reject,
}

define_text! {
    #[doc = "Comment left by a reviewer."]
    Comment(max = 2048)
}

/// [`DateTime`] when a [`Review`] was decided.
pub type DecisionDateTime = DateTimeOf<(Review, unit::Review)>;

/// Error of deciding an already decided [`Review`].
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("`Review` is already decided as `{_0}`")]
pub struct NotPending(#[error(not(source))] pub Status);

#[cfg(test)]
mod spec {
    use super::{Comment, Decision, DecisionDateTime, Review, Status};
    use crate::domain::employee;

    #[test]
    fn approves_pending_review() {
        let reviewer = employee::Id::new();
        let mut review = Review::pending();

        review
            .decide(
                Decision::Approve,
                reviewer,
                None,
                DecisionDateTime::now(),
            )
            .unwrap();

        assert_eq!(review.status, Status::Approved);
        assert_eq!(review.reviewer_id, Some(reviewer));
        assert!(review.reviewed_at.is_some());
    }

    #[test]
    fn rejects_with_comment() {
        let mut review = Review::pending();

        review
            .decide(
                Decision::Reject,
                employee::Id::new(),
                Comment::new("Team is at capacity that week"),
                DecisionDateTime::now(),
            )
            .unwrap();

        assert_eq!(review.status, Status::Rejected);
        assert_eq!(
            review.comment.map(|c| c.to_string()).as_deref(),
            Some("Team is at capacity that week"),
        );
    }

    #[test]
    fn decided_review_cannot_be_changed() {
        let mut review = Review::pending();
        let first = employee::Id::new();
        review
            .decide(Decision::Reject, first, None, DecisionDateTime::now())
            .unwrap();

        let err = review
            .decide(
                Decision::Approve,
                employee::Id::new(),
                None,
                DecisionDateTime::now(),
            )
            .unwrap_err();

        assert_eq!(err.0, Status::Rejected);
        assert_eq!(review.status, Status::Rejected);
        assert_eq!(review.reviewer_id, Some(first));
    }
}
