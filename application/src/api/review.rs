//! [`Review`]-related definitions.

use common::DateTime;
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLScalar};
use service::domain::review;

use crate::{
    api::{self, scalar},
    Context,
};

/// Decision upon a request made by an `Employee`.
#[derive(Clone, Debug, From)]
pub struct Review(review::Review);

/// Decision upon a request made by an `Employee`.
#[graphql_object(context = Context)]
impl Review {
    /// Status of this `Review`.
    #[must_use]
    pub fn status(&self) -> Status {
        self.0.status.into()
    }

    /// `Employee` who decided this `Review`.
    #[must_use]
    pub fn reviewer(&self) -> Option<api::Employee> {
        self.0.reviewer_id.map(|id| {
            #[expect(
                unsafe_code,
                reason = "reviewer existence is checked on deciding"
            )]
            unsafe {
                api::Employee::new_unchecked(id)
            }
        })
    }

    /// `DateTime` when this `Review` was decided.
    #[must_use]
    pub fn reviewed_at(&self) -> Option<DateTime> {
        self.0.reviewed_at.map(|at| at.coerce())
    }

    /// Comment left by the reviewer.
    ///
    /// Usually carries the reason of a rejection.
    #[must_use]
    pub fn comment(&self) -> Option<Comment> {
        self.0.comment.clone().map(Into::into)
    }
}

/// Status of a `Review`.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "ReviewStatus")]
pub enum Status {
    /// Awaiting a decision.
    Pending,

    /// Approved by a reviewer.
    Approved,

    /// Rejected by a reviewer.
    Rejected,
}

impl From<review::Status> for Status {
    fn from(status: review::Status) -> Self {
        use review::Status as S;
        match status {
            S::Pending => Self::Pending,
            S::Approved => Self::Approved,
            S::Rejected => Self::Rejected,
        }
    }
}

impl From<Status> for review::Status {
    fn from(status: Status) -> Self {
        match status {
            Status::Pending => Self::Pending,
            Status::Approved => Self::Approved,
            Status::Rejected => Self::Rejected,
        }
    }
}

/// Decision taken upon a pending `Review`.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "ReviewDecision")]
pub enum Decision {
    /// Approve the request.
    Approve,

    /// Reject the request.
    Reject,
}

impl From<Decision> for review::Decision {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Approve => Self::Approve,
            Decision::Reject => Self::Reject,
        }
    }
}

/// Comment left by a reviewer.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "ReviewComment", with = scalar::Via::<review::Comment>)]
pub struct Comment(review::Comment);
