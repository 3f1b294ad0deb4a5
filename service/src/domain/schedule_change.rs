//! [`ScheduleChange`] definitions.

#[cfg(doc)]
use common::{Date, DateTime};
use common::{unit, DateOf, DateTimeOf};
use derive_more::{Display, From, FromStr, Into};
use uuid::Uuid;

use crate::domain::{
    employee::{self, Schedule},
    text::define_text,
    Review,
};

/// Request of an [`Employee`] to change their working [`Schedule`].
///
/// [`Employee`]: crate::domain::Employee
#[derive(Clone, Debug)]
pub struct ScheduleChange {
    /// ID of this [`ScheduleChange`].
    pub id: Id,

    /// ID of the requesting [`Employee`].
    ///
    /// [`Employee`]: crate::domain::Employee
    pub employee_id: employee::Id,

    /// [`Schedule`] the [`Employee`] had when requesting.
    ///
    /// [`Employee`]: crate::domain::Employee
    pub current: Schedule,

    /// Requested [`Schedule`].
    pub requested: Schedule,

    /// [`Reason`] of this [`ScheduleChange`].
    pub reason: Reason,

    /// [`Date`] the requested [`Schedule`] should be effective from.
    pub effective_on: EffectiveDate,

    /// [`Review`] of this [`ScheduleChange`].
    pub review: Review,

    /// [`DateTime`] when this [`ScheduleChange`] was created.
    pub created_at: CreationDateTime,
}

/// ID of a [`ScheduleChange`].
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

define_text! {
    #[doc = "Reason of a [`ScheduleChange`]."]
    Reason(max = 2048)
}

/// [`Date`] a [`ScheduleChange`] becomes effective on.
pub type EffectiveDate = DateOf<(ScheduleChange, unit::Start)>;

/// [`DateTime`] when a [`ScheduleChange`] was created.
pub type CreationDateTime = DateTimeOf<(ScheduleChange, unit::Creation)>;
