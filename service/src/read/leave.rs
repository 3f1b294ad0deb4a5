//! Leave read model definitions.

use derive_more::{From, Into};

/// Total number of leave days of the approved [`LeaveRequest`]s of an
/// [`Employee`].
///
/// [`Employee`]: crate::domain::Employee
/// [`LeaveRequest`]: crate::domain::LeaveRequest
#[derive(Clone, Copy, Debug, Default, Eq, From, Hash, Into, PartialEq)]
pub struct UsedDays(u32);
