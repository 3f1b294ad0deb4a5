//! Background [`Task`]s definitions.

mod background;
pub mod notify_expiring_leaves;

pub use common::Handler as Task;

pub use self::{
    background::Background, notify_expiring_leaves::NotifyExpiringLeaves,
};
