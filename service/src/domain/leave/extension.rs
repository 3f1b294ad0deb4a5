//! Leave [`Extension`] definitions.

#[cfg(doc)]
use common::{Date, DateTime};
use common::{unit, DateOf, DateTimeOf};

use crate::domain::{employee, text::define_text};

/// Extension of the leave expiration beyond the contract end of an
/// [`Employee`].
///
/// The contract end itself stays untouched.
///
/// [`Employee`]: crate::domain::Employee
#[derive(Clone, Debug)]
pub struct Extension {
    /// [`Date`] the leave expiration is extended until (inclusive).
    pub extended_until: ExtendedUntilDate,

    /// [`Reason`] of this [`Extension`].
    pub reason: Reason,

    /// ID of the [`Employee`] who approved this [`Extension`].
    ///
    /// [`Employee`]: crate::domain::Employee
    pub approved_by: employee::Id,

    /// [`DateTime`] when this [`Extension`] was approved.
    pub approved_at: ApprovalDateTime,
}

impl Extension {
    /// Indicates whether this [`Extension`] can be applied to the provided
    /// [`employee::Contract`].
    ///
    /// Extended expiration must be strictly after the contract end, so an
    /// [`Extension`] never shortens the leave.
    #[must_use]
    pub fn fits(&self, contract: &employee::Contract) -> bool {
        self.extended_until.coerce::<()>() > contract.end.coerce()
    }
}

define_text! {
    #[doc = "Reason of a leave [`Extension`]."]
    Reason(max = 2048)
}

/// [`Date`] a leave is extended until.
pub type ExtendedUntilDate = DateOf<(Extension, unit::End)>;

/// [`DateTime`] when an [`Extension`] was approved.
pub type ApprovalDateTime = DateTimeOf<(Extension, unit::Review)>;

#[cfg(test)]
mod spec {
    use common::{Date, DateTime};

    use crate::domain::{employee, leave::extension::Reason};

    use super::Extension;

    fn extension(until: &str) -> Extension {
        Extension {
            extended_until: until.parse::<Date>().unwrap().coerce(),
            reason: Reason::new("Handover").unwrap(),
            approved_by: employee::Id::new(),
            approved_at: DateTime::now().coerce(),
        }
    }

    #[test]
    fn must_end_after_contract_end() {
        let contract = employee::Contract::new(
            "2024-01-15".parse::<Date>().unwrap().coerce(),
            "2024-12-31".parse::<Date>().unwrap().coerce(),
        )
        .unwrap();

        assert!(!extension("2024-06-30").fits(&contract));
        assert!(!extension("2024-12-31").fits(&contract));
        assert!(extension("2025-01-01").fits(&contract));
    }
}
