//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::Decimal;

/// Decimal percentage in `0..=100` range.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Percent(Decimal);

impl Percent {
    /// Creates a new [`Percent`] by checking the provided value lies in
    /// `0..=100` range.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        if val < Decimal::ZERO || val > Decimal::ONE_HUNDRED {
            None
        } else {
            #[expect(
                clippy::allow_attributes,
                reason = "TODO: Remove once clippy is fixed"
            )]
            #[allow(unsafe_code, reason = "invariants checked already")]
            Some(unsafe { Self::new_unchecked(val) })
        }
    }

    /// Creates a new [`Percent`] without performing any validation.
    ///
    /// # Safety
    ///
    /// The provided value must lie in `0..=100` range.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(val: Decimal) -> Self {
        Self(val)
    }
}

impl Percent {
    /// Calculates the share of the `part` in the `whole`, rounded to two
    /// decimal places and capped at `100`.
    ///
    /// Zero `whole` gives zero [`Percent`].
    #[must_use]
    pub fn ratio(part: u32, whole: u32) -> Self {
        if whole == 0 {
            return Self(Decimal::ZERO);
        }
        let val = (Decimal::from(part) * Decimal::ONE_HUNDRED
            / Decimal::from(whole))
        .round_dp(2)
        .min(Decimal::ONE_HUNDRED);
        Self(val.normalize())
    }

    /// Returns the inner [`Decimal`] value of this [`Percent`].
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use std::str::FromStr as _;

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Floating-point percentage.
    #[graphql_scalar(with = Self, parse_token(String))]
    type Percent = super::Percent;

    impl Percent {
        fn to_output<S: ScalarValue>(m: &Percent) -> Value<S> {
            Value::scalar(m.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Percent` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::from_str(s).map_err(|e| {
                        format!("Cannot parse `Percent` input scalar: {e}")
                    })
                })
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::Percent;

    #[test]
    fn from_str() {
        assert_eq!(Percent::from_str("0").unwrap().to_string(), "0");
        assert_eq!(Percent::from_str("62.5").unwrap().to_string(), "62.5");
        assert_eq!(Percent::from_str("100").unwrap().to_string(), "100");

        assert!(Percent::from_str("-1").is_err());
        assert!(Percent::from_str("100.01").is_err());
        assert!(Percent::from_str("half").is_err());
    }

    #[test]
    fn ratio_is_capped() {
        assert_eq!(Percent::ratio(15, 24).to_string(), "62.5");
        assert_eq!(Percent::ratio(1, 3).to_string(), "33.33");
        assert_eq!(Percent::ratio(24, 24).to_string(), "100");
        assert_eq!(Percent::ratio(20, 15).to_string(), "100");
        assert_eq!(Percent::ratio(0, 15).to_string(), "0");
        assert_eq!(Percent::ratio(5, 0).to_string(), "0");
    }
}
