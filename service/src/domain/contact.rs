//! Contact details shared by [`Employee`]s and [`Employer`]s.
//!
//! [`Employee`]: crate::domain::Employee
//! [`Employer`]: crate::domain::Employer

use std::{str::FromStr, sync::LazyLock};

use derive_more::{AsRef, Display};
use regex::Regex;

use super::text::define_text;

define_text! {
    #[doc = "Full name of a person."]
    Name(max = 512)
}

define_text! {
    #[doc = "Postal address."]
    Address(max = 1024)
}

/// Email address.
///
/// Always stored in a lowercase, so two [`Email`]s differing only in case
/// are equal.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str, String)]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into().to_lowercase();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Email`].
    fn check(address: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Email`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$")
                .expect("valid regex")
        });

        let address = address.as_ref();
        address.len() <= 320 && REGEX.is_match(address)
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Email`")
    }
}

/// Phone number.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str, String)]
pub struct Phone(String);

impl Phone {
    /// Creates a new [`Phone`] if the given `number` is valid.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Option<Self> {
        let number = number.into();
        Self::check(&number).then_some(Self(number))
    }

    /// Checks whether the given `number` is a valid [`Phone`].
    fn check(number: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Phone`] format.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^\+?\d[\d\s()-]{5,18}\d$").expect("valid regex")
        });

        REGEX.is_match(number.as_ref())
    }
}

impl FromStr for Phone {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Phone`")
    }
}

#[cfg(test)]
mod spec {
    use super::{Email, Name, Phone};

    #[test]
    fn validates_names() {
        assert!(Name::new("Sarah Johnson").is_some());
        assert!(Name::new("").is_none());
        assert!(Name::new(" Sarah").is_none());
        assert!(Name::new("x".repeat(513)).is_none());
    }

    #[test]
    fn normalizes_emails() {
        let email = Email::new("Sarah.Johnson@Company.com").unwrap();

        assert_eq!(AsRef::<str>::as_ref(&email), "sarah.johnson@company.com");
        assert_eq!(email, Email::new("sarah.johnson@company.com").unwrap());
    }

    #[test]
    fn rejects_malformed_emails() {
        for address in ["", "sarah", "sarah@", "@company.com", "sarah@company"]
        {
            assert!(Email::new(address).is_none(), "accepted `{address}`");
        }
        assert!(Email::new("sarah johnson@company.com").is_none());
    }

    #[test]
    fn validates_phones() {
        assert!(Phone::new("+1 (555) 123-4567").is_some());
        assert!(Phone::new("5551234567").is_some());
        assert!(Phone::new("call me").is_none());
        assert!(Phone::new("12").is_none());
    }
}
