//! Read entities definitions.

pub mod employee;
pub mod employer;
pub mod leave;
pub mod notification;
pub mod review;
pub mod time_log;

/// Case-insensitive substring to search for.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Search(String);

impl Search {
    /// Creates a new [`Search`] out of the provided `needle`.
    ///
    /// [`None`] is returned if the `needle` is blank.
    #[must_use]
    pub fn new(needle: impl AsRef<str>) -> Option<Self> {
        let needle = needle.as_ref().trim().to_lowercase();
        (!needle.is_empty()).then_some(Self(needle))
    }

    /// Indicates whether the provided `haystack` contains this [`Search`].
    #[must_use]
    pub fn matches(&self, haystack: impl AsRef<str>) -> bool {
        haystack.as_ref().to_lowercase().contains(&self.0)
    }
}

#[cfg(test)]
mod spec {
    use super::Search;

    #[test]
    fn matches_case_insensitively() {
        let search = Search::new("  JOHN ").unwrap();

        assert!(search.matches("Sarah Johnson"));
        assert!(search.matches("john@company.com"));
        assert!(!search.matches("Mike Chen"));
    }

    #[test]
    fn blank_search_is_none() {
        assert!(Search::new("").is_none());
        assert!(Search::new("   ").is_none());
    }
}
