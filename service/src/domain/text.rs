//! Macro for defining validated text values.

/// Defines a newtype over a trimmed non-empty [`String`] being not longer than
/// `max` characters.
macro_rules! define_text {
    (
        #[doc = $doc:literal]
        $name:ident(max = $max:literal)
    ) => {
        #[doc = $doc]
        #[derive(
            ::derive_more::AsRef,
            Clone,
            Debug,
            ::derive_more::Display,
            Eq,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
        )]
        #[as_ref(str, String)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!(
                "Creates a new [`", stringify!($name), "`] without checking \
                 the given `text`.\n\n\
                 # Safety\n\n\
                 The caller must ensure that the given `text` is trimmed, \
                 non-empty and not too long.",
            )]
            #[expect(unsafe_code, reason = "bypass")]
            #[must_use]
            pub unsafe fn new_unchecked(text: impl Into<String>) -> Self {
                Self(text.into())
            }

            #[doc = concat!(
                "Creates a new [`", stringify!($name), "`] if the given \
                 `text` is valid.",
            )]
            #[must_use]
            pub fn new(text: impl Into<String>) -> Option<Self> {
                let text = text.into();
                Self::check(&text).then_some(Self(text))
            }

            #[doc = concat!(
                "Checks whether the given `text` is a valid [`",
                stringify!($name),
                "`].",
            )]
            fn check(text: impl AsRef<str>) -> bool {
                let text = text.as_ref();
                text.trim() == text
                    && !text.is_empty()
                    && text.chars().count() <= $max
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = &'static str;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s).ok_or(concat!("invalid `", stringify!($name), "`"))
            }
        }
    };
}

pub(crate) use define_text;
