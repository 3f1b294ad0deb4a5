//! [`Project`] definitions.

use common::define_kind;

use super::text::define_text;

define_text! {
    #[doc = "Code of a project an [`Employee`] is assigned to.\n\n\
             [`Employee`]: crate::domain::Employee"]
    Project(max = 64)
}

impl Project {
    /// Returns the badge [`Color`] of this [`Project`].
    ///
    /// Unknown projects are colored [`Color::Gray`].
    #[must_use]
    pub fn color(&self) -> Color {
        match self.0.as_str() {
            "KNS" => Color::Blue,
            "dispatch" => Color::Green,
            "gsfm" => Color::Purple,
            "amass" => Color::Orange,
            "enerbuild" => Color::Red,
            "deepskill" => Color::Indigo,
            _ => Color::Gray,
        }
    }
}

define_kind! {
    #[doc = "Badge color of a [`Project`]."]
    enum Color {
        #[doc = "Blue badge."]
        Blue = 1,

        #[doc = "Green badge."]
        Green = 2,

        #[doc = "Purple badge."]
        Purple = 3,

        #[doc = "Orange badge."]
        Orange = 4,

        #[doc = "Red badge."]
        Red = 5,

        #[doc = "Indigo badge."]
        Indigo = 6,

        #[doc = "Gray badge."]
        Gray = 7,
    }
}

#[cfg(test)]
mod spec {
    use super::{Color, Project};

    #[test]
    fn known_projects_have_own_colors() {
        for (code, color) in [
            ("KNS", Color::Blue),
            ("dispatch", Color::Green),
            ("gsfm", Color::Purple),
            ("amass", Color::Orange),
            ("enerbuild", Color::Red),
            ("deepskill", Color::Indigo),
        ] {
            assert_eq!(Project::new(code).unwrap().color(), color);
        }
    }

    #[test]
    fn unknown_project_is_gray() {
        assert_eq!(Project::new("kns").unwrap().color(), Color::Gray);
        assert_eq!(Project::new("moonshot").unwrap().color(), Color::Gray);
    }
}
