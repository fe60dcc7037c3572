//! The enumerated set of project types.

use std::fmt::{Display, Formatter, Result};

use serde::Serialize;

use crate::error::GenerateError;

/// Enumeration of the project types the generator can scaffold.
///
/// The type names the generated class, its header and source files, and
/// contributes the middle segment of the bundle identifier.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum ProjectKind {
    /// A small showcase program
    Demo,

    /// A full game project
    Game,

    /// A test bed for engine features
    Test,
}

impl ProjectKind {
    /// Every supported kind, in display order.
    pub const ALL: [Self; 3] = [Self::Demo, Self::Game, Self::Test];

    /// Parse a project type, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidKind`] with the capitalized input when it
    /// does not name a supported type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use makeproject::project::ProjectKind;
    /// assert_eq!(ProjectKind::parse("game").unwrap(), ProjectKind::Game);
    /// assert_eq!(ProjectKind::parse("TEST").unwrap(), ProjectKind::Test);
    /// assert!(ProjectKind::parse("tool").is_err());
    /// ```
    pub fn parse(input: &str) -> std::result::Result<Self, GenerateError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(input))
            .ok_or_else(|| GenerateError::InvalidKind(capitalize(input)))
    }

    /// Capitalized spelling, used for the class and file names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Demo => "Demo",
            Self::Game => "Game",
            Self::Test => "Test",
        }
    }

    /// Lowercase spelling, used for the local variable in the generated `main`.
    #[must_use]
    pub const fn lowercase(self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Game => "game",
            Self::Test => "test",
        }
    }

    /// Bundle identifier segment (`demos`, `games`, `tests`).
    #[must_use]
    pub fn bundle_segment(self) -> String {
        format!("{}s", self.lowercase())
    }
}

impl Display for ProjectKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

/// Upper-case the first character and lower-case the rest.
pub(crate) fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        for input in ["demo", "Demo", "DEMO", "dEmO"] {
            assert_eq!(ProjectKind::parse(input).unwrap(), ProjectKind::Demo);
        }
        assert_eq!(ProjectKind::parse("game").unwrap(), ProjectKind::Game);
        assert_eq!(ProjectKind::parse("Test").unwrap(), ProjectKind::Test);
    }

    #[test]
    fn test_parse_rejects_unknown_types() {
        for input in ["", "tool", "games", " Game", "démo"] {
            assert!(ProjectKind::parse(input).is_err(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn test_invalid_kind_reports_capitalized_input() {
        let err = ProjectKind::parse("tOOL").unwrap_err();
        assert_eq!(err.to_string(), "Tool is not a valid project type");
    }

    #[test]
    fn test_spellings() {
        assert_eq!(ProjectKind::Game.to_string(), "Game");
        assert_eq!(ProjectKind::Game.lowercase(), "game");
        assert_eq!(ProjectKind::Test.bundle_segment(), "tests");
        assert_eq!(ProjectKind::Demo.bundle_segment(), "demos");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("skyfall"), "Skyfall");
        assert_eq!(capitalize("SKY"), "Sky");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
    }
}
