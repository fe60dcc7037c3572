//! Validated project identifiers.

use std::fmt::{Display, Formatter, Result};
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::GenerateError;
use crate::project::kind::capitalize;

/// Identifier rule shared by project and engine names: a letter followed by
/// ASCII letters, digits or underscores.
fn identifier_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("Invalid identifier regex"))
}

/// Whether `input` is a valid C++ and `CMake` identifier for our purposes.
#[must_use]
pub fn is_identifier(input: &str) -> bool {
    identifier_regex().is_match(input)
}

/// A lowercased project name that is safe to use as a namespace, `CMake`
/// project name and default directory name.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Lowercase `input` and validate it as an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidName`] with the lowercased input when
    /// it does not start with a letter or contains anything other than
    /// letters, digits and underscores.
    ///
    /// # Examples
    ///
    /// ```
    /// # use makeproject::project::ProjectName;
    /// assert_eq!(ProjectName::parse("MyTest").unwrap().as_str(), "mytest");
    /// assert!(ProjectName::parse("3d_demo").is_err());
    /// ```
    pub fn parse(input: &str) -> std::result::Result<Self, GenerateError> {
        let lowered = input.to_lowercase();
        if is_identifier(&lowered) {
            Ok(Self(lowered))
        } else {
            Err(GenerateError::InvalidName(lowered))
        }
    }

    /// The normalized (lowercase) name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form with an upper-case first letter, used for window titles
    /// and bundle names.
    #[must_use]
    pub fn capitalized(&self) -> String {
        capitalize(&self.0)
    }
}

impl Display for ProjectName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
