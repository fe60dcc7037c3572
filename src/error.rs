//! Error types for project generation.
//!
//! Every failure the library can report is a [`GenerateError`]. Usage errors
//! (bad project type, name, engine settings or extra directory) are raised before any
//! filesystem activity; the remaining variants abort a build that is already
//! in progress.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for makeproject operations.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The project type is not one of Demo, Game or Test.
    #[error("{0} is not a valid project type")]
    InvalidKind(String),

    /// The project name does not match the identifier pattern.
    #[error("{0} is not a valid project name")]
    InvalidName(String),

    /// The engine name does not match the identifier pattern.
    #[error("{0} is not a valid engine name")]
    InvalidEngine(String),

    /// The bundle prefix is not a dot-separated list of identifiers.
    #[error("{0:?} is not a valid bundle identifier prefix")]
    InvalidBundlePrefix(String),

    /// The minimum `CMake` version is not a dotted numeric version.
    #[error("{0:?} is not a valid CMake version")]
    InvalidCmakeVersion(String),

    /// An extra layout directory is absolute, escapes the destination or
    /// collides with a generated file or the media link.
    #[error(
        "{} is not a valid project directory (must be relative, without '..', and not a generated path)",
        .0.display()
    )]
    InvalidExtraDir(PathBuf),

    /// A required directory path exists but is not a directory.
    #[error("{} blocked", .0.display())]
    BlockedPath(PathBuf),

    /// The engine media link exists but does not point where it should.
    #[error("{} already exists and is not a link to {}", .link.display(), .expected.display())]
    LinkConflict { link: PathBuf, expected: PathBuf },

    /// Underlying I/O failure while touching the destination tree.
    #[error("failed to {action} {}: {source}", .path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    /// Whether this error stems from bad user input rather than the filesystem.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::InvalidKind(_)
                | Self::InvalidName(_)
                | Self::InvalidEngine(_)
                | Self::InvalidBundlePrefix(_)
                | Self::InvalidCmakeVersion(_)
                | Self::InvalidExtraDir(_)
        )
    }

    pub(crate) fn filesystem(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        Self::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_classification() {
        assert!(GenerateError::InvalidKind("Tool".into()).is_usage());
        assert!(GenerateError::InvalidName("1abc".into()).is_usage());
        assert!(GenerateError::InvalidEngine("-".into()).is_usage());
        assert!(GenerateError::InvalidBundlePrefix(String::new()).is_usage());
        assert!(GenerateError::InvalidCmakeVersion("latest".into()).is_usage());
        assert!(GenerateError::InvalidExtraDir(PathBuf::from("/abs")).is_usage());

        assert!(!GenerateError::BlockedPath(PathBuf::from("x/src")).is_usage());
        let io = GenerateError::filesystem(
            "create directory",
            "x",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!io.is_usage());
    }

    #[test]
    fn test_messages_name_the_offending_value() {
        assert_eq!(
            GenerateError::InvalidKind("Tool".into()).to_string(),
            "Tool is not a valid project type"
        );
        assert_eq!(
            GenerateError::BlockedPath(PathBuf::from("sky/data/fonts")).to_string(),
            "sky/data/fonts blocked"
        );
        assert_eq!(
            GenerateError::InvalidBundlePrefix(String::new()).to_string(),
            "\"\" is not a valid bundle identifier prefix"
        );

        let err = GenerateError::filesystem(
            "write file",
            "sky/src/Game.h",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "failed to write file sky/src/Game.h: denied");
    }
}
