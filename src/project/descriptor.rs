//! The project descriptor handed to the generator.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::GenerateError;
use crate::project::{ProjectKind, ProjectName};

/// Immutable (kind, name, destination) triple identifying what to generate.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct ProjectDescriptor {
    /// Type of the project, naming the generated class and files
    pub kind: ProjectKind,

    /// Normalized project name, used as namespace and `CMake` project name
    pub name: ProjectName,

    /// Directory the project tree is created in
    pub destination: PathBuf,
}

impl ProjectDescriptor {
    /// Build a descriptor from already-validated parts.
    #[must_use]
    pub const fn new(kind: ProjectKind, name: ProjectName, destination: PathBuf) -> Self {
        Self {
            kind,
            name,
            destination,
        }
    }

    /// Validate raw command-line values and build a descriptor.
    ///
    /// The type is checked first, then the name. When `destination` is
    /// `None` the project is created in a directory named after the
    /// lowercased name.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidKind`] or [`GenerateError::InvalidName`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::path::Path;
    /// # use makeproject::project::{ProjectDescriptor, ProjectKind};
    /// let project = ProjectDescriptor::parse("test", "MyTest", Some(Path::new("build/out"))).unwrap();
    /// assert_eq!(project.kind, ProjectKind::Test);
    /// assert_eq!(project.name.as_str(), "mytest");
    /// assert_eq!(project.destination, Path::new("build/out"));
    /// ```
    pub fn parse(
        kind: &str,
        name: &str,
        destination: Option<&Path>,
    ) -> Result<Self, GenerateError> {
        let kind = ProjectKind::parse(kind)?;
        let name = ProjectName::parse(name)?;
        let destination =
            destination.map_or_else(|| PathBuf::from(name.as_str()), Path::to_path_buf);

        Ok(Self::new(kind, name, destination))
    }

    /// File name of the generated header (`<Type>.h`).
    #[must_use]
    pub fn header_file_name(&self) -> String {
        format!("{}.h", self.kind)
    }

    /// File name of the generated source (`<Type>.cpp`).
    #[must_use]
    pub fn source_file_name(&self) -> String {
        format!("{}.cpp", self.kind)
    }
}
