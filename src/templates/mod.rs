//! Text templates for the generated project.
//!
//! Every template is a pure function of the project descriptor and the engine
//! settings, so the emitted text can be checked without touching disk.
//!
//! ## Main Parts
//!
//! - [`cmake`] - Top-level and `src/` `CMakeLists.txt`
//! - [`stub`] - `<Type>.h` and `<Type>.cpp`

pub mod cmake;
pub mod stub;

use std::path::PathBuf;

use crate::config::EngineSettings;
use crate::project::ProjectDescriptor;

/// A rendered file, with its path relative to the project destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedFile {
    /// Path relative to the destination directory
    pub relative_path: PathBuf,

    /// Full file contents
    pub contents: String,
}

impl RenderedFile {
    fn new(relative_path: impl Into<PathBuf>, contents: String) -> Self {
        Self {
            relative_path: relative_path.into(),
            contents,
        }
    }
}

/// Both build descriptors, top-level first.
#[must_use]
pub fn build_files(project: &ProjectDescriptor, engine: &EngineSettings) -> [RenderedFile; 2] {
    [
        RenderedFile::new("CMakeLists.txt", cmake::top_level(project, engine)),
        RenderedFile::new(
            PathBuf::from("src").join("CMakeLists.txt"),
            cmake::source_dir(project, engine),
        ),
    ]
}

/// The class header stub.
#[must_use]
pub fn header_file(project: &ProjectDescriptor, engine: &EngineSettings) -> RenderedFile {
    RenderedFile::new(
        PathBuf::from("src").join(project.header_file_name()),
        stub::header(project, engine),
    )
}

/// The class source stub.
#[must_use]
pub fn source_file(project: &ProjectDescriptor, engine: &EngineSettings) -> RenderedFile {
    RenderedFile::new(
        PathBuf::from("src").join(project.source_file_name()),
        stub::source(project, engine),
    )
}
