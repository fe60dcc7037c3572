//! # makeproject
//!
//! Library behind the `makeproject` scaffolding generator. Given a project
//! type (Demo, Game or Test), a name and an optional destination, it creates
//! the directory layout, `CMake` build descriptors and a C++ stub class wired
//! to the wendy engine.
//!
//! ## Modules
//!
//! - [`project`] - Project type, name and descriptor validation
//! - [`config`] - Engine settings and the persistent config file
//! - [`templates`] - Pure text templates for every generated file
//! - [`fs`] - The filesystem interface with disk and in-memory backends
//! - [`generator`] - The four-step build
//! - [`output`] - JSON report for `--json`

pub mod config;
pub mod error;
pub mod fs;
pub mod generator;
pub mod output;
pub mod project;
pub mod templates;

pub use config::{EngineSettings, FileConfig};
pub use error::GenerateError;
pub use generator::{BuildReport, EntryStatus, ProjectGenerator, prepare};
pub use project::{ProjectDescriptor, ProjectKind, ProjectName};

/// One-line usage summary printed alongside usage errors.
pub const USAGE: &str = "Usage: makeproject {Demo|Game|Test} <name> [<path>]";
