//! Structured JSON output for scripting and piping.
//!
//! This module provides serializable data structures that represent the
//! complete outcome of a generation run. When the `--json` flag is passed,
//! these structures are serialized to stdout as a single JSON object,
//! replacing all human-readable output.

use serde::Serialize;

use crate::generator::{BuildReport, ProjectGenerator};
use crate::project::ProjectKind;
use crate::templates::cmake::bundle_identifier;

/// Top-level JSON output emitted when `--json` is active.
#[derive(Serialize, Debug)]
pub struct JsonOutput {
    /// The execution mode: `"generate"` or `"dry_run"`.
    pub mode: String,

    /// The generated project.
    pub project: JsonProject,

    /// Layout directories in processing order.
    pub directories: Vec<JsonEntry>,

    /// The engine media link.
    pub link: JsonLink,

    /// Files written, in write order.
    pub files: Vec<String>,
}

/// Identity of the generated project.
#[derive(Serialize, Debug)]
pub struct JsonProject {
    /// Project type (`"Demo"`, `"Game"`, `"Test"`).
    #[serde(rename = "type")]
    pub kind: ProjectKind,

    /// Normalized project name.
    pub name: String,

    /// Destination directory.
    pub destination: String,

    /// Engine the project links against.
    pub engine: String,

    /// Bundle identifier written to `src/CMakeLists.txt`.
    pub bundle_identifier: String,
}

/// A single directory of the layout.
#[derive(Serialize, Debug)]
pub struct JsonEntry {
    /// Resolved path.
    pub path: String,

    /// `"created"` or `"existing"`.
    pub status: &'static str,
}

/// The engine media link.
#[derive(Serialize, Debug)]
pub struct JsonLink {
    /// Path of the link.
    pub path: String,

    /// Relative link target.
    pub target: String,

    /// `"created"` or `"existing"`.
    pub status: &'static str,
}

impl JsonOutput {
    /// Build a `JsonOutput` from a finished build.
    #[must_use]
    pub fn from_report(generator: &ProjectGenerator, report: &BuildReport, dry_run: bool) -> Self {
        let project = generator.project();
        let engine = generator.engine();

        Self {
            mode: if dry_run { "dry_run" } else { "generate" }.to_string(),
            project: JsonProject {
                kind: project.kind,
                name: project.name.to_string(),
                destination: report.destination.display().to_string(),
                engine: engine.name.clone(),
                bundle_identifier: bundle_identifier(project, engine),
            },
            directories: report
                .directories
                .iter()
                .map(|d| JsonEntry {
                    path: d.path.display().to_string(),
                    status: d.status.as_str(),
                })
                .collect(),
            link: JsonLink {
                path: report.link.path.display().to_string(),
                target: report.link.target.display().to_string(),
                status: report.link.status.as_str(),
            },
            files: report
                .files
                .iter()
                .map(|f| f.display().to_string())
                .collect(),
        }
    }
}
