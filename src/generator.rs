//! Project skeleton generation.
//!
//! [`ProjectGenerator`] materializes a project on a [`ProjectFs`] in four
//! fixed steps: directory tree (plus the engine media link), build
//! descriptors, header stub and source stub. The first failure aborts the
//! build; nothing already created is rolled back.

use std::path::{Component, Path, PathBuf};

use crate::config::EngineSettings;
use crate::error::GenerateError;
use crate::fs::{EntryKind, ProjectFs};
use crate::project::ProjectDescriptor;
use crate::templates::{self, RenderedFile};

/// Directories every generated project gets, relative to its destination.
pub const DEFAULT_LAYOUT: [&str; 6] = [
    "src",
    "data/fonts",
    "data/sounds",
    "data/shaders",
    "data/models",
    "data/textures",
];

/// Whether a path was created by this build or was already present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryStatus {
    /// Created by this build
    Created,

    /// Already present and left untouched
    Existing,
}

impl EntryStatus {
    /// Lowercase label used in console and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Existing => "existing",
        }
    }
}

/// Outcome for one directory of the layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryReport {
    /// Resolved directory path
    pub path: PathBuf,

    /// Whether it was created or already existed
    pub status: EntryStatus,
}

/// Outcome for the engine media link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkReport {
    /// Path of the link, `<destination>/data/<engine>`
    pub path: PathBuf,

    /// Relative target the link points to
    pub target: PathBuf,

    /// Whether it was created or already existed with the same target
    pub status: EntryStatus,
}

/// Everything a completed build did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildReport {
    /// Destination directory of the project
    pub destination: PathBuf,

    /// Layout directories in the order they were processed
    pub directories: Vec<DirectoryReport>,

    /// The engine media link
    pub link: LinkReport,

    /// Files written, in write order
    pub files: Vec<PathBuf>,
}

impl BuildReport {
    /// Number of directories created by this build.
    #[must_use]
    pub fn created_count(&self) -> usize {
        self.directories
            .iter()
            .filter(|d| d.status == EntryStatus::Created)
            .count()
    }
}

/// Materializes a new project skeleton from a descriptor and a list of
/// desired subdirectories.
///
/// The path list may hold duplicates and be in any order; it is sorted,
/// deduplicated and resolved against the destination only when [`build`]
/// runs.
///
/// [`build`]: ProjectGenerator::build
#[derive(Clone, Debug)]
pub struct ProjectGenerator {
    project: ProjectDescriptor,
    engine: EngineSettings,
    paths: Vec<PathBuf>,
}

impl ProjectGenerator {
    /// Create a generator with an empty path list.
    #[must_use]
    pub const fn new(project: ProjectDescriptor, engine: EngineSettings) -> Self {
        Self {
            project,
            engine,
            paths: Vec::new(),
        }
    }

    /// Append the standard project layout to the path list.
    #[must_use]
    pub fn with_default_layout(mut self) -> Self {
        self.paths.extend(DEFAULT_LAYOUT.iter().map(PathBuf::from));
        self
    }

    /// Append a directory, relative to the destination, to the path list.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidExtraDir`] for absolute paths, empty
    /// paths, paths containing `..` and paths at or below a generated file
    /// or the media link.
    pub fn add_path(&mut self, path: impl Into<PathBuf>) -> Result<&mut Self, GenerateError> {
        let path = path.into();
        let is_relative_descendant = path
            .components()
            .any(|c| matches!(c, Component::Normal(_)))
            && path
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

        if !is_relative_descendant || self.is_generated(&path) {
            return Err(GenerateError::InvalidExtraDir(path));
        }

        self.paths.push(path);
        Ok(self)
    }

    /// The project being generated.
    #[must_use]
    pub const fn project(&self) -> &ProjectDescriptor {
        &self.project
    }

    /// The engine the project is wired to.
    #[must_use]
    pub const fn engine(&self) -> &EngineSettings {
        &self.engine
    }

    /// The accumulated (unsorted, possibly duplicated) path list.
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Deduplicated, sorted paths resolved against the destination.
    #[must_use]
    pub fn resolved_paths(&self) -> Vec<PathBuf> {
        let mut paths = self.paths.clone();
        paths.sort();
        paths.dedup();
        paths
            .into_iter()
            .map(|p| self.project.destination.join(p))
            .collect()
    }

    /// Path of the engine media link, `<destination>/data/<engine>`.
    #[must_use]
    pub fn link_path(&self) -> PathBuf {
        self.project.destination.join(self.relative_link_path())
    }

    fn relative_link_path(&self) -> PathBuf {
        Path::new("data").join(&self.engine.name)
    }

    /// Paths, relative to the destination, that the build creates as
    /// something other than a layout directory.
    fn generated_paths(&self) -> [PathBuf; 5] {
        let src = Path::new("src");
        [
            self.relative_link_path(),
            PathBuf::from("CMakeLists.txt"),
            src.join("CMakeLists.txt"),
            src.join(self.project.header_file_name()),
            src.join(self.project.source_file_name()),
        ]
    }

    /// Whether a relative layout path would have to replace a generated
    /// path, or create a directory below one.
    fn is_generated(&self, relative: &Path) -> bool {
        let relative: PathBuf = relative
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .collect();
        self.generated_paths()
            .iter()
            .any(|generated| relative.starts_with(generated))
    }

    /// Run all four build steps against `fs`.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::InvalidEngine`], [`GenerateError::InvalidBundlePrefix`] or
    ///   [`GenerateError::InvalidCmakeVersion`] before anything is touched
    /// - [`GenerateError::BlockedPath`] when a layout path exists as a non-directory;
    ///   paths after it in sorted order are not attempted
    /// - [`GenerateError::LinkConflict`] when the media link path is taken by
    ///   anything other than an identical link
    /// - [`GenerateError::Filesystem`] for any other I/O failure
    pub fn build(&self, fs: &mut impl ProjectFs) -> Result<BuildReport, GenerateError> {
        self.engine.validate()?;

        let directories = self.build_directory_tree(fs)?;
        let link = self.build_media_link(fs)?;

        let mut files = Vec::with_capacity(4);
        for file in templates::build_files(&self.project, &self.engine) {
            files.push(self.write(fs, &file)?);
        }
        files.push(self.write(fs, &templates::header_file(&self.project, &self.engine))?);
        files.push(self.write(fs, &templates::source_file(&self.project, &self.engine))?);

        Ok(BuildReport {
            destination: self.project.destination.clone(),
            directories,
            link,
            files,
        })
    }

    fn build_directory_tree(
        &self,
        fs: &mut impl ProjectFs,
    ) -> Result<Vec<DirectoryReport>, GenerateError> {
        let mut reports = Vec::new();

        for path in self.resolved_paths() {
            let kind = fs
                .entry_kind(&path)
                .map_err(|e| GenerateError::filesystem("inspect", &path, e))?;

            let status = match kind {
                EntryKind::Directory => EntryStatus::Existing,
                EntryKind::Symlink(_) if fs.is_dir(&path) => EntryStatus::Existing,
                EntryKind::Symlink(_) | EntryKind::Other => {
                    return Err(GenerateError::BlockedPath(path));
                }
                EntryKind::Missing => {
                    fs.create_dir_all(&path)
                        .map_err(|e| GenerateError::filesystem("create directory", &path, e))?;
                    EntryStatus::Created
                }
            };

            reports.push(DirectoryReport { path, status });
        }

        Ok(reports)
    }

    fn build_media_link(&self, fs: &mut impl ProjectFs) -> Result<LinkReport, GenerateError> {
        let path = self.link_path();
        let target = self.engine.media_link_target();

        let kind = fs
            .entry_kind(&path)
            .map_err(|e| GenerateError::filesystem("inspect", &path, e))?;

        let status = match kind {
            EntryKind::Missing => {
                fs.symlink(&target, &path)
                    .map_err(|e| GenerateError::filesystem("create link", &path, e))?;
                EntryStatus::Created
            }
            EntryKind::Symlink(existing) if existing == target => EntryStatus::Existing,
            EntryKind::Symlink(_) | EntryKind::Directory | EntryKind::Other => {
                return Err(GenerateError::LinkConflict {
                    link: path,
                    expected: target,
                });
            }
        };

        Ok(LinkReport {
            path,
            target,
            status,
        })
    }

    fn write(&self, fs: &mut impl ProjectFs, file: &RenderedFile) -> Result<PathBuf, GenerateError> {
        let path = self.project.destination.join(&file.relative_path);
        fs.write_file(&path, &file.contents)
            .map_err(|e| GenerateError::filesystem("write file", &path, e))?;
        Ok(path)
    }
}

/// Validate raw arguments and build a generator with the standard layout
/// plus `extra_dirs`.
///
/// This is the single place command-line input is checked, so every usage
/// error surfaces before any filesystem activity.
///
/// # Errors
///
/// Returns a usage [`GenerateError`] for an invalid type, name, engine
/// setting or extra directory, including one that lands on a generated path.
pub fn prepare(
    kind: &str,
    name: &str,
    destination: Option<&Path>,
    engine: EngineSettings,
    extra_dirs: &[PathBuf],
) -> Result<ProjectGenerator, GenerateError> {
    let project = ProjectDescriptor::parse(kind, name, destination)?;
    engine.validate()?;

    let mut generator = ProjectGenerator::new(project, engine).with_default_layout();
    for dir in extra_dirs {
        generator.add_path(dir.clone())?;
    }
    Ok(generator)
}
