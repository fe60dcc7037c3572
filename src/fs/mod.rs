//! Filesystem access used by the generator.
//!
//! The generator only needs four primitives: inspect a path, create a
//! directory with its ancestors, create a symbolic link and write a file.
//! [`ProjectFs`] captures exactly those so a build can run against the real
//! disk ([`DiskFs`]) or an in-memory tree ([`MemoryFs`]) for tests and dry
//! runs.

pub mod disk;
pub mod memory;

use std::io;
use std::path::{Path, PathBuf};

pub use disk::DiskFs;
pub use memory::MemoryFs;

/// What occupies a path, without following a final symbolic link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// Nothing exists at the path
    Missing,

    /// A real directory
    Directory,

    /// A symbolic link with the given (unresolved) target
    Symlink(PathBuf),

    /// A regular file or any other non-directory entry
    Other,
}

/// Minimal filesystem interface for materializing a project tree.
pub trait ProjectFs {
    /// Inspect `path` without following a final symbolic link.
    ///
    /// # Errors
    ///
    /// Returns an error if the path exists but cannot be inspected.
    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind>;

    /// Whether `path` is a directory, following symbolic links.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create `path` and every missing ancestor.
    ///
    /// # Errors
    ///
    /// Returns an error if an ancestor is not a directory or creation fails.
    fn create_dir_all(&mut self, path: &Path) -> io::Result<()>;

    /// Create a symbolic link at `link` pointing to `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if `link` already exists or creation fails.
    fn symlink(&mut self, target: &Path, link: &Path) -> io::Result<()>;

    /// Create or truncate `path` and write `contents` to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory is missing or the write fails.
    fn write_file(&mut self, path: &Path, contents: &str) -> io::Result<()>;
}
