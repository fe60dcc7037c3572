//! [`ProjectFs`] backed by the real filesystem.

use std::fs;
use std::io;
use std::path::Path;

use crate::fs::{EntryKind, ProjectFs};

/// Filesystem implementation delegating to `std::fs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiskFs;

impl DiskFs {
    /// Create a new disk-backed filesystem handle.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Create a directory symlink.
///
/// On Unix any symlink will do; on Windows the link must be flagged as a
/// directory link since the media target is a directory.
#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}

impl ProjectFs for DiskFs {
    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind> {
        let metadata = match fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(EntryKind::Missing),
            Err(e) => return Err(e),
        };

        let file_type = metadata.file_type();
        if file_type.is_symlink() {
            Ok(EntryKind::Symlink(fs::read_link(path)?))
        } else if file_type.is_dir() {
            Ok(EntryKind::Directory)
        } else {
            Ok(EntryKind::Other)
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&mut self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn symlink(&mut self, target: &Path, link: &Path) -> io::Result<()> {
        create_symlink(target, link)
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}
