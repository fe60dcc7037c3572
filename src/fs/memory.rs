//! In-memory [`ProjectFs`] used by tests and dry runs.
//!
//! A [`MemoryFs`] can either stand alone (empty tree, relative paths are
//! rooted at an implicit, always-present current directory) or overlay the
//! real disk: paths it has not touched are answered by inspecting the disk,
//! while every mutation stays in memory. The overlay mode lets a dry run
//! report blocked paths and link conflicts exactly as a real build would.

use std::collections::BTreeMap;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::fs::{DiskFs, EntryKind, ProjectFs};

/// Maximum number of symlinks followed when resolving a path.
const MAX_LINK_HOPS: usize = 8;

/// A node in the in-memory tree.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Entry {
    Directory,
    File(String),
    Symlink(PathBuf),
}

/// In-memory filesystem, optionally overlaying the real disk read-only.
#[derive(Clone, Debug, Default)]
pub struct MemoryFs {
    entries: BTreeMap<PathBuf, Entry>,
    disk: Option<DiskFs>,
}

impl MemoryFs {
    /// Create an empty in-memory filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an in-memory layer on top of the real disk.
    ///
    /// Reads fall through to the disk for untouched paths; writes never do.
    #[must_use]
    pub const fn overlaying_disk() -> Self {
        Self {
            entries: BTreeMap::new(),
            disk: Some(DiskFs::new()),
        }
    }

    /// Contents of a file written to this filesystem.
    #[must_use]
    pub fn contents(&self, path: &Path) -> Option<&str> {
        match self.entries.get(path) {
            Some(Entry::File(contents)) => Some(contents),
            _ => None,
        }
    }

    /// Target of a symlink created in this filesystem.
    #[must_use]
    pub fn symlink_target(&self, path: &Path) -> Option<&Path> {
        match self.entries.get(path) {
            Some(Entry::Symlink(target)) => Some(target),
            _ => None,
        }
    }

    /// Every directory created in this filesystem, in path order.
    pub fn directories(&self) -> impl Iterator<Item = &Path> {
        self.entries
            .iter()
            .filter(|(_, entry)| matches!(entry, Entry::Directory))
            .map(|(path, _)| path.as_path())
    }

    /// Every file written to this filesystem, in path order.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.entries
            .iter()
            .filter(|(_, entry)| matches!(entry, Entry::File(_)))
            .map(|(path, _)| path.as_path())
    }

    fn lookup(&self, path: &Path) -> io::Result<EntryKind> {
        if is_implicit_root(path) {
            return Ok(EntryKind::Directory);
        }

        match self.entries.get(path) {
            Some(Entry::Directory) => Ok(EntryKind::Directory),
            Some(Entry::File(_)) => Ok(EntryKind::Other),
            Some(Entry::Symlink(target)) => Ok(EntryKind::Symlink(target.clone())),
            None => {
                self.require_no_file_ancestor(path)?;
                self.disk
                    .as_ref()
                    .map_or(Ok(EntryKind::Missing), |disk| disk.entry_kind(path))
            }
        }
    }

    /// Fail like the OS does when a path runs through a regular file.
    fn require_no_file_ancestor(&self, path: &Path) -> io::Result<()> {
        for ancestor in path.ancestors().skip(1) {
            match self.entries.get(ancestor) {
                Some(Entry::File(_)) => {
                    return Err(io::Error::new(
                        io::ErrorKind::NotADirectory,
                        format!("{} is not a directory", ancestor.display()),
                    ));
                }
                Some(_) => break,
                None => {}
            }
        }
        Ok(())
    }

    fn require_parent_dir(&self, path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) if !self.is_dir(parent) => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("parent directory {} does not exist", parent.display()),
            )),
            _ => Ok(()),
        }
    }
}

/// The empty path stands for the current directory, which always exists.
fn is_implicit_root(path: &Path) -> bool {
    path.as_os_str().is_empty() || path == Path::new(".")
}

/// Resolve `..` and `.` components without touching any filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                ) {
                    normalized.pop();
                } else {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

impl ProjectFs for MemoryFs {
    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind> {
        self.lookup(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let mut current = path.to_path_buf();
        for _ in 0..MAX_LINK_HOPS {
            if !is_implicit_root(&current)
                && !self.entries.contains_key(&current)
                && let Some(disk) = &self.disk
            {
                return disk.is_dir(&current);
            }

            match self.lookup(&current) {
                Ok(EntryKind::Directory) => return true,
                Ok(EntryKind::Symlink(target)) => {
                    let base = current.parent().map(Path::to_path_buf).unwrap_or_default();
                    current = normalize(&base.join(target));
                }
                _ => return false,
            }
        }
        false
    }

    fn create_dir_all(&mut self, path: &Path) -> io::Result<()> {
        let mut missing = Vec::new();
        for ancestor in path.ancestors() {
            if is_implicit_root(ancestor) {
                break;
            }
            match self.lookup(ancestor)? {
                EntryKind::Missing => missing.push(ancestor.to_path_buf()),
                EntryKind::Directory => break,
                EntryKind::Symlink(_) if self.is_dir(ancestor) => break,
                EntryKind::Symlink(_) | EntryKind::Other => {
                    return Err(io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        format!("{} exists and is not a directory", ancestor.display()),
                    ));
                }
            }
        }

        for dir in missing {
            self.entries.insert(dir, Entry::Directory);
        }
        Ok(())
    }

    fn symlink(&mut self, target: &Path, link: &Path) -> io::Result<()> {
        if self.lookup(link)? != EntryKind::Missing {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", link.display()),
            ));
        }
        self.require_parent_dir(link)?;

        self.entries
            .insert(link.to_path_buf(), Entry::Symlink(target.to_path_buf()));
        Ok(())
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        if self.is_dir(path) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is a directory", path.display()),
            ));
        }
        self.require_parent_dir(path)?;

        self.entries
            .insert(path.to_path_buf(), Entry::File(contents.to_string()));
        Ok(())
    }
}
