//! Filesystem abstraction consumed by the walker
//!
//! A walker only needs two primitives from its filesystem: `stat` for the
//! root and `read_dir` for every directory it expands.
//!
//! - `OsFs`: a real directory tree rooted at a base path
//! - `MemFs`: an in-memory tree, with injectable listing errors

mod mem;
mod os;

use std::time::SystemTime;

use serde::Serialize;

use crate::error::{Result, WalkError};

pub use mem::{MemFile, MemFs};
pub use os::OsFs;

/// Kind of a filesystem object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    File,
    Dir,
    Symlink,
    Other,
}

impl FileType {
    pub fn is_dir(self) -> bool {
        self == FileType::Dir
    }
}

/// Result of a `stat` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub file_type: FileType,
    pub len: u64,
    pub modified: Option<SystemTime>,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub file_type: FileType,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, file_type: FileType) -> Self {
        Self {
            name: name.into(),
            file_type,
        }
    }
}

/// A directory listing. `entries` may be non-empty even when `error` is set:
/// whatever was read before the failure is still returned.
#[derive(Debug, Default)]
pub struct ReadDir {
    pub entries: Vec<DirEntry>,
    pub error: Option<WalkError>,
}

impl ReadDir {
    pub fn ok(entries: Vec<DirEntry>) -> Self {
        Self {
            entries,
            error: None,
        }
    }

    pub fn failed(error: WalkError) -> Self {
        Self {
            entries: Vec::new(),
            error: Some(error),
        }
    }
}

/// The two operations a walker needs from a filesystem.
///
/// Paths are slash-separated and relative to the filesystem's own root,
/// with `.` naming the root itself (see [`valid_path`]). Implementations are
/// responsible for returning listings in lexical order.
pub trait FileSystem {
    fn stat(&self, path: &str) -> Result<FileInfo>;

    fn read_dir(&self, path: &str) -> ReadDir;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn stat(&self, path: &str) -> Result<FileInfo> {
        (**self).stat(path)
    }

    fn read_dir(&self, path: &str) -> ReadDir {
        (**self).read_dir(path)
    }
}

/// Check that `path` is a valid filesystem path: `.` for the root, otherwise
/// non-empty slash-separated elements, none of them `.` or `..`, with no
/// leading or trailing slash.
pub fn valid_path(path: &str) -> bool {
    if path == "." {
        return true;
    }
    !path.is_empty()
        && path
            .split('/')
            .all(|elem| !elem.is_empty() && elem != "." && elem != "..")
}

/// Last element of a slash path; the root keeps its literal name.
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_path() {
        assert!(valid_path("."));
        assert!(valid_path("a"));
        assert!(valid_path("a/b/c"));
        assert!(valid_path("a.txt"));

        assert!(!valid_path(""));
        assert!(!valid_path("/a"));
        assert!(!valid_path("a/"));
        assert!(!valid_path("a//b"));
        assert!(!valid_path("./a"));
        assert!(!valid_path("a/../b"));
        assert!(!valid_path(".."));
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("."), ".");
        assert_eq!(base_name("a"), "a");
        assert_eq!(base_name("a/b/c.rs"), "c.rs");
    }
}
