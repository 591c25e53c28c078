//! Filesystem backed by a real directory tree

use std::fs;
use std::path::PathBuf;

use log::trace;

use crate::error::{Result, WalkError};

use super::{DirEntry, FileInfo, FileSystem, FileType, ReadDir, base_name, valid_path};

/// A directory on disk, addressed with slash paths relative to `base`.
///
/// `stat` follows symlinks, so a symlinked root is walked. Listings report
/// symlinks as `FileType::Symlink` and the walker never descends into them.
#[derive(Debug, Clone)]
pub struct OsFs {
    base: PathBuf,
}

impl OsFs {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn resolve(&self, path: &str) -> Option<PathBuf> {
        if !valid_path(path) {
            return None;
        }
        if path == "." {
            return Some(self.base.clone());
        }
        Some(path.split('/').fold(self.base.clone(), |acc, elem| acc.join(elem)))
    }
}

fn file_type_of(ft: fs::FileType) -> FileType {
    if ft.is_symlink() {
        FileType::Symlink
    } else if ft.is_dir() {
        FileType::Dir
    } else if ft.is_file() {
        FileType::File
    } else {
        FileType::Other
    }
}

impl FileSystem for OsFs {
    fn stat(&self, path: &str) -> Result<FileInfo> {
        let full = self.resolve(path).ok_or_else(|| WalkError::InvalidPath {
            path: path.to_string(),
        })?;
        let meta = fs::metadata(&full).map_err(|e| WalkError::stat(path, e))?;
        Ok(FileInfo {
            name: base_name(path).to_string(),
            file_type: file_type_of(meta.file_type()),
            len: meta.len(),
            modified: meta.modified().ok(),
        })
    }

    fn read_dir(&self, path: &str) -> ReadDir {
        let Some(full) = self.resolve(path) else {
            return ReadDir::failed(WalkError::InvalidPath {
                path: path.to_string(),
            });
        };
        let iter = match fs::read_dir(&full) {
            Ok(iter) => iter,
            Err(e) => return ReadDir::failed(WalkError::read_dir(path, e)),
        };

        let mut listing = ReadDir::default();
        for entry in iter {
            let (entry, ft) = match entry.and_then(|e| e.file_type().map(|ft| (e, ft))) {
                Ok(pair) => pair,
                Err(e) => {
                    // Keep what was read so far and report the first failure.
                    listing.error = Some(WalkError::read_dir(path, e));
                    break;
                }
            };
            listing.entries.push(DirEntry::new(
                entry.file_name().to_string_lossy().into_owned(),
                file_type_of(ft),
            ));
        }
        listing.entries.sort_by(|a, b| a.name.cmp(&b.name));
        trace!("read {} entries from {}", listing.entries.len(), full.display());
        listing
    }
}
