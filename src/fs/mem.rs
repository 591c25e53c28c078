//! In-memory filesystem for tests and benchmarks

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

use crate::error::{Result, WalkError};

use super::{DirEntry, FileInfo, FileSystem, FileType, ReadDir, base_name, valid_path};

/// A file or explicit directory stored in a [`MemFs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemFile {
    pub file_type: FileType,
    pub len: u64,
}

impl MemFile {
    pub fn file() -> Self {
        Self {
            file_type: FileType::File,
            len: 0,
        }
    }

    pub fn dir() -> Self {
        Self {
            file_type: FileType::Dir,
            len: 0,
        }
    }

    pub fn with_len(mut self, len: u64) -> Self {
        self.len = len;
        self
    }
}

/// Map of slash paths to files.
///
/// Parent directories of every stored path exist implicitly. Listing errors
/// registered with [`MemFs::with_read_dir_error`] are returned together with
/// the directory's real entries, which models a partially failed read.
///
/// The tree can be changed through `&self` between walker advances.
#[derive(Debug, Default)]
pub struct MemFs {
    files: RefCell<BTreeMap<String, MemFile>>,
    read_dir_errors: HashMap<String, String>,
}

impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(path, file)` pairs.
    pub fn from_files<'a>(files: impl IntoIterator<Item = (&'a str, MemFile)>) -> Self {
        let fsys = Self::new();
        for (path, file) in files {
            fsys.insert(path, file);
        }
        fsys
    }

    /// Make every listing of `path` report `message` as an error.
    pub fn with_read_dir_error(mut self, path: &str, message: &str) -> Self {
        self.read_dir_errors
            .insert(path.to_string(), message.to_string());
        self
    }

    pub fn insert(&self, path: &str, file: MemFile) {
        self.files.borrow_mut().insert(path.to_string(), file);
    }

    pub fn remove(&self, path: &str) -> Option<MemFile> {
        self.files.borrow_mut().remove(path)
    }

    fn lookup(&self, path: &str) -> Option<MemFile> {
        if path == "." {
            return Some(MemFile::dir());
        }
        let files = self.files.borrow();
        if let Some(file) = files.get(path) {
            return Some(*file);
        }
        let prefix = format!("{}/", path);
        files
            .range(prefix.clone()..)
            .next()
            .filter(|(key, _)| key.starts_with(&prefix))
            .map(|_| MemFile::dir())
    }
}

impl FileSystem for MemFs {
    fn stat(&self, path: &str) -> Result<FileInfo> {
        if !valid_path(path) {
            return Err(WalkError::InvalidPath {
                path: path.to_string(),
            });
        }
        let file = self.lookup(path).ok_or_else(|| WalkError::NotFound {
            path: path.to_string(),
        })?;
        Ok(FileInfo {
            name: base_name(path).to_string(),
            file_type: file.file_type,
            len: file.len,
            modified: None,
        })
    }

    fn read_dir(&self, path: &str) -> ReadDir {
        if !valid_path(path) {
            return ReadDir::failed(WalkError::InvalidPath {
                path: path.to_string(),
            });
        }
        match self.lookup(path) {
            None => {
                return ReadDir::failed(WalkError::NotFound {
                    path: path.to_string(),
                });
            }
            Some(file) if !file.file_type.is_dir() => {
                return ReadDir::failed(WalkError::NotADirectory {
                    path: path.to_string(),
                });
            }
            Some(_) => {}
        }

        let prefix = if path == "." {
            String::new()
        } else {
            format!("{}/", path)
        };

        let mut children: BTreeMap<String, FileType> = BTreeMap::new();
        for (key, file) in self.files.borrow().iter() {
            let Some(rest) = key.strip_prefix(&prefix) else {
                continue;
            };
            if rest.is_empty() {
                continue;
            }
            match rest.split_once('/') {
                Some((name, _)) => {
                    children.insert(name.to_string(), FileType::Dir);
                }
                None => {
                    children
                        .entry(rest.to_string())
                        .or_insert(file.file_type);
                }
            }
        }

        ReadDir {
            entries: children
                .into_iter()
                .map(|(name, file_type)| DirEntry::new(name, file_type))
                .collect(),
            error: self
                .read_dir_errors
                .get(path)
                .map(|message| WalkError::Injected {
                    path: path.to_string(),
                    message: message.clone(),
                }),
        }
    }
}
