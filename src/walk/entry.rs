//! Metadata for a visited file or directory

use crate::fs::{DirEntry, FileInfo, FileType};

/// Metadata of the current visit.
///
/// The root comes from `stat`, children from a directory listing; both answer
/// the same questions so the walker never special-cases the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Root resolved through `stat`.
    Info(FileInfo),
    /// Child reported by a directory listing.
    Listed(DirEntry),
    /// Root whose `stat` failed, or no visit yet.
    Unresolved { name: String },
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::Info(info) => &info.name,
            Entry::Listed(entry) => &entry.name,
            Entry::Unresolved { name } => name,
        }
    }

    pub fn file_type(&self) -> Option<FileType> {
        match self {
            Entry::Info(info) => Some(info.file_type),
            Entry::Listed(entry) => Some(entry.file_type),
            Entry::Unresolved { .. } => None,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.file_type().is_some_and(FileType::is_dir)
    }

    /// Full `stat` result, only available for a resolved root.
    pub fn info(&self) -> Option<&FileInfo> {
        match self {
            Entry::Info(info) => Some(info),
            _ => None,
        }
    }
}

impl From<FileInfo> for Entry {
    fn from(info: FileInfo) -> Self {
        Entry::Info(info)
    }
}

impl From<DirEntry> for Entry {
    fn from(entry: DirEntry) -> Self {
        Entry::Listed(entry)
    }
}
