//! Error types reported by walkers and filesystems

use std::io;
use std::sync::Arc;

use thiserror::Error;

/// Errors surfaced through [`Walker::err`](crate::Walker::err).
///
/// I/O failures are held behind an `Arc` so a visit (and its error) can be
/// cloned into the post-read error visit without losing the source.
#[derive(Error, Debug, Clone)]
pub enum WalkError {
    #[error("walk: advance must be called first")]
    AdvanceNotCalled,

    #[error("stat {path}: {source}")]
    Stat {
        path: String,
        #[source]
        source: Arc<io::Error>,
    },

    #[error("read dir {path}: {source}")]
    ReadDir {
        path: String,
        #[source]
        source: Arc<io::Error>,
    },

    #[error("invalid path: {path:?}")]
    InvalidPath { path: String },

    #[error("{path}: file does not exist")]
    NotFound { path: String },

    #[error("{path}: not a directory")]
    NotADirectory { path: String },

    #[error("read dir {path}: {message}")]
    Injected { path: String, message: String },
}

impl WalkError {
    pub fn stat(path: impl Into<String>, source: io::Error) -> Self {
        WalkError::Stat {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    pub fn read_dir(path: impl Into<String>, source: io::Error) -> Self {
        WalkError::ReadDir {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    /// Path the error refers to, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            WalkError::AdvanceNotCalled => None,
            WalkError::Stat { path, .. }
            | WalkError::ReadDir { path, .. }
            | WalkError::InvalidPath { path }
            | WalkError::NotFound { path }
            | WalkError::NotADirectory { path }
            | WalkError::Injected { path, .. } => Some(path),
        }
    }
}

pub type Result<T> = std::result::Result<T, WalkError>;
