//! stepwalk - walk a directory tree one step at a time, pruning as you go

pub mod error;
pub mod fs;
pub mod output;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::WalkError;
pub use fs::{DirEntry, FileInfo, FileSystem, FileType, MemFile, MemFs, OsFs, ReadDir};
pub use output::{JsonFormatter, OutputConfig, StreamingFormatter};
pub use walk::{
    Entry, FileFilter, Phase, StreamingOutput, StreamingWalker, VisitRecord, WalkSummary, Walker,
    WalkerConfig,
};
