//! StreamingWalker - drives a `Walker` and streams visits to an output

use std::io;

use log::debug;
use serde::Serialize;

use crate::error::WalkError;
use crate::fs::{FileSystem, FileType};

use super::config::WalkerConfig;
use super::filter::FileFilter;
use super::utils::depth_below;
use super::walker::{Phase, Walker};

/// One emitted visit, as handed to a `StreamingOutput`.
#[derive(Debug, Clone, Serialize)]
pub struct VisitRecord<'a> {
    pub path: &'a str,
    pub name: &'a str,
    #[serde(rename = "type")]
    pub file_type: Option<FileType>,
    pub depth: usize,
}

impl VisitRecord<'_> {
    pub fn is_dir(&self) -> bool {
        self.file_type.is_some_and(FileType::is_dir)
    }
}

/// Counts for a finished walk. The root is not counted as a directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WalkSummary {
    pub dirs: usize,
    pub files: usize,
    pub errors: usize,
    /// The root itself could not be resolved
    pub root_failed: bool,
}

/// Callback for streaming output.
pub trait StreamingOutput {
    fn output_visit(&mut self, visit: &VisitRecord<'_>) -> io::Result<()>;

    fn output_error(&mut self, path: &str, err: &WalkError) -> io::Result<()>;

    fn finish(&mut self, summary: &WalkSummary) -> io::Result<()>;
}

/// Walks a filesystem with a [`Walker`], pruning according to its
/// configuration instead of filtering after the fact: ignored directories and
/// directories at the depth limit are never read.
pub struct StreamingWalker {
    config: WalkerConfig,
    filter: FileFilter,
}

impl StreamingWalker {
    pub fn new(config: WalkerConfig) -> Self {
        let filter = FileFilter::new(config.ignore_patterns.clone());
        Self { config, filter }
    }

    pub fn with_filter(mut self, filter: FileFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Walk `root` on `fs` and stream every visit to `output`.
    pub fn walk_streaming<F: FileSystem, O: StreamingOutput>(
        &self,
        fs: F,
        root: &str,
        output: &mut O,
    ) -> io::Result<WalkSummary> {
        let mut walker = Walker::new(fs, root);
        let mut summary = WalkSummary::default();

        while walker.advance() {
            let depth = depth_below(root, walker.path());

            if let Some(err) = walker.err() {
                debug!("visit error: {}", err);
                summary.errors += 1;
                if depth == 0 && walker.phase() == Phase::Unread {
                    summary.root_failed = true;
                }
                output.output_error(walker.path(), err)?;
                if walker.phase() == Phase::ReadFailed && self.config.prune_on_error {
                    walker.skip_dir();
                }
                continue;
            }

            let entry = walker.entry();
            let is_dir = entry.is_dir();

            if depth > 0 {
                let rel = relative_to(root, walker.path());
                if self.filter.is_ignored(rel, entry.name(), is_dir) {
                    debug!("pruning ignored {}", walker.path());
                    walker.skip_dir();
                    continue;
                }
            }

            if is_dir || !self.config.dirs_only {
                output.output_visit(&VisitRecord {
                    path: walker.path(),
                    name: entry.name(),
                    file_type: entry.file_type(),
                    depth,
                })?;
                if depth > 0 {
                    if is_dir {
                        summary.dirs += 1;
                    } else {
                        summary.files += 1;
                    }
                }
            }

            if is_dir && self.config.max_depth.is_some_and(|max| depth >= max) {
                debug!("depth limit reached at {}", walker.path());
                walker.skip_dir();
            }
        }

        output.finish(&summary)?;
        Ok(summary)
    }
}

fn relative_to<'a>(root: &str, path: &'a str) -> &'a str {
    if root == "." {
        return path;
    }
    path.strip_prefix(root)
        .map(|rest| rest.trim_start_matches('/'))
        .unwrap_or(path)
}
