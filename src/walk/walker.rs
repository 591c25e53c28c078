//! Walker - steps through a tree one visit at a time

use log::{debug, trace};

use crate::error::WalkError;
use crate::fs::{FileSystem, base_name};

use super::entry::Entry;
use super::utils::join_path;

/// Where a visit stands in the two-phase directory protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ordinary visit. For a directory, its listing has not been read yet.
    Unread,
    /// Second visit of a directory whose listing failed.
    ReadFailed,
}

#[derive(Debug, Clone)]
struct Visit {
    path: String,
    entry: Entry,
    err: Option<WalkError>,
    /// Stack length to truncate to when skipping this item's subtree.
    skip_dir: usize,
    /// Stack length to truncate to when also skipping its later siblings.
    skip_parent: usize,
    phase: Phase,
}

/// Iterates over the descendants of a path, including the path itself.
///
/// Successive calls to [`advance`](Walker::advance) step through each file
/// and directory in lexical order (as listed by the filesystem). The current
/// visit is then available through `path`, `entry` and `err`, and the rest of
/// its subtree can be pruned with `skip_dir` or `skip_parent` before the next
/// advance.
///
/// A directory is read in full before any of its children are visited.
/// Symlinks found in directories are reported but never descended into; a
/// root that is a symlink is resolved by `stat` and walked.
///
/// ```
/// use stepwalk::{MemFile, MemFs, Walker};
///
/// let fsys = MemFs::from_files([("a/x", MemFile::file()), ("b", MemFile::file())]);
/// let mut walker = Walker::new(&fsys, ".");
/// let mut seen = Vec::new();
/// while walker.advance() {
///     if walker.err().is_some() {
///         continue;
///     }
///     seen.push(walker.path().to_string());
/// }
/// assert_eq!(seen, [".", "a", "a/x", "b"]);
/// ```
pub struct Walker<F> {
    fs: F,
    cur: Visit,
    stack: Vec<Visit>,
    descend: bool,
}

impl<F: FileSystem> Walker<F> {
    /// Create a walker rooted at `root` on `fs`.
    ///
    /// The root is stat'ed immediately. A failure is not returned here; it is
    /// reported by `err` on the first visit.
    pub fn new(fs: F, root: impl Into<String>) -> Self {
        let root = root.into();
        let (entry, err) = match fs.stat(&root) {
            Ok(info) => (Entry::Info(info), None),
            Err(e) => (
                Entry::Unresolved {
                    name: base_name(&root).to_string(),
                },
                Some(e),
            ),
        };
        let first = Visit {
            path: root,
            entry,
            err,
            skip_dir: 0,
            skip_parent: 0,
            phase: Phase::Unread,
        };
        Self {
            fs,
            cur: Visit {
                path: String::new(),
                entry: Entry::Unresolved {
                    name: String::new(),
                },
                err: Some(WalkError::AdvanceNotCalled),
                skip_dir: 0,
                skip_parent: 0,
                phase: Phase::Unread,
            },
            stack: vec![first],
            descend: false,
        }
    }

    /// Move to the next file or directory.
    ///
    /// Must be called before each visit, including the first. Returns false
    /// once the tree is exhausted, and keeps returning false afterwards.
    pub fn advance(&mut self) -> bool {
        if self.descend
            && self.cur.phase == Phase::Unread
            && self.cur.err.is_none()
            && self.cur.entry.is_dir()
        {
            self.expand();
        }

        match self.stack.pop() {
            Some(next) => {
                self.cur = next;
                self.descend = true;
                true
            }
            None => {
                self.descend = false;
                false
            }
        }
    }

    /// Read the current directory and queue its children, plus a second
    /// visit of the directory itself if the read failed.
    fn expand(&mut self) {
        let listing = self.fs.read_dir(&self.cur.path);
        trace!(
            "expanding {} ({} entries)",
            self.cur.path,
            listing.entries.len()
        );

        let parent_mark = self.stack.len();
        for child in listing.entries.into_iter().rev() {
            let path = join_path(&self.cur.path, &child.name);
            let skip_dir = self.stack.len();
            self.stack.push(Visit {
                path,
                entry: Entry::Listed(child),
                err: None,
                skip_dir,
                skip_parent: parent_mark,
                phase: Phase::Unread,
            });
        }

        if let Some(err) = listing.error {
            debug!("listing {} failed: {}", self.cur.path, err);
            // Same marks as the first visit, so pruning either visit drops
            // the same pending work.
            self.stack.push(Visit {
                path: self.cur.path.clone(),
                entry: self.cur.entry.clone(),
                err: Some(err),
                skip_dir: self.cur.skip_dir,
                skip_parent: self.cur.skip_parent,
                phase: Phase::ReadFailed,
            });
        }
    }

    /// Path of the current visit, with the walker's root as prefix.
    pub fn path(&self) -> &str {
        &self.cur.path
    }

    pub fn entry(&self) -> &Entry {
        &self.cur.entry
    }

    /// Error for the current visit, if any.
    ///
    /// A directory whose read fails is visited twice: first before the read
    /// is attempted, with no error, so `skip_dir` can avoid the read; then
    /// after the failed read, with the error. Entries returned alongside the
    /// error are walked after the second visit unless skipped.
    pub fn err(&self) -> Option<&WalkError> {
        self.cur.err.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.cur.phase
    }

    /// Do not walk the directory at `path`. No read is attempted if this is
    /// the directory's first visit. Skips nothing when on a file.
    pub fn skip_dir(&mut self) {
        trace!("skip dir {}", self.cur.path);
        self.descend = false;
        self.stack.truncate(self.cur.skip_dir);
    }

    /// Skip the current item (like `skip_dir`) and every remaining item in
    /// its parent directory.
    pub fn skip_parent(&mut self) {
        trace!("skip parent of {}", self.cur.path);
        self.descend = false;
        self.stack.truncate(self.cur.skip_parent);
    }
}
