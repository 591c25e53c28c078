//! Name and gitignore filtering for the streaming walker

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use log::warn;

use super::utils::glob_match;

/// Decides which visits are hidden (and, for directories, pruned).
#[derive(Debug, Default)]
pub struct FileFilter {
    patterns: Vec<String>,
    gitignore: Option<Gitignore>,
}

impl FileFilter {
    pub fn new(patterns: Vec<String>) -> Self {
        Self {
            patterns,
            gitignore: None,
        }
    }

    /// Load `.gitignore` from `base`. Without one, only `.git` is hidden.
    pub fn with_gitignore(mut self, base: &Path) -> Self {
        let mut builder = GitignoreBuilder::new(base);
        let file = base.join(".gitignore");
        if file.is_file() {
            if let Some(err) = builder.add(&file) {
                warn!("partially loaded {}: {}", file.display(), err);
            }
        }
        match builder.build() {
            Ok(gitignore) => self.gitignore = Some(gitignore),
            Err(err) => warn!("ignoring {}: {}", file.display(), err),
        }
        self
    }

    /// Check a visit. `rel_path` is relative to the walk root.
    pub fn is_ignored(&self, rel_path: &str, name: &str, is_dir: bool) -> bool {
        if self
            .patterns
            .iter()
            .any(|pattern| name == pattern || glob_match(pattern, name))
        {
            return true;
        }
        match &self.gitignore {
            Some(gitignore) => {
                name == ".git" || gitignore.matched(rel_path, is_dir).is_ignore()
            }
            None => false,
        }
    }
}
