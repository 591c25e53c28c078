//! Configuration types for the streaming walker

/// Configuration for streaming walks.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Do not descend below this many levels under the root
    pub max_depth: Option<usize>,
    pub dirs_only: bool,
    /// Glob patterns matched against entry names; matching directories are
    /// not descended into
    pub ignore_patterns: Vec<String>,
    /// Skip the partial contents of directories whose listing failed
    pub prune_on_error: bool,
}
