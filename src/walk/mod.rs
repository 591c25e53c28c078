//! Pull-based directory walking
//!
//! - `Walker`: the step-at-a-time walker with `skip_dir`/`skip_parent` pruning
//! - `StreamingWalker`: drives a `Walker` with depth limits and ignore rules,
//!   streaming visits to a `StreamingOutput`

mod config;
mod entry;
mod filter;
mod streaming;
mod utils;
mod walker;

pub use config::WalkerConfig;
pub use entry::Entry;
pub use filter::FileFilter;
pub use streaming::{StreamingOutput, StreamingWalker, VisitRecord, WalkSummary};
pub use utils::{depth_below, join_path};
pub use walker::{Phase, Walker};
