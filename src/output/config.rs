//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Print the "N directories, M files" line after the walk
    pub show_summary: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            show_summary: true,
        }
    }
}
