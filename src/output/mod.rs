//! Visit formatting and display
//!
//! - `config` - Output configuration types
//! - `streaming` - Path-per-line console output, optionally coloured
//! - `json` - JSON lines output

mod config;
mod json;
mod streaming;

pub use config::OutputConfig;
pub use json::JsonFormatter;
pub use streaming::StreamingFormatter;
