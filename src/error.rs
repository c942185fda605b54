//! Error types for the fallible edges of the crate.
//!
//! The geometric core never fails: undersized splits and degenerate creation
//! drags are normal outcomes, not errors. Only configuration I/O can go wrong.

use thiserror::Error;

/// Errors that can occur while loading, saving or watching settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// File watcher could not be created or attached
    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),

    /// A value parsed but is out of range
    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
