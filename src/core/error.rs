//! Error types.
//!
//! Gameplay itself never fails: bad flips are no-ops. Errors only come from
//! the edges where raw input enters the engine (levels, configuration).

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while constructing engine inputs.
#[derive(Debug, Error)]
pub enum MemoryError {
    /// Levels start at 1.
    #[error("invalid level {0}: levels start at 1")]
    InvalidLevel(u32),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for `MemoryConfig`.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result alias for fallible engine operations.
pub type Result<T> = std::result::Result<T, MemoryError>;
