//! Error types for the oa-diff crate.
//!
//! The diff engine itself is total; these cover the layers around it.

use std::fmt;
use std::path::PathBuf;

/// Which input of a comparison an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// Diff-tool error types.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// An input could not be parsed as JSON, so it was never diffed.
    #[error("invalid JSON on {side} side: {source}")]
    InvalidJson {
        side: Side,
        #[source]
        source: serde_json::Error,
    },

    /// An input file exceeds the configured size cap.
    #[error("input too large: {path} is {size} bytes (limit {limit})")]
    InputTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    /// JSON serialization of a diff report failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error with context.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience result type for oa-diff operations.
pub type DiffResult<T> = Result<T, DiffError>;
