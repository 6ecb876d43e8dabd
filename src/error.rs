//! Error types for inspection runs.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    /// No creature name was given.
    #[error("Usage: monster-stats <monster name>")]
    Usage,

    #[error("{0}")]
    Resolution(String),

    #[error("{0}")]
    Instantiation(String),

    #[error("{0}")]
    Render(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StatsError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            StatsError::Usage => 0,
            _ => 1,
        }
    }
}

/// Result type for inspection operations
pub type StatsResult<T> = std::result::Result<T, StatsError>;
