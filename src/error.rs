//! Lingo Error Types
//!
//! One error enum for the whole crate. The three user-visible kinds
//! (invalid command, content resolution, remote service) map to distinct
//! process exit codes.

use thiserror::Error;

/// Central error type for Lingo
#[derive(Error, Debug)]
pub enum LingoError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Content resolution error: {0}")]
    Resolution(String),

    #[error("Remote service error: {0}")]
    Remote(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Lingo operations
pub type LingoResult<T> = Result<T, LingoError>;

impl LingoError {
    /// Process exit code for this error kind
    pub fn exit_code(&self) -> i32 {
        match self {
            LingoError::InvalidCommand(_) => 2,
            LingoError::Resolution(_) => 3,
            LingoError::Remote(_) => 4,
            _ => 1,
        }
    }
}

/// Transport failures talking to a remote service
impl From<reqwest::Error> for LingoError {
    fn from(err: reqwest::Error) -> Self {
        LingoError::Remote(err.to_string())
    }
}
