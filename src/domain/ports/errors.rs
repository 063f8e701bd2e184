use std::path::PathBuf;

use thiserror::Error;

/// Failures fetching shift or event lists from a collaborator.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server responded {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),
}

impl SourceError {
    /// Whether retrying the same request may succeed.
    ///
    /// Connection failures, timeouts, 408, 429 and 5xx are transient;
    /// everything else is permanent.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(err) => err.is_timeout() || err.is_connect() || err.is_request(),
            Self::Status { status, .. } => {
                matches!(status, 408 | 429) || (500..=599).contains(status)
            }
            Self::Decode(_) | Self::Io { .. } | Self::InvalidUrl(_) => false,
        }
    }
}

pub type SourceResult<T> = Result<T, SourceError>;
