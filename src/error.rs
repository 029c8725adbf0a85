//! Error types for the roster scanner

use thiserror::Error;

use crate::cli::types::TeamId;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, ScanError>;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request for team {id} failed: {source}")]
    Transport {
        id: TeamId,
        #[source]
        source: reqwest::Error,
    },

    #[error("status code is {status}, id {id}")]
    Status { id: TeamId, status: u16 },

    #[error("failed to decode team {id}: {source}")]
    Decode {
        id: TeamId,
        #[source]
        source: serde_json::Error,
    },

    #[error("ID upper bound not provided and {env_var} environment variable not set")]
    MissingMaxId { env_var: String },

    #[error("ID upper bound must be a positive integer, got {value:?}")]
    InvalidMaxId { value: String },

    #[error("worker count not provided and {env_var} environment variable not set")]
    MissingWorkers { env_var: String },

    #[error("worker count must be a positive integer, got {value:?}")]
    InvalidWorkers { value: String },

    #[error("team ID must be a non-negative integer, got {value:?}")]
    InvalidTeamId { value: String },

    #[error("watch-list is empty")]
    EmptyWatchList,

    #[error("invalid base URL: {url}")]
    InvalidBaseUrl { url: String },

    #[error("collation setup failed: {message}")]
    Collation { message: String },

    #[error("scan worker panicked: {message}")]
    WorkerPanicked { message: String },
}

impl ScanError {
    /// True for failures that only affect a single looked-up ID.
    ///
    /// These are logged and counted by the scan; everything else aborts the run.
    pub fn is_per_id(&self) -> bool {
        matches!(
            self,
            ScanError::Transport { .. } | ScanError::Status { .. } | ScanError::Decode { .. }
        )
    }

    /// True when the data source has no team under the requested ID.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ScanError::Status { status: 404, .. })
    }
}

impl From<tokio::task::JoinError> for ScanError {
    fn from(err: tokio::task::JoinError) -> Self {
        ScanError::WorkerPanicked {
            message: err.to_string(),
        }
    }
}
