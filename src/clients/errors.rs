use std::time::Duration;

use rspotify::ClientError;
use thiserror::Error;

/// Result alias used across the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Couldn't get Spotify access token: {0}")]
    TokenAcquisitionError(#[source] ClientError),

    #[error("Search failed: {0}")]
    SearchError(#[from] SearchFailure),

    #[error("No {0} found")]
    NoResultsError(&'static str),

    #[error("Invalid search request: {0}")]
    InvalidSearch(String),

    #[error("Failed to write report: {0}")]
    OutputError(#[from] std::io::Error),
}

/// Cause of a failed search request
#[derive(Error, Debug)]
pub enum SearchFailure {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl Error {
    /// Whether the entry point should give up instead of skipping to the next step
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::ConfigError(_) | Error::TokenAcquisitionError(_) | Error::OutputError(_)
        )
    }
}
