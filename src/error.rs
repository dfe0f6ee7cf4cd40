//! Error handling for standing data operations.
//!
//! Per-file read failures are absorbed (logged, empty result) inside the
//! store; the only failure the store surfaces to callers is an unusable
//! data root, which is non-retryable without operator intervention.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StandingDataError {
    #[error("data root not available: {path}")]
    DataRootUnavailable { path: PathBuf },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StandingDataError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StandingDataError>;
