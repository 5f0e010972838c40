//! Error types raised by the sampling pipeline and the scenario store.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when a scenario cannot be resampled or configured.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    #[error("unrecognized difficulty level: {0}")]
    UnknownDifficulty(String),
    #[error("scenario needs at least {required} cards to pick a target set (got {found})")]
    NotEnoughCards { found: usize, required: usize },
    #[error("{field} must be between {min} and {max} (got {value})")]
    PropertyOutOfRange {
        field: &'static str,
        value: u8,
        min: u8,
        max: u8,
    },
}

/// Errors raised while reading or writing scenario documents.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scenario document {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure while running one template through the full pipeline.
#[derive(Debug, Error)]
pub enum PipelineError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Store(E),
    #[error(transparent)]
    Sample(#[from] SampleError),
}
