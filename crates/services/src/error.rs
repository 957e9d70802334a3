//! Shared error types for the services crate.

use thiserror::Error;

use storage::sqlite::SqliteInitError;

/// Errors emitted by `InferenceClient` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InferenceError {
    #[error("inference is not configured")]
    Disabled,
    #[error("inference returned an empty response")]
    EmptyResponse,
    #[error("inference request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
