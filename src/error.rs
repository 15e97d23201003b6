//! Error types for the rozklad engine.
//!
//! Malformed schedule rows are never errors: the parser skips them and
//! records the reason in its report. Only contract-level failures (bad
//! links JSON from the fetching collaborator) surface here.

use thiserror::Error;

/// Errors that can occur in rozklad operations.
#[derive(Error, Debug)]
pub enum RozkladError {
    #[error("Failed to parse links JSON: {0}")]
    LinksJson(#[from] serde_json::Error),
}

/// Result type alias for rozklad operations.
pub type RozkladResult<T> = Result<T, RozkladError>;
