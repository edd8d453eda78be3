//! Error types for request-context classification.

use thiserror::Error;

/// Classification errors.
///
/// The classifier itself is total; the only failure mode is an override
/// requested with a tag outside the recognized set.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("'{0}' is not a valid context")]
    InvalidContext(String),
}

/// Logging setup errors.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log directive: {0}")]
    InvalidDirective(String),

    #[error("Invalid log format: {0} (must be 'json' or 'text')")]
    InvalidFormat(String),

    #[error("Invalid log output: {0} (must be 'stdout' or 'stderr')")]
    InvalidOutput(String),

    #[error("Failed to initialize logging: {0}")]
    Init(String),
}
