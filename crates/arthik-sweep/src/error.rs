//! Error types for the text sweep.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for sweep operations.
#[derive(Debug, Error)]
pub enum SweepError {
    /// Reading or writing a sweep cache document failed.
    #[error("sweep cache io failure")]
    Io {
        /// Operation that triggered the failure.
        operation: &'static str,
        /// Path involved in the failure.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Parsing or serializing a sweep cache document failed.
    #[error("sweep cache json failure")]
    Json {
        /// Operation that triggered the failure.
        operation: &'static str,
        /// Path involved in the failure.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// Translating a single swept item failed.
    #[error("sweep translation failure")]
    Translate {
        /// Derived key of the failed item.
        key: String,
        /// Failure detail from the translation backend.
        detail: String,
    },
}

/// Convenience alias for sweep results.
pub type SweepResult<T> = Result<T, SweepError>;
