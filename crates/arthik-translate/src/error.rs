//! Error types for completion-backend calls.
//!
//! # Design
//! - Constant messages; backend status and payload context captured in fields.
//! - Callers treat every variant as "keep showing source text", never as a
//!   user-visible failure.

use thiserror::Error;

/// Primary error type for translation operations.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// No completion API key is configured.
    #[error("no completion api keys configured")]
    NoApiKeys,
    /// The HTTP request to the completion backend failed.
    #[error("completion request failed")]
    Http {
        /// Operation that triggered the failure.
        operation: &'static str,
        /// Underlying transport error.
        source: reqwest::Error,
    },
    /// The completion backend answered with a non-success status.
    #[error("completion backend rejected the request")]
    Backend {
        /// HTTP status returned by the backend.
        status: u16,
        /// Response payload excerpt for diagnostics.
        detail: String,
    },
    /// The completion response carried no usable candidate text.
    #[error("completion response missing translated text")]
    MissingCompletion,
    /// The completion text was empty after trimming.
    #[error("completion returned empty text")]
    EmptyCompletion,
}

/// Convenience alias for translation results.
pub type TranslateResult<T> = Result<T, TranslateError>;
