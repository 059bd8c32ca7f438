//! Error types for catalog and overlay persistence.
//!
//! # Design
//! - Constant messages; operation and path context captured in fields.
//! - These errors never cross the rendering boundary: callers log and degrade
//!   to the best available fallback.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for catalog and overlay file operations.
#[derive(Debug, Error)]
pub enum I18nError {
    /// Reading or writing a catalog document failed.
    #[error("catalog io failure")]
    Io {
        /// Operation that triggered the failure.
        operation: &'static str,
        /// Path involved in the failure.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Parsing or serializing a catalog document failed.
    #[error("catalog json failure")]
    Json {
        /// Operation that triggered the failure.
        operation: &'static str,
        /// Path involved in the failure.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Convenience alias for catalog results.
pub type I18nResult<T> = Result<T, I18nError>;
