//! # Design
//!
//! - Centralize application-level errors for bootstrap.
//! - Keep error messages constant while carrying context fields for debugging.
//! - Preserve source errors without re-logging at call sites.

use thiserror::Error;

/// Result alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("configuration operation failed")]
    Config {
        /// Operation identifier.
        operation: &'static str,
        /// Source configuration error.
        source: arthik_config::ConfigError,
    },
    /// Completion-backend client construction failed.
    #[error("translation client operation failed")]
    Translator {
        /// Operation identifier.
        operation: &'static str,
        /// Source translation error.
        source: arthik_translate::TranslateError,
    },
    /// Logging installation failed.
    #[error("logging installation failed")]
    Logging {
        /// Operation identifier.
        operation: &'static str,
        /// Source installation error.
        source: anyhow::Error,
    },
    /// API server operations failed.
    #[error("api server operation failed")]
    ApiServer {
        /// Operation identifier.
        operation: &'static str,
        /// Source API server error.
        source: anyhow::Error,
    },
}
