#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Arthik application bootstrap wiring.
//!
//! Layout: `bootstrap.rs` (config load and service wiring), `logging.rs`
//! (tracing subscriber install), `error.rs` (application-level errors).

/// Application bootstrap and environment loading.
pub mod bootstrap;
/// Application-level error types.
pub mod error;
/// Logging subscriber installation.
pub mod logging;

pub use bootstrap::run_app;
pub use error::{AppError, AppResult};
