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

//! Environment-driven configuration for the Arthik services.
//!
//! Layout: `model.rs` (typed settings structs), `loader.rs` (environment
//! loading), `validate.rs` (range/format checks), `defaults.rs` (fallback
//! values).

pub mod defaults;
pub mod error;
pub mod loader;
pub mod model;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use model::{AppConfig, HttpSettings, I18nSettings, SweepSettings, TranslatorSettings};
