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

//! Machine-translation backend client and the translate-then-persist service.
//!
//! Layout: `client.rs` (completion-backend HTTP client), `service.rs`
//! (translation service and background dispatcher), `error.rs` (error types).

pub mod client;
pub mod error;
pub mod service;

pub use client::{CompletionClient, Translator};
pub use error::{TranslateError, TranslateResult};
pub use service::{BackgroundDispatcher, TranslationService};
