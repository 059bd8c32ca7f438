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

//! Locale model, message catalogs, and the translation-fallback core.
//!
//! Layout: `locale.rs` (supported locales and tag parsing), `catalog.rs`
//! (immutable per-locale message trees), `overlay.rs` (persisted generated
//! translations), `resolver.rs` (on-miss fallback resolution).

pub mod catalog;
pub mod error;
pub mod locale;
pub mod overlay;
pub mod resolver;

pub use catalog::MessageCatalog;
pub use error::{I18nError, I18nResult};
pub use locale::{DEFAULT_LOCALE, LocaleCode};
pub use overlay::OverlayStore;
pub use resolver::{FallbackResolver, TranslationDispatch};
