//! Default values applied when the environment leaves a setting unset.
//!
//! # Design
//! - Centralize fallback values so the loader and documentation stay consistent.
//! - Sweep tunables default to the values the shipped UI was measured against.

/// Default HTTP bind address.
pub const BIND_ADDR: &str = "0.0.0.0:3000";
/// Default directory holding the static per-locale message catalogs.
pub const MESSAGES_DIR: &str = "public/messages";
/// Default directory holding static page assets served by the app.
pub const ASSETS_DIR: &str = "public";
/// Default ceiling on distinct texts translated per sweep.
pub const SWEEP_BATCH_LIMIT: usize = 60;
/// Default length ceiling above which a text is not considered an atomic UI string.
pub const SWEEP_MAX_TEXT_LEN: usize = 300;
/// Default timeout applied to completion-backend requests, in seconds.
pub const TRANSLATE_TIMEOUT_SECS: u64 = 15;
/// Default completion API base URL.
pub const TRANSLATE_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
/// Default completion model identifier.
pub const TRANSLATE_MODEL: &str = "gemini-2.5-flash";
