//! HTTP surface modules (router, handlers, error payloads).

/// Error payloads in the `{ ok: false, error }` wire shape.
pub mod errors;
/// Liveness endpoint.
pub mod health;
/// Locale preference cookie and locale resolution.
pub mod locale;
/// Effective-catalog and single-message endpoints.
pub mod messages;
/// Localized page serving backed by the text sweep.
pub mod pages;
/// Router construction and server host.
pub mod router;
/// Translation request endpoint.
pub mod translate;
