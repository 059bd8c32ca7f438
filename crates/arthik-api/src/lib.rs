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

//! HTTP surface for the Arthik translation pipeline.
//!
//! Layout: `state.rs` (shared request state), `http/` (router, handlers,
//! error payloads).

pub mod http;
pub mod state;

pub use http::router::{ApiContext, ApiServer};
