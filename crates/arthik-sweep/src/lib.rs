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

//! Best-effort translation sweep for freeform rendered text.
//!
//! The sweep algorithm (scan, filter, dedupe, diff against cache, batch
//! translate, apply) is independent of any rendering technology; surfaces
//! plug in through the [`TextSurface`] trait. An HTML adapter covers
//! server-rendered pages.
//!
//! Layout: `surface.rs` (surface trait and region model), `filter.rs`
//! (candidate filtering), `key.rs` (derived keys for freeform text),
//! `cache.rs` (per-locale text caches), `sweep.rs` (the sweep driver),
//! `html.rs` (HTML surface adapter).

pub mod cache;
pub mod error;
pub mod filter;
pub mod html;
pub mod key;
pub mod surface;
pub mod sweep;

pub use cache::{FileSweepStore, SweepStore};
pub use error::{SweepError, SweepResult};
pub use filter::is_candidate;
pub use html::HtmlSurface;
pub use key::derived_key;
pub use surface::{RegionId, TextRegion, TextSurface};
pub use sweep::{BatchResult, SweepOutcome, SweepPlan, SweepTranslate, Sweeper, apply_translations};
