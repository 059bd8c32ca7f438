//! Shared state threaded through every API handler.

use std::path::PathBuf;
use std::sync::Arc;

use arthik_i18n::{FallbackResolver, MessageCatalog, OverlayStore};
use arthik_sweep::{SweepStore, Sweeper};
use arthik_translate::TranslationService;

/// Dependencies shared by the API handlers.
pub struct ApiState {
    /// Static message catalogs loaded at startup.
    pub(crate) catalog: Arc<MessageCatalog>,
    /// Generated-translation overlay store.
    pub(crate) overlay: Arc<OverlayStore>,
    /// Translate-then-persist service.
    pub(crate) service: Arc<TranslationService>,
    /// On-miss fallback resolver.
    pub(crate) resolver: Arc<FallbackResolver>,
    /// Sweep driver configured with the deployment's ceilings.
    pub(crate) sweeper: Sweeper,
    /// Per-locale sweep text cache.
    pub(crate) sweep_store: Arc<dyn SweepStore>,
    /// Directory holding static page assets.
    pub(crate) assets_dir: PathBuf,
}
