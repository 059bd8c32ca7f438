//! On-miss fallback resolution for structured message lookups.

use std::sync::Arc;

use crate::catalog::MessageCatalog;
use crate::locale::{DEFAULT_LOCALE, LocaleCode};
use crate::overlay::OverlayStore;

/// Receives catalog misses that should be translated in the background.
///
/// Implementations must not block: they queue the work (typically by spawning
/// a task), catch every failure internally, and log rather than propagate.
/// The resolver has already returned a usable value by the time the
/// dispatched work runs, so nothing downstream depends on its outcome.
pub trait TranslationDispatch: Send + Sync {
    /// Queue translation of `text` under `key` for `locale`.
    fn dispatch(&self, key: &str, text: &str, locale: LocaleCode);
}

/// Resolves message-catalog misses without ever blocking the render.
///
/// Precedence: generated overlay value, then the source-locale text for the
/// key, then the literal key as a last resort.
pub struct FallbackResolver {
    catalog: Arc<MessageCatalog>,
    overlay: Arc<OverlayStore>,
    dispatch: Arc<dyn TranslationDispatch>,
}

impl FallbackResolver {
    /// Wire a resolver over the shared catalog, overlay, and dispatcher.
    #[must_use]
    pub fn new(
        catalog: Arc<MessageCatalog>,
        overlay: Arc<OverlayStore>,
        dispatch: Arc<dyn TranslationDispatch>,
    ) -> Self {
        Self {
            catalog,
            overlay,
            dispatch,
        }
    }

    /// Resolve a missed lookup for `locale`, returning the best available
    /// value immediately.
    ///
    /// For any non-source locale with a genuine source-language text (not
    /// just the key echoed back), translation of that text is dispatched in
    /// the background; redundant dispatches for the same key are tolerated
    /// because the overlay write is idempotent.
    #[must_use]
    pub fn resolve(&self, locale: LocaleCode, namespace: Option<&str>, key: &str) -> String {
        let full_key =
            namespace.map_or_else(|| key.to_string(), |namespace| format!("{namespace}.{key}"));

        if locale.is_source() {
            return self
                .catalog
                .resolve(DEFAULT_LOCALE, &full_key)
                .unwrap_or(full_key);
        }

        if let Some(generated) = self.overlay.lookup(locale, &full_key) {
            return generated;
        }

        let source = self.catalog.resolve(DEFAULT_LOCALE, &full_key);
        if let Some(text) = &source {
            self.dispatch.dispatch(&full_key, text, locale);
        }
        source.unwrap_or(full_key)
    }
}
