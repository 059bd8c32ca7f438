//! Localized page serving backed by the text sweep.
//!
//! Pages are served from the static asset directory; for non-source locales
//! the rendered HTML is swept before it goes out, so freeform copy that never
//! made it into the catalogs still gets translated. Sweep results land in the
//! shared caches, making later requests cheap.

use std::collections::HashMap;
use std::sync::Arc;

use arthik_i18n::LocaleCode;
use arthik_sweep::{
    HtmlSurface, SweepError, SweepResult, SweepTranslate, TextSurface, apply_translations,
};
use arthik_translate::TranslationService;
use async_trait::async_trait;
use axum::{
    extract::{Path, State},
    response::Html,
};
use tracing::debug;

use crate::http::errors::ApiError;
use crate::state::ApiState;

/// Feeds swept items through the translate-then-persist service.
pub(crate) struct ServiceSweepClient {
    service: Arc<TranslationService>,
}

impl ServiceSweepClient {
    pub(crate) const fn new(service: Arc<TranslationService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl SweepTranslate for ServiceSweepClient {
    async fn translate(
        &self,
        key: &str,
        text: &str,
        locale: LocaleCode,
    ) -> SweepResult<String> {
        self.service
            .translate_and_persist(key, text, locale)
            .await
            .map_err(|err| SweepError::Translate {
                key: key.to_string(),
                detail: err.to_string(),
            })
    }
}

/// Serve the app shell for a locale, swept for that locale on the way out.
///
/// The parsed document cannot be held across the translation awaits, so the
/// page is scanned once for planning and re-parsed for the rewrite pass.
pub(crate) async fn localized_page(
    State(state): State<Arc<ApiState>>,
    Path(locale): Path<String>,
) -> Result<Html<String>, ApiError> {
    let locale = LocaleCode::from_tag(&locale)
        .ok_or_else(|| ApiError::not_found("unsupported locale"))?;
    let path = state.assets_dir.join("index.html");
    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|err| ApiError::internal(format!("page asset unavailable: {err}")))?;

    if locale.is_source() {
        return Ok(Html(raw));
    }

    let mut cache = state.sweep_store.load(locale);
    let plan = {
        let surface = HtmlSurface::parse(&raw);
        state.sweeper.plan(&surface.scan(), &cache)
    };
    let client = ServiceSweepClient::new(Arc::clone(&state.service));
    let batch = state
        .sweeper
        .translate_batch(&plan.batch, &client, locale)
        .await;

    let mut translations: HashMap<String, String> = plan.cached.iter().cloned().collect();
    translations.extend(batch.translated.iter().cloned());
    let page = {
        let mut surface = HtmlSurface::parse(&raw);
        apply_translations(&mut surface, &translations);
        surface.html()
    };
    debug!(locale = %locale, translated = batch.translated.len(),
        cached = plan.cached.len(), deferred = plan.deferred, failed = batch.failed,
        "served swept page");
    if !batch.translated.is_empty() {
        cache.extend(batch.translated);
        state.sweep_store.save(locale, &cache);
    }
    Ok(Html(page))
}

#[cfg(test)]
mod tests {
    use arthik_test_support::mocks::{FailingTranslator, MockTranslator};
    use arthik_translate::Translator;

    use super::*;
    use crate::http::router::test_support::state_with_translator;

    #[tokio::test]
    async fn source_locale_pages_are_served_untouched() {
        let translator = Arc::new(MockTranslator::new());
        let (state, _dirs) = state_with_translator(Arc::clone(&translator) as Arc<dyn Translator>);

        let Html(page) = localized_page(State(state), Path("en".to_string()))
            .await
            .expect("page served");
        assert!(page.contains("Total Balance"));
        assert_eq!(translator.call_count(), 0);
    }

    #[tokio::test]
    async fn non_source_pages_are_swept_and_rewritten() {
        let translator = Arc::new(
            MockTranslator::new().stub("Total Balance", LocaleCode::Hi, "कुल शेष"),
        );
        let (state, _dirs) = state_with_translator(Arc::clone(&translator) as Arc<dyn Translator>);

        let Html(page) = localized_page(State(Arc::clone(&state)), Path("hi".to_string()))
            .await
            .expect("page served");
        assert!(page.contains("कुल शेष"));
        assert!(translator.call_count() > 0);

        // The currency amount on the fixture page must never be translated.
        assert!(
            !translator
                .calls()
                .iter()
                .any(|(text, _)| text.contains("₹"))
        );
    }

    #[tokio::test]
    async fn repeat_requests_serve_from_the_sweep_cache() {
        let translator = Arc::new(MockTranslator::new());
        let (state, _dirs) = state_with_translator(Arc::clone(&translator) as Arc<dyn Translator>);

        let _ = localized_page(State(Arc::clone(&state)), Path("hi".to_string()))
            .await
            .expect("first request");
        let first_calls = translator.call_count();
        assert!(first_calls > 0);

        let _ = localized_page(State(Arc::clone(&state)), Path("hi".to_string()))
            .await
            .expect("second request");
        assert_eq!(translator.call_count(), first_calls);
    }

    #[tokio::test]
    async fn backend_failures_fall_back_to_source_text() {
        let (state, _dirs) = state_with_translator(Arc::new(FailingTranslator));
        let Html(page) = localized_page(State(state), Path("hi".to_string()))
            .await
            .expect("page still served");
        assert!(page.contains("Total Balance"));
    }

    #[tokio::test]
    async fn unknown_locales_are_not_found() {
        let (state, _dirs) = state_with_translator(Arc::new(MockTranslator::new()));
        let error = localized_page(State(state), Path("fr".to_string()))
            .await
            .expect_err("unsupported locale");
        assert_eq!(error.status, axum::http::StatusCode::NOT_FOUND);
    }
}
