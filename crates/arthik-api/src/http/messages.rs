//! Effective-catalog and single-message endpoints.

use std::sync::Arc;

use arthik_i18n::catalog::resolve_path;
use arthik_i18n::{DEFAULT_LOCALE, LocaleCode};
use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use serde_json::Value;

use crate::state::ApiState;

/// Single resolved message.
#[derive(Debug, Serialize)]
pub(crate) struct MessageResponse {
    pub(crate) locale: &'static str,
    pub(crate) key: String,
    pub(crate) value: String,
}

/// Effective catalog for a locale: static tree overlaid with generated
/// translations, computed fresh per request. Unsupported locales fall back to
/// the default locale.
pub(crate) async fn effective_messages(
    State(state): State<Arc<ApiState>>,
    Path(locale): Path<String>,
) -> Json<Value> {
    let locale = LocaleCode::from_tag(&locale).unwrap_or(DEFAULT_LOCALE);
    let overlay = state.overlay.snapshot(locale);
    Json(state.catalog.effective(locale, &overlay))
}

/// One message resolved through the effective catalog, falling back through
/// the resolver on a miss (which also queues background translation).
pub(crate) async fn resolve_message(
    State(state): State<Arc<ApiState>>,
    Path((locale, key)): Path<(String, String)>,
) -> Json<MessageResponse> {
    let locale = LocaleCode::from_tag(&locale).unwrap_or(DEFAULT_LOCALE);
    let overlay = state.overlay.snapshot(locale);
    let effective = state.catalog.effective(locale, &overlay);
    let value = resolve_path(&effective, &key)
        .unwrap_or_else(|| state.resolver.resolve(locale, None, &key));
    Json(MessageResponse {
        locale: locale.code(),
        key,
        value,
    })
}

#[cfg(test)]
mod tests {
    use arthik_test_support::mocks::MockTranslator;

    use super::*;
    use crate::http::router::test_support::state_with_translator;

    #[tokio::test]
    async fn overlay_wins_over_the_static_catalog() {
        let (state, _dirs) = state_with_translator(Arc::new(MockTranslator::new()));
        state.overlay.set(LocaleCode::Hi, "nav.home", "मुखपृष्ठ");

        let Json(tree) = effective_messages(
            State(Arc::clone(&state)),
            Path("hi".to_string()),
        )
        .await;
        assert_eq!(
            resolve_path(&tree, "nav.home").as_deref(),
            Some("मुखपृष्ठ")
        );
    }

    #[tokio::test]
    async fn unsupported_locales_serve_the_default_catalog() {
        let (state, _dirs) = state_with_translator(Arc::new(MockTranslator::new()));
        let Json(tree) = effective_messages(State(state), Path("fr".to_string())).await;
        assert_eq!(resolve_path(&tree, "nav.home").as_deref(), Some("Home"));
    }

    #[tokio::test]
    async fn a_miss_returns_source_text_immediately() {
        let (state, _dirs) = state_with_translator(Arc::new(MockTranslator::new()));
        let Json(message) = resolve_message(
            State(state),
            Path(("kn".to_string(), "expenses.add".to_string())),
        )
        .await;
        assert_eq!(message.locale, "kn");
        assert_eq!(message.value, "Add Expense");
    }
}
