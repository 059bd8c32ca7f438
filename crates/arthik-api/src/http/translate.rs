//! Translation request endpoint.

use std::sync::Arc;

use arthik_i18n::LocaleCode;
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::http::errors::ApiError;
use crate::state::ApiState;

/// Body of a translation request.
#[derive(Debug, Deserialize)]
pub(crate) struct TranslateRequest {
    #[serde(default)]
    pub(crate) key: String,
    #[serde(default)]
    pub(crate) text: String,
    #[serde(default, rename = "targetLocale")]
    pub(crate) target_locale: String,
}

/// Successful translation response.
#[derive(Debug, Serialize)]
pub(crate) struct TranslateResponse {
    pub(crate) ok: bool,
    pub(crate) key: String,
    pub(crate) translated: String,
}

/// Translate `text` for `targetLocale` and persist it under `key`.
///
/// Missing parameters fail with 400 before the backend is ever consulted; a
/// backend failure yields 500 with the overlay store untouched.
pub(crate) async fn translate_fallback(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    if request.key.trim().is_empty() {
        return Err(ApiError::missing_parameter("key"));
    }
    if request.text.trim().is_empty() {
        return Err(ApiError::missing_parameter("text"));
    }
    if request.target_locale.trim().is_empty() {
        return Err(ApiError::missing_parameter("targetLocale"));
    }
    let locale = LocaleCode::from_tag(&request.target_locale)
        .ok_or_else(|| ApiError::unsupported_locale(&request.target_locale))?;

    match state
        .service
        .translate_and_persist(&request.key, &request.text, locale)
        .await
    {
        Ok(translated) => Ok(Json(TranslateResponse {
            ok: true,
            key: request.key,
            translated,
        })),
        Err(err) => {
            error!(error = %err, key = %request.key, locale = %locale,
                "translation request failed");
            Err(ApiError::backend("translation backend failed"))
        }
    }
}

#[cfg(test)]
mod tests {
    use arthik_i18n::OverlayStore;
    use arthik_test_support::mocks::{FailingTranslator, MockTranslator};
    use arthik_translate::Translator;
    use axum::http::StatusCode;

    use super::*;
    use crate::http::router::test_support::state_with_translator;

    fn request(key: &str, text: &str, locale: &str) -> TranslateRequest {
        TranslateRequest {
            key: key.to_string(),
            text: text.to_string(),
            target_locale: locale.to_string(),
        }
    }

    #[tokio::test]
    async fn translates_and_persists_under_the_nested_key() {
        let translator = MockTranslator::new().stub(
            "AI Financial Assistant",
            LocaleCode::Hi,
            "एआई वित्तीय सहायक",
        );
        let (state, _dirs) = state_with_translator(Arc::new(translator));

        let response = translate_fallback(
            State(Arc::clone(&state)),
            Json(request("ai.chatTitle", "AI Financial Assistant", "hi")),
        )
        .await
        .expect("translation succeeds");
        assert!(response.ok);
        assert_eq!(response.key, "ai.chatTitle");
        assert_eq!(response.translated, "एआई वित्तीय सहायक");

        assert_eq!(
            state.overlay.snapshot(LocaleCode::Hi),
            serde_json::json!({ "ai": { "chatTitle": "एआई वित्तीय सहायक" } })
        );
    }

    #[tokio::test]
    async fn missing_parameters_never_reach_the_backend() {
        let translator = Arc::new(MockTranslator::new());
        let (state, _dirs) = state_with_translator(Arc::clone(&translator) as Arc<dyn Translator>);

        for body in [
            request("", "Text", "hi"),
            request("nav.home", "", "hi"),
            request("nav.home", "Home", ""),
        ] {
            let error = translate_fallback(State(Arc::clone(&state)), Json(body))
                .await
                .expect_err("must fail");
            assert_eq!(error.status, StatusCode::BAD_REQUEST);
        }
        assert_eq!(translator.call_count(), 0);
    }

    #[tokio::test]
    async fn unsupported_locale_is_a_client_error() {
        let (state, _dirs) = state_with_translator(Arc::new(MockTranslator::new()));
        let error = translate_fallback(
            State(state),
            Json(request("nav.home", "Home", "fr")),
        )
        .await
        .expect_err("must fail");
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn backend_failure_leaves_the_cache_unchanged() {
        let (state, dirs) = state_with_translator(Arc::new(FailingTranslator));
        let before = state.overlay.snapshot(LocaleCode::Hi);

        let error = translate_fallback(
            State(Arc::clone(&state)),
            Json(request("ai.chatTitle", "AI Financial Assistant", "hi")),
        )
        .await
        .expect_err("backend failure surfaces");
        assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(state.overlay.snapshot(LocaleCode::Hi), before);

        // A cold store over the same directory must agree nothing was written.
        let reopened = OverlayStore::new(&dirs.generated_dir());
        assert_eq!(reopened.snapshot(LocaleCode::Hi), before);
    }
}
