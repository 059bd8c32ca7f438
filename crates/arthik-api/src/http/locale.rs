//! Locale preference persistence and request-time locale resolution.
//!
//! The preference lives in a long-lived cookie so server-side routing can
//! redirect the bare root path without a client round trip. For a concrete
//! request the URL path prefix wins; the cookie and `Accept-Language` only
//! inform the root redirect.

use std::sync::Arc;

use arthik_i18n::{DEFAULT_LOCALE, LocaleCode};
use axum::{
    Json,
    extract::State,
    http::{
        HeaderMap,
        header::{ACCEPT_LANGUAGE, COOKIE, SET_COOKIE},
    },
    response::{AppendHeaders, IntoResponse, Redirect},
};
use serde::Deserialize;
use serde_json::json;

use crate::http::errors::ApiError;
use crate::state::ApiState;

/// Cookie recording the preferred locale.
pub(crate) const COOKIE_NAME: &str = "preferred-locale";
/// Cookie lifetime: one year.
const COOKIE_MAX_AGE_SECS: u64 = 31_536_000;

/// Body of a locale preference update.
#[derive(Debug, Deserialize)]
pub(crate) struct SetLocaleRequest {
    #[serde(default)]
    pub(crate) locale: String,
}

/// Record the preferred locale in a one-year `SameSite=Lax` cookie.
///
/// Idempotent: repeating the same locale re-issues an identical cookie.
pub(crate) async fn set_locale(
    State(_state): State<Arc<ApiState>>,
    Json(request): Json<SetLocaleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let locale = LocaleCode::from_tag(&request.locale)
        .ok_or_else(|| ApiError::unsupported_locale(&request.locale))?;
    let cookie = format!(
        "{COOKIE_NAME}={}; Path=/; Max-Age={COOKIE_MAX_AGE_SECS}; SameSite=Lax",
        locale.code()
    );
    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(json!({ "ok": true, "locale": locale.code() })),
    ))
}

/// Redirect the bare root to the preferred locale's page.
pub(crate) async fn root_redirect(
    State(_state): State<Arc<ApiState>>,
    headers: HeaderMap,
) -> Redirect {
    let locale = preferred_locale(&headers);
    Redirect::temporary(&format!("/{}", locale.code()))
}

/// Preferred locale for a request: cookie first, then `Accept-Language`,
/// then the default.
pub(crate) fn preferred_locale(headers: &HeaderMap) -> LocaleCode {
    cookie_locale(headers)
        .or_else(|| accept_language_locale(headers))
        .unwrap_or(DEFAULT_LOCALE)
}

/// Locale from the preference cookie, when present and supported.
fn cookie_locale(headers: &HeaderMap) -> Option<LocaleCode> {
    let raw = headers.get(COOKIE)?.to_str().ok()?;
    for pair in raw.split(';') {
        if let Some((name, value)) = pair.trim().split_once('=')
            && name.trim() == COOKIE_NAME
        {
            return LocaleCode::from_tag(value.trim());
        }
    }
    None
}

/// First supported locale named by the `Accept-Language` header.
fn accept_language_locale(headers: &HeaderMap) -> Option<LocaleCode> {
    let value = headers.get(ACCEPT_LANGUAGE)?.to_str().ok()?;
    for part in value.split(',') {
        let tag = part.split(';').next().unwrap_or(part).trim();
        if tag.is_empty() {
            continue;
        }
        if let Some(locale) = LocaleCode::from_tag(tag) {
            return Some(locale);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with(name: axum::http::HeaderName, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, HeaderValue::from_str(value).expect("header value"));
        headers
    }

    #[test]
    fn cookie_wins_over_accept_language() {
        let mut headers = headers_with(COOKIE, "theme=dark; preferred-locale=kn");
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("hi-IN,hi;q=0.9,en;q=0.8"),
        );
        assert_eq!(preferred_locale(&headers), LocaleCode::Kn);
    }

    #[test]
    fn accept_language_falls_back_through_weighted_tags() {
        let headers = headers_with(ACCEPT_LANGUAGE, "fr-FR,fr;q=0.9,hi;q=0.5");
        assert_eq!(preferred_locale(&headers), LocaleCode::Hi);
    }

    #[test]
    fn unsupported_cookie_values_fall_back_to_the_default() {
        let headers = headers_with(COOKIE, "preferred-locale=de");
        assert_eq!(preferred_locale(&headers), DEFAULT_LOCALE);
    }

    #[test]
    fn empty_headers_yield_the_default() {
        assert_eq!(preferred_locale(&HeaderMap::new()), DEFAULT_LOCALE);
    }
}
