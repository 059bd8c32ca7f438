//! API error wrapper rendered as `{ ok: false, error }` payloads.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Structured API error carrying the response status and message.
#[derive(Debug)]
pub(crate) struct ApiError {
    pub(crate) status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// A required request parameter is missing or blank.
    pub(crate) fn missing_parameter(name: &str) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("missing parameter: {name}"),
        )
    }

    /// The requested locale is not in the supported set.
    pub(crate) fn unsupported_locale(value: &str) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("unsupported locale: {value}"),
        )
    }

    /// The requested resource does not exist.
    pub(crate) fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }

    /// The translation backend failed; callers keep showing source text.
    pub(crate) fn backend(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }

    /// Any other server-side failure.
    pub(crate) fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "ok": false, "error": self.message }));
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_is_a_client_error() {
        let error = ApiError::missing_parameter("targetLocale");
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn backend_failures_map_to_server_errors() {
        let error = ApiError::backend("translation backend failed");
        assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
