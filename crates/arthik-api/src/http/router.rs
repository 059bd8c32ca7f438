//! Router construction and server host for the API.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use arthik_i18n::{FallbackResolver, MessageCatalog, OverlayStore};
use arthik_sweep::{SweepStore, Sweeper};
use arthik_translate::TranslationService;
use axum::{
    Router,
    http::{Method, Request, header::CONTENT_TYPE},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::Span;

use crate::http::health::health;
use crate::http::locale::{root_redirect, set_locale};
use crate::http::messages::{effective_messages, resolve_message};
use crate::http::pages::localized_page;
use crate::http::translate::translate_fallback;
use crate::state::ApiState;

/// Pre-built dependencies the API server is wired over.
///
/// The caller owns construction (catalog load, overlay directory, backend
/// client) so tests can swap any piece; the server only threads them through
/// its handlers.
pub struct ApiContext {
    /// Static message catalogs loaded at startup.
    pub catalog: Arc<MessageCatalog>,
    /// Generated-translation overlay store.
    pub overlay: Arc<OverlayStore>,
    /// Translate-then-persist service.
    pub service: Arc<TranslationService>,
    /// On-miss fallback resolver.
    pub resolver: Arc<FallbackResolver>,
    /// Sweep driver configured with the deployment's ceilings.
    pub sweeper: Sweeper,
    /// Per-locale sweep text cache.
    pub sweep_store: Arc<dyn SweepStore>,
    /// Directory holding static page assets.
    pub assets_dir: PathBuf,
}

/// Axum router wrapper that hosts the Arthik API services.
pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    /// Construct the API server with shared dependencies wired through
    /// application state.
    #[must_use]
    pub fn new(context: ApiContext) -> Self {
        let state = Self::build_state(context);
        let cors_layer = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE]);
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "http.request",
                    method = %request.method(),
                    route = %request.uri().path(),
                    status_code = tracing::field::Empty,
                    latency_ms = tracing::field::Empty
                )
            })
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &Span| {
                    span.record("status_code", response.status().as_u16());
                    let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
                    span.record("latency_ms", latency_ms);
                },
            );
        let layered = ServiceBuilder::new().layer(trace_layer);

        let router = Self::build_router()
            .layer(cors_layer)
            .route_layer(layered)
            .with_state(state);

        Self { router }
    }

    pub(crate) fn build_state(context: ApiContext) -> Arc<ApiState> {
        Arc::new(ApiState {
            catalog: context.catalog,
            overlay: context.overlay,
            service: context.service,
            resolver: context.resolver,
            sweeper: context.sweeper,
            sweep_store: context.sweep_store,
            assets_dir: context.assets_dir,
        })
    }

    fn build_router() -> Router<Arc<ApiState>> {
        Self::api_routes().merge(Self::page_routes())
    }

    fn api_routes() -> Router<Arc<ApiState>> {
        Router::new()
            .route("/healthz", get(health))
            .route("/api/translate-fallback", post(translate_fallback))
            .route("/api/locale", post(set_locale))
            .route("/api/messages/{locale}", get(effective_messages))
            .route("/api/messages/{locale}/{key}", get(resolve_message))
    }

    fn page_routes() -> Router<Arc<ApiState>> {
        Router::new()
            .route("/", get(root_redirect))
            .route("/{locale}", get(localized_page))
    }

    /// Serve the API using the configured router on the supplied address.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server
    /// terminates unexpectedly.
    pub async fn serve(self, addr: SocketAddr) -> Result<()> {
        tracing::info!("Starting API on {}", addr);
        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router.into_make_service()).await?;
        Ok(())
    }

    /// Consume the server, exposing the underlying router for embedding or
    /// in-process exercising.
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }
}
