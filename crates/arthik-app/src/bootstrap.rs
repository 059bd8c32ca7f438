//! Application bootstrap: configuration, wiring, and the server host.

use std::sync::Arc;

use arthik_api::{ApiContext, ApiServer};
use arthik_config::AppConfig;
use arthik_i18n::{FallbackResolver, MessageCatalog, OverlayStore};
use arthik_sweep::{FileSweepStore, Sweeper};
use arthik_translate::{BackgroundDispatcher, CompletionClient, TranslationService, Translator};
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::logging::{self, LoggingConfig};

/// Dependencies required to bootstrap the Arthik application.
pub(crate) struct BootstrapDependencies {
    logging: LoggingConfig<'static>,
    config: AppConfig,
    translator: Arc<dyn Translator>,
}

impl BootstrapDependencies {
    /// Construct production dependencies from the environment for the binary
    /// entrypoint.
    pub(crate) fn from_env() -> AppResult<Self> {
        let config = AppConfig::from_env().map_err(|source| AppError::Config {
            operation: "config.from_env",
            source,
        })?;
        let client =
            CompletionClient::from_settings(&config.translator).map_err(|source| {
                AppError::Translator {
                    operation: "completion_client.build",
                    source,
                }
            })?;
        Ok(Self {
            logging: LoggingConfig::default(),
            config,
            translator: Arc::new(client),
        })
    }
}

/// Entry point for the Arthik application boot sequence.
///
/// # Errors
///
/// Returns an error if dependency construction or application startup fails.
pub async fn run_app() -> AppResult<()> {
    let dependencies = BootstrapDependencies::from_env()?;
    run_app_with(dependencies).await
}

/// Boot sequence that relies entirely on injected dependencies to simplify
/// testing.
pub(crate) async fn run_app_with(dependencies: BootstrapDependencies) -> AppResult<()> {
    logging::init_logging(&dependencies.logging).map_err(|source| AppError::Logging {
        operation: "logging.init",
        source,
    })?;

    let BootstrapDependencies {
        logging: _,
        config,
        translator,
    } = dependencies;

    info!(bind_addr = %config.http.bind_addr, "Arthik application bootstrap starting");
    if config.translator.api_keys.is_empty() {
        warn!("no completion api keys configured; translation requests will fail until one is set");
    }

    let context = build_context(&config, translator);
    let server = ApiServer::new(context);
    server
        .serve(config.http.bind_addr)
        .await
        .map_err(|source| AppError::ApiServer {
            operation: "api.serve",
            source,
        })
}

/// Wire the translation pipeline over the configured directories.
fn build_context(config: &AppConfig, translator: Arc<dyn Translator>) -> ApiContext {
    let catalog = Arc::new(MessageCatalog::load(&config.i18n.messages_dir));
    let overlay = Arc::new(OverlayStore::new(&config.i18n.generated_dir()));
    let service = Arc::new(TranslationService::new(translator, Arc::clone(&overlay)));
    let dispatch = Arc::new(BackgroundDispatcher::new(Arc::clone(&service)));
    let resolver = Arc::new(FallbackResolver::new(
        Arc::clone(&catalog),
        Arc::clone(&overlay),
        dispatch,
    ));
    let sweep_store = Arc::new(FileSweepStore::new(&config.i18n.sweep_cache_dir()));
    ApiContext {
        catalog,
        overlay,
        service,
        resolver,
        sweeper: Sweeper::new(config.sweep.batch_limit, config.sweep.max_text_len),
        sweep_store,
        assets_dir: config.i18n.assets_dir.clone(),
    }
}
