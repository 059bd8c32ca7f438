//! Typed configuration models shared across the Arthik services.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub http: HttpSettings,
    /// Catalog and asset locations.
    pub i18n: I18nSettings,
    /// Text-sweep tunables.
    pub sweep: SweepSettings,
    /// Completion-backend settings.
    pub translator: TranslatorSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Socket address the API listener binds to.
    pub bind_addr: SocketAddr,
}

/// Locations of the static catalogs and page assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nSettings {
    /// Directory holding one `<locale>.json` catalog per supported locale.
    pub messages_dir: PathBuf,
    /// Directory holding static page assets served by the app.
    pub assets_dir: PathBuf,
}

impl I18nSettings {
    /// Directory the generated translation overlays are persisted under.
    #[must_use]
    pub fn generated_dir(&self) -> PathBuf {
        self.messages_dir.join("generated")
    }

    /// Directory the sweep text caches are persisted under.
    #[must_use]
    pub fn sweep_cache_dir(&self) -> PathBuf {
        self.generated_dir().join("dom")
    }
}

/// Tunables for the freeform text sweep.
///
/// Both ceilings are deployment choices rather than contractual invariants;
/// the defaults match the values the shipped UI was measured against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SweepSettings {
    /// Maximum number of distinct novel texts translated per sweep.
    pub batch_limit: usize,
    /// Texts longer than this are not treated as atomic UI strings.
    pub max_text_len: usize,
}

/// Settings for the text-completion backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorSettings {
    /// Completion API base URL.
    pub endpoint: String,
    /// Completion model identifier.
    pub model: String,
    /// API keys rotated round-robin across requests.
    pub api_keys: Vec<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl TranslatorSettings {
    /// Bounded timeout applied to each completion request.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            // The default is a compile-time constant and always parses.
            bind_addr: match defaults::BIND_ADDR.parse() {
                Ok(addr) => addr,
                Err(_) => SocketAddr::from(([0, 0, 0, 0], 3000)),
            },
        }
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            messages_dir: Path::new(defaults::MESSAGES_DIR).to_path_buf(),
            assets_dir: Path::new(defaults::ASSETS_DIR).to_path_buf(),
        }
    }
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            batch_limit: defaults::SWEEP_BATCH_LIMIT,
            max_text_len: defaults::SWEEP_MAX_TEXT_LEN,
        }
    }
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            endpoint: defaults::TRANSLATE_ENDPOINT.to_string(),
            model: defaults::TRANSLATE_MODEL.to_string(),
            api_keys: Vec::new(),
            timeout_secs: defaults::TRANSLATE_TIMEOUT_SECS,
        }
    }
}
