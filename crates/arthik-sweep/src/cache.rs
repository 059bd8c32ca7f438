//! Per-locale caches of swept text translations.
//!
//! Distinct from the generated overlay: entries are keyed by the raw source
//! text rather than a catalog key. Once a text is cached for a locale it is
//! never re-requested for that locale through the same store.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use arthik_i18n::LocaleCode;
use tracing::warn;

use crate::error::{SweepError, SweepResult};

/// Storage behind the sweep's per-locale text cache.
pub trait SweepStore: Send + Sync {
    /// Load the cached text map for a locale; empty when nothing is stored.
    fn load(&self, locale: LocaleCode) -> HashMap<String, String>;

    /// Persist the full text map for a locale.
    fn save(&self, locale: LocaleCode, entries: &HashMap<String, String>);
}

/// File-backed sweep store, one JSON document per locale.
#[derive(Debug)]
pub struct FileSweepStore {
    dir: PathBuf,
}

impl FileSweepStore {
    /// Create a store rooted at `dir`, creating the directory if needed.
    #[must_use]
    pub fn new(dir: &Path) -> Self {
        if let Err(err) = fs::create_dir_all(dir) {
            warn!(error = %err, dir = %dir.display(), "failed to create sweep cache directory");
        }
        Self {
            dir: dir.to_path_buf(),
        }
    }

    fn locale_path(&self, locale: LocaleCode) -> PathBuf {
        self.dir.join(format!("dom-trans-{}.json", locale.code()))
    }

    fn read(&self, locale: LocaleCode) -> SweepResult<HashMap<String, String>> {
        let path = self.locale_path(locale);
        let raw = fs::read_to_string(&path).map_err(|source| SweepError::Io {
            operation: "sweep_cache.load",
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| SweepError::Json {
            operation: "sweep_cache.load",
            path,
            source,
        })
    }
}

impl SweepStore for FileSweepStore {
    fn load(&self, locale: LocaleCode) -> HashMap<String, String> {
        match self.read(locale) {
            Ok(entries) => entries,
            Err(err) => {
                if self.locale_path(locale).exists() {
                    warn!(error = %err, locale = %locale, "failed to load sweep cache; starting empty");
                }
                HashMap::new()
            }
        }
    }

    fn save(&self, locale: LocaleCode, entries: &HashMap<String, String>) {
        let path = self.locale_path(locale);
        let serialized = match serde_json::to_string_pretty(entries) {
            Ok(serialized) => serialized,
            Err(err) => {
                warn!(error = %err, locale = %locale, "failed to serialize sweep cache");
                return;
            }
        };
        if let Err(err) = fs::write(&path, serialized) {
            warn!(error = %err, locale = %locale, path = %path.display(),
                "failed to persist sweep cache");
        }
    }
}
