//! The sweep driver: scan, filter, dedupe, diff, batch-translate, apply.

use std::collections::{HashMap, HashSet};

use arthik_i18n::LocaleCode;
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::cache::SweepStore;
use crate::error::SweepResult;
use crate::filter::is_candidate;
use crate::key::derived_key;
use crate::surface::{TextRegion, TextSurface};

/// Translation callback used for swept items.
#[async_trait]
pub trait SweepTranslate: Send + Sync {
    /// Translate `text` into `locale`, filing it under the derived `key`.
    async fn translate(&self, key: &str, text: &str, locale: LocaleCode)
    -> SweepResult<String>;
}

/// Counters describing what a sweep did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepOutcome {
    /// Distinct texts rewritten straight from the cache.
    pub applied_from_cache: usize,
    /// Distinct texts translated through the backend this sweep.
    pub translated: usize,
    /// Distinct novel texts left untranslated by the batch ceiling.
    pub deferred: usize,
    /// Distinct texts whose translation failed and was skipped.
    pub failed: usize,
}

/// Partition of a scan against the per-locale text cache.
///
/// The plan holds only owned strings, so a caller whose surface cannot cross
/// an await point (a parsed HTML document, say) can drop the surface after
/// planning, translate the batch, and re-parse for the rewrite pass.
#[derive(Debug, Default, Clone)]
pub struct SweepPlan {
    /// Distinct cached texts paired with their stored translations.
    pub cached: Vec<(String, String)>,
    /// Distinct novel texts inside the batch ceiling, in document order.
    pub batch: Vec<String>,
    /// Distinct novel texts beyond the ceiling, waiting for a future sweep.
    pub deferred: usize,
}

/// Batch translation results: resolved pairs plus the skipped-failure count.
#[derive(Debug, Default)]
pub struct BatchResult {
    /// `(source text, translated text)` pairs in completion order.
    pub translated: Vec<(String, String)>,
    /// Items whose translation failed and was skipped.
    pub failed: usize,
}

/// Drives one best-effort translation pass over a surface.
///
/// Each run moves through scanning, cache diffing, capped sequential batch
/// translation, and application; texts beyond the batch ceiling simply wait
/// for a future sweep.
#[derive(Debug, Clone, Copy)]
pub struct Sweeper {
    batch_limit: usize,
    max_text_len: usize,
}

impl Sweeper {
    /// Build a sweeper with the given batch and text-length ceilings.
    #[must_use]
    pub const fn new(batch_limit: usize, max_text_len: usize) -> Self {
        Self {
            batch_limit,
            max_text_len,
        }
    }

    /// Partition scanned regions into cached hits and a capped novel batch.
    ///
    /// Identical texts are deduplicated into one logical item each,
    /// preserving document order; trivial texts are dropped by the candidate
    /// filter.
    #[must_use]
    pub fn plan(&self, regions: &[TextRegion], cache: &HashMap<String, String>) -> SweepPlan {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut cached = Vec::new();
        let mut novel: Vec<String> = Vec::new();
        for region in regions {
            if !is_candidate(&region.text, self.max_text_len) {
                continue;
            }
            let text = region.text.trim();
            if !seen.insert(text) {
                continue;
            }
            if let Some(translated) = cache.get(text) {
                cached.push((text.to_string(), translated.clone()));
            } else {
                novel.push(text.to_string());
            }
        }
        let batch_len = novel.len().min(self.batch_limit);
        let deferred = novel.len() - batch_len;
        novel.truncate(batch_len);
        SweepPlan {
            cached,
            batch: novel,
            deferred,
        }
    }

    /// Translate a planned batch sequentially, one request per distinct text.
    ///
    /// A failed item is logged and skipped without aborting the rest of the
    /// batch.
    pub async fn translate_batch(
        &self,
        batch: &[String],
        translate: &dyn SweepTranslate,
        locale: LocaleCode,
    ) -> BatchResult {
        let mut result = BatchResult::default();
        for text in batch {
            let key = derived_key(text);
            match translate.translate(&key, text, locale).await {
                Ok(translated) => result.translated.push((text.clone(), translated)),
                Err(err) => {
                    warn!(error = %err, key = %key, locale = %locale,
                        "sweep item failed; leaving source text");
                    result.failed += 1;
                }
            }
        }
        result
    }

    /// Sweep `surface` for `locale` in one call.
    ///
    /// A run for the source locale is a no-op. The cache is persisted once
    /// after the batch completes, and only when the batch produced something.
    pub async fn run(
        &self,
        surface: &mut dyn TextSurface,
        translate: &dyn SweepTranslate,
        store: &dyn SweepStore,
        locale: LocaleCode,
    ) -> SweepOutcome {
        let mut outcome = SweepOutcome::default();
        if locale.is_source() {
            return outcome;
        }

        let mut cache = store.load(locale);
        let plan = self.plan(&surface.scan(), &cache);
        outcome.applied_from_cache = plan.cached.len();
        outcome.deferred = plan.deferred;

        let batch = self.translate_batch(&plan.batch, translate, locale).await;
        outcome.translated = batch.translated.len();
        outcome.failed = batch.failed;

        let mut translations: HashMap<String, String> = plan.cached.into_iter().collect();
        translations.extend(batch.translated.iter().cloned());
        apply_translations(surface, &translations);

        if !batch.translated.is_empty() {
            cache.extend(batch.translated);
            store.save(locale, &cache);
        }
        debug!(locale = %locale, translated = outcome.translated,
            cached = outcome.applied_from_cache, deferred = outcome.deferred,
            failed = outcome.failed, "sweep finished");
        outcome
    }
}

/// Rewrite every region whose trimmed text has an entry in `translations`,
/// returning the number of regions rewritten.
pub fn apply_translations(
    surface: &mut dyn TextSurface,
    translations: &HashMap<String, String>,
) -> usize {
    let mut applied = 0;
    for region in surface.scan() {
        if let Some(translated) = translations.get(region.text.trim()) {
            surface.apply(region.id, translated);
            applied += 1;
        }
    }
    applied
}
