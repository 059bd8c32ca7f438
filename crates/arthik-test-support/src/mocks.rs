//! Fake translators for exercising the pipeline without a backend.

use std::collections::HashMap;
use std::sync::Mutex;

use arthik_i18n::LocaleCode;
use arthik_translate::{TranslateError, TranslateResult, Translator};
use async_trait::async_trait;

/// Scripted translator that records every request.
///
/// Stubbed `(text, locale)` pairs return their canned translation; anything
/// else echoes `[locale] text` so assertions stay readable.
#[derive(Default)]
pub struct MockTranslator {
    responses: HashMap<(String, LocaleCode), String>,
    calls: Mutex<Vec<(String, LocaleCode)>>,
}

impl MockTranslator {
    /// Empty mock with echo behaviour.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned translation for `(text, locale)`.
    #[must_use]
    pub fn stub(mut self, text: &str, locale: LocaleCode, translated: &str) -> Self {
        self.responses
            .insert((text.to_string(), locale), translated.to_string());
        self
    }

    /// Every `(text, locale)` pair received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned; mocks are test-only.
    #[must_use]
    pub fn calls(&self) -> Vec<(String, LocaleCode)> {
        self.calls.lock().expect("mock lock").clone()
    }

    /// Number of translate calls received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned; mocks are test-only.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("mock lock").len()
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, text: &str, target: LocaleCode) -> TranslateResult<String> {
        self.calls
            .lock()
            .expect("mock lock")
            .push((text.to_string(), target));
        Ok(self
            .responses
            .get(&(text.to_string(), target))
            .cloned()
            .unwrap_or_else(|| format!("[{}] {text}", target.code())))
    }
}

/// Translator that always fails with a backend error.
pub struct FailingTranslator;

#[async_trait]
impl Translator for FailingTranslator {
    async fn translate(&self, _text: &str, _target: LocaleCode) -> TranslateResult<String> {
        Err(TranslateError::Backend {
            status: 500,
            detail: "simulated backend outage".to_string(),
        })
    }
}
