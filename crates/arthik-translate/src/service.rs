//! Translate-then-persist service and the background dispatcher.

use std::sync::Arc;

use arthik_i18n::{LocaleCode, OverlayStore, TranslationDispatch};
use tracing::warn;

use crate::client::Translator;
use crate::error::TranslateResult;

/// Couples the completion backend to the generated-overlay store.
///
/// The write happens only after a successful translation, so a backend
/// failure can never leave a partial or garbage entry behind.
pub struct TranslationService {
    translator: Arc<dyn Translator>,
    overlay: Arc<OverlayStore>,
}

impl TranslationService {
    /// Wire a service over the shared translator and overlay store.
    #[must_use]
    pub fn new(translator: Arc<dyn Translator>, overlay: Arc<OverlayStore>) -> Self {
        Self {
            translator,
            overlay,
        }
    }

    /// Translate `text` into `target` and persist the result under `key`.
    ///
    /// The source locale is passed through untouched and never persisted.
    ///
    /// # Errors
    ///
    /// Propagates the backend failure; the overlay store is left unchanged.
    pub async fn translate_and_persist(
        &self,
        key: &str,
        text: &str,
        target: LocaleCode,
    ) -> TranslateResult<String> {
        if target.is_source() {
            return Ok(text.to_string());
        }
        let translated = self.translator.translate(text, target).await?;
        self.overlay.set(target, key, &translated);
        Ok(translated)
    }
}

/// Fire-and-forget adapter feeding resolver misses into the service.
///
/// Each dispatch spawns an independent task whose handle is discarded;
/// failures are logged inside the task and never reach the caller.
pub struct BackgroundDispatcher {
    service: Arc<TranslationService>,
}

impl BackgroundDispatcher {
    /// Wrap a service for background dispatch.
    #[must_use]
    pub const fn new(service: Arc<TranslationService>) -> Self {
        Self { service }
    }
}

impl TranslationDispatch for BackgroundDispatcher {
    fn dispatch(&self, key: &str, text: &str, locale: LocaleCode) {
        let service = Arc::clone(&self.service);
        let key = key.to_string();
        let text = text.to_string();
        tokio::spawn(async move {
            if let Err(err) = service.translate_and_persist(&key, &text, locale).await {
                warn!(error = %err, key = %key, locale = %locale,
                    "background translation failed");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::error::TranslateError;

    struct EchoTranslator {
        calls: AtomicUsize,
    }

    impl EchoTranslator {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Translator for EchoTranslator {
        async fn translate(&self, text: &str, target: LocaleCode) -> TranslateResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("{}:{text}", target.code()))
        }
    }

    struct FailingTranslator;

    #[async_trait]
    impl Translator for FailingTranslator {
        async fn translate(&self, _text: &str, _target: LocaleCode) -> TranslateResult<String> {
            Err(TranslateError::Backend {
                status: 500,
                detail: "model unavailable".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn success_persists_the_translation() {
        let dir = tempfile::tempdir().expect("tempdir");
        let overlay = Arc::new(OverlayStore::new(dir.path()));
        let service =
            TranslationService::new(Arc::new(EchoTranslator::new()), Arc::clone(&overlay));

        let out = service
            .translate_and_persist("ai.chatTitle", "AI Financial Assistant", LocaleCode::Hi)
            .await
            .expect("translation succeeds");
        assert_eq!(out, "hi:AI Financial Assistant");
        assert_eq!(
            overlay.lookup(LocaleCode::Hi, "ai.chatTitle").as_deref(),
            Some("hi:AI Financial Assistant")
        );
    }

    #[tokio::test]
    async fn backend_failure_leaves_the_store_unchanged() {
        let dir = tempfile::tempdir().expect("tempdir");
        let overlay = Arc::new(OverlayStore::new(dir.path()));
        let service = TranslationService::new(Arc::new(FailingTranslator), Arc::clone(&overlay));

        let before = overlay.snapshot(LocaleCode::Hi);
        let result = service
            .translate_and_persist("ai.chatTitle", "AI Financial Assistant", LocaleCode::Hi)
            .await;
        assert!(matches!(result, Err(TranslateError::Backend { .. })));
        assert_eq!(overlay.snapshot(LocaleCode::Hi), before);
        assert!(!dir.path().join("hi.json").exists());
    }

    #[tokio::test]
    async fn source_locale_bypasses_backend_and_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let overlay = Arc::new(OverlayStore::new(dir.path()));
        let translator = Arc::new(EchoTranslator::new());
        let service = TranslationService::new(Arc::clone(&translator) as Arc<dyn Translator>, Arc::clone(&overlay));

        let out = service
            .translate_and_persist("nav.home", "Home", LocaleCode::En)
            .await
            .expect("pass-through");
        assert_eq!(out, "Home");
        assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
        assert_eq!(overlay.snapshot(LocaleCode::En), serde_json::json!({}));
    }

    #[tokio::test]
    async fn dispatcher_translates_in_the_background() {
        let dir = tempfile::tempdir().expect("tempdir");
        let overlay = Arc::new(OverlayStore::new(dir.path()));
        let service = Arc::new(TranslationService::new(
            Arc::new(EchoTranslator::new()),
            Arc::clone(&overlay),
        ));
        let dispatcher = BackgroundDispatcher::new(service);

        dispatcher.dispatch("nav.home", "Home", LocaleCode::Kn);

        let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
        loop {
            if overlay.lookup(LocaleCode::Kn, "nav.home").is_some() {
                break;
            }
            assert!(tokio::time::Instant::now() < deadline, "translation never landed");
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert_eq!(
            overlay.lookup(LocaleCode::Kn, "nav.home").as_deref(),
            Some("kn:Home")
        );
    }
}
