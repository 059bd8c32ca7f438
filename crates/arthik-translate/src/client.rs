//! HTTP client for the text-completion backend.
//!
//! # Design
//! - The backend is an opaque `translate(text, locale) -> text` collaborator;
//!   every failure is caught by callers and degrades to source text.
//! - Requests carry a bounded timeout so a slow backend cannot hang a request.
//! - API keys rotate round-robin across requests to spread quota usage.

use std::sync::atomic::{AtomicUsize, Ordering};

use arthik_config::TranslatorSettings;
use arthik_i18n::LocaleCode;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TranslateError, TranslateResult};

/// Text-completion backend treated as an opaque translation function.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `target`, returning the bare translated text.
    async fn translate(&self, text: &str, target: LocaleCode) -> TranslateResult<String>;
}

/// Completion-API client implementing [`Translator`].
pub struct CompletionClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_keys: Vec<String>,
    cursor: AtomicUsize,
}

impl CompletionClient {
    /// Build a client from the translator settings.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::Http`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn from_settings(settings: &TranslatorSettings) -> TranslateResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.request_timeout())
            .build()
            .map_err(|source| TranslateError::Http {
                operation: "client.build",
                source,
            })?;
        Ok(Self {
            http,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_keys: settings.api_keys.clone(),
            cursor: AtomicUsize::new(0),
        })
    }

    /// Next API key in round-robin order.
    fn next_key(&self) -> TranslateResult<&str> {
        if self.api_keys.is_empty() {
            return Err(TranslateError::NoApiKeys);
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.api_keys.len();
        Ok(&self.api_keys[index])
    }
}

#[async_trait]
impl Translator for CompletionClient {
    async fn translate(&self, text: &str, target: LocaleCode) -> TranslateResult<String> {
        if target.is_source() || text.is_empty() {
            return Ok(text.to_string());
        }
        let key = self.next_key()?;
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint, self.model, key
        );
        let prompt = translation_prompt(text, target);
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: &prompt }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|source| TranslateError::Http {
                operation: "completion.send",
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(TranslateError::Backend {
                status: status.as_u16(),
                detail: excerpt(&detail),
            });
        }

        let payload: GenerateResponse =
            response
                .json()
                .await
                .map_err(|source| TranslateError::Http {
                    operation: "completion.decode",
                    source,
                })?;
        let translated = payload
            .first_text()
            .ok_or(TranslateError::MissingCompletion)?
            .trim()
            .to_string();
        if translated.is_empty() {
            return Err(TranslateError::EmptyCompletion);
        }
        debug!(locale = %target, source_len = text.len(), translated_len = translated.len(),
            "completion backend returned a translation");
        Ok(translated)
    }
}

/// Prompt sent to the completion backend for a single UI string.
fn translation_prompt(text: &str, target: LocaleCode) -> String {
    format!(
        "Translate the following English text to {}. Return ONLY the translated text \
         without quotes, explanations, or extra commentary. Keep the meaning accurate \
         and natural.\n\nText: {text}",
        target.language_name()
    )
}

/// Bounded excerpt of a backend payload for error context.
fn excerpt(detail: &str) -> String {
    const MAX: usize = 200;
    if detail.len() <= MAX {
        detail.to_string()
    } else {
        let mut end = MAX;
        while !detail.is_char_boundary(end) {
            end -= 1;
        }
        detail[..end].to_string()
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// First non-empty candidate text, if any.
    fn first_text(&self) -> Option<&str> {
        self.candidates
            .iter()
            .filter_map(|candidate| candidate.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .filter_map(|part| part.text.as_deref())
            .find(|text| !text.trim().is_empty())
    }
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
