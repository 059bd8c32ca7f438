//! Environment loading for the application configuration.
//!
//! # Design
//! - Every setting has a default; the environment only overrides.
//! - Completion API keys follow the deployment convention of up to three
//!   numbered variables; blank values are dropped.

use std::path::PathBuf;

use crate::error::{ConfigError, ConfigResult};
use crate::model::AppConfig;
use crate::validate;

/// Environment variable naming the HTTP bind address.
pub const ENV_BIND_ADDR: &str = "ARTHIK_BIND_ADDR";
/// Environment variable naming the message catalog directory.
pub const ENV_MESSAGES_DIR: &str = "ARTHIK_MESSAGES_DIR";
/// Environment variable naming the static asset directory.
pub const ENV_ASSETS_DIR: &str = "ARTHIK_ASSETS_DIR";
/// Environment variable overriding the sweep batch ceiling.
pub const ENV_SWEEP_BATCH_LIMIT: &str = "ARTHIK_SWEEP_BATCH_LIMIT";
/// Environment variable overriding the sweep text length ceiling.
pub const ENV_SWEEP_MAX_TEXT_LEN: &str = "ARTHIK_SWEEP_MAX_TEXT_LEN";
/// Environment variable overriding the completion request timeout.
pub const ENV_TRANSLATE_TIMEOUT_SECS: &str = "ARTHIK_TRANSLATE_TIMEOUT_SECS";
/// Environment variable overriding the completion API base URL.
pub const ENV_TRANSLATE_ENDPOINT: &str = "ARTHIK_TRANSLATE_ENDPOINT";
/// Environment variable overriding the completion model identifier.
pub const ENV_TRANSLATE_MODEL: &str = "ARTHIK_TRANSLATE_MODEL";
/// Environment variables holding completion API keys, tried in order.
pub const ENV_API_KEYS: [&str; 3] = ["GEMINI_API_KEY", "GEMINI_API_KEY_2", "GEMINI_API_KEY_3"];

impl AppConfig {
    /// Load the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] when a variable is present but
    /// unparsable, or when a parsed value fails validation.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_BIND_ADDR) {
            config.http.bind_addr = raw.parse().map_err(|_| ConfigError::InvalidField {
                field: ENV_BIND_ADDR,
                reason: "not a socket address",
                value: Some(raw),
            })?;
        }
        if let Some(raw) = lookup(ENV_MESSAGES_DIR) {
            config.i18n.messages_dir = PathBuf::from(raw);
        }
        if let Some(raw) = lookup(ENV_ASSETS_DIR) {
            config.i18n.assets_dir = PathBuf::from(raw);
        }
        if let Some(raw) = lookup(ENV_SWEEP_BATCH_LIMIT) {
            config.sweep.batch_limit = parse_usize(ENV_SWEEP_BATCH_LIMIT, &raw)?;
        }
        if let Some(raw) = lookup(ENV_SWEEP_MAX_TEXT_LEN) {
            config.sweep.max_text_len = parse_usize(ENV_SWEEP_MAX_TEXT_LEN, &raw)?;
        }
        if let Some(raw) = lookup(ENV_TRANSLATE_TIMEOUT_SECS) {
            config.translator.timeout_secs =
                raw.parse().map_err(|_| ConfigError::InvalidField {
                    field: ENV_TRANSLATE_TIMEOUT_SECS,
                    reason: "not an unsigned integer",
                    value: Some(raw),
                })?;
        }
        if let Some(raw) = lookup(ENV_TRANSLATE_ENDPOINT) {
            config.translator.endpoint = raw;
        }
        if let Some(raw) = lookup(ENV_TRANSLATE_MODEL) {
            config.translator.model = raw;
        }
        config.translator.api_keys = ENV_API_KEYS
            .iter()
            .filter_map(|name| lookup(name))
            .filter(|key| !key.trim().is_empty())
            .collect();

        validate::validate(&config)?;
        Ok(config)
    }
}

fn parse_usize(field: &'static str, raw: &str) -> ConfigResult<usize> {
    raw.parse().map_err(|_| ConfigError::InvalidField {
        field,
        reason: "not an unsigned integer",
        value: Some(raw.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = AppConfig::from_lookup(|_| None).expect("default config is valid");
        assert_eq!(config.sweep.batch_limit, 60);
        assert_eq!(config.sweep.max_text_len, 300);
        assert!(config.translator.api_keys.is_empty());
    }

    #[test]
    fn overrides_parse_and_blank_keys_are_dropped() {
        let lookup = lookup_from(&[
            (ENV_BIND_ADDR, "127.0.0.1:8099"),
            (ENV_SWEEP_BATCH_LIMIT, "10"),
            ("GEMINI_API_KEY", "alpha"),
            ("GEMINI_API_KEY_2", "   "),
            ("GEMINI_API_KEY_3", "gamma"),
        ]);
        let config = AppConfig::from_lookup(lookup).expect("overrides are valid");
        assert_eq!(config.http.bind_addr.port(), 8099);
        assert_eq!(config.sweep.batch_limit, 10);
        assert_eq!(config.translator.api_keys, vec!["alpha", "gamma"]);
    }

    #[test]
    fn malformed_bind_addr_is_rejected() {
        let lookup = lookup_from(&[(ENV_BIND_ADDR, "not-an-addr")]);
        let err = AppConfig::from_lookup(lookup).expect_err("must reject");
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: ENV_BIND_ADDR,
                ..
            }
        ));
    }

    #[test]
    fn zero_batch_limit_fails_validation() {
        let lookup = lookup_from(&[(ENV_SWEEP_BATCH_LIMIT, "0")]);
        assert!(AppConfig::from_lookup(lookup).is_err());
    }
}
