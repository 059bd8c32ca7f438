//! Range and format checks applied after loading.

use crate::error::{ConfigError, ConfigResult};
use crate::model::AppConfig;

/// Upper bound accepted for the completion request timeout, in seconds.
const MAX_TRANSLATE_TIMEOUT_SECS: u64 = 120;

/// Validate a loaded configuration.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] naming the first offending field.
pub fn validate(config: &AppConfig) -> ConfigResult<()> {
    if config.sweep.batch_limit == 0 {
        return Err(ConfigError::InvalidField {
            field: "sweep.batch_limit",
            reason: "must be at least 1",
            value: Some(config.sweep.batch_limit.to_string()),
        });
    }
    if config.sweep.max_text_len == 0 {
        return Err(ConfigError::InvalidField {
            field: "sweep.max_text_len",
            reason: "must be at least 1",
            value: Some(config.sweep.max_text_len.to_string()),
        });
    }
    if config.translator.timeout_secs == 0
        || config.translator.timeout_secs > MAX_TRANSLATE_TIMEOUT_SECS
    {
        return Err(ConfigError::InvalidField {
            field: "translator.timeout_secs",
            reason: "outside the supported range",
            value: Some(config.translator.timeout_secs.to_string()),
        });
    }
    if config.translator.endpoint.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            field: "translator.endpoint",
            reason: "must not be blank",
            value: None,
        });
    }
    if config.translator.model.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            field: "translator.model",
            reason: "must not be blank",
            value: None,
        });
    }
    Ok(())
}
