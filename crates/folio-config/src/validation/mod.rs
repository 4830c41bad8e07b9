//! Configuration validation.
//!
//! Checks numeric ranges and required strings, collecting every problem
//! into a single `ConfigError`.

mod helpers;


use crate::schema::FolioConfig;
use folio_common::ConfigError;

use helpers::{validate_not_blank, validate_range, validate_range_f64};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FolioConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_assistant(&mut errors, config);
    validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_assistant(errors: &mut Vec<String>, config: &FolioConfig) {
    let a = &config.assistant;
    validate_not_blank(errors, "assistant.model", &a.model);
    validate_not_blank(errors, "assistant.api_key_env", &a.api_key_env);
    validate_not_blank(errors, "assistant.base_url", &a.base_url);
    validate_range_f64(errors, "assistant.temperature", a.temperature, 0.0, 2.0);
    validate_range(errors, "assistant.max_output_tokens", a.max_output_tokens as u64, 1, 8192);
    validate_range(errors, "assistant.timeout_secs", a.timeout_secs, 1, 300);
}

fn validate_logging(errors: &mut Vec<String>, config: &FolioConfig) {
    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} must be one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }
}
