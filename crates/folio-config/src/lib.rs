//! Folio configuration system.
//!
//! TOML-based configuration for the portfolio assistant. Every section
//! uses serde defaults, so a partial (or absent) config file works out
//! of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use folio_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("model: {}", config.assistant.model);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{AssistantConfig, ContentConfig, FolioConfig, LoggingConfig};

use std::path::Path;

use folio_common::ConfigError;

/// Load config from `path`, or from the platform default location.
///
/// The default location gets a commented template written on first run.
/// The result is validated; an invalid config is an error here.
pub fn load_config(path: Option<&Path>) -> Result<FolioConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            toml_loader::load_from_path(path)?
        }
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &FolioConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
