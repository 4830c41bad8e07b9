//! Provider credential handling.

use std::fmt;

/// Value shipped in sample `.env` files; treated the same as no key.
pub const PLACEHOLDER_API_KEY: &str = "PLACEHOLDER_API_KEY";

/// The provider API key, if one is usable.
#[derive(Clone, Default)]
pub struct Credential {
    key: Option<String>,
}

impl Credential {
    /// Wrap a raw value. Empty and placeholder values count as missing.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == PLACEHOLDER_API_KEY {
            return Self::missing();
        }
        Self {
            key: Some(trimmed.to_string()),
        }
    }

    pub fn missing() -> Self {
        Self { key: None }
    }

    /// Read the key from the environment variable `var`.
    pub fn from_env(var: &str) -> Self {
        match std::env::var(var) {
            Ok(value) => Self::new(value),
            Err(_) => Self::missing(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.key.is_some()
    }

    pub fn expose(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = if self.is_configured() {
            "[REDACTED]"
        } else {
            "<missing>"
        };
        f.debug_struct("Credential").field("key", &shown).finish()
    }
}
