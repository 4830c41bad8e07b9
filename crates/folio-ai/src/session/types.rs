//! Session settings and lifecycle state.

use std::fmt;

use crate::AiError;

/// Settings a session is created with. Fixed for the session's lifetime.
#[derive(Clone)]
pub struct SessionConfig {
    pub model: String,
    pub system_instruction: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("model", &self.model)
            .field(
                "system_instruction",
                &format_args!("<{} chars>", self.system_instruction.chars().count()),
            )
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .finish()
    }
}

impl SessionConfig {
    pub fn new(model: impl Into<String>, system_instruction: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_instruction: system_instruction.into(),
            temperature: 0.7,
            max_output_tokens: 500,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    /// Reject settings no provider would accept.
    pub(crate) fn check(&self) -> Result<(), AiError> {
        if self.model.trim().is_empty() {
            return Err(AiError::Initialization("model identifier is empty".into()));
        }
        if self.system_instruction.trim().is_empty() {
            return Err(AiError::Initialization("system instruction is empty".into()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AiError::Initialization(format!(
                "temperature {} is outside [0, 2]",
                self.temperature
            )));
        }
        if self.max_output_tokens == 0 {
            return Err(AiError::Initialization(
                "max output tokens must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No session; the next send creates one.
    Absent,
    Active,
}
