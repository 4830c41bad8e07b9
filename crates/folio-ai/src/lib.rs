//! Chat assistant engine for Folio.
//!
//! Provides:
//! - the `AiClient` provider seam and a Gemini implementation
//! - a session manager owning at most one provider conversation
//! - a dispatcher that turns one visitor question into one displayable
//!   reply, with a timeout and failure recovery
//! - UI-agnostic chat panel state (transcript, suggestions, loading flag)

pub mod credential;
pub mod dispatch;
pub mod gemini;
pub mod panel;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

pub use credential::Credential;
pub use dispatch::{DispatchOptions, Dispatcher, FailureKind};
pub use gemini::{GeminiClient, GeminiConfig};
pub use panel::{ChatMessage, ChatPanel, SUGGESTED_QUESTIONS};
pub use session::{ChatSession, SessionConfig, SessionManager, SessionState};

/// A chat-completion provider.
///
/// Implementations are stateless with respect to the conversation: the
/// caller passes the session settings and the full role-tagged history
/// on every call.
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send_message(
        &self,
        config: &SessionConfig,
        messages: &[Message],
    ) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

/// Errors crossing the provider seam.
///
/// The display strings matter: the dispatcher classifies failures by
/// the lower-cased message text.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited (HTTP 429)")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Request timeout")]
    Timeout,
    /// The session could not be constructed. The only error the
    /// dispatcher lets through to its caller.
    #[error("Provider initialization failed: {0}")]
    Initialization(String),
}
