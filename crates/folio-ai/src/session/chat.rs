//! A single provider conversation.

use std::sync::Arc;

use folio_common::SessionId;
use tokio::sync::Mutex;
use tracing::debug;

use crate::{AiClient, AiError, AiResponse, Message};

use super::types::SessionConfig;

/// Handle to one conversation. Clones share the same history.
///
/// Turns are serialized: a second `send_message` on the same session
/// waits until the first one has finished and recorded its turn.
#[derive(Clone)]
pub struct ChatSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    id: SessionId,
    client: Arc<dyn AiClient>,
    config: SessionConfig,
    history: Mutex<Vec<Message>>,
}

impl ChatSession {
    /// Start a conversation with empty history.
    pub fn start(client: Arc<dyn AiClient>, config: SessionConfig) -> Result<Self, AiError> {
        config.check()?;
        let id = SessionId::new();
        debug!(session = %id.short(), model = %config.model, "Chat session created");
        Ok(Self {
            inner: Arc::new(SessionInner {
                id,
                client,
                config,
                history: Mutex::new(Vec::new()),
            }),
        })
    }

    pub fn id(&self) -> &SessionId {
        &self.inner.id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.inner.config
    }

    /// Send one user turn. History only grows when the provider answers.
    pub async fn send_message(&self, text: &str) -> Result<AiResponse, AiError> {
        let mut history = self.inner.history.lock().await;

        let mut messages = history.clone();
        messages.push(Message::user(text));

        let response = self
            .inner
            .client
            .send_message(&self.inner.config, &messages)
            .await?;

        history.push(Message::user(text));
        history.push(Message::assistant(response.content.clone()));
        Ok(response)
    }

    /// Snapshot of the conversation so far.
    pub async fn history(&self) -> Vec<Message> {
        self.inner.history.lock().await.clone()
    }

    /// Whether both handles refer to the same conversation.
    pub fn same_as(&self, other: &ChatSession) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("id", &self.inner.id)
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}
