//! SessionManager: owns the single live conversation.

use std::sync::Arc;

use tracing::{debug, info};

use crate::{AiClient, AiError};

use super::chat::ChatSession;
use super::types::{SessionConfig, SessionState};

/// Lazily creates and holds at most one `ChatSession`.
pub struct SessionManager {
    client: Arc<dyn AiClient>,
    config: SessionConfig,
    current: Option<ChatSession>,
}

impl SessionManager {
    pub fn new(client: Arc<dyn AiClient>, config: SessionConfig) -> Self {
        Self {
            client,
            config,
            current: None,
        }
    }

    /// Return the live session, creating one first if there is none.
    ///
    /// Fails with `AiError::Initialization` when the provider session
    /// cannot be constructed; the manager then stays `Absent`.
    pub fn get_or_create_session(&mut self) -> Result<ChatSession, AiError> {
        if let Some(session) = &self.current {
            return Ok(session.clone());
        }

        debug!("Creating new chat session");
        let session = ChatSession::start(Arc::clone(&self.client), self.config.clone())?;
        info!(session = %session.id().short(), "Chat session ready");
        self.current = Some(session.clone());
        Ok(session)
    }

    /// Drop the live session, if any. The next send starts a fresh one.
    pub fn reset(&mut self) {
        if let Some(session) = self.current.take() {
            info!(session = %session.id().short(), "Resetting chat session");
        }
    }

    pub fn state(&self) -> SessionState {
        match self.current {
            Some(_) => SessionState::Active,
            None => SessionState::Absent,
        }
    }

    pub fn current(&self) -> Option<&ChatSession> {
        self.current.as_ref()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
