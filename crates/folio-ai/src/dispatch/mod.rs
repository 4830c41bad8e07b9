//! Message dispatcher: one visitor question in, one displayable reply out.
//!
//! Every path through [`Dispatcher::send`] ends in text the chat can
//! show, except a failure to construct the provider session, which is
//! returned as `AiError::Initialization` for the caller to handle.

mod classify;
mod postprocess;

#[cfg(test)]
mod tests;

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::credential::Credential;
use crate::session::{ChatSession, SessionManager};
use crate::{AiError, AiResponse};

pub use classify::FailureKind;
pub use postprocess::strip_bold;

pub const NOT_CONFIGURED_REPLY: &str = "⚠️ The AI assistant is not configured yet. Please add a \
     valid Gemini API key to enable this feature. You can get one from: \
     https://aistudio.google.com/apikey";

pub const EMPTY_REPLY: &str = "I apologize, but I couldn't generate a proper response. Could you \
     please rephrase your question?";

const PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone)]
pub struct DispatchOptions {
    /// How long to wait for the provider before answering with a timeout.
    pub timeout: Duration,
    /// Address offered to visitors when the assistant cannot help.
    pub contact_email: String,
}

impl DispatchOptions {
    pub fn new(contact_email: impl Into<String>) -> Self {
        Self {
            timeout: Duration::from_secs(30),
            contact_email: contact_email.into(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct Dispatcher {
    sessions: SessionManager,
    credential: Credential,
    options: DispatchOptions,
}

impl Dispatcher {
    pub fn new(sessions: SessionManager, credential: Credential, options: DispatchOptions) -> Self {
        Self {
            sessions,
            credential,
            options,
        }
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    pub fn sessions_mut(&mut self) -> &mut SessionManager {
        &mut self.sessions
    }

    pub fn options(&self) -> &DispatchOptions {
        &self.options
    }

    /// Send `user_text` through the current session and return the reply.
    pub async fn send(&mut self, user_text: &str) -> Result<String, AiError> {
        if !self.credential.is_configured() {
            warn!("API key not found or placeholder; assistant is not configured");
            return Ok(NOT_CONFIGURED_REPLY.to_string());
        }

        let session = self.sessions.get_or_create_session()?;
        let started = Instant::now();

        debug!(
            session = %session.id().short(),
            message_length = user_text.chars().count(),
            preview = %preview(user_text),
            "Sending message"
        );

        match self.submit(&session, user_text).await {
            Ok(response) => {
                info!(
                    session = %session.id().short(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    "Received reply"
                );
                Ok(finish_reply(&response.content))
            }
            Err(err) => Ok(self.recover(err, started.elapsed())),
        }
    }

    /// Race the provider call against the timeout.
    ///
    /// The call runs as its own task. If the timer fires first the task
    /// is detached, not aborted; whatever it returns is ignored.
    async fn submit(&self, session: &ChatSession, text: &str) -> Result<AiResponse, AiError> {
        let task_session = session.clone();
        let text = text.to_owned();
        let call = tokio::spawn(async move { task_session.send_message(&text).await });

        tokio::select! {
            joined = call => match joined {
                Ok(result) => result,
                Err(e) => Err(AiError::ApiError(format!("provider task failed: {e}"))),
            },
            _ = tokio::time::sleep(self.options.timeout) => Err(AiError::Timeout),
        }
    }

    fn recover(&mut self, err: AiError, elapsed: Duration) -> String {
        let kind = FailureKind::classify(&err);
        warn!(
            error = %err,
            kind = ?kind,
            elapsed_ms = elapsed.as_millis() as u64,
            "Provider call failed"
        );
        if kind.resets_session() {
            self.sessions.reset();
        }
        kind.reply(&self.options.contact_email)
    }
}

fn finish_reply(text: &str) -> String {
    if text.trim().is_empty() {
        return EMPTY_REPLY.to_string();
    }
    strip_bold(text)
}

/// Leading characters of a message for logs.
fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
