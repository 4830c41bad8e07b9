//! Scripted `AiClient` for unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::session::SessionConfig;
use crate::{AiClient, AiError, AiResponse, Message, TokenUsage};

pub(crate) enum StubReply {
    Text(String),
    Error(AiError),
    /// Answer with the text, but only after the delay.
    Slow(Duration, String),
}

impl StubReply {
    pub(crate) fn text(text: &str) -> Self {
        Self::Text(text.to_string())
    }

    pub(crate) fn error(err: AiError) -> Self {
        Self::Error(err)
    }

    pub(crate) fn slow(delay: Duration, text: &str) -> Self {
        Self::Slow(delay, text.to_string())
    }
}

/// Plays back replies in order; answers "ok" once the script runs out.
pub(crate) struct StubClient {
    replies: Mutex<VecDeque<StubReply>>,
    requests: Mutex<Vec<Vec<Message>>>,
    calls: AtomicUsize,
}

impl StubClient {
    pub(crate) fn new(replies: Vec<StubReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The message list of every request, in call order.
    pub(crate) fn requests(&self) -> Vec<Vec<Message>> {
        self.requests.lock().unwrap().clone()
    }
}

fn reply(content: String) -> AiResponse {
    AiResponse {
        content,
        usage: TokenUsage {
            input_tokens: 10,
            output_tokens: 5,
        },
    }
}

#[async_trait]
impl AiClient for StubClient {
    async fn send_message(
        &self,
        _config: &SessionConfig,
        messages: &[Message],
    ) -> Result<AiResponse, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(messages.to_vec());

        let next = self.replies.lock().unwrap().pop_front();
        match next {
            None => Ok(reply("ok".to_string())),
            Some(StubReply::Text(text)) => Ok(reply(text)),
            Some(StubReply::Error(err)) => Err(err),
            Some(StubReply::Slow(delay, text)) => {
                tokio::time::sleep(delay).await;
                Ok(reply(text))
            }
        }
    }
}
