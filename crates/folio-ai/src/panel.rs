//! Chat panel state, independent of any particular UI.
//!
//! Holds the visible transcript, the open/closed and loading flags, and
//! the starter questions, and routes visitor input to the dispatcher.

use folio_common::new_id;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::dispatch::Dispatcher;
use crate::Role;

/// Starter questions offered until the visitor sends their first message.
pub const SUGGESTED_QUESTIONS: [&str; 4] = [
    "What technologies do you know?",
    "Tell me about your projects",
    "What's your experience?",
    "How can I contact you?",
];

/// Shown when the assistant could not even start a conversation.
pub const FAILURE_BUBBLE: &str = "Sorry, something went wrong. Please try again! 😔";

pub const WELCOME_ID: &str = "welcome";

/// One entry in the visible transcript. Never modified once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            role,
            text: text.into(),
        }
    }
}

fn welcome_text(owner: &str) -> String {
    format!(
        "Hi there! 👋 I'm {owner}'s AI Assistant.\n\n\
         I can help you learn about:\n\
         • Work experience and career background\n\
         • Technical skills and expertise levels\n\
         • Portfolio projects and technologies\n\
         • Contact information and availability\n\n\
         Feel free to ask me anything!"
    )
}

pub struct ChatPanel {
    dispatcher: Dispatcher,
    messages: Vec<ChatMessage>,
    open: bool,
    loading: bool,
    suggestions_visible: bool,
}

impl ChatPanel {
    /// A closed panel whose transcript holds only the welcome greeting.
    pub fn new(dispatcher: Dispatcher, owner: &str) -> Self {
        let welcome = ChatMessage {
            id: WELCOME_ID.to_string(),
            role: Role::Assistant,
            text: welcome_text(owner),
        };
        Self {
            dispatcher,
            messages: vec![welcome],
            open: false,
            loading: false,
            suggestions_visible: true,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Starter questions, or nothing once the visitor has spoken.
    pub fn suggestions(&self) -> &'static [&'static str] {
        if self.suggestions_visible {
            &SUGGESTED_QUESTIONS
        } else {
            &[]
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Send visitor input and append the reply.
    ///
    /// Blank input, or input while a reply is pending, is ignored and
    /// returns `None`. Otherwise the transcript gains the user message
    /// followed by exactly one assistant message, which is returned.
    pub async fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        if text.trim().is_empty() || self.loading {
            return None;
        }

        self.suggestions_visible = false;
        self.messages.push(ChatMessage::new(Role::User, text));
        self.loading = true;

        let reply = match self.dispatcher.send(text).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, "Chat error");
                FAILURE_BUBBLE.to_string()
            }
        };

        self.messages.push(ChatMessage::new(Role::Assistant, reply));
        self.loading = false;
        self.messages.last()
    }

    /// Send the `index`-th starter question.
    pub async fn send_suggestion(&mut self, index: usize) -> Option<&ChatMessage> {
        let question = *self.suggestions().get(index)?;
        self.send(question).await
    }

    /// Forget the provider conversation. The visible transcript stays.
    pub fn reset_conversation(&mut self) {
        self.dispatcher.sessions_mut().reset();
    }
}
