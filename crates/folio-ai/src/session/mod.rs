//! Conversation session management.
//!
//! A `ChatSession` holds one provider conversation (settings plus
//! role-tagged history). The `SessionManager` owns at most one of them,
//! creating it lazily and discarding it on reset.

mod chat;
mod manager;
mod types;

pub use chat::ChatSession;
pub use manager::SessionManager;
pub use types::{SessionConfig, SessionState};
