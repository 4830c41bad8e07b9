//! Dispatcher behaviour against a scripted provider.

use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::session::{SessionConfig, SessionState};
use crate::testing::{StubClient, StubReply};

const EMAIL: &str = "steven@example.com";

fn dispatcher_with(stub: Arc<StubClient>, credential: Credential) -> Dispatcher {
    let sessions = SessionManager::new(
        stub,
        SessionConfig::new("gemini-2.5-flash", "You are Steven's assistant."),
    );
    let options = DispatchOptions::new(EMAIL).with_timeout(Duration::from_millis(100));
    Dispatcher::new(sessions, credential, options)
}

fn dispatcher(replies: Vec<StubReply>) -> (Dispatcher, Arc<StubClient>) {
    let stub = Arc::new(StubClient::new(replies));
    (dispatcher_with(stub.clone(), Credential::new("test-key")), stub)
}

#[tokio::test]
async fn success_strips_bold_markers() {
    let (mut d, _) = dispatcher(vec![StubReply::text("**Bold** and *not bold*")]);
    let reply = d.send("Say something").await.unwrap();
    assert_eq!(reply, "Bold and *not bold*");
    assert_eq!(d.sessions().state(), SessionState::Active);
}

#[tokio::test]
async fn missing_credential_short_circuits() {
    let stub = Arc::new(StubClient::new(vec![]));
    let mut d = dispatcher_with(stub.clone(), Credential::missing());

    let reply = d.send("anything").await.unwrap();
    assert_eq!(reply, NOT_CONFIGURED_REPLY);
    assert_eq!(d.sessions().state(), SessionState::Absent);
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn placeholder_credential_short_circuits() {
    let stub = Arc::new(StubClient::new(vec![]));
    let mut d = dispatcher_with(
        stub.clone(),
        Credential::new(crate::credential::PLACEHOLDER_API_KEY),
    );
    assert_eq!(d.send("hi").await.unwrap(), NOT_CONFIGURED_REPLY);
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn timeout_resolves_and_keeps_session() {
    let (mut d, _) = dispatcher(vec![StubReply::slow(Duration::from_secs(5), "late")]);

    let reply = d.send("Tell me everything").await.unwrap();
    assert!(reply.contains("took too long"));
    assert_eq!(d.sessions().state(), SessionState::Active);
}

#[tokio::test]
async fn quota_error_resets_session() {
    let (mut d, _) = dispatcher(vec![StubReply::error(AiError::ApiError(
        "You exceeded your current quota".into(),
    ))]);

    let reply = d.send("hi").await.unwrap();
    assert!(reply.starts_with("I encountered a temporary issue."));
    assert!(reply.ends_with(EMAIL));
    assert_eq!(d.sessions().state(), SessionState::Absent);
}

#[tokio::test]
async fn auth_error_keeps_session() {
    let (mut d, _) = dispatcher(vec![StubReply::error(AiError::ApiError(
        "HTTP 400 Bad Request: API key not valid. Please pass a valid API key.".into(),
    ))]);

    let reply = d.send("hi").await.unwrap();
    assert!(reply.contains("site administrator"));
    assert_eq!(d.sessions().state(), SessionState::Active);
}

#[tokio::test]
async fn network_error_resets_session() {
    let (mut d, _) = dispatcher(vec![StubReply::error(AiError::NetworkError(
        "connection refused".into(),
    ))]);

    let reply = d.send("hi").await.unwrap();
    assert!(reply.contains("Network connection issue"));
    assert_eq!(d.sessions().state(), SessionState::Absent);
}

#[tokio::test]
async fn unclassified_error_resets_session() {
    let (mut d, _) = dispatcher(vec![StubReply::error(AiError::ParseError(
        "unexpected end of input".into(),
    ))]);

    let reply = d.send("hi").await.unwrap();
    assert!(reply.contains("trouble connecting"));
    assert!(reply.ends_with(EMAIL));
    assert_eq!(d.sessions().state(), SessionState::Absent);
}

#[tokio::test]
async fn empty_reply_asks_to_rephrase_without_reset() {
    let (mut d, _) = dispatcher(vec![StubReply::text("   \n ")]);

    let reply = d.send("hmm").await.unwrap();
    assert_eq!(reply, EMPTY_REPLY);
    assert_eq!(d.sessions().state(), SessionState::Active);
}

#[tokio::test]
async fn initialization_error_propagates() {
    let stub = Arc::new(StubClient::new(vec![]));
    let sessions = SessionManager::new(stub.clone(), SessionConfig::new("", "persona"));
    let mut d = Dispatcher::new(sessions, Credential::new("k"), DispatchOptions::new(EMAIL));

    let err = d.send("hi").await.unwrap_err();
    assert!(matches!(err, AiError::Initialization(_)));
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn conversation_continues_in_same_session() {
    let (mut d, stub) = dispatcher(vec![StubReply::text("first"), StubReply::text("second")]);

    d.send("one").await.unwrap();
    let id = d.sessions().current().unwrap().id().clone();
    d.send("two").await.unwrap();

    assert_eq!(d.sessions().current().unwrap().id(), &id);
    assert_eq!(stub.requests()[1].len(), 3);
}

#[tokio::test]
async fn fresh_session_after_reset_starts_empty() {
    let (mut d, stub) = dispatcher(vec![
        StubReply::text("first"),
        StubReply::error(AiError::RateLimited),
        StubReply::text("third"),
    ]);

    d.send("one").await.unwrap();
    d.send("two").await.unwrap();
    assert_eq!(d.sessions().state(), SessionState::Absent);

    assert_eq!(d.send("three").await.unwrap(), "third");
    let requests = stub.requests();
    assert_eq!(requests[2].len(), 1);
}

#[test]
fn preview_truncates_long_messages() {
    let long = "x".repeat(80);
    let p = preview(&long);
    assert_eq!(p.len(), 53);
    assert!(p.ends_with("..."));
    assert_eq!(preview("short"), "short");
}
