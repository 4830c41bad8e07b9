//! Wiring: config + portfolio content → a ready chat panel.

use std::sync::Arc;
use std::time::Duration;

use folio_ai::{
    ChatPanel, Credential, DispatchOptions, Dispatcher, GeminiClient, GeminiConfig,
    SessionConfig, SessionManager,
};
use folio_common::FolioError;
use folio_config::AssistantConfig;
use folio_profile::{compose_system_instruction, Portfolio};
use tracing::{info, warn};

pub fn build_panel(config: &AssistantConfig, portfolio: &Portfolio) -> Result<ChatPanel, FolioError> {
    let credential = Credential::from_env(&config.api_key_env);
    if !credential.is_configured() {
        warn!(var = %config.api_key_env, "no API key configured; the assistant will explain how to add one");
    }

    // The HTTP timeout only bounds calls the dispatcher already gave up on.
    let gemini = GeminiConfig::new(credential.expose().unwrap_or_default())
        .with_base_url(config.base_url.as_str())
        .with_request_timeout(config.timeout().max(Duration::from_secs(120)));
    let client = GeminiClient::new(gemini).map_err(|e| FolioError::Assistant(e.to_string()))?;

    let instruction = compose_system_instruction(portfolio);
    info!(
        model = %config.model,
        instruction_chars = instruction.chars().count(),
        "Assistant configured"
    );

    let session_config = SessionConfig::new(config.model.as_str(), instruction)
        .with_temperature(config.temperature)
        .with_max_output_tokens(config.max_output_tokens);
    let sessions = SessionManager::new(Arc::new(client), session_config);

    let options =
        DispatchOptions::new(portfolio.profile.email.as_str()).with_timeout(config.timeout());
    let dispatcher = Dispatcher::new(sessions, credential, options);

    Ok(ChatPanel::new(dispatcher, &portfolio.profile.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_ai::dispatch::NOT_CONFIGURED_REPLY;
    use folio_ai::SessionState;

    fn unconfigured() -> AssistantConfig {
        AssistantConfig {
            api_key_env: "FOLIO_APP_TEST_UNSET_API_KEY".into(),
            ..AssistantConfig::default()
        }
    }

    #[test]
    fn panel_uses_config_and_content() {
        let portfolio = Portfolio::default();
        let panel = build_panel(&unconfigured(), &portfolio).unwrap();

        let dispatcher = panel.dispatcher();
        let session = dispatcher.sessions().config();
        assert_eq!(session.model, "gemini-2.5-flash");
        assert_eq!(session.temperature, 0.7);
        assert_eq!(session.max_output_tokens, 500);
        assert_eq!(session.system_instruction, compose_system_instruction(&portfolio));
        assert_eq!(dispatcher.options().contact_email, "steven@example.com");
        assert_eq!(dispatcher.options().timeout.as_secs(), 30);
        assert!(panel.messages()[0].text.contains("Steven Developer"));
    }

    #[tokio::test]
    async fn unconfigured_assistant_explains_itself() {
        let mut panel = build_panel(&unconfigured(), &Portfolio::default()).unwrap();

        let reply = panel.send("Hello?").await.unwrap().text.clone();
        assert_eq!(reply, NOT_CONFIGURED_REPLY);
        assert_eq!(panel.dispatcher().sessions().state(), SessionState::Absent);
    }
}
