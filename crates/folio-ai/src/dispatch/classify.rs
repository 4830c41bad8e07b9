//! Failure classification and the replies shown for each class.

use crate::AiError;

/// How a failed provider call is reported and recovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Timeout,
    AuthOrConfig,
    RateLimitOrQuota,
    NetworkFailure,
    Unclassified,
}

impl FailureKind {
    /// Classify by the error's message (`Display`) and its full
    /// rendering (`Debug`).
    pub fn classify(err: &AiError) -> Self {
        Self::classify_text(&err.to_string(), &format!("{err:?}"))
    }

    /// Checks run in a fixed order; the first match wins.
    pub fn classify_text(message: &str, detail: &str) -> Self {
        let message = message.to_lowercase();
        let detail = detail.to_lowercase();
        let mentions = |needles: &[&str]| needles.iter().any(|n| message.contains(n));

        if mentions(&["timeout"]) {
            Self::Timeout
        } else if mentions(&["api key", "invalid"]) {
            Self::AuthOrConfig
        } else if mentions(&["429", "rate limit", "quota", "limit"])
            || detail.contains("429")
            || detail.contains("resource_exhausted")
        {
            Self::RateLimitOrQuota
        } else if mentions(&["network", "fetch"]) {
            Self::NetworkFailure
        } else {
            Self::Unclassified
        }
    }

    /// Whether the conversation should be discarded before the next attempt.
    ///
    /// Timeouts and credential problems leave the provider-side state
    /// intact; everything else may have poisoned it.
    pub fn resets_session(&self) -> bool {
        !matches!(self, Self::Timeout | Self::AuthOrConfig)
    }

    /// Text shown to the visitor.
    pub fn reply(&self, contact_email: &str) -> String {
        match self {
            Self::Timeout => "⏱️ The request took too long to process. Please try asking a \
                              simpler question or try again in a moment."
                .to_string(),
            Self::AuthOrConfig => "🔑 There's an issue with the API configuration. Please \
                                   contact the site administrator."
                .to_string(),
            Self::RateLimitOrQuota => format!(
                "I encountered a temporary issue. Please try again. If the problem persists, \
                 please reach out at {contact_email}"
            ),
            Self::NetworkFailure => "🌐 Network connection issue detected. Please check your \
                                     internet connection and try again."
                .to_string(),
            Self::Unclassified => format!(
                "I seem to be having trouble connecting right now. 😔 Please try again in a \
                 moment, or feel free to reach out directly at {contact_email}"
            ),
        }
    }
}
