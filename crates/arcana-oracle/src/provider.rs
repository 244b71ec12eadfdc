//! The narrative provider boundary and its offline implementations.

use std::time::Duration;

use async_trait::async_trait;

use crate::prompt::CardPrompt;

/// Returned when no API credential is configured.
pub const FALLBACK_NOT_CONFIGURED: &str = "API key not configured. Please check your setup.";

/// Returned when the reading service cannot be reached or errors.
pub const FALLBACK_UNAVAILABLE: &str =
    "The connection to the reading service is unavailable. Please try again later.";

/// Returned when the service answers with no text.
pub const FALLBACK_UNCLEAR: &str = "The stars are clouded. Please try again later...";

/// Produces the interpretive text for a spread.
///
/// Implementations must not fail: every error becomes a human-readable
/// fallback string. One attempt per call; callers do not retry.
#[async_trait]
pub trait NarrativeProvider: Send + Sync {
    /// Produce a reading for `question` over `cards` in position order.
    async fn produce_reading(&self, question: &str, cards: &[CardPrompt]) -> String;
}

/// Provider used when no credential is available. Never makes a call.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredProvider;

#[async_trait]
impl NarrativeProvider for UnconfiguredProvider {
    async fn produce_reading(&self, _question: &str, _cards: &[CardPrompt]) -> String {
        tracing::warn!("narrative requested without an API key");
        FALLBACK_NOT_CONFIGURED.to_string()
    }
}

/// Provider that answers with fixed text after an optional delay.
#[derive(Debug, Clone)]
pub struct FixedProvider {
    text: String,
    latency: Duration,
}

impl FixedProvider {
    /// Answer immediately with `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            latency: Duration::ZERO,
        }
    }

    /// Delay every answer by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Offline stand-in that lists the spread instead of interpreting it.
    pub fn offline() -> Self {
        Self::new(String::new())
    }
}

#[async_trait]
impl NarrativeProvider for FixedProvider {
    async fn produce_reading(&self, question: &str, cards: &[CardPrompt]) -> String {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if !self.text.is_empty() {
            return self.text.clone();
        }
        let mut out = format!("# {question}\n");
        for card in cards {
            out.push_str(&format!("**{card}**\n"));
        }
        out.push_str("Offline mode: no interpretation was requested.");
        out
    }
}
