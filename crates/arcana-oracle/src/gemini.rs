//! Gemini REST provider.
//!
//! Sends one `generateContent` request per reading. Failures are logged and
//! replaced by [`FALLBACK_UNAVAILABLE`]; a response without text becomes
//! [`FALLBACK_UNCLEAR`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{OracleError, OracleResult};
use crate::prompt::{CardPrompt, build_prompt};
use crate::provider::{FALLBACK_UNAVAILABLE, FALLBACK_UNCLEAR, NarrativeProvider};

/// Default model.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Provider backed by the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    /// Create a provider with the default model and endpoint.
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> OracleResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(OracleError::Client)?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Override the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API root, e.g. for a proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The configured model.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }

    /// Send the prompt and return the generated text, if any.
    pub async fn generate(&self, prompt: &str) -> OracleResult<Option<String>> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                thinking_config: ThinkingConfig { thinking_budget: 0 },
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(OracleError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)?;
        Ok(extract_text(parsed))
    }
}

#[async_trait]
impl NarrativeProvider for GeminiProvider {
    async fn produce_reading(&self, question: &str, cards: &[CardPrompt]) -> String {
        let prompt = build_prompt(question, cards);
        tracing::info!(model = %self.model, "requesting reading");
        match self.generate(&prompt).await {
            Ok(Some(text)) => {
                tracing::info!(chars = text.chars().count(), "reading received");
                text
            }
            Ok(None) => {
                tracing::warn!("reading service returned no text");
                FALLBACK_UNCLEAR.to_string()
            }
            Err(err) => {
                tracing::error!(error = %err, "reading request failed");
                FALLBACK_UNAVAILABLE.to_string()
            }
        }
    }
}

/// Concatenate the text parts of the first candidate; `None` when blank.
fn extract_text(response: GenerateContentResponse) -> Option<String> {
    let candidate = response.candidates.into_iter().next()?;
    let text: String = candidate
        .content?
        .parts
        .into_iter()
        .filter_map(|p| p.text)
        .collect();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    thinking_config: ThinkingConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
