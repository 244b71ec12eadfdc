//! Provider configuration.
//!
//! The API key gates live calls: without one, [`ProviderConfig::build`]
//! returns a provider that answers with [`FALLBACK_NOT_CONFIGURED`] and
//! never touches the network.
//!
//! [`FALLBACK_NOT_CONFIGURED`]: crate::provider::FALLBACK_NOT_CONFIGURED

use std::sync::Arc;
use std::time::Duration;

use crate::error::OracleResult;
use crate::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiProvider};
use crate::provider::{NarrativeProvider, UnconfiguredProvider};

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
/// Secondary API key variable, checked when the first is unset.
pub const ENV_API_KEY_FALLBACK: &str = "API_KEY";
/// Environment variable overriding the model.
pub const ENV_MODEL: &str = "ARCANA_MODEL";
/// Environment variable overriding the API root.
pub const ENV_BASE_URL: &str = "ARCANA_API_BASE";

/// Configuration for the narrative provider.
#[derive(Clone, PartialEq)]
pub struct ProviderConfig {
    /// API credential; `None` disables live calls.
    pub api_key: Option<String>,
    /// Model name.
    pub model: String,
    /// API root URL.
    pub base_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl ProviderConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            api_key: non_blank(ENV_API_KEY).or_else(|| non_blank(ENV_API_KEY_FALLBACK)),
            model: non_blank(ENV_MODEL).unwrap_or(defaults.model),
            base_url: non_blank(ENV_BASE_URL).unwrap_or(defaults.base_url),
            timeout: defaults.timeout,
        }
    }

    /// Set the API key. A blank key counts as absent.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.api_key = (!key.trim().is_empty()).then_some(key);
        self
    }

    /// Set the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether a live call will be attempted.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Build the provider this configuration describes.
    pub fn build(&self) -> OracleResult<Arc<dyn NarrativeProvider>> {
        let Some(key) = &self.api_key else {
            tracing::warn!("no API key found; readings will use the fallback message");
            return Ok(Arc::new(UnconfiguredProvider));
        };
        let provider = GeminiProvider::new(key.clone(), self.timeout)?
            .with_model(self.model.clone())
            .with_base_url(self.base_url.clone());
        Ok(Arc::new(provider))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::FALLBACK_NOT_CONFIGURED;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let cfg = ProviderConfig::default();
        assert!(!cfg.is_configured());
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.timeout, Duration::from_secs(60));
    }

    #[test]
    fn reads_primary_key() {
        let cfg = ProviderConfig::from_lookup(lookup(&[
            (ENV_API_KEY, "primary"),
            (ENV_API_KEY_FALLBACK, "secondary"),
        ]));
        assert_eq!(cfg.api_key.as_deref(), Some("primary"));
    }

    #[test]
    fn falls_back_to_secondary_key() {
        let cfg = ProviderConfig::from_lookup(lookup(&[
            (ENV_API_KEY, "   "),
            (ENV_API_KEY_FALLBACK, "secondary"),
        ]));
        assert_eq!(cfg.api_key.as_deref(), Some("secondary"));
    }

    #[test]
    fn overrides_model_and_base() {
        let cfg = ProviderConfig::from_lookup(lookup(&[
            (ENV_MODEL, "gemini-2.5-flash"),
            (ENV_BASE_URL, "http://proxy/models"),
        ]));
        assert!(!cfg.is_configured());
        assert_eq!(cfg.model, "gemini-2.5-flash");
        assert_eq!(cfg.base_url, "http://proxy/models");
    }

    #[test]
    fn blank_key_is_absent() {
        assert!(!ProviderConfig::default().with_api_key("  ").is_configured());
        assert!(ProviderConfig::default().with_api_key("k").is_configured());
    }

    #[test]
    fn debug_redacts_key() {
        let cfg = ProviderConfig::default().with_api_key("very-secret");
        let debug = format!("{cfg:?}");
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[tokio::test]
    async fn missing_key_builds_unconfigured_provider() {
        let provider = ProviderConfig::default().build().unwrap();
        let text = provider.produce_reading("q", &[]).await;
        assert_eq!(text, FALLBACK_NOT_CONFIGURED);
    }

    #[test]
    fn key_builds_live_provider() {
        let cfg = ProviderConfig::default()
            .with_api_key("k")
            .with_timeout(Duration::from_secs(2));
        assert!(cfg.build().is_ok());
    }
}
