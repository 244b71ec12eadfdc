//! Narrative providers for Arcana readings.
//!
//! A [`NarrativeProvider`] turns a question and a three-card spread into free
//! text. Providers never fail outward: configuration gaps and service errors
//! are converted into fixed fallback messages at this boundary.

pub mod config;
pub mod error;
pub mod gemini;
pub mod prompt;
pub mod provider;

pub use config::ProviderConfig;
pub use error::{OracleError, OracleResult};
pub use gemini::GeminiProvider;
pub use prompt::{CardPrompt, build_prompt};
pub use provider::{
    FALLBACK_NOT_CONFIGURED, FALLBACK_UNAVAILABLE, FALLBACK_UNCLEAR, FixedProvider,
    NarrativeProvider, UnconfiguredProvider,
};
