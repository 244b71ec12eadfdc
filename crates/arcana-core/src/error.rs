//! Error types for the reading engine.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building catalogs or configuration.
///
/// Session transitions never return these: a guarded transition that does not
/// apply is simply a no-op.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// No card with this identifier exists in the catalog.
    #[error("unknown card id: {0}")]
    UnknownCard(u8),

    /// Reversal chance must be a probability.
    #[error("reversal chance must be within 0.0..=1.0, got {0}")]
    InvalidReversalChance(f64),
}
