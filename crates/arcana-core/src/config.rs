//! Configuration for a reading session.

use std::time::Duration;

use crate::error::{CoreError, CoreResult};
use crate::reveal::RevealTiming;

/// Configuration for a reading session.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingConfig {
    /// RNG seed for shuffles and reversal rolls.
    pub seed: u64,
    /// Probability that a drawn card lands reversed.
    pub reversal_chance: f64,
    /// Pause between the shuffle and the picking phase.
    pub settle_delay: Duration,
    /// Pause between the third draw and collapsing the spread deck.
    pub collapse_delay: Duration,
    /// Reveal choreography.
    pub reveal: RevealTiming,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            reversal_chance: 0.2,
            settle_delay: Duration::from_millis(1000),
            collapse_delay: Duration::from_millis(500),
            reveal: RevealTiming::default(),
        }
    }
}

impl ReadingConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the reversal probability.
    pub fn with_reversal_chance(mut self, chance: f64) -> CoreResult<Self> {
        if !(0.0..=1.0).contains(&chance) {
            return Err(CoreError::InvalidReversalChance(chance));
        }
        self.reversal_chance = chance;
        Ok(self)
    }

    /// Set the post-shuffle settle delay.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Set the delay before the spread collapses after the third draw.
    pub fn with_collapse_delay(mut self, delay: Duration) -> Self {
        self.collapse_delay = delay;
        self
    }

    /// Set the reveal timing.
    pub fn with_reveal_timing(mut self, timing: RevealTiming) -> Self {
        self.reveal = timing;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = ReadingConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.reversal_chance, 0.2);
        assert_eq!(cfg.settle_delay, Duration::from_millis(1000));
        assert_eq!(cfg.collapse_delay, Duration::from_millis(500));
        assert_eq!(cfg.reveal, RevealTiming::default());
    }

    #[test]
    fn builder_methods() {
        let cfg = ReadingConfig::default()
            .with_seed(7)
            .with_settle_delay(Duration::ZERO)
            .with_collapse_delay(Duration::from_millis(1))
            .with_reveal_timing(RevealTiming::from_millis(1, 2, 3))
            .with_reversal_chance(0.5)
            .unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.reversal_chance, 0.5);
        assert_eq!(cfg.settle_delay, Duration::ZERO);
        assert_eq!(cfg.reveal.interval, Duration::from_millis(2));
    }

    #[test]
    fn reversal_chance_validated() {
        assert_eq!(
            ReadingConfig::default().with_reversal_chance(1.5),
            Err(CoreError::InvalidReversalChance(1.5))
        );
        assert!(ReadingConfig::default().with_reversal_chance(-0.1).is_err());
        assert!(ReadingConfig::default().with_reversal_chance(f64::NAN).is_err());
        assert!(ReadingConfig::default().with_reversal_chance(0.0).is_ok());
        assert!(ReadingConfig::default().with_reversal_chance(1.0).is_ok());
    }
}
