//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use arcana_core::{CoreResult, ReadingConfig, RevealTiming};
use clap::Parser;

/// Arguments for the `arcana` binary.
#[derive(Debug, Parser)]
#[command(name = "arcana", about = "Three-card tarot readings in the terminal", version)]
pub struct Args {
    /// RNG seed for shuffles and reversals (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Probability that a drawn card is reversed (0.0-1.0)
    #[arg(long, default_value = "0.2")]
    pub reversal_chance: f64,

    /// Delay before the first card flips, in milliseconds
    #[arg(long, default_value = "500")]
    pub start_delay_ms: u64,

    /// Delay between card flips, in milliseconds
    #[arg(long, default_value = "2500")]
    pub interval_ms: u64,

    /// Duration of a single flip, in milliseconds
    #[arg(long, default_value = "2000")]
    pub flip_ms: u64,

    /// Pause after shuffling before cards can be picked, in milliseconds
    #[arg(long, default_value = "1000")]
    pub settle_ms: u64,

    /// Pause before the deck gathers after the third pick, in milliseconds
    #[arg(long, default_value = "500")]
    pub collapse_ms: u64,

    /// Request timeout for the reading service, in seconds
    #[arg(long, default_value = "60")]
    pub timeout_secs: u64,

    /// Never call the reading service; list the spread instead
    #[arg(long)]
    pub offline: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Pre-fill the question
    #[arg(long)]
    pub question: Option<String>,
}

impl Args {
    /// Build the session configuration, drawing a seed if none was given.
    pub fn reading_config(&self) -> CoreResult<ReadingConfig> {
        let seed = self.seed.unwrap_or_else(rand::random);
        ReadingConfig::default()
            .with_seed(seed)
            .with_settle_delay(Duration::from_millis(self.settle_ms))
            .with_collapse_delay(Duration::from_millis(self.collapse_ms))
            .with_reveal_timing(RevealTiming::from_millis(
                self.start_delay_ms,
                self.interval_ms,
                self.flip_ms,
            ))
            .with_reversal_chance(self.reversal_chance)
    }

    /// Request timeout for the reading service.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
