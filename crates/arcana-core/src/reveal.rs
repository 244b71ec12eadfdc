//! Timing plan for the reveal sequence.
//!
//! The three cards flip at `start_delay`, `start_delay + interval` and
//! `start_delay + 2 * interval`. The reveal occupies at least the animation
//! floor, `start_delay + 2 * interval + flip_duration`, however fast the
//! narrative arrives.

use std::time::Duration;

/// Offsets of the reveal choreography, measured from the reveal action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    /// Delay before the first card flips.
    pub start_delay: Duration,
    /// Delay between consecutive flips.
    pub interval: Duration,
    /// How long a single flip takes to play out.
    pub flip_duration: Duration,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            start_delay: Duration::from_millis(500),
            interval: Duration::from_millis(2500),
            flip_duration: Duration::from_millis(2000),
        }
    }
}

impl RevealTiming {
    /// Construct from millisecond values.
    pub fn from_millis(start_delay: u64, interval: u64, flip_duration: u64) -> Self {
        Self {
            start_delay: Duration::from_millis(start_delay),
            interval: Duration::from_millis(interval),
            flip_duration: Duration::from_millis(flip_duration),
        }
    }

    /// Offset at which the card drawn at `index` flips.
    pub fn flip_offset(&self, index: u32) -> Duration {
        self.start_delay + self.interval * index
    }

    /// Flip offsets for the three cards, in draw order.
    pub fn flip_offsets(&self) -> [Duration; 3] {
        [self.flip_offset(0), self.flip_offset(1), self.flip_offset(2)]
    }

    /// Minimum wall-clock time the reveal occupies.
    pub fn animation_floor(&self) -> Duration {
        self.flip_offset(2) + self.flip_duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_offsets() {
        let t = RevealTiming::default();
        assert_eq!(
            t.flip_offsets(),
            [
                Duration::from_millis(500),
                Duration::from_millis(3000),
                Duration::from_millis(5500)
            ]
        );
        assert_eq!(t.animation_floor(), Duration::from_millis(7500));
    }

    #[test]
    fn custom_offsets() {
        let t = RevealTiming::from_millis(10, 20, 5);
        assert_eq!(t.flip_offset(1), Duration::from_millis(30));
        assert_eq!(t.animation_floor(), Duration::from_millis(55));
    }

    #[test]
    fn zero_timing_is_instant() {
        let t = RevealTiming::from_millis(0, 0, 0);
        assert_eq!(t.animation_floor(), Duration::ZERO);
    }
}
