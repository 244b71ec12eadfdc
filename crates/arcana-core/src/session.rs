//! Reading session state machine.
//!
//! `Session` walks `Input -> Shuffling -> Picking -> Reading`. The reveal runs
//! as a `revealing` overlay on a complete `Picking` phase and ends in
//! `Reading`. Every transition is guarded; a transition whose guard fails is a
//! no-op that reports `false` or `None`.
//!
//! Delayed transitions (settle, collapse, flips, narrative completion) carry
//! the generation that was current when they were scheduled. `reset` bumps the
//! generation, so late deliveries from an abandoned reading are dropped.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::card::{DrawnCard, Position};
use crate::config::ReadingConfig;
use crate::deck::Deck;

/// Number of cards in a spread.
pub const SPREAD_SIZE: usize = 3;

/// Phase of a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Waiting for a question.
    Input,
    /// Deck shuffled, settling before picks open.
    Shuffling,
    /// Accepting draws, and hosting the reveal once three cards are down.
    Picking,
    /// Narrative on display.
    Reading,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Shuffling => write!(f, "shuffling"),
            Self::Picking => write!(f, "picking"),
            Self::Reading => write!(f, "reading"),
        }
    }
}

/// Result of a successful draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawOutcome {
    /// The card as placed in the spread.
    pub card: DrawnCard,
    /// True when this draw filled the spread.
    pub completed: bool,
}

/// Everything the narrative request needs, captured when the reveal starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealRequest {
    /// Generation the reveal belongs to.
    pub generation: u64,
    /// The trimmed question.
    pub question: String,
    /// Drawn cards in position order.
    pub cards: [DrawnCard; SPREAD_SIZE],
}

/// An interactive three-card reading.
pub struct Session {
    config: ReadingConfig,
    rng: StdRng,
    generation: u64,
    phase: Phase,
    question: String,
    deck: Deck,
    drawn: Vec<DrawnCard>,
    deck_spread: bool,
    narrative: String,
    loading: bool,
    revealing: bool,
}

impl Session {
    /// Create a fresh session.
    pub fn new(config: ReadingConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            config,
            rng,
            generation: 0,
            phase: Phase::Input,
            question: String::new(),
            deck: Deck::full(),
            drawn: Vec::with_capacity(SPREAD_SIZE),
            deck_spread: false,
            narrative: String::new(),
            loading: false,
            revealing: false,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ReadingConfig {
        &self.config
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current generation; bumped by every reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The submitted question, empty before submission.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The undrawn pile.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Drawn cards in draw order.
    pub fn drawn(&self) -> &[DrawnCard] {
        &self.drawn
    }

    /// Whether the deck is fanned out for picking.
    pub fn is_spread(&self) -> bool {
        self.deck_spread
    }

    /// Narrative text, empty until the reading completes.
    pub fn narrative(&self) -> &str {
        &self.narrative
    }

    /// Whether a narrative request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the reveal sequence is running.
    pub fn is_revealing(&self) -> bool {
        self.revealing
    }

    /// Whether more cards may be drawn.
    pub fn can_draw(&self) -> bool {
        self.phase == Phase::Picking && !self.revealing && self.drawn.len() < SPREAD_SIZE
    }

    /// Whether the reveal action is available.
    pub fn can_reveal(&self) -> bool {
        self.phase == Phase::Picking && !self.revealing && self.drawn.len() == SPREAD_SIZE
    }

    /// Submit a question and shuffle the deck.
    ///
    /// Returns the generation the settle timer must carry, or `None` when the
    /// session is not taking input or the question is blank.
    pub fn submit(&mut self, question: &str) -> Option<u64> {
        let trimmed = question.trim();
        if self.phase != Phase::Input || trimmed.is_empty() {
            return None;
        }

        self.question = trimmed.to_string();
        self.deck = Deck::full();
        self.deck.shuffle(&mut self.rng);
        self.phase = Phase::Shuffling;
        tracing::debug!(generation = self.generation, "deck shuffled");
        Some(self.generation)
    }

    /// Settle the shuffle and open picking.
    pub fn finish_shuffle(&mut self, generation: u64) -> bool {
        if !self.is_current(generation, "finish_shuffle") || self.phase != Phase::Shuffling {
            return false;
        }
        self.phase = Phase::Picking;
        tracing::debug!(generation, "picking opened");
        true
    }

    /// Fan the deck out. Only possible while cards can still be drawn.
    pub fn spread_deck(&mut self) -> bool {
        if !self.can_draw() || self.deck_spread {
            return false;
        }
        self.deck_spread = true;
        true
    }

    /// Gather the deck back into a pile.
    pub fn collapse_deck(&mut self) -> bool {
        if !self.deck_spread {
            return false;
        }
        self.deck_spread = false;
        true
    }

    /// Spread a collapsed deck or collapse a spread one.
    pub fn toggle_spread(&mut self) -> bool {
        if self.deck_spread {
            self.collapse_deck()
        } else {
            self.spread_deck()
        }
    }

    /// Draw a card from the deck by identifier.
    ///
    /// The card gets the next position in draw order and an independent
    /// reversal roll, and starts face-down.
    pub fn draw(&mut self, card_id: u8) -> Option<DrawOutcome> {
        if !self.can_draw() {
            return None;
        }
        let position = Position::from_draw_index(self.drawn.len())?;
        let card = self.deck.take(card_id)?;
        let reversed = self.rng.random::<f64>() < self.config.reversal_chance;

        let drawn = DrawnCard {
            card,
            position,
            reversed,
            revealed: false,
        };
        self.drawn.push(drawn);
        tracing::debug!(card = card.name_en, %position, reversed, "card drawn");

        Some(DrawOutcome {
            card: drawn,
            completed: self.drawn.len() == SPREAD_SIZE,
        })
    }

    /// Collapse the spread after the final draw.
    pub fn settle_collapse(&mut self, generation: u64) -> bool {
        if !self.is_current(generation, "settle_collapse") || self.drawn.len() != SPREAD_SIZE {
            return false;
        }
        self.collapse_deck()
    }

    /// Start the reveal sequence.
    pub fn begin_reveal(&mut self) -> Option<RevealRequest> {
        if !self.can_reveal() {
            return None;
        }
        let cards: [DrawnCard; SPREAD_SIZE] = self.drawn.as_slice().try_into().ok()?;

        self.revealing = true;
        self.loading = true;
        tracing::debug!(generation = self.generation, "reveal started");

        Some(RevealRequest {
            generation: self.generation,
            question: self.question.clone(),
            cards,
        })
    }

    /// Turn the card at `index` face-up.
    ///
    /// Cards flip strictly in draw order: a flip is refused while an earlier
    /// card is still face-down. Flipping an already revealed card is a no-op.
    pub fn flip(&mut self, generation: u64, index: usize) -> bool {
        if !self.is_current(generation, "flip") || !self.revealing {
            return false;
        }
        if self.drawn[..index.min(self.drawn.len())]
            .iter()
            .any(|c| !c.revealed)
        {
            return false;
        }
        match self.drawn.get_mut(index) {
            Some(card) if !card.revealed => {
                card.revealed = true;
                true
            }
            _ => false,
        }
    }

    /// Finish the reveal with the narrative text and enter `Reading`.
    pub fn complete_reveal(&mut self, generation: u64, narrative: String) -> bool {
        if !self.is_current(generation, "complete_reveal") || !self.revealing {
            return false;
        }
        for card in &mut self.drawn {
            card.revealed = true;
        }
        self.narrative = narrative;
        self.loading = false;
        self.revealing = false;
        self.phase = Phase::Reading;
        tracing::debug!(generation, "reading ready");
        true
    }

    /// Return to a blank `Input` session and abandon anything in flight.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.phase = Phase::Input;
        self.question.clear();
        self.deck = Deck::full();
        self.drawn.clear();
        self.deck_spread = false;
        self.narrative.clear();
        self.loading = false;
        self.revealing = false;
        tracing::debug!(generation = self.generation, "session reset");
    }

    fn is_current(&self, generation: u64, action: &str) -> bool {
        if generation == self.generation {
            return true;
        }
        tracing::debug!(
            action,
            stale = generation,
            current = self.generation,
            "dropping stale transition"
        );
        false
    }
}
