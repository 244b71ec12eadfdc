//! Core engine for Arcana three-card readings.
//!
//! Provides the 22-card Major Arcana catalog, a shuffleable deck, drawn cards
//! with past/present/future positions, the reading session state machine,
//! the reveal timing plan, and the line markup used to display narratives.

pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod narrative;
pub mod reveal;
pub mod session;

pub use card::{CardDef, DrawnCard, MAJOR_ARCANA, Position, card_by_id};
pub use config::ReadingConfig;
pub use deck::Deck;
pub use error::{CoreError, CoreResult};
pub use narrative::{NarrativeLine, parse_narrative};
pub use reveal::RevealTiming;
pub use session::{DrawOutcome, Phase, RevealRequest, SPREAD_SIZE, Session};
