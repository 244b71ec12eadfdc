//! Terminal front-end for Arcana.
//!
//! A ratatui interface over the reading driver: ask a question, fan the deck,
//! pick three cards, and watch them turn before the reading appears.

pub mod app;
pub mod cli;
pub mod logging;
pub mod screens;
pub mod shared;
pub mod terminal;
