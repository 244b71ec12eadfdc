//! Async driver for Arcana readings.
//!
//! [`ReadingDriver`] owns a [`Session`](arcana_core::Session) and turns its
//! delayed transitions into tokio tasks. Tasks never touch the session: they
//! send generation-tagged [`ReadingEvent`]s back to the driver, which applies
//! them in order and drops anything from an abandoned reading.

pub mod driver;
pub mod event;

pub use driver::ReadingDriver;
pub use event::ReadingEvent;
