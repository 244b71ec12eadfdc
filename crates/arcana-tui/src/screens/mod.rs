//! One screen per reading phase.

pub mod input;
pub mod picking;
pub mod reading;

use arcana_core::Phase;
use ratatui::prelude::*;

use crate::app::TuiApp;

/// Draw the screen for the current phase.
pub fn draw(frame: &mut Frame, app: &TuiApp, area: Rect) {
    match app.phase() {
        Phase::Input | Phase::Shuffling => input::draw(frame, app, area),
        Phase::Picking => picking::draw(frame, app, area),
        Phase::Reading => reading::draw(frame, app, area),
    }
}
