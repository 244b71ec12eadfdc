//! Top-level application state: the reading driver plus view state.

use arcana_core::Phase;
use arcana_reading::ReadingDriver;

/// Main application state.
pub struct TuiApp {
    /// The reading engine.
    pub driver: ReadingDriver,
    /// Question being typed.
    pub question_input: String,
    /// Cursor position within the question (byte offset).
    pub input_cursor: usize,
    /// Highlighted card in the fanned deck.
    pub deck_cursor: usize,
    /// Scroll offset of the narrative panel.
    pub narrative_scroll: u16,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl TuiApp {
    /// Create the app, optionally pre-filling the question.
    pub fn new(driver: ReadingDriver, question: Option<String>) -> Self {
        let question_input = question.unwrap_or_default();
        let input_cursor = question_input.len();
        Self {
            driver,
            question_input,
            input_cursor,
            deck_cursor: 0,
            narrative_scroll: 0,
            show_help: false,
            should_quit: false,
        }
    }

    /// Current phase of the reading.
    pub fn phase(&self) -> Phase {
        self.driver.session().phase()
    }

    /// Apply every event the scheduled tasks have delivered so far.
    pub fn pump(&mut self) {
        while self.driver.try_step().is_some() {}
        let remaining = self.driver.session().deck().len();
        if remaining > 0 && self.deck_cursor >= remaining {
            self.deck_cursor = remaining - 1;
        }
    }

    /// Submit the typed question.
    pub fn submit_question(&mut self) {
        if self.driver.submit(&self.question_input) {
            self.deck_cursor = 0;
        }
    }

    /// Pick the highlighted card, or fan the deck out if it is gathered.
    pub fn pick_highlighted(&mut self) {
        let session = self.driver.session();
        if !session.can_draw() {
            return;
        }
        if !session.is_spread() {
            self.driver.toggle_spread();
            return;
        }
        let Some(card) = session.deck().cards().get(self.deck_cursor) else {
            return;
        };
        let id = card.id;
        self.driver.draw(id);
        self.pump();
    }

    /// Move the deck highlight by `delta`, wrapping around.
    pub fn move_deck_cursor(&mut self, delta: isize) {
        let len = self.driver.session().deck().len();
        if len == 0 || !self.driver.session().is_spread() {
            return;
        }
        let next = (self.deck_cursor as isize + delta).rem_euclid(len as isize);
        self.deck_cursor = next as usize;
    }

    /// Start the reveal when the spread is full.
    pub fn reveal(&mut self) {
        self.driver.reveal();
    }

    /// Start over. Not offered while the cards are turning.
    pub fn restart(&mut self) {
        if self.driver.session().is_revealing() {
            return;
        }
        self.driver.reset();
        self.question_input.clear();
        self.input_cursor = 0;
        self.deck_cursor = 0;
        self.narrative_scroll = 0;
    }

    /// Insert a character at the cursor.
    pub fn push_char(&mut self, c: char) {
        self.question_input.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.input_cursor > 0 {
            let prev = self.question_input[..self.input_cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.question_input.remove(prev);
            self.input_cursor = prev;
        }
    }

    /// Move cursor left.
    pub fn cursor_left(&mut self) {
        if self.input_cursor > 0 {
            self.input_cursor = self.question_input[..self.input_cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    /// Move cursor right.
    pub fn cursor_right(&mut self) {
        if self.input_cursor < self.question_input.len() {
            self.input_cursor = self.question_input[self.input_cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.input_cursor + i)
                .unwrap_or(self.question_input.len());
        }
    }

    /// Clear the question.
    pub fn clear_input(&mut self) {
        self.question_input.clear();
        self.input_cursor = 0;
    }

    /// Scroll the narrative up.
    pub fn scroll_up(&mut self) {
        self.narrative_scroll = self.narrative_scroll.saturating_sub(1);
    }

    /// Scroll the narrative down.
    pub fn scroll_down(&mut self) {
        self.narrative_scroll = self.narrative_scroll.saturating_add(1);
    }

    /// Context-sensitive status bar text.
    pub fn status_hint(&self) -> &'static str {
        let session = self.driver.session();
        match session.phase() {
            Phase::Input => "Enter:begin reading  Esc:clear  Ctrl+C:quit",
            Phase::Shuffling => "Shuffling...  r:restart  q:quit",
            Phase::Picking if session.is_revealing() => "Destiny is unfolding...",
            Phase::Picking if session.can_reveal() => "Enter:reveal  r:restart  ?:help  q:quit",
            Phase::Picking if session.is_spread() => {
                "\u{2190}\u{2192}:choose  Enter:pick  \u{2191}:gather  r:restart  ?:help  q:quit"
            }
            Phase::Picking => "\u{2193}/Enter:spread the deck  r:restart  ?:help  q:quit",
            Phase::Reading => "\u{2191}\u{2193}:scroll  r:restart  ?:help  q:quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use arcana_core::ReadingConfig;
    use arcana_oracle::FixedProvider;

    fn app() -> TuiApp {
        let driver = ReadingDriver::new(
            ReadingConfig::default(),
            Arc::new(FixedProvider::new("# Reading\nAll is well.")),
        );
        TuiApp::new(driver, Some("Will it rain?".into()))
    }

    async fn settle(app: &mut TuiApp, wait: Duration) {
        tokio::time::sleep(wait).await;
        app.pump();
    }

    #[test]
    fn question_editing() {
        let mut a = TuiApp::new(
            ReadingDriver::new(ReadingConfig::default(), Arc::new(FixedProvider::new(""))),
            None,
        );
        for c in "héllo".chars() {
            a.push_char(c);
        }
        a.cursor_left();
        a.backspace();
        assert_eq!(a.question_input, "hélo");
        a.cursor_right();
        assert_eq!(a.input_cursor, a.question_input.len());
        a.clear_input();
        assert_eq!(a.question_input, "");
    }

    #[tokio::test(start_paused = true)]
    async fn full_reading_through_the_app() {
        let mut a = app();
        a.submit_question();
        assert_eq!(a.phase(), Phase::Shuffling);
        settle(&mut a, Duration::from_millis(1100)).await;
        assert_eq!(a.phase(), Phase::Picking);

        // First Enter spreads the deck, the next three pick cards.
        a.pick_highlighted();
        assert!(a.driver.session().is_spread());
        a.move_deck_cursor(-1);
        assert_eq!(a.deck_cursor, 21);
        a.pick_highlighted();
        assert_eq!(a.deck_cursor, 20);
        a.pick_highlighted();
        a.pick_highlighted();
        assert_eq!(a.driver.session().drawn().len(), 3);

        a.reveal();
        assert!(a.driver.session().is_revealing());
        a.restart();
        assert!(a.driver.session().is_revealing());

        settle(&mut a, Duration::from_millis(8000)).await;
        assert_eq!(a.phase(), Phase::Reading);
        assert_eq!(a.driver.session().narrative(), "# Reading\nAll is well.");

        a.restart();
        assert_eq!(a.phase(), Phase::Input);
        assert_eq!(a.question_input, "");
    }
}
