//! The fanned deck, the spread, and the reveal.

use arcana_core::{Position as SpreadPosition, SPREAD_SIZE};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::TuiApp;
use crate::shared::{draw_slot, spread_slots};

/// Draw the picking screen.
pub fn draw(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Spread
            Constraint::Length(1), // Message
            Constraint::Min(3),    // Deck
        ])
        .split(area);

    let drawn = app.driver.session().drawn();
    for (slot, position) in spread_slots(rows[0]).into_iter().zip(SpreadPosition::ALL) {
        draw_slot(
            frame,
            slot,
            &position.to_string(),
            drawn.get(position.index()),
        );
    }

    let message = Paragraph::new(message_line(app)).alignment(Alignment::Center);
    frame.render_widget(message, rows[1]);

    draw_deck(frame, app, rows[2]);
}

fn message_line(app: &TuiApp) -> Line<'static> {
    let session = app.driver.session();
    if session.is_revealing() {
        return Line::from("Destiny is unfolding...").italic().magenta();
    }
    if session.can_reveal() {
        return Line::from("The spread is complete. Press Enter to reveal.")
            .bold()
            .yellow();
    }
    let left = SPREAD_SIZE - session.drawn().len();
    Line::from(format!(
        "Pick {left} more card{}",
        if left == 1 { "" } else { "s" }
    ))
}

fn draw_deck(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let session = app.driver.session();
    let count = session.deck().len();
    let block = Block::default()
        .title(format!(" Deck ({count}) "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if !session.is_spread() {
        let stack = Paragraph::new(vec![
            Line::from("\u{2588}\u{2588}\u{2588}\u{258c}").magenta(),
            Line::from("gathered").dark_gray(),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(stack, area);
        return;
    }

    let backs: Vec<Span> = (0..count)
        .flat_map(|i| {
            let style = if i == app.deck_cursor && session.can_draw() {
                Style::default().fg(Color::Black).bg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::Magenta)
            };
            [Span::styled("\u{2588}\u{2588}", style), Span::raw(" ")]
        })
        .collect();
    let fan = Paragraph::new(Line::from(backs))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(fan, area);
}
