//! Question entry, and the shuffle that follows it.

use arcana_core::Phase;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::TuiApp;
use crate::shared::centered_rect;

/// Draw the question screen.
pub fn draw(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let panel = centered_rect(70, 60, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(2), // Prompt
            Constraint::Length(3), // Input
            Constraint::Min(0),    // Shuffle notice
        ])
        .split(panel);

    let title = Paragraph::new(vec![
        Line::from("\u{2726} ARCANA \u{2726}").bold().yellow(),
        Line::from("Past \u{00b7} Present \u{00b7} Future").dark_gray(),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    let prompt = Paragraph::new("What question weighs on your mind?").alignment(Alignment::Center);
    frame.render_widget(prompt, rows[1]);

    let shuffling = app.phase() == Phase::Shuffling;
    let text = if shuffling {
        app.driver.session().question()
    } else {
        app.question_input.as_str()
    };
    let border = if shuffling { Color::DarkGray } else { Color::Green };
    let input = Paragraph::new(format!("> {text}")).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(input, rows[2]);

    if shuffling {
        let notice = Paragraph::new(Line::from("Shuffling the deck...").italic().magenta())
            .alignment(Alignment::Center);
        frame.render_widget(notice, rows[3]);
        return;
    }

    // Offset by 2 for "> ", plus 1 for the left border.
    let typed = app.question_input[..app.input_cursor].chars().count() as u16;
    let input_area = rows[2];
    let cursor_x = input_area.x + 1 + 2 + typed;
    if cursor_x < input_area.x + input_area.width.saturating_sub(1) {
        frame.set_cursor_position(Position::new(cursor_x, input_area.y + 1));
    }
}
