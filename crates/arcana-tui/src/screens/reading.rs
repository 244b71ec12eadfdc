//! The revealed spread and its narrative.

use arcana_core::{NarrativeLine, Position as SpreadPosition, parse_narrative};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::TuiApp;
use crate::shared::{draw_slot, spread_slots};

/// Draw the reading screen.
pub fn draw(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Spread
            Constraint::Min(3),    // Narrative
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

    let question = app.driver.session().question();
    let narrative = Paragraph::new(narrative_lines(app.driver.session().narrative()))
        .wrap(Wrap { trim: false })
        .scroll((app.narrative_scroll, 0))
        .block(
            Block::default()
                .title(format!(" {question} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    frame.render_widget(narrative, rows[1]);
}

/// Style narrative text: headings bold yellow, paragraphs plain.
pub fn narrative_lines(text: &str) -> Vec<Line<'static>> {
    parse_narrative(text)
        .into_iter()
        .map(|line| match line {
            NarrativeLine::Heading(text) => Line::from(text).bold().yellow(),
            NarrativeLine::Paragraph(text) => Line::from(text),
        })
        .collect()
}
