//! Shared utilities for the screens: layout helpers, card faces, and popups.

use arcana_core::DrawnCard;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Split an area into the three spread slots.
pub fn spread_slots(area: Rect) -> [Rect; 3] {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .areas(area)
}

/// Draw one spread slot: empty, face down, or face up.
pub fn draw_slot(frame: &mut Frame, area: Rect, label: &str, card: Option<&DrawnCard>) {
    let (border, body) = match card {
        None => (
            Style::default().fg(Color::DarkGray),
            vec![Line::from(""), Line::from("(empty)").dark_gray()],
        ),
        Some(card) if !card.revealed => (
            Style::default().fg(Color::Magenta),
            vec![
                Line::from(""),
                Line::from("\u{2726} \u{2726} \u{2726}").magenta(),
                Line::from("face down").dark_gray(),
            ],
        ),
        Some(card) => {
            let orientation = if card.reversed {
                Span::styled("reversed", Style::default().fg(Color::Red))
            } else {
                Span::styled("upright", Style::default().fg(Color::Green))
            };
            (
                Style::default().fg(Color::Yellow),
                vec![
                    Line::from(""),
                    Line::from(card.card.name).bold(),
                    Line::from(card.card.name_en).italic(),
                    Line::from(orientation),
                ],
            )
        }
    };

    let slot = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {label} "))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(border),
        );
    frame.render_widget(slot, area);
}

/// Draw a global help popup overlay.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Question:"),
        Line::from("  Enter       Begin the reading"),
        Line::from("  Esc         Clear the question"),
        Line::from(""),
        Line::from("Picking:"),
        Line::from("  \u{2193} / \u{2191}       Spread / gather the deck"),
        Line::from("  \u{2190} \u{2192} / h l   Choose a card"),
        Line::from("  Enter       Pick the card, or reveal a full spread"),
        Line::from(""),
        Line::from("Reading:"),
        Line::from("  \u{2191} \u{2193} / k j   Scroll the reading"),
        Line::from(""),
        Line::from("  r           Start over"),
        Line::from("  q           Quit"),
        Line::from("  ?           Toggle this help"),
        Line::from("  Ctrl+C      Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
