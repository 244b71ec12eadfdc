//! Terminal setup, teardown, and main event loop.

use std::io;
use std::time::Duration;

use arcana_core::Phase;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::TuiApp;
use crate::screens;

/// How long to wait for input before checking for delivered events.
const TICK: Duration = Duration::from_millis(50);

/// Launch the TUI application. Must be called inside a tokio runtime context.
pub fn run(mut app: TuiApp) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp,
) -> Result<(), String> {
    loop {
        app.pump();
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            tracing::info!("quitting");
            return Ok(());
        }

        if !event::poll(TICK).map_err(|e| format!("event error: {e}"))? {
            continue;
        }
        let event = event::read().map_err(|e| format!("event error: {e}"))?;
        handle_event(app, event);
    }
}

/// Handle a crossterm event.
pub fn handle_event(app: &mut TuiApp, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        _ => {}
    }
}

/// Handle keyboard input for the current phase.
pub fn handle_key(app: &mut TuiApp, key: KeyEvent) {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    if app.phase() == Phase::Input {
        handle_input_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return;
        }
        KeyCode::Char('r') => {
            app.restart();
            return;
        }
        _ => {}
    }

    match app.phase() {
        Phase::Picking => handle_picking_key(app, key),
        Phase::Reading => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
            _ => {}
        },
        Phase::Input | Phase::Shuffling => {}
    }
}

fn handle_input_key(app: &mut TuiApp, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_question(),
        KeyCode::Esc => app.clear_input(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Left => app.cursor_left(),
        KeyCode::Right => app.cursor_right(),
        KeyCode::Char(c) => app.push_char(c),
        _ => {}
    }
}

fn handle_picking_key(app: &mut TuiApp, key: KeyEvent) {
    let session = app.driver.session();
    if session.is_revealing() {
        return;
    }
    match key.code {
        KeyCode::Enter if session.can_reveal() => app.reveal(),
        KeyCode::Enter => app.pick_highlighted(),
        KeyCode::Down if !session.is_spread() => {
            app.driver.toggle_spread();
        }
        KeyCode::Up if session.is_spread() => {
            app.driver.toggle_spread();
        }
        KeyCode::Left | KeyCode::Char('h') => app.move_deck_cursor(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_deck_cursor(1),
        _ => {}
    }
}

/// Main draw function.
fn draw(frame: &mut Frame, app: &TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    screens::draw(frame, app, chunks[0]);

    let status = Paragraph::new(app.status_hint())
        .style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[1]);

    if app.show_help {
        crate::shared::draw_help_popup(frame);
    }
}
