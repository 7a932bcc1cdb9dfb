//! Terminal setup, teardown, and main event loop.

use std::io;
use std::time::Instant;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tracing::info;

use tenzies_core::{FaceSource, IdSource};

use crate::app::TuiApp;
use crate::board;
use crate::error::TuiResult;

/// Launch the TUI application.
pub fn run<F: FaceSource, I: IdSource>(mut app: TuiApp<F, I>) -> TuiResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!("terminal ready");

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();
    info!("terminal restored");

    result
}

/// Main event loop. Input is handled as it arrives; between inputs the
/// loop wakes once per tick to animate.
fn run_loop<B: Backend, F: FaceSource, I: IdSource>(
    terminal: &mut Terminal<B>,
    app: &mut TuiApp<F, I>,
) -> TuiResult<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        if app.should_quit {
            return Ok(());
        }

        let timeout = app.tick_rate().saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            handle_event(app, event::read()?);
        }
        if last_tick.elapsed() >= app.tick_rate() {
            app.tick();
            last_tick = Instant::now();
        }
    }
}

/// Handle a crossterm event.
pub fn handle_event<F: FaceSource, I: IdSource>(app: &mut TuiApp<F, I>, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) if !app.show_help => app.handle_mouse(mouse),
        _ => {}
    }
}

/// Global keys first, then the board.
fn handle_key<F: FaceSource, I: IdSource>(app: &mut TuiApp<F, I>, key: event::KeyEvent) {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.show_help {
        // Any of these closes the popup; everything else is swallowed.
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        _ => app.handle_key(key),
    }
}

/// Main draw function.
fn draw<F: FaceSource, I: IdSource>(frame: &mut Frame, app: &mut TuiApp<F, I>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Board
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let view = app.view();
    let layout = board::draw_board(frame, &view, app.focus, chunks[0]);
    app.set_layout(layout);

    if view.celebrate() {
        frame.render_widget(&app.confetti, chunks[0]);
    }

    let status = Paragraph::new(app.status_hint())
        .style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[1]);

    if app.show_help {
        crate::shared::draw_help_popup(frame);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::backend::TestBackend;
    use tenzies_core::{GameSession, ScriptedFaces, SequentialIds};

    use super::*;
    use crate::config::TuiConfig;

    type TestApp = TuiApp<ScriptedFaces, SequentialIds>;

    fn app() -> TestApp {
        let config = TuiConfig::default().with_seed(3);
        TuiApp::with_session(
            GameSession::new(ScriptedFaces::constant(6), SequentialIds::new()),
            &config,
        )
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn screen(app: &mut TestApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(64, 26)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buf = terminal.backend().buffer();
        buf.content
            .chunks(usize::from(buf.area.width))
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn q_and_ctrl_c_quit() {
        let mut a = app();
        handle_event(&mut a, key(KeyCode::Char('q')));
        assert!(a.should_quit);

        let mut a = app();
        handle_event(
            &mut a,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        );
        assert!(a.should_quit);
    }

    #[test]
    fn help_popup_swallows_keys() {
        let mut a = app();
        handle_event(&mut a, key(KeyCode::Char('?')));
        assert!(a.show_help);

        handle_event(&mut a, key(KeyCode::Char('1')));
        assert_eq!(a.session().dice().held_count(), 0);
        assert!(!a.should_quit);

        handle_event(&mut a, key(KeyCode::Esc));
        assert!(!a.show_help);
        assert!(!a.should_quit);
    }

    #[test]
    fn draw_records_layout_for_mouse() {
        let mut a = app();
        screen(&mut a);
        let layout = crate::board::BoardLayout::compute(Rect::new(1, 1, 62, 23)).unwrap();
        let die = layout.dice[0];
        handle_event(
            &mut a,
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: die.x + 1,
                row: die.y + 1,
                modifiers: KeyModifiers::NONE,
            }),
        );
        assert!(a.session().die_at(0).unwrap().held);
    }

    #[test]
    fn won_screen_shows_announcement_and_status() {
        let mut a = app();
        for c in ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'] {
            handle_event(&mut a, key(KeyCode::Char(c)));
        }
        let text = screen(&mut a);
        assert!(text.contains("Congratulations! You won!"));
        assert!(text.contains("New Game"));
        assert!(text.contains("You won!  Enter/r:new game"));
    }

    #[test]
    fn help_popup_is_drawn() {
        let mut a = app();
        handle_event(&mut a, key(KeyCode::Char('?')));
        let text = screen(&mut a);
        assert!(text.contains("Keyboard Shortcuts"));
    }
}
