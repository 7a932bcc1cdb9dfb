//! Top-level application state: the game session plus everything the
//! terminal front end tracks around it.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use tenzies_core::{
    BoardView, FaceSource, GameEvent, GameSession, IdSource, RandomFaces, Update, UuidIds,
};

use crate::board::{BoardLayout, Control};
use crate::config::TuiConfig;
use crate::confetti::Confetti;

/// Main application state for the terminal UI.
pub struct TuiApp<F = RandomFaces, I = UuidIds> {
    session: GameSession<F, I>,
    /// Control holding keyboard focus.
    pub focus: Control,
    /// Celebration overlay.
    pub confetti: Confetti,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    layout: Option<BoardLayout>,
    rng: StdRng,
    confetti_count: usize,
    tick_rate: Duration,
}

impl TuiApp {
    /// Create an app with a fresh production game.
    pub fn new(config: &TuiConfig) -> Self {
        Self::with_session(GameSession::from_config(&config.game), config)
    }
}

impl<F: FaceSource, I: IdSource> TuiApp<F, I> {
    /// Wrap an existing session.
    pub fn with_session(session: GameSession<F, I>, config: &TuiConfig) -> Self {
        let rng = match config.game.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            session,
            focus: Control::Primary,
            confetti: Confetti::new(),
            show_help: false,
            should_quit: false,
            layout: None,
            rng,
            confetti_count: config.confetti,
            tick_rate: config.tick_rate,
        }
    }

    /// The game being played.
    pub fn session(&self) -> &GameSession<F, I> {
        &self.session
    }

    /// Presentation data for the current dice.
    pub fn view(&self) -> BoardView {
        self.session.view()
    }

    /// Interval between animation ticks.
    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Remember where the board was last drawn, for mouse hit-testing.
    pub fn set_layout(&mut self, layout: Option<BoardLayout>) {
        self.layout = layout;
    }

    /// Apply a game event and react to the win edge.
    pub fn dispatch(&mut self, event: GameEvent) -> Update {
        let update = self.session.handle(event);
        if update.new_game {
            self.confetti.clear();
        }
        if update.just_won {
            self.focus = Control::Primary;
            self.confetti.burst(self.confetti_count, &mut self.rng);
            debug!(particles = self.confetti_count, "celebrating");
        }
        update
    }

    /// Press a control: hold a die or roll.
    pub fn activate(&mut self, control: Control) -> Option<Update> {
        let event = match control {
            Control::Die(i) => GameEvent::Hold(self.session.die_at(i)?.id),
            Control::Primary => GameEvent::Roll,
        };
        Some(self.dispatch(event))
    }

    /// Handle a key that the global handler did not consume.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
                self.focus = self.focus.prev();
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                self.focus = self.focus.next();
            }
            KeyCode::Up | KeyCode::Char('k') => self.focus = self.focus.up(),
            KeyCode::Down | KeyCode::Char('j') => self.focus = self.focus.down(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.activate(self.focus);
            }
            KeyCode::Char('r') => {
                self.dispatch(GameEvent::Roll);
            }
            KeyCode::Char(c) => {
                if let Some(i) = digit_to_position(c) {
                    self.activate(Control::Die(i));
                }
            }
            _ => {}
        }
    }

    /// Handle a mouse event: a left click focuses and presses a control.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(control) = self
            .layout
            .and_then(|l| l.hit_test(mouse.column, mouse.row))
        else {
            return;
        };
        self.focus = control;
        self.activate(control);
    }

    /// Advance the confetti animation while the game is won.
    pub fn tick(&mut self) {
        if self.confetti.is_active() && self.session.is_won() {
            self.confetti.tick(&mut self.rng);
        }
    }

    /// Context-sensitive status bar text.
    pub fn status_hint(&self) -> &'static str {
        if self.session.is_won() {
            "You won!  Enter/r:new game  ?:help  q:quit"
        } else {
            "\u{2190}/\u{2192}:focus  Enter/Space:hold/roll  1-0:hold die  r:roll  ?:help  q:quit"
        }
    }
}

/// Map `1`-`9` to positions 0-8 and `0` to position 9.
fn digit_to_position(c: char) -> Option<usize> {
    match c.to_digit(10)? {
        0 => Some(9),
        d => Some(d as usize - 1),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;
    use tenzies_core::{DieId, ScriptedFaces, SequentialIds};

    use super::*;

    type TestApp = TuiApp<ScriptedFaces, SequentialIds>;

    fn app(faces: ScriptedFaces) -> TestApp {
        let config = TuiConfig::default().with_seed(1).with_confetti(25);
        TuiApp::with_session(GameSession::new(faces, SequentialIds::new()), &config)
    }

    fn press(app: &mut TestApp, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn click(app: &mut TestApp, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    fn hold_all(app: &mut TestApp) {
        for c in ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'] {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn digits_map_to_positions() {
        assert_eq!(digit_to_position('1'), Some(0));
        assert_eq!(digit_to_position('9'), Some(8));
        assert_eq!(digit_to_position('0'), Some(9));
        assert_eq!(digit_to_position('x'), None);
    }

    #[test]
    fn digit_keys_toggle_holds() {
        let mut app = app(ScriptedFaces::new([1, 2, 3]));
        press(&mut app, KeyCode::Char('3'));
        assert!(app.session().die_at(2).unwrap().held);
        press(&mut app, KeyCode::Char('3'));
        assert!(!app.session().die_at(2).unwrap().held);
    }

    #[test]
    fn enter_activates_focused_control() {
        let mut app = app(ScriptedFaces::new([1, 2, 3]));
        assert_eq!(app.focus, Control::Primary);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.focus, Control::Die(0));
        press(&mut app, KeyCode::Enter);
        assert!(app.session().die_at(0).unwrap().held);
    }

    #[test]
    fn win_moves_focus_once_and_starts_confetti() {
        let mut app = app(ScriptedFaces::constant(2));
        press(&mut app, KeyCode::Right);
        hold_all(&mut app);

        assert!(app.session().is_won());
        assert_eq!(app.focus, Control::Primary);
        assert_eq!(app.confetti.particles().len(), 25);
        assert!(app.view().announcement().is_some());

        // Focus can leave the button while won and is not pulled back.
        press(&mut app, KeyCode::Left);
        assert_eq!(app.focus, Control::Die(9));
        app.tick();
        assert_eq!(app.focus, Control::Die(9));
    }

    #[test]
    fn roll_after_win_clears_confetti() {
        let mut app = app(ScriptedFaces::constant(5));
        hold_all(&mut app);
        let old: Vec<DieId> = app.session().dice().iter().map(|d| d.id).collect();

        press(&mut app, KeyCode::Char('r'));
        assert!(!app.session().is_won());
        assert!(!app.confetti.is_active());
        assert!(app.session().dice().iter().all(|d| !old.contains(&d.id)));
        assert_eq!(app.view().primary_label(), "Roll");
    }

    #[test]
    fn tick_only_animates_while_won() {
        let mut app = app(ScriptedFaces::constant(3));
        app.tick();
        assert!(!app.confetti.is_active());

        hold_all(&mut app);
        let before = app.confetti.particles().to_vec();
        app.tick();
        assert_ne!(app.confetti.particles(), before.as_slice());
    }

    #[test]
    fn mouse_click_holds_die() {
        let mut app = app(ScriptedFaces::new([4, 1]));
        let layout = BoardLayout::compute(Rect::new(0, 0, 60, 24)).unwrap();
        app.set_layout(Some(layout));

        let r = layout.dice[4];
        click(&mut app, r.x + 2, r.y + 1);
        assert_eq!(app.focus, Control::Die(4));
        assert!(app.session().die_at(4).unwrap().held);

        click(&mut app, 0, 0);
        assert_eq!(app.focus, Control::Die(4));
    }

    #[test]
    fn mouse_ignored_without_layout() {
        let mut app = app(ScriptedFaces::new([4, 1]));
        click(&mut app, 10, 10);
        assert_eq!(app.session().dice().held_count(), 0);
    }

    #[test]
    fn status_hint_follows_state() {
        let mut app = app(ScriptedFaces::constant(1));
        assert!(app.status_hint().contains("r:roll"));
        hold_all(&mut app);
        assert!(app.status_hint().contains("new game"));
    }
}
