//! Application state and logic for the interactive UI

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tui_input::backend::crossterm::EventHandler as InputEventHandler;
use tui_input::Input;

use crate::board::{ActivityBoard, Snapshot};
use crate::config::Config;
use crate::filter::FilterController;

use super::events::Event;
use super::messages::{Message, MessageType};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Normal filtering/selection mode
    Normal,
    /// Help screen
    Help,
}

/// Main application state
pub struct App {
    /// Current application mode
    pub mode: AppMode,
    /// The screen's state machine
    pub board: ActivityBoard,
    /// Latest snapshot pushed by the board subscription
    snapshot: Rc<RefCell<Snapshot>>,
    /// Filter text field
    pub input: Input,
    /// Index of the highlighted tile within the display list
    pub cursor: usize,
    /// Tiles per row, recorded by the grid renderer for Up/Down movement
    pub grid_columns: Cell<usize>,
    /// Messages to display
    pub messages: Vec<Message>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &Config, preselect: Option<&str>) -> Self {
        let window = Duration::from_millis(config.debounce_ms);
        let mut board = ActivityBoard::new(FilterController::new(window));

        // The draw path reads whatever the board last pushed, exactly like
        // the original screen's bound views.
        let snapshot = Rc::new(RefCell::new(Snapshot::default()));
        let sink = Rc::clone(&snapshot);
        board.subscribe(move |state| *sink.borrow_mut() = state.clone());

        board.seed(config.activities.iter().cloned());

        if let Some(code) = preselect {
            let found = board
                .snapshot()
                .display
                .iter()
                .find(|option| option.code() == code)
                .cloned();
            match found {
                Some(option) => board.select(option),
                None => tracing::warn!(code, "preselect activity not in catalog"),
            }
        }

        App {
            mode: AppMode::Normal,
            board,
            snapshot,
            input: Input::default(),
            cursor: 0,
            grid_columns: Cell::new(1),
            messages: vec![Message::new(
                MessageType::Info,
                "Pick what you're doing - F1 for help".to_string(),
            )],
        }
    }

    /// Latest board snapshot
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.borrow().clone()
    }

    /// Handle an input event. Returns false when the app should exit.
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Tick => {
                self.on_tick();
                Ok(true)
            }
            Event::Key(key) => {
                if key.kind == KeyEventKind::Release {
                    return Ok(true);
                }
                match self.mode {
                    AppMode::Normal => self.handle_normal_mode(key),
                    AppMode::Help => self.handle_help_mode(key),
                }
            }
        }
    }

    /// Handle events in normal mode
    fn handle_normal_mode(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(false); // Exit application
            }
            KeyCode::Esc => {
                if self.input.value().is_empty() {
                    return Ok(false);
                }
                self.input.reset();
                self.board.input_changed("", Instant::now());
            }
            KeyCode::F(1) => {
                self.mode = AppMode::Help;
            }
            KeyCode::Enter => {
                self.select_highlighted();
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.add_from_filter();
            }
            KeyCode::Tab => {
                self.move_cursor(1);
            }
            KeyCode::BackTab => {
                self.move_cursor(-1);
            }
            KeyCode::Up => {
                self.move_cursor(-(self.grid_columns.get() as isize));
            }
            KeyCode::Down => {
                self.move_cursor(self.grid_columns.get() as isize);
            }
            _ => {
                // Everything else edits the filter field.
                let before = self.input.value().to_string();
                self.input.handle_event(&TermEvent::Key(key));
                if self.input.value() != before {
                    self.board.input_changed(self.input.value(), Instant::now());
                }
            }
        }
        Ok(true)
    }

    /// Handle events in help mode
    fn handle_help_mode(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') => {
                self.mode = AppMode::Normal;
            }
            _ => {}
        }
        Ok(true)
    }

    /// Periodic work: debounce poll and message expiry.
    fn on_tick(&mut self) {
        if self.board.tick(Instant::now()) {
            let len = self.snapshot.borrow().display.len();
            self.cursor = self.cursor.min(len.saturating_sub(1));
        }
        self.messages.retain(|m| !m.is_expired());
    }

    /// Select the tile under the cursor as the current activity.
    fn select_highlighted(&mut self) {
        let option = self.snapshot.borrow().display.get(self.cursor).cloned();
        let Some(option) = option else {
            return;
        };

        self.board.select(option.clone());
        self.messages.clear();
        self.messages.push(Message::new(
            MessageType::Success,
            format!("Now doing: {}", option.code()),
        ));
    }

    /// Add the filter text as a new activity, if the affordance is visible.
    ///
    /// An empty code is a silent no-op per the board's contract; that state
    /// is unreachable here anyway since the affordance needs a non-empty
    /// applied filter.
    fn add_from_filter(&mut self) {
        if !self.snapshot.borrow().show_add {
            return;
        }

        let code = self.input.value().to_string();
        match self.board.add(&code) {
            Ok(()) => {
                self.messages.clear();
                self.messages.push(Message::new(
                    MessageType::Success,
                    format!("Added '{}'", code),
                ));
                // Clearing the field flows through the same debounced path
                // as keystrokes, matching the original screen.
                self.input.reset();
                self.board.input_changed("", Instant::now());
            }
            Err(err) => {
                tracing::debug!(%err, "add rejected");
            }
        }
    }

    /// Move the tile cursor, clamped to the display list.
    fn move_cursor(&mut self, delta: isize) {
        let len = self.snapshot.borrow().display.len();
        if len == 0 {
            return;
        }
        let next = (self.cursor as isize + delta).clamp(0, len as isize - 1);
        self.cursor = next as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            activities: vec!["Commute".to_string(), "Work".to_string()],
            // Zero window: the next tick applies pending input immediately.
            debounce_ms: 0,
        }
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_event(key(KeyCode::Char(c))).unwrap();
        }
        app.handle_event(Event::Tick).unwrap();
    }

    #[test]
    fn test_typing_filters_the_grid() {
        let mut app = App::new(&test_config(), None);
        assert_eq!(app.snapshot().display.len(), 2);

        type_str(&mut app, "wo");

        let snapshot = app.snapshot();
        assert_eq!(snapshot.display.len(), 1);
        assert_eq!(snapshot.display[0].code(), "Work");
        assert!(snapshot.show_add);
    }

    #[test]
    fn test_enter_selects_highlighted_tile() {
        let mut app = App::new(&test_config(), None);
        app.handle_event(key(KeyCode::Tab)).unwrap();
        app.handle_event(key(KeyCode::Enter)).unwrap();

        let current = app.snapshot().current.unwrap();
        assert_eq!(current.code(), "Work");
    }

    #[test]
    fn test_ctrl_n_adds_the_filter_text() {
        let mut app = App::new(&test_config(), None);
        type_str(&mut app, "Gym");
        assert!(app.snapshot().show_add);

        app.handle_event(ctrl('n')).unwrap();
        assert_eq!(app.board.catalog().full_list().len(), 3);
        assert_eq!(app.input.value(), "");

        // The cleared field re-applies an empty filter on the next tick.
        app.handle_event(Event::Tick).unwrap();
        let snapshot = app.snapshot();
        assert_eq!(snapshot.display.len(), 3);
        assert!(!snapshot.show_add);
    }

    #[test]
    fn test_ctrl_n_without_affordance_is_ignored() {
        let mut app = App::new(&test_config(), None);
        app.handle_event(ctrl('n')).unwrap();
        assert_eq!(app.board.catalog().full_list().len(), 2);
    }

    #[test]
    fn test_esc_clears_filter_then_quits() {
        let mut app = App::new(&test_config(), None);
        type_str(&mut app, "wo");

        assert!(app.handle_event(key(KeyCode::Esc)).unwrap());
        assert_eq!(app.input.value(), "");
        app.handle_event(Event::Tick).unwrap();
        assert_eq!(app.snapshot().display.len(), 2);

        // Second Esc with an empty field exits.
        assert!(!app.handle_event(key(KeyCode::Esc)).unwrap());
    }

    #[test]
    fn test_cursor_clamps_when_filter_shrinks_grid() {
        let mut app = App::new(&test_config(), None);
        app.handle_event(key(KeyCode::Tab)).unwrap();
        assert_eq!(app.cursor, 1);

        type_str(&mut app, "comm");
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_preselect() {
        let app = App::new(&test_config(), Some("Work"));
        assert_eq!(app.snapshot().current.unwrap().code(), "Work");
    }

    #[test]
    fn test_help_mode_toggles() {
        let mut app = App::new(&test_config(), None);
        app.handle_event(key(KeyCode::F(1))).unwrap();
        assert_eq!(app.mode, AppMode::Help);

        // 'q' closes help instead of typing into the filter.
        app.handle_event(key(KeyCode::Char('q'))).unwrap();
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.input.value(), "");
    }
}
