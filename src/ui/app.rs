//! Main TUI application state and logic

use crate::algorithms::ProblemInput;
use crate::input::{self, format_numbers};
use crate::playback;
use crate::registry::{self, Transport};
use crate::visualizer::Visualizer;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use super::panes::{
    render_array_pane, render_description_pane, render_source_pane, render_state_pane,
    render_status_bar, ArrayRenderData, SourceRenderData, SourceScrollState, StatusRenderData,
};

/// Upper bound on how long the loop waits for a key before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    State,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::State,
            FocusedPane::State => FocusedPane::Source,
        }
    }
}

/// What the keyboard is currently editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Numbers,
    Target,
}

/// The main application state
pub struct App {
    /// The mounted visualization
    pub visualizer: Visualizer,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    pub source_scroll: SourceScrollState,
    pub state_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
    pub status_is_error: bool,

    pub input_mode: InputMode,
    pub input_buffer: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(visualizer: Visualizer) -> Self {
        App {
            visualizer,
            focused_pane: FocusedPane::Source,
            source_scroll: SourceScrollState::default(),
            state_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let now = Instant::now();
            self.tick(now);

            // Wake up no later than the next scheduled tick
            let timeout = self
                .visualizer
                .controller()
                .next_deadline()
                .map_or(POLL_INTERVAL, |due| {
                    due.saturating_duration_since(now).min(POLL_INTERVAL)
                });

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance auto-play if a tick is due
    pub fn tick(&mut self, now: Instant) {
        let mut controller = self.visualizer.controller_mut();
        if controller.poll(now) {
            let done = !controller.is_playing();
            drop(controller);
            self.set_status(if done { "Playback complete" } else { "Playing..." });
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        // Left column: Source (top) | Description (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(6)])
            .split(columns[0]);

        // Right column: Array (top) | State (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(columns[1]);

        let step = self.visualizer.current_step();
        let algorithm = self.visualizer.algorithm();
        let (current_step, total_steps, is_playing, speed) = {
            let controller = self.visualizer.controller();
            (
                controller.step_index(),
                controller.total_steps(),
                controller.is_playing(),
                controller.speed(),
            )
        };

        render_source_pane(
            frame,
            left_rows[0],
            SourceRenderData {
                listing: self.visualizer.listing(),
                current_line: self.visualizer.highlighted_line(),
                is_terminal: step.is_terminal(),
            },
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        render_description_pane(frame, left_rows[1], &step, false);

        let input = self.visualizer.input();
        render_array_pane(
            frame,
            right_rows[0],
            ArrayRenderData {
                name: algorithm.input_name(),
                values: &input.nums,
                step: &step,
                target: algorithm.uses_target().then_some(input.target),
            },
            false,
        );

        render_state_pane(
            frame,
            right_rows[1],
            &step,
            self.focused_pane == FocusedPane::State,
            &mut self.state_scroll,
        );

        let editing = match self.input_mode {
            InputMode::Normal => None,
            InputMode::Numbers => Some(("numbers", self.input_buffer.as_str())),
            InputMode::Target => Some(("target", self.input_buffer.as_str())),
        };

        render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                message: &self.status_message,
                is_error: self.status_is_error,
                current_step,
                total_steps,
                is_playing,
                speed,
                editing,
            },
        );
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }

    /// Invoke the active visualization's transport through the registry
    fn with_transport(&mut self, f: impl FnOnce(&dyn Transport)) {
        match registry::current_active() {
            Some(binding) => f(binding.transport()),
            None => self.set_error("No active visualization"),
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Numbers | InputMode::Target => self.handle_edit_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.with_transport(|t| t.toggle_play(Instant::now()));
                    let playing = self.visualizer.controller().is_playing();
                    self.set_status(if playing { "Playing..." } else { "Paused" });
                }
            }
            KeyCode::Right => {
                let before = self.visualizer.controller().step_index();
                self.with_transport(|t| t.step_forward());
                if self.visualizer.controller().step_index() == before {
                    self.set_status("Already at the last step");
                } else {
                    self.set_status("Stepped forward");
                }
            }
            KeyCode::Left => {
                let before = self.visualizer.controller().step_index();
                self.with_transport(|t| t.step_back());
                if self.visualizer.controller().step_index() == before {
                    self.set_status("Already at the first step");
                } else {
                    self.set_status("Stepped backward");
                }
            }
            KeyCode::Backspace => {
                self.with_transport(|t| t.restart());
                self.set_status("Jumped to start");
            }
            KeyCode::Enter => {
                self.visualizer.controller_mut().jump_to_end();
                self.set_status("Jumped to end");
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let speed = playback::faster_speed(self.visualizer.controller().speed());
                self.with_transport(|t| t.set_speed(speed));
                self.set_status(format!("Speed {}x", speed));
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                let speed = playback::slower_speed(self.visualizer.controller().speed());
                self.with_transport(|t| t.set_speed(speed));
                self.set_status(format!("Speed {}x", speed));
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                let language = self.visualizer.cycle_language();
                let listing = self.visualizer.listing();
                if listing.fell_back() {
                    self.set_status(format!(
                        "No {} listing, showing {}",
                        language, listing.language
                    ));
                } else {
                    self.set_status(format!("Language: {}", language));
                }
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                let next = self.visualizer.algorithm().next();
                self.visualizer.set_algorithm(next);
                self.source_scroll = SourceScrollState::default();
                self.state_scroll = 0;
                self.set_status(format!("Algorithm: {}", next));
            }
            KeyCode::Char('i') | KeyCode::Char('I') => {
                self.input_mode = InputMode::Numbers;
                self.input_buffer = format_numbers(&self.visualizer.input().nums);
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.input_mode = InputMode::Target;
                self.input_buffer = self.visualizer.input().target.to_string();
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::State => {
                    self.state_scroll = self.state_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::State => {
                    self.state_scroll = self.state_scroll.saturating_add(1);
                }
            },
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
                self.set_status("Edit cancelled");
            }
            KeyCode::Enter => self.apply_edit(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, '-' | ',' | ' ' | '[' | ']') => {
                self.input_buffer.push(c);
            }
            _ => {}
        }
    }

    /// Validate the edit buffer and hand the result to the visualizer
    fn apply_edit(&mut self) {
        let current = self.visualizer.input().clone();
        let parsed = match self.input_mode {
            InputMode::Numbers => input::parse_numbers(&self.input_buffer)
                .map(|nums| ProblemInput::new(nums, current.target)),
            InputMode::Target => input::parse_target(&self.input_buffer)
                .map(|target| ProblemInput::new(current.nums.clone(), target)),
            InputMode::Normal => return,
        };

        match parsed {
            Ok(input) => {
                self.visualizer.set_input(input);
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
                self.state_scroll = 0;
                let steps = self.visualizer.controller().total_steps();
                self.set_status(format!("Input updated, {} steps", steps));
            }
            Err(err) => {
                // Stay in edit mode so the user can fix the text
                tracing::debug!(error = %err, "input rejected");
                self.set_error(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;
    use crate::sync::Language;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::new(Visualizer::mount(
            Algorithm::ContainsDuplicate,
            ProblemInput::new(vec![1, 2, 3, 1], 0),
            Language::Python,
        ))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn arrows_step_through_registry() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.visualizer.controller().step_index(), 2);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.visualizer.controller().step_index(), 1);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.visualizer.controller().step_index(), 0);
    }

    #[test]
    fn invalid_input_is_rejected_before_engine() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('i'));
        app.input_buffer = "1, x".to_string();
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Numbers);
        assert!(app.status_is_error);
        // Engine untouched
        assert_eq!(app.visualizer.controller().step_index(), 1);
        assert_eq!(app.visualizer.input().nums, vec![1, 2, 3, 1]);
    }

    #[test]
    fn valid_input_regenerates_trace() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        app.input_buffer.clear();
        for c in "5, 6".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.visualizer.input().nums, vec![5, 6]);
        assert_eq!(app.visualizer.controller().total_steps(), 6);
    }

    #[test]
    fn renders_without_panicking() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('l'));
        terminal.draw(|f| app.render(f)).unwrap();
    }
}
