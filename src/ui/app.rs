//! Main TUI application state and logic

use crate::drill::{
    AnswerError, Clock, NumberSource, Operation, SessionController, SessionPhase, SubmitOutcome,
    Surface,
};
use crate::ui::screen::Screen;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Upper bound on how long the loop waits for a key before polling the session
const INPUT_POLL: Duration = Duration::from_millis(50);

/// The main application state
pub struct App<C, R> {
    /// The drill session, rendering into the screen
    pub session: SessionController<Screen, C, R>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time the pause key was pressed (for debouncing)
    pub last_pause_press: Instant,
}

impl<C: Clock, R: NumberSource> App<C, R> {
    /// Create a new app around a session controller
    pub fn new(session: SessionController<Screen, C, R>) -> Self {
        App {
            session,
            should_quit: false,
            status_message: String::from("Pick a mode to start"),
            last_pause_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// The surface state the panes draw from
    pub fn screen(&self) -> &Screen {
        self.session.surface()
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.session.poll();
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Use poll with timeout so ticks and the auto-advance keep firing
            if event::poll(INPUT_POLL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        let stats = self.session.stats();
        info!(
            correct = stats.correct(),
            total = stats.total(),
            elapsed_secs = self.session.elapsed_secs(),
            "session closed"
        );
        Ok(())
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // question
                Constraint::Length(3), // answer input
                Constraint::Length(1), // feedback
                Constraint::Length(3), // stats
                Constraint::Min(0),
                Constraint::Length(1), // status bar
            ])
            .split(size);

        let screen = self.session.surface();

        super::panes::render_question_pane(
            frame,
            rows[0],
            &screen.question,
            self.session.operation(),
        );

        super::panes::render_answer_pane(frame, rows[1], screen);

        super::panes::render_feedback_line(
            frame,
            rows[2],
            &screen.feedback,
            screen.feedback_style,
        );

        super::panes::render_stats_row(
            frame,
            rows[3],
            &screen.timer,
            &screen.correct_ratio,
            &screen.speed,
            self.session.phase() == SessionPhase::Paused,
        );

        super::panes::render_status_bar(
            frame,
            rows[5],
            &self.status_message,
            self.session.phase(),
            &screen.pause_label,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
                // 200ms debounce to prevent key repeat from flapping the pause state
                if self.last_pause_press.elapsed() >= Duration::from_millis(200) {
                    self.last_pause_press = Instant::now();
                    self.toggle_pause();
                }
            }
            KeyCode::Char(c) => {
                if let Some(op) = Operation::from_key(c) {
                    self.select_operation(op);
                } else if !self.session.surface_mut().push_answer_char(c) {
                    debug!(key = %c, "ignored key");
                }
            }
            KeyCode::Backspace => {
                self.session.surface_mut().pop_answer_char();
            }
            KeyCode::Enter => {
                self.submit_answer();
            }
            _ => {}
        }
    }

    /// Start a question in `op`
    pub fn select_operation(&mut self, op: Operation) {
        self.session.select_operation(op);
        self.session.surface_mut().focus_answer_input();
        self.status_message = format!("{} mode", op.label());
    }

    /// Submit whatever is in the input field (Enter or the check action)
    pub fn submit_answer(&mut self) {
        let raw = self.session.surface().answer.clone();
        match self.session.submit_answer(&raw) {
            Ok(SubmitOutcome::Correct) => {
                self.status_message = "Nice!".to_string();
            }
            Ok(SubmitOutcome::Incorrect { expected }) => {
                self.status_message = format!("Answer was {}", expected);
            }
            Ok(SubmitOutcome::Ignored) => {}
            Err(AnswerError::NotANumber(text)) => {
                self.status_message = format!("Cannot read '{}'", text);
            }
        }
    }

    /// Toggle pause (the pause button)
    pub fn toggle_pause(&mut self) {
        self.status_message = match self.session.toggle_pause() {
            SessionPhase::NotStarted => "Nothing to pause yet".to_string(),
            SessionPhase::Running => {
                self.session.surface_mut().focus_answer_input();
                "Resumed".to_string()
            }
            SessionPhase::Paused => {
                self.session.surface_mut().blur_answer_input();
                "Paused".to_string()
            }
        };
    }
}
