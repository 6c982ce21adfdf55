//! The session controller
//!
//! [`SessionController`] owns every piece of mutable drill state: the live
//! question, the running totals, the session timer and the two scheduled
//! tasks (the periodic clock tick and the one-shot auto-advance after an
//! answer). Nothing here blocks or spawns; the host calls [`poll`] from its
//! event loop and the controller fires whatever has come due on its
//! [`Clock`].
//!
//! # State machine
//!
//! ```text
//! NotStarted --select_operation--> Running <--toggle_pause--> Paused
//! ```
//!
//! There is no terminal state.
//!
//! # Stale auto-advance
//!
//! Every issued question gets a fresh generation number, and the pending
//! auto-advance remembers the generation it was scheduled for. Selecting an
//! operation drops the pending advance outright, and a pending advance whose
//! generation no longer matches the live question is discarded when it comes
//! due, so a late callback can never overwrite a newer question.
//!
//! [`poll`]: SessionController::poll

use super::clock::Clock;
use super::error::{AnswerError, ConfigError};
use super::operation::Operation;
use super::question::{parse_answer, Answer, Question};
use super::source::NumberSource;
use super::stats::{elapsed_text, SessionStats};
use super::surface::{FeedbackStyle, Surface};
use super::timer::SessionTimer;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Shown until the first operation is selected
pub const WELCOME_PROMPT: &str = "Pick a mode (Addition, Subtraction, ...)";
pub const FEEDBACK_CORRECT: &str = "✓ Correct";
pub const FEEDBACK_INVALID: &str = "Please enter a valid number";
pub const PAUSE_LABEL: &str = "Pause";
pub const RESUME_LABEL: &str = "Resume";

/// Timing knobs for the controller.
///
/// Both durations are non-zero; [`DrillConfig::new`] is the only way to
/// build one besides the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillConfig {
    /// Interval of the periodic timer/speed refresh
    tick_interval: Duration,
    /// Pause between recording an answer and showing the next question
    advance_delay: Duration,
}

impl DrillConfig {
    pub fn new(tick_interval: Duration, advance_delay: Duration) -> Result<Self, ConfigError> {
        if tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        if advance_delay.is_zero() {
            return Err(ConfigError::ZeroAdvanceDelay);
        }
        Ok(DrillConfig {
            tick_interval,
            advance_delay,
        })
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn advance_delay(&self) -> Duration {
        self.advance_delay
    }
}

impl Default for DrillConfig {
    fn default() -> Self {
        DrillConfig {
            tick_interval: Duration::from_secs(1),
            advance_delay: Duration::from_millis(250),
        }
    }
}

/// Coarse session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    Running,
    Paused,
}

/// Result of a submission that was a valid number (or blank)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubmitOutcome {
    /// Blank input, no live question, or the live question was already answered
    Ignored,
    Correct,
    Incorrect { expected: Answer },
}

#[derive(Debug, Clone, Copy)]
struct LiveQuestion {
    question: Question,
    answered: bool,
}

#[derive(Debug, Clone, Copy)]
struct PendingAdvance {
    due: Duration,
    generation: u64,
}

/// Owns all drill state and renders into a [`Surface`]
pub struct SessionController<S, C, R> {
    surface: S,
    clock: C,
    source: R,
    config: DrillConfig,

    timer: SessionTimer,
    stats: SessionStats,

    /// Mode of the live question; reused by the auto-advance
    operation: Option<Operation>,
    live: Option<LiveQuestion>,

    /// Bumped on every issued question
    generation: u64,
    pending_advance: Option<PendingAdvance>,

    /// `None` whenever the session is not running
    next_tick: Option<Duration>,
}

impl<S: Surface, C: Clock, R: NumberSource> SessionController<S, C, R> {
    /// Create a controller and paint the neutral initial state
    pub fn new(surface: S, clock: C, source: R, config: DrillConfig) -> Self {
        let mut controller = SessionController {
            surface,
            clock,
            source,
            config,
            timer: SessionTimer::new(),
            stats: SessionStats::new(),
            operation: None,
            live: None,
            generation: 0,
            pending_advance: None,
            next_tick: None,
        };
        controller.render_initial();
        controller
    }

    fn render_initial(&mut self) {
        self.surface.show_question(WELCOME_PROMPT);
        self.surface.clear_answer_input();
        self.surface.show_feedback("", FeedbackStyle::Neutral);
        self.surface.show_correct_ratio(&self.stats.ratio_text());
        self.surface.set_pause_button_label(PAUSE_LABEL);
        self.render_clock();
    }

    /// Switch to `operation`, starting the session on first use, and issue a
    /// new question. Any pending auto-advance is dropped.
    pub fn select_operation(&mut self, operation: Operation) {
        let now = self.clock.now();
        if self.timer.start(now) {
            info!(%operation, "session started");
            self.next_tick = Some(now + self.config.tick_interval);
            self.render_clock();
        }
        self.issue_question(operation);
    }

    fn issue_question(&mut self, operation: Operation) {
        self.pending_advance = None;
        self.generation += 1;

        let question = Question::generate(operation, &mut self.source);
        self.stats.record_issued();
        self.operation = Some(operation);
        self.live = Some(LiveQuestion {
            question,
            answered: false,
        });
        debug!(
            generation = self.generation,
            question = %question.text(),
            answer = %question.answer(),
            "issued question"
        );

        self.surface.show_question(&question.text());
        self.surface.clear_answer_input();
        self.surface.show_feedback("", FeedbackStyle::Neutral);
    }

    /// Evaluate typed text against the live question.
    ///
    /// Non-numeric text shows the invalid-number feedback and returns an
    /// error without touching any counter. A recorded answer (right or wrong)
    /// schedules the next question after the configured delay.
    pub fn submit_answer(&mut self, raw: &str) -> Result<SubmitOutcome, AnswerError> {
        let Some(live) = self.live.filter(|live| !live.answered) else {
            debug!("submission ignored: no open question");
            return Ok(SubmitOutcome::Ignored);
        };

        let given = match parse_answer(raw) {
            Ok(Some(value)) => value,
            Ok(None) => return Ok(SubmitOutcome::Ignored),
            Err(err) => {
                warn!(%err, "rejected answer");
                self.surface
                    .show_feedback(FEEDBACK_INVALID, FeedbackStyle::Error);
                return Err(err);
            }
        };

        let expected = live.question.answer();
        let outcome = if expected.matches(given) {
            self.stats.record_correct();
            self.surface
                .show_feedback(FEEDBACK_CORRECT, FeedbackStyle::Success);
            SubmitOutcome::Correct
        } else {
            self.surface.show_feedback(
                &format!("✗ Wrong, correct: {}", expected),
                FeedbackStyle::Error,
            );
            SubmitOutcome::Incorrect { expected }
        };
        debug!(given, %expected, ?outcome, "answer recorded");

        self.surface.show_correct_ratio(&self.stats.ratio_text());
        self.live = Some(LiveQuestion {
            answered: true,
            ..live
        });
        self.pending_advance = Some(PendingAdvance {
            due: self.clock.now() + self.config.advance_delay,
            generation: self.generation,
        });

        Ok(outcome)
    }

    /// Flip between running and paused. No-op before the session starts.
    pub fn toggle_pause(&mut self) -> SessionPhase {
        let now = self.clock.now();
        if self.timer.pause(now) {
            // Tick fully stopped; resume schedules a fresh one
            self.next_tick = None;
            self.surface.set_pause_button_label(RESUME_LABEL);
            self.render_clock();
            info!(elapsed_ms = self.timer.elapsed(now).as_millis() as u64, "paused");
        } else if self.timer.resume(now) {
            self.next_tick = Some(now + self.config.tick_interval);
            self.surface.set_pause_button_label(PAUSE_LABEL);
            self.render_clock();
            info!(elapsed_ms = self.timer.elapsed(now).as_millis() as u64, "resumed");
        }
        self.phase()
    }

    /// Fire whatever has come due: the periodic tick and the auto-advance.
    pub fn poll(&mut self) {
        let now = self.clock.now();

        if let Some(mut due) = self.next_tick {
            if now >= due {
                // Catch up without replaying missed ticks
                while due <= now {
                    due += self.config.tick_interval;
                }
                self.next_tick = Some(due);
                self.render_clock();
            }
        }

        if let Some(pending) = self.pending_advance {
            if now >= pending.due {
                self.pending_advance = None;
                match self.operation {
                    Some(operation) if pending.generation == self.generation => {
                        self.issue_question(operation);
                        self.surface.focus_answer_input();
                    }
                    _ => debug!(
                        scheduled_for = pending.generation,
                        live = self.generation,
                        "dropped stale auto-advance"
                    ),
                }
            }
        }
    }

    fn render_clock(&mut self) {
        let secs = self.timer.elapsed_secs(self.clock.now());
        self.surface.show_timer(&elapsed_text(secs));
        self.surface.show_speed(&self.stats.speed_text(secs));
    }

    /// Earliest moment `poll` has work to do, if any
    pub fn next_deadline(&self) -> Option<Duration> {
        let advance = self.pending_advance.map(|p| p.due);
        match (self.next_tick, advance) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.timer.is_paused() {
            SessionPhase::Paused
        } else if self.timer.is_running() {
            SessionPhase::Running
        } else {
            SessionPhase::NotStarted
        }
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.live.as_ref().map(|live| &live.question)
    }

    pub fn has_pending_advance(&self) -> bool {
        self.pending_advance.is_some()
    }

    pub fn is_ticking(&self) -> bool {
        self.next_tick.is_some()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.timer.elapsed_secs(self.clock.now())
    }

    pub fn config(&self) -> &DrillConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The host edits its own input buffer through this
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
