//! Session timer with pause/resume
//!
//! Resuming behaves as if the start instant had been shifted forward by the
//! paused duration, so elapsed time never includes time spent paused.

use std::time::Duration;

/// Where the session clock stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    NotStarted,
    /// `started_at` is the effective start, already shifted past any pauses
    Running { started_at: Duration },
    /// `elapsed` is frozen at the moment of pausing
    Paused { elapsed: Duration },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTimer {
    state: TimerState,
}

impl SessionTimer {
    pub fn new() -> Self {
        SessionTimer {
            state: TimerState::NotStarted,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_started(&self) -> bool {
        self.state != TimerState::NotStarted
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.state, TimerState::Paused { .. })
    }

    /// Start the clock. Returns false if it was already started.
    pub fn start(&mut self, now: Duration) -> bool {
        if self.is_started() {
            return false;
        }
        self.state = TimerState::Running { started_at: now };
        true
    }

    /// Freeze at the current elapsed duration. No-op unless running.
    pub fn pause(&mut self, now: Duration) -> bool {
        match self.state {
            TimerState::Running { started_at } => {
                self.state = TimerState::Paused {
                    elapsed: now.saturating_sub(started_at),
                };
                true
            }
            _ => false,
        }
    }

    /// Continue from the frozen elapsed duration. No-op unless paused.
    pub fn resume(&mut self, now: Duration) -> bool {
        match self.state {
            TimerState::Paused { elapsed } => {
                self.state = TimerState::Running {
                    started_at: now.saturating_sub(elapsed),
                };
                true
            }
            _ => false,
        }
    }

    pub fn elapsed(&self, now: Duration) -> Duration {
        match self.state {
            TimerState::NotStarted => Duration::ZERO,
            TimerState::Running { started_at } => now.saturating_sub(started_at),
            TimerState::Paused { elapsed } => elapsed,
        }
    }

    /// Whole seconds elapsed (floored)
    pub fn elapsed_secs(&self, now: Duration) -> u64 {
        self.elapsed(now).as_secs()
    }
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new()
    }
}
