//! Errors raised by the drill core
//!
//! Non-numeric input is the only user-facing error. It is reported inline
//! and never mutates counters or advances the question.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    /// The trimmed input could not be read as a number
    #[error("'{0}' is not a valid number")]
    NotANumber(String),
}

/// Rejected timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
    #[error("advance delay must be greater than zero")]
    ZeroAdvanceDelay,
}
