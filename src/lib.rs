//! # Introduction
//!
//! mathdrill runs timed beginner arithmetic drills: pick a mode, answer
//! questions with operands from 1 to 9, and watch elapsed time, accuracy and
//! answer rate tick along. The session can be paused and resumed without
//! the paused time counting against you.
//!
//! ## Layout
//!
//! ```text
//! keys → App → SessionController → Surface (Screen) → panes → terminal
//!                  ↑         ↑
//!                Clock   NumberSource
//! ```
//!
//! 1. [`drill`]: the terminal-independent core. [`drill::SessionController`]
//!    owns the live question, counters, timer and scheduled work.
//! 2. [`ui`]: ratatui front end. [`ui::Screen`] implements the drill's
//!    display surface and [`ui::App`] runs the event loop.
//! 3. [`config`]: command-line flags and log setup.
//! 4. [`error`]: binary-level errors.

pub mod config;
pub mod drill;
pub mod error;
pub mod ui;
