//! TUI pane rendering modules
//!
//! Each pane is a stateless render function reading from the
//! [`Screen`](crate::ui::screen::Screen) the session paints into.
//!
//! - [`question`]: the live question, titled with the current mode
//! - [`answer`]: answer input box and the feedback line under it
//! - [`stats`]: elapsed time, correct ratio and speed
//! - [`status`]: status bar with keybindings and session state

pub mod answer;
pub mod question;
pub mod stats;
pub mod status;

// Re-export render functions for convenience
pub use answer::{render_answer_pane, render_feedback_line};
pub use question::render_question_pane;
pub use stats::render_stats_row;
pub use status::render_status_bar;
