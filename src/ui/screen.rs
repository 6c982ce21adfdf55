//! Terminal-side render state
//!
//! [`Screen`] is the [`Surface`] the controller paints into. The panes read
//! it back when drawing a frame. It also owns the answer input buffer, which
//! the key handler edits directly.

use crate::drill::surface::{FeedbackStyle, Surface};

/// Longest answer the input field accepts
pub const MAX_ANSWER_LEN: usize = 12;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    pub question: String,
    pub answer: String,
    pub feedback: String,
    pub feedback_style: FeedbackStyle,
    pub timer: String,
    pub correct_ratio: String,
    pub speed: String,
    pub pause_label: String,
    pub answer_focused: bool,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a typed character; only characters that can form a number are kept
    pub fn push_answer_char(&mut self, c: char) -> bool {
        let accepted = (c.is_ascii_digit() || c == '.' || c == '-')
            && self.answer.chars().count() < MAX_ANSWER_LEN;
        if accepted {
            self.answer.push(c);
            self.answer_focused = true;
        }
        accepted
    }

    pub fn pop_answer_char(&mut self) {
        self.answer.pop();
    }

    /// Drop the cursor and focused border, e.g. while the session is paused
    pub fn blur_answer_input(&mut self) {
        self.answer_focused = false;
    }
}

impl Surface for Screen {
    fn show_question(&mut self, text: &str) {
        self.question = text.to_string();
    }

    fn clear_answer_input(&mut self) {
        self.answer.clear();
    }

    fn show_feedback(&mut self, text: &str, style: FeedbackStyle) {
        self.feedback = text.to_string();
        self.feedback_style = style;
    }

    fn show_timer(&mut self, text: &str) {
        self.timer = text.to_string();
    }

    fn show_correct_ratio(&mut self, text: &str) {
        self.correct_ratio = text.to_string();
    }

    fn show_speed(&mut self, text: &str) {
        self.speed = text.to_string();
    }

    fn set_pause_button_label(&mut self, text: &str) {
        self.pause_label = text.to_string();
    }

    fn focus_answer_input(&mut self) {
        self.answer_focused = true;
    }
}
