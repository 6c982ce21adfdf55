//! The display/input surface the controller renders into
//!
//! Whatever hosts the drill (a terminal screen, a test recorder) implements
//! [`Surface`]. The controller never reads back from it; inbound events are
//! delivered by calling controller methods directly.

/// Styling hint attached to a feedback message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackStyle {
    #[default]
    Neutral,
    Success,
    Error,
}

/// Outbound render calls made by the session controller
pub trait Surface {
    fn show_question(&mut self, text: &str);
    fn clear_answer_input(&mut self);
    fn show_feedback(&mut self, text: &str, style: FeedbackStyle);
    fn show_timer(&mut self, text: &str);
    fn show_correct_ratio(&mut self, text: &str);
    fn show_speed(&mut self, text: &str);
    fn set_pause_button_label(&mut self, text: &str);
    fn focus_answer_input(&mut self);
}
