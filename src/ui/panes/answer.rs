//! Answer input and feedback line

use crate::drill::FeedbackStyle;
use crate::ui::screen::Screen;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the answer input box, placing the terminal cursor after the text
/// when the input has focus.
pub fn render_answer_pane(frame: &mut Frame, area: Rect, screen: &Screen) {
    let border_style = if screen.answer_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Answer ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {}", screen.answer),
        Style::default().fg(DEFAULT_THEME.fg),
    )))
    .block(block);

    frame.render_widget(paragraph, area);

    if screen.answer_focused && area.width > 2 && area.height > 2 {
        // Inside the left border, one space of padding, then the text
        let offset = 2 + screen.answer.chars().count() as u16;
        let x = area.x + offset.min(area.width.saturating_sub(2));
        frame.set_cursor_position((x, area.y + 1));
    }
}

/// Render the feedback message under the input
pub fn render_feedback_line(frame: &mut Frame, area: Rect, text: &str, style: FeedbackStyle) {
    let color = match style {
        FeedbackStyle::Neutral => DEFAULT_THEME.comment,
        FeedbackStyle::Success => DEFAULT_THEME.success,
        FeedbackStyle::Error => DEFAULT_THEME.error,
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
