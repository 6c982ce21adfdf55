//! Question pane: the live question (or the welcome prompt) and its mode

use crate::drill::Operation;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the question pane
pub fn render_question_pane(
    frame: &mut Frame,
    area: Rect,
    question: &str,
    operation: Option<Operation>,
) {
    let title = match operation {
        Some(op) => format!(" {} ", op.label()),
        None => " Arithmetic Drill ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(0, 0, 1, 0));

    // The welcome prompt is dimmed; a real question stands out
    let style = if operation.is_some() {
        Style::default()
            .fg(DEFAULT_THEME.question)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.comment)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(question.to_string(), style)))
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
