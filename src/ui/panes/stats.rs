//! Stats row: elapsed time, correct ratio and speed side by side

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn render_stat(frame: &mut Frame, area: Rect, title: &str, value: &str, dimmed: bool) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let style = if dimmed {
        Style::default().fg(DEFAULT_THEME.comment)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD)
    };

    let paragraph = Paragraph::new(value.to_string())
        .block(block)
        .style(style)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Render the three stat boxes. Time and speed are dimmed while paused.
pub fn render_stats_row(
    frame: &mut Frame,
    area: Rect,
    timer: &str,
    correct_ratio: &str,
    speed: &str,
    is_paused: bool,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    render_stat(frame, columns[0], "Time", timer, is_paused);
    render_stat(frame, columns[1], "Correct", correct_ratio, false);
    render_stat(frame, columns[2], "Speed", speed, is_paused);
}
