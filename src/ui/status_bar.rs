//! Status bar UI component.

use crate::ui::formatters::format_number;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

/// Draw the status bar: last action on the left, dataset summary on the right.
pub(super) fn draw_status(
    f: &mut Frame<'_>,
    area: Rect,
    status: &str,
    records: usize,
    axis_title: &str,
    colors: &ThemeColors,
) {
    let summary = format!("{} records | x: {} ", format_number(records), axis_title);
    let summary_width = (summary.chars().count() as u16).min(area.width);

    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(summary_width)])
        .split(area);

    let style = Style::default().fg(colors.status_fg).bg(colors.status_bg);
    f.render_widget(Paragraph::new(format!(" {}", status)).style(style), parts[0]);
    f.render_widget(Paragraph::new(summary).style(style), parts[1]);
}
