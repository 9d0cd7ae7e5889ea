//! Scatter chart rendering: marks, rulers, labels and the tooltip.

use super::layout::ChartLayout;
use super::ThemeColors;
use crate::chart::ChartView;
use crate::data::Y_TITLE;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Circle, Points},
        Block, Borders, Clear, Paragraph,
    },
    Frame,
};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

/// Draw the whole chart block.
pub(super) fn draw_chart(
    f: &mut Frame<'_>,
    layout: &ChartLayout,
    view: &ChartView,
    title: &str,
    colors: &ThemeColors,
    now: Instant,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg).fg(colors.text));
    f.render_widget(block, layout.frame);

    draw_marks(f, layout, view, colors, now);

    let buf = f.buffer_mut();
    draw_x_axis(buf, layout, view, colors, now);
    draw_y_axis(buf, layout, view, colors, now);
    draw_y_title(buf, layout, colors);
    draw_labels(buf, layout, view, colors);

    draw_tooltip(f, layout, view, colors);
}

fn draw_marks(
    f: &mut Frame<'_>,
    layout: &ChartLayout,
    view: &ChartView,
    colors: &ThemeColors,
    now: Instant,
) {
    if layout.plot.is_empty() {
        return;
    }
    let (_, plot_h) = view.y_scale.range();
    let plot_w = view.x_axis.scale_at(now).range().1;
    let color = colors.blend(view.marks.fill, view.marks.opacity);
    let radius = view.marks.radius;

    // Canvas y grows upwards, pixel y grows downwards.
    let centers: Vec<(f64, f64)> = view
        .marks
        .iter()
        .map(|m| (m.cx_at(now), plot_h - m.cy()))
        .collect();

    let canvas = Canvas::default()
        .background_color(colors.bg)
        .marker(Marker::Braille)
        .x_bounds([0.0, plot_w])
        .y_bounds([0.0, plot_h])
        .paint(|ctx| {
            for &(x, y) in &centers {
                ctx.draw(&Circle {
                    x,
                    y,
                    radius,
                    color,
                });
            }
            ctx.draw(&Points {
                coords: &centers,
                color,
            });
        });
    f.render_widget(canvas, layout.plot);
}

fn draw_x_axis(
    buf: &mut Buffer,
    layout: &ChartLayout,
    view: &ChartView,
    colors: &ThemeColors,
    now: Instant,
) {
    let row = layout.x_axis_row;
    let style = Style::default().fg(colors.axis);
    let line = "─".repeat(layout.plot.width as usize);
    put(buf, layout.canvas, layout.plot.x, row, &line, style);

    let mut free_from = 0u16;
    for tick in view.x_axis.ticks_at(now) {
        let col = layout.to_cell((tick.position, 0.0)).0.floor();
        if col < layout.plot.x as f64 || col >= layout.plot.right() as f64 {
            continue;
        }
        let col = col as u16;
        put(buf, layout.canvas, col, row, "┬", style);

        let width = tick.label.width() as u16;
        let start = col.saturating_sub(width / 2);
        if start >= free_from {
            put(buf, layout.canvas, start, row + 1, &tick.label, style);
            free_from = start + width + 1;
        }
    }
}

fn draw_y_axis(
    buf: &mut Buffer,
    layout: &ChartLayout,
    view: &ChartView,
    colors: &ThemeColors,
    now: Instant,
) {
    if layout.plot.x <= layout.canvas.x {
        return;
    }
    let col = layout.y_axis_col;
    let style = Style::default().fg(colors.axis);
    for row in layout.plot.top()..layout.plot.bottom() {
        put(buf, layout.canvas, col, row, "│", style);
    }
    put(buf, layout.canvas, col, layout.x_axis_row, "└", style);

    let mut last_row = None;
    for tick in view.y_axis.ticks_at(now) {
        let row = layout.to_cell((0.0, tick.position)).1.floor();
        if row < layout.plot.y as f64 || row >= layout.plot.bottom() as f64 {
            continue;
        }
        let row = row as u16;
        if last_row == Some(row) {
            continue;
        }
        last_row = Some(row);
        put(buf, layout.canvas, col, row, "┤", style);

        let width = tick.label.width() as u16;
        if let Some(start) = col.checked_sub(width) {
            put(buf, layout.canvas, start.max(layout.canvas.x), row, &tick.label, style);
        }
    }
}

fn draw_y_title(buf: &mut Buffer, layout: &ChartLayout, colors: &ThemeColors) {
    let style = Style::default()
        .fg(colors.heading)
        .add_modifier(Modifier::BOLD);
    let chars: Vec<char> = Y_TITLE.chars().collect();
    let height = layout.plot.height as usize;
    let skip = chars.len().saturating_sub(height) / 2;
    let top = layout.plot.y as usize + height.saturating_sub(chars.len()) / 2;
    for (i, c) in chars.iter().skip(skip).take(height).enumerate() {
        let mut tmp = [0u8; 4];
        let row = (top + i) as u16;
        put(buf, layout.canvas, layout.canvas.x, row, c.encode_utf8(&mut tmp), style);
    }
}

fn draw_labels(buf: &mut Buffer, layout: &ChartLayout, view: &ChartView, colors: &ThemeColors) {
    for (label, (_, rect)) in view.labels.iter().zip(&layout.labels) {
        let style = if label.active {
            Style::default()
                .fg(colors.active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.inactive)
        };
        put(buf, layout.canvas, rect.x, rect.y, label.text, style);
    }
}

fn draw_tooltip(f: &mut Frame<'_>, layout: &ChartLayout, view: &ChartView, colors: &ThemeColors) {
    let Some(ref tooltip) = view.tooltip else {
        return;
    };
    let lines: Vec<Line<'_>> = tooltip.lines().map(Line::from).collect();
    let inner_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = (inner_width + 4).min(layout.canvas.width);
    let height = (lines.len() as u16 + 2).min(layout.canvas.height);
    if width == 0 || height == 0 {
        return;
    }

    let (col, row) = layout.to_cell(tooltip.anchor);
    let max_x = layout.canvas.right().saturating_sub(width);
    let max_y = layout.canvas.bottom().saturating_sub(height);
    let area = Rect {
        x: (col.max(0.0) as u16).clamp(layout.canvas.x, max_x.max(layout.canvas.x)),
        y: (row.max(0.0) as u16).clamp(layout.canvas.y, max_y.max(layout.canvas.y)),
        width,
        height,
    };

    let paragraph = Paragraph::new(lines)
        .centered()
        .style(Style::default().fg(colors.tooltip_fg).bg(colors.tooltip_bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border).bg(colors.tooltip_bg)),
        );
    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

/// Write `text` at `(x, y)`, clipped to `clip`.
fn put(buf: &mut Buffer, clip: Rect, x: u16, y: u16, text: &str, style: Style) {
    if y < clip.top() || y >= clip.bottom() || x < clip.left() || x >= clip.right() {
        return;
    }
    let room = (clip.right() - x) as usize;
    buf.set_stringn(x, y, text, room, style);
}
