//! Projection of the chart's pixel space onto terminal cells.
//!
//! The layout is recomputed on every draw and kept by the app so mouse
//! events can be mapped back to plot pixels and label hits.

use crate::chart::labels::LabelSet;
use crate::config::ChartConfig;
use crate::data::XField;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Block;
use unicode_width::UnicodeWidthStr;

/// Gap between the x-axis labels group and the plot bottom, in pixels.
const LABEL_GROUP_GAP: f64 = 20.0;

/// Cell geometry of one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartLayout {
    /// Outer chart block, border included.
    pub frame: Rect,
    /// Canvas area inside the border.
    pub canvas: Rect,
    /// Cells covered by the plot group.
    pub plot: Rect,
    /// Row holding the x-axis ruler.
    pub x_axis_row: u16,
    /// Column holding the y-axis ruler.
    pub y_axis_col: u16,
    /// Clickable label areas.
    pub labels: Vec<(XField, Rect)>,
    /// Status bar row.
    pub status: Rect,
    /// Keymap bar row.
    pub keymap: Rect,
    scale: (f64, f64),
    origin: (f64, f64),
    plot_size: (f64, f64),
}

impl ChartLayout {
    /// Lay out a frame of size `area`.
    pub fn compute(area: Rect, config: &ChartConfig, labels: &LabelSet) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);
        let frame = rows[0];
        let canvas = Block::bordered().inner(frame);

        let sx = canvas.width as f64 / config.canvas_width;
        let sy = canvas.height as f64 / config.canvas_height;
        let origin = (
            canvas.x as f64 + config.margins.left * sx,
            canvas.y as f64 + config.margins.top * sy,
        );
        let plot_size = (config.plot_width(), config.plot_height());

        let plot = Rect {
            x: origin.0.round() as u16,
            y: origin.1.round() as u16,
            width: (plot_size.0 * sx).round() as u16,
            height: (plot_size.1 * sy).round() as u16,
        }
        .intersection(canvas);

        let x_axis_row = plot.bottom();
        let y_axis_col = plot.x.saturating_sub(1);

        let mut layout = Self {
            frame,
            canvas,
            plot,
            x_axis_row,
            y_axis_col,
            labels: Vec::new(),
            status: rows[1],
            keymap: rows[2],
            scale: (sx, sy),
            origin,
            plot_size,
        };
        layout.labels = layout.place_labels(labels);
        layout
    }

    // Labels sit below the tick row, one per row even when the pixel spacing
    // is finer than a cell.
    fn place_labels(&self, labels: &LabelSet) -> Vec<(XField, Rect)> {
        let center = self.to_cell((self.plot_size.0 / 2.0, 0.0)).0;
        let mut next_free = self.x_axis_row.saturating_add(2);
        let mut placed = Vec::new();

        for label in labels.iter() {
            let y_px = self.plot_size.1 + LABEL_GROUP_GAP + label.offset_y();
            let row = (self.to_cell((0.0, y_px)).1.floor() as u16).max(next_free);
            if row >= self.canvas.bottom() {
                break;
            }
            let width = (label.text.width() as u16).min(self.canvas.width);
            let x = (center - width as f64 / 2.0).round().max(self.canvas.x as f64) as u16;
            let x = x.min(self.canvas.right().saturating_sub(width));
            placed.push((
                label.field,
                Rect {
                    x,
                    y: row,
                    width,
                    height: 1,
                },
            ));
            next_free = row + 1;
        }
        placed
    }

    /// Half a cell expressed in pixels; the minimum useful hover reach.
    pub fn half_cell_in_pixels(&self) -> (f64, f64) {
        let (sx, sy) = self.scale;
        let half = |s: f64| if s > 0.0 { 0.5 / s } else { 0.0 };
        (half(sx), half(sy))
    }

    /// Fractional cell position of a plot pixel.
    pub fn to_cell(&self, point: (f64, f64)) -> (f64, f64) {
        (
            self.origin.0 + point.0 * self.scale.0,
            self.origin.1 + point.1 * self.scale.1,
        )
    }

    /// Plot pixel under the centre of a cell, if the cell lies on the plot.
    pub fn to_plot(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        let (sx, sy) = self.scale;
        if sx <= 0.0 || sy <= 0.0 {
            return None;
        }
        let px = (column as f64 + 0.5 - self.origin.0) / sx;
        let py = (row as f64 + 0.5 - self.origin.1) / sy;
        let inside =
            (0.0..=self.plot_size.0).contains(&px) && (0.0..=self.plot_size.1).contains(&py);
        inside.then_some((px, py))
    }

    /// Label under a cell.
    pub fn label_at(&self, column: u16, row: u16) -> Option<XField> {
        self.labels
            .iter()
            .find(|(_, rect)| {
                column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
            })
            .map(|(field, _)| *field)
    }
}
