//! User interface rendering.

mod chart;
pub mod formatters;
mod keymap_bar;
pub mod layout;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::Frame;
use std::time::Instant;

pub use layout::ChartLayout;
pub use theme::ThemeColors;

/// Draw the UI at the current time.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    draw_at(f, app, Instant::now());
}

/// Draw the UI as it looks at `now`.
///
/// The computed layout is stored on the app so mouse events can be mapped
/// back onto the chart.
pub fn draw_at(f: &mut Frame<'_>, app: &mut App, now: Instant) {
    let colors = ThemeColors::from_theme(&app.theme);
    let layout = ChartLayout::compute(f.area(), app.chart.config(), &app.chart.view().labels);
    app.chart.set_hover_reach(layout.half_cell_in_pixels());

    let title = format!(
        "{} vs {}",
        crate::data::Y_TITLE,
        app.chart.active().axis_title()
    );
    chart::draw_chart(f, &layout, app.chart.view(), &title, &colors, now);
    status_bar::draw_status(
        f,
        layout.status,
        &app.status,
        app.chart.controller().dataset().len(),
        app.chart.active().axis_title(),
        &colors,
    );
    keymap_bar::draw_keymap(f, layout.keymap, &colors);

    app.layout = layout;
}
