//! Application state and logic.

use std::path::Path;
use std::time::Instant;

use crate::chart::{Chart, ChartEvent};
use crate::config::ChartConfig;
use crate::data::{DataReader, XField};
use crate::error::Result;
use crate::ui::ChartLayout;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The chart session.
    pub chart: Chart,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Layout of the last drawn frame.
    pub layout: ChartLayout,
}

impl App {
    /// Create a new application around a built chart.
    pub fn new(chart: Chart) -> Self {
        let status = format!("Showing {}", chart.active().axis_title());
        Self {
            chart,
            status,
            theme: Theme::GruvboxDark,
            layout: ChartLayout::default(),
        }
    }

    /// Load `path` and build the chart on it.
    ///
    /// Any error here is a configuration error: nothing has been drawn yet.
    pub fn open(path: &Path, config: ChartConfig, initial: XField, now: Instant) -> Result<Self> {
        let dataset = DataReader::read_file(path)?;
        let loaded = format!(
            "Loaded {} records from {}",
            dataset.len(),
            dataset
                .source()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "file".to_string())
        );
        let chart = Chart::new(dataset, config, initial, now)?;
        let mut app = Self::new(chart);
        app.status = loaded;
        Ok(app)
    }

    /// Dispatch a label click and report the outcome in the status bar.
    pub fn click_label(&mut self, id: &str, now: Instant) {
        let changed = self
            .chart
            .dispatch(&ChartEvent::LabelClicked(id.to_string()), now);
        if changed {
            self.status = format!("Showing {}", self.chart.active().axis_title());
        }
    }

    /// Left click at a terminal cell.
    pub fn handle_click(&mut self, column: u16, row: u16, now: Instant) {
        if let Some(field) = self.layout.label_at(column, row) {
            self.click_label(field.id(), now);
        }
    }

    /// Mouse moved to a terminal cell.
    pub fn handle_mouse_move(&mut self, column: u16, row: u16, now: Instant) {
        let point = self.layout.to_plot(column, row);
        self.chart.hover(point, now);
    }

    /// Click the label at position `index` (0-based), if there is one.
    pub fn select_index(&mut self, index: usize, now: Instant) {
        if let Some(field) = XField::from_index(index) {
            self.click_label(field.id(), now);
        }
    }

    /// Click the label after the active one.
    pub fn cycle_field(&mut self, now: Instant) {
        let next = self.chart.active().next();
        self.click_label(next.id(), now);
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Whether the chart is mid-transition.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.chart.is_animating(now)
    }
}
