//! Chart configuration.
//!
//! All geometry is in logical pixels; the terminal renderer projects it onto
//! cells at draw time.

use crate::error::{Result, ScatterError};
use std::time::Duration;

/// Space reserved around the plot group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin, holds the x-axis labels.
    pub bottom: f64,
    /// Left margin, holds the y-axis title.
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 40.0,
            bottom: 80.0,
            left: 50.0,
        }
    }
}

/// Configuration for the x-scale domain padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleConfig {
    /// Factor applied to the field minimum.
    pub low_padding: f64,
    /// Factor applied to the field maximum.
    pub high_padding: f64,
    /// Approximate number of ticks per axis.
    pub tick_count: usize,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            low_padding: 0.8,
            high_padding: 1.2,
            tick_count: 6,
        }
    }
}

/// Appearance of the plotted marks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkConfig {
    /// Circle radius.
    pub radius: f64,
    /// Fill colour as RGB.
    pub fill: (u8, u8, u8),
    /// Fill opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Default for MarkConfig {
    fn default() -> Self {
        Self {
            radius: 7.0,
            fill: (0, 0, 255),
            opacity: 0.8,
        }
    }
}

/// Combined chart configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Outer canvas width.
    pub canvas_width: f64,
    /// Outer canvas height.
    pub canvas_height: f64,
    /// Margins around the plot group.
    pub margins: Margins,
    /// Scale settings.
    pub scale: ScaleConfig,
    /// Mark appearance.
    pub marks: MarkConfig,
    /// Tooltip offset from the cursor as `(down, right)`.
    pub tooltip_offset: (f64, f64),
    /// Duration of every animated transition.
    pub transition: Duration,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            canvas_width: 850.0,
            canvas_height: 500.0,
            margins: Margins::default(),
            scale: ScaleConfig::default(),
            marks: MarkConfig::default(),
            tooltip_offset: (50.0, -50.0),
            transition: Duration::from_millis(1000),
        }
    }
}

impl ChartConfig {
    /// Set the transition duration.
    pub fn with_transition(mut self, duration: Duration) -> Self {
        self.transition = duration;
        self
    }

    /// Width of the plot group (canvas minus horizontal margins).
    pub fn plot_width(&self) -> f64 {
        self.canvas_width - self.margins.left - self.margins.right
    }

    /// Height of the plot group (canvas minus vertical margins).
    pub fn plot_height(&self) -> f64 {
        self.canvas_height - self.margins.top - self.margins.bottom
    }

    /// Reject geometry that leaves no plot area or padding that inverts the domain.
    pub fn validate(&self) -> Result<()> {
        if self.plot_width() <= 0.0 || self.plot_height() <= 0.0 {
            return Err(ScatterError::InvalidConfig(format!(
                "plot area {}x{} is empty",
                self.plot_width(),
                self.plot_height()
            )));
        }
        if self.scale.low_padding > self.scale.high_padding {
            return Err(ScatterError::InvalidConfig(
                "low padding factor exceeds high padding factor".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.marks.opacity) {
            return Err(ScatterError::InvalidConfig(format!(
                "mark opacity {} outside [0, 1]",
                self.marks.opacity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plot_area() {
        let config = ChartConfig::default();
        assert_eq!(config.plot_width(), 760.0);
        assert_eq!(config.plot_height(), 400.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_plot_area() {
        let mut config = ChartConfig::default();
        config.canvas_width = 80.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_padding() {
        let mut config = ChartConfig::default();
        config.scale.low_padding = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ScatterError::InvalidConfig(_))
        ));
    }
}
