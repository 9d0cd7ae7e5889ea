//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Background as RGB, used to blend translucent marks.
    pub bg_rgb: (u8, u8, u8),
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Active axis label color.
    pub active: Color,
    /// Inactive axis label color.
    pub inactive: Color,
    /// Axis ruler and tick color.
    pub axis: Color,
    /// Border color.
    pub border: Color,
    /// Tooltip foreground color.
    pub tooltip_fg: Color,
    /// Tooltip background color.
    pub tooltip_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                bg_rgb: (40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                active: Color::Rgb(251, 184, 108),
                inactive: Color::Rgb(146, 131, 116),
                axis: Color::Rgb(189, 174, 147),
                border: Color::Rgb(102, 92, 84),
                tooltip_fg: Color::Rgb(40, 40, 40),
                tooltip_bg: Color::Rgb(235, 219, 178),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                bg_rgb: (251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                active: Color::Rgb(175, 58, 3),
                inactive: Color::Rgb(146, 131, 116),
                axis: Color::Rgb(102, 92, 84),
                border: Color::Rgb(213, 196, 161),
                tooltip_fg: Color::Rgb(251, 245, 234),
                tooltip_bg: Color::Rgb(60, 56, 54),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
            },
        }
    }

    /// `fill` drawn at `opacity` over the background.
    pub fn blend(&self, fill: (u8, u8, u8), opacity: f64) -> Color {
        let mix = |over: u8, under: u8| -> u8 {
            (over as f64 * opacity + under as f64 * (1.0 - opacity)).round() as u8
        };
        Color::Rgb(
            mix(fill.0, self.bg_rgb.0),
            mix(fill.1, self.bg_rgb.1),
            mix(fill.2, self.bg_rgb.2),
        )
    }
}
