//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

const KEYMAP: &str = "1/2/3:field | Tab:next | click:label | hover:details | T:theme | q/Esc:quit";

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph =
        Paragraph::new(KEYMAP).style(Style::default().fg(colors.inactive).bg(colors.bg));
    f.render_widget(paragraph, area);
}
