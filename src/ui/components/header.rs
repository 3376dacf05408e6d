use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::Paragraph;

use crate::ui::theme::Theme;

/// Render the static application header.
pub fn render_header(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
    if area.width == 0 || area.height == 0 || title.is_empty() {
        return;
    }

    let header = Paragraph::new(title.to_string())
        .alignment(Alignment::Center)
        .style(theme.header_style());
    frame.render_widget(header, area);
}
