use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

use crate::ui::input::QueryInput;
use crate::ui::theme::Theme;

/// Argument bundle for rendering the query entry row.
pub struct PromptContext<'a> {
    pub input: &'a QueryInput<'a>,
    /// Placeholder text shown when the query is empty.
    pub placeholder: &'a str,
    pub theme: &'a Theme,
}

/// Render the query editor, overlaying the placeholder while it is empty.
pub fn render_prompt(frame: &mut Frame, area: Rect, ctx: PromptContext<'_>) {
    ctx.input.render(frame, area);

    if ctx.input.is_empty() {
        render_placeholder(frame, area, ctx.placeholder, ctx.theme);
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    if area.width == 0 || area.height == 0 || text.is_empty() {
        return;
    }

    let available = area.width as usize;
    let mut used = 0usize;
    let display_text: String = text
        .chars()
        .take_while(|ch| {
            used += ch.width().unwrap_or(0);
            used <= available
        })
        .collect();

    let line = Line::from(Span::styled(display_text, theme.empty_style()));
    frame
        .buffer_mut()
        .set_line(area.left(), area.top(), &line, area.width);
}
