use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::sources::{FilterSet, SearchSource};
use crate::ui::state::Focus;
use crate::ui::theme::Theme;

/// Argument bundle for rendering the source checkbox row.
pub struct TogglesContext<'a> {
    pub filters: &'a FilterSet,
    pub focus: Focus,
    pub theme: &'a Theme,
}

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";
const GAP: &str = "   ";

/// Render one checkbox per source, in the fixed source order, centered.
pub fn render_toggles(frame: &mut Frame, area: Rect, ctx: TogglesContext<'_>) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let mut line = Line::default();
    for (position, source) in SearchSource::ALL.into_iter().enumerate() {
        if position > 0 {
            line.spans.push(Span::raw(GAP));
        }

        let mark = if ctx.filters.is_enabled(source) {
            CHECKED
        } else {
            UNCHECKED
        };
        let style = if ctx.focus == Focus::Source(source) {
            ctx.theme.accent_style()
        } else {
            ctx.theme.label_style()
        };
        line.spans
            .push(Span::styled(format!("{mark} {}", source.label()), style));
    }

    let line_width = line.width() as u16;
    let start_x = area.left() + area.width.saturating_sub(line_width) / 2;
    frame
        .buffer_mut()
        .set_line(start_x, area.top(), &line, area.width);
}
