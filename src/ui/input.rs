//! Single-line query editor backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Wrapper around [`TextArea`] that keeps the query on one line and exposes
/// the small surface the form state needs.
pub struct QueryInput<'a> {
    textarea: TextArea<'a>,
    style: Style,
}

impl<'a> QueryInput<'a> {
    pub fn new(initial: impl Into<String>) -> Self {
        let mut textarea = TextArea::from([initial.into()]);
        textarea.set_cursor_line_style(Style::default());
        textarea.move_cursor(CursorMove::End);
        Self {
            textarea,
            style: Style::default(),
        }
    }

    /// Current query text.
    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// Replace the query wholesale, moving the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let style = self.style;
        *self = Self::new(text);
        self.set_style(style);
    }

    pub fn clear(&mut self) {
        self.set_text("");
    }

    /// Forward a key press to the editor, returning whether the text changed.
    ///
    /// Enter is rejected so the query can never grow a second line; submission
    /// is handled by the form state before keys reach the editor.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if matches!(key.code, KeyCode::Enter) {
            return false;
        }
        self.textarea.input(key)
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
        self.textarea.set_style(style);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.textarea, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(input: &mut QueryInput<'_>, text: &str) {
        for ch in text.chars() {
            input.input(KeyEvent::from(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn typed_text_is_echoed_back() {
        let mut input = QueryInput::new("");
        type_str(&mut input, "neural nets");
        assert_eq!(input.text(), "neural nets");
    }

    #[test]
    fn set_text_replaces_unconditionally() {
        let mut input = QueryInput::new("before");
        input.set_text("after & <specials> \"quoted\"");
        assert_eq!(input.text(), "after & <specials> \"quoted\"");

        input.set_text("");
        assert_eq!(input.text(), "");
    }

    #[test]
    fn enter_never_adds_a_line() {
        let mut input = QueryInput::new("one line");
        assert!(!input.input(KeyEvent::from(KeyCode::Enter)));
        assert_eq!(input.text(), "one line");
    }

    #[test]
    fn backspace_edits_in_place() {
        let mut input = QueryInput::new("abc");
        input.input(KeyEvent::from(KeyCode::Backspace));
        assert_eq!(input.text(), "ab");
    }
}
