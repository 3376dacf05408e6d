use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::widgets::Paragraph;

use super::App;
use super::components::{
    PromptContext, TogglesContext, render_header, render_prompt, render_toggles,
};

const KEY_HINT: &str = "tab: focus  space: toggle  enter: submit  esc: quit";

impl<'a> App<'a> {
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let area = area.inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        // Header, a blank spacer, the toggle row, the query row, then the
        // status line in whatever space remains.
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        render_header(frame, layout[0], &self.title, &self.theme);
        render_toggles(
            frame,
            layout[2],
            TogglesContext {
                filters: &self.filters,
                focus: self.focus,
                theme: &self.theme,
            },
        );
        render_prompt(
            frame,
            layout[3],
            PromptContext {
                input: &self.query_input,
                placeholder: &self.placeholder,
                theme: &self.theme,
            },
        );
        self.render_status(frame, layout[4]);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let text = match self.submissions().last() {
            None => KEY_HINT.to_string(),
            Some(submission) => {
                let labels = submission.enabled_labels();
                if labels.is_empty() {
                    format!("submitted \"{}\"", submission.query)
                } else {
                    format!("submitted \"{}\" -> {}", submission.query, labels.join(", "))
                }
            }
        };

        let status = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(self.theme.empty_style());
        frame.render_widget(status, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::crossterm::event::{KeyCode, KeyEvent};

    use crate::sources::SearchSource;
    use crate::ui::state::{App, FormConfig};

    fn draw_to_string(app: &mut App<'_>) -> String {
        let backend = TestBackend::new(72, 8);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|frame| app.draw(frame))
            .expect("draw frame");
        buffer_to_string(terminal.backend().buffer())
    }

    fn buffer_to_string(buf: &Buffer) -> String {
        let mut lines = Vec::new();
        for y in 0..buf.area.height {
            let mut line = String::new();
            for x in 0..buf.area.width {
                line.push_str(buf[(x, y)].symbol());
            }
            lines.push(line);
        }
        lines.join("\n")
    }

    #[test]
    fn frame_shows_header_toggles_and_placeholder() {
        let mut app = App::new(FormConfig::default());
        let snapshot = draw_to_string(&mut app);

        assert!(snapshot.contains("Contextual Search"));
        assert!(snapshot.contains("[ ] Wikipedia"));
        assert!(snapshot.contains("[ ] Stackoverflow"));
        assert!(snapshot.contains("[ ] arXiv"));
        assert!(snapshot.contains("Ask anything..."));
    }

    #[test]
    fn enabled_sources_render_checked() {
        let mut app = App::new(FormConfig::default());
        app.toggle_filter(SearchSource::Wikipedia);
        app.toggle_filter(SearchSource::ArXiv);

        let snapshot = draw_to_string(&mut app);
        assert!(snapshot.contains("[x] Wikipedia"));
        assert!(snapshot.contains("[ ] Stackoverflow"));
        assert!(snapshot.contains("[x] arXiv"));
    }

    #[test]
    fn typing_replaces_the_placeholder() {
        let mut app = App::new(FormConfig::default());
        for ch in "rust".chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(ch)));
        }

        let snapshot = draw_to_string(&mut app);
        assert!(snapshot.contains("rust"));
        assert!(!snapshot.contains("Ask anything..."));
    }

    #[test]
    fn status_line_echoes_the_last_submission() {
        let mut app = App::new(FormConfig::default());
        app.toggle_filter(SearchSource::Stackoverflow);
        for ch in "lifetimes".chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(ch)));
        }
        app.handle_key(KeyEvent::from(KeyCode::Enter));

        let snapshot = draw_to_string(&mut app);
        assert!(snapshot.contains("submitted \"lifetimes\" -> Stackoverflow"));
    }

    #[test]
    fn sources_render_in_fixed_order() {
        let mut app = App::new(FormConfig::default());
        let snapshot = draw_to_string(&mut app);

        let wikipedia = snapshot.find("Wikipedia").expect("wikipedia rendered");
        let stackoverflow = snapshot
            .find("Stackoverflow")
            .expect("stackoverflow rendered");
        let arxiv = snapshot.find("arXiv").expect("arxiv rendered");
        assert!(wikipedia < stackoverflow);
        assert!(stackoverflow < arxiv);
    }
}
