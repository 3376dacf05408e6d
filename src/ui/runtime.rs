use std::time::Duration;

use anyhow::Result;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::state::{App, FormConfig};
use crate::submission::FormOutcome;

/// Construct an [`App`] for the provided configuration and run it to
/// completion.
pub fn run(config: FormConfig) -> Result<FormOutcome> {
    let mut app = App::new(config);
    app.run()
}

impl<'a> App<'a> {
    /// Pump the terminal event loop until the user exits with an outcome.
    pub fn run(&mut self) -> Result<FormOutcome> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let outcome = loop {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if let Some(outcome) = self.handle_key(key) {
                            break outcome;
                        }
                    }
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        };

        ratatui::restore();
        Ok(outcome)
    }
}
