//! Core state container for the entry form.
//!
//! The [`App`] owns the two pieces of form state — the query line and the
//! source filter flags — plus the focus cursor and the session's submission
//! log. All mutation happens synchronously inside the key handler; there is
//! no asynchronous work to coordinate.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::sources::{FilterSet, SearchSource};
use crate::submission::{FormOutcome, Submission, SubmissionSink, TracingSink};
use crate::ui::input::QueryInput;
use crate::ui::theme::Theme;

/// Startup parameters for a form session.
#[derive(Debug, Clone)]
pub struct FormConfig {
    pub title: String,
    pub placeholder: String,
    pub initial_query: String,
    pub enabled_sources: Vec<SearchSource>,
    pub theme: Theme,
    /// When set, submissions with an empty query are ignored. Off by default:
    /// the form deliberately lets empty queries through.
    pub require_query: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: "Contextual Search".to_string(),
            placeholder: "Ask anything...".to_string(),
            initial_query: String::new(),
            enabled_sources: Vec::new(),
            theme: Theme::default(),
            require_query: false,
        }
    }
}

/// Which control currently receives non-text key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Query,
    Source(SearchSource),
}

impl Focus {
    /// Focus ring: the query field followed by each toggle in source order.
    fn ring() -> [Focus; SearchSource::ALL.len() + 1] {
        let mut ring = [Focus::Query; SearchSource::ALL.len() + 1];
        for (offset, source) in SearchSource::ALL.into_iter().enumerate() {
            ring[offset + 1] = Focus::Source(source);
        }
        ring
    }
}

/// Aggregate state for the terminal form.
pub struct App<'a> {
    pub(crate) query_input: QueryInput<'a>,
    pub(crate) filters: FilterSet,
    pub(crate) focus: Focus,
    pub(crate) title: String,
    pub(crate) placeholder: String,
    pub theme: Theme,
    require_query: bool,
    submissions: Vec<Submission>,
    sink: Box<dyn SubmissionSink>,
}

impl<'a> App<'a> {
    /// Construct an [`App`] that reports submissions through the tracing log.
    pub fn new(config: FormConfig) -> Self {
        Self::with_sink(config, Box::new(TracingSink))
    }

    /// Construct an [`App`] with a caller-provided submission sink.
    pub fn with_sink(config: FormConfig, sink: Box<dyn SubmissionSink>) -> Self {
        let mut filters = FilterSet::new();
        for source in config.enabled_sources {
            filters.enable(source);
        }

        let mut query_input = QueryInput::new(config.initial_query);
        query_input.set_style(config.theme.field_style());

        Self {
            query_input,
            filters,
            focus: Focus::Query,
            title: config.title,
            placeholder: config.placeholder,
            theme: config.theme,
            require_query: config.require_query,
            submissions: Vec::new(),
            sink,
        }
    }

    /// Current query text.
    pub fn query(&self) -> &str {
        self.query_input.text()
    }

    /// Current filter flags.
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Snapshots submitted so far in this session.
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    /// Flip one source's flag; all other entries are untouched.
    pub fn toggle_filter(&mut self, source: SearchSource) {
        self.filters.toggle(source);
    }

    /// Snapshot the form, emit it to the sink, and clear the query.
    ///
    /// The filters persist across submissions. Empty queries submit too,
    /// unless `require_query` was set. Returns whether a snapshot was taken.
    pub fn submit(&mut self) -> bool {
        let query = self.query_input.text().to_string();
        if self.require_query && query.is_empty() {
            tracing::debug!("ignoring submission with empty query");
            return false;
        }

        let submission = Submission::new(query, self.filters);
        self.sink.record(&submission);
        self.submissions.push(submission);
        self.query_input.clear();
        true
    }

    /// Handle one key press; returns the session outcome when the user exits.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FormOutcome> {
        match key.code {
            KeyCode::Esc => return Some(self.finish()),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(self.finish());
            }
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
            KeyCode::Char(' ') if matches!(self.focus, Focus::Source(_)) => {
                if let Focus::Source(source) = self.focus {
                    self.toggle_filter(source);
                }
            }
            KeyCode::Left if matches!(self.focus, Focus::Source(_)) => self.focus_previous(),
            KeyCode::Right if matches!(self.focus, Focus::Source(_)) => self.focus_next(),
            _ => {
                // Printable input always lands in the query field, pulling
                // focus back to it.
                if self.query_input.input(key) {
                    self.focus = Focus::Query;
                }
            }
        }
        None
    }

    fn finish(&mut self) -> FormOutcome {
        FormOutcome {
            submissions: std::mem::take(&mut self.submissions),
        }
    }

    fn focus_next(&mut self) {
        self.shift_focus(1);
    }

    fn focus_previous(&mut self) {
        self.shift_focus(-1);
    }

    fn shift_focus(&mut self, delta: isize) {
        let ring = Focus::ring();
        let current = ring
            .iter()
            .position(|focus| *focus == self.focus)
            .unwrap_or(0) as isize;
        let len = ring.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.focus = ring[next];
    }
}
