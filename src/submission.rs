//! Submission snapshots and the sink they are emitted to.

use serde::Serialize;

use crate::sources::{FilterSet, SearchSource};

/// Immutable snapshot of the form taken at submit time.
///
/// The snapshot is emitted to a [`SubmissionSink`] and kept in the session's
/// submission log; it is never fed back into the form state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub query: String,
    pub filters: FilterSet,
}

impl Submission {
    pub fn new(query: impl Into<String>, filters: FilterSet) -> Self {
        Self {
            query: query.into(),
            filters,
        }
    }

    /// Labels of the sources that were enabled when the snapshot was taken.
    pub fn enabled_labels(&self) -> Vec<&'static str> {
        self.filters.enabled().map(SearchSource::label).collect()
    }
}

/// Destination for submission snapshots.
pub trait SubmissionSink {
    fn record(&mut self, submission: &Submission);
}

/// Emits each snapshot as a structured tracing event.
#[derive(Debug, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn record(&mut self, submission: &Submission) {
        tracing::info!(
            query = %submission.query,
            sources = ?submission.enabled_labels(),
            "form submitted"
        );
    }
}

/// Result of a form session, returned when the user exits.
#[derive(Debug, Default, Serialize)]
pub struct FormOutcome {
    pub submissions: Vec<Submission>,
}

impl FormOutcome {
    /// The most recent submission, if any were made.
    pub fn last(&self) -> Option<&Submission> {
        self.submissions.last()
    }
}
