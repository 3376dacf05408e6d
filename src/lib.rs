//! Core crate exports for building and running the `ctxsearch` terminal form.
//!
//! The root module re-exports the form state, source filter types, and
//! submission types so that embedders can drive the entry form without
//! digging through the module hierarchy.

pub mod app_dirs;
pub mod logging;
pub mod sources;
pub mod submission;
pub mod ui;

pub use sources::{FilterSet, SearchSource};
pub use submission::{FormOutcome, Submission, SubmissionSink, TracingSink};
pub use ui::theme::{Theme, default_theme};
pub use ui::{App, Focus, FormConfig, run};
