//! File-backed tracing setup.
//!
//! The terminal belongs to the UI while the form is running, so log events
//! are written to `ctxsearch.log` in the data directory instead of stderr.
//! Submission snapshots reach this log through
//! [`TracingSink`](crate::submission::TracingSink).

use std::fs::{self, OpenOptions};
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

const LOG_FILE: &str = "ctxsearch.log";
const FILTER_ENV: &str = "CTXSEARCH_LOG";

/// Install the global tracing subscriber.
///
/// Failures are reported on stderr before the terminal is initialized and
/// never abort the application.
pub fn init() {
    if let Err(err) = try_init() {
        eprintln!("ctxsearch: logging disabled: {err}");
    }
}

fn try_init() -> Result<()> {
    let dir = app_dirs::get_data_dir()?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create data directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;

    Ok(())
}
