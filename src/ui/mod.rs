//! Interactive terminal form.
//!
//! The UI is a single frame: a static header above the entry form. The form
//! owns the query line and the source toggles; the event loop in `runtime`
//! feeds key presses into [`App::handle_key`] until the user exits.

pub mod components;
pub mod input;
mod render;
mod runtime;
mod state;
pub mod theme;

pub use runtime::run;
pub use state::{App, Focus, FormConfig};
