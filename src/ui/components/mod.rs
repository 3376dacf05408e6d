//! Reusable widgets for the form surface.

mod header;
mod prompt;
mod toggles;

pub use header::render_header;
pub use prompt::{PromptContext, render_prompt};
pub use toggles::{TogglesContext, render_toggles};
