//! Colour themes for the form surface.

mod builtins;

pub use builtins::{PARCHMENT, SLATE, default_theme};

use ratatui::style::Style;

/// Style bundle applied across the header, toggles and query entry.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub header: Style,
    pub field: Style,
    pub label: Style,
    pub accent: Style,
    pub empty: Style,
}

impl Theme {
    #[must_use]
    pub fn header_style(&self) -> Style {
        self.header
    }

    #[must_use]
    pub fn field_style(&self) -> Style {
        self.field
    }

    #[must_use]
    pub fn label_style(&self) -> Style {
        self.label
    }

    #[must_use]
    pub fn accent_style(&self) -> Style {
        self.accent
    }

    #[must_use]
    pub fn empty_style(&self) -> Style {
        self.empty
    }
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
    pub name: &'static str,
    pub theme: Theme,
}

/// Names of the built-in themes, in registration order.
pub fn names() -> Vec<&'static str> {
    builtins::DEFINITIONS
        .iter()
        .map(|definition| definition.name)
        .collect()
}

/// Look a built-in theme up by name, ignoring case.
pub fn by_name(name: &str) -> Option<Theme> {
    builtins::DEFINITIONS
        .iter()
        .find(|definition| definition.name.eq_ignore_ascii_case(name.trim()))
        .map(|definition| definition.theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(by_name("Parchment").is_some());
        assert!(by_name("SLATE").is_some());
        assert!(by_name("neon").is_none());
    }

    #[test]
    fn every_builtin_is_listed() {
        let listed = names();
        assert!(listed.contains(&"parchment"));
        assert!(listed.contains(&"slate"));
    }
}
