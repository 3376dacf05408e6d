use ratatui::style::{Color, Modifier, Style};

use super::{Theme, ThemeDefinition};

/// Palette carried over from the original web front end: cream entry field,
/// brick-red text, terracotta accent.
pub const PARCHMENT: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(154, 36, 36))
        .add_modifier(Modifier::BOLD),
    field: Style::new()
        .fg(Color::Rgb(154, 36, 36))
        .bg(Color::Rgb(246, 235, 223)),
    label: Style::new().fg(Color::Rgb(154, 36, 36)),
    accent: Style::new()
        .fg(Color::Rgb(207, 92, 73))
        .add_modifier(Modifier::BOLD),
    empty: Style::new().fg(Color::DarkGray),
};

/// Dark variant for terminals where the cream palette washes out.
pub const SLATE: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .bg(Color::Rgb(15, 23, 42))
        .add_modifier(Modifier::BOLD),
    field: Style::new()
        .fg(Color::Rgb(250, 204, 21))
        .bg(Color::Rgb(30, 41, 59)),
    label: Style::new().fg(Color::Rgb(226, 232, 240)),
    accent: Style::new()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD),
    empty: Style::new().fg(Color::DarkGray),
};

pub(super) const DEFINITIONS: [ThemeDefinition; 2] = [
    ThemeDefinition {
        name: "parchment",
        theme: PARCHMENT,
    },
    ThemeDefinition {
        name: "slate",
        theme: SLATE,
    },
];

/// Theme used when no selection is configured.
pub const fn default_theme() -> Theme {
    PARCHMENT
}
