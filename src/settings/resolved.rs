use std::fmt;

use thiserror::Error;

use ctxsearch::sources::SearchSource;
use ctxsearch::ui::FormConfig;
use ctxsearch::ui::theme::Theme;

/// Application-ready configuration derived from CLI arguments, config files
/// and defaults.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
    pub(crate) title: String,
    pub(crate) placeholder: String,
    pub(crate) initial_query: String,
    pub(crate) theme_name: Option<String>,
    pub(crate) theme: Theme,
    pub(crate) enabled_sources: Vec<SearchSource>,
    pub(crate) require_query: bool,
}

impl ResolvedConfig {
    /// Convert into the startup parameters for the form session.
    pub(crate) fn form_config(self) -> FormConfig {
        FormConfig {
            title: self.title,
            placeholder: self.placeholder,
            initial_query: self.initial_query,
            enabled_sources: self.enabled_sources,
            theme: self.theme,
            require_query: self.require_query,
        }
    }

    /// Print a human readable summary of the effective configuration.
    pub(crate) fn print_summary(&self) {
        println!("title: {}", self.title);
        println!("placeholder: {}", self.placeholder);
        println!("initial query: {:?}", self.initial_query);
        println!(
            "theme: {}",
            self.theme_name.as_deref().unwrap_or("parchment (default)")
        );
        let sources = self
            .enabled_sources
            .iter()
            .map(|source| source.label())
            .collect::<Vec<_>>();
        println!(
            "enabled sources: {}",
            if sources.is_empty() {
                "none".to_string()
            } else {
                sources.join(", ")
            }
        );
        println!("require query: {}", self.require_query);
    }
}

/// Where a configuration value originated from.
#[derive(Debug, Clone, Copy)]
pub(crate) enum SettingSource {
    CliFlag(&'static str),
    Environment(&'static str),
    ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CliFlag(flag) => write!(f, "flag {flag}"),
            Self::Environment(var) => write!(f, "environment variable {var}"),
            Self::ConfigKey(key) => write!(f, "configuration key {key}"),
        }
    }
}

#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
pub(crate) struct ConfigError {
    pub(crate) key: &'static str,
    pub(crate) value: String,
    pub(crate) origin: SettingSource,
    pub(crate) reason: String,
}

impl ConfigError {
    pub(crate) fn invalid<V, R>(
        key: &'static str,
        value: V,
        origin: SettingSource,
        reason: R,
    ) -> Self
    where
        V: Into<String>,
        R: Into<String>,
    {
        Self {
            key,
            value: value.into(),
            origin,
            reason: reason.into(),
        }
    }
}
