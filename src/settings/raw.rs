use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use super::resolved::{ConfigError, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;
use ctxsearch::sources::SearchSource;
use ctxsearch::ui::theme;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    ui: UiSection,
    sources: SourcesSection,
}

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    title: Option<String>,
    placeholder: Option<String>,
    initial_query: Option<String>,
    theme: Option<String>,
    require_query: Option<bool>,
}

/// Source filter configuration prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SourcesSection {
    enabled: Option<Vec<String>>,
}

const DEFAULT_TITLE: &str = "Contextual Search";
const DEFAULT_PLACEHOLDER: &str = "Ask anything...";

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(title) = cli.title.clone() {
            self.ui.title = Some(title);
        }
        if let Some(placeholder) = cli.placeholder.clone() {
            self.ui.placeholder = Some(placeholder);
        }
        if let Some(query) = cli.initial_query.clone() {
            self.ui.initial_query = Some(query);
        }
        if let Some(theme) = cli.theme.clone() {
            self.ui.theme = Some(theme);
        }
        if let Some(require_query) = cli.require_query {
            self.ui.require_query = Some(require_query);
        }
        if let Some(sources) = cli.sources.clone() {
            self.sources.enabled = Some(sources);
        }
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let theme_origin = detect_source(
            cli.theme.is_some(),
            "CTXSEARCH__UI__THEME",
            "--theme",
            "ui.theme",
        );
        let sources_origin = detect_source(
            cli.sources.is_some(),
            "CTXSEARCH__SOURCES__ENABLED",
            "--source",
            "sources.enabled",
        );

        let theme = match &self.ui.theme {
            None => theme::default_theme(),
            Some(name) => theme::by_name(name).ok_or_else(|| {
                Error::new(ConfigError::invalid(
                    "ui.theme",
                    name.clone(),
                    theme_origin,
                    "unknown theme (see --list-themes)",
                ))
            })?,
        };

        let mut enabled_sources = Vec::new();
        for name in self.sources.enabled.unwrap_or_default() {
            let source = SearchSource::by_name(&name).ok_or_else(|| {
                Error::new(ConfigError::invalid(
                    "sources.enabled",
                    name.clone(),
                    sources_origin,
                    "unknown source (see --list-sources)",
                ))
            })?;
            if !enabled_sources.contains(&source) {
                enabled_sources.push(source);
            }
        }

        Ok(ResolvedConfig {
            title: self.ui.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            placeholder: self
                .ui
                .placeholder
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
            initial_query: self.ui.initial_query.unwrap_or_default(),
            theme_name: self.ui.theme,
            theme,
            enabled_sources,
            require_query: self.ui.require_query.unwrap_or(false),
        })
    }
}

fn detect_source(
    cli_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> SettingSource {
    if cli_present {
        return SettingSource::CliFlag(cli_flag);
    }

    if env::var_os(env_var).is_some() {
        return SettingSource::Environment(env_var);
    }

    SettingSource::ConfigKey(key)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn bare_cli() -> CliArgs {
        CliArgs::parse_from(["ctxsearch"])
    }

    #[test]
    fn cli_overrides_take_precedence() {
        let mut cli = bare_cli();
        cli.title = Some("Desk".into());
        cli.placeholder = Some("Type here".into());
        cli.initial_query = Some("rust".into());
        cli.theme = Some("slate".into());
        cli.require_query = Some(true);
        cli.sources = Some(vec!["arXiv".into()]);

        let mut config = RawConfig::default();
        config.ui.title = Some("from file".into());
        config.sources.enabled = Some(vec!["Wikipedia".into()]);
        config.apply_cli_overrides(&cli);

        assert_eq!(config.ui.title, cli.title);
        assert_eq!(config.ui.placeholder, cli.placeholder);
        assert_eq!(config.ui.initial_query, cli.initial_query);
        assert_eq!(config.ui.theme, cli.theme);
        assert_eq!(config.ui.require_query, Some(true));
        assert_eq!(config.sources.enabled, Some(vec!["arXiv".to_string()]));
    }

    #[test]
    fn resolve_fills_defaults() {
        let resolved = RawConfig::default().resolve(&bare_cli()).expect("resolve");
        assert_eq!(resolved.title, "Contextual Search");
        assert_eq!(resolved.placeholder, "Ask anything...");
        assert_eq!(resolved.initial_query, "");
        assert!(resolved.enabled_sources.is_empty());
        assert!(!resolved.require_query);
    }

    #[test]
    fn unknown_theme_is_rejected_with_origin() {
        let mut cli = bare_cli();
        cli.theme = Some("neon".into());

        let mut config = RawConfig::default();
        config.apply_cli_overrides(&cli);

        let err = config.resolve(&cli).expect_err("unknown theme");
        let message = err.to_string();
        assert!(message.contains("ui.theme"));
        assert!(message.contains("--theme"));
        assert!(message.contains("neon"));
    }

    #[test]
    fn unknown_source_is_rejected() {
        let mut config = RawConfig::default();
        config.sources.enabled = Some(vec!["reddit".into()]);

        let err = config.resolve(&bare_cli()).expect_err("unknown source");
        assert!(err.to_string().contains("sources.enabled"));
    }

    #[test]
    fn duplicate_sources_are_deduplicated() {
        let mut config = RawConfig::default();
        config.sources.enabled = Some(vec!["wikipedia".into(), "Wikipedia".into()]);

        let resolved = config.resolve(&bare_cli()).expect("resolve");
        assert_eq!(resolved.enabled_sources, vec![SearchSource::Wikipedia]);
    }
}
