use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let builder = build_config(cli)?;
    let mut raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve(cli)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;

    use super::*;
    use ctxsearch::SearchSource;

    #[test]
    fn explicit_config_file_is_applied() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ctxsearch.toml");
        fs::write(
            &path,
            r#"
[ui]
title = "Research Desk"
theme = "slate"

[sources]
enabled = ["arXiv"]
"#,
        )
        .expect("write config");

        let mut cli = CliArgs::parse_from(["ctxsearch", "--no-config"]);
        cli.config = vec![path];

        let resolved = load(&cli).expect("load");
        assert_eq!(resolved.title, "Research Desk");
        assert_eq!(resolved.theme_name.as_deref(), Some("slate"));
        assert_eq!(resolved.enabled_sources, vec![SearchSource::ArXiv]);
        assert!(!resolved.require_query);
    }

    #[test]
    fn missing_explicit_config_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut cli = CliArgs::parse_from(["ctxsearch", "--no-config"]);
        cli.config = vec![dir.path().join("nope.toml")];

        assert!(load(&cli).is_err());
    }
}
