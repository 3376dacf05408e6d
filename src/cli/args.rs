use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser, ValueEnum};

use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `ctxsearch` binary.
#[derive(Parser, Debug)]
#[command(
    name = "ctxsearch",
    version,
    long_version = long_version(),
    about = "Terminal entry form for contextual search",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "CTXSEARCH_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 't',
        long,
        value_name = "TITLE",
        help = "Override the header title (default: Contextual Search)"
    )]
    pub(crate) title: Option<String>,
    #[arg(
        short = 'p',
        long,
        value_name = "TEXT",
        help = "Override the query placeholder (default: Ask anything...)"
    )]
    pub(crate) placeholder: Option<String>,
    #[arg(
        short = 'q',
        long,
        value_name = "QUERY",
        help = "Provide an initial query (default: empty)"
    )]
    pub(crate) initial_query: Option<String>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: parchment)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        short = 's',
        long = "source",
        value_name = "NAME",
        action = ArgAction::Append,
        help = "Enable a source filter at startup (repeatable; default: none)"
    )]
    pub(crate) sources: Option<Vec<String>>,
    #[arg(
        long = "require-query",
        value_name = "BOOL",
        num_args(0..=1),
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        help = "Ignore submissions with an empty query (default: disabled)"
    )]
    pub(crate) require_query: Option<bool>,
    #[arg(
        short = 'o',
        long,
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Output format for the submission log on exit"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        long = "print-config",
        help = "Print the resolved configuration before starting"
    )]
    pub(crate) print_config: bool,
    #[arg(long = "list-themes", help = "List available theme names and exit")]
    pub(crate) list_themes: bool,
    #[arg(long = "list-sources", help = "List the fixed source names and exit")]
    pub(crate) list_sources: bool,
}

/// How the submission log is printed when the session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_permissive() {
        let cli = CliArgs::parse_from(["ctxsearch"]);
        assert!(!cli.no_config);
        assert_eq!(cli.require_query, None);
        assert_eq!(cli.output, OutputFormat::Plain);
        assert!(cli.sources.is_none());
    }

    #[test]
    fn repeated_source_flags_accumulate() {
        let cli = CliArgs::parse_from(["ctxsearch", "-s", "Wikipedia", "--source", "arXiv"]);
        assert_eq!(
            cli.sources,
            Some(vec!["Wikipedia".to_string(), "arXiv".to_string()])
        );
    }

    #[test]
    fn require_query_flag_defaults_to_true_when_bare() {
        let cli = CliArgs::parse_from(["ctxsearch", "--require-query"]);
        assert_eq!(cli.require_query, Some(true));

        let cli = CliArgs::parse_from(["ctxsearch", "--require-query", "false"]);
        assert_eq!(cli.require_query, Some(false));
    }
}
