mod cli;
mod settings;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use ctxsearch::sources::SearchSource;
use ctxsearch::ui::theme;
use settings::ResolvedConfig;

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        for name in theme::names() {
            println!("{name}");
        }
        return Ok(());
    }

    if cli.list_sources {
        for source in SearchSource::ALL {
            println!("{}", source.label());
        }
        return Ok(());
    }

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    ctxsearch::logging::init();

    run_form(cli.output, resolved)
}

/// Run the entry form and print the submission log in the chosen format.
fn run_form(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
    let outcome = ctxsearch::ui::run(settings.form_config())?;

    match format {
        OutputFormat::Plain => print_plain(&outcome),
        OutputFormat::Json => print_json(&outcome)?,
    }

    Ok(())
}
