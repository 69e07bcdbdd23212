use crate::chart::ChartDocument;
use crate::cli::{Cli, ReportArgs};
use crate::error::{FinchartError, Result};
use crate::output::{HtmlFormatter, OutputFormatter};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{chart_sources, load_cli_config, read_json, report_error, verbose_note, write_output};
use super::render::render_sources;

const DEFAULT_REPORT_TITLE: &str = "Chart Report";

#[must_use]
pub fn run_report(args: &ReportArgs, cli: &Cli) -> i32 {
    match run_report_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e, cli);
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_report_impl(args: &ReportArgs, cli: &Cli) -> Result<()> {
    let config = load_cli_config(cli)?;

    let value = read_json(&args.transcript)?;
    let document = match ChartDocument::from_value(value) {
        Ok(document @ ChartDocument::Transcript(_)) => document,
        Ok(_) | Err(FinchartError::InvalidInput(_)) => {
            return Err(FinchartError::InvalidInput(format!(
                "{} is not a transcript (expected an array of messages or {{ \"messages\": [...] }})",
                args.transcript.display()
            )));
        }
        Err(FinchartError::Json(source)) => {
            return Err(FinchartError::ChartDocument {
                path: args.transcript.clone(),
                source,
            });
        }
        Err(e) => return Err(e),
    };

    let sources = chart_sources(&args.transcript, &document);
    verbose_note(cli, &format!("Found {} charts in transcript", sources.len()));

    let items = render_sources(sources, &config.render.palette(), &config, cli.quiet);
    let html = HtmlFormatter::new()
        .with_title(args.title.as_deref().unwrap_or(DEFAULT_REPORT_TITLE))
        .with_size(config.render.size())
        .format(&items)?;

    write_output(args.output.as_deref(), &html, cli.quiet)?;
    if let Some(path) = &args.output
        && !cli.quiet
    {
        println!("Report written to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
