use rayon::prelude::*;

use crate::cli::{Cli, RenderArgs};
use crate::config::Config;
use crate::error::{FinchartError, Result};
use crate::output::svg::ChartSize;
use crate::output::{
    BatchProgress, HtmlFormatter, JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter,
    RenderedItem, SvgFormatter, TextFormatter,
};
use crate::render::Palette;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{
    ChartSource, apply_table_config, collect_documents, color_choice_to_mode, load_cli_config,
    read_chart_sources, report_error, verbose_note, with_trailing_newline, write_output,
};

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e, cli);
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_render_impl(args: &RenderArgs, cli: &Cli) -> Result<()> {
    let config = load_cli_config(cli)?;
    let size = chart_size(args, &config)?;
    let palette = config.render.palette();

    let documents = collect_documents(&args.paths)?;
    let mut sources = Vec::new();
    for path in &documents {
        sources.extend(read_chart_sources(path)?);
    }
    verbose_note(
        cli,
        &format!("Found {} charts in {} documents", sources.len(), documents.len()),
    );

    let items = render_sources(sources, &palette, &config, cli.quiet);
    let failed = items.iter().filter(|item| item.error().is_some()).count();
    if failed > 0 {
        verbose_note(cli, &format!("{failed} charts failed to render"));
    }

    let output = match args.format {
        OutputFormat::Text => {
            TextFormatter::with_verbose(color_choice_to_mode(cli.color), cli.verbose)
                .format(&items)?
        }
        OutputFormat::Json => JsonFormatter.format(&items)?,
        OutputFormat::Markdown => MarkdownFormatter::new()
            .with_sources(cli.verbose > 0)
            .format(&items)?,
        OutputFormat::Svg => SvgFormatter::new().with_size(size).format(&items)?,
        OutputFormat::Html => {
            let mut formatter = HtmlFormatter::new().with_size(size);
            if let Some(title) = &args.title {
                formatter = formatter.with_title(title.clone());
            }
            formatter.format(&items)?
        }
    };

    write_output(args.output.as_deref(), &with_trailing_newline(output), cli.quiet)
}

/// Render chart payloads in parallel, keeping input order.
pub(crate) fn render_sources(
    sources: Vec<ChartSource>,
    palette: &Palette,
    config: &Config,
    quiet: bool,
) -> Vec<RenderedItem> {
    let progress = BatchProgress::new(sources.len() as u64, quiet);

    let items = sources
        .into_par_iter()
        .map(|mut chart| {
            apply_table_config(&mut chart.payload, config);
            let item = RenderedItem::render(chart.source, &chart.payload, palette);
            progress.inc();
            item
        })
        .collect();

    progress.finish();
    items
}

/// Chart size from the config, with command-line overrides.
fn chart_size(args: &RenderArgs, config: &Config) -> Result<ChartSize> {
    let size = ChartSize {
        width: args.width.unwrap_or(config.render.width),
        height: args.height.unwrap_or(config.render.height),
    };
    for (name, value) in [("--width", size.width), ("--height", size.height)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(FinchartError::InvalidInput(format!(
                "{name} must be a positive number, got {value}"
            )));
        }
    }
    Ok(size)
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
