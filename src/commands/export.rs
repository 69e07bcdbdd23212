use std::collections::HashSet;
use std::path::PathBuf;

use serde::Deserialize;

use crate::chart::{ChartData, ChartKind};
use crate::cli::{Cli, ExportArgs};
use crate::error::{FinchartError, Result};
use crate::export::{CsvExport, export_csv, write_download};
use crate::output::print_warning_full;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{
    ChartSource, load_cli_config, read_chart_sources, report_error, verbose_note,
};

#[must_use]
pub fn run_export(args: &ExportArgs, cli: &Cli) -> i32 {
    match run_export_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e, cli);
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_export_impl(args: &ExportArgs, cli: &Cli) -> Result<()> {
    let config = load_cli_config(cli)?;
    let sources = read_chart_sources(&args.input)?;
    let exports = collect_exports(&sources, cli.quiet);

    if exports.is_empty() {
        return Err(FinchartError::InvalidInput(format!(
            "no exportable chart data in {}",
            args.input.display()
        )));
    }

    if args.stdout {
        let body: Vec<_> = exports.iter().map(|export| export.content.as_str()).collect();
        println!("{}", body.join("\n\n"));
        return Ok(());
    }

    let dir = args
        .dir
        .clone()
        .unwrap_or_else(|| config.export.output_dir.clone());
    for path in write_all(&exports, &dir)? {
        if !cli.quiet {
            println!("Exported {}", path.display());
        }
    }
    verbose_note(cli, &format!("{} CSV files written to {}", exports.len(), dir.display()));
    Ok(())
}

/// CSV exports for every chart that matches the contract, with unique file names.
///
/// Unknown chart types and payloads that fail to parse are skipped with a warning.
pub(crate) fn collect_exports(sources: &[ChartSource], quiet: bool) -> Vec<CsvExport> {
    let mut exports = Vec::new();
    let mut taken = HashSet::new();

    for source in sources {
        let chart = match ChartData::deserialize(&source.payload) {
            Ok(chart) => chart,
            Err(e) => {
                if !quiet {
                    print_warning_full(
                        &format!("Skipping {}", source.source),
                        Some(&e.to_string()),
                        None,
                    );
                }
                continue;
            }
        };
        if matches!(chart.kind(), ChartKind::Unknown(_)) {
            continue;
        }

        let mut export = export_csv(&chart);
        export.filename = unique_filename(&export.filename, &mut taken);
        exports.push(export);
    }

    exports
}

/// `name.csv`, then `name (2).csv`, `name (3).csv`... for repeats.
fn unique_filename(filename: &str, taken: &mut HashSet<String>) -> String {
    let stem = filename.strip_suffix(".csv").unwrap_or(filename);
    let mut candidate = filename.to_string();
    let mut n = 2;
    while !taken.insert(candidate.clone()) {
        candidate = format!("{stem} ({n}).csv");
        n += 1;
    }
    candidate
}

fn write_all(exports: &[CsvExport], dir: &std::path::Path) -> Result<Vec<PathBuf>> {
    exports
        .iter()
        .map(|export| write_download(export, dir))
        .collect()
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
