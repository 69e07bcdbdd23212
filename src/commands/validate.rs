use std::fmt::Write;

use serde::Deserialize;

use crate::chart::ChartData;
use crate::cli::{Cli, ValidateArgs};
use crate::error::Result;
use crate::output::stdout_supports_color;
use crate::{EXIT_CONFIG_ERROR, EXIT_CONTRACT_ISSUES, EXIT_SUCCESS};

use super::context::{
    ChartSource, collect_documents, color_choice_to_mode, load_cli_config, read_chart_sources,
    report_error, verbose_note,
};

/// Contract problems found in one chart payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationEntry {
    pub source: String,
    pub issues: Vec<String>,
}

impl ValidationEntry {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

#[must_use]
pub fn run_validate(args: &ValidateArgs, cli: &Cli) -> i32 {
    match run_validate_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            report_error(&e, cli);
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_validate_impl(args: &ValidateArgs, cli: &Cli) -> Result<i32> {
    load_cli_config(cli)?;

    let mut entries = Vec::new();
    for path in collect_documents(&args.paths)? {
        let sources = read_chart_sources(&path)?;
        if sources.is_empty() {
            verbose_note(cli, &format!("{}: no charts", path.display()));
        }
        entries.extend(sources.iter().map(validate_source));
    }

    let use_colors = stdout_supports_color(color_choice_to_mode(cli.color));
    let report = format_report(&entries, cli.verbose > 0, use_colors);
    if !cli.quiet {
        print!("{report}");
    }

    if entries.iter().all(ValidationEntry::is_valid) {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_CONTRACT_ISSUES)
    }
}

/// Check one payload: it must deserialize, then satisfy its type's invariants.
#[must_use]
pub fn validate_source(source: &ChartSource) -> ValidationEntry {
    let issues = match ChartData::deserialize(&source.payload) {
        Ok(chart) => chart.validate().iter().map(ToString::to_string).collect(),
        Err(e) => vec![format!("does not match the chart-data contract: {e}")],
    };
    ValidationEntry {
        source: source.source.clone(),
        issues,
    }
}

/// Failed charts with their issues, passing charts when `verbose`, then a summary.
#[must_use]
pub fn format_report(entries: &[ValidationEntry], verbose: bool, use_colors: bool) -> String {
    use crate::output::ansi;

    let paint = |style: &str, text: &str| {
        if use_colors {
            format!("{style}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    };

    let mut output = String::new();
    for entry in entries {
        if entry.is_valid() {
            if verbose {
                let _ = writeln!(output, "{} {}", paint(ansi::GREEN, "✓"), entry.source);
            }
            continue;
        }
        let _ = writeln!(output, "{} {}", paint(ansi::RED, "✖"), entry.source);
        for issue in &entry.issues {
            let _ = writeln!(output, "    {issue}");
        }
    }

    let failed = entries.iter().filter(|entry| !entry.is_valid()).count();
    let summary = format!(
        "Checked {} charts: {} passed, {failed} with issues",
        entries.len(),
        entries.len() - failed
    );
    let style = if failed > 0 { ansi::YELLOW } else { ansi::GREEN };
    let _ = writeln!(output, "{}", paint(style, &summary));
    output
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
