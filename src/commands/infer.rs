use serde_json::Value;

use crate::chart::{Row, synthesize_table};
use crate::cli::{Cli, InferArgs};
use crate::error::{FinchartError, Result};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{load_cli_config, read_json, report_error, verbose_note, with_trailing_newline, write_output};

#[must_use]
pub fn run_infer(args: &InferArgs, cli: &Cli) -> i32 {
    match run_infer_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e, cli);
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_infer_impl(args: &InferArgs, cli: &Cli) -> Result<()> {
    // Config is loaded only so a broken config file is reported consistently.
    load_cli_config(cli)?;

    let rows = parse_rows(read_json(&args.input)?)?;
    verbose_note(cli, &format!("Inferring columns from {} rows", rows.len()));

    let chart = synthesize_table(args.title.clone(), rows);
    let output = serde_json::to_string_pretty(&chart)?;
    write_output(args.output.as_deref(), &with_trailing_newline(output), cli.quiet)
}

/// Rows from `[{...}, ...]` or `{ "rows": [...] }`.
///
/// # Errors
/// Returns an error if the value has another shape or a row is not an object.
pub(crate) fn parse_rows(value: Value) -> Result<Vec<Row>> {
    let rows = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => map.remove("rows").ok_or_else(|| {
            FinchartError::InvalidInput(
                "expected an array of rows or an object with a \"rows\" array".to_string(),
            )
        })?,
        _ => {
            return Err(FinchartError::InvalidInput(
                "expected an array of rows or an object with a \"rows\" array".to_string(),
            ));
        }
    };
    Ok(serde_json::from_value(rows)?)
}

#[cfg(test)]
#[path = "infer_tests.rs"]
mod tests;
