use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, FinchartError, Result};

use super::context::report_error;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            if !cli.quiet {
                println!("Created configuration file: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(&e, cli);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(FinchartError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, generate_config_template())?;
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r##"# finchart configuration file
version = "1"

[render]
# Size of each chart document in pixels
width = 640
height = 320

# Series colors, cycled by series index (default: built-in palette)
# palette = ["#2563eb", "#16a34a", "#f97316", "#9333ea", "#e11d48"]

[export]
# Directory for CSV exports (default: current directory)
output_dir = "."

[table]
# Show a table's footer as its caption
show_footer = true
"##
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
