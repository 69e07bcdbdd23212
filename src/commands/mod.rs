//! Subcommand implementations.
//!
//! Each command exposes `run_<name>(args, cli) -> i32` returning the process
//! exit code, wrapping a `run_<name>_impl` that returns `Result`.

pub mod context;
pub mod export;
pub mod infer;
pub mod init;
pub mod render;
pub mod report;
pub mod validate;

pub use context::{ChartSource, chart_sources};
pub use export::run_export;
pub use infer::run_infer;
pub use init::{generate_config_template, run_init, run_init_impl};
pub use render::run_render;
pub use report::run_report;
pub use validate::{ValidationEntry, format_report, run_validate, validate_source};
