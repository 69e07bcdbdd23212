use clap::Parser;

use finchart::cli::{Cli, Commands};
use finchart::commands::{
    run_export, run_infer, run_init, run_render, run_report, run_validate,
};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Render(args) => run_render(args, &cli),
        Commands::Export(args) => run_export(args, &cli),
        Commands::Infer(args) => run_infer(args, &cli),
        Commands::Validate(args) => run_validate(args, &cli),
        Commands::Report(args) => run_report(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
    };

    std::process::exit(exit_code);
}
