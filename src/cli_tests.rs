use std::path::PathBuf;

use super::*;

#[test]
fn cli_render_defaults() {
    let cli = Cli::parse_from(["finchart", "render", "chart.json"]);
    match cli.command {
        Commands::Render(args) => {
            assert_eq!(args.paths, vec![PathBuf::from("chart.json")]);
            assert_eq!(args.format, OutputFormat::Text);
            assert!(args.output.is_none());
            assert!(args.width.is_none());
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn cli_render_requires_paths() {
    assert!(Cli::try_parse_from(["finchart", "render"]).is_err());
}

#[test]
fn cli_render_with_format_and_output() {
    let cli = Cli::parse_from([
        "finchart", "render", "a.json", "charts/", "-f", "html", "-o", "out.html", "--width",
        "800",
    ]);
    match cli.command {
        Commands::Render(args) => {
            assert_eq!(args.paths.len(), 2);
            assert_eq!(args.format, OutputFormat::Html);
            assert_eq!(args.output, Some(PathBuf::from("out.html")));
            assert_eq!(args.width, Some(800.0));
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn cli_render_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["finchart", "render", "a.json", "-f", "pdf"]).is_err());
}

#[test]
fn cli_export_dir() {
    let cli = Cli::parse_from(["finchart", "export", "table.json", "-d", "out"]);
    match cli.command {
        Commands::Export(args) => {
            assert_eq!(args.input, PathBuf::from("table.json"));
            assert_eq!(args.dir, Some(PathBuf::from("out")));
            assert!(!args.stdout);
        }
        _ => panic!("Expected Export command"),
    }
}

#[test]
fn cli_export_stdout_conflicts_with_dir() {
    assert!(Cli::try_parse_from(["finchart", "export", "t.json", "-d", "x", "--stdout"]).is_err());
}

#[test]
fn cli_infer_title() {
    let cli = Cli::parse_from(["finchart", "infer", "rows.json", "--title", "Top Customers"]);
    match cli.command {
        Commands::Infer(args) => {
            assert_eq!(args.title, "Top Customers");
        }
        _ => panic!("Expected Infer command"),
    }
}

#[test]
fn cli_infer_title_defaults_empty() {
    let cli = Cli::parse_from(["finchart", "infer", "rows.json"]);
    match cli.command {
        Commands::Infer(args) => assert!(args.title.is_empty()),
        _ => panic!("Expected Infer command"),
    }
}

#[test]
fn cli_report() {
    let cli = Cli::parse_from(["finchart", "report", "chat.json", "-o", "report.html"]);
    match cli.command {
        Commands::Report(args) => {
            assert_eq!(args.transcript, PathBuf::from("chat.json"));
            assert_eq!(args.output, Some(PathBuf::from("report.html")));
        }
        _ => panic!("Expected Report command"),
    }
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["finchart", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".finchart.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn cli_global_flags_after_subcommand() {
    let cli = Cli::parse_from([
        "finchart", "validate", "a.json", "-vv", "--quiet", "--color", "never", "--no-config",
        "-c", "custom.toml",
    ]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
    assert_eq!(cli.color, ColorChoice::Never);
    assert!(cli.no_config);
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
}

#[test]
fn cli_color_default_auto() {
    let cli = Cli::parse_from(["finchart", "validate", "a.json"]);
    assert_eq!(cli.color, ColorChoice::Auto);
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
