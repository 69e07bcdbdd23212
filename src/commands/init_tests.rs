use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;

use super::{generate_config_template, run_init, run_init_impl};
use crate::cli::{Cli, InitArgs};
use crate::config::{Config, validate_config_semantics};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

#[test]
fn generate_config_template_has_every_section() {
    let template = generate_config_template();
    assert!(template.contains("version = \"1\""));
    assert!(template.contains("[render]"));
    assert!(template.contains("[export]"));
    assert!(template.contains("[table]"));
}

#[test]
fn generate_config_template_is_valid_config() {
    let config: Config = toml::from_str(&generate_config_template()).unwrap();
    assert!(validate_config_semantics(&config).is_ok());
    assert_eq!(
        Config {
            version: None,
            ..config
        },
        Config::default()
    );
}

#[test]
fn init_creates_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("nested/.finchart.toml");
    let args = InitArgs {
        output: output.clone(),
        force: false,
    };

    run_init_impl(&args).unwrap();

    assert_eq!(std::fs::read_to_string(output).unwrap(), generate_config_template());
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join(".finchart.toml");
    std::fs::write(&output, "existing").unwrap();
    let args = InitArgs {
        output: output.clone(),
        force: false,
    };

    let err = run_init_impl(&args).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "existing");

    let cli = Cli::parse_from(["finchart", "--quiet", "init"]);
    assert_eq!(run_init(&args, &cli), EXIT_CONFIG_ERROR);
}

#[test]
fn init_force_overwrites() {
    let dir = TempDir::new().unwrap();
    let output: PathBuf = dir.path().join(".finchart.toml");
    std::fs::write(&output, "existing").unwrap();
    let args = InitArgs {
        output: output.clone(),
        force: true,
    };

    let cli = Cli::parse_from(["finchart", "--quiet", "init", "--force"]);
    assert_eq!(run_init(&args, &cli), EXIT_SUCCESS);
    assert!(std::fs::read_to_string(output).unwrap().contains("[render]"));
}
