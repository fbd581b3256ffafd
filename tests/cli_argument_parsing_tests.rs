//! Tests for CLI argument parsing and configuration layering

use clap::Parser;
use std::io::Write;
use tempfile::Builder;
use visitor_simulator::types::config::{CliArgs, SimulationConfig};

/// Defaults when no flags are given
#[test]
fn test_no_arguments() {
    let args = CliArgs::try_parse_from(["visitor-simulator"]).unwrap();
    assert!(args.config.is_none());
    assert!(args.tick_interval_ms.is_none());
    assert!(!args.dry_run);
    assert!(!args.contact);

    let config = SimulationConfig::from_cli_args(args).unwrap();
    assert_eq!(config, SimulationConfig::default());
}

/// Simulation flags override defaults
#[test]
fn test_simulation_flags() {
    let args = CliArgs::try_parse_from([
        "visitor-simulator",
        "--tick-interval-ms",
        "250",
        "--ticks",
        "40",
        "--behavior-probability",
        "0.9",
        "--seed",
        "7",
        "--output-format",
        "json",
        "--contact",
    ])
    .unwrap();
    assert!(args.contact);

    let config = SimulationConfig::from_cli_args(args).unwrap();
    assert_eq!(config.tick_interval_ms, 250);
    assert_eq!(config.ticks, 40);
    assert_eq!(config.behavior_probability, 0.9);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.output_format, "json");
    assert!(config.validate().is_ok());
}

/// Non-numeric values are rejected by the parser
#[test]
fn test_invalid_numeric_argument() {
    assert!(CliArgs::try_parse_from(["visitor-simulator", "--ticks", "many"]).is_err());
}

/// Out-of-range probability parses but fails validation
#[test]
fn test_probability_validation() {
    let args =
        CliArgs::try_parse_from(["visitor-simulator", "--new-visitor-probability", "1.5"]).unwrap();
    let config = SimulationConfig::from_cli_args(args).unwrap();
    assert!(config.validate().is_err());
}

/// CLI flags win over the config file, which wins over defaults
#[test]
fn test_config_file_layering() {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"ticks": 5, "top_n": 3, "seed": 11}}"#).unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let args =
        CliArgs::try_parse_from(["visitor-simulator", "--config", path.as_str(), "--ticks", "9"])
            .unwrap();
    let config = SimulationConfig::from_cli_args(args).unwrap();

    assert_eq!(config.ticks, 9);
    assert_eq!(config.top_n, 3);
    assert_eq!(config.seed, Some(11));
    assert_eq!(config.initial_visitors, 5);
}

/// Missing config files are reported
#[test]
fn test_missing_config_file() {
    let args =
        CliArgs::try_parse_from(["visitor-simulator", "--config", "/nonexistent/config.json"])
            .unwrap();
    assert!(SimulationConfig::from_cli_args(args).is_err());
}
