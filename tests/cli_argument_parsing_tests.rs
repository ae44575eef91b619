//! Tests for CLI argument parsing functionality
//!
//! These tests verify that command line arguments are properly parsed and
//! merged into the simulation configuration.

use airport_security_simulator::types::config::{CliArgs, SimulationConfig};
use clap::Parser;

/// Test that a bare invocation leaves everything at defaults
#[test]
fn test_no_arguments_uses_defaults() {
    let cli_args = CliArgs::try_parse_from(["test"]).unwrap();
    assert!(cli_args.config.is_none());
    assert!(cli_args.arrival_rate.is_none());
    assert!(cli_args.seed.is_none());
    assert!(!cli_args.verbose);
    assert!(!cli_args.debug);
    assert!(!cli_args.dry_run);
    assert!(!cli_args.print_config);

    let config = SimulationConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config.arrival_rate, 50.0);
    assert_eq!(config.horizon, 300.0);
    assert_eq!(config.seed, 42);
    config.validate().unwrap();
}

/// Test parsing of the model parameters
#[test]
fn test_model_parameter_parsing() {
    let cli_args = CliArgs::try_parse_from([
        "test",
        "--arrival-rate",
        "35.5",
        "--mean-id-check-time",
        "0.9",
        "--min-scan-time",
        "0.4",
        "--max-scan-time",
        "1.2",
    ])
    .unwrap();

    assert_eq!(cli_args.arrival_rate, Some(35.5));
    assert_eq!(cli_args.mean_id_check_time, Some(0.9));
    assert_eq!(cli_args.min_scan_time, Some(0.4));
    assert_eq!(cli_args.max_scan_time, Some(1.2));

    let config = SimulationConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config.arrival_rate, 35.5);
    assert_eq!(config.mean_id_check_time, 0.9);
    assert_eq!(config.min_scan_time, 0.4);
    assert_eq!(config.max_scan_time, 1.2);
}

/// Test parsing of the sweep bounds
#[test]
fn test_sweep_range_parsing() {
    let cli_args = CliArgs::try_parse_from([
        "test",
        "--min-id-checkers",
        "2",
        "--max-id-checkers",
        "4",
        "--min-scanners",
        "3",
        "--max-scanners",
        "5",
    ])
    .unwrap();

    let config = SimulationConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config.id_checker_range(), 2..=4);
    assert_eq!(config.scanner_range(), 3..=5);
    assert_eq!(config.sweep_size(), 9);
    config.validate().unwrap();
}

/// Test that invalid ranges parse but fail validation
#[test]
fn test_inverted_range_fails_validation_not_parsing() {
    let cli_args = CliArgs::try_parse_from([
        "test",
        "--min-id-checkers",
        "10",
        "--max-id-checkers",
        "5",
    ])
    .unwrap();

    let config = SimulationConfig::from_cli_args(cli_args).unwrap();
    assert!(config.validate().is_err(), "Inverted range should fail validation");
}

/// Test seed and horizon parsing
#[test]
fn test_seed_and_horizon_parsing() {
    let cli_args =
        CliArgs::try_parse_from(["test", "--seed", "12345", "--horizon", "480"]).unwrap();
    assert_eq!(cli_args.seed, Some(12345));
    assert_eq!(cli_args.horizon, Some(480.0));

    let config = SimulationConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config.seed, 12345);
    assert_eq!(config.horizon, 480.0);
}

/// Test flag parsing alongside value arguments
#[test]
fn test_flags_with_other_options() {
    let cli_args = CliArgs::try_parse_from([
        "test",
        "--arrival-rate",
        "25",
        "--results-output",
        "results.json",
        "--verbose",
        "--dry-run",
    ])
    .unwrap();

    assert!(cli_args.verbose);
    assert!(cli_args.dry_run);
    assert_eq!(cli_args.results_output.as_deref(), Some("results.json"));

    let config = SimulationConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config.arrival_rate, 25.0);
    assert_eq!(config.results_output.as_deref(), Some("results.json"));
}

/// Test that unknown arguments are rejected
#[test]
fn test_unknown_argument_is_rejected() {
    let result = CliArgs::try_parse_from(["test", "--no-such-flag"]);
    assert!(result.is_err());
}

/// Test that non-numeric values for numeric arguments are rejected
#[test]
fn test_non_numeric_value_is_rejected() {
    let result = CliArgs::try_parse_from(["test", "--arrival-rate", "fast"]);
    assert!(result.is_err());
}
