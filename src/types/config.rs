//! Configuration structures for the checkpoint simulator
//!
//! This module contains the simulation configuration structure and validation
//! logic used to control the queueing model parameters and the staffing sweep.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "airport-security-simulator",
    version = "1.0.0",
    about = "Airport Security Simulator - finds staffing levels that meet a wait-time target",
    long_about = "Simulates a two-stage airport security checkpoint (ID check, then body scan) \
as a stochastic discrete-event model, sweeping a grid of staffing configurations to find the \
cheapest one whose average passenger system time stays below the target.

EXAMPLES:
    # Run with the default busy-airport parameters
    airport-security-simulator

    # Use a configuration file
    airport-security-simulator --config config.json

    # Override specific settings
    airport-security-simulator --arrival-rate 40 --target-avg-time 10

    # Generate a configuration template
    airport-security-simulator --print-config > my-config.json

    # Validate a configuration without running the sweep
    airport-security-simulator --config my-config.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Passenger arrival rate, per minute
    #[arg(
        long,
        help = "Passenger arrival rate (passengers per minute)",
        long_help = "Rate of the Poisson arrival process in passengers per minute. Must be greater than 0. Default: 50"
    )]
    pub arrival_rate: Option<f64>,

    /// Mean ID/boarding-pass check duration, in minutes
    #[arg(
        long,
        help = "Mean ID check service time (minutes)",
        long_help = "Mean of the exponential ID-check service time in minutes. Must be greater than 0. Default: 0.75"
    )]
    pub mean_id_check_time: Option<f64>,

    /// Minimum body scan duration, in minutes
    #[arg(long, help = "Minimum body scan time (minutes)")]
    pub min_scan_time: Option<f64>,

    /// Maximum body scan duration, in minutes
    #[arg(long, help = "Maximum body scan time (minutes)")]
    pub max_scan_time: Option<f64>,

    /// Simulated run length, in minutes
    #[arg(
        long,
        help = "Simulation horizon (minutes)",
        long_help = "How many simulated minutes each configuration is run for. Passengers still \
in the checkpoint at the horizon are discarded. Must be non-negative. Default: 300"
    )]
    pub horizon: Option<f64>,

    /// Service-level target for the average system time, in minutes
    #[arg(
        long,
        help = "Target average system time (minutes)",
        long_help = "A staffing configuration is viable when its average passenger system time \
is below this target. Must be greater than 0. Default: 15"
    )]
    pub target_avg_time: Option<f64>,

    /// Smallest number of ID checkers to evaluate
    #[arg(long, help = "Minimum ID checkers in the sweep")]
    pub min_id_checkers: Option<usize>,

    /// Largest number of ID checkers to evaluate
    #[arg(long, help = "Maximum ID checkers in the sweep")]
    pub max_id_checkers: Option<usize>,

    /// Smallest number of scanners to evaluate
    #[arg(long, help = "Minimum scanners in the sweep")]
    pub min_scanners: Option<usize>,

    /// Largest number of scanners to evaluate
    #[arg(long, help = "Maximum scanners in the sweep")]
    pub max_scanners: Option<usize>,

    /// Random seed for reproducible runs
    #[arg(
        long,
        help = "Random seed for reproducible results",
        long_help = "Every configuration in the sweep is run once with this seed, so results \
are reproducible run to run. Default: 42"
    )]
    pub seed: Option<u64>,

    /// Output path for sweep results (JSON)
    #[arg(long, help = "Output path for sweep results JSON file")]
    pub results_output: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running the sweep
    #[arg(long, help = "Validate configuration without running the sweep")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Passenger arrival rate, per minute
    pub arrival_rate: Option<f64>,

    /// Mean ID check duration, in minutes
    pub mean_id_check_time: Option<f64>,

    /// Minimum body scan duration, in minutes
    pub min_scan_time: Option<f64>,

    /// Maximum body scan duration, in minutes
    pub max_scan_time: Option<f64>,

    /// Simulated run length, in minutes
    pub horizon: Option<f64>,

    /// Service-level target for the average system time, in minutes
    pub target_avg_time: Option<f64>,

    /// Smallest number of ID checkers to evaluate
    pub min_id_checkers: Option<usize>,

    /// Largest number of ID checkers to evaluate
    pub max_id_checkers: Option<usize>,

    /// Smallest number of scanners to evaluate
    pub min_scanners: Option<usize>,

    /// Largest number of scanners to evaluate
    pub max_scanners: Option<usize>,

    /// Random seed for reproducible runs
    pub seed: Option<u64>,

    /// Output path for sweep results (JSON)
    pub results_output: Option<String>,
}

/// Configuration for the checkpoint simulation and staffing sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Passenger arrival rate in passengers per minute (Poisson process)
    pub arrival_rate: f64,

    /// Mean of the exponential ID-check service time, in minutes
    pub mean_id_check_time: f64,

    /// Lower bound of the uniform body-scan service time, in minutes
    pub min_scan_time: f64,

    /// Upper bound of the uniform body-scan service time, in minutes
    pub max_scan_time: f64,

    /// Simulated minutes each configuration is run for
    pub horizon: f64,

    /// Average system time a viable configuration must stay below, in minutes
    pub target_avg_time: f64,

    /// Smallest number of ID checkers evaluated by the sweep
    pub min_id_checkers: usize,

    /// Largest number of ID checkers evaluated by the sweep
    pub max_id_checkers: usize,

    /// Smallest number of scanners evaluated by the sweep
    pub min_scanners: usize,

    /// Largest number of scanners evaluated by the sweep
    pub max_scanners: usize,

    /// Random seed; every run with the same seed and parameters is identical
    pub seed: u64,

    /// Output path for sweep results (JSON), if any
    pub results_output: Option<String>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for simulation configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Arrival rate is not a positive, finite number
    #[error("Arrival rate must be positive and finite, got {0}")]
    InvalidArrivalRate(f64),

    /// Mean ID-check time is not a positive, finite number
    #[error("Mean ID check time must be positive and finite, got {0}")]
    InvalidIdCheckTime(f64),

    /// Scan-time window is inverted or out of range
    #[error("Invalid scan time window: [{min}, {max}] (need 0 <= min <= max, max > 0)")]
    InvalidScanWindow {
        /// Configured minimum scan time
        min: f64,
        /// Configured maximum scan time
        max: f64,
    },

    /// Horizon is negative or not finite
    #[error("Horizon must be non-negative and finite, got {0}")]
    InvalidHorizon(f64),

    /// Target average time is not a positive, finite number
    #[error("Target average time must be positive and finite, got {0}")]
    InvalidTarget(f64),

    /// A sweep range is empty or starts at zero servers
    #[error("Invalid {name} range: {min}..={max} (need 1 <= min <= max)")]
    InvalidStaffRange {
        /// Which range is invalid ("ID checker" or "scanner")
        name: &'static str,
        /// Configured lower bound
        min: usize,
        /// Configured upper bound
        max: usize,
    },
}

impl Default for SimulationConfig {
    fn default() -> Self {
        // The busy-airport reference scenario.
        Self {
            arrival_rate: 50.0,
            mean_id_check_time: 0.75,
            min_scan_time: 0.5,
            max_scan_time: 1.0,
            horizon: 300.0,
            target_avg_time: 15.0,
            min_id_checkers: 30,
            max_id_checkers: 50,
            min_scanners: 30,
            max_scanners: 60,
            seed: 42,
            results_output: None,
        }
    }
}

impl SimulationConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        // Start with default configuration
        let mut config = Self::default();

        // Load from config file if specified
        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // Override with command line arguments (CLI takes precedence)
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            arrival_rate: config_file.arrival_rate.unwrap_or(defaults.arrival_rate),
            mean_id_check_time: config_file
                .mean_id_check_time
                .unwrap_or(defaults.mean_id_check_time),
            min_scan_time: config_file.min_scan_time.unwrap_or(defaults.min_scan_time),
            max_scan_time: config_file.max_scan_time.unwrap_or(defaults.max_scan_time),
            horizon: config_file.horizon.unwrap_or(defaults.horizon),
            target_avg_time: config_file.target_avg_time.unwrap_or(defaults.target_avg_time),
            min_id_checkers: config_file.min_id_checkers.unwrap_or(defaults.min_id_checkers),
            max_id_checkers: config_file.max_id_checkers.unwrap_or(defaults.max_id_checkers),
            min_scanners: config_file.min_scanners.unwrap_or(defaults.min_scanners),
            max_scanners: config_file.max_scanners.unwrap_or(defaults.max_scanners),
            seed: config_file.seed.unwrap_or(defaults.seed),
            results_output: config_file.results_output.or(defaults.results_output),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.arrival_rate {
            config.arrival_rate = value;
        }
        if let Some(value) = args.mean_id_check_time {
            config.mean_id_check_time = value;
        }
        if let Some(value) = args.min_scan_time {
            config.min_scan_time = value;
        }
        if let Some(value) = args.max_scan_time {
            config.max_scan_time = value;
        }
        if let Some(value) = args.horizon {
            config.horizon = value;
        }
        if let Some(value) = args.target_avg_time {
            config.target_avg_time = value;
        }
        if let Some(value) = args.min_id_checkers {
            config.min_id_checkers = value;
        }
        if let Some(value) = args.max_id_checkers {
            config.max_id_checkers = value;
        }
        if let Some(value) = args.min_scanners {
            config.min_scanners = value;
        }
        if let Some(value) = args.max_scanners {
            config.max_scanners = value;
        }
        if let Some(value) = args.seed {
            config.seed = value;
        }
        if let Some(value) = args.results_output {
            config.results_output = Some(value);
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !self.arrival_rate.is_finite() || self.arrival_rate <= 0.0 {
            return Err(ConfigValidationError::InvalidArrivalRate(self.arrival_rate));
        }

        if !self.mean_id_check_time.is_finite() || self.mean_id_check_time <= 0.0 {
            return Err(ConfigValidationError::InvalidIdCheckTime(self.mean_id_check_time));
        }

        if !self.min_scan_time.is_finite()
            || !self.max_scan_time.is_finite()
            || self.min_scan_time < 0.0
            || self.max_scan_time <= 0.0
            || self.min_scan_time > self.max_scan_time
        {
            return Err(ConfigValidationError::InvalidScanWindow {
                min: self.min_scan_time,
                max: self.max_scan_time,
            });
        }

        if !self.horizon.is_finite() || self.horizon < 0.0 {
            return Err(ConfigValidationError::InvalidHorizon(self.horizon));
        }

        if !self.target_avg_time.is_finite() || self.target_avg_time <= 0.0 {
            return Err(ConfigValidationError::InvalidTarget(self.target_avg_time));
        }

        if self.min_id_checkers == 0 || self.min_id_checkers > self.max_id_checkers {
            return Err(ConfigValidationError::InvalidStaffRange {
                name: "ID checker",
                min: self.min_id_checkers,
                max: self.max_id_checkers,
            });
        }

        if self.min_scanners == 0 || self.min_scanners > self.max_scanners {
            return Err(ConfigValidationError::InvalidStaffRange {
                name: "scanner",
                min: self.min_scanners,
                max: self.max_scanners,
            });
        }

        Ok(())
    }

    /// The ID-checker staffing levels the sweep evaluates
    pub fn id_checker_range(&self) -> std::ops::RangeInclusive<usize> {
        self.min_id_checkers..=self.max_id_checkers
    }

    /// The scanner staffing levels the sweep evaluates
    pub fn scanner_range(&self) -> std::ops::RangeInclusive<usize> {
        self.min_scanners..=self.max_scanners
    }

    /// Number of (checkers, scanners) configurations the sweep will evaluate
    pub fn sweep_size(&self) -> usize {
        let checkers = self.max_id_checkers - self.min_id_checkers + 1;
        let scanners = self.max_scanners - self.min_scanners + 1;
        checkers * scanners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.arrival_rate, 50.0);
        assert_eq!(config.mean_id_check_time, 0.75);
        assert_eq!(config.horizon, 300.0);
        assert_eq!(config.target_avg_time, 15.0);
        assert_eq!(config.seed, 42);
        assert_eq!(config.sweep_size(), 21 * 31);
    }

    #[test]
    fn test_validation_rejects_nonpositive_rates() {
        let mut config = SimulationConfig::default();
        config.arrival_rate = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidArrivalRate(_))
        ));

        let mut config = SimulationConfig::default();
        config.mean_id_check_time = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidIdCheckTime(_))
        ));
    }

    #[test]
    fn test_validation_rejects_inverted_scan_window() {
        let mut config = SimulationConfig::default();
        config.min_scan_time = 2.0;
        config.max_scan_time = 1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidScanWindow { .. })
        ));
    }

    #[test]
    fn test_validation_allows_degenerate_scan_window() {
        // min == max models a fixed-duration scanner; it must be accepted.
        let mut config = SimulationConfig::default();
        config.min_scan_time = 0.75;
        config.max_scan_time = 0.75;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_staff_ranges() {
        let mut config = SimulationConfig::default();
        config.min_scanners = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidStaffRange { name: "scanner", .. })
        ));

        let mut config = SimulationConfig::default();
        config.min_id_checkers = 10;
        config.max_id_checkers = 5;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidStaffRange { name: "ID checker", .. })
        ));
    }

    #[test]
    fn test_validation_rejects_negative_horizon() {
        let mut config = SimulationConfig::default();
        config.horizon = -10.0;
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidHorizon(_))));

        // Zero horizon is a valid (if empty) run.
        config.horizon = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_file_merges_with_defaults() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(file, r#"{{"arrival_rate": 20.0, "seed": 7}}"#).unwrap();

        let config = SimulationConfig::from_file(file.path()).unwrap();
        assert_eq!(config.arrival_rate, 20.0);
        assert_eq!(config.seed, 7);
        // Untouched fields fall back to defaults.
        assert_eq!(config.mean_id_check_time, 0.75);
        assert_eq!(config.max_scanners, 60);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let result = SimulationConfig::from_file("/nonexistent/config.json");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_unsupported_config_format() {
        let file = NamedTempFile::with_suffix(".yaml").unwrap();
        let result = SimulationConfig::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_cli_overrides_take_precedence() {
        use clap::Parser;

        let args = CliArgs::parse_from([
            "airport-security-simulator",
            "--arrival-rate",
            "30",
            "--min-id-checkers",
            "5",
            "--max-id-checkers",
            "8",
            "--seed",
            "99",
        ]);

        let config = SimulationConfig::from_cli_args(args).unwrap();
        assert_eq!(config.arrival_rate, 30.0);
        assert_eq!(config.id_checker_range(), 5..=8);
        assert_eq!(config.seed, 99);
        // Untouched fields keep their defaults.
        assert_eq!(config.scanner_range(), 30..=60);
    }

    #[test]
    fn test_print_json_round_trips() {
        let config = SimulationConfig::default();
        let json = config.print_json().unwrap();
        let back: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.arrival_rate, config.arrival_rate);
        assert_eq!(back.max_scanners, config.max_scanners);
    }
}
