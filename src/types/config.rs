//! Configuration structures for the visitor simulator
//!
//! This module contains the simulation configuration structure and validation logic
//! used to control the tick cadence, probabilities and retention of the simulation.

use super::OutputFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default values shared by the configuration, the driver and the aggregator
pub mod defaults {
    /// Milliseconds between two simulation ticks
    pub const TICK_INTERVAL_MS: u64 = 3_000;

    /// Personas generated when the simulation starts
    pub const INITIAL_VISITORS: usize = 5;

    /// Chance per tick that a new persona arrives
    pub const NEW_VISITOR_PROBABILITY: f64 = 0.3;

    /// Chance that a newly arrived persona becomes the current visitor
    pub const CURRENT_VISITOR_SWITCH_PROBABILITY: f64 = 0.4;

    /// Chance per tick and per persona that a behavior event is produced
    pub const BEHAVIOR_PROBABILITY: f64 = 0.6;

    /// Behaviors kept by the tick path
    pub const BEHAVIOR_RETENTION: usize = 50;

    /// Trailing window, in seconds, for counting active visitors
    pub const ACTIVE_WINDOW_SECS: u64 = 300;

    /// Largest accepted active window, one hundred years
    pub const MAX_ACTIVE_WINDOW_SECS: u64 = 100 * 365 * 24 * 60 * 60;

    /// Entries kept in the top-interest and location rankings
    pub const TOP_N: usize = 5;

    /// Ticks the console binary runs before printing its report
    pub const TICKS: usize = 20;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "visitor-simulator",
    version = "0.1.0",
    about = "Visitor Simulator - Generates synthetic website visitors and live analytics",
    long_about = "Simulates website visitor activity: synthetic personas arrive over time, produce behavior events, and a live analytics snapshot is derived from them.

EXAMPLES:
    # Run with default settings
    visitor-simulator

    # Use a configuration file
    visitor-simulator --config config.json

    # Faster ticks and a fixed seed
    visitor-simulator --tick-interval-ms 200 --ticks 50 --seed 42

    # Generate configuration template
    visitor-simulator --print-config > my-config.json

    # Validate configuration without running
    visitor-simulator --config my-config.json --dry-run

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

    /// Milliseconds between ticks
    #[arg(long, help = "Milliseconds between simulation ticks")]
    pub tick_interval_ms: Option<u64>,

    /// Number of personas created at start
    #[arg(long, help = "Number of personas created at start")]
    pub initial_visitors: Option<usize>,

    /// Probability that a new persona arrives on a tick (0.0-1.0)
    #[arg(long, help = "New visitor probability per tick (0.0-1.0)")]
    pub new_visitor_probability: Option<f64>,

    /// Probability that a new persona becomes the current visitor (0.0-1.0)
    #[arg(long, help = "Current visitor switch probability (0.0-1.0)")]
    pub current_visitor_switch_probability: Option<f64>,

    /// Probability that a persona produces a behavior on a tick (0.0-1.0)
    #[arg(long, help = "Behavior probability per persona per tick (0.0-1.0)")]
    pub behavior_probability: Option<f64>,

    /// Behaviors retained by the tick path
    #[arg(long, help = "Number of behavior events retained")]
    pub behavior_retention: Option<usize>,

    /// Active visitor window in seconds
    #[arg(long, help = "Active visitor window in seconds")]
    pub active_window_secs: Option<u64>,

    /// Entries in top-N rankings
    #[arg(long, help = "Entries kept in top-N rankings")]
    pub top_n: Option<usize>,

    /// Number of ticks to run before reporting
    #[arg(long, help = "Number of ticks to run before reporting")]
    pub ticks: Option<usize>,

    /// Output format for the final report
    #[arg(
        long,
        help = "Output format (text or json)",
        long_help = "Output format for the final report. Supported formats: text, json. Default: text"
    )]
    pub output_format: Option<String>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Submit the contact form for the current visitor before reporting
    #[arg(long, help = "Submit the contact form for the current visitor before the report")]
    pub contact: bool,

    /// Dry run mode - validate configuration without running simulation
    #[arg(long, help = "Validate configuration without running simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Milliseconds between ticks
    pub tick_interval_ms: Option<u64>,
    /// Number of personas created at start
    pub initial_visitors: Option<usize>,
    /// Probability that a new persona arrives on a tick
    pub new_visitor_probability: Option<f64>,
    /// Probability that a new persona becomes the current visitor
    pub current_visitor_switch_probability: Option<f64>,
    /// Probability that a persona produces a behavior on a tick
    pub behavior_probability: Option<f64>,
    /// Behaviors retained by the tick path
    pub behavior_retention: Option<usize>,
    /// Active visitor window in seconds
    pub active_window_secs: Option<u64>,
    /// Entries in top-N rankings
    pub top_n: Option<usize>,
    /// Number of ticks to run before reporting
    pub ticks: Option<usize>,
    /// Output format for the final report
    pub output_format: Option<String>,
    /// Random seed for reproducible results
    pub seed: Option<u64>,
}

/// Configuration for the visitor simulation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationConfig {
    /// Milliseconds between ticks
    pub tick_interval_ms: u64,

    /// Number of personas created at start
    pub initial_visitors: usize,

    /// Probability that a new persona arrives on a tick (0.0-1.0)
    pub new_visitor_probability: f64,

    /// Probability that a new persona becomes the current visitor (0.0-1.0)
    pub current_visitor_switch_probability: f64,

    /// Probability that a persona produces a behavior on a tick (0.0-1.0)
    pub behavior_probability: f64,

    /// Behaviors retained by the tick path
    pub behavior_retention: usize,

    /// Active visitor window in seconds
    pub active_window_secs: u64,

    /// Entries in top-N rankings
    pub top_n: usize,

    /// Number of ticks the console binary runs before reporting
    pub ticks: usize,

    /// Output format for the final report
    pub output_format: String,

    /// Random seed for reproducible results
    pub seed: Option<u64>,
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
    /// Tick interval is invalid
    #[error("Tick interval must be greater than 0 ms, got {0}")]
    InvalidTickInterval(u64),

    /// Initial visitor count is invalid
    #[error("Initial visitor count must be greater than 0, got {0}")]
    InvalidInitialVisitors(usize),

    /// Behavior retention is invalid
    #[error("Behavior retention must be greater than 0, got {0}")]
    InvalidBehaviorRetention(usize),

    /// Active window is invalid
    #[error("Active window must be greater than 0 seconds, got {0}")]
    InvalidActiveWindow(u64),

    /// Active window exceeds the supported range
    #[error("Active window must be at most {max} seconds, got {value}")]
    ActiveWindowTooLarge {
        /// The rejected window length
        value: u64,
        /// Largest accepted window length
        max: u64,
    },

    /// Top-N size is invalid
    #[error("Top-N size must be greater than 0, got {0}")]
    InvalidTopN(usize),

    /// Tick count is invalid
    #[error("Tick count must be greater than 0, got {0}")]
    InvalidTickCount(usize),

    /// Probability value is out of range
    #[error("Invalid probability for {field}: {value} (must be between 0.0 and 1.0)")]
    InvalidProbability {
        /// Name of the field with invalid probability
        field: String,
        /// The invalid probability value
        value: f64,
    },

    /// Output format is not recognised
    #[error("Invalid output format: {0} (supported: text, json)")]
    InvalidOutputFormat(String),
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: defaults::TICK_INTERVAL_MS,
            initial_visitors: defaults::INITIAL_VISITORS,
            new_visitor_probability: defaults::NEW_VISITOR_PROBABILITY,
            current_visitor_switch_probability: defaults::CURRENT_VISITOR_SWITCH_PROBABILITY,
            behavior_probability: defaults::BEHAVIOR_PROBABILITY,
            behavior_retention: defaults::BEHAVIOR_RETENTION,
            active_window_secs: defaults::ACTIVE_WINDOW_SECS,
            top_n: defaults::TOP_N,
            ticks: defaults::TICKS,
            output_format: "text".to_string(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Create a new configuration from command line arguments and optional config file
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_cli_args(args)
    }

    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
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
            tick_interval_ms: config_file.tick_interval_ms.unwrap_or(defaults.tick_interval_ms),
            initial_visitors: config_file.initial_visitors.unwrap_or(defaults.initial_visitors),
            new_visitor_probability: config_file
                .new_visitor_probability
                .unwrap_or(defaults.new_visitor_probability),
            current_visitor_switch_probability: config_file
                .current_visitor_switch_probability
                .unwrap_or(defaults.current_visitor_switch_probability),
            behavior_probability: config_file
                .behavior_probability
                .unwrap_or(defaults.behavior_probability),
            behavior_retention: config_file
                .behavior_retention
                .unwrap_or(defaults.behavior_retention),
            active_window_secs: config_file
                .active_window_secs
                .unwrap_or(defaults.active_window_secs),
            top_n: config_file.top_n.unwrap_or(defaults.top_n),
            ticks: config_file.ticks.unwrap_or(defaults.ticks),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            seed: config_file.seed.or(defaults.seed),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.tick_interval_ms {
            config.tick_interval_ms = value;
        }
        if let Some(value) = args.initial_visitors {
            config.initial_visitors = value;
        }
        if let Some(value) = args.new_visitor_probability {
            config.new_visitor_probability = value;
        }
        if let Some(value) = args.current_visitor_switch_probability {
            config.current_visitor_switch_probability = value;
        }
        if let Some(value) = args.behavior_probability {
            config.behavior_probability = value;
        }
        if let Some(value) = args.behavior_retention {
            config.behavior_retention = value;
        }
        if let Some(value) = args.active_window_secs {
            config.active_window_secs = value;
        }
        if let Some(value) = args.top_n {
            config.top_n = value;
        }
        if let Some(value) = args.ticks {
            config.ticks = value;
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
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
        if self.tick_interval_ms == 0 {
            return Err(ConfigValidationError::InvalidTickInterval(self.tick_interval_ms));
        }

        if self.initial_visitors == 0 {
            return Err(ConfigValidationError::InvalidInitialVisitors(self.initial_visitors));
        }

        if self.behavior_retention == 0 {
            return Err(ConfigValidationError::InvalidBehaviorRetention(self.behavior_retention));
        }

        if self.active_window_secs == 0 {
            return Err(ConfigValidationError::InvalidActiveWindow(self.active_window_secs));
        }

        if self.active_window_secs > defaults::MAX_ACTIVE_WINDOW_SECS {
            return Err(ConfigValidationError::ActiveWindowTooLarge {
                value: self.active_window_secs,
                max: defaults::MAX_ACTIVE_WINDOW_SECS,
            });
        }

        if self.top_n == 0 {
            return Err(ConfigValidationError::InvalidTopN(self.top_n));
        }

        if self.ticks == 0 {
            return Err(ConfigValidationError::InvalidTickCount(self.ticks));
        }

        self.validate_probability("new_visitor_probability", self.new_visitor_probability)?;
        self.validate_probability(
            "current_visitor_switch_probability",
            self.current_visitor_switch_probability,
        )?;
        self.validate_probability("behavior_probability", self.behavior_probability)?;

        if self.get_output_format().is_err() {
            return Err(ConfigValidationError::InvalidOutputFormat(self.output_format.clone()));
        }

        Ok(())
    }

    fn validate_probability(&self, field: &str, value: f64) -> Result<(), ConfigValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigValidationError::InvalidProbability {
                field: field.to_string(),
                value,
            });
        }
        Ok(())
    }

    /// Interval between ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Trailing window for active visitors, capped at the largest accepted window
    pub fn active_window(&self) -> chrono::Duration {
        let secs = self.active_window_secs.min(defaults::MAX_ACTIVE_WINDOW_SECS);
        chrono::Duration::seconds(secs as i64)
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse()
    }
}
