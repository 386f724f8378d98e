mod schema;

pub use schema::{Config, DEFAULT_LOG_LEVEL, DEFAULT_TICK_RATE_MS};

use anyhow::{Context, Result};
use std::fs;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::error::EstimatorError;
use crate::scoring::{validate_initial_inputs, ScoreInputs};

pub const TICK_RATE_RANGE_MS: RangeInclusive<u64> = 16..=5000;

/// Get the config directory path (~/.config/credit-estimator/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("credit-estimator"))
}

/// Get the default config file path (~/.config/credit-estimator/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional explicit path. If None, the default path is tried and
///   a missing file yields `Config::default()`.
///
/// # Errors
///
/// Returns an error if:
/// - An explicit config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(explicit) => {
            if !explicit.exists() {
                anyhow::bail!("Config file not found at {}", explicit.display());
            }
            explicit
        }
        None => match get_config_path() {
            Some(default) if default.exists() => default,
            _ => return Ok(Config::default()),
        },
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    parse_config(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = serde_saphyr::from_str(content)?;
    Ok(config)
}

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Err(initial_errors) = validate_initial_inputs(&config.initial) {
        errors.extend(initial_errors);
    }

    if !TICK_RATE_RANGE_MS.contains(&config.tick_rate_ms) {
        errors.push(format!(
            "tick_rate_ms: {} is outside {}..={}",
            config.tick_rate_ms,
            TICK_RATE_RANGE_MS.start(),
            TICK_RATE_RANGE_MS.end()
        ));
    }

    if let Err(e) = EnvFilter::try_new(&config.log_level) {
        errors.push(format!("log_level: invalid '{}' - {}", config.log_level, e));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

impl Config {
    /// Starting inputs: configured values overlaid on the defaults.
    pub fn initial_inputs(&self) -> Result<ScoreInputs, EstimatorError> {
        self.initial.resolve()
    }
}
