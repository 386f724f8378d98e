use serde::{Deserialize, Serialize};

use crate::scoring::InitialInputs;
use crate::tui::Theme;

pub const DEFAULT_TICK_RATE_MS: u64 = 250;
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Starting slider positions
    #[serde(default)]
    pub initial: InitialInputs,

    /// Redraw tick for the TUI in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    #[serde(default)]
    pub theme: Theme,

    /// tracing `EnvFilter` directive, e.g. "warn" or "credit_estimator=debug"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_tick_rate_ms() -> u64 {
    DEFAULT_TICK_RATE_MS
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial: InitialInputs::default(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            theme: Theme::default(),
            log_level: default_log_level(),
        }
    }
}
