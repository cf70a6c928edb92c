//! Environment configuration.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `RAINBOW_TICK_MS` | 250 | Tick period in milliseconds |
//! | `RAINBOW_SEED` | time-derived | Spawn RNG seed |
//! | `RAINBOW_LOG_PATH` | unset | Write log lines to this file |
//! | `RAINBOW_LOG` | `info` | Log filter (env_logger syntax) |
//!
//! Unparseable values fall back to the default.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub tick_ms: u32,
    pub seed: u32,
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            seed: 1,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the process environment in
    /// production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let tick_ms = lookup("RAINBOW_TICK_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(TICK_MS);

        let seed = lookup("RAINBOW_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = lookup("RAINBOW_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_filter = lookup("RAINBOW_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "info".to_string());

        Self {
            tick_ms,
            seed,
            log_path,
            log_filter,
        }
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
