//! Logger setup for the binaries.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};

use crate::config::RuntimeConfig;

/// Install the global logger.
///
/// With `RAINBOW_LOG_PATH` set, lines are appended to that file. Otherwise
/// they go to stderr only if `allow_stderr` is true; the interactive binary
/// passes false because stderr shares the terminal it draws on. Returns whether
/// a logger was installed.
pub fn init(config: &RuntimeConfig, allow_stderr: bool) -> Result<bool> {
    let mut builder = Builder::new();
    builder.parse_filters(&config.log_filter);

    match &config.log_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None if allow_stderr => {
            builder.target(Target::Stderr);
        }
        None => return Ok(false),
    }

    builder.try_init().context("installing logger")?;
    Ok(true)
}
