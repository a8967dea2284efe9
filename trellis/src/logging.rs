//! Logger setup.
//!
//! Widgets and the runtime log through the `log` facade; binaries and tests
//! pick a backend once with [`init`].

use std::fs::File;

use simplelog::{Config, SimpleLogger, WriteLogger};

use crate::config::LogConfig;
use crate::error::TrellisError;

/// Install the global logger described by `config`.
///
/// Writes to `config.file` when set, otherwise to stdout. Fails if a logger
/// is already installed.
pub fn init(config: &LogConfig) -> Result<(), TrellisError> {
    match &config.file {
        Some(path) => {
            let log_file = File::create(path)?;
            WriteLogger::init(config.level, Config::default(), log_file)?;
        }
        None => SimpleLogger::init(config.level, Config::default())?,
    }
    log::info!("Logging initialized at {}", config.level);
    Ok(())
}
