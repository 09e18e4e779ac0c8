//! File logging. The terminal is owned by the UI, so logs go to a file.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::eyre::{WrapErr, eyre};
use nash_config::Config;
use tracing_subscriber::EnvFilter;

/// Build the filter for a configured level, falling back to `info` when the
/// directive does not parse.
pub fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to the configured log file.
/// Returns the path being written to.
pub fn init(config: &Config) -> color_eyre::Result<PathBuf> {
    let path = config
        .log_path()
        .ok_or_else(|| eyre!("no log file location available"))?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create {}", dir.display()))?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("failed to open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter_for(&config.logging.level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| eyre!(e))?;
    Ok(path)
}
