//! Logging setup backed by `fern`
//!
//! Logging is opt-in through [`LoggingConfig`]. Repositories and storage emit
//! records through the `log` facade either way, so a host application may skip
//! [`init`] and install its own logger instead.

use anyhow::Result;
use log::LevelFilter;

use crate::config::LoggingConfig;

/// Install the global logger from configuration
///
/// Does nothing when logging is disabled. The `log` crate only accepts one
/// global logger per process, so calling this twice returns an error.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level = config.level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout());

    if let Some(path) = &config.file {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }

    dispatch.apply()?;
    Ok(())
}
