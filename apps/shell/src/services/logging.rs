use anyhow::{Context, Result};
use forno_kernel::domain::config::{LogConfig, LogRotation};
use forno_logger::{LevelFilter, Logger, Rotation};
use tracing::warn;

const LOGGER_NAME: &str = "forno";

/// Installs the global subscriber from the `[log]` config section.
///
/// # Errors
/// Fails on an unknown level name or when the logger rejects the settings.
pub fn init(config: &LogConfig, verbose: bool) -> Result<Logger> {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        config
            .level
            .parse::<LevelFilter>()
            .with_context(|| format!("Invalid log level '{}'", config.level))?
    };

    let mut builder = Logger::builder().name(LOGGER_NAME).console(config.console).level(level);
    if let Some(filter) = &config.filter {
        builder = builder.env_filter(filter.as_str());
    }

    let logger = match &config.directory {
        Some(directory) => builder
            .path(directory)
            .rotation(rotation(config.rotation))
            .max_files(config.max_files)
            .json(config.json)
            .init()?,
        None => {
            let logger = builder.init()?;
            if config.json {
                warn!("log.json only applies to file output and is ignored without log.directory");
            }
            logger
        },
    };

    Ok(logger)
}

const fn rotation(rotation: LogRotation) -> Rotation {
    match rotation {
        LogRotation::Minutely => Rotation::MINUTELY,
        LogRotation::Hourly => Rotation::HOURLY,
        LogRotation::Daily => Rotation::DAILY,
        LogRotation::Never => Rotation::NEVER,
    }
}
