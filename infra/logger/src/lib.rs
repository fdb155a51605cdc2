//! # Logger
//!
//! Central `tracing` setup for Forno binaries.
//!
//! Console output (compact, ANSI colors only on a terminal) goes to stderr so that
//! command output on stdout stays machine-readable. Optional rolling file output runs
//! through a non-blocking writer whose guard lives inside the returned [`Logger`].
//!
//! `RUST_LOG` is honoured unless an explicit filter is set with
//! [`LoggerBuilder::env_filter`].
//!
//! ## Example
//!
//! ```rust
//! # use forno_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("forno")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::io::IsTerminal;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LoggerConfig {
    console: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            path: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// A builder for the global tracing subscriber.
///
/// `init` only exists once a name is set; file-only knobs only exist once a path is set.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    config: LoggerConfig,
    name: N,
    _file: PhantomData<F>,
}

impl<N: Sealed, F: Sealed> LoggerBuilder<N, F> {
    fn transition<M: Sealed, G: Sealed>(self, name: M) -> LoggerBuilder<M, G> {
        LoggerBuilder { config: self.config, name, _file: PhantomData }
    }
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Names the logger; the name also prefixes rolling log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        self.transition(WithName(name.into()))
    }
}

impl LoggerBuilder<WithName, WithFile> {
    /// Caps the number of rotated log files kept on disk.
    #[must_use = "The builder must be initialized with `init`"]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    #[must_use = "The builder must be initialized with `init`"]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Writes JSON lines to the log files.
    #[must_use = "The builder must be initialized with `init`"]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.config.json = enabled;
        self
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    #[must_use = "The builder must be initialized with `init`"]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Sets an explicit filter (e.g. `forno_ordering=debug,config=warn`).
    ///
    /// Invalid filters make [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be initialized with `init`"]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    #[must_use = "The builder must be initialized with `init`"]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Enables rolling file output into the given directory.
    pub fn path(mut self, path: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        self.config.path = Some(path.into());
        let name = WithName(std::mem::take(&mut self.name.0));
        self.transition(name)
    }

    /// Consumes the builder and installs the global tracing subscriber.
    ///
    /// # Returns
    /// A [`Logger`] handle. Keep it alive for the lifetime of the program: it owns the
    /// worker guard that flushes file output.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`,
    /// an invalid filter, or when no output is enabled.
    /// Returns [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { config, name: WithName(name), .. } = self;
        validate_config(&config, &name)?;

        let env_filter = build_env_filter(&config)?;
        let mut layers = Vec::new();

        if config.console {
            let ansi = std::io::stderr().is_terminal();
            layers.push(layer().compact().with_ansi(ansi).with_writer(std::io::stderr).boxed());
        }

        let guard = match config.path {
            Some(path) => {
                fs::create_dir_all(&path)
                    .context(format!("Failed to create path: {}", path.display()))?;

                let appender = RollingFileAppender::builder()
                    .rotation(config.rotation)
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(config.max_files)
                    .build(path)?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file_layer = layer().with_writer(writer).with_ansi(false);

                layers.push(if config.json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging output enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// A handle to the installed logging system.
///
/// Drop it only when the application is shutting down.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`].
    ///
    /// ```rust
    /// use forno_logger::{LevelFilter, Logger};
    ///
    /// let builder = Logger::builder().name("forno").level(LevelFilter::WARN);
    /// # drop(builder);
    /// ```
    #[must_use = "The builder must be initialized with `init`"]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName, _file: PhantomData }
    }

    /// Returns the file writer guard, present only when file output is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logging system shutting down, flushing buffers...");
        }
    }
}

fn validate_config(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if config.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_starts_with_console_at_info() {
        let builder = Logger::builder().name("test-app");
        assert!(builder.config.console);
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert!(builder.config.path.is_none());
        assert!(builder.config.env_filter.is_none());
    }

    #[test]
    fn path_keeps_the_name_and_unlocks_file_options() {
        let builder = Logger::builder()
            .name("test-app")
            .env_filter("forno=debug")
            .path("/tmp/forno-logs")
            .max_files(3)
            .rotation(Rotation::HOURLY)
            .json(true)
            .level(LevelFilter::DEBUG);

        assert_eq!(builder.name.0, "test-app");
        assert_eq!(builder.config.max_files, 3);
        assert_eq!(builder.config.rotation, Rotation::HOURLY);
        assert!(builder.config.json);
        assert_eq!(builder.config.level, LevelFilter::DEBUG);
        assert_eq!(builder.config.env_filter.as_deref(), Some("forno=debug"));
    }

    #[test]
    fn blank_name_is_rejected_before_install() {
        let err = Logger::builder().name("   ").init().expect_err("blank name must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn invalid_filter_is_rejected_before_install() {
        let err = Logger::builder()
            .name("test-app")
            .env_filter("forno=loud")
            .init()
            .expect_err("bad filter must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn no_output_is_rejected_before_install() {
        let err = Logger::builder()
            .name("test-app")
            .console(false)
            .init()
            .expect_err("no layers must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
