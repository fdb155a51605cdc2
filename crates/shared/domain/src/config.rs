use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_MAX_LOG_FILES: usize = 7;

/// Top-level configuration of the `forno` shell.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub log: LogConfig,
}

/// Logging knobs handed to the logger builder.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    pub console: bool,
    /// Write JSON lines to the log files. Console output is never JSON, so this has no
    /// effect without `directory`.
    pub json: bool,
    /// Directory for rolling log files; file logging is off when absent.
    pub directory: Option<PathBuf>,
    /// How often a new log file is started.
    pub rotation: LogRotation,
    /// Rotated files kept on disk.
    pub max_files: usize,
    /// Module-directed filter, e.g. `forno_ordering=debug`.
    pub filter: Option<String>,
}

/// Rotation period of the log files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

// --- Default ---

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            console: true,
            json: false,
            directory: None,
            rotation: LogRotation::default(),
            max_files: DEFAULT_MAX_LOG_FILES,
            filter: None,
        }
    }
}
