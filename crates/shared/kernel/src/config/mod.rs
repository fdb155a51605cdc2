use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Base name of the config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG: &str = "forno";

/// Prefix of environment overrides (e.g. `FORNO__LOG__LEVEL=debug`).
pub const ENV_PREFIX: &str = "FORNO";

/// Custom error type for config loading.
#[forno_derive::forno_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration by layering environment overrides over a config file.
///
/// 1. **Base File**: an explicit `path` must exist. Without one, a `forno.{toml,json,yaml,..}`
///    file in the working directory is used when present and skipped otherwise.
/// 2. **Environment Overrides**: variables prefixed with `FORNO__`. Nested keys use double
///    underscores (`FORNO__LOG__LEVEL` maps to `log.level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source cannot be
/// parsed, or the merged values do not match `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let required = path.is_some();
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf());

    debug!(path = %effective_path.display(), required, "Loading config");

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
