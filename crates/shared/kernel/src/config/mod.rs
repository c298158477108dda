use config::{Config, Environment, File};
use cp3_domain::config::AppConfig;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Name of the configuration file looked up when no path is given (`register.toml`).
pub const DEFAULT_CONFIG_FILE: &str = "register";

/// Prefix of environment overrides (`CP3__STORE__URL` maps to `store.url`).
pub const ENV_PREFIX: &str = "CP3";

/// Custom error type for config loading.
#[cp3_derive::cp3_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration loader: a file, then environment overrides.
///
/// 1. **File**: `path` if given (must exist), otherwise `register.{toml,json,...}` in the
///    working directory when present.
/// 2. **Environment**: variables prefixed with `CP3__`; nested keys are separated by `__`
///    (`CP3__STORE__API_KEY` maps to `store.api_key`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source cannot be
/// parsed, or the merged values do not fit `T`.
///
/// # Example
/// ```rust,no_run
/// use cp3_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Window {
///     width: f64,
/// }
///
/// let cfg: Window = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (source, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    info!(path = %source.display(), required, "Loading configuration");

    Config::builder()
        .add_source(File::from(source.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

/// Loads the desktop application's [`AppConfig`].
///
/// # Errors
/// See [`load_config`].
pub fn load_app_config(path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    load_config(path)
}
