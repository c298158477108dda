use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub store: StoreConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into components.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Hosted database REST endpoint.
///
/// `api_key` is the public (anon) project key; it is sent both as `apikey` and as the
/// bearer token, exactly like the hosted service's browser clients do.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub url: String,
    pub api_key: String,
    pub timeout_seconds: u64,
}

/// Desktop window settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Logging output. Without `directory` only the console is used.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub console: bool,
    pub filter: Option<String>,
    pub directory: Option<PathBuf>,
    pub max_files: usize,
    pub json: bool,
}

// --- Default ---

impl Default for StoreConfig {
    fn default() -> Self {
        Self { url: "http://localhost:54321".to_owned(), api_key: String::new(), timeout_seconds: 30 }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "Registrarse".to_owned(), width: 960.0, height: 860.0 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            console: true,
            filter: None,
            directory: None,
            max_files: 10,
            json: false,
        }
    }
}
