//! # Logger
//!
//! Installs the process-wide `tracing` subscriber used by the desktop shell and tests.
//!
//! * Console output is a compact, ANSI-colored formatter.
//! * File output is optional: a daily (or custom) rolling appender behind a non-blocking
//!   writer. Keep the returned [`Logger`] alive, it owns the flushing worker.
//! * `RUST_LOG` is honored; [`LoggerBuilder::env_filter`] sets a programmatic default
//!   such as `"cp3_registration=debug,reqwest=warn"`.
//!
//! ## Example
//!
//! ```rust
//! # use cp3_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("cp3-desktop")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use cp3_domain::config::LoggingConfig;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug)]
struct FileOutput {
    directory: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

#[derive(Debug)]
struct Settings {
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    file: Option<FileOutput>,
}

impl Default for Settings {
    fn default() -> Self {
        Self { console: true, level: LevelFilter::INFO, env_filter: None, file: None }
    }
}

/// Builder state before a name is given.
#[derive(Debug)]
pub struct Unnamed;

/// Builder state after [`LoggerBuilder::name`].
#[derive(Debug)]
pub struct Named(String);

mod private {
    pub trait Sealed {}
}
impl private::Sealed for Unnamed {}
impl private::Sealed for Named {}

/// Configures and installs the global subscriber.
///
/// A name is mandatory; it prefixes log files (`<name>.<date>.log`).
#[derive(Debug)]
pub struct LoggerBuilder<N: private::Sealed = Unnamed> {
    settings: Settings,
    name: N,
}

impl LoggerBuilder<Unnamed> {
    /// Names the logger.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named> {
        LoggerBuilder { settings: self.settings, name: Named(name.into()) }
    }
}

impl LoggerBuilder<Named> {
    /// Minimum level when neither `RUST_LOG` nor an env filter says otherwise.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Programmatic filter directives (`target=level,...`).
    ///
    /// Invalid directives make [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.settings.env_filter = Some(filter.into());
        self
    }

    /// Toggles the console layer.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Writes logs into `directory` with daily rotation, keeping the last `max_files` files.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn file(mut self, directory: impl Into<PathBuf>, max_files: usize) -> Self {
        self.settings.file = Some(FileOutput {
            directory: directory.into(),
            rotation: Rotation::DAILY,
            max_files,
            json: false,
        });
        self
    }

    /// Changes the rotation of the file output. No-op without [`LoggerBuilder::file`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = self.settings.file.as_mut() {
            file.rotation = rotation;
        }
        self
    }

    /// Switches the file output to JSON lines. No-op without [`LoggerBuilder::file`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn json(mut self) -> Self {
        if let Some(file) = self.settings.file.as_mut() {
            file.json = true;
        }
        self
    }

    /// Applies the `[logging]` section of the application config.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] if the configured level is unknown.
    pub fn with_config(self, config: &LoggingConfig) -> Result<Self, LoggerError> {
        let level = config.level.parse::<LevelFilter>().map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Unknown log level '{}': {e}", config.level).into(),
                context: Some("logging.level".into()),
            }
        })?;

        let mut builder = self.level(level).console(config.console);
        if let Some(filter) = &config.filter {
            builder = builder.env_filter(filter);
        }
        if let Some(directory) = &config.directory {
            builder = builder.file(directory, config.max_files);
            if config.json {
                builder = builder.json();
            }
        }
        Ok(builder)
    }

    /// Installs the subscriber.
    ///
    /// The returned [`Logger`] owns the file writer's [`WorkerGuard`]; dropping it
    /// flushes and stops file logging.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`,
    ///   a bad filter, or no enabled output.
    /// * [`LoggerError::Appender`] if the log directory cannot be used.
    /// * [`LoggerError::Subscriber`] if a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { settings, name: Named(name) } = self;
        validate(&settings, &name)?;

        let filter = env_filter(&settings)?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if settings.console {
            layers.push(fmt::layer().compact().with_ansi(true).boxed());
        }

        let guard = match settings.file {
            Some(file) => {
                let (layer, guard) = file_layer(&name, file)?;
                layers.push(layer);
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No output enabled; turn on the console or a log directory".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(layers).with(filter).try_init()?;
        tracing::debug!(logger = %name, "Logging initialized");

        Ok(Logger { guard })
    }
}

fn file_layer(name: &str, file: FileOutput) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    std::fs::create_dir_all(&file.directory).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("Creating log directory {}", file.directory.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(file.rotation)
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(file.max_files)
        .build(&file.directory)?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    let layer = if file.json { layer.json().boxed() } else { layer.boxed() };

    Ok((layer, guard))
}

fn validate(settings: &Settings, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }
    if settings.file.as_ref().is_some_and(|f| f.max_files == 0) {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: Some("file output".into()),
        });
    }
    Ok(())
}

fn env_filter(settings: &Settings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    match &settings.env_filter {
        Some(directives) => {
            builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{directives}': {e}").into(),
                context: None,
            })
        },
        None => Ok(builder.from_env_lossy()),
    }
}

/// Handle to the installed subscriber.
///
/// Keep it alive until shutdown; it holds the background writer of the file output.
#[must_use = "Dropping this handle stops file logging."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a [`LoggerBuilder`] with console output at `INFO`.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: Settings::default(), name: Unnamed }
    }

    /// Whether this logger writes to files.
    #[must_use]
    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder().name("cp3-test").env_filter("cp3=debug");
        assert!(builder.settings.console);
        assert_eq!(builder.settings.level, LevelFilter::INFO);
        assert_eq!(builder.settings.env_filter.as_deref(), Some("cp3=debug"));
        assert!(builder.settings.file.is_none());
    }

    #[test]
    fn rotation_and_json_need_file_output() {
        let builder = Logger::builder().name("cp3-test").rotation(Rotation::HOURLY).json();
        assert!(builder.settings.file.is_none());

        let builder = Logger::builder()
            .name("cp3-test")
            .file("logs", 3)
            .rotation(Rotation::HOURLY)
            .json();
        let file = builder.settings.file.expect("file output");
        assert_eq!(file.max_files, 3);
        assert!(file.json);
    }

    #[test]
    fn with_config_maps_logging_section() -> Result<(), LoggerError> {
        let config = LoggingConfig {
            level: "debug".to_owned(),
            console: false,
            filter: Some("cp3_store=trace".to_owned()),
            directory: Some(PathBuf::from("var/log")),
            max_files: 4,
            json: true,
        };

        let builder = Logger::builder().name("cp3-test").with_config(&config)?;
        assert!(!builder.settings.console);
        assert_eq!(builder.settings.level, LevelFilter::DEBUG);
        assert_eq!(builder.settings.env_filter.as_deref(), Some("cp3_store=trace"));
        let file = builder.settings.file.expect("file output");
        assert_eq!(file.directory, PathBuf::from("var/log"));
        assert!(file.json);
        Ok(())
    }

    #[test]
    fn with_config_rejects_unknown_level() {
        let config = LoggingConfig { level: "loud".to_owned(), ..LoggingConfig::default() };
        let err = Logger::builder().name("cp3-test").with_config(&config).expect_err("bad level");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn init_rejects_blank_name_and_no_outputs() {
        let err = Logger::builder().name("  ").init().expect_err("blank name");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder().name("cp3-test").console(false).init().expect_err("no outputs");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder().name("cp3-test").file("logs", 0).init().expect_err("zero");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
