//! # Logger
//!
//! Console and rolling-file logging for the `geoq` binaries, built on `tracing-subscriber`
//! and `tracing-appender`. Libraries in the workspace only emit `tracing` events; this
//! crate is what an application calls once at startup to decide where they go.
//!
//! * `RUST_LOG` always wins over the programmatic default level.
//! * Use [`LoggerBuilder::env_filter`] for module-directed filters
//!   (e.g., `"geoq_pipeline=debug,geoq_relations=info"`).
//! * File output is non-blocking; keep the returned [`Logger`] alive until shutdown.
//!
//! ## Example
//!
//! ```rust
//! # use geoq_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("geoq")
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
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
pub struct LoggerConfig {
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

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    config: LoggerConfig,
    name: N,
    file_state: std::marker::PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Sets the name of the logger, also used as the log file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder {
            name: WithName(name.into()),
            config: self.config,
            file_state: std::marker::PhantomData,
        }
    }
}

impl LoggerBuilder<WithName, WithFile> {
    /// Configures maximum number of log files to keep.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    /// Configures the log file rotation strategy.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Writes file output as JSON lines.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.config.json = enabled;
        self
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `geoq_pipeline=debug`).
    ///
    /// `RUST_LOG` is ignored when an explicit filter is set.
    /// Invalid filters will cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Enables console logging (stderr).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Sets the directory for rolling log files.
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        let mut config = self.config;
        config.path = Some(path.into());
        LoggerBuilder { config, name: self.name, file_state: std::marker::PhantomData }
    }

    /// Consumes the builder and initializes the global tracing subscriber.
    ///
    /// # Returns
    /// A [`Logger`] handle holding the file writer's [`WorkerGuard`], if any.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    /// Returns [`LoggerError::InvalidConfiguration`] for invalid builder settings.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate_config(&self.config, &self.name.0)?;

        let env_filter = build_env_filter(&self.config)?;

        let mut layers = Vec::new();

        if self.config.console {
            layers.push(layer().compact().with_writer(std::io::stderr).with_ansi(true).boxed());
        }

        let guard = if let Some(path) = self.config.path {
            fs::create_dir_all(&path).map_err(|e| LoggerError::Internal {
                message: e.to_string().into(),
                context: Some(format!("Failed to create path: {}", path.display()).into()),
            })?;

            let file_appender = RollingFileAppender::builder()
                .rotation(self.config.rotation)
                .filename_prefix(&self.name.0)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(self.config.max_files)
                .build(path)?;

            let (non_blocking, g) = tracing_appender::non_blocking(file_appender);

            let file_layer = layer().with_writer(non_blocking).with_ansi(false);

            let boxed =
                if self.config.json { file_layer.json().boxed() } else { file_layer.boxed() };

            layers.push(boxed);
            Some(g)
        } else {
            None
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// A handle to the initialized logging system.
///
/// Drop it only when the application is shutting down.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] to configure the global tracing subscriber.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder {
            config: LoggerConfig::default(),
            name: NoName,
            file_state: std::marker::PhantomData,
        }
    }

    /// Returns a reference to the underlying worker guard, if present.
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

/// Parses a level name (`"trace"`, `"debug"`, `"info"`, `"warn"`, `"error"`, `"off"`).
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for unknown level names.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim()).map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("Invalid log level '{level}': {e}").into(),
        context: None,
    })
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
