use crate::constants::DEFAULT_CONFIDENCE_THRESHOLD;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared by the `geoq` binaries.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub pipeline: PipelineConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
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

/// Enrichment and validation knobs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Overall confidence below this value is reported (or rejected in strict mode).
    pub confidence_threshold: f64,
    /// Turns low confidence from an advisory into an error.
    pub strict: bool,
}

impl PipelineConfig {
    /// Checks that the threshold is a usable probability.
    ///
    /// # Errors
    /// Returns a human-readable reason when `confidence_threshold` is outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), String> {
        if (0.0..=1.0).contains(&self.confidence_threshold) {
            Ok(())
        } else {
            Err(format!(
                "pipeline.confidence_threshold must be within [0, 1], got {}",
                self.confidence_threshold
            ))
        }
    }
}

/// Log output settings for the binaries.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Rolling log files are written here when set.
    pub directory: Option<PathBuf>,
    /// JSON lines for file output.
    pub json: bool,
    /// Explicit `tracing` filter directives, overriding `level` and `RUST_LOG`.
    pub filter: Option<String>,
}

// --- Default ---

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD, strict: false }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false, filter: None }
    }
}
