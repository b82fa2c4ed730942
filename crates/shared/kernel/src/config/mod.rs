use config::{Config, Environment, File};
use geoq_domain::constants::ENV_PREFIX;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default configuration file stem, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "geoq";

/// Custom error type for config loading.
#[geoq_derive::geoq_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layers, lowest precedence first:
/// 1. **Base File**: the given path (must exist), or an optional `geoq.{toml,json,yaml}`
///    in the working directory when no path is given.
/// 2. **Environment Overrides**: variables prefixed with `GEOQ__`. Nested structures are
///    accessed using double underscores (e.g., `GEOQ__PIPELINE__STRICT=true` maps to
///    `pipeline.strict`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicitly given file cannot be found, a value has
/// the wrong type, or the merged sources do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use geoq_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Settings {
///     threshold: f64,
/// }
///
/// let cfg: Settings = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__").try_parsing(true)
}

fn load_layered<T>(path: Option<impl AsRef<Path>>, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(env);

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
