/// Distance used when neither the candidate nor the registry entry provides one.
pub const FALLBACK_DISTANCE_M: f64 = 5_000.0;

/// Minimum overall confidence accepted without an advisory.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.6;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "GEOQ";
