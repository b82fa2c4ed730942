//! Kernel utilities shared across slices.
//! Keep this crate lightweight: layered config loading plus the ports through which the
//! core talks to its external collaborators (extraction oracle, gazetteer, geometry engine).
//!
//! ## Config loading
//! ```rust,no_run
//! use geoq_kernel::config::load_config;
//! use geoq_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("geoq.toml")).unwrap_or_default();
//! assert!(cfg.pipeline.confidence_threshold <= 1.0);
//! ```
pub mod config;
pub mod ports;

pub use geoq_domain as domain;
