//! # Domain Models
//!
//! Pure data types for structured spatial queries, with minimal dependencies
//! (`serde`, `strum`, `thiserror`). No I/O and no pipeline logic lives here, only
//! the value objects and the invariants they enforce when constructed.
//!
//! * [`relation`]: relation categories, buffer origins and registry entries.
//! * [`query`]: the candidate produced by the extraction step and the checked [`query::GeoQuery`].
//! * [`config`]: application configuration shared by the binaries.

pub mod config;
pub mod constants;
mod error;
pub mod query;
pub mod relation;

pub use crate::error::{ValidationError, ValidationErrorExt};
