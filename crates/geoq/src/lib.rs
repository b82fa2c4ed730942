//! Facade crate for the `geoq` slices and shared modules.
//! Re-exports domain/kernel primitives and composes the registry, the pipeline and the
//! example bank into a [`GeoContext`] created once per application.
//! Keep this crate thin: it should compose other crates, not implement business rules.
//!
//! ## Usage
//! ```rust
//! use geoq::GeoContext;
//! use geoq::domain::query::{CandidateQuery, ConfidenceScore, ReferenceLocation, SpatialRelation};
//! use geoq::domain::relation::RelationCategory;
//!
//! let context = GeoContext::builder().build().unwrap();
//! let candidate = CandidateQuery::new(
//!     SpatialRelation::new("north_of", RelationCategory::Directional),
//!     ReferenceLocation::new("Zürich"),
//!     None,
//!     ConfidenceScore::new(0.94, 0.95, 0.93).unwrap(),
//!     "north of Zurich",
//! )
//! .unwrap();
//!
//! let validated = context.validate(candidate).unwrap();
//! assert_eq!(validated.query.buffer_config().unwrap().distance_m(), 10_000.0);
//! ```

mod context;
mod error;
mod parser;
mod priming;
mod search;

pub use crate::context::{GeoContext, GeoContextBuilder};
pub use crate::error::{GeoqError, GeoqErrorExt};
pub use crate::parser::QueryParser;
pub use crate::priming::PrimingContext;
pub use crate::search::{SearchArea, resolve_search_areas};
pub use geoq_domain as domain;
pub use geoq_kernel as kernel;
pub use geoq_pipeline::{Advisory, PipelineError, Validated};

/// Feature slices composed by this facade.
pub mod features {
    pub use geoq_fewshot as fewshot;
    pub use geoq_pipeline as pipeline;
    pub use geoq_relations as relations;
}
