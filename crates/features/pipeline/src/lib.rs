//! # Enrichment & Validation Pipeline
//!
//! Turns the loosely specified candidate produced by the extraction oracle into a fully
//! consistent [`GeoQuery`]. Four steps run in a fixed order:
//!
//! 1.  **Relation check** ([`steps::check_relation`]): the keyword must be registered.
//! 2.  **Enrichment** ([`steps::enrich_with_defaults`]): category resolved from the registry,
//!     buffer defaults filled in, explicit distances take precedence.
//! 3.  **Buffer policy** ([`steps::check_buffer_consistency`]): advisories for very large
//!     buffers and deep erosions.
//! 4.  **Confidence gate** ([`steps::check_confidence`]): advisory, or error in strict mode.
//!
//! Hard failures come back as [`PipelineError`]; soft findings come back as
//! [`Advisory`] values inside [`Validated`] and are also logged at `warn` level.
//!
//! ## Example
//! ```rust
//! use geoq_domain::config::PipelineConfig;
//! use geoq_domain::query::{CandidateQuery, ConfidenceScore, ReferenceLocation, SpatialRelation};
//! use geoq_domain::relation::RelationCategory;
//! use geoq_pipeline::validate_query;
//! use geoq_relations::SpatialRelationRegistry;
//!
//! let registry = SpatialRelationRegistry::default();
//! let candidate = CandidateQuery::new(
//!     SpatialRelation::new("near", RelationCategory::Buffer),
//!     ReferenceLocation::new("Lake Geneva"),
//!     None,
//!     ConfidenceScore::new(0.95, 0.95, 0.9).unwrap(),
//!     "near Lake Geneva",
//! )
//! .unwrap();
//!
//! let validated = validate_query(candidate, &registry, &PipelineConfig::default()).unwrap();
//! assert_eq!(validated.query.buffer_config().unwrap().distance_m(), 5000.0);
//! assert!(validated.advisories.is_empty());
//! ```

pub mod advisory;
mod error;
pub mod steps;

pub use crate::advisory::Advisory;
pub use crate::error::{PipelineError, PipelineErrorExt};
use geoq_domain::config::PipelineConfig;
use geoq_domain::query::{CandidateQuery, GeoQuery};
use geoq_relations::SpatialRelationRegistry;
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// A checked query together with the non-fatal findings gathered on the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Validated {
    pub query: GeoQuery,
    pub advisories: Vec<Advisory>,
}

/// Runs the four pipeline steps on `candidate`.
///
/// # Errors
/// * [`PipelineError::InvalidConfiguration`] when the threshold is outside `[0, 1]`.
/// * [`PipelineError::UnknownRelation`] for unregistered relation keywords.
/// * [`PipelineError::Structural`] when the enriched candidate still violates a query invariant.
/// * [`PipelineError::LowConfidence`] for low confidence in strict mode.
#[instrument(
    skip_all,
    fields(relation = %candidate.spatial_relation().relation, strict = config.strict)
)]
pub fn validate_query(
    mut candidate: CandidateQuery,
    registry: &SpatialRelationRegistry,
    config: &PipelineConfig,
) -> Result<Validated, PipelineError> {
    config
        .validate()
        .map_err(|message| PipelineError::InvalidConfiguration { message: message.into(), context: None })?;

    steps::check_relation(&candidate, registry)?;
    debug!("Relation is registered");

    steps::enrich_with_defaults(&mut candidate, registry)?;
    let query = GeoQuery::try_from(candidate)?;
    debug!(buffer = ?query.buffer_config(), "Defaults applied");

    let mut advisories = steps::check_buffer_consistency(&query);
    advisories.extend(steps::check_confidence(
        &query,
        config.confidence_threshold,
        config.strict,
    )?);

    for advisory in &advisories {
        warn!("{advisory}");
    }

    Ok(Validated { query, advisories })
}
