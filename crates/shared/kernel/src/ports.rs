//! Ports for the collaborators the core consumes but never implements.
//!
//! All calls are synchronous; adapters that talk to remote services block on their own
//! runtime behind these traits.

use geoq_domain::ValidationError;
use geoq_domain::query::{BufferConfig, CandidateQuery, SpatialRelation};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

#[geoq_derive::geoq_error]
pub enum PortError {
    #[error("Collaborator unavailable: {message}{}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Malformed collaborator output{}: {source}", format_context(.context))]
    Malformed { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Structural validation failed{}: {source}", format_context(.context))]
    Structural { source: ValidationError, context: Option<Cow<'static, str>> },

    #[error("Internal error: {message}{}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Opaque geometry as exchanged with the gazetteer and the geometry engine (`GeoJSON`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Geometry(pub Value);

/// A named feature returned by the gazetteer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoFeature {
    pub name: String,
    #[serde(rename = "type")]
    pub feature_type: String,
    pub geometry: Geometry,
}

/// Text-to-structure extraction step.
pub trait ExtractionOracle {
    /// Turns free text into a best-effort candidate, guided by `priming` (relation
    /// catalogue and examples).
    ///
    /// # Errors
    /// Returns a [`PortError`] when the oracle is unavailable or its output does not
    /// form a structurally valid candidate. Failures are surfaced, never retried.
    fn extract(&self, query_text: &str, priming: &str) -> Result<CandidateQuery, PortError>;
}

/// Geographic names lookup.
pub trait Gazetteer {
    /// Returns candidate features ordered best first; `type_hint` ranks, it never filters.
    ///
    /// # Errors
    /// Returns a [`PortError`] when the lookup itself fails. No match is an empty vector.
    fn search(&self, name: &str, type_hint: Option<&str>) -> Result<Vec<GeoFeature>, PortError>;
}

/// Buffer and sector computation.
pub trait GeometryEngine {
    /// Derives the search area for one reference geometry.
    ///
    /// # Errors
    /// Returns a [`PortError`] when the engine cannot compute the geometry.
    fn apply_spatial_relation(
        &self,
        geometry: &Geometry,
        relation: &SpatialRelation,
        buffer: Option<&BufferConfig>,
    ) -> Result<Geometry, PortError>;
}

/// Parses raw oracle output (JSON) into a candidate, running the same checks as the
/// domain constructors.
///
/// # Errors
/// Returns [`PortError::Malformed`] for invalid JSON or values violating a domain rule.
pub fn candidate_from_json(raw: &str) -> Result<CandidateQuery, PortError> {
    serde_json::from_str(raw).context("Oracle response")
}
