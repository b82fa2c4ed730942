//! Structured representation of a parsed geographic query.
//!
//! Two aggregates share the same serialized shape:
//!
//! * [`CandidateQuery`]: what the extraction step hands over. It is already free of
//!   ring/center and containment-with-buffer contradictions, but a buffer or directional
//!   candidate may still lack its [`BufferConfig`].
//! * [`GeoQuery`]: the checked result. `buffer_config` is present exactly when the
//!   relation category needs one.
//!
//! Every type with an invariant deserializes through a private record and `TryFrom`, so
//! JSON input goes through the same checks as the constructors.

use crate::error::ValidationError;
use crate::relation::{BufferOrigin, RelationCategory};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use strum_macros::{AsRefStr, Display};

/// Shape of the query. Only `Simple` is produced today; the others are reserved.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum QueryType {
    #[default]
    Simple,
    Compound,
    Split,
    Boolean,
}

/// Buffer parameters for buffer and directional relations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BufferConfigRecord")]
pub struct BufferConfig {
    distance_m: f64,
    buffer_from: BufferOrigin,
    ring_only: bool,
    inferred: bool,
}

#[derive(Deserialize)]
struct BufferConfigRecord {
    distance_m: f64,
    buffer_from: BufferOrigin,
    #[serde(default)]
    ring_only: bool,
    #[serde(default = "default_inferred")]
    inferred: bool,
}

const fn default_inferred() -> bool {
    true
}

impl BufferConfig {
    /// Builds a buffer configuration.
    ///
    /// # Errors
    /// * [`ValidationError::RingRequiresBoundary`] when `ring_only` is combined with
    ///   [`BufferOrigin::Center`].
    /// * [`ValidationError::NonFiniteDistance`] for NaN or infinite distances.
    pub fn new(
        distance_m: f64,
        buffer_from: BufferOrigin,
        ring_only: bool,
        inferred: bool,
    ) -> Result<Self, ValidationError> {
        check_distance(distance_m)?;
        if ring_only && buffer_from == BufferOrigin::Center {
            return Err(ValidationError::RingRequiresBoundary { context: None });
        }
        Ok(Self { distance_m, buffer_from, ring_only, inferred })
    }

    /// Signed distance in meters; negative values erode.
    #[must_use]
    pub const fn distance_m(&self) -> f64 {
        self.distance_m
    }

    #[must_use]
    pub const fn buffer_from(&self) -> BufferOrigin {
        self.buffer_from
    }

    #[must_use]
    pub const fn ring_only(&self) -> bool {
        self.ring_only
    }

    /// `false` once the distance comes from an explicit statement in the query text.
    #[must_use]
    pub const fn inferred(&self) -> bool {
        self.inferred
    }

    #[must_use]
    pub fn is_erosion(&self) -> bool {
        self.distance_m < 0.0
    }

    /// Replaces the distance, keeping the `inferred` flag untouched.
    ///
    /// # Errors
    /// Returns [`ValidationError::NonFiniteDistance`] for NaN or infinite distances.
    pub fn set_distance_m(&mut self, distance_m: f64) -> Result<(), ValidationError> {
        check_distance(distance_m)?;
        self.distance_m = distance_m;
        Ok(())
    }

    /// Records that the distance was stated explicitly by the user.
    pub const fn mark_explicit(&mut self) {
        self.inferred = false;
    }
}

impl TryFrom<BufferConfigRecord> for BufferConfig {
    type Error = ValidationError;

    fn try_from(r: BufferConfigRecord) -> Result<Self, Self::Error> {
        Self::new(r.distance_m, r.buffer_from, r.ring_only, r.inferred)
    }
}

/// The place the query is anchored to, as named in the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ReferenceLocationRecord")]
pub struct ReferenceLocation {
    name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    type_hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    type_confidence: Option<f64>,
}

#[derive(Deserialize)]
struct ReferenceLocationRecord {
    name: String,
    #[serde(rename = "type")]
    type_hint: Option<String>,
    type_confidence: Option<f64>,
}

impl ReferenceLocation {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), type_hint: None, type_confidence: None }
    }

    /// Attaches a feature-type hint (ranking only, never a strict filter).
    ///
    /// # Errors
    /// Returns [`ValidationError::OutOfRange`] when `confidence` is outside `[0, 1]`.
    pub fn with_type(
        mut self,
        type_hint: impl Into<String>,
        confidence: Option<f64>,
    ) -> Result<Self, ValidationError> {
        if let Some(value) = confidence {
            check_unit("type_confidence", value)?;
        }
        self.type_hint = Some(type_hint.into());
        self.type_confidence = confidence;
        Ok(self)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn type_hint(&self) -> Option<&str> {
        self.type_hint.as_deref()
    }

    #[must_use]
    pub const fn type_confidence(&self) -> Option<f64> {
        self.type_confidence
    }
}

impl TryFrom<ReferenceLocationRecord> for ReferenceLocation {
    type Error = ValidationError;

    fn try_from(r: ReferenceLocationRecord) -> Result<Self, Self::Error> {
        if let Some(value) = r.type_confidence {
            check_unit("type_confidence", value)?;
        }
        Ok(Self { name: r.name, type_hint: r.type_hint, type_confidence: r.type_confidence })
    }
}

/// Relation keyword and category as extracted. The keyword is checked against the
/// registry by the pipeline, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialRelation {
    pub relation: String,
    pub category: RelationCategory,
    /// Meters, present only when the text stated a distance (or a travel time).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_distance: Option<f64>,
}

impl SpatialRelation {
    pub fn new(relation: impl Into<String>, category: RelationCategory) -> Self {
        Self { relation: relation.into(), category, explicit_distance: None }
    }

    #[must_use]
    pub const fn with_explicit_distance(mut self, meters: f64) -> Self {
        self.explicit_distance = Some(meters);
        self
    }
}

/// Self-assessed confidence of the extraction step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConfidenceScoreRecord")]
pub struct ConfidenceScore {
    overall: f64,
    location_confidence: f64,
    relation_confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning: Option<String>,
}

#[derive(Deserialize)]
struct ConfidenceScoreRecord {
    overall: f64,
    location_confidence: f64,
    relation_confidence: f64,
    reasoning: Option<String>,
}

impl ConfidenceScore {
    /// # Errors
    /// Returns [`ValidationError::OutOfRange`] when any score is outside `[0, 1]`.
    pub fn new(
        overall: f64,
        location_confidence: f64,
        relation_confidence: f64,
    ) -> Result<Self, ValidationError> {
        check_unit("overall", overall)?;
        check_unit("location_confidence", location_confidence)?;
        check_unit("relation_confidence", relation_confidence)?;
        Ok(Self { overall, location_confidence, relation_confidence, reasoning: None })
    }

    /// Explanatory text; never interpreted downstream.
    #[must_use]
    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = Some(reasoning.into());
        self
    }

    #[must_use]
    pub const fn overall(&self) -> f64 {
        self.overall
    }

    #[must_use]
    pub const fn location_confidence(&self) -> f64 {
        self.location_confidence
    }

    #[must_use]
    pub const fn relation_confidence(&self) -> f64 {
        self.relation_confidence
    }

    #[must_use]
    pub fn reasoning(&self) -> Option<&str> {
        self.reasoning.as_deref()
    }
}

impl TryFrom<ConfidenceScoreRecord> for ConfidenceScore {
    type Error = ValidationError;

    fn try_from(r: ConfidenceScoreRecord) -> Result<Self, Self::Error> {
        let score = Self::new(r.overall, r.location_confidence, r.relation_confidence)?;
        Ok(Self { reasoning: r.reasoning, ..score })
    }
}

/// Query as produced by the extraction step, before enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "QueryRecord")]
pub struct CandidateQuery {
    query_type: QueryType,
    spatial_relation: SpatialRelation,
    reference_location: ReferenceLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    buffer_config: Option<BufferConfig>,
    confidence_breakdown: ConfidenceScore,
    original_query: String,
}

#[derive(Deserialize)]
struct QueryRecord {
    #[serde(default)]
    query_type: QueryType,
    spatial_relation: SpatialRelation,
    reference_location: ReferenceLocation,
    buffer_config: Option<BufferConfig>,
    confidence_breakdown: ConfidenceScore,
    original_query: String,
}

impl CandidateQuery {
    /// Builds a candidate of type [`QueryType::Simple`].
    ///
    /// # Errors
    /// Returns [`ValidationError::BufferConfigForbidden`] when a containment relation comes
    /// with a buffer configuration. A missing buffer for buffer/directional relations is
    /// accepted here and filled in by enrichment.
    pub fn new(
        spatial_relation: SpatialRelation,
        reference_location: ReferenceLocation,
        buffer_config: Option<BufferConfig>,
        confidence_breakdown: ConfidenceScore,
        original_query: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        forbid_containment_buffer(&spatial_relation, buffer_config.as_ref())?;
        Ok(Self {
            query_type: QueryType::Simple,
            spatial_relation,
            reference_location,
            buffer_config,
            confidence_breakdown,
            original_query: original_query.into(),
        })
    }

    #[must_use]
    pub const fn with_query_type(mut self, query_type: QueryType) -> Self {
        self.query_type = query_type;
        self
    }

    #[must_use]
    pub const fn query_type(&self) -> QueryType {
        self.query_type
    }

    #[must_use]
    pub const fn spatial_relation(&self) -> &SpatialRelation {
        &self.spatial_relation
    }

    #[must_use]
    pub const fn reference_location(&self) -> &ReferenceLocation {
        &self.reference_location
    }

    #[must_use]
    pub const fn buffer_config(&self) -> Option<&BufferConfig> {
        self.buffer_config.as_ref()
    }

    /// Mutable access to an existing buffer; its own invariants stay enforced by
    /// [`BufferConfig`] setters.
    pub const fn buffer_config_mut(&mut self) -> Option<&mut BufferConfig> {
        self.buffer_config.as_mut()
    }

    #[must_use]
    pub const fn confidence_breakdown(&self) -> &ConfidenceScore {
        &self.confidence_breakdown
    }

    #[must_use]
    pub fn original_query(&self) -> &str {
        &self.original_query
    }

    /// Replaces the category with the authoritative one (e.g. from the registry).
    ///
    /// # Errors
    /// Returns [`ValidationError::BufferConfigForbidden`] when switching to containment
    /// while a buffer configuration is attached.
    pub fn resolve_category(&mut self, category: RelationCategory) -> Result<(), ValidationError> {
        let mut relation = self.spatial_relation.clone();
        relation.category = category;
        forbid_containment_buffer(&relation, self.buffer_config.as_ref())?;
        self.spatial_relation = relation;
        Ok(())
    }

    /// Attaches a buffer configuration.
    ///
    /// # Errors
    /// Returns [`ValidationError::BufferConfigForbidden`] for containment relations.
    pub fn attach_buffer_config(&mut self, buffer: BufferConfig) -> Result<(), ValidationError> {
        forbid_containment_buffer(&self.spatial_relation, Some(&buffer))?;
        self.buffer_config = Some(buffer);
        Ok(())
    }
}

impl TryFrom<QueryRecord> for CandidateQuery {
    type Error = ValidationError;

    fn try_from(r: QueryRecord) -> Result<Self, Self::Error> {
        Ok(Self::new(
            r.spatial_relation,
            r.reference_location,
            r.buffer_config,
            r.confidence_breakdown,
            r.original_query,
        )?
        .with_query_type(r.query_type))
    }
}

/// A fully consistent, executable spatial query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CandidateQuery")]
pub struct GeoQuery {
    query_type: QueryType,
    spatial_relation: SpatialRelation,
    reference_location: ReferenceLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    buffer_config: Option<BufferConfig>,
    confidence_breakdown: ConfidenceScore,
    original_query: String,
}

impl GeoQuery {
    /// Builds a checked query of type [`QueryType::Simple`].
    ///
    /// # Errors
    /// * [`ValidationError::BufferConfigRequired`] for buffer/directional relations without a buffer.
    /// * [`ValidationError::BufferConfigForbidden`] for containment relations with a buffer.
    pub fn new(
        spatial_relation: SpatialRelation,
        reference_location: ReferenceLocation,
        buffer_config: Option<BufferConfig>,
        confidence_breakdown: ConfidenceScore,
        original_query: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        CandidateQuery::new(
            spatial_relation,
            reference_location,
            buffer_config,
            confidence_breakdown,
            original_query,
        )?
        .try_into()
    }

    #[must_use]
    pub const fn query_type(&self) -> QueryType {
        self.query_type
    }

    #[must_use]
    pub const fn spatial_relation(&self) -> &SpatialRelation {
        &self.spatial_relation
    }

    #[must_use]
    pub const fn reference_location(&self) -> &ReferenceLocation {
        &self.reference_location
    }

    #[must_use]
    pub const fn buffer_config(&self) -> Option<&BufferConfig> {
        self.buffer_config.as_ref()
    }

    #[must_use]
    pub const fn confidence_breakdown(&self) -> &ConfidenceScore {
        &self.confidence_breakdown
    }

    #[must_use]
    pub fn original_query(&self) -> &str {
        &self.original_query
    }

    /// Turns the query back into a candidate, e.g. to run it through the pipeline again.
    #[must_use]
    pub fn into_candidate(self) -> CandidateQuery {
        CandidateQuery {
            query_type: self.query_type,
            spatial_relation: self.spatial_relation,
            reference_location: self.reference_location,
            buffer_config: self.buffer_config,
            confidence_breakdown: self.confidence_breakdown,
            original_query: self.original_query,
        }
    }
}

impl TryFrom<CandidateQuery> for GeoQuery {
    type Error = ValidationError;

    fn try_from(c: CandidateQuery) -> Result<Self, Self::Error> {
        let category = c.spatial_relation.category;
        forbid_containment_buffer(&c.spatial_relation, c.buffer_config.as_ref())?;
        if category.requires_buffer() && c.buffer_config.is_none() {
            return Err(ValidationError::BufferConfigRequired {
                relation: c.spatial_relation.relation,
                category,
                context: None,
            });
        }

        Ok(Self {
            query_type: c.query_type,
            spatial_relation: c.spatial_relation,
            reference_location: c.reference_location,
            buffer_config: c.buffer_config,
            confidence_breakdown: c.confidence_breakdown,
            original_query: c.original_query,
        })
    }
}

impl From<GeoQuery> for CandidateQuery {
    fn from(query: GeoQuery) -> Self {
        query.into_candidate()
    }
}

fn forbid_containment_buffer(
    relation: &SpatialRelation,
    buffer: Option<&BufferConfig>,
) -> Result<(), ValidationError> {
    if relation.category == RelationCategory::Containment && buffer.is_some() {
        return Err(ValidationError::BufferConfigForbidden {
            relation: relation.relation.clone(),
            context: None,
        });
    }
    Ok(())
}

fn check_unit(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange { field: Cow::Borrowed(field), value, context: None })
    }
}

const fn check_distance(distance_m: f64) -> Result<(), ValidationError> {
    if distance_m.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFiniteDistance { value: distance_m, context: None })
    }
}
