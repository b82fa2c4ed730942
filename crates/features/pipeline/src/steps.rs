//! The four pipeline steps, exposed individually for callers that need only part of the
//! normalization (e.g. re-checking confidence with a different threshold).

use crate::advisory::{Advisory, DEEP_EROSION_M, LARGE_BUFFER_M};
use crate::error::PipelineError;
use geoq_domain::constants::FALLBACK_DISTANCE_M;
use geoq_domain::query::{BufferConfig, CandidateQuery, GeoQuery};
use geoq_domain::relation::RelationConfig;
use geoq_relations::SpatialRelationRegistry;
use tracing::debug;

/// Step 1: the relation keyword must be registered.
///
/// # Errors
/// Returns [`PipelineError::UnknownRelation`] carrying the full sorted catalogue.
pub fn check_relation<'r>(
    candidate: &CandidateQuery,
    registry: &'r SpatialRelationRegistry,
) -> Result<&'r RelationConfig, PipelineError> {
    Ok(registry.get(&candidate.spatial_relation().relation)?)
}

/// Step 2: resolves the category from the registry and fills in buffer defaults.
///
/// * No buffer yet: synthesized from the registry entry, marked inferred.
/// * Inferred buffer: takes the explicit distance when stated, otherwise replaces the
///   `0` placeholder with the registry default.
/// * An explicit distance always wins in the end and clears the inferred flag.
///
/// # Errors
/// * [`PipelineError::UnknownRelation`] when the relation is not registered.
/// * [`PipelineError::Structural`] when the resolved category contradicts the candidate
///   (containment with a buffer) or a distance is not finite.
pub fn enrich_with_defaults(
    candidate: &mut CandidateQuery,
    registry: &SpatialRelationRegistry,
) -> Result<(), PipelineError> {
    let config = check_relation(candidate, registry)?;

    let extracted = candidate.spatial_relation().category;
    if extracted != config.category {
        debug!(
            relation = %config.name,
            extracted = %extracted,
            resolved = %config.category,
            "Category replaced by registry entry"
        );
        candidate.resolve_category(config.category)?;
    }

    if !config.category.requires_buffer() {
        return Ok(());
    }

    let default_distance = registry_default_distance(config);
    let explicit = candidate.spatial_relation().explicit_distance;

    if candidate.buffer_config().is_none() {
        let buffer = BufferConfig::new(
            default_distance,
            config.buffer_from.unwrap_or_default(),
            config.ring_only,
            true,
        )?;
        debug!(distance_m = buffer.distance_m(), origin = %buffer.buffer_from(), "Buffer synthesized from defaults");
        candidate.attach_buffer_config(buffer)?;
    } else if let Some(buffer) = candidate.buffer_config_mut().filter(|b| b.inferred()) {
        if let Some(distance) = explicit {
            buffer.set_distance_m(distance)?;
            buffer.mark_explicit();
        } else if is_unset(buffer.distance_m()) {
            buffer.set_distance_m(default_distance)?;
        }
    }

    if let (Some(distance), Some(buffer)) = (explicit, candidate.buffer_config_mut()) {
        buffer.set_distance_m(distance)?;
        buffer.mark_explicit();
    }

    Ok(())
}

/// Step 3: policy checks on the buffer distance. Never fails.
#[must_use]
pub fn check_buffer_consistency(query: &GeoQuery) -> Vec<Advisory> {
    let Some(buffer) = query.buffer_config() else {
        return Vec::new();
    };
    let distance_m = buffer.distance_m();

    let mut advisories = Vec::new();
    if distance_m.abs() > LARGE_BUFFER_M {
        advisories.push(Advisory::LargeBuffer { distance_m });
    }
    if distance_m < DEEP_EROSION_M {
        advisories.push(Advisory::DeepErosion { distance_m });
    }
    advisories
}

/// Step 4: confidence gate. At or above `threshold` passes silently.
///
/// # Returns
/// An advisory when confidence is low and `strict` is off.
///
/// # Errors
/// Returns [`PipelineError::LowConfidence`] when confidence is low and `strict` is on.
pub fn check_confidence(
    query: &GeoQuery,
    threshold: f64,
    strict: bool,
) -> Result<Option<Advisory>, PipelineError> {
    let score = query.confidence_breakdown();
    let confidence = score.overall();
    if confidence >= threshold {
        return Ok(None);
    }

    let mut message = format!(
        "Low confidence score: {confidence:.2} (threshold: {threshold:.2})\n\
         Location confidence: {:.2}\n\
         Relation confidence: {:.2}",
        score.location_confidence(),
        score.relation_confidence(),
    );
    if let Some(reasoning) = score.reasoning() {
        message.push_str("\nReasoning: ");
        message.push_str(reasoning);
    }

    if strict {
        return Err(PipelineError::LowConfidence {
            confidence,
            threshold,
            reasoning: score.reasoning().map(str::to_owned),
            message,
            context: None,
        });
    }

    Ok(Some(Advisory::LowConfidence { confidence, threshold, message }))
}

/// Registry default, with `0` and missing both meaning "use the fallback".
fn registry_default_distance(config: &RelationConfig) -> f64 {
    config.default_distance_m.filter(|d| !is_unset(*d)).unwrap_or(FALLBACK_DISTANCE_M)
}

/// `0` doubles as "distance not set" in extracted buffers.
// TODO: replace the 0 placeholder with an explicit optional distance once oracle outputs
// stop emitting it.
#[allow(clippy::float_cmp)]
fn is_unset(distance_m: f64) -> bool {
    distance_m == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoq_domain::query::{ConfidenceScore, ReferenceLocation, SpatialRelation};
    use geoq_domain::relation::{BufferOrigin, RelationCategory};

    fn query_with_distance(distance_m: f64) -> GeoQuery {
        GeoQuery::new(
            SpatialRelation::new("in_the_heart_of", RelationCategory::Buffer),
            ReferenceLocation::new("Lausanne"),
            Some(BufferConfig::new(distance_m, BufferOrigin::Boundary, false, false).expect("buffer")),
            ConfidenceScore::new(0.9, 0.9, 0.9).expect("confidence"),
            "im Herzen von Lausanne",
        )
        .expect("query")
    }

    #[test]
    fn buffer_thresholds_are_exclusive() {
        assert!(check_buffer_consistency(&query_with_distance(100_000.0)).is_empty());
        assert!(check_buffer_consistency(&query_with_distance(-5_000.0)).is_empty());
        assert_eq!(
            check_buffer_consistency(&query_with_distance(-150_000.0)),
            [
                Advisory::LargeBuffer { distance_m: -150_000.0 },
                Advisory::DeepErosion { distance_m: -150_000.0 }
            ]
        );
    }

    #[test]
    fn confidence_at_threshold_passes() {
        let query = query_with_distance(-500.0);
        assert_eq!(check_confidence(&query, 0.9, true), Ok(None));
    }

    #[test]
    fn zero_or_missing_registry_default_falls_back() {
        let zero = RelationConfig::new("x", RelationCategory::Buffer, "x").default_distance(0.0);
        let none = RelationConfig::new("y", RelationCategory::Buffer, "y");
        assert!((registry_default_distance(&zero) - FALLBACK_DISTANCE_M).abs() < f64::EPSILON);
        assert!((registry_default_distance(&none) - FALLBACK_DISTANCE_M).abs() < f64::EPSILON);
    }
}
