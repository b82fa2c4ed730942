use geoq_domain::ValidationError;
use geoq_domain::query::{
    BufferConfig, CandidateQuery, ConfidenceScore, GeoQuery, ReferenceLocation, SpatialRelation,
};
use geoq_domain::relation::{BufferOrigin, RelationCategory};
use proptest::prelude::*;

fn category() -> impl Strategy<Value = RelationCategory> {
    prop_oneof![
        Just(RelationCategory::Containment),
        Just(RelationCategory::Buffer),
        Just(RelationCategory::Directional),
    ]
}

fn finite_distance() -> impl Strategy<Value = f64> {
    -200_000.0f64..200_000.0
}

proptest! {
    #[test]
    fn ring_requires_boundary(distance in finite_distance(), inferred in any::<bool>()) {
        let from_center = BufferConfig::new(distance, BufferOrigin::Center, true, inferred);
        prop_assert!(
            matches!(from_center, Err(ValidationError::RingRequiresBoundary { .. })),
            "ring from center accepted"
        );
        prop_assert!(BufferConfig::new(distance, BufferOrigin::Boundary, true, inferred).is_ok());
    }

    #[test]
    fn geo_query_buffer_presence_matches_category(
        category in category(),
        distance in finite_distance(),
        with_buffer in any::<bool>(),
    ) {
        let buffer = with_buffer.then(|| {
            BufferConfig::new(distance, BufferOrigin::Boundary, false, true).expect("buffer")
        });
        let result = GeoQuery::new(
            SpatialRelation::new("any", category),
            ReferenceLocation::new("Anywhere"),
            buffer,
            ConfidenceScore::new(1.0, 1.0, 1.0).expect("confidence"),
            "any Anywhere",
        );

        prop_assert_eq!(result.is_ok(), category.requires_buffer() == with_buffer);
        if let Ok(query) = result {
            prop_assert_eq!(query.buffer_config().is_some(), category.requires_buffer());
        }
    }

    #[test]
    fn confidence_outside_unit_interval_is_rejected(value in prop_oneof![-10.0f64..-0.0001, 1.0001f64..10.0]) {
        prop_assert!(ConfidenceScore::new(value, 0.5, 0.5).is_err());
        prop_assert!(ConfidenceScore::new(0.5, value, 0.5).is_err());
        prop_assert!(ConfidenceScore::new(0.5, 0.5, value).is_err());
    }
}

#[test]
fn candidate_json_without_query_type_defaults_to_simple() {
    let raw = r#"{
        "spatial_relation": { "relation": "in", "category": "containment", "explicit_distance": null },
        "reference_location": { "name": "Bern", "type": null, "type_confidence": null },
        "buffer_config": null,
        "confidence_breakdown": {
            "overall": 0.95, "location_confidence": 0.95, "relation_confidence": 0.95, "reasoning": null
        },
        "original_query": "in Bern"
    }"#;

    let candidate: CandidateQuery = serde_json::from_str(raw).expect("candidate");
    let query = GeoQuery::try_from(candidate).expect("complete");
    assert_eq!(query.reference_location().name(), "Bern");
    assert!(query.reference_location().type_hint().is_none());
    assert!(query.confidence_breakdown().reasoning().is_none());
}
