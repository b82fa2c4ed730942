use geoq::domain::config::PipelineConfig;
use geoq::domain::query::{BufferConfig, CandidateQuery, SpatialRelation};
use geoq::domain::relation::{BufferOrigin, RelationCategory, RelationConfig};
use geoq::kernel::ports::{
    ExtractionOracle, GeoFeature, Gazetteer, Geometry, GeometryEngine, PortError,
    candidate_from_json,
};
use geoq::{GeoContext, GeoqError, PipelineError, QueryParser, resolve_search_areas};
use serde_json::json;

/// Replays a canned JSON response, refusing to answer without priming text.
struct CannedOracle {
    response: String,
}

impl CannedOracle {
    fn new(response: serde_json::Value) -> Self {
        Self { response: response.to_string() }
    }
}

impl ExtractionOracle for CannedOracle {
    fn extract(&self, _query_text: &str, priming: &str) -> Result<CandidateQuery, PortError> {
        if !priming.contains("RELATIONS:") {
            return Err("missing relation catalogue".into());
        }
        candidate_from_json(&self.response)
    }
}

struct DownOracle;

impl ExtractionOracle for DownOracle {
    fn extract(&self, _query_text: &str, _priming: &str) -> Result<CandidateQuery, PortError> {
        Err(PortError::Unavailable { message: "rate limited".into(), context: None })
    }
}

struct FixedGazetteer(Vec<GeoFeature>);

impl Gazetteer for FixedGazetteer {
    fn search(&self, name: &str, _type_hint: Option<&str>) -> Result<Vec<GeoFeature>, PortError> {
        Ok(self.0.iter().filter(|f| f.name == name).cloned().collect())
    }
}

/// Echoes its inputs instead of computing geometry.
struct EchoEngine;

impl GeometryEngine for EchoEngine {
    fn apply_spatial_relation(
        &self,
        geometry: &Geometry,
        relation: &SpatialRelation,
        buffer: Option<&BufferConfig>,
    ) -> Result<Geometry, PortError> {
        Ok(Geometry(json!({
            "source": geometry.0,
            "relation": relation.relation,
            "distance_m": buffer.map(BufferConfig::distance_m),
        })))
    }
}

fn near_lake_geneva(overall: f64) -> serde_json::Value {
    json!({
        "query_type": "simple",
        "spatial_relation": { "relation": "near", "category": "buffer" },
        "reference_location": { "name": "Lake Geneva", "type": "lake", "type_confidence": 0.9 },
        "confidence_breakdown": {
            "overall": overall, "location_confidence": 0.9, "relation_confidence": 0.9
        },
        "original_query": "near Lake Geneva"
    })
}

fn feature(name: &str, x: f64) -> GeoFeature {
    GeoFeature {
        name: name.to_owned(),
        feature_type: "lake".to_owned(),
        geometry: Geometry(json!({ "type": "Point", "coordinates": [x, 46.4] })),
    }
}

#[test]
fn parser_primes_oracle_and_enriches_result() {
    let context = GeoContext::builder().build().expect("context");
    let parser = QueryParser::new(CannedOracle::new(near_lake_geneva(0.92)), context).expect("parser");

    let validated = parser.parse("near Lake Geneva").expect("parsed");
    let buffer = validated.query.buffer_config().expect("buffer");
    assert!((buffer.distance_m() - 5_000.0).abs() < f64::EPSILON);
    assert_eq!(buffer.buffer_from(), BufferOrigin::Center);

    let priming = parser.priming();
    assert!(priming.contains("\nSPATIAL RELATIONS:\nCONTAINMENT RELATIONS:"));
    assert!(priming.contains("\nEXAMPLES:\n\nExample 1 (en): "));
    assert!(priming.contains("  • on_shores_of (default: 1000m) [ring buffer, from boundary]"));
}

#[test]
fn oracle_failures_are_surfaced() {
    let parser = QueryParser::new(DownOracle, GeoContext::builder().build().expect("context"))
        .expect("parser");

    let err = parser.parse("near Lake Geneva").expect_err("oracle down");
    assert_eq!(err.kind(), "Collaborator");
    assert!(err.to_string().contains("(extraction oracle)"));
    assert!(err.to_string().contains("rate limited"));
}

#[test]
fn invalid_oracle_output_is_a_collaborator_error() {
    let mut response = near_lake_geneva(0.9);
    response["buffer_config"] = json!({ "distance_m": 1000, "buffer_from": "center", "ring_only": true });

    let parser = QueryParser::new(CannedOracle::new(response), GeoContext::builder().build().expect("context"))
        .expect("parser");
    let err = parser.parse("near Lake Geneva").expect_err("ring from center");
    assert_eq!(err.kind(), "Collaborator");
}

#[test]
fn strict_context_rejects_low_confidence() {
    let context = GeoContext::builder()
        .pipeline(PipelineConfig { confidence_threshold: 0.6, strict: true })
        .build()
        .expect("context");
    let parser = QueryParser::new(CannedOracle::new(near_lake_geneva(0.4)), context).expect("parser");

    let err = parser.parse("near Lake Geneva").expect_err("low confidence");
    assert!(matches!(
        err,
        GeoqError::Pipeline { source: PipelineError::LowConfidence { .. }, .. }
    ));
}

#[test]
fn builder_rejects_invalid_threshold() {
    let err = GeoContext::builder()
        .pipeline(PipelineConfig { confidence_threshold: 2.0, strict: false })
        .build()
        .expect_err("threshold");
    assert_eq!(err.kind(), "Pipeline");
}

#[test]
fn builder_registers_custom_relations() {
    let context = GeoContext::builder()
        .relation(
            RelationConfig::new("within_walking_distance", RelationCategory::Buffer, "Walkable")
                .default_distance(1_200.0),
        )
        .build()
        .expect("context");

    assert!(context.registry().has("within_walking_distance"));
    assert!(context.priming().expect("priming").relations().contains("within_walking_distance"));
}

#[test]
fn every_reference_feature_gets_a_search_area() {
    let context = GeoContext::builder().build().expect("context");
    let candidate = candidate_from_json(&near_lake_geneva(0.9).to_string()).expect("candidate");
    let query = context.validate(candidate).expect("valid").query;

    let gazetteer =
        FixedGazetteer(vec![feature("Lake Geneva", 6.5), feature("Lake Zurich", 8.7), feature("Lake Geneva", 6.6)]);
    let areas = resolve_search_areas(&query, &gazetteer, &EchoEngine).expect("areas");

    assert_eq!(areas.len(), 2);
    assert_eq!(areas[0].reference_index, 0);
    assert_eq!(areas[1].reference_index, 1);
    assert_eq!(areas[1].reference.geometry.0["coordinates"][0], 6.6);
    assert_eq!(areas[0].area.0["relation"], "near");
    assert_eq!(areas[0].area.0["distance_m"], 5000.0);
}

#[test]
fn unknown_location_is_reported() {
    let context = GeoContext::builder().build().expect("context");
    let candidate = candidate_from_json(&near_lake_geneva(0.9).to_string()).expect("candidate");
    let query = context.validate(candidate).expect("valid").query;

    let err = resolve_search_areas(&query, &FixedGazetteer(Vec::new()), &EchoEngine)
        .expect_err("nothing found");
    assert_eq!(err.to_string(), "Location 'Lake Geneva' not found");
}
