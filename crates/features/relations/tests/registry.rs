use geoq_domain::relation::{BufferOrigin, RelationCategory, RelationConfig};
use geoq_relations::{RegistryError, SpatialRelationRegistry};
use proptest::prelude::*;
use strum::IntoEnumIterator;

#[test]
fn builtins_cover_every_category() {
    let registry = SpatialRelationRegistry::default();
    assert_eq!(registry.len(), 13);

    assert_eq!(registry.list(Some(RelationCategory::Containment)), ["in"]);
    assert_eq!(
        registry.list(Some(RelationCategory::Buffer)),
        ["along", "in_the_heart_of", "near", "on_shores_of"]
    );
    assert_eq!(
        registry.list(Some(RelationCategory::Directional)),
        [
            "east_of",
            "north_of",
            "northeast_of",
            "northwest_of",
            "south_of",
            "southeast_of",
            "southwest_of",
            "west_of"
        ]
    );
}

#[test]
fn builtin_defaults_match_catalogue() {
    let registry = SpatialRelationRegistry::default();

    let near = registry.get("near").expect("near");
    assert_eq!(near.default_distance_m, Some(5_000.0));
    assert_eq!(near.buffer_from, Some(BufferOrigin::Center));

    let shores = registry.get("on_shores_of").expect("on_shores_of");
    assert!(shores.ring_only);
    assert_eq!(shores.buffer_from, Some(BufferOrigin::Boundary));
    assert_eq!(
        shores.applies_to.as_deref(),
        Some(&["lake".to_owned(), "water_body".to_owned(), "sea".to_owned()][..])
    );

    assert!(registry.get("in_the_heart_of").expect("heart").is_erosion());

    for (name, bearing) in [("north_of", 0.0), ("east_of", 90.0), ("southwest_of", 225.0)] {
        let config = registry.get(name).expect("directional");
        assert_eq!(config.default_distance_m, Some(10_000.0));
        assert_eq!(config.sector_angle_degrees, Some(90.0));
        assert_eq!(config.direction_angle_degrees, Some(bearing));
        assert!(config.buffer_from.is_none());
    }
}

#[test]
fn unknown_relation_carries_name_and_catalogue() {
    let registry = SpatialRelationRegistry::default();
    let err = registry.get("beside").expect_err("unknown");

    let RegistryError::UnknownRelation { name, available, .. } = &err;
    assert_eq!(name, "beside");
    assert_eq!(available, &registry.list(None));
    assert!(err.to_string().starts_with("Unknown spatial relation: 'beside'. Available relations: along, east_of"));
}

#[test]
fn custom_relations_can_be_registered() {
    let mut registry = SpatialRelationRegistry::default();
    registry.register(
        RelationConfig::new("within_walking_distance", RelationCategory::Buffer, "Walkable")
            .default_distance(1_200.0)
            .buffer_from(BufferOrigin::Center),
    );

    assert!(registry.has("within_walking_distance"));
    assert!(registry.list(Some(RelationCategory::Buffer)).contains(&"within_walking_distance"));
    assert!(registry.describe_for_prompt().contains("  • within_walking_distance (default: 1200m) [from center]"));
}

#[test]
fn prompt_groups_by_category_in_fixed_order() {
    let text = SpatialRelationRegistry::default().describe_for_prompt();

    let containment = text.find("\nCONTAINMENT RELATIONS:").expect("containment header");
    let buffer = text.find("\nBUFFER RELATIONS:").expect("buffer header");
    let directional = text.find("\nDIRECTIONAL RELATIONS:").expect("directional header");
    let notes = text.find("\nNOTES:").expect("notes");
    assert!(containment < buffer && buffer < directional && directional < notes);

    assert!(text.contains("  • in_the_heart_of (default: 500m erosion) [from boundary]\n"));
    assert!(text.contains("    (commonly used with: river, road, railway, linear_feature)"));
    assert!(text.contains("  • north_of (default: 10000m)\n    Directional sector north of reference"));
    assert!(text.ends_with("  • Buffer from 'center' vs 'boundary' determines buffer origin"));
}

fn category() -> impl Strategy<Value = RelationCategory> {
    prop::sample::select(RelationCategory::iter().collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn list_returns_sorted_category_subset(
        extra in prop::collection::vec(("[a-z_]{1,12}", category()), 0..16),
        filter in category(),
    ) {
        let mut registry = SpatialRelationRegistry::default();
        for (name, category) in &extra {
            registry.register(RelationConfig::new(name.clone(), *category, "custom"));
        }

        let all = registry.list(None);
        prop_assert!(all.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(all.len(), registry.len());

        let subset = registry.list(Some(filter));
        prop_assert!(subset.windows(2).all(|w| w[0] < w[1]));
        for name in &all {
            let member = registry.get(name).map(|c| c.category == filter).unwrap_or(false);
            prop_assert_eq!(member, subset.contains(name));
        }
    }
}
