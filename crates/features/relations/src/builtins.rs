use geoq_domain::relation::{BufferOrigin, RelationCategory, RelationConfig};

const DIRECTIONAL_DISTANCE_M: f64 = 10_000.0;
const SECTOR_WIDTH_DEGREES: f64 = 90.0;

/// Compass bearings, 0 = North, clockwise.
const DIRECTIONS: [(&str, &str, f64); 8] = [
    ("north_of", "north", 0.0),
    ("northeast_of", "northeast", 45.0),
    ("east_of", "east", 90.0),
    ("southeast_of", "southeast", 135.0),
    ("south_of", "south", 180.0),
    ("southwest_of", "southwest", 225.0),
    ("west_of", "west", 270.0),
    ("northwest_of", "northwest", 315.0),
];

/// The built-in catalogue: one containment, four buffer and eight directional relations.
pub(crate) fn relations() -> Vec<RelationConfig> {
    let mut relations = vec![
        RelationConfig::new(
            "in",
            RelationCategory::Containment,
            "Feature is within the reference boundary",
        ),
        RelationConfig::new(
            "near",
            RelationCategory::Buffer,
            "Proximity search with default 5km radius",
        )
        .default_distance(5_000.0)
        .buffer_from(BufferOrigin::Center),
        RelationConfig::new(
            "on_shores_of",
            RelationCategory::Buffer,
            "Ring buffer around lake/water boundary, excluding the water body itself",
        )
        .default_distance(1_000.0)
        .buffer_from(BufferOrigin::Boundary)
        .ring_only()
        .applies_to(["lake", "water_body", "sea"]),
        RelationConfig::new(
            "along",
            RelationCategory::Buffer,
            "Buffer following a linear feature like a river or road",
        )
        .default_distance(500.0)
        .buffer_from(BufferOrigin::Boundary)
        .applies_to(["river", "road", "railway", "linear_feature"]),
        RelationConfig::new(
            "in_the_heart_of",
            RelationCategory::Buffer,
            "Central area excluding periphery (negative buffer - erosion)",
        )
        .default_distance(-500.0)
        .buffer_from(BufferOrigin::Boundary),
    ];

    relations.extend(DIRECTIONS.iter().map(|&(name, direction, bearing)| {
        RelationConfig::new(
            name,
            RelationCategory::Directional,
            format!("Directional sector {direction} of reference"),
        )
        .default_distance(DIRECTIONAL_DISTANCE_M)
        .sector(SECTOR_WIDTH_DEGREES, bearing)
    }));

    relations
}
