use crate::Language;
use geoq_domain::relation::BufferOrigin::{self, Boundary, Center};
use geoq_domain::relation::RelationCategory::{self, Buffer, Containment, Directional};

pub(crate) struct Seed {
    pub(crate) input: &'static str,
    pub(crate) language: Language,
    pub(crate) description: &'static str,
    pub(crate) relation: &'static str,
    pub(crate) category: RelationCategory,
    pub(crate) explicit_distance: Option<f64>,
    pub(crate) location: &'static str,
    pub(crate) location_type: &'static str,
    pub(crate) type_confidence: f64,
    pub(crate) buffer: Option<SeedBuffer>,
    /// overall, location, relation
    pub(crate) confidence: [f64; 3],
    pub(crate) reasoning: Option<&'static str>,
}

pub(crate) struct SeedBuffer {
    pub(crate) distance_m: f64,
    pub(crate) origin: BufferOrigin,
    pub(crate) ring_only: bool,
    pub(crate) inferred: bool,
}

const fn buffer(distance_m: f64, origin: BufferOrigin, ring_only: bool, inferred: bool) -> Option<SeedBuffer> {
    Some(SeedBuffer { distance_m, origin, ring_only, inferred })
}

pub(crate) const SEEDS: &[Seed] = &[
    Seed {
        input: "in Bern",
        language: Language::En,
        description: "Simple containment query - reference location only",
        relation: "in",
        category: Containment,
        explicit_distance: None,
        location: "Bern",
        location_type: "city",
        type_confidence: 0.95,
        buffer: None,
        confidence: [0.95, 0.95, 0.95],
        reasoning: None,
    },
    Seed {
        input: "in Zürich",
        language: Language::De,
        description: "Simple containment query in German",
        relation: "in",
        category: Containment,
        explicit_distance: None,
        location: "Zürich",
        location_type: "city",
        type_confidence: 0.95,
        buffer: None,
        confidence: [0.93, 0.95, 0.92],
        reasoning: None,
    },
    Seed {
        input: "restaurants à Lausanne",
        language: Language::Fr,
        description: "Query with subject 'restaurants' - only geographic filter 'à Lausanne' is extracted",
        relation: "in",
        category: Containment,
        explicit_distance: None,
        location: "Lausanne",
        location_type: "city",
        type_confidence: 0.95,
        buffer: None,
        confidence: [0.95, 0.95, 0.95],
        reasoning: None,
    },
    Seed {
        input: "a Cuira",
        language: Language::Rm,
        description: "Simple containment query in Romansh - official name 'Chur' used for the geodata lookup",
        relation: "in",
        category: Containment,
        explicit_distance: None,
        location: "Chur",
        location_type: "city",
        type_confidence: 0.9,
        buffer: None,
        confidence: [0.88, 0.85, 0.92],
        reasoning: Some("Romansh 'Cuira' is the city of Chur; 'a' marks containment"),
    },
    Seed {
        input: "near Lake Geneva",
        language: Language::En,
        description: "Proximity buffer query - 5km distance inferred from the medium feature scale (lake)",
        relation: "near",
        category: Buffer,
        explicit_distance: Some(5_000.0),
        location: "Lake Geneva",
        location_type: "lake",
        type_confidence: 0.95,
        buffer: buffer(5_000.0, Center, false, false),
        confidence: [0.88, 0.90, 0.85],
        reasoning: Some("Medium-scale feature (lake) → 5km proximity radius"),
    },
    Seed {
        input: "im Herzen von Bern",
        language: Language::De,
        description: "Negative buffer (erosion) - central area",
        relation: "in_the_heart_of",
        category: Buffer,
        explicit_distance: None,
        location: "Bern",
        location_type: "city",
        type_confidence: 0.95,
        buffer: buffer(-500.0, Boundary, false, true),
        confidence: [0.87, 0.92, 0.82],
        reasoning: Some("Idiomatic expression 'im Herzen von' may have slight ambiguity"),
    },
    Seed {
        input: "on the shores of Lake Zurich",
        language: Language::En,
        description: "Ring buffer around a lake boundary, excluding the water body itself",
        relation: "on_shores_of",
        category: Buffer,
        explicit_distance: None,
        location: "Lake Zurich",
        location_type: "lake",
        type_confidence: 0.95,
        buffer: buffer(1_000.0, Boundary, true, true),
        confidence: [0.92, 0.95, 0.9],
        reasoning: None,
    },
    Seed {
        input: "entlang der Aare",
        language: Language::De,
        description: "Buffer following a linear feature (river) from its boundary",
        relation: "along",
        category: Buffer,
        explicit_distance: None,
        location: "Aare",
        location_type: "river",
        type_confidence: 0.9,
        buffer: buffer(500.0, Boundary, false, true),
        confidence: [0.9, 0.9, 0.9],
        reasoning: None,
    },
    Seed {
        input: "north of Zurich",
        language: Language::En,
        description: "Directional sector query",
        relation: "north_of",
        category: Directional,
        explicit_distance: None,
        location: "Zürich",
        location_type: "city",
        type_confidence: 0.95,
        buffer: buffer(10_000.0, Center, false, true),
        confidence: [0.94, 0.95, 0.93],
        reasoning: None,
    },
    Seed {
        input: "au sud-ouest de Genève",
        language: Language::Fr,
        description: "Diagonal directional sector query in French",
        relation: "southwest_of",
        category: Directional,
        explicit_distance: None,
        location: "Genève",
        location_type: "city",
        type_confidence: 0.95,
        buffer: buffer(10_000.0, Center, false, true),
        confidence: [0.91, 0.95, 0.88],
        reasoning: None,
    },
    Seed {
        input: "cafés near the train station",
        language: Language::En,
        description: "Subject 'cafés' ignored - only geographic filter 'near the train station' extracted. 1km distance inferred from the small feature scale (train station)",
        relation: "near",
        category: Buffer,
        explicit_distance: Some(1_000.0),
        location: "train station",
        location_type: "train_station",
        type_confidence: 0.7,
        buffer: buffer(1_000.0, Center, false, false),
        confidence: [0.75, 0.70, 0.80],
        reasoning: Some(
            "Small feature (train station) context → 1km buffer. Generic location reference reduces overall confidence.",
        ),
    },
    Seed {
        input: "bus stations within 2km of Lausanne",
        language: Language::En,
        description: "Subject 'bus stations' ignored - only geographic filter 'within 2km of Lausanne' extracted",
        relation: "near",
        category: Buffer,
        explicit_distance: Some(2_000.0),
        location: "Lausanne",
        location_type: "city",
        type_confidence: 0.95,
        buffer: buffer(2_000.0, Center, false, false),
        confidence: [0.95, 0.95, 0.95],
        reasoning: None,
    },
    Seed {
        input: "Hiking north of Lausanne",
        language: Language::En,
        description: "Activity 'Hiking' ignored - only geographic filter 'north of Lausanne' extracted",
        relation: "north_of",
        category: Directional,
        explicit_distance: None,
        location: "Lausanne",
        location_type: "city",
        type_confidence: 0.95,
        buffer: buffer(10_000.0, Center, false, true),
        confidence: [0.95, 0.95, 0.95],
        reasoning: None,
    },
    Seed {
        input: "Hiking with children near Lake Geneva",
        language: Language::En,
        description: "Activity 'Hiking with children' completely ignored - only 'near Lake Geneva' extracted. 5km inferred from the medium feature scale (lake)",
        relation: "near",
        category: Buffer,
        explicit_distance: Some(5_000.0),
        location: "Lake Geneva",
        location_type: "lake",
        type_confidence: 0.95,
        buffer: buffer(5_000.0, Center, false, false),
        confidence: [0.90, 0.90, 0.90],
        reasoning: Some(
            "Medium feature scale (lake) context → 5km buffer. Activity 'hiking' considered but not used for distance calculation.",
        ),
    },
    Seed {
        input: "ristoranti vicino al Lago Maggiore",
        language: Language::It,
        description: "Italian proximity query - 'vicino a' maps to 'near', subject 'ristoranti' ignored",
        relation: "near",
        category: Buffer,
        explicit_distance: Some(5_000.0),
        location: "Lago Maggiore",
        location_type: "lake",
        type_confidence: 0.95,
        buffer: buffer(5_000.0, Center, false, false),
        confidence: [0.89, 0.92, 0.86],
        reasoning: Some("Medium feature scale (lake) → 5km proximity radius"),
    },
    Seed {
        input: "Walking distance from Zurich main railway station",
        language: Language::En,
        description: "Contextual distance 'walking distance' converted to 1km explicit distance",
        relation: "near",
        category: Buffer,
        explicit_distance: Some(1_000.0),
        location: "Zurich main railway station",
        location_type: "train_station",
        type_confidence: 0.95,
        buffer: buffer(1_000.0, Center, false, false),
        confidence: [0.90, 0.90, 0.90],
        reasoning: Some("'Walking distance' converted to 1km buffer."),
    },
    Seed {
        input: "Biking distance from Lake Geneva",
        language: Language::En,
        description: "Contextual distance 'biking distance' converted to 5km explicit distance",
        relation: "near",
        category: Buffer,
        explicit_distance: Some(5_000.0),
        location: "Lake Geneva",
        location_type: "lake",
        type_confidence: 0.95,
        buffer: buffer(5_000.0, Center, false, false),
        confidence: [0.90, 0.90, 0.90],
        reasoning: Some("'Biking distance' converted to 5km buffer."),
    },
    Seed {
        input: "10 minutes walk from Zurich main railway station",
        language: Language::En,
        description: "Time-based distance '10 minutes walk' converted to 800m explicit distance",
        relation: "near",
        category: Buffer,
        explicit_distance: Some(800.0),
        location: "Zurich main railway station",
        location_type: "train_station",
        type_confidence: 0.95,
        buffer: buffer(800.0, Center, false, false),
        confidence: [0.90, 0.90, 0.90],
        reasoning: Some("'10 minutes walk' converted to 800m buffer (5km/h walking speed)."),
    },
    Seed {
        input: "15 minutes bike from Lake Geneva",
        language: Language::En,
        description: "Time-based distance '15 minutes bike' converted to 5000m explicit distance",
        relation: "near",
        category: Buffer,
        explicit_distance: Some(5_000.0),
        location: "Lake Geneva",
        location_type: "lake",
        type_confidence: 0.95,
        buffer: buffer(5_000.0, Center, false, false),
        confidence: [0.90, 0.90, 0.90],
        reasoning: Some("'15 minutes bike' converted to 5000m buffer (20km/h biking speed)."),
    },
    Seed {
        input: "près de la gare d'Yverdon",
        language: Language::Fr,
        description: "French proximity query - 'près de' maps to 'near', full official location name used for correct geodata lookup",
        relation: "near",
        category: Buffer,
        explicit_distance: None,
        location: "Yverdon-les-Bains",
        location_type: "train_station",
        type_confidence: 0.85,
        buffer: buffer(5_000.0, Center, false, true),
        confidence: [0.88, 0.85, 0.90],
        reasoning: Some(
            "'Près de la gare d'Yverdon' - extracted full official name 'Yverdon-les-Bains' to match the gazetteer with train_station type",
        ),
    },
    Seed {
        input: "500m from the Lausanne railway station",
        language: Language::En,
        description: "Explicit distance from a specific location type - 'from' maps to 'near', base location name extracted from descriptor",
        relation: "near",
        category: Buffer,
        explicit_distance: Some(500.0),
        location: "Lausanne",
        location_type: "railway_station",
        type_confidence: 0.90,
        buffer: buffer(500.0, Center, false, false),
        confidence: [0.92, 0.90, 0.95],
        reasoning: Some(
            "'500m from the Lausanne railway station' - explicit 500m distance, location type inferred from 'railway station', base location 'Lausanne' extracted",
        ),
    },
];
