//! # Few-shot Example Bank
//!
//! A fixed, ordered library of annotated queries used to ground the extraction oracle:
//! free text in, the expected [`GeoQuery`] out. The bank is purely declarative; the only
//! logic here is filtering and rendering to priming text.
//!
//! Every example is built through the domain constructors when the bank is loaded, so a
//! bundled example can never show the oracle an inconsistent query.

mod error;
mod seeds;

pub use crate::error::{FewShotError, FewShotErrorExt};
use crate::seeds::{SEEDS, Seed};
use geoq_domain::query::{BufferConfig, ConfidenceScore, GeoQuery, ReferenceLocation, SpatialRelation};
use geoq_domain::relation::RelationCategory;
use serde::Serialize;
use std::fmt::Write as _;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use tracing::debug;

/// Language (or register) of an example's input text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    En,
    De,
    Fr,
    It,
    /// Romansh
    Rm,
}

/// One annotated input/output pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Example {
    pub input: String,
    pub output: GeoQuery,
    pub language: Language,
    /// What the example demonstrates.
    pub description: String,
}

/// The ordered example library.
#[derive(Debug, Clone)]
pub struct ExampleBank {
    examples: Vec<Example>,
}

impl ExampleBank {
    /// Materializes the bundled examples.
    ///
    /// # Errors
    /// Returns [`FewShotError::InvalidExample`] if a bundled example violates a query
    /// invariant.
    pub fn load() -> Result<Self, FewShotError> {
        let examples = SEEDS.iter().map(build).collect::<Result<Vec<_>, _>>()?;
        debug!(examples = examples.len(), "Example bank loaded");
        Ok(Self { examples })
    }

    #[must_use]
    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    #[must_use]
    pub fn by_language(&self, language: Language) -> Vec<&Example> {
        self.examples.iter().filter(|e| e.language == language).collect()
    }

    #[must_use]
    pub fn by_category(&self, category: RelationCategory) -> Vec<&Example> {
        self.examples
            .iter()
            .filter(|e| e.output.spatial_relation().category == category)
            .collect()
    }

    /// Renders all examples as priming text.
    ///
    /// # Errors
    /// Returns [`FewShotError::Serialize`] if an output cannot be serialized.
    pub fn render(&self) -> Result<String, FewShotError> {
        render(&self.examples.iter().collect::<Vec<_>>())
    }
}

/// Renders examples as numbered blocks: header line, input, pretty JSON output (absent
/// optional fields omitted), blank line.
///
/// # Errors
/// Returns [`FewShotError::Serialize`] if an output cannot be serialized.
pub fn render(examples: &[&Example]) -> Result<String, FewShotError> {
    let mut text = String::new();
    for (i, example) in examples.iter().enumerate() {
        let output = serde_json::to_string_pretty(&example.output)
            .context(format!("example {}", i + 1))?;
        let _ = write!(
            text,
            "Example {} ({}): {}\nInput: {}\nOutput:\n{output}\n\n",
            i + 1,
            example.language,
            example.description,
            example.input,
        );
    }
    Ok(text)
}

fn build(seed: &Seed) -> Result<Example, FewShotError> {
    let mut relation = SpatialRelation::new(seed.relation, seed.category);
    relation.explicit_distance = seed.explicit_distance;

    let location = ReferenceLocation::new(seed.location)
        .with_type(seed.location_type, Some(seed.type_confidence))
        .context(seed.input)?;

    let buffer = seed
        .buffer
        .as_ref()
        .map(|b| BufferConfig::new(b.distance_m, b.origin, b.ring_only, b.inferred))
        .transpose()
        .context(seed.input)?;

    let [overall, location_confidence, relation_confidence] = seed.confidence;
    let mut confidence = ConfidenceScore::new(overall, location_confidence, relation_confidence)
        .context(seed.input)?;
    if let Some(reasoning) = seed.reasoning {
        confidence = confidence.with_reasoning(reasoning);
    }

    let output = GeoQuery::new(relation, location, buffer, confidence, seed.input).context(seed.input)?;

    Ok(Example {
        input: seed.input.to_owned(),
        output,
        language: seed.language,
        description: seed.description.to_owned(),
    })
}
