use crate::error::GeoqError;
use geoq_fewshot::ExampleBank;
use geoq_relations::SpatialRelationRegistry;
use std::fmt;

const INSTRUCTIONS: &str = "\
Extract the geographic filter from the user's query as a structured spatial query.
Ignore subjects and activities (restaurants, hiking, ...); keep only the reference location
and how the result relates to it.
Use only the spatial relations listed below. Set explicit_distance (meters) only when the
query states a distance or a travel time; otherwise infer buffer_config.distance_m from the
scale of the reference feature and keep inferred=true.
Use the official name of the reference location when it is known.
Report honest confidence scores between 0 and 1.";

/// Text handed to the extraction oracle together with the user's query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimingContext {
    relations: String,
    examples: String,
}

impl PrimingContext {
    /// # Errors
    /// Returns [`GeoqError::Examples`] if the examples cannot be rendered.
    pub fn new(registry: &SpatialRelationRegistry, examples: &ExampleBank) -> Result<Self, GeoqError> {
        Ok(Self { relations: registry.describe_for_prompt(), examples: examples.render()? })
    }

    /// The relation catalogue part.
    #[must_use]
    pub fn relations(&self) -> &str {
        &self.relations
    }

    /// The rendered examples part.
    #[must_use]
    pub fn examples(&self) -> &str {
        &self.examples
    }
}

impl fmt::Display for PrimingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{INSTRUCTIONS}")?;
        writeln!(f, "\nSPATIAL RELATIONS:{}", self.relations)?;
        write!(f, "\nEXAMPLES:\n\n{}", self.examples)
    }
}
