//! # Spatial Relation Registry
//!
//! The catalogue of named spatial relations the rest of the system speaks. It serves two
//! purposes:
//!
//! 1.  **Vocabulary and defaults**: the pipeline checks extracted relation names against
//!     it and takes default distances, origins and ring flags from it.
//! 2.  **Prompt material**: [`SpatialRelationRegistry::describe_for_prompt`] renders the
//!     catalogue for the extraction oracle.
//!
//! The registry is built once at startup (built-ins plus optional custom entries) and is
//! read-only afterwards; share it behind an `Arc` for concurrent use.
//!
//! ## Example
//! ```rust
//! use geoq_relations::SpatialRelationRegistry;
//! use geoq_domain::relation::RelationCategory;
//!
//! let registry = SpatialRelationRegistry::default();
//! assert!(registry.has("near"));
//! assert_eq!(registry.list(Some(RelationCategory::Containment)), ["in"]);
//! ```

mod builtins;
mod error;

pub use crate::error::{RegistryError, RegistryErrorExt};
use fxhash::FxHashMap;
use geoq_domain::relation::{RelationCategory, RelationConfig};
use std::fmt::Write as _;
use strum::IntoEnumIterator;
use tracing::{debug, info};

const PROMPT_NOTES: [&str; 3] = [
    "  • Negative distances indicate erosion/shrinking (e.g., in_the_heart_of)",
    "  • Ring buffers exclude the reference feature itself (e.g., shores of lake)",
    "  • Buffer from 'center' vs 'boundary' determines buffer origin",
];

/// Name-keyed catalogue of [`RelationConfig`] entries.
#[derive(Debug, Clone)]
pub struct SpatialRelationRegistry {
    relations: FxHashMap<String, RelationConfig>,
}

impl Default for SpatialRelationRegistry {
    /// Registry preloaded with the thirteen built-in relations.
    fn default() -> Self {
        let mut registry = Self::empty();
        for config in builtins::relations() {
            registry.register(config);
        }
        info!(relations = registry.len(), "Spatial relation registry initialized");
        registry
    }
}

impl SpatialRelationRegistry {
    /// Registry without any relation; mostly useful for tests and fully custom vocabularies.
    #[must_use]
    pub fn empty() -> Self {
        Self { relations: FxHashMap::default() }
    }

    /// Inserts or replaces an entry by name (last write wins).
    ///
    /// # Returns
    /// The entry previously registered under the same name, if any.
    pub fn register(&mut self, config: RelationConfig) -> Option<RelationConfig> {
        debug!(relation = %config.name, category = %config.category, "Registering spatial relation");
        self.relations.insert(config.name.clone(), config)
    }

    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.relations.contains_key(name)
    }

    /// Looks up a relation by name.
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownRelation`] carrying the name and the sorted catalogue.
    pub fn get(&self, name: &str) -> Result<&RelationConfig, RegistryError> {
        self.relations.get(name).ok_or_else(|| RegistryError::UnknownRelation {
            name: name.to_owned(),
            available: self.list(None).into_iter().map(str::to_owned).collect(),
            context: None,
        })
    }

    /// Relation names in lexicographic order, optionally restricted to one category.
    #[must_use]
    pub fn list(&self, category: Option<RelationCategory>) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .relations
            .values()
            .filter(|r| category.is_none_or(|c| r.category == c))
            .map(|r| r.name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &RelationConfig> {
        self.relations.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.relations.len()
    }

    /// Renders the catalogue for the extraction oracle.
    ///
    /// Categories appear in declaration order (containment, buffer, directional), empty
    /// ones are skipped, relations are sorted by name, and three fixed notes close the text.
    #[must_use]
    pub fn describe_for_prompt(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        for category in RelationCategory::iter() {
            let mut relations: Vec<&RelationConfig> =
                self.relations.values().filter(|r| r.category == category).collect();
            if relations.is_empty() {
                continue;
            }
            relations.sort_unstable_by(|a, b| a.name.cmp(&b.name));

            lines.push(format!("\n{} RELATIONS:", category.as_ref().to_uppercase()));
            for relation in relations {
                lines.push(format!("  • {}", headline(relation)));
                lines.push(format!("    {}", relation.description));
                if let Some(types) = relation.applies_to.as_ref().filter(|t| !t.is_empty()) {
                    lines.push(format!("    (commonly used with: {})", types.join(", ")));
                }
            }
        }

        lines.push("\nNOTES:".to_owned());
        lines.extend(PROMPT_NOTES.iter().map(|note| (*note).to_owned()));
        lines.join("\n")
    }
}

/// `name (default: 1000m) [ring buffer, from boundary]`
fn headline(relation: &RelationConfig) -> String {
    let mut line = relation.name.clone();

    if let Some(distance) = relation.default_distance_m {
        let qualifier = if distance < 0.0 { " erosion" } else { "" };
        let _ = write!(line, " (default: {}m{qualifier})", distance.abs());
    }

    let mut flags = Vec::new();
    if relation.ring_only {
        flags.push("ring buffer".to_owned());
    }
    if let Some(origin) = relation.buffer_from {
        flags.push(format!("from {origin}"));
    }
    if !flags.is_empty() {
        let _ = write!(line, " [{}]", flags.join(", "));
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoq_domain::relation::BufferOrigin;

    #[test]
    fn headline_marks_erosion_and_flags() {
        let heart = RelationConfig::new("in_the_heart_of", RelationCategory::Buffer, "core")
            .default_distance(-500.0)
            .buffer_from(BufferOrigin::Boundary);
        assert_eq!(headline(&heart), "in_the_heart_of (default: 500m erosion) [from boundary]");

        let shores = RelationConfig::new("on_shores_of", RelationCategory::Buffer, "shores")
            .default_distance(1_000.0)
            .buffer_from(BufferOrigin::Boundary)
            .ring_only();
        assert_eq!(headline(&shores), "on_shores_of (default: 1000m) [ring buffer, from boundary]");

        let inside = RelationConfig::new("in", RelationCategory::Containment, "inside");
        assert_eq!(headline(&inside), "in");
    }

    #[test]
    fn register_overwrites_by_name() {
        let mut registry = SpatialRelationRegistry::default();
        let before = registry.len();

        let previous = registry.register(
            RelationConfig::new("near", RelationCategory::Buffer, "closer").default_distance(2_000.0),
        );

        assert_eq!(previous.and_then(|p| p.default_distance_m), Some(5_000.0));
        assert_eq!(registry.len(), before);
        let near = registry.get("near").expect("registered");
        assert_eq!(near.default_distance_m, Some(2_000.0));
    }

    #[test]
    fn empty_registry_describes_only_notes() {
        let text = SpatialRelationRegistry::empty().describe_for_prompt();
        assert!(text.starts_with("\nNOTES:"));
        assert!(!text.contains("RELATIONS:"));
    }
}
