//! Spatial relation vocabulary: categories, buffer origins and registry entries.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The kind of spatial operation a relation performs.
///
/// Declaration order is the canonical presentation order (containment, buffer, directional).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RelationCategory {
    /// Inside the reference boundary, no buffer involved.
    Containment,
    /// Proximity (positive distance) or erosion (negative distance).
    Buffer,
    /// Angular sector around the reference centroid.
    Directional,
}

impl RelationCategory {
    /// Whether queries of this category carry a buffer configuration.
    #[must_use]
    pub const fn requires_buffer(self) -> bool {
        matches!(self, Self::Buffer | Self::Directional)
    }
}

/// Where a buffer is measured from.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BufferOrigin {
    /// Centroid point of the reference geometry.
    #[default]
    Center,
    /// Polygon or line boundary of the reference geometry.
    Boundary,
}

/// A registry entry describing one named spatial relation and its defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationConfig {
    pub name: String,
    pub category: RelationCategory,
    pub description: String,
    /// Meters; negative values erode the reference geometry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_distance_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_from: Option<BufferOrigin>,
    #[serde(default)]
    pub ring_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector_angle_degrees: Option<f64>,
    /// 0 = North, increasing clockwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction_angle_degrees: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applies_to: Option<Vec<String>>,
}

impl RelationConfig {
    /// Starts an entry with only the mandatory fields set.
    pub fn new(
        name: impl Into<String>,
        category: RelationCategory,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            description: description.into(),
            default_distance_m: None,
            buffer_from: None,
            ring_only: false,
            sector_angle_degrees: None,
            direction_angle_degrees: None,
            applies_to: None,
        }
    }

    #[must_use]
    pub const fn default_distance(mut self, meters: f64) -> Self {
        self.default_distance_m = Some(meters);
        self
    }

    #[must_use]
    pub const fn buffer_from(mut self, origin: BufferOrigin) -> Self {
        self.buffer_from = Some(origin);
        self
    }

    /// Marks the relation as producing a ring that excludes the reference feature.
    #[must_use]
    pub const fn ring_only(mut self) -> Self {
        self.ring_only = true;
        self
    }

    /// Sets the sector width and the bearing of its axis.
    #[must_use]
    pub const fn sector(mut self, width_degrees: f64, direction_degrees: f64) -> Self {
        self.sector_angle_degrees = Some(width_degrees);
        self.direction_angle_degrees = Some(direction_degrees);
        self
    }

    #[must_use]
    pub fn applies_to<I, S>(mut self, feature_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.applies_to = Some(feature_types.into_iter().map(Into::into).collect());
        self
    }

    /// Whether the default distance shrinks the reference geometry.
    #[must_use]
    pub fn is_erosion(&self) -> bool {
        self.default_distance_m.is_some_and(|d| d < 0.0)
    }
}
