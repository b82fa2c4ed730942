use serde::Serialize;
use std::fmt;

/// `|distance_m|` above this is flagged as a possibly expensive search area.
pub const LARGE_BUFFER_M: f64 = 100_000.0;
/// `distance_m` below this is flagged as an erosion that may consume the whole geometry.
pub const DEEP_EROSION_M: f64 = -5_000.0;

/// Non-fatal finding returned next to a successful result.
///
/// Advisories never change the query; they are reported to the caller and mirrored to
/// the `tracing` warning channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    LargeBuffer { distance_m: f64 },
    DeepErosion { distance_m: f64 },
    LowConfidence { confidence: f64, threshold: f64, message: String },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LargeBuffer { distance_m } => write!(
                f,
                "Large buffer distance: {distance_m}m. This may be intentional but could cause performance issues."
            ),
            Self::DeepErosion { distance_m } => write!(
                f,
                "Large negative buffer: {distance_m}m. This may completely eliminate the reference geometry."
            ),
            Self::LowConfidence { message, .. } => f.write_str(message),
        }
    }
}
