use crate::relation::RelationCategory;
use std::borrow::Cow;

/// Structural validation failures raised by the smart constructors of this crate.
///
/// No value violating one of these rules is ever observable.
#[geoq_derive::geoq_error]
#[derive(Clone, PartialEq)]
pub enum ValidationError {
    #[error(
        "ring_only=true requires buffer_from='boundary' (cannot create ring from center point){}",
        format_context(.context)
    )]
    RingRequiresBoundary { context: Option<Cow<'static, str>> },

    #[error("{category} relation '{relation}' requires buffer_config{}", format_context(.context))]
    BufferConfigRequired {
        relation: String,
        category: RelationCategory,
        context: Option<Cow<'static, str>>,
    },

    #[error("containment relation '{relation}' should not have buffer_config{}", format_context(.context))]
    BufferConfigForbidden { relation: String, context: Option<Cow<'static, str>> },

    #[error("{field} must be within [0, 1], got {value}{}", format_context(.context))]
    OutOfRange { field: Cow<'static, str>, value: f64, context: Option<Cow<'static, str>> },

    #[error("distance_m must be a finite number, got {value}{}", format_context(.context))]
    NonFiniteDistance { value: f64, context: Option<Cow<'static, str>> },
}
