use geoq_domain::ValidationError;
use geoq_relations::RegistryError;
use std::borrow::Cow;

/// Fatal outcomes of [`crate::validate_query`]. Advisories are never errors.
#[geoq_derive::geoq_error]
#[derive(Clone, PartialEq)]
pub enum PipelineError {
    /// The relation is not in the registry, typically a hallucinated keyword.
    #[error("{source}{}. This may be an extraction hallucination", format_context(.context))]
    UnknownRelation { source: RegistryError, context: Option<Cow<'static, str>> },

    #[error("Structural validation failed{}: {source}", format_context(.context))]
    Structural { source: ValidationError, context: Option<Cow<'static, str>> },

    /// Strict mode only.
    #[error("{message}{}", format_context(.context))]
    LowConfidence {
        confidence: f64,
        threshold: f64,
        reasoning: Option<String>,
        message: String,
        context: Option<Cow<'static, str>>,
    },

    #[error("Invalid pipeline configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
