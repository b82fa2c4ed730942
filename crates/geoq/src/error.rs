use geoq_fewshot::FewShotError;
use geoq_kernel::ports::PortError;
use geoq_pipeline::PipelineError;
use std::borrow::Cow;

/// Errors surfaced by the facade.
#[geoq_derive::geoq_error]
pub enum GeoqError {
    /// Oracle, gazetteer or geometry engine failure; the context names which one.
    #[error("External collaborator failed{}: {source}", format_context(.context))]
    Collaborator { source: PortError, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Pipeline { source: PipelineError, context: Option<Cow<'static, str>> },

    #[error("Example bank unavailable{}: {source}", format_context(.context))]
    Examples { source: FewShotError, context: Option<Cow<'static, str>> },

    /// The gazetteer returned no feature for the reference location.
    #[error("Location '{name}' not found{}", format_context(.context))]
    LocationNotFound { name: String, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
