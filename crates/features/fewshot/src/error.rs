use geoq_domain::ValidationError;
use std::borrow::Cow;

/// Error types specific to the example bank.
#[geoq_derive::geoq_error]
pub enum FewShotError {
    /// A seed does not form a valid query; this is a defect in the bundled data.
    #[error("Invalid example{}: {source}", format_context(.context))]
    InvalidExample { source: ValidationError, context: Option<Cow<'static, str>> },

    #[error("Example serialization failed{}: {source}", format_context(.context))]
    Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },
}
