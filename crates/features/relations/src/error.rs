use std::borrow::Cow;

/// Error types specific to the relation registry.
#[geoq_derive::geoq_error]
#[derive(Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The name is not registered; `available` is the full sorted catalogue.
    #[error(
        "Unknown spatial relation: '{name}'{}. Available relations: {}",
        format_context(.context),
        .available.join(", ")
    )]
    UnknownRelation { name: String, available: Vec<String>, context: Option<Cow<'static, str>> },
}
