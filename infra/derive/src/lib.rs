#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate of the workspace.
//! Currently this is the [`macro@geoq_error`] attribute, which keeps error enums uniform:
//! named fields, optional context, `?`-friendly conversions.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! geoq-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source`
///   field (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` when an
///   `Internal` variant is present.
/// * **Kind Introspection**: Generates `fn kind(&self) -> &'static str` returning the
///   variant name, used for structured logging and CLI exit reporting.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must also carry a context field.
/// 4. Tuple or unit variants are rejected.
///
/// # Example
///
/// ```rust,ignore
/// use geoq_derive::geoq_error;
/// use std::borrow::Cow;
///
/// #[geoq_error]
/// pub enum RegistryError {
///     #[error("Unknown spatial relation{}: '{name}'", format_context(.context))]
///     UnknownRelation { name: String, context: Option<Cow<'static, str>> },
///
///     #[error("Internal registry error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// let err: RegistryError = "boom".into();
/// assert_eq!(err.kind(), "Internal");
/// ```
#[proc_macro_attribute]
pub fn geoq_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
