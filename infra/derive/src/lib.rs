#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! cp3-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for crate-level error enums.
///
/// Turns a plain enum into a `thiserror` error wired for the workspace conventions.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>` and for
///   `Result<T, SourceError>` of every variant that wraps a source.
/// * `From<SourceError>` for variants with a `source` (or `#[source]`/`#[from]`) field.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant is present.
/// * A private `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant uses named fields; tuple and unit variants are rejected.
/// 3. A `context` field must be typed `Option<Cow<'static, str>>`.
/// 4. Variants with a source must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[cp3_derive::cp3_error]
/// pub enum StoreError {
///     #[error("Transport error{}: {source}", format_context(.context))]
///     Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal store error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn send() -> Result<(), StoreError> {
///     request().context("Posting row")?;
///     Err("unreachable branch".into())
/// }
/// ```
#[proc_macro_attribute]
pub fn cp3_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
