#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the Forno crates.
//!
//! The only macro today is [`macro@forno_error`], which turns a plain enum into a
//! `thiserror` error with context support. Examples are `ignore`d here because a
//! proc-macro crate cannot expand its own macros; see `tests/ui` for compiled usage.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for declaring crate-level error enums.
///
/// # Features
///
/// * **Derives**: injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context**: generates a companion `<Name>Ext` trait adding `.context(..)` to any
///   `Result` whose error is, or converts into, the annotated enum.
/// * **Conversions**: implements `From<T>` for every variant holding a `source: T`
///   (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal fallback**: implements `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant exists.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Every variant uses named fields; tuple and unit variants are rejected.
/// 3. A `context` field must have the type `Option<Cow<'static, str>>`.
/// 4. Variants with a source must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[forno_derive::forno_error]
/// pub enum ShellError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal shell error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, ShellError> {
///     std::fs::read_to_string(path).context("Reading order file")
/// }
/// ```
#[proc_macro_attribute]
pub fn forno_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
