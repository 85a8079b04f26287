#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! preface-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns an enum into a workspace error type.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]`, unless the enum already derives them.
/// * `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>`, and for
///   `Result<T, SourceError>` when a variant wraps a source error.
/// * `From<SourceError>` for every variant holding a `source` field (or a field marked
///   `#[source]` / `#[from]`) next to its `context`.
/// * A private `format_context` helper rendering `Some(ctx)` as `" (ctx)"`, for use inside
///   `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. `context` fields must be `Option<Cow<'static, str>>`.
/// 3. A variant with a source holds exactly the source and `context`.
///
/// # Example
///
/// ```rust,ignore
/// use preface_derive::preface_error;
/// use std::borrow::Cow;
///
/// #[preface_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
/// }
///
/// fn build() -> Result<Config, ConfigError> {
///     Config::builder().build().context("Failed to build config")
/// }
/// ```
#[proc_macro_attribute]
pub fn preface_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(&input).unwrap_or_else(syn::Error::into_compile_error).into()
}
