//! Expansion of `#[derive(FailureReason)]`.

use proc_macro2::TokenStream;
use syn::DeriveInput;

mod crate_path;
mod generate;
mod literals;
mod parse;

use parse::parse_input;

/// Parses the annotated item and renders the trait implementation.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let reason = parse_input(input)?;
    Ok(generate::failure_reason_impl(input, &reason))
}
