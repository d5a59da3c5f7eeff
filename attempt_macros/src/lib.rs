//! Procedural macros for `attempt`.
//!
//! `#[derive(FailureReason)]` implements `attempt::FailureReason` for
//! fieldless enums and unit structs. Each variant maps to a catalogue key and
//! a fallback template:
//!
//! - the key defaults to the variant name in `kebab-case`, and a container
//!   `#[failure_reason(prefix = "world")]` prepends `world.` to every key;
//! - `#[failure_reason(key = "...")]` on a variant replaces the generated
//!   name (the prefix still applies);
//! - `#[failure_reason(template = "...")]` sets the text rendered without a
//!   catalogue, which otherwise is `attempt::DEFAULT_FAILURE_TEMPLATE`.
//!
//! Generated code refers to `::attempt`. Crates that rename the dependency
//! pass `#[failure_reason(crate = "my_alias")]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `attempt::FailureReason`.
#[proc_macro_derive(FailureReason, attributes(failure_reason))]
pub fn derive_failure_reason(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
