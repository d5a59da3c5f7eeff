//! Token generation for the `FailureReason` implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use super::crate_path;
use super::parse::{ReasonInput, ReasonShape, ReasonVariant};

/// Renders `impl FailureReason for <item>`.
pub(crate) fn failure_reason_impl(input: &DeriveInput, reason: &ReasonInput) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let krate = crate_path::resolve(reason.crate_path.as_ref());
    let message_key = message_key_body(reason);
    let default_template = default_template_fn(reason, &krate);

    quote! {
        #[automatically_derived]
        impl #impl_generics #krate::FailureReason for #ident #ty_generics #where_clause {
            fn message_key(&self) -> &str {
                #message_key
            }

            #default_template
        }
    }
}

fn message_key_body(reason: &ReasonInput) -> TokenStream {
    per_variant(reason, |variant| {
        let key = &variant.key;
        quote! { #key }
    })
}

/// Omitted entirely when no variant overrides the template, so the trait's
/// default applies.
fn default_template_fn(reason: &ReasonInput, krate: &syn::Path) -> TokenStream {
    if reason.variants.iter().all(|variant| variant.template.is_none()) {
        return TokenStream::new();
    }
    let body = per_variant(reason, |variant| match &variant.template {
        Some(template) => quote! { ::std::borrow::Cow::Borrowed(#template) },
        None => quote! { ::std::borrow::Cow::Borrowed(#krate::DEFAULT_FAILURE_TEMPLATE) },
    });
    quote! {
        fn default_template(&self) -> ::std::borrow::Cow<'static, str> {
            #body
        }
    }
}

fn per_variant(
    reason: &ReasonInput,
    value: impl Fn(&ReasonVariant) -> TokenStream,
) -> TokenStream {
    match reason.shape {
        ReasonShape::UnitStruct => reason.variants.iter().map(&value).collect(),
        ReasonShape::Enum => {
            let arms = reason.variants.iter().map(|variant| {
                let ident = &variant.ident;
                let body = value(variant);
                quote! { Self::#ident => #body, }
            });
            quote! {
                match *self {
                    #( #arms )*
                }
            }
        }
    }
}
