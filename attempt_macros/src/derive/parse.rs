//! Attribute parsing for `#[derive(FailureReason)]`.
//!
//! Unlike most derive attributes in this workspace, unknown keys are
//! rejected: a misspelt `template` would otherwise silently fall back to the
//! generic text.

use std::collections::HashSet;

use heck::ToKebabCase;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Data, DeriveInput, Fields, Ident};

use super::literals::{lit_path, lit_str};

/// Settings gathered from `#[failure_reason(...)]` on the item itself.
#[derive(Default)]
struct ContainerAttrs {
    prefix: Option<String>,
    crate_path: Option<syn::Path>,
    message: MessageAttrs,
}

/// Key and template overrides, accepted on variants and unit structs.
#[derive(Default)]
struct MessageAttrs {
    key: Option<String>,
    template: Option<String>,
}

/// Whether the reason is an enum or a single unit struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReasonShape {
    Enum,
    UnitStruct,
}

/// One reason value with its resolved key and optional template.
#[derive(Debug)]
pub(crate) struct ReasonVariant {
    pub ident: Ident,
    pub key: String,
    pub template: Option<String>,
}

/// Everything generation needs to know about the annotated item.
pub(crate) struct ReasonInput {
    pub crate_path: Option<syn::Path>,
    pub shape: ReasonShape,
    pub variants: Vec<ReasonVariant>,
}

/// Iterate all `#[failure_reason(...)]` attributes once and apply a callback.
fn for_each_meta<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("failure_reason")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn unknown_key(meta: &ParseNestedMeta, expected: &str) -> syn::Error {
    let name = meta
        .path
        .get_ident()
        .map_or_else(|| String::from("<path>"), ToString::to_string);
    meta.error(format!(
        "unknown failure_reason key `{name}`; expected one of: {expected}"
    ))
}

fn set_once<T>(slot: &mut Option<T>, value: T, meta: &ParseNestedMeta, key: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("duplicate failure_reason key `{key}`")));
    }
    *slot = Some(value);
    Ok(())
}

/// Applies `key` or `template`; returns `false` for any other key.
fn apply_message_attr(meta: &ParseNestedMeta, out: &mut MessageAttrs) -> syn::Result<bool> {
    if meta.path.is_ident("key") {
        let value = lit_str(meta, "key")?.value();
        set_once(&mut out.key, value, meta, "key")?;
    } else if meta.path.is_ident("template") {
        let value = lit_str(meta, "template")?.value();
        set_once(&mut out.template, value, meta, "template")?;
    } else {
        return Ok(false);
    }
    Ok(true)
}

fn parse_container_attrs(attrs: &[Attribute], shape: ReasonShape) -> syn::Result<ContainerAttrs> {
    let expected = match shape {
        ReasonShape::Enum => "prefix, crate",
        ReasonShape::UnitStruct => "prefix, crate, key, template",
    };
    let mut out = ContainerAttrs::default();
    for_each_meta(attrs, |meta| {
        if meta.path.is_ident("prefix") {
            let value = lit_str(meta, "prefix")?.value();
            set_once(&mut out.prefix, value, meta, "prefix")
        } else if meta.path.is_ident("crate") {
            let value = lit_path(meta, "crate")?;
            set_once(&mut out.crate_path, value, meta, "crate")
        } else if shape == ReasonShape::UnitStruct && apply_message_attr(meta, &mut out.message)? {
            Ok(())
        } else {
            Err(unknown_key(meta, expected))
        }
    })?;
    Ok(out)
}

fn parse_variant_attrs(attrs: &[Attribute]) -> syn::Result<MessageAttrs> {
    let mut out = MessageAttrs::default();
    for_each_meta(attrs, |meta| {
        if apply_message_attr(meta, &mut out)? {
            Ok(())
        } else {
            Err(unknown_key(meta, "key, template"))
        }
    })?;
    Ok(out)
}

fn full_key(prefix: Option<&str>, ident: &Ident, explicit: Option<String>) -> String {
    let key = explicit.unwrap_or_else(|| ident.to_string().to_kebab_case());
    match prefix {
        Some(prefix) => format!("{prefix}.{key}"),
        None => key,
    }
}

/// Parses the derive input into its reasons.
///
/// # Errors
///
/// Returns an error for unions, structs with fields, enum variants with
/// fields, unknown or repeated attribute keys, and two variants that resolve
/// to the same key.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ReasonInput> {
    match &input.data {
        Data::Enum(data) => {
            let container = parse_container_attrs(&input.attrs, ReasonShape::Enum)?;
            let mut seen = HashSet::new();
            let mut variants = Vec::with_capacity(data.variants.len());
            for variant in &data.variants {
                if !matches!(variant.fields, Fields::Unit) {
                    return Err(syn::Error::new_spanned(
                        &variant.fields,
                        "FailureReason variants must not carry fields",
                    ));
                }
                let attrs = parse_variant_attrs(&variant.attrs)?;
                let key = full_key(container.prefix.as_deref(), &variant.ident, attrs.key);
                if !seen.insert(key.clone()) {
                    return Err(syn::Error::new_spanned(
                        &variant.ident,
                        format!("message key `{key}` is used by more than one variant"),
                    ));
                }
                variants.push(ReasonVariant {
                    ident: variant.ident.clone(),
                    key,
                    template: attrs.template,
                });
            }
            Ok(ReasonInput {
                crate_path: container.crate_path,
                shape: ReasonShape::Enum,
                variants,
            })
        }
        Data::Struct(data) if matches!(data.fields, Fields::Unit) => {
            let container = parse_container_attrs(&input.attrs, ReasonShape::UnitStruct)?;
            let key = full_key(
                container.prefix.as_deref(),
                &input.ident,
                container.message.key,
            );
            Ok(ReasonInput {
                crate_path: container.crate_path,
                shape: ReasonShape::UnitStruct,
                variants: vec![ReasonVariant {
                    ident: input.ident.clone(),
                    key,
                    template: container.message.template,
                }],
            })
        }
        Data::Struct(data) => Err(syn::Error::new_spanned(
            &data.fields,
            "FailureReason can only be derived for unit structs and fieldless enums",
        )),
        Data::Union(data) => Err(syn::Error::new_spanned(
            data.union_token,
            "FailureReason cannot be derived for unions",
        )),
    }
}
