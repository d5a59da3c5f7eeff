//! String-valued attribute arguments such as `key = "world.missing"`.

use syn::meta::ParseNestedMeta;
use syn::{Expr, ExprLit, Lit, LitStr};

/// Reads `name = "..."`, rejecting other literal kinds and blank strings.
pub(crate) fn lit_str(meta: &ParseNestedMeta, name: &str) -> syn::Result<LitStr> {
    let expr: Expr = meta.value()?.parse()?;
    let Expr::Lit(ExprLit {
        lit: Lit::Str(text),
        ..
    }) = expr
    else {
        return Err(syn::Error::new_spanned(expr, format!("`{name}` takes a string literal")));
    };
    if text.value().trim().is_empty() {
        return Err(syn::Error::new(text.span(), format!("`{name}` cannot be blank")));
    }
    Ok(text)
}

/// Reads `name = "some::path"` as a path.
pub(crate) fn lit_path(meta: &ParseNestedMeta, name: &str) -> syn::Result<syn::Path> {
    lit_str(meta, name)?.parse()
}
