//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `crate = "..."` option into a `TokenStream` that
//! replaces hardcoded `object_mapper::` paths in generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the crate path from the parsed option.
///
/// Defaults to `object_mapper` when no override is present.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { object_mapper }, |path| quote! { #path })
}
