//! Procedural macros for `object_mapper`.
//!
//! Two macros opt a type into mapping:
//!
//! - `#[derive(Mappable)]` lists a struct's declared fields and generates the
//!   privileged writer the mapper uses to populate them;
//! - `#[reflect]` on an inherent `impl` block records its public methods so
//!   the mapper can discover and call accessors at run time.

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemImpl, parse_macro_input};

mod attrs;
mod crate_path;
mod mappable;
mod reflect;

/// Derive macro for `object_mapper::Mappable`.
///
/// Supported attributes:
///
/// - `#[mapper(crate = "path")]` on the struct to reach `object_mapper`
///   through a renamed dependency;
/// - `#[mapper(skip)]` on a field to keep it out of the declared field set.
///
/// Every remaining field type must be `Clone + 'static`.
#[proc_macro_derive(Mappable, attributes(mapper))]
pub fn derive_mappable(input: TokenStream) -> TokenStream {
    let derive_input = parse_macro_input!(input as DeriveInput);
    mappable::expand(&derive_input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Implements `object_mapper::Reflect` from an inherent `impl` block.
///
/// Apply it to one inherent `impl` block per type; a second block would
/// produce a conflicting `Reflect` impl.
///
/// Every `pub` method is recorded in declaration order. Methods taking
/// `&self` and nothing else become callable accessors when their return type
/// is an owned `Clone + 'static` value, a `&'static` reference, or a borrow
/// of something implementing `ToOwned`.
///
/// Supported attributes:
///
/// - `#[reflect(crate = "path")]` on the block to reach `object_mapper`
///   through a renamed dependency;
/// - `#[reflect(skip)]` on a method to hide it, for example when it returns
///   borrowed data that cannot be owned.
#[proc_macro_attribute]
pub fn reflect(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut crate_path = None;
    let parser = syn::meta::parser(|meta| attrs::parse_crate_arg(&meta, &mut crate_path));
    parse_macro_input!(args with parser);
    let item = parse_macro_input!(input as ItemImpl);
    reflect::expand(item, crate_path.as_ref())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
