//! Expansion of the `#[reflect]` attribute.
//!
//! The attribute re-emits the `impl` block unchanged (minus its own helper
//! attributes) and adds a `Reflect` impl describing each public method.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{FnArg, ImplItem, ItemImpl, ReturnType, Signature, Type, Visibility};

use crate::attrs::parse_method_skip;
use crate::crate_path;

/// How a method takes `self`, mirroring `object_mapper::Receiver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReceiverKind {
    None,
    Ref,
    RefMut,
    Value,
}

impl ReceiverKind {
    fn of(sig: &Signature) -> Self {
        let Some(receiver) = sig.receiver() else {
            return Self::None;
        };
        match receiver.ty.as_ref() {
            Type::Reference(reference) if reference.mutability.is_some() => Self::RefMut,
            Type::Reference(_) => Self::Ref,
            _ => Self::Value,
        }
    }

    fn tokens(self, krate: &TokenStream) -> TokenStream {
        match self {
            Self::None => quote! { #krate::Receiver::None },
            Self::Ref => quote! { #krate::Receiver::Ref },
            Self::RefMut => quote! { #krate::Receiver::RefMut },
            Self::Value => quote! { #krate::Receiver::Value },
        }
    }
}

fn required_params(sig: &Signature) -> usize {
    sig.inputs
        .iter()
        .filter(|input| matches!(input, FnArg::Typed(_)))
        .count()
}

/// Return type of a method the mapper can call, if it has one worth calling.
fn callable_output(sig: &Signature) -> Option<&Type> {
    let ReturnType::Type(_, ty) = &sig.output else {
        return None;
    };
    match ty.as_ref() {
        Type::Tuple(tuple) if tuple.elems.is_empty() => None,
        Type::ImplTrait(_) | Type::Never(_) => None,
        other => Some(other),
    }
}

/// Returns `true` for a top-level reference that does not live for `'static`.
///
/// Such values cannot outlive the call and are owned before wrapping;
/// `&'static` returns are wrapped as they are.
fn borrows_from_self(ty: &Type) -> bool {
    let Type::Reference(reference) = ty else {
        return false;
    };
    reference
        .lifetime
        .as_ref()
        .is_none_or(|lifetime| lifetime.ident != "static")
}

/// Returns `true` when the method can be called as `Self::name(&object)`.
fn is_invocable(sig: &Signature) -> bool {
    ReceiverKind::of(sig) == ReceiverKind::Ref
        && required_params(sig) == 0
        && sig.generics.type_params().next().is_none()
        && sig.generics.const_params().next().is_none()
        && sig.asyncness.is_none()
        && sig.unsafety.is_none()
        && sig.variadic.is_none()
        && callable_output(sig).is_some()
}

/// Builds the `Method` descriptor for one public method.
fn describe(sig: &Signature, krate: &TokenStream) -> TokenStream {
    let ident = &sig.ident;
    let name = ident.unraw().to_string();
    let receiver = ReceiverKind::of(sig).tokens(krate);
    let params = required_params(sig);
    let descriptor = quote! {
        #krate::Method::<Self>::new(#name, #receiver, #params)
    };
    if !is_invocable(sig) {
        return descriptor;
    }
    let call = if callable_output(sig).is_some_and(borrows_from_self) {
        quote! { ::std::borrow::ToOwned::to_owned(Self::#ident(this)) }
    } else {
        quote! { Self::#ident(this) }
    };
    quote! {
        #descriptor.with_invoke(|this: &Self| #krate::Value::new(#call))
    }
}

/// Expands `#[reflect]` on `item`.
pub(crate) fn expand(mut item: ItemImpl, crate_path: Option<&syn::Path>) -> syn::Result<TokenStream> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[reflect] requires an inherent impl block",
        ));
    }
    let krate = crate_path::resolve(crate_path);

    let mut descriptors = Vec::new();
    for impl_item in &mut item.items {
        let ImplItem::Fn(method) = impl_item else {
            continue;
        };
        let skip = parse_method_skip(&method.attrs)?;
        method.attrs.retain(|attr| !attr.path().is_ident("reflect"));
        if skip || !matches!(method.vis, Visibility::Public(_)) {
            continue;
        }
        descriptors.push(describe(&method.sig, &krate));
    }

    let self_ty = &item.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();
    Ok(quote! {
        #item

        impl #impl_generics #krate::Reflect for #self_ty #where_clause {
            fn methods() -> ::std::vec::Vec<#krate::Method<Self>> {
                ::std::vec![#(#descriptors),*]
            }
        }
    })
}
