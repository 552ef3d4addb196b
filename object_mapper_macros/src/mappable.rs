//! Expansion of `#[derive(Mappable)]`.
//!
//! The generated impl lists the declared fields in declaration order and
//! writes a type-erased value into a field by downcasting it to the field's
//! type. Writes go straight to the field, so no setter is needed.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Field, Fields, parse_quote};

use crate::attrs::{parse_container_attrs, parse_field_attrs};
use crate::crate_path;

/// Collects the named fields of `input`, rejecting anything but a struct
/// with named fields.
fn named_fields(input: &DeriveInput) -> syn::Result<Vec<&Field>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => Ok(named.named.iter().collect()),
            _ => Err(syn::Error::new_spanned(
                data.struct_token,
                "Mappable requires named fields",
            )),
        },
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            "Mappable can only be derived for structs",
        )),
    }
}

/// Expands the derive for `input`.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let container = parse_container_attrs(&input.attrs)?;
    let krate = crate_path::resolve(container.crate_path.as_ref());

    let mut mapped = Vec::new();
    for field in named_fields(input)? {
        if !parse_field_attrs(&field.attrs)?.skip {
            mapped.push(field);
        }
    }

    let mut generics = input.generics.clone();
    let bounds = generics.make_where_clause();
    for field in &mapped {
        let ty = &field.ty;
        bounds
            .predicates
            .push(parse_quote!(#ty: ::core::clone::Clone + 'static));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let ident = &input.ident;
    let mut names = Vec::with_capacity(mapped.len());
    let mut arms = Vec::with_capacity(mapped.len());
    for field in &mapped {
        let Some(member) = field.ident.as_ref() else {
            continue;
        };
        let name = member.unraw().to_string();
        let ty = &field.ty;
        arms.push(quote! {
            #name => match #krate::Value::downcast::<#ty>(value) {
                ::core::result::Result::Ok(typed) => {
                    self.#member = typed;
                    ::core::result::Result::Ok(())
                }
                ::core::result::Result::Err(rejected) => ::core::result::Result::Err(rejected),
            }
        });
        names.push(name);
    }

    Ok(quote! {
        impl #impl_generics #krate::Mappable for #ident #ty_generics #where_clause {
            fn declared_fields() -> &'static [&'static str] {
                &[#(#names),*]
            }

            fn write_field(
                &mut self,
                field: &str,
                value: #krate::Value,
            ) -> ::core::result::Result<(), #krate::Value> {
                match field {
                    #(#arms,)*
                    _ => ::core::result::Result::Err(value),
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    //! Unit tests for the derive expansion.

    use super::*;
    use anyhow::{Result, ensure};
    use rstest::rstest;

    fn render(input: &DeriveInput) -> Result<String> {
        Ok(expand(input)?.to_string())
    }

    #[rstest]
    fn lists_declared_fields_in_order() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Account {
                id: u64,
                r#type: String,
                email: String,
            }
        };
        let tokens = render(&input)?;
        ensure!(
            tokens.contains(r#"& ["id" , "type" , "email"]"#),
            "unexpected field list: {tokens}"
        );
        Ok(())
    }

    #[rstest]
    fn skipped_fields_are_not_declared() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Account {
                id: u64,
                #[mapper(skip)]
                cache: std::cell::Cell<u64>,
            }
        };
        let tokens = render(&input)?;
        ensure!(tokens.contains(r#"& ["id"]"#), "unexpected field list: {tokens}");
        ensure!(!tokens.contains("Cell"), "skipped field leaked: {tokens}");
        Ok(())
    }

    #[rstest]
    fn field_types_gain_clone_bounds() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Wrapper<T> {
                inner: T,
            }
        };
        let tokens = render(&input)?;
        ensure!(
            tokens.contains("where T : :: core :: clone :: Clone + 'static"),
            "missing bound: {tokens}"
        );
        Ok(())
    }

    #[rstest]
    fn honours_crate_override() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            #[mapper(crate = "mapper")]
            struct Account {
                id: u64,
            }
        };
        let tokens = render(&input)?;
        ensure!(
            tokens.contains("impl mapper :: Mappable for Account"),
            "crate override ignored: {tokens}"
        );
        Ok(())
    }

    #[rstest]
    #[case::tuple(parse_quote! { struct Pair(u8, u8); })]
    #[case::unit(parse_quote! { struct Marker; })]
    #[case::enumeration(parse_quote! { enum Choice { A, B } })]
    fn rejects_unsupported_shapes(#[case] input: DeriveInput) {
        assert!(expand(&input).is_err());
    }
}
