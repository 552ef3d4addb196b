//! Attribute parsing shared by the derive and the `reflect` attribute.

use syn::Attribute;
use syn::meta::ParseNestedMeta;

/// Struct-level `#[mapper(...)]` options.
#[derive(Default)]
pub(crate) struct ContainerAttrs {
    pub crate_path: Option<syn::Path>,
}

/// Field-level `#[mapper(...)]` options.
#[derive(Default)]
pub(crate) struct FieldAttrs {
    pub skip: bool,
}

/// Parses `crate = "path"` into `out`, rejecting any other key.
pub(crate) fn parse_crate_arg(
    meta: &ParseNestedMeta,
    out: &mut Option<syn::Path>,
) -> syn::Result<()> {
    if !meta.path.is_ident("crate") {
        return Err(meta.error("unsupported option; expected `crate = \"...\"`"));
    }
    let lit: syn::LitStr = meta.value()?.parse()?;
    let path: syn::Path =
        syn::parse_str(&lit.value()).map_err(|e| syn::Error::new(lit.span(), e))?;
    *out = Some(path);
    Ok(())
}

/// Iterate all attributes named `name` once and apply a callback.
fn parse_named<F>(attrs: &[Attribute], name: &str, mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident(name)) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Parses `#[mapper(crate = "...")]` on a struct.
pub(crate) fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut out = ContainerAttrs::default();
    parse_named(attrs, "mapper", |meta| parse_crate_arg(meta, &mut out.crate_path))?;
    Ok(out)
}

/// Parses `#[mapper(skip)]` on a field.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_named(attrs, "mapper", |meta| parse_skip(meta, &mut out.skip))?;
    Ok(out)
}

/// Parses `#[reflect(skip)]` on a method.
pub(crate) fn parse_method_skip(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut skip = false;
    parse_named(attrs, "reflect", |meta| parse_skip(meta, &mut skip))?;
    Ok(skip)
}

fn parse_skip(meta: &ParseNestedMeta, skip: &mut bool) -> syn::Result<()> {
    if meta.path.is_ident("skip") {
        *skip = true;
        return Ok(());
    }
    Err(meta.error("unsupported option; expected `skip`"))
}

#[cfg(test)]
mod tests {
    //! Unit tests for attribute parsing.

    use super::*;
    use anyhow::{Result, anyhow, ensure};
    use quote::ToTokens;
    use rstest::rstest;
    use syn::parse_quote;

    #[rstest]
    fn container_attrs_read_the_crate_path() -> Result<()> {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[mapper(crate = "my_ns::mapper")])];
        let parsed = parse_container_attrs(&attrs)?;
        let path = parsed
            .crate_path
            .ok_or_else(|| anyhow!("crate path should be recorded"))?;
        ensure!(
            path.to_token_stream().to_string() == "my_ns :: mapper",
            "unexpected path {}",
            path.to_token_stream()
        );
        Ok(())
    }

    #[rstest]
    fn field_attrs_default_to_mapped() -> Result<()> {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[doc = "documented"])];
        ensure!(!parse_field_attrs(&attrs)?.skip, "field should be mapped");
        Ok(())
    }

    #[rstest]
    fn field_attrs_read_skip() -> Result<()> {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[mapper(skip)])];
        ensure!(parse_field_attrs(&attrs)?.skip, "field should be skipped");
        Ok(())
    }

    #[rstest]
    #[case::unknown_field_option(parse_quote!(#[mapper(rename = "x")]))]
    #[case::crate_on_field(parse_quote!(#[mapper(crate = "x")]))]
    fn field_attrs_reject_unknown_options(#[case] attr: Attribute) {
        assert!(parse_field_attrs(&[attr]).is_err());
    }

    #[rstest]
    fn container_attrs_reject_skip() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[mapper(skip)])];
        assert!(parse_container_attrs(&attrs).is_err());
    }

    #[rstest]
    fn method_skip_ignores_other_attributes() -> Result<()> {
        let attrs: Vec<Attribute> = vec![
            parse_quote!(#[inline]),
            parse_quote!(#[reflect(skip)]),
        ];
        ensure!(parse_method_skip(&attrs)?, "method should be skipped");
        Ok(())
    }
}
