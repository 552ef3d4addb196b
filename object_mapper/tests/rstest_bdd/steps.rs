//! Step definitions for the mapping scenarios.

use crate::fixtures::MappingContext;
use anyhow::{Result, anyhow, ensure};
use object_mapper::{FieldFilter, Mapper};
use rstest_bdd_macros::{given, then, when};
use test_helpers::fixtures::{Account, AccountView};

/// Reads `-` as an empty value.
fn normalize_scalar(value: &str) -> &str {
    match value.trim() {
        "-" => "",
        other => other,
    }
}

fn map_view(mapping_context: &MappingContext, filter: FieldFilter) -> Result<()> {
    let view = mapping_context
        .view
        .take()
        .ok_or_else(|| anyhow!("a source view must be given first"))?;
    let mut account = Account::default();
    Mapper::new()
        .map(&mut account)
        .with_filter(filter)
        .fill(&view)?;
    mapping_context.account.set(account);
    Ok(())
}

#[given("a source view with id {id:u64}, name {name} and email {email}")]
fn given_view(mapping_context: &MappingContext, id: u64, name: String, email: String) {
    mapping_context.view.set(AccountView::new(
        id,
        normalize_scalar(&name),
        normalize_scalar(&email),
    ));
}

#[when("the view is mapped with no filters")]
fn map_unfiltered(mapping_context: &MappingContext) -> Result<()> {
    map_view(mapping_context, FieldFilter::default())
}

#[when("the view is mapped excluding {field}")]
fn map_excluding(mapping_context: &MappingContext, field: String) -> Result<()> {
    map_view(
        mapping_context,
        FieldFilter::default().with_excludes([normalize_scalar(&field)]),
    )
}

#[when("the view is mapped keeping only {field}")]
fn map_keeping_only(mapping_context: &MappingContext, field: String) -> Result<()> {
    map_view(
        mapping_context,
        FieldFilter::default().with_only([normalize_scalar(&field)]),
    )
}

#[then("the account holds id {id:u64}, name {name} and email {email}")]
fn check_account(
    mapping_context: &MappingContext,
    id: u64,
    name: String,
    email: String,
) -> Result<()> {
    let account = mapping_context
        .account
        .take()
        .ok_or_else(|| anyhow!("the view must be mapped first"))?;
    ensure!(account.get_id() == id, "unexpected id in {account:?}");
    ensure!(
        account.get_name() == normalize_scalar(&name),
        "unexpected name in {account:?}"
    );
    ensure!(
        account.get_email() == normalize_scalar(&email),
        "unexpected email in {account:?}"
    );
    Ok(())
}
