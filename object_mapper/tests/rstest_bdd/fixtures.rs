//! Shared fixtures for the behavioural mapping scenarios.

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use test_helpers::fixtures::{Account, AccountView};

/// Scenario state shared between the mapping steps.
#[derive(Debug, Default, ScenarioState)]
pub struct MappingContext {
    pub view: Slot<AccountView>,
    pub account: Slot<Account>,
}

/// Creates a clean mapping context for each scenario.
#[fixture]
pub fn mapping_context() -> MappingContext {
    test_helpers::logging::init();
    MappingContext::default()
}
