//! Binds the mapping feature file to the step registry.

use crate::fixtures::{MappingContext, mapping_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/object_mapping.feature",
    fixtures = [mapping_context: MappingContext]
);
