//! `rstest-bdd` scaffolding for `object_mapper`.
//!
//! The modules defined alongside this entrypoint register the shared
//! fixture, the step implementations, and the scenario bindings so that the
//! `rstest-bdd` macros execute under `cargo test`.

mod fixtures;
mod scenarios;
mod steps;
