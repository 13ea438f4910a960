// tests/support/mod.rs
// Shared helpers for the e2e test binaries. Individual test crates use
// different subsets, so allow the resulting dead_code warnings.
#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(unused_imports)]
pub use helpers::*;
