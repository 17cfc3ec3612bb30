// tests/support/mod.rs
// Shared doubles for the integration test binaries. Some symbols are
// unused in individual test crates, which would trip dead_code warnings;
// allow them at the module level to keep CI output clean.
#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use builders::*;

#[allow(unused_imports)]
pub use mocks::*;
