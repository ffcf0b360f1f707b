//! Common test utilities for ppc CLI tests.
//!
//! - `TestEnv`: temp project with a prompt pack and an isolated config home
//! - Fixtures: module files for a small but complete pack

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
