//! Shared test utilities for the ferry CLI integration tests.
//!
//! Provides `TestEnv` (isolated project + home temp directories with helpers
//! to run the compiled binary), fixtures and assertion macros.

pub mod assertions;
pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
