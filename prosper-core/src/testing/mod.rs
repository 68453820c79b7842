//! Testing utilities shared by unit tests, integration tests and benches
//!
//! Compiled for `cfg(test)` and behind the `testing` feature for
//! downstream crates.

pub mod helpers;

pub use helpers::*;
