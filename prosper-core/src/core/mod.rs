//! Core types for the tick engine
//!
//! - `Order`, `Side`: the only side effect a tick produces
//! - `Symbol`, `Price`, `Quantity`: integer-tick market primitives
//! - `ConfigError`, `StateError`: boundary errors

pub mod errors;
pub mod types;

// Re-export commonly used types
pub use errors::{ConfigError, StateError};
pub use types::{Order, Price, Quantity, Side, Symbol};
