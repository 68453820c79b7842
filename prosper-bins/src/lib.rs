//! Host drivers for the Prosper engine
//!
//! - `prosper-replay`: feeds recorded ticks from a JSON-lines file
//! - `prosper-synthetic`: random-walk books for the configured instruments
//! - `prosper-currency-path`: best round trip through an exchange table

pub mod common;
pub mod feeds;
