//! Tick Engine
//!
//! - `traits`: the `Strategy` seam and the per-instrument `StrategyContext`
//! - `generic`: `Engine<S: Strategy>`, the per-tick orchestration and the
//!   feed-driven `run` loop

pub mod generic;
pub mod traits;

pub use generic::{Engine, Readiness, Route, SessionStats, TickDecision};
pub use traits::{Strategy, StrategyContext};
