//! Prosper Core - Stateful Per-Tick Trading Engine
//!
//! Once per market tick the host hands the engine a snapshot of order books
//! and positions plus the opaque state blob it persisted last tick. The
//! engine returns liquidity-taking orders bounded by per-instrument position
//! limits and a new blob.
//!
//! ## Architecture
//! - **Explicit state**: price history is decoded at tick entry and encoded
//!   at exit; the engine itself holds only configuration
//! - **Infallible ticks**: cold start, corrupt state and one-sided books all
//!   degrade to "no orders for that instrument"
//! - **Resolved dispatch**: each instrument's strategy is built once from
//!   config, never re-selected by name per tick
//!
//! ## Core Modules
//! - `core`: Orders, sides, boundary errors
//! - `data`: Book snapshots and the host tick contract
//! - `history`: Rolling mid-price store and its persistence
//! - `estimator`: Moving statistics and the per-tick fair-value table
//! - `config`: Instruments, limits, strategy assignment, profiles
//! - `engine`: `Strategy` trait and the tick engine
//! - `utils`: Logging setup

pub mod config;
pub mod core;
pub mod data;
pub mod engine;
pub mod estimator;
pub mod history;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export core types
pub use core::{ConfigError, Order, Price, Quantity, Side, StateError, Symbol};

pub use config::Config;
pub use data::{BookSnapshot, TickInput, TickOutput};
pub use engine::{Engine, SessionStats, Strategy, StrategyContext};
pub use history::{EngineState, PriceHistoryStore};

// Re-export error types
pub use anyhow::{Error, Result};

/// Prelude for convenient imports
pub mod prelude {
    // Core types
    pub use crate::core::{Order, Price, Quantity, Side, Symbol};

    // Engine
    pub use crate::engine::{Engine, Strategy, StrategyContext};

    // Data
    pub use crate::data::{BookSnapshot, SnapshotBuilder, TickInput, TickOutput};

    // State and estimators
    pub use crate::estimator::FairValues;
    pub use crate::history::{EngineState, PriceHistoryStore};

    // Configuration
    pub use crate::config::{Config, StrategyConfig};

    // Error types
    pub use crate::{Error, Result};
}
