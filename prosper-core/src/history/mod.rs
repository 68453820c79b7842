//! Rolling price history and its persistence contract

pub mod persist;
pub mod store;

pub use persist::{EngineState, LoadOutcome};
pub use store::{PriceHistory, PriceHistoryStore, DEFAULT_HISTORY_CAPACITY};
