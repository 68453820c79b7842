//! Market data handed to the engine by the host
//!
//! - `BookSnapshot`: one instrument's bids/asks for one tick
//! - `TickInput` / `TickOutput`: the host boundary contract
//! - `SnapshotBuilder`: fluent construction of books

pub mod book;
pub mod snapshot_builder;
pub mod tick;

pub use book::BookSnapshot;
pub use snapshot_builder::SnapshotBuilder;
pub use tick::{TickInput, TickOutput, TickStats};
