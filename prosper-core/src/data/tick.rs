//! Host boundary: what a tick receives and what it hands back

use super::book::BookSnapshot;
use crate::core::{Order, Quantity, Symbol};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the host supplies for one tick
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickInput {
    /// Host timestamp (opaque to the engine, used only for logging)
    #[serde(default)]
    pub timestamp: u64,

    /// Order book per instrument. Instruments absent here are skipped.
    #[serde(default)]
    pub order_depths: BTreeMap<Symbol, BookSnapshot>,

    /// Net position per instrument; missing means flat
    #[serde(default)]
    pub position: BTreeMap<Symbol, Quantity>,

    /// Opaque blob persisted by the previous tick (empty on the first tick)
    #[serde(default)]
    pub trader_data: String,
}

impl TickInput {
    /// Current position for `symbol`, 0 if the host did not report one
    #[inline]
    pub fn position_of(&self, symbol: &str) -> Quantity {
        self.position.get(symbol).copied().unwrap_or(0)
    }
}

/// Per-tick counters, surfaced to the driver for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickStats {
    /// Instruments whose history received a new mid-price
    pub histories_updated: usize,
    /// Configured instruments that had enough history to run
    pub warm: usize,
    /// Configured instruments that abstained for lack of history
    pub cold: usize,
    /// Configured instruments skipped (absent or one-sided book)
    pub skipped: usize,
    /// Total orders emitted
    pub orders: usize,
    /// Persisted blob was present but could not be decoded
    pub state_reset: bool,
}

/// Everything a tick hands back to the host
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickOutput {
    /// Non-empty order lists keyed by instrument
    pub orders: BTreeMap<Symbol, Vec<Order>>,

    /// Host conversion request; carries no meaning here and is always 0
    pub conversions: i64,

    /// Blob to hand back as `trader_data` on the next tick
    pub trader_data: String,

    #[serde(skip)]
    pub stats: TickStats,
}

impl TickOutput {
    /// Total number of orders across all instruments
    pub fn order_count(&self) -> usize {
        self.orders.values().map(Vec::len).sum()
    }

    /// Orders for one instrument (empty if none)
    pub fn orders_for(&self, symbol: &str) -> &[Order] {
        self.orders.get(symbol).map(Vec::as_slice).unwrap_or(&[])
    }
}
