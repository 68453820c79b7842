//! Fluent builder for [`BookSnapshot`]
//!
//! Used by tests, benches and the synthetic feed to lay out books without
//! spelling out `BTreeMap` literals.
//!
//! # Example
//!
//! ```rust
//! use prosper_core::data::SnapshotBuilder;
//!
//! let book = SnapshotBuilder::new()
//!     .bid(9998, 10)
//!     .ask(10002, 10)
//!     .build();
//! assert_eq!(book.mid_price(), Some(10000.0));
//!
//! // Symmetric ladder: 3 levels each side, 1 tick apart, 15 lots per level
//! let ladder = SnapshotBuilder::new().ladder(2029, 2031, 3, 1, 15).build();
//! assert_eq!(ladder.bids.len(), 3);
//! ```

use super::book::BookSnapshot;
use crate::core::{Price, Quantity};

#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    book: BookSnapshot,
    negative_asks: bool,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a bid level
    pub fn bid(mut self, price: Price, volume: Quantity) -> Self {
        self.book.bids.insert(price, volume.abs());
        self
    }

    /// Add (or replace) an ask level
    pub fn ask(mut self, price: Price, volume: Quantity) -> Self {
        self.book.asks.insert(price, volume.abs());
        self
    }

    /// Publish ask volume as negative numbers, as some hosts do
    pub fn negative_asks(mut self) -> Self {
        self.negative_asks = true;
        self
    }

    /// Populate `levels` levels per side stepping away from the touch
    pub fn ladder(
        mut self,
        best_bid: Price,
        best_ask: Price,
        levels: usize,
        tick: Price,
        volume: Quantity,
    ) -> Self {
        for level in 0..levels as Price {
            self.book.bids.insert(best_bid - level * tick, volume.abs());
            self.book.asks.insert(best_ask + level * tick, volume.abs());
        }
        self
    }

    pub fn build(self) -> BookSnapshot {
        let mut book = self.book;
        if self.negative_asks {
            for volume in book.asks.values_mut() {
                *volume = -*volume;
            }
        }
        book
    }
}
