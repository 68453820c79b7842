//! Per-instrument order book snapshot for one tick

use crate::core::{Price, Quantity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Order book for one instrument at one tick
///
/// Both sides map price level → available volume. Sell-side volume may be
/// published as negative numbers by some hosts; the ask accessor returns the
/// magnitude.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    /// Buy side: price → resting volume
    #[serde(default, alias = "buy_orders")]
    pub bids: BTreeMap<Price, Quantity>,

    /// Sell side: price → resting volume
    #[serde(default, alias = "sell_orders")]
    pub asks: BTreeMap<Price, Quantity>,
}

impl BookSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest bid price present
    #[inline]
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.keys().next_back().copied()
    }

    /// Lowest ask price present
    #[inline]
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.keys().next().copied()
    }

    /// Volume available to sell into at the best bid
    ///
    /// Bids are always published positive; a negative level is treated as
    /// empty.
    pub fn best_bid_volume(&self) -> Quantity {
        self.bids
            .iter()
            .next_back()
            .map(|(_, qty)| (*qty).max(0))
            .unwrap_or(0)
    }

    /// Volume available to buy from at the best ask
    pub fn best_ask_volume(&self) -> Quantity {
        self.asks.iter().next().map(|(_, qty)| qty.abs()).unwrap_or(0)
    }

    /// Both sides have at least one level
    #[inline]
    pub fn is_two_sided(&self) -> bool {
        !self.bids.is_empty() && !self.asks.is_empty()
    }

    /// `(best_bid + best_ask) / 2`, defined only for a two-sided book
    pub fn mid_price(&self) -> Option<f64> {
        let bid = self.best_bid()?;
        let ask = self.best_ask()?;
        Some((bid as f64 + ask as f64) / 2.0)
    }
}
