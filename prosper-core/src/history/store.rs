//! Bounded rolling mid-price buffers, one per instrument

use crate::core::Symbol;
use crate::data::BookSnapshot;
use std::collections::BTreeMap;

/// Default number of mid-prices retained per instrument
///
/// Comfortably above the longest moving-average window any strategy uses.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Insertion-ordered, capacity-bounded sequence of mid-prices
///
/// Oldest entries are dropped once the capacity is exceeded (a sliding
/// window, not a decay).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceHistory {
    prices: Vec<f64>,
}

impl PriceHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from persisted values, keeping only the newest `capacity`
    pub fn from_values(mut prices: Vec<f64>, capacity: usize) -> Self {
        if prices.len() > capacity {
            prices.drain(..prices.len() - capacity);
        }
        Self { prices }
    }

    /// Append a value and evict from the front beyond `capacity`
    ///
    /// Returns the number of evicted entries.
    pub fn push(&mut self, price: f64, capacity: usize) -> usize {
        self.prices.push(price);
        let excess = self.prices.len().saturating_sub(capacity);
        if excess > 0 {
            self.prices.drain(..excess);
        }
        excess
    }

    /// Oldest first
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.prices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    #[inline]
    pub fn last(&self) -> Option<f64> {
        self.prices.last().copied()
    }

    pub(crate) fn to_vec(&self) -> Vec<f64> {
        self.prices.clone()
    }
}

/// Price history for every instrument seen so far
///
/// This is the whole of the engine's cross-tick state. It is not shared
/// between threads; a tick owns it exclusively.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceHistoryStore {
    capacity: usize,
    histories: BTreeMap<Symbol, PriceHistory>,
}

impl Default for PriceHistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl PriceHistoryStore {
    /// Empty store. A zero capacity is bumped to 1 so `push` stays sound;
    /// config validation rejects it before it gets here.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            histories: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append the book's mid-price to `symbol`'s history
    ///
    /// One-sided or empty books leave the history untouched and return
    /// `None`. Returns the appended mid otherwise.
    pub fn update(&mut self, symbol: &str, book: &BookSnapshot) -> Option<f64> {
        let mid = book.mid_price()?;
        self.record(symbol, mid).then_some(mid)
    }

    /// Append a raw mid-price. Non-finite values are ignored.
    pub fn record(&mut self, symbol: &str, mid: f64) -> bool {
        if !mid.is_finite() {
            return false;
        }
        let capacity = self.capacity;
        self.histories
            .entry(symbol.to_string())
            .or_default()
            .push(mid, capacity);
        true
    }

    /// Retained mid-prices for `symbol`, oldest first; empty if unseen
    pub fn get(&self, symbol: &str) -> &[f64] {
        self.histories
            .get(symbol)
            .map(PriceHistory::as_slice)
            .unwrap_or(&[])
    }

    /// Number of retained entries for `symbol`
    pub fn len_of(&self, symbol: &str) -> usize {
        self.histories.get(symbol).map_or(0, PriceHistory::len)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &PriceHistory)> {
        self.histories.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.histories.is_empty()
    }

    pub(crate) fn insert(&mut self, symbol: Symbol, history: PriceHistory) {
        self.histories.insert(symbol, history);
    }
}
