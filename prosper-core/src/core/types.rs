//! Core value types shared by the engine and the strategies
//!
//! Prices are integer ticks (the exchange quotes whole-number levels),
//! quantities are signed integers. Only derived statistics (mid-prices,
//! fair values) are floating point.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Instrument identifier (e.g. `"KELP"`, `"PICNIC_BASKET1"`)
pub type Symbol = String;

/// Price level in integer ticks
pub type Price = i64;

/// Signed quantity. Positive = buy / long, negative = sell / short
pub type Quantity = i64;

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Sign applied to a quantity on this side
    #[inline]
    pub const fn sign(&self) -> Quantity {
        match self {
            Side::Buy => 1,
            Side::Sell => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// A liquidity-taking order returned to the host
///
/// The engine never tracks whether it fills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub symbol: Symbol,
    pub price: Price,
    /// Positive = buy, negative = sell
    pub quantity: Quantity,
}

impl Order {
    pub fn new(symbol: impl Into<Symbol>, price: Price, quantity: Quantity) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            quantity,
        }
    }

    /// Buy `quantity` (must be positive) at `price`
    pub fn buy(symbol: impl Into<Symbol>, price: Price, quantity: Quantity) -> Self {
        Self::new(symbol, price, quantity.abs())
    }

    /// Sell `quantity` (magnitude) at `price`; stored as a negative quantity
    pub fn sell(symbol: impl Into<Symbol>, price: Price, quantity: Quantity) -> Self {
        Self::new(symbol, price, -quantity.abs())
    }

    #[inline]
    pub fn side(&self) -> Side {
        if self.quantity >= 0 {
            Side::Buy
        } else {
            Side::Sell
        }
    }

    /// Position after this order fills completely
    #[inline]
    pub fn position_if_filled(&self, position: Quantity) -> Quantity {
        position + self.quantity
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} @ {}",
            self.side(),
            self.quantity.abs(),
            self.symbol,
            self.price
        )
    }
}
