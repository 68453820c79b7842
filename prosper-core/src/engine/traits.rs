//! Strategy seam between the engine and the strategy crate

use crate::core::{Order, Quantity};
use crate::data::BookSnapshot;
use crate::estimator::FairValues;

/// Everything a strategy may look at for one instrument on one tick
///
/// Borrowed from the engine for the duration of a single `calculate` call.
#[derive(Debug, Clone, Copy)]
pub struct StrategyContext<'a> {
    pub symbol: &'a str,
    pub book: &'a BookSnapshot,
    /// Host-reported position before this tick's orders
    pub position: Quantity,
    pub position_limit: Quantity,
    /// Retained mid-prices for this instrument, oldest first
    pub history: &'a [f64],
    /// Fair values of every instrument warm enough to have one
    pub fair_values: &'a FairValues,
}

impl StrategyContext<'_> {
    /// Room left to buy before hitting the long limit
    #[inline]
    pub fn buy_capacity(&self) -> Quantity {
        self.position_limit - self.position
    }

    /// Room left to sell before hitting the short limit
    #[inline]
    pub fn sell_capacity(&self) -> Quantity {
        self.position + self.position_limit
    }
}

/// Strategy trait
///
/// Implementations are pure functions of the context: no interior state
/// survives between ticks except what the engine persists as history.
pub trait Strategy {
    /// Orders to submit for `ctx.symbol` this tick (possibly none)
    fn calculate(&self, ctx: &StrategyContext<'_>) -> Vec<Order>;

    /// Strategy name for logging
    fn name(&self) -> &'static str;

    /// History length below which `calculate` always abstains
    fn min_samples(&self) -> usize {
        0
    }
}
