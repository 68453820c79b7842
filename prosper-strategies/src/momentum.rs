//! Momentum Strategy
//!
//! Compares the mean of the most recent `short_window` mids against the mean
//! of the `long_window` mids immediately before them. A rising short mean
//! lifts the ask, a falling one hits the bid, equal means do nothing.
//!
//! With `Scaled` sizing the bounded quantity is multiplied by
//! `min(|gap| / 2, 1)` and truncated, so a gap of one tick trades half the
//! bound and a gap of two or more trades all of it.

use crate::sizing::{buy_bound, hit_bid, sell_bound, take_ask};
use prosper_core::config::{MomentumParams, MomentumSizing};
use prosper_core::core::{Order, Quantity, Side};
use prosper_core::engine::{Strategy, StrategyContext};
use prosper_core::estimator::{prior_window_mean, windowed_mean};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Momentum {
    params: MomentumParams,
}

impl Momentum {
    pub fn new(params: MomentumParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &MomentumParams {
        &self.params
    }

    /// `short − long`, if both windows are filled
    pub fn gap(&self, history: &[f64]) -> Option<f64> {
        let short = windowed_mean(history, self.params.short_window)?;
        let long = prior_window_mean(history, self.params.short_window, self.params.long_window)?;
        Some(short - long)
    }

    /// Quantity to request given the bounded size and the gap
    fn size(&self, bound: Quantity, gap: f64) -> Quantity {
        match self.params.sizing {
            MomentumSizing::Full => bound,
            MomentumSizing::Scaled => {
                let scale = (gap.abs() / 2.0).min(1.0);
                (bound as f64 * scale).trunc() as Quantity
            }
        }
    }
}

impl Strategy for Momentum {
    fn calculate(&self, ctx: &StrategyContext<'_>) -> Vec<Order> {
        if ctx.history.len() < self.params.min_samples {
            return Vec::new();
        }
        let Some(gap) = self.gap(ctx.history) else {
            return Vec::new();
        };

        let side = if gap > 0.0 {
            Side::Buy
        } else if gap < 0.0 {
            Side::Sell
        } else {
            return Vec::new();
        };

        debug!(symbol = ctx.symbol, gap, %side, "momentum signal");

        let order = match side {
            Side::Buy => take_ask(ctx, self.size(buy_bound(ctx), gap)),
            Side::Sell => hit_bid(ctx, self.size(sell_bound(ctx), gap)),
        };
        order.into_iter().collect()
    }

    fn name(&self) -> &'static str {
        "Momentum"
    }

    fn min_samples(&self) -> usize {
        self.params.min_samples
    }
}
