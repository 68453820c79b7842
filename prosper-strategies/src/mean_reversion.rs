//! Mean Reversion Strategy
//!
//! Trades the best quotes back toward a moving-average fair value:
//!
//! ```text
//! fair  = mean(history)                 or mean(last `window` entries)
//! band  = fair × pct                    (Fixed)
//!       | k × stddev(same entries)      (Adaptive)
//!
//! best_ask < fair − band  →  lift the ask
//! best_bid > fair + band  →  hit the bid
//! ```
//!
//! Both legs are evaluated independently, so a crossed book can fire both.

use crate::sizing::{hit_all_bid, take_all_ask};
use prosper_core::config::{Band, MeanReversionParams};
use prosper_core::core::Order;
use prosper_core::engine::{Strategy, StrategyContext};
use prosper_core::estimator::{full_stddev, simple_mean, stddev, windowed_mean};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct MeanReversion {
    params: MeanReversionParams,
}

/// Fair value and half-width for one evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub fair: f64,
    pub band: f64,
}

impl Threshold {
    #[inline]
    pub fn lower(&self) -> f64 {
        self.fair - self.band
    }

    #[inline]
    pub fn upper(&self) -> f64 {
        self.fair + self.band
    }
}

impl MeanReversion {
    pub fn new(params: MeanReversionParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &MeanReversionParams {
        &self.params
    }

    /// Fair value and band over `history`, if the window is filled
    pub fn threshold(&self, history: &[f64]) -> Option<Threshold> {
        let fair = match self.params.window {
            Some(n) => windowed_mean(history, n)?,
            None => simple_mean(history)?,
        };
        let band = match self.params.band {
            Band::Fixed { pct } => fair * pct,
            Band::Adaptive { k } => {
                let sd = match self.params.window {
                    Some(n) => stddev(history, n)?,
                    None => full_stddev(history)?,
                };
                k * sd
            }
        };
        Some(Threshold { fair, band })
    }
}

impl Strategy for MeanReversion {
    fn calculate(&self, ctx: &StrategyContext<'_>) -> Vec<Order> {
        if ctx.history.len() < self.params.min_samples {
            return Vec::new();
        }
        let Some(threshold) = self.threshold(ctx.history) else {
            return Vec::new();
        };

        debug!(
            symbol = ctx.symbol,
            fair = threshold.fair,
            band = threshold.band,
            "mean reversion threshold"
        );

        let mut orders = Vec::new();
        if let Some(ask) = ctx.book.best_ask() {
            if (ask as f64) < threshold.lower() {
                orders.extend(take_all_ask(ctx));
            }
        }
        if let Some(bid) = ctx.book.best_bid() {
            if (bid as f64) > threshold.upper() {
                orders.extend(hit_all_bid(ctx));
            }
        }
        orders
    }

    fn name(&self) -> &'static str {
        "MeanReversion"
    }

    fn min_samples(&self) -> usize {
        self.params.min_samples
    }
}
