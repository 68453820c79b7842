//! Moving-Average Crossover Strategy
//!
//! Two or three nested trailing windows (shortest first). Averages strictly
//! descending from short to long means the trend is up and the ask is
//! lifted. Strictly ascending means down and the bid is hit. Any other
//! ordering, including ties, is no signal.

use crate::sizing::{hit_all_bid, take_all_ask};
use prosper_core::config::CrossoverParams;
use prosper_core::core::{Order, Side};
use prosper_core::engine::{Strategy, StrategyContext};
use prosper_core::estimator::windowed_mean;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Crossover {
    params: CrossoverParams,
}

/// Trend implied by a list of averages ordered short to long
pub fn trend(averages: &[f64]) -> Option<Side> {
    if averages.len() < 2 {
        return None;
    }
    if averages.windows(2).all(|w| w[0] > w[1]) {
        Some(Side::Buy)
    } else if averages.windows(2).all(|w| w[0] < w[1]) {
        Some(Side::Sell)
    } else {
        None
    }
}

impl Crossover {
    pub fn new(params: CrossoverParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &CrossoverParams {
        &self.params
    }

    /// Trailing means for each window, `None` until the longest is filled
    pub fn averages(&self, history: &[f64]) -> Option<Vec<f64>> {
        self.params
            .windows
            .iter()
            .map(|&n| windowed_mean(history, n))
            .collect()
    }
}

impl Strategy for Crossover {
    fn calculate(&self, ctx: &StrategyContext<'_>) -> Vec<Order> {
        if ctx.history.len() < self.params.min_samples {
            return Vec::new();
        }
        let Some(averages) = self.averages(ctx.history) else {
            return Vec::new();
        };
        let Some(side) = trend(&averages) else {
            return Vec::new();
        };

        debug!(symbol = ctx.symbol, ?averages, %side, "crossover signal");

        let order = match side {
            Side::Buy => take_all_ask(ctx),
            Side::Sell => hit_all_bid(ctx),
        };
        order.into_iter().collect()
    }

    fn name(&self) -> &'static str {
        "Crossover"
    }

    fn min_samples(&self) -> usize {
        self.params.min_samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::flat_ctx;
    use prosper_core::estimator::FairValues;
    use prosper_core::testing::{create_test_book, flat, ramp};

    #[test]
    fn test_trend_ordering() {
        assert_eq!(trend(&[12.0, 10.0, 8.0]), Some(Side::Buy));
        assert_eq!(trend(&[8.0, 10.0, 12.0]), Some(Side::Sell));
        assert_eq!(trend(&[10.0, 12.0, 8.0]), None);
        assert_eq!(trend(&[10.0, 10.0]), None);
        assert_eq!(trend(&[10.0]), None);
    }

    #[test]
    fn test_uptrend_lifts_ask() {
        let strategy = Crossover::new(CrossoverParams {
            min_samples: 20,
            windows: vec![5, 10, 20],
        });
        let history = ramp(100.0, 1.0, 20);
        let book = create_test_book(118, 120, 8);
        let fair = FairValues::default();

        let orders = strategy.calculate(&flat_ctx("SQUID_INK", &book, &history, &fair));
        assert_eq!(orders, vec![Order::buy("SQUID_INK", 120, 8)]);
    }

    #[test]
    fn test_downtrend_hits_bid() {
        let strategy = Crossover::new(CrossoverParams::default());
        let history = ramp(120.0, -1.0, 25);
        let book = create_test_book(95, 97, 8);
        let fair = FairValues::default();

        let orders = strategy.calculate(&flat_ctx("SQUID_INK", &book, &history, &fair));
        assert_eq!(orders, vec![Order::sell("SQUID_INK", 95, 8)]);
    }

    #[test]
    fn test_flat_is_quiet_and_cold_abstains() {
        let strategy = Crossover::new(CrossoverParams::default());
        let book = create_test_book(99, 101, 8);
        let fair = FairValues::default();

        let history = flat(100.0, 30);
        assert!(strategy.calculate(&flat_ctx("SQUID_INK", &book, &history, &fair)).is_empty());

        let history = ramp(100.0, 1.0, 19);
        assert!(strategy.calculate(&flat_ctx("SQUID_INK", &book, &history, &fair)).is_empty());
    }
}
