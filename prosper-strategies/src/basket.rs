//! Basket Arbitrage Strategy
//!
//! Prices a basket synthetically from its components' fair values and
//! trades the basket's own book when it strays more than `epsilon` (a
//! proportion of the synthetic value) away:
//!
//! ```text
//! synthetic = Σ units_i × fair(component_i)
//!
//! best_ask < synthetic × (1 − ε)  →  lift the basket ask
//! best_bid > synthetic × (1 + ε)  →  hit the basket bid
//! ```
//!
//! Component legs are never traded to hedge.

use crate::sizing::{hit_all_bid, take_all_ask};
use prosper_core::config::{BasketParams, ComponentPricing};
use prosper_core::core::Order;
use prosper_core::engine::{Strategy, StrategyContext};
use prosper_core::estimator::FairValues;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct Basket {
    params: BasketParams,
}

/// Synthetic basket value from component fair values
///
/// `Strict` returns `None` while any component is unpriced. `Lenient` counts
/// unpriced components as zero.
pub fn basket_fair_value(params: &BasketParams, fair_values: &FairValues) -> Option<f64> {
    let mut total = 0.0;
    for (component, &units) in &params.components {
        match fair_values.get(component) {
            Some(fair) => total += units as f64 * fair,
            None => match params.pricing {
                ComponentPricing::Strict => return None,
                ComponentPricing::Lenient => {
                    warn!(%component, "basket component has no fair value, pricing it at zero");
                }
            },
        }
    }
    Some(total)
}

impl Basket {
    pub fn new(params: BasketParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &BasketParams {
        &self.params
    }
}

impl Strategy for Basket {
    fn calculate(&self, ctx: &StrategyContext<'_>) -> Vec<Order> {
        let Some(synthetic) = basket_fair_value(&self.params, ctx.fair_values) else {
            debug!(symbol = ctx.symbol, "basket components not yet priced");
            return Vec::new();
        };
        let band = synthetic * self.params.epsilon;

        debug!(symbol = ctx.symbol, synthetic, band, "basket fair value");

        let mut orders = Vec::new();
        if let Some(ask) = ctx.book.best_ask() {
            if (ask as f64) < synthetic - band {
                orders.extend(take_all_ask(ctx));
            }
        }
        if let Some(bid) = ctx.book.best_bid() {
            if (bid as f64) > synthetic + band {
                orders.extend(hit_all_bid(ctx));
            }
        }
        orders
    }

    fn name(&self) -> &'static str {
        "Basket"
    }
}
