//! Closed set of strategies the engine can route an instrument to
//!
//! `Desk` is what `Engine<Desk>` is instantiated with: each instrument's
//! `StrategyConfig` is converted once when the engine is built, and every
//! tick dispatches through a plain `match`.

use crate::basket::Basket;
use crate::crossover::Crossover;
use crate::mean_reversion::MeanReversion;
use crate::momentum::Momentum;
use prosper_core::config::StrategyConfig;
use prosper_core::core::Order;
use prosper_core::engine::{Strategy, StrategyContext};

#[derive(Debug, Clone, PartialEq)]
pub enum Desk {
    MeanReversion(MeanReversion),
    Momentum(Momentum),
    Crossover(Crossover),
    Basket(Basket),
}

impl From<&StrategyConfig> for Desk {
    fn from(config: &StrategyConfig) -> Self {
        match config {
            StrategyConfig::MeanReversion(p) => Desk::MeanReversion(MeanReversion::new(p.clone())),
            StrategyConfig::Momentum(p) => Desk::Momentum(Momentum::new(p.clone())),
            StrategyConfig::Crossover(p) => Desk::Crossover(Crossover::new(p.clone())),
            StrategyConfig::Basket(p) => Desk::Basket(Basket::new(p.clone())),
        }
    }
}

impl Strategy for Desk {
    #[inline]
    fn calculate(&self, ctx: &StrategyContext<'_>) -> Vec<Order> {
        match self {
            Desk::MeanReversion(s) => s.calculate(ctx),
            Desk::Momentum(s) => s.calculate(ctx),
            Desk::Crossover(s) => s.calculate(ctx),
            Desk::Basket(s) => s.calculate(ctx),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Desk::MeanReversion(s) => s.name(),
            Desk::Momentum(s) => s.name(),
            Desk::Crossover(s) => s.name(),
            Desk::Basket(s) => s.name(),
        }
    }

    fn min_samples(&self) -> usize {
        match self {
            Desk::MeanReversion(s) => s.min_samples(),
            Desk::Momentum(s) => s.min_samples(),
            Desk::Crossover(s) => s.min_samples(),
            Desk::Basket(s) => s.min_samples(),
        }
    }
}
