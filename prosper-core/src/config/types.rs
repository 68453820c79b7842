use crate::core::Symbol;
use crate::estimator::DEFAULT_FAIR_VALUE_MIN_SAMPLES;
use crate::history::DEFAULT_HISTORY_CAPACITY;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,

    /// Tradable instruments, each with its limit and strategy
    pub instruments: Vec<InstrumentConfig>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Engine-wide constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Mid-prices retained per instrument
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// History length before an instrument gets a fair value
    #[serde(default = "default_fair_value_min_samples")]
    pub fair_value_min_samples: usize,
}

/// One tradable instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentConfig {
    pub symbol: Symbol,

    /// Maximum absolute net position
    pub position_limit: i64,

    pub strategy: StrategyConfig,
}

/// Strategy assignment, resolved once when the engine is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StrategyConfig {
    MeanReversion(MeanReversionParams),
    Momentum(MomentumParams),
    Crossover(CrossoverParams),
    Basket(BasketParams),
}

impl StrategyConfig {
    /// History length below which the strategy abstains
    ///
    /// Baskets price off component fair values, not their own history.
    pub fn min_samples(&self) -> usize {
        match self {
            StrategyConfig::MeanReversion(p) => p.min_samples,
            StrategyConfig::Momentum(p) => p.min_samples,
            StrategyConfig::Crossover(p) => p.min_samples,
            StrategyConfig::Basket(_) => 0,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            StrategyConfig::MeanReversion(_) => "mean_reversion",
            StrategyConfig::Momentum(_) => "momentum",
            StrategyConfig::Crossover(_) => "crossover",
            StrategyConfig::Basket(_) => "basket",
        }
    }
}

/// Threshold around the fair value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Band {
    /// `fair × pct` on each side
    Fixed { pct: f64 },
    /// `k × stddev` of the same window the fair value is taken over
    Adaptive { k: f64 },
}

impl Default for Band {
    fn default() -> Self {
        Band::Fixed {
            pct: default_band_pct(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeanReversionParams {
    #[serde(default = "default_mean_reversion_min_samples")]
    pub min_samples: usize,

    /// Use the mean of the last `window` entries instead of the full history
    #[serde(default)]
    pub window: Option<usize>,

    #[serde(default)]
    pub band: Band,
}

impl Default for MeanReversionParams {
    fn default() -> Self {
        Self {
            min_samples: default_mean_reversion_min_samples(),
            window: None,
            band: Band::default(),
        }
    }
}

/// How momentum turns its signal into a quantity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MomentumSizing {
    /// Trade the whole available bound
    #[default]
    Full,
    /// Scale the bound by `min(|gap| / 2, 1)`
    Scaled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentumParams {
    #[serde(default = "default_momentum_min_samples")]
    pub min_samples: usize,

    /// Most recent entries averaged for the short window
    #[serde(default = "default_short_window")]
    pub short_window: usize,

    /// Entries preceding the short window averaged for the long window
    #[serde(default = "default_momentum_long_window")]
    pub long_window: usize,

    #[serde(default)]
    pub sizing: MomentumSizing,
}

impl Default for MomentumParams {
    fn default() -> Self {
        Self {
            min_samples: default_momentum_min_samples(),
            short_window: default_short_window(),
            long_window: default_momentum_long_window(),
            sizing: MomentumSizing::Full,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossoverParams {
    #[serde(default = "default_crossover_min_samples")]
    pub min_samples: usize,

    /// Nested windows, shortest first (two or three of them)
    #[serde(default = "default_crossover_windows")]
    pub windows: Vec<usize>,
}

impl Default for CrossoverParams {
    fn default() -> Self {
        Self {
            min_samples: default_crossover_min_samples(),
            windows: default_crossover_windows(),
        }
    }
}

/// What to do when a basket component has no fair value yet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentPricing {
    /// Abstain until every component is priced
    #[default]
    Strict,
    /// Unpriced components contribute zero
    Lenient,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasketParams {
    /// Component symbol → units per basket
    pub components: BTreeMap<Symbol, u32>,

    /// Proportional band around the synthetic fair value
    #[serde(default = "default_band_pct")]
    pub epsilon: f64,

    #[serde(default)]
    pub pricing: ComponentPricing,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub json: bool,
}

// Default value functions
fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

fn default_fair_value_min_samples() -> usize {
    DEFAULT_FAIR_VALUE_MIN_SAMPLES
}

fn default_band_pct() -> f64 {
    0.02 // 2%
}

fn default_mean_reversion_min_samples() -> usize {
    20
}

fn default_momentum_min_samples() -> usize {
    15
}

fn default_short_window() -> usize {
    5
}

fn default_momentum_long_window() -> usize {
    5
}

fn default_crossover_min_samples() -> usize {
    20
}

fn default_crossover_windows() -> Vec<usize> {
    vec![5, 20]
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
            fair_value_min_samples: default_fair_value_min_samples(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
