//! Built-in configuration profiles
//!
//! - Round 1: three single products, one strategy family each
//! - Round 2: adaptive mean reversion on every single product plus two
//!   picnic baskets priced from their components

use super::types::*;
use std::collections::BTreeMap;

/// Configuration profile name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileName {
    Round1,
    Round2,
}

impl ProfileName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Round1 => "round1",
            Self::Round2 => "round2",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "1" | "round1" | "r1" => Some(Self::Round1),
            "2" | "round2" | "r2" => Some(Self::Round2),
            _ => None,
        }
    }

    pub fn config(&self) -> Config {
        match self {
            Self::Round1 => ConfigProfile::round1(),
            Self::Round2 => ConfigProfile::round2(),
        }
    }
}

/// Configuration profiles with round-specific instruments and limits
pub struct ConfigProfile;

impl ConfigProfile {
    /// Round 1
    ///
    /// - RAINFOREST_RESIN: mean reversion, ±2% around the full-window mean
    /// - KELP: momentum, last 5 vs. the 5 before
    /// - SQUID_INK: 5/20 moving-average crossover
    pub fn round1() -> Config {
        Config {
            engine: EngineConfig::default(),
            instruments: vec![
                InstrumentConfig {
                    symbol: "RAINFOREST_RESIN".to_string(),
                    position_limit: 50,
                    strategy: StrategyConfig::MeanReversion(MeanReversionParams::default()),
                },
                InstrumentConfig {
                    symbol: "KELP".to_string(),
                    position_limit: 50,
                    strategy: StrategyConfig::Momentum(MomentumParams::default()),
                },
                InstrumentConfig {
                    symbol: "SQUID_INK".to_string(),
                    position_limit: 50,
                    strategy: StrategyConfig::Crossover(CrossoverParams::default()),
                },
            ],
            logging: LoggingConfig::default(),
        }
    }

    /// Round 2
    ///
    /// Every single product trades adaptive mean reversion (0.8σ band);
    /// the baskets trade against the weighted sum of component fair values.
    ///
    /// Baskets use `ComponentPricing::Strict` and abstain until every
    /// component has a fair value. This departs from the competition-era
    /// trader, which priced a missing component at zero; set `pricing =
    /// "lenient"` in a config file to get that behaviour back.
    pub fn round2() -> Config {
        let adaptive = || {
            StrategyConfig::MeanReversion(MeanReversionParams {
                min_samples: 20,
                window: None,
                band: Band::Adaptive { k: 0.8 },
            })
        };

        let singles = [
            ("RAINFOREST_RESIN", 50),
            ("KELP", 50),
            ("SQUID_INK", 50),
            ("CROISSANT", 250),
            ("JAM", 350),
            ("DJEMBE", 60),
        ];

        let mut instruments: Vec<InstrumentConfig> = singles
            .iter()
            .map(|(symbol, limit)| InstrumentConfig {
                symbol: symbol.to_string(),
                position_limit: *limit,
                strategy: adaptive(),
            })
            .collect();

        instruments.push(basket(
            "PICNIC_BASKET1",
            60,
            &[("CROISSANT", 6), ("JAM", 3), ("DJEMBE", 1)],
        ));
        instruments.push(basket("PICNIC_BASKET2", 100, &[("CROISSANT", 4), ("JAM", 2)]));

        Config {
            engine: EngineConfig::default(),
            instruments,
            logging: LoggingConfig::default(),
        }
    }
}

fn basket(symbol: &str, limit: i64, components: &[(&str, u32)]) -> InstrumentConfig {
    InstrumentConfig {
        symbol: symbol.to_string(),
        position_limit: limit,
        strategy: StrategyConfig::Basket(BasketParams {
            components: components
                .iter()
                .map(|(s, w)| (s.to_string(), *w))
                .collect::<BTreeMap<_, _>>(),
            epsilon: 0.02,
            pricing: ComponentPricing::Strict,
        }),
    }
}
