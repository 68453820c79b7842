pub mod profiles;
pub mod types;

pub use profiles::{ConfigProfile, ProfileName};
pub use types::*;

use crate::core::ConfigError;
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::Path;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Load configuration from a TOML file and validate it
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_path = path.as_ref();

        let raw = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;

        Self::from_toml_str(&raw)
            .with_context(|| format!("Invalid configuration in {}", config_path.display()))
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(raw).context("Failed to deserialize configuration")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Render as TOML (used to dump a profile as a starting point)
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Look up an instrument by symbol
    pub fn instrument(&self, symbol: &str) -> Option<&InstrumentConfig> {
        self.instruments.iter().find(|i| i.symbol == symbol)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let capacity = self.engine.history_capacity;
        if capacity == 0 {
            return Err(ConfigError::ZeroHistoryCapacity);
        }
        if self.engine.fair_value_min_samples == 0 {
            return Err(ConfigError::ZeroFairValueSamples);
        }
        if self.engine.fair_value_min_samples > capacity {
            return Err(ConfigError::WindowExceedsCapacity {
                symbol: "engine.fair_value_min_samples".to_string(),
                window: self.engine.fair_value_min_samples,
                capacity,
            });
        }

        if self.instruments.is_empty() {
            return Err(ConfigError::NoInstruments);
        }

        let mut seen = BTreeSet::new();
        for instrument in &self.instruments {
            if !seen.insert(instrument.symbol.as_str()) {
                return Err(ConfigError::DuplicateSymbol {
                    symbol: instrument.symbol.clone(),
                });
            }
            instrument.validate(capacity)?;
        }

        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel {
                level: self.logging.level.clone(),
            });
        }

        Ok(())
    }
}

impl InstrumentConfig {
    fn validate(&self, capacity: usize) -> Result<(), ConfigError> {
        let symbol = &self.symbol;

        if self.position_limit < 0 {
            return Err(ConfigError::NegativeLimit {
                symbol: symbol.clone(),
                limit: self.position_limit,
            });
        }

        match &self.strategy {
            StrategyConfig::MeanReversion(p) => {
                let required = p.window.unwrap_or(1);
                if p.window == Some(0) {
                    return Err(invalid(symbol, "mean reversion window must be positive"));
                }
                check_windows(symbol, p.min_samples, required, capacity)?;
                match p.band {
                    Band::Fixed { pct } if !(pct.is_finite() && pct > 0.0 && pct < 1.0) => {
                        return Err(invalid(symbol, format!("fixed band {} must be in (0, 1)", pct)));
                    }
                    Band::Adaptive { k } if !(k.is_finite() && k > 0.0) => {
                        return Err(invalid(symbol, format!("adaptive band k={} must be positive", k)));
                    }
                    _ => {}
                }
            }
            StrategyConfig::Momentum(p) => {
                if p.short_window == 0 || p.long_window == 0 {
                    return Err(invalid(symbol, "momentum windows must be positive"));
                }
                check_windows(symbol, p.min_samples, p.short_window + p.long_window, capacity)?;
            }
            StrategyConfig::Crossover(p) => {
                if !(2..=3).contains(&p.windows.len()) {
                    return Err(invalid(
                        symbol,
                        format!("crossover needs 2 or 3 windows, got {}", p.windows.len()),
                    ));
                }
                if p.windows[0] == 0 || p.windows.windows(2).any(|w| w[0] >= w[1]) {
                    return Err(invalid(
                        symbol,
                        format!("crossover windows {:?} must be positive and strictly increasing", p.windows),
                    ));
                }
                let longest = p.windows[p.windows.len() - 1];
                check_windows(symbol, p.min_samples, longest, capacity)?;
            }
            StrategyConfig::Basket(p) => {
                if p.components.is_empty() {
                    return Err(ConfigError::EmptyBasket {
                        basket: symbol.clone(),
                    });
                }
                for (component, weight) in &p.components {
                    if component == symbol {
                        return Err(ConfigError::SelfReferentialBasket {
                            basket: symbol.clone(),
                            component: component.clone(),
                        });
                    }
                    if *weight == 0 {
                        return Err(ConfigError::ZeroWeight {
                            basket: symbol.clone(),
                            component: component.clone(),
                        });
                    }
                }
                if !(p.epsilon.is_finite() && (0.0..1.0).contains(&p.epsilon)) {
                    return Err(invalid(symbol, format!("basket epsilon {} must be in [0, 1)", p.epsilon)));
                }
            }
        }

        Ok(())
    }
}

fn check_windows(
    symbol: &str,
    min_samples: usize,
    required: usize,
    capacity: usize,
) -> Result<(), ConfigError> {
    if min_samples < required {
        return Err(ConfigError::MinSamplesTooSmall {
            symbol: symbol.to_string(),
            min_samples,
            required,
        });
    }
    if min_samples > capacity {
        return Err(ConfigError::WindowExceedsCapacity {
            symbol: symbol.to_string(),
            window: min_samples,
            capacity,
        });
    }
    Ok(())
}

fn invalid(symbol: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidParameter {
        symbol: symbol.to_string(),
        reason: reason.into(),
    }
}
