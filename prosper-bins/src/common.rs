//! Common utilities for all binaries
//!
//! Shared initialization, CLI parsing, and setup code.

use anyhow::{anyhow, Context, Result};
use clap::Args;
use prosper_core::config::{Config, LoggingConfig, ProfileName};
use prosper_core::data::{TickInput, TickOutput};
use prosper_core::engine::SessionStats;
use std::path::PathBuf;

/// Common CLI arguments for the engine drivers
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// TOML configuration file (overrides --profile)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Built-in profile: round1 or round2
    #[arg(short, long, default_value = "round1")]
    pub profile: String,

    /// Stop after this many ticks
    #[arg(short, long)]
    pub ticks: Option<u64>,

    /// Log level (overrides the config's [logging] level)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl CommonArgs {
    /// Config from `--config` if given, otherwise the named profile
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load(path),
            None => {
                let profile = ProfileName::from_str(&self.profile)
                    .ok_or_else(|| anyhow!("Unknown profile '{}' (expected round1 or round2)", self.profile))?;
                let config = profile.config();
                config
                    .validate()
                    .with_context(|| format!("Built-in profile {} is invalid", profile.as_str()))?;
                Ok(config)
            }
        }
    }

    /// Effective log level: CLI flag first, then config
    pub fn log_level<'a>(&'a self, config: &'a Config) -> &'a str {
        self.log_level.as_deref().unwrap_or(&config.logging.level)
    }

    /// Effective JSON flag
    pub fn json_logs(&self, config: &Config) -> bool {
        self.json_logs || config.logging.json
    }

    /// The config's `[logging]` section with CLI overrides applied
    pub fn logging(&self, config: &Config) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level(config).to_string(),
            json: self.json_logs(config),
        }
    }
}

/// Initialize tracing/logging for a driver
///
/// `RUST_LOG` takes precedence over the level.
pub fn init_logging(args: &CommonArgs, config: &Config) -> Result<()> {
    prosper_core::utils::init_from_config(&args.logging(config))
}

/// Log every order a tick produced
pub fn log_orders(input: &TickInput, output: &TickOutput) {
    for orders in output.orders.values() {
        for order in orders {
            tracing::info!("t={} {}", input.timestamp, order);
        }
    }
}

/// Print final statistics
pub fn print_stats(stats: &SessionStats) {
    tracing::info!("=== Final Statistics ===");
    tracing::info!("Ticks processed: {}", stats.ticks_processed);
    tracing::info!("Orders generated: {}", stats.orders_generated);
    tracing::info!("Ticks with orders: {}", stats.ticks_with_orders);
    tracing::info!(
        "Instrument-ticks warm/cold: {}/{}",
        stats.warm_instrument_ticks,
        stats.cold_instrument_ticks
    );
    tracing::info!("State resets: {}", stats.state_resets);

    if stats.ticks_processed > 0 {
        let order_rate = (stats.ticks_with_orders as f64 / stats.ticks_processed as f64) * 100.0;
        tracing::info!("Order rate: {:.2}%", order_rate);
    }
}
