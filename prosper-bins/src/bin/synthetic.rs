//! Run the engine against a random-walk market
//!
//! Every configured instrument (and every basket component) gets a book
//! each tick. Orders fill in full, so positions move toward the limits.
//! Ctrl-C stops the run and prints the session statistics.

use anyhow::{Context, Result};
use clap::Parser;
use prosper_bins::common::{init_logging, log_orders, print_stats, CommonArgs};
use prosper_bins::feeds::SyntheticMarket;
use prosper_core::engine::Engine;
use prosper_strategies::Desk;
use std::cell::RefCell;

const DEFAULT_TICKS: u64 = 1000;

#[derive(Parser, Debug)]
#[command(author, version, about = "Drive the engine with a synthetic random-walk market")]
struct Cli {
    /// RNG seed
    #[arg(long, default_value = "0")]
    seed: u64,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.common.load_config()?;

    init_logging(&cli.common, &config)?;

    let max_ticks = cli.common.ticks.unwrap_or(DEFAULT_TICKS);
    tracing::info!("=== Prosper: Synthetic Market ===");
    tracing::info!("Seed: {}, ticks: {}", cli.seed, max_ticks);

    let engine: Engine<Desk> = Engine::new(&config).context("Invalid engine configuration")?;

    // Shared between the feed (quotes) and the output hook (fills)
    let market = RefCell::new(SyntheticMarket::new(&config, cli.seed));
    let mut tick_count = 0u64;

    let stats = engine.run(
        || {
            if tick_count >= max_ticks {
                return Ok(None);
            }
            tick_count += 1;
            Ok(Some(market.borrow_mut().next_tick()))
        },
        |input, output| {
            log_orders(input, output);
            market.borrow_mut().apply(output);
        },
    )?;

    print_stats(&stats);
    for (symbol, position) in market.borrow().positions() {
        tracing::info!("Final position {}: {}", symbol, position);
    }

    Ok(())
}
