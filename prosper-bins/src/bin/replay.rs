//! Replay recorded ticks through the engine
//!
//! Reads one `TickInput` JSON object per line (`order_depths`, `position`,
//! `timestamp`) and threads `trader_data` between ticks the way the host
//! does.

use anyhow::{Context, Result};
use clap::Parser;
use prosper_bins::common::{init_logging, log_orders, print_stats, CommonArgs};
use prosper_bins::feeds::JsonlFeed;
use prosper_core::engine::Engine;
use prosper_strategies::Desk;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay a JSON-lines tick log through the engine")]
struct Cli {
    /// JSON-lines file of ticks
    input: PathBuf,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.common.load_config()?;

    init_logging(&cli.common, &config)?;

    tracing::info!("=== Prosper: Replay ===");
    tracing::info!("Input: {}", cli.input.display());

    let file = File::open(&cli.input)
        .with_context(|| format!("Failed to open {}", cli.input.display()))?;
    let mut feed = JsonlFeed::new(BufReader::new(file));

    let engine: Engine<Desk> = Engine::new(&config).context("Invalid engine configuration")?;

    let limit = cli.common.ticks;
    let mut fed = 0u64;
    let stats = engine.run(
        || {
            if limit.is_some_and(|n| fed >= n) {
                return Ok(None);
            }
            fed += 1;
            feed.next_tick()
        },
        log_orders,
    )?;

    if feed.skipped() > 0 {
        tracing::warn!("Skipped {} unparseable lines", feed.skipped());
    }
    print_stats(&stats);

    Ok(())
}
