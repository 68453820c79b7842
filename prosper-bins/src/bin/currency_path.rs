//! Best fixed-length currency round trip
//!
//! Searches the built-in island exchange table and prints the trade
//! sequence that ends in the start currency with the most of it.

use anyhow::{anyhow, bail, Result};
use clap::Parser;
use prosper_core::utils::init_logger;
use prosper_strategies::currency_path::{ExchangeTable, MAX_HOPS};

#[derive(Parser, Debug)]
#[command(author, version, about = "Find the most profitable currency round trip")]
struct Cli {
    /// Currency to start and finish in
    #[arg(short, long, default_value = "SeaShells")]
    start: String,

    /// Starting amount
    #[arg(short, long, default_value = "500")]
    amount: f64,

    /// Number of trades (at most 10)
    #[arg(long, default_value = "5")]
    trades: usize,

    /// Print the path as JSON
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(&cli.log_level, false)?;

    if !cli.amount.is_finite() {
        bail!("--amount must be a finite number, got {}", cli.amount);
    }
    if cli.trades > MAX_HOPS {
        bail!("--trades {} exceeds the maximum of {}", cli.trades, MAX_HOPS);
    }

    let table = ExchangeTable::island();
    let start = table
        .index_of(&cli.start)
        .ok_or_else(|| anyhow!("Unknown currency '{}'", cli.start))?;

    let path = table
        .best_round_trip(start, cli.amount, cli.trades)
        .ok_or_else(|| anyhow!("No round trip found"))?;

    if let Some(check) = table.exhaustive_round_trip(start, cli.amount, cli.trades) {
        if (check.amount_out - path.amount_out).abs() > 1e-9 * path.amount_out.abs().max(1.0) {
            tracing::warn!(
                "Exhaustive search disagrees: {:.6} vs {:.6}",
                check.amount_out,
                path.amount_out
            );
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&path)?);
        return Ok(());
    }

    println!("Maximum amount: {:.2} {}", path.amount_out, cli.start);
    println!("Best trade path:");
    for (i, trade) in path.trades.iter().enumerate() {
        println!(
            "{}. Trade {} -> {} at rate {}",
            i + 1,
            table.name(trade.from).unwrap_or("?"),
            table.name(trade.to).unwrap_or("?"),
            trade.rate
        );
    }

    Ok(())
}
