//! Tick sources for the driver binaries
//!
//! Both feeds produce `TickInput`s with an empty `trader_data`, leaving
//! `Engine::run` to thread the blob from one tick to the next.

use anyhow::{Context, Result};
use prosper_core::config::{Config, StrategyConfig};
use prosper_core::core::{Price, Quantity, Symbol};
use prosper_core::data::{SnapshotBuilder, TickInput, TickOutput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::io::BufRead;
use tracing::warn;

/// Recorded ticks, one JSON object per line
///
/// Blank lines are ignored. Lines that fail to parse are logged and
/// skipped. Any recorded `trader_data` is discarded.
pub struct JsonlFeed<R> {
    reader: R,
    line_no: usize,
    skipped: usize,
    buf: String,
}

impl<R: BufRead> JsonlFeed<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            skipped: 0,
            buf: String::new(),
        }
    }

    /// Lines that could not be parsed so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn next_tick(&mut self) -> Result<Option<TickInput>> {
        loop {
            self.buf.clear();
            let read = self
                .reader
                .read_line(&mut self.buf)
                .with_context(|| format!("Failed to read line {}", self.line_no + 1))?;
            if read == 0 {
                return Ok(None);
            }
            self.line_no += 1;

            let line = self.buf.trim();
            if line.is_empty() {
                continue;
            }

            match serde_json::from_str::<TickInput>(line) {
                Ok(mut tick) => {
                    tick.trader_data.clear();
                    return Ok(Some(tick));
                }
                Err(e) => {
                    warn!("Skipping line {}: {}", self.line_no, e);
                    self.skipped += 1;
                }
            }
        }
    }
}

/// Opening mid for well-known products; anything else starts at 1000
fn opening_mid(symbol: &str) -> Price {
    match symbol {
        "RAINFOREST_RESIN" => 10_000,
        "KELP" => 2_000,
        "SQUID_INK" => 1_900,
        "CROISSANT" => 4_300,
        "JAM" => 6_600,
        "DJEMBE" => 13_400,
        _ => 1_000,
    }
}

/// Random-walk market for every configured instrument
///
/// Single products drift by up to `step` ticks per tick. Baskets are quoted
/// around the unit-weighted sum of their components' mids plus a random
/// premium, so basket strategies see both cheap and rich books. Orders are
/// assumed to fill in full at their limit price.
pub struct SyntheticMarket {
    rng: StdRng,
    mids: BTreeMap<Symbol, Price>,
    baskets: BTreeMap<Symbol, BTreeMap<Symbol, u32>>,
    positions: BTreeMap<Symbol, Quantity>,
    step: Price,
    timestamp: u64,
}

impl SyntheticMarket {
    pub fn new(config: &Config, seed: u64) -> Self {
        let mut mids = BTreeMap::new();
        let mut baskets = BTreeMap::new();

        for instrument in &config.instruments {
            match &instrument.strategy {
                StrategyConfig::Basket(params) => {
                    for component in params.components.keys() {
                        mids.entry(component.clone())
                            .or_insert_with(|| opening_mid(component));
                    }
                    baskets.insert(instrument.symbol.clone(), params.components.clone());
                }
                _ => {
                    mids.entry(instrument.symbol.clone())
                        .or_insert_with(|| opening_mid(&instrument.symbol));
                }
            }
        }

        Self {
            rng: StdRng::seed_from_u64(seed),
            mids,
            baskets,
            positions: BTreeMap::new(),
            step: 3,
            timestamp: 0,
        }
    }

    pub fn positions(&self) -> &BTreeMap<Symbol, Quantity> {
        &self.positions
    }

    /// Advance every mid and quote a fresh set of books
    pub fn next_tick(&mut self) -> TickInput {
        self.timestamp += 100;

        for mid in self.mids.values_mut() {
            *mid = (*mid + self.rng.gen_range(-self.step..=self.step)).max(2);
        }

        let mut quoted = self.mids.clone();
        for (basket, components) in &self.baskets {
            let fair: Price = components
                .iter()
                .map(|(c, &units)| units as Price * self.mids.get(c).copied().unwrap_or(0))
                .sum();
            let premium = fair * self.rng.gen_range(-4..=4) / 100;
            quoted.insert(basket.clone(), (fair + premium).max(2));
        }

        let order_depths = quoted
            .into_iter()
            .map(|(symbol, mid)| {
                let half = self.rng.gen_range(1..=2);
                let book = SnapshotBuilder::new()
                    .bid(mid - half, self.rng.gen_range(1..=25))
                    .ask(mid + half, self.rng.gen_range(1..=25))
                    .negative_asks()
                    .build();
                (symbol, book)
            })
            .collect();

        TickInput {
            timestamp: self.timestamp,
            order_depths,
            position: self.positions.clone(),
            trader_data: String::new(),
        }
    }

    /// Book every order as filled
    pub fn apply(&mut self, output: &TickOutput) {
        for (symbol, orders) in &output.orders {
            let position = self.positions.entry(symbol.clone()).or_insert(0);
            for order in orders {
                *position = order.position_if_filled(*position);
            }
        }
    }
}
