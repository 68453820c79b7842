//! Tests for cold-start and skip behaviour
//!
//! An instrument trades only once its retained history reaches the assigned
//! strategy's minimum, and instruments without a usable book this tick are
//! skipped without touching their history.

use prosper_core::config::{
    Band, Config, EngineConfig, InstrumentConfig, LoggingConfig, MeanReversionParams,
    StrategyConfig,
};
use prosper_core::data::{BookSnapshot, SnapshotBuilder, TickInput};
use prosper_core::engine::Engine;
use prosper_core::history::EngineState;
use prosper_core::Order;
use prosper_strategies::Desk;
use std::collections::BTreeMap;

const RESIN: &str = "RAINFOREST_RESIN";

fn resin_only() -> Config {
    Config {
        engine: EngineConfig::default(),
        instruments: vec![InstrumentConfig {
            symbol: RESIN.to_string(),
            position_limit: 50,
            strategy: StrategyConfig::MeanReversion(MeanReversionParams {
                min_samples: 20,
                window: None,
                band: Band::Fixed { pct: 0.02 },
            }),
        }],
        logging: LoggingConfig::default(),
    }
}

fn book(bid: i64, ask: i64) -> BookSnapshot {
    SnapshotBuilder::new().bid(bid, 30).ask(ask, 30).negative_asks().build()
}

fn tick(books: Vec<(&str, BookSnapshot)>, trader_data: String) -> TickInput {
    TickInput {
        timestamp: 0,
        order_depths: books.into_iter().map(|(s, b)| (s.to_string(), b)).collect(),
        position: BTreeMap::new(),
        trader_data,
    }
}

/// Feed `n` quiet ticks at 10000 and return the blob
fn warm_up(engine: &Engine<Desk>, n: usize) -> String {
    let mut blob = String::new();
    for _ in 0..n {
        let out = engine.on_tick(&tick(vec![(RESIN, book(9_999, 10_001))], blob));
        assert!(out.orders.is_empty());
        blob = out.trader_data;
    }
    blob
}

#[test]
fn test_nineteen_samples_is_cold() {
    // Scenario:
    //   - 18 quiet ticks, then a tick with the ask far below fair
    //   - history length after the update is 19 < 20
    //
    // Expected: no orders, one cold instrument
    let engine: Engine<Desk> = Engine::new(&resin_only()).unwrap();
    let blob = warm_up(&engine, 18);

    let out = engine.on_tick(&tick(vec![(RESIN, book(9_000, 9_100))], blob));
    assert!(out.orders.is_empty());
    assert_eq!(out.stats.cold, 1);
    assert_eq!(out.stats.warm, 0);
}

#[test]
fn test_twenty_samples_trades() {
    // Scenario:
    //   - 18 quiet ticks, two cheap ticks
    //   - fair = (18 × 10000 + 2 × 9050) / 20 = 9905, lower band ≈ 9706.9
    //
    // Expected: second cheap tick lifts the 9100 ask for the full 30
    let engine: Engine<Desk> = Engine::new(&resin_only()).unwrap();
    let blob = warm_up(&engine, 18);

    let out = engine.on_tick(&tick(vec![(RESIN, book(9_000, 9_100))], blob));
    assert!(out.orders.is_empty());

    let out = engine.on_tick(&tick(vec![(RESIN, book(9_000, 9_100))], out.trader_data));
    assert_eq!(out.stats.warm, 1);
    assert_eq!(out.orders_for(RESIN), &[Order::buy(RESIN, 9_100, 30)]);
    assert_eq!(out.conversions, 0);
}

#[test]
fn test_absent_instrument_is_skipped() {
    let engine: Engine<Desk> = Engine::new(&resin_only()).unwrap();
    let blob = warm_up(&engine, 25);

    let out = engine.on_tick(&tick(vec![("KELP", book(1_999, 2_001))], blob));
    assert!(out.orders.is_empty());
    assert_eq!(out.stats.skipped, 1);

    // KELP history is still recorded even though nothing trades it
    let state = EngineState::decode(&out.trader_data, 100).unwrap();
    assert_eq!(state.history.len_of("KELP"), 1);
    assert_eq!(state.history.len_of(RESIN), 25);
}

#[test]
fn test_one_sided_book_leaves_history_unchanged() {
    let engine: Engine<Desk> = Engine::new(&resin_only()).unwrap();
    let blob = warm_up(&engine, 25);

    let bids_only = SnapshotBuilder::new().bid(5_000, 30).build();
    let out = engine.on_tick(&tick(vec![(RESIN, bids_only)], blob.clone()));

    assert!(out.orders.is_empty());
    assert_eq!(out.stats.skipped, 1);
    assert_eq!(out.stats.histories_updated, 0);

    let before = EngineState::decode(&blob, 100).unwrap();
    let after = EngineState::decode(&out.trader_data, 100).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_empty_tick() {
    let engine: Engine<Desk> = Engine::new(&resin_only()).unwrap();
    let out = engine.on_tick(&TickInput::default());

    assert!(out.orders.is_empty());
    let state = EngineState::decode(&out.trader_data, 100).unwrap();
    assert!(state.history.is_empty());
}
