//! Tests for state persistence across ticks
//!
//! Running through the host blob (`on_tick` encoding and decoding every
//! tick) must be indistinguishable from carrying the state in memory, and a
//! blob that cannot be decoded must behave exactly like no blob at all.

use prosper_core::config::ConfigProfile;
use prosper_core::data::{SnapshotBuilder, TickInput};
use prosper_core::engine::Engine;
use prosper_core::history::EngineState;
use prosper_strategies::Desk;
use std::collections::BTreeMap;

/// Deterministic zig-zag market over the round 1 products
fn market(n: usize) -> Vec<TickInput> {
    (0..n)
        .map(|i| {
            let wobble = ((i * 7) % 11) as i64 - 5;
            let trend = (i / 10) as i64;
            let books = [
                ("RAINFOREST_RESIN", 10_000 + wobble * 60),
                ("KELP", 2_000 + trend * 3 + wobble),
                ("SQUID_INK", 1_900 - trend * 4 + wobble * 2),
            ]
            .into_iter()
            .map(|(symbol, mid)| {
                let book = SnapshotBuilder::new()
                    .bid(mid - 1, 12)
                    .ask(mid + 1, 15)
                    .negative_asks()
                    .build();
                (symbol.to_string(), book)
            })
            .collect();

            TickInput {
                timestamp: i as u64 * 100,
                order_depths: books,
                position: BTreeMap::from([("KELP".to_string(), (i % 7) as i64 - 3)]),
                trader_data: String::new(),
            }
        })
        .collect()
}

#[test]
fn test_blob_roundtrip_matches_in_memory_continuation() {
    let engine: Engine<Desk> = Engine::new(&ConfigProfile::round1()).unwrap();
    let ticks = market(60);

    let mut blob = String::new();
    let mut state = engine.initial_state();
    let mut total_orders = 0;

    for tick in &ticks {
        let hosted = TickInput {
            trader_data: blob.clone(),
            ..tick.clone()
        };
        let out = engine.on_tick(&hosted);

        let (decision, next) = engine.step(state, tick);
        state = next;

        assert_eq!(out.orders, decision.orders, "orders diverged at t={}", tick.timestamp);
        assert_eq!(EngineState::decode(&out.trader_data, 100).unwrap(), state);

        total_orders += out.order_count();
        blob = out.trader_data;
    }

    // the run must actually exercise the strategies
    assert!(total_orders > 0);
}

#[test]
fn test_corrupt_blob_equals_no_blob() {
    let engine: Engine<Desk> = Engine::new(&ConfigProfile::round1()).unwrap();
    let tick = market(1).remove(0);

    let fresh = engine.on_tick(&tick);

    for garbage in ["not json", "{\"price_history\": 7}", "{\"price_history\": {\"KELP\": [1.0,"] {
        let corrupt = engine.on_tick(&TickInput {
            trader_data: garbage.to_string(),
            ..tick.clone()
        });
        assert_eq!(corrupt.orders, fresh.orders);
        assert_eq!(corrupt.trader_data, fresh.trader_data);
        assert!(corrupt.stats.state_reset);
    }
    assert!(!fresh.stats.state_reset);
}

#[test]
fn test_capacity_applied_across_blobs() {
    // Scenario:
    //   - 150 ticks with a distinct KELP mid each tick
    //
    // Expected: 100 retained, oldest 50 evicted, newest last
    let engine: Engine<Desk> = Engine::new(&ConfigProfile::round1()).unwrap();

    let mut blob = String::new();
    for i in 0..150i64 {
        let book = SnapshotBuilder::new().bid(999 + i, 5).ask(1_001 + i, 5).build();
        let out = engine.on_tick(&TickInput {
            order_depths: BTreeMap::from([("KELP".to_string(), book)]),
            trader_data: blob,
            ..TickInput::default()
        });
        blob = out.trader_data;
    }

    let state = EngineState::decode(&blob, 100).unwrap();
    let kelp = state.history.get("KELP");
    assert_eq!(kelp.len(), 100);
    assert_eq!(kelp[0], 1_050.0);
    assert_eq!(kelp[99], 1_149.0);
}

#[test]
fn test_smaller_capacity_trims_on_load() {
    let engine: Engine<Desk> = Engine::new(&ConfigProfile::round1()).unwrap();
    let mut blob = String::new();
    for tick in market(30) {
        blob = engine.on_tick(&TickInput { trader_data: blob, ..tick }).trader_data;
    }

    let trimmed = EngineState::decode(&blob, 10).unwrap();
    let full = EngineState::decode(&blob, 100).unwrap();
    assert_eq!(trimmed.history.get("KELP"), &full.history.get("KELP")[20..]);
}
