//! Tests for position limit enforcement
//!
//! Whatever the history, book and pre-tick position, the orders emitted
//! for an instrument can never take it past its limit on either side, even
//! if every one of them fills.

use proptest::prelude::*;
use prosper_core::config::{Config, ConfigProfile};
use prosper_core::data::{BookSnapshot, SnapshotBuilder, TickInput};
use prosper_core::engine::Engine;
use prosper_core::history::EngineState;
use prosper_core::{Order, Quantity};
use prosper_strategies::Desk;
use std::collections::BTreeMap;

fn assert_bounded(orders: &[Order], book: &BookSnapshot, position: Quantity, limit: Quantity) {
    let mut bought = 0;
    let mut sold = 0;
    for order in orders {
        assert_ne!(order.quantity, 0, "zero-quantity order {}", order);
        if order.quantity > 0 {
            assert_eq!(Some(order.price), book.best_ask(), "buy not at best ask");
            bought += order.quantity;
        } else {
            assert_eq!(Some(order.price), book.best_bid(), "sell not at best bid");
            sold -= order.quantity;
        }
    }
    assert!(bought <= limit - position, "bought {} from {} with limit {}", bought, position, limit);
    assert!(sold <= position + limit, "sold {} from {} with limit {}", sold, position, limit);
    assert!(bought <= book.best_ask_volume());
    assert!(sold <= book.best_bid_volume());
}

/// Seed every configured symbol (and basket component) with `history`
fn seeded_state(config: &Config, history: &[f64]) -> EngineState {
    let mut state = EngineState::new(config.engine.history_capacity);
    let symbols = ["RAINFOREST_RESIN", "KELP", "SQUID_INK", "CROISSANT", "JAM", "DJEMBE"];
    for symbol in symbols.iter().copied().chain(config.instruments.iter().map(|i| i.symbol.as_str())) {
        for &mid in history {
            state.history.record(symbol, mid);
        }
    }
    state
}

fn run_tick(
    config: &Config,
    history: &[f64],
    bid: i64,
    spread: i64,
    bid_vol: i64,
    ask_vol: i64,
    position_frac: f64,
) {
    let engine: Engine<Desk> = Engine::new(config).unwrap();

    let book = SnapshotBuilder::new()
        .bid(bid, bid_vol)
        .ask(bid + spread, ask_vol)
        .negative_asks()
        .build();

    let mut order_depths = BTreeMap::new();
    let mut position = BTreeMap::new();
    for instrument in &config.instruments {
        order_depths.insert(instrument.symbol.clone(), book.clone());
        let pos = (instrument.position_limit as f64 * position_frac).round() as Quantity;
        position.insert(instrument.symbol.clone(), pos);
    }

    let input = TickInput {
        timestamp: 0,
        order_depths,
        position,
        trader_data: String::new(),
    };

    let (decision, _) = engine.step(seeded_state(config, history), &input);

    for instrument in &config.instruments {
        let orders = decision.orders.get(&instrument.symbol).map(Vec::as_slice).unwrap_or(&[]);
        assert_bounded(
            orders,
            &book,
            input.position_of(&instrument.symbol),
            instrument.position_limit,
        );
    }
}

proptest! {
    #[test]
    fn prop_round1_orders_within_limits(
        history in proptest::collection::vec(80.0f64..120.0, 0..40),
        bid in 60i64..140,
        spread in -3i64..6,
        bid_vol in 1i64..80,
        ask_vol in 1i64..80,
        position_frac in -1.0f64..=1.0,
    ) {
        run_tick(&ConfigProfile::round1(), &history, bid, spread, bid_vol, ask_vol, position_frac);
    }

    #[test]
    fn prop_round2_orders_within_limits(
        history in proptest::collection::vec(5.0f64..40.0, 0..40),
        bid in 1i64..200,
        spread in -3i64..6,
        bid_vol in 1i64..400,
        ask_vol in 1i64..400,
        position_frac in -1.0f64..=1.0,
    ) {
        run_tick(&ConfigProfile::round2(), &history, bid, spread, bid_vol, ask_vol, position_frac);
    }
}

#[test]
fn test_at_long_limit_only_sells() {
    // Scenario:
    //   - KELP momentum, strongly rising history
    //   - already long 50 of 50
    //
    // Expected: the buy signal is suppressed entirely
    let config = ConfigProfile::round1();
    let rising: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
    let engine: Engine<Desk> = Engine::new(&config).unwrap();

    let book = SnapshotBuilder::new().bid(118, 20).ask(120, 20).build();
    let input = TickInput {
        order_depths: BTreeMap::from([("KELP".to_string(), book)]),
        position: BTreeMap::from([("KELP".to_string(), 50)]),
        ..TickInput::default()
    };

    let (decision, _) = engine.step(seeded_state(&config, &rising), &input);
    assert!(decision.orders.get("KELP").is_none());
}

#[test]
fn test_short_position_widens_buy_room() {
    // Scenario:
    //   - short 40 with limit 50, 120 lots offered
    //
    // Expected: buy is capped at 90 (limit − position), not 50
    let config = ConfigProfile::round1();
    let rising: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
    let engine: Engine<Desk> = Engine::new(&config).unwrap();

    let book = SnapshotBuilder::new().bid(118, 20).ask(120, 120).build();
    let input = TickInput {
        order_depths: BTreeMap::from([("KELP".to_string(), book)]),
        position: BTreeMap::from([("KELP".to_string(), -40)]),
        ..TickInput::default()
    };

    let (decision, _) = engine.step(seeded_state(&config, &rising), &input);
    assert_eq!(decision.orders["KELP"], vec![Order::buy("KELP", 120, 90)]);
}
