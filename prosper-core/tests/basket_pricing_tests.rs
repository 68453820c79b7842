//! End-to-end basket arbitrage through the engine
//!
//! Component books feed history and fair values even when the components
//! are not themselves traded; the basket prices off those fair values.

use prosper_core::config::{
    BasketParams, ComponentPricing, Config, EngineConfig, InstrumentConfig, LoggingConfig,
    StrategyConfig,
};
use prosper_core::data::{BookSnapshot, SnapshotBuilder, TickInput};
use prosper_core::engine::Engine;
use prosper_core::Order;
use prosper_strategies::Desk;
use std::collections::BTreeMap;

const BASKET: &str = "PICNIC_BASKET1";

fn basket_config(pricing: ComponentPricing) -> Config {
    Config {
        engine: EngineConfig::default(),
        instruments: vec![InstrumentConfig {
            symbol: BASKET.to_string(),
            position_limit: 60,
            strategy: StrategyConfig::Basket(BasketParams {
                components: BTreeMap::from([
                    ("CROISSANT".to_string(), 6),
                    ("JAM".to_string(), 3),
                    ("DJEMBE".to_string(), 1),
                ]),
                epsilon: 0.02,
                pricing,
            }),
        }],
        logging: LoggingConfig::default(),
    }
}

fn around(mid: i64) -> BookSnapshot {
    SnapshotBuilder::new().bid(mid - 1, 40).ask(mid + 1, 40).negative_asks().build()
}

/// Components at 10 / 20 / 30, basket offered at `basket_ask`
fn quote(include_djembe: bool, basket_ask: i64, trader_data: String) -> TickInput {
    let mut books = BTreeMap::from([
        ("CROISSANT".to_string(), around(10)),
        ("JAM".to_string(), around(20)),
        (BASKET.to_string(), SnapshotBuilder::new().bid(140, 9).ask(basket_ask, 9).build()),
    ]);
    if include_djembe {
        books.insert("DJEMBE".to_string(), around(30));
    }
    TickInput {
        timestamp: 0,
        order_depths: books,
        position: BTreeMap::new(),
        trader_data,
    }
}

fn tick(include_djembe: bool, trader_data: String) -> TickInput {
    quote(include_djembe, 145, trader_data)
}

#[test]
fn test_basket_buys_below_synthetic_value() {
    // Scenario:
    //   - 6 × 10 + 3 × 20 + 1 × 30 = 150, lower band 147
    //   - components need 5 samples before they have a fair value
    //
    // Expected: nothing for four ticks, then lift the 145 ask for 9
    let engine: Engine<Desk> = Engine::new(&basket_config(ComponentPricing::Strict)).unwrap();

    let mut blob = String::new();
    for _ in 0..4 {
        let out = engine.on_tick(&tick(true, blob));
        assert!(out.orders.is_empty());
        blob = out.trader_data;
    }

    let out = engine.on_tick(&tick(true, blob));
    assert_eq!(out.orders_for(BASKET), &[Order::buy(BASKET, 145, 9)]);
    assert!(out.orders_for("CROISSANT").is_empty());
}

#[test]
fn test_ask_on_band_edge_does_not_trade() {
    // synthetic 150, lower band exactly 147; the comparison is strict
    let engine: Engine<Desk> = Engine::new(&basket_config(ComponentPricing::Strict)).unwrap();

    let mut blob = String::new();
    for _ in 0..8 {
        let out = engine.on_tick(&quote(true, 147, blob));
        assert!(out.orders.is_empty());
        blob = out.trader_data;
    }

    let out = engine.on_tick(&quote(true, 146, blob));
    assert_eq!(out.orders_for(BASKET), &[Order::buy(BASKET, 146, 9)]);
}

#[test]
fn test_strict_waits_for_every_component() {
    let engine: Engine<Desk> = Engine::new(&basket_config(ComponentPricing::Strict)).unwrap();

    let mut blob = String::new();
    for _ in 0..10 {
        let out = engine.on_tick(&tick(false, blob));
        assert!(out.orders.is_empty());
        blob = out.trader_data;
    }
}

#[test]
fn test_lenient_prices_missing_component_at_zero() {
    // Scenario:
    //   - DJEMBE never quoted, synthetic = 6 × 10 + 3 × 20 = 120
    //   - basket bid 140 > 120 × 1.02
    //
    // Expected: the basket is sold as rich
    let engine: Engine<Desk> = Engine::new(&basket_config(ComponentPricing::Lenient)).unwrap();

    let mut blob = String::new();
    let mut last = None;
    for _ in 0..5 {
        let out = engine.on_tick(&tick(false, blob));
        blob = out.trader_data.clone();
        last = Some(out);
    }

    let out = last.unwrap();
    assert_eq!(out.orders_for(BASKET), &[Order::sell(BASKET, 140, 9)]);
}

#[test]
fn test_self_referential_basket_rejected() {
    let mut config = basket_config(ComponentPricing::Strict);
    if let StrategyConfig::Basket(params) = &mut config.instruments[0].strategy {
        params.components.insert(BASKET.to_string(), 1);
    }
    assert!(Engine::<Desk>::new(&config).is_err());
}
