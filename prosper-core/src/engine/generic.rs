//! Tick Engine - explicit state in, orders and state out
//!
//! The engine holds only static configuration: one route per configured
//! instrument, each with its strategy resolved once at construction. All
//! cross-tick memory lives in [`EngineState`], which is decoded from the
//! host's blob at the start of a tick and encoded back at the end.
//!
//! ## Tick Processing Pipeline
//!
//! ```text
//!                 on_tick(&TickInput)
//!                         │
//!                         ▼
//!            ┌────────────────────────┐
//!            │ EngineState::load      │ ◀── empty / corrupt ⇒ empty history
//!            └────────────────────────┘
//!                         │
//!                         ▼
//!            ┌────────────────────────┐
//!            │ history.update         │ ◀── every two-sided book
//!            └────────────────────────┘
//!                         │
//!                         ▼
//!            ┌────────────────────────┐
//!            │ FairValues::estimate   │ ◀── len ≥ fair_value_min_samples
//!            └────────────────────────┘
//!                         │
//!                         ▼
//!            ┌────────────────────────┐
//!            │ per route:             │
//!            │  absent / one-sided ─▶ skip
//!            │  len < min_samples ──▶ cold, no orders
//!            │  Strategy::calculate   │
//!            └────────────────────────┘
//!                         │
//!                         ▼
//!            ┌────────────────────────┐
//!            │ EngineState::encode    │ ──▶ trader_data
//!            └────────────────────────┘
//! ```
//!
//! A tick never fails: every degenerate case degrades to "no orders for
//! that instrument this tick".

use super::traits::{Strategy, StrategyContext};
use crate::config::{Config, EngineConfig, StrategyConfig};
use crate::core::{ConfigError, Order, Quantity, Symbol};
use crate::data::{TickInput, TickOutput, TickStats};
use crate::estimator::FairValues;
use crate::history::{EngineState, LoadOutcome};
use anyhow::Result;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Per-instrument readiness, derived fresh every tick from history length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// Enough history for the assigned strategy
    Warm,
    /// Too little history; the instrument abstains this tick
    Cold { have: usize, need: usize },
}

impl Readiness {
    #[inline]
    pub fn of(history_len: usize, min_samples: usize) -> Self {
        if history_len >= min_samples {
            Readiness::Warm
        } else {
            Readiness::Cold {
                have: history_len,
                need: min_samples,
            }
        }
    }
}

/// One configured instrument and its resolved strategy
#[derive(Debug, Clone)]
pub struct Route<S> {
    pub symbol: Symbol,
    pub position_limit: Quantity,
    pub strategy: S,
}

/// Orders and counters produced by [`Engine::step`]
#[derive(Debug, Clone, Default)]
pub struct TickDecision {
    pub orders: BTreeMap<Symbol, Vec<Order>>,
    pub stats: TickStats,
}

/// Tick engine over a strategy type `S`
///
/// `S` is typically a closed enum of strategy variants so dispatch is a
/// `match`, not a string comparison.
pub struct Engine<S: Strategy> {
    routes: Vec<Route<S>>,
    engine: EngineConfig,
    shutdown: Arc<AtomicBool>,
}

impl<S: Strategy> Engine<S> {
    /// Build an engine from a validated configuration
    ///
    /// Each instrument's `StrategyConfig` is converted into `S` exactly once.
    pub fn new(config: &Config) -> Result<Self, ConfigError>
    where
        S: for<'c> From<&'c StrategyConfig>,
    {
        config.validate()?;

        let routes = config
            .instruments
            .iter()
            .map(|instrument| Route {
                symbol: instrument.symbol.clone(),
                position_limit: instrument.position_limit,
                strategy: S::from(&instrument.strategy),
            })
            .collect();

        Ok(Self::with_routes(config.engine.clone(), routes))
    }

    /// Build an engine from pre-resolved routes
    pub fn with_routes(engine: EngineConfig, routes: Vec<Route<S>>) -> Self {
        info!(
            "Initializing engine: {} instruments, history capacity {}",
            routes.len(),
            engine.history_capacity
        );
        for route in &routes {
            debug!(
                "  {} -> {} (limit {})",
                route.symbol,
                route.strategy.name(),
                route.position_limit
            );
        }

        Self {
            routes,
            engine,
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn routes(&self) -> &[Route<S>] {
        &self.routes
    }

    pub fn history_capacity(&self) -> usize {
        self.engine.history_capacity
    }

    /// Empty state sized for this engine
    pub fn initial_state(&self) -> EngineState {
        EngineState::new(self.engine.history_capacity)
    }

    /// Host entry point: decode `trader_data`, decide, encode
    pub fn on_tick(&self, input: &TickInput) -> TickOutput {
        let (state, outcome) = EngineState::load(&input.trader_data, self.engine.history_capacity);

        let (mut decision, state) = self.step(state, input);
        decision.stats.state_reset = outcome == LoadOutcome::Reset;

        let trader_data = match state.encode() {
            Ok(blob) => blob,
            Err(e) => {
                warn!("Failed to persist state, next tick starts empty: {}", e);
                String::new()
            }
        };

        TickOutput {
            orders: decision.orders,
            conversions: 0,
            trader_data,
            stats: decision.stats,
        }
    }

    /// Pure tick: consume the previous state, return orders and the next state
    ///
    /// `input.trader_data` is ignored here; `on_tick` handles the blob.
    pub fn step(&self, mut state: EngineState, input: &TickInput) -> (TickDecision, EngineState) {
        let mut stats = TickStats::default();

        for (symbol, book) in &input.order_depths {
            if state.history.update(symbol, book).is_some() {
                stats.histories_updated += 1;
            }
        }

        let fair_values = FairValues::estimate(&state.history, self.engine.fair_value_min_samples);

        let mut orders = BTreeMap::new();
        for route in &self.routes {
            let Some(book) = input.order_depths.get(&route.symbol) else {
                stats.skipped += 1;
                continue;
            };
            if !book.is_two_sided() {
                debug!("{}: one-sided book, skipping", route.symbol);
                stats.skipped += 1;
                continue;
            }

            let history = state.history.get(&route.symbol);
            match Readiness::of(history.len(), route.strategy.min_samples()) {
                Readiness::Cold { have, need } => {
                    debug!("{}: cold ({}/{} samples)", route.symbol, have, need);
                    stats.cold += 1;
                    continue;
                }
                Readiness::Warm => stats.warm += 1,
            }

            let ctx = StrategyContext {
                symbol: &route.symbol,
                book,
                position: input.position_of(&route.symbol),
                position_limit: route.position_limit,
                history,
                fair_values: &fair_values,
            };

            let route_orders = route.strategy.calculate(&ctx);
            if !route_orders.is_empty() {
                for order in &route_orders {
                    debug!("{}: {} [{}]", route.symbol, order, route.strategy.name());
                }
                stats.orders += route_orders.len();
                orders.insert(route.symbol.clone(), route_orders);
            }
        }

        (TickDecision { orders, stats }, state)
    }

    /// Get shutdown signal for graceful termination
    pub fn shutdown_signal(&self) -> Arc<AtomicBool> {
        self.shutdown.clone()
    }

    /// Drive the engine from a feed, threading `trader_data` between ticks
    ///
    /// Stops when the feed returns `None`, on Ctrl-C, or when the shutdown
    /// signal is set. `on_output` sees every tick's input and output.
    pub fn run<F, O>(&self, mut feed_fn: F, mut on_output: O) -> Result<SessionStats>
    where
        F: FnMut() -> Result<Option<TickInput>>,
        O: FnMut(&TickInput, &TickOutput),
    {
        info!("Starting engine main loop");

        let shutdown = self.shutdown.clone();
        if let Err(e) = ctrlc::set_handler(move || {
            warn!("Received shutdown signal");
            shutdown.store(true, Ordering::Release);
        }) {
            warn!("Failed to set Ctrl-C handler: {}. Shutdown via code only.", e);
        }

        let mut stats = SessionStats::default();
        let mut trader_data = String::new();

        while !self.shutdown.load(Ordering::Acquire) {
            let Some(mut input) = feed_fn()? else {
                info!("Market feed ended");
                break;
            };

            // The host hands back exactly what we persisted last tick
            if input.trader_data.is_empty() {
                input.trader_data = std::mem::take(&mut trader_data);
            }

            let output = self.on_tick(&input);
            stats.record(&output.stats);
            on_output(&input, &output);
            trader_data = output.trader_data;
        }

        info!("Engine stopped. Stats: {:?}", stats);
        Ok(stats)
    }
}

/// Counters accumulated over a [`Engine::run`] session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub ticks_processed: u64,
    pub orders_generated: u64,
    pub ticks_with_orders: u64,
    /// Instrument-ticks that ran a strategy
    pub warm_instrument_ticks: u64,
    /// Instrument-ticks that abstained for lack of history
    pub cold_instrument_ticks: u64,
    /// Ticks whose persisted state could not be decoded
    pub state_resets: u64,
}

impl SessionStats {
    pub fn record(&mut self, tick: &TickStats) {
        self.ticks_processed += 1;
        self.orders_generated += tick.orders as u64;
        if tick.orders > 0 {
            self.ticks_with_orders += 1;
        }
        self.warm_instrument_ticks += tick.warm as u64;
        self.cold_instrument_ticks += tick.cold as u64;
        if tick.state_reset {
            self.state_resets += 1;
        }
    }
}
