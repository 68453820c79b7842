//! Prosper Strategies - Liquidity-Taking Signal Strategies
//!
//! Every strategy here implements [`prosper_core::engine::Strategy`] and
//! shares one order policy ([`sizing`]): buys lift the best ask, sells hit
//! the best bid, and each order is clamped to both the visible volume and
//! the room left under the instrument's position limit.
//!
//! ## Available Strategies
//!
//! ### [`MeanReversion`]
//!
//! Trades back toward a moving-average fair value. The band is either a
//! fixed proportion of the fair value or `k` standard deviations of the
//! same window.
//!
//! ### [`Momentum`]
//!
//! Recent mean against the mean of the window just before it. Sizes the
//! whole bound, or scales it by the size of the gap.
//!
//! ### [`Crossover`]
//!
//! Two or three nested moving averages; trades only when they are strictly
//! ordered.
//!
//! ### [`Basket`]
//!
//! Prices a basket as the unit-weighted sum of its components' fair values
//! and trades the basket's own book outside a proportional band.
//!
//! ## Routing
//!
//! [`Desk`] is the closed enum the engine is instantiated with. Each
//! instrument's `StrategyConfig` becomes a `Desk` once, when the engine is
//! built:
//!
//! ```rust
//! use prosper_core::config::ConfigProfile;
//! use prosper_core::engine::Engine;
//! use prosper_strategies::Desk;
//!
//! let engine: Engine<Desk> = Engine::new(&ConfigProfile::round1()).unwrap();
//! assert_eq!(engine.routes().len(), 3);
//! ```
//!
//! ## Manual trading
//!
//! [`currency_path`] finds the most profitable fixed-length round trip
//! through a table of exchange rates.

pub mod basket;
pub mod crossover;
pub mod currency_path;
pub mod desk;
pub mod mean_reversion;
pub mod momentum;
pub mod sizing;

#[cfg(test)]
mod test_helpers;

pub use basket::{basket_fair_value, Basket};
pub use crossover::{trend, Crossover};
pub use currency_path::{ExchangeError, ExchangeTable, Trade, TradePath, MAX_HOPS};
pub use desk::Desk;
pub use mean_reversion::{MeanReversion, Threshold};
pub use momentum::Momentum;
