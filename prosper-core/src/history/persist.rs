//! Cross-tick persistence of the engine state
//!
//! The host stores whatever string we hand back and returns it verbatim on
//! the next tick. Layout:
//!
//! ```json
//! {"price_history": {"KELP": [2029.5, 2030.0], "JAM": [6541.0]}}
//! ```
//!
//! Loading is lossy by contract: a missing or undecodable blob yields an
//! empty state, never an error out of the tick.

use super::store::{PriceHistory, PriceHistoryStore};
use crate::core::{StateError, Symbol};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Wire form of [`EngineState`]
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedState {
    #[serde(default)]
    price_history: BTreeMap<Symbol, Vec<f64>>,
}

/// The only information that outlives a tick
///
/// Owned and mutated by exactly one tick at a time; moved in and out of
/// [`Engine::on_tick`](crate::engine::Engine::on_tick).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineState {
    pub history: PriceHistoryStore,
}

/// Result of [`EngineState::load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No blob was supplied (first tick)
    Fresh,
    /// Blob decoded successfully
    Restored,
    /// Blob was present but unusable; state reset to empty
    Reset,
}

impl EngineState {
    pub fn new(capacity: usize) -> Self {
        Self {
            history: PriceHistoryStore::new(capacity),
        }
    }

    /// Strict decode. Histories longer than `capacity` keep their newest
    /// entries.
    pub fn decode(blob: &str, capacity: usize) -> Result<Self, StateError> {
        let persisted: PersistedState = serde_json::from_str(blob).map_err(StateError::Decode)?;

        let mut history = PriceHistoryStore::new(capacity);
        for (symbol, prices) in persisted.price_history {
            if prices.iter().any(|p| !p.is_finite()) {
                return Err(StateError::NonFinite { symbol });
            }
            history.insert(symbol, PriceHistory::from_values(prices, capacity));
        }
        Ok(Self { history })
    }

    /// Lossy load used at the start of every tick
    pub fn load(blob: &str, capacity: usize) -> (Self, LoadOutcome) {
        if blob.trim().is_empty() {
            return (Self::new(capacity), LoadOutcome::Fresh);
        }
        match Self::decode(blob, capacity) {
            Ok(state) => (state, LoadOutcome::Restored),
            Err(e) => {
                warn!("Discarding persisted state, starting from empty history: {}", e);
                (Self::new(capacity), LoadOutcome::Reset)
            }
        }
    }

    pub fn encode(&self) -> Result<String, StateError> {
        let persisted = PersistedState {
            price_history: self
                .history
                .iter()
                .map(|(symbol, h)| (symbol.clone(), h.to_vec()))
                .collect(),
        };
        serde_json::to_string(&persisted).map_err(StateError::Encode)
    }
}
