//! Per-tick fair-value table

use super::moving::simple_mean;
use crate::core::Symbol;
use crate::history::PriceHistoryStore;
use std::collections::BTreeMap;

/// Minimum retained history before an instrument gets a fair value
pub const DEFAULT_FAIR_VALUE_MIN_SAMPLES: usize = 5;

/// Full-window mean for every instrument with enough history
///
/// Built once per tick after the history update; strategies that price
/// off other instruments (baskets) read it, nothing writes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FairValues {
    values: BTreeMap<Symbol, f64>,
}

impl FairValues {
    pub fn estimate(store: &PriceHistoryStore, min_samples: usize) -> Self {
        let min_samples = min_samples.max(1);
        let values = store
            .iter()
            .filter(|(_, history)| history.len() >= min_samples)
            .filter_map(|(symbol, history)| {
                simple_mean(history.as_slice()).map(|fair| (symbol.clone(), fair))
            })
            .collect();
        Self { values }
    }

    #[inline]
    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.values.get(symbol).copied()
    }

    #[inline]
    pub fn contains(&self, symbol: &str) -> bool {
        self.values.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, f64)> {
        self.values.iter().map(|(s, v)| (s, *v))
    }
}

impl FromIterator<(Symbol, f64)> for FairValues {
    fn from_iter<I: IntoIterator<Item = (Symbol, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_only_warm_instruments_priced() {
        let mut store = PriceHistoryStore::new(100);
        for p in [10.0, 11.0, 12.0, 13.0, 14.0] {
            store.record("CROISSANT", p);
        }
        for p in [20.0, 21.0, 22.0, 23.0] {
            store.record("JAM", p);
        }

        let fair = FairValues::estimate(&store, 5);
        assert_relative_eq!(fair.get("CROISSANT").unwrap(), 12.0);
        assert_eq!(fair.get("JAM"), None);
        assert_eq!(fair.len(), 1);
    }

    #[test]
    fn test_from_iterator() {
        let fair: FairValues = [("JAM".to_string(), 20.0)].into_iter().collect();
        assert!(fair.contains("JAM"));
        assert!(!fair.is_empty());
    }
}
