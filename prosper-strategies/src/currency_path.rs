//! Bounded currency-exchange search
//!
//! Given an N×N table of exchange rates (`rates[from][to]`), find the
//! sequence of exactly `hops` trades that starts and ends in the same
//! currency with the largest final amount. Trading a currency into itself
//! (rate 1 on the diagonal) counts as a hop.
//!
//! [`ExchangeTable::best_round_trip`] is a dynamic programme over
//! (hops taken, currency held), O(hops × N²). Since every rate is positive,
//! the best amount after `h + 1` trades ending in `d` always extends the best
//! amount after `h` trades ending in some `c`.
//! [`ExchangeTable::exhaustive_round_trip`] enumerates every path and is kept
//! as a cross-check.

use serde::Serialize;
use thiserror::Error;

/// Longest trade sequence either search accepts
pub const MAX_HOPS: usize = 10;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExchangeError {
    #[error("exchange table needs at least one currency")]
    Empty,

    #[error("expected {expected} rows of rates, got {actual}")]
    RowCount { expected: usize, actual: usize },

    #[error("row {row} has {actual} rates, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("rate {from} -> {to} is {rate}, must be finite and positive")]
    BadRate { from: String, to: String, rate: f64 },

    #[error("duplicate currency name: {0}")]
    DuplicateName(String),
}

/// One conversion in a path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trade {
    pub from: usize,
    pub to: usize,
    pub rate: f64,
}

/// A complete round trip and its outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradePath {
    pub start: usize,
    pub amount_in: f64,
    pub amount_out: f64,
    pub trades: Vec<Trade>,
}

impl TradePath {
    /// `amount_out / amount_in`
    pub fn multiplier(&self) -> f64 {
        self.amount_out / self.amount_in
    }

    /// Currency indices visited, start and end included
    pub fn currencies(&self) -> Vec<usize> {
        std::iter::once(self.start)
            .chain(self.trades.iter().map(|t| t.to))
            .collect()
    }
}

/// Square table of positive exchange rates between named currencies
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeTable {
    names: Vec<String>,
    rates: Vec<Vec<f64>>,
}

impl ExchangeTable {
    pub fn new(names: Vec<String>, rates: Vec<Vec<f64>>) -> Result<Self, ExchangeError> {
        let n = names.len();
        if n == 0 {
            return Err(ExchangeError::Empty);
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(ExchangeError::DuplicateName(name.clone()));
            }
        }
        if rates.len() != n {
            return Err(ExchangeError::RowCount {
                expected: n,
                actual: rates.len(),
            });
        }
        for (row, line) in rates.iter().enumerate() {
            if line.len() != n {
                return Err(ExchangeError::RowLength {
                    row,
                    expected: n,
                    actual: line.len(),
                });
            }
            for (col, &rate) in line.iter().enumerate() {
                if !(rate.is_finite() && rate > 0.0) {
                    return Err(ExchangeError::BadRate {
                        from: names[row].clone(),
                        to: names[col].clone(),
                        rate,
                    });
                }
            }
        }
        Ok(Self { names, rates })
    }

    /// The island table: Snowballs, Pizza's, Silicon Nuggets, SeaShells
    pub fn island() -> Self {
        Self {
            names: ["Snowballs", "Pizza's", "Silicon Nuggets", "SeaShells"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            rates: vec![
                vec![1.0, 1.45, 0.52, 0.72],
                vec![0.7, 1.0, 0.31, 0.48],
                vec![1.95, 3.1, 1.0, 1.49],
                vec![1.34, 1.98, 0.64, 1.0],
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    #[inline]
    pub fn rate(&self, from: usize, to: usize) -> f64 {
        self.rates[from][to]
    }

    /// Best round trip of exactly `hops` trades from `start`
    ///
    /// `None` when `start` is out of range, `amount` is not finite, or `hops`
    /// exceeds [`MAX_HOPS`].
    pub fn best_round_trip(&self, start: usize, amount: f64, hops: usize) -> Option<TradePath> {
        if start >= self.len() || hops > MAX_HOPS || !amount.is_finite() {
            return None;
        }
        let n = self.len();

        // best[h][c]: largest amount holding `c` after `h` trades
        // prev[h][c]: currency held after `h - 1` trades on that best path
        let mut best = vec![vec![f64::NEG_INFINITY; n]; hops + 1];
        let mut prev = vec![vec![usize::MAX; n]; hops + 1];
        best[0][start] = amount;

        for h in 0..hops {
            for from in 0..n {
                let held = best[h][from];
                if held == f64::NEG_INFINITY {
                    continue;
                }
                for to in 0..n {
                    let next = held * self.rates[from][to];
                    if next > best[h + 1][to] {
                        best[h + 1][to] = next;
                        prev[h + 1][to] = from;
                    }
                }
            }
        }

        let mut trades = Vec::with_capacity(hops);
        let mut at = start;
        for h in (1..=hops).rev() {
            let from = prev[h][at];
            if from == usize::MAX {
                return None;
            }
            trades.push(Trade {
                from,
                to: at,
                rate: self.rates[from][at],
            });
            at = from;
        }
        trades.reverse();

        Some(TradePath {
            start,
            amount_in: amount,
            amount_out: best[hops][start],
            trades,
        })
    }

    /// Same result as [`best_round_trip`](Self::best_round_trip) by trying
    /// all N^(hops−1) interior paths
    pub fn exhaustive_round_trip(
        &self,
        start: usize,
        amount: f64,
        hops: usize,
    ) -> Option<TradePath> {
        if start >= self.len() || hops > MAX_HOPS || !amount.is_finite() {
            return None;
        }
        let mut best: Option<TradePath> = None;
        let mut path = Vec::with_capacity(hops);
        self.search(start, start, amount, amount, hops, &mut path, &mut best);
        best
    }

    #[allow(clippy::too_many_arguments)]
    fn search(
        &self,
        start: usize,
        at: usize,
        amount_in: f64,
        held: f64,
        remaining: usize,
        path: &mut Vec<Trade>,
        best: &mut Option<TradePath>,
    ) {
        if remaining == 0 {
            if at == start && best.as_ref().map_or(true, |b| held > b.amount_out) {
                *best = Some(TradePath {
                    start,
                    amount_in,
                    amount_out: held,
                    trades: path.clone(),
                });
            }
            return;
        }
        for to in 0..self.len() {
            let rate = self.rates[at][to];
            path.push(Trade { from: at, to, rate });
            self.search(start, to, amount_in, held * rate, remaining - 1, path, best);
            path.pop();
        }
    }
}
