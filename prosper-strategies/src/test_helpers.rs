//! Test helpers for building strategy contexts
//!
//! Book and tick builders live in `prosper_core::testing`; these only
//! assemble the borrowed context a strategy sees.

#[cfg(test)]
use prosper_core::core::Quantity;
#[cfg(test)]
use prosper_core::data::BookSnapshot;
#[cfg(test)]
use prosper_core::engine::StrategyContext;
#[cfg(test)]
use prosper_core::estimator::FairValues;

/// Context for one instrument with explicit position and limit
#[cfg(test)]
pub fn ctx_for<'a>(
    symbol: &'a str,
    book: &'a BookSnapshot,
    position: Quantity,
    position_limit: Quantity,
    history: &'a [f64],
    fair_values: &'a FairValues,
) -> StrategyContext<'a> {
    StrategyContext {
        symbol,
        book,
        position,
        position_limit,
        history,
        fair_values,
    }
}

/// Flat position, limit 50
#[cfg(test)]
pub fn flat_ctx<'a>(
    symbol: &'a str,
    book: &'a BookSnapshot,
    history: &'a [f64],
    fair_values: &'a FairValues,
) -> StrategyContext<'a> {
    ctx_for(symbol, book, 0, 50, history, fair_values)
}
