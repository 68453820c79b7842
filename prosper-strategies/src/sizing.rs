//! Bounded, liquidity-taking order sizing shared by every strategy
//!
//! A buy lifts the best ask for at most the visible ask volume and the room
//! left under the long limit. A sell hits the best bid for at most the
//! visible bid volume and the room left under the short limit. Nothing is
//! emitted when the bounded size is not positive.

use prosper_core::core::{Order, Quantity};
use prosper_core::engine::StrategyContext;

/// Largest buy the book and the long limit allow
#[inline]
pub fn buy_bound(ctx: &StrategyContext<'_>) -> Quantity {
    ctx.book.best_ask_volume().min(ctx.buy_capacity())
}

/// Largest sell the book and the short limit allow
#[inline]
pub fn sell_bound(ctx: &StrategyContext<'_>) -> Quantity {
    ctx.book.best_bid_volume().min(ctx.sell_capacity())
}

/// Buy `quantity` at the best ask, clamped to [`buy_bound`]
pub fn take_ask(ctx: &StrategyContext<'_>, quantity: Quantity) -> Option<Order> {
    let price = ctx.book.best_ask()?;
    let qty = quantity.min(buy_bound(ctx));
    (qty > 0).then(|| Order::buy(ctx.symbol, price, qty))
}

/// Sell `quantity` at the best bid, clamped to [`sell_bound`]
pub fn hit_bid(ctx: &StrategyContext<'_>, quantity: Quantity) -> Option<Order> {
    let price = ctx.book.best_bid()?;
    let qty = quantity.min(sell_bound(ctx));
    (qty > 0).then(|| Order::sell(ctx.symbol, price, qty))
}

/// Buy the whole bound at the best ask
#[inline]
pub fn take_all_ask(ctx: &StrategyContext<'_>) -> Option<Order> {
    take_ask(ctx, Quantity::MAX)
}

/// Sell the whole bound at the best bid
#[inline]
pub fn hit_all_bid(ctx: &StrategyContext<'_>) -> Option<Order> {
    hit_bid(ctx, Quantity::MAX)
}
