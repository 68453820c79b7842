//! Test helper utilities for creating test data and assertions
//!
//! Provides convenient builders and utilities for:
//! - Book construction
//! - Synthetic price paths
//! - Position-limit assertions

use crate::core::{Order, Price, Quantity};
use crate::data::{BookSnapshot, SnapshotBuilder};

/// Top-of-book snapshot with the same volume on both sides
pub fn create_test_book(bid: Price, ask: Price, volume: Quantity) -> BookSnapshot {
    SnapshotBuilder::new().bid(bid, volume).ask(ask, volume).build()
}

/// Book centred on `mid` with a one-tick half spread
pub fn create_book_around(mid: Price, volume: Quantity) -> BookSnapshot {
    create_test_book(mid - 1, mid + 1, volume)
}

/// `n` values starting at `start`, stepping by `step`
pub fn ramp(start: f64, step: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| start + step * i as f64).collect()
}

/// `n` copies of `value`
pub fn flat(value: f64, n: usize) -> Vec<f64> {
    vec![value; n]
}

/// Assert every order respects the long and short limits given the
/// pre-tick position, treating all orders for a symbol as filling together
pub fn assert_within_limits(orders: &[Order], position: Quantity, limit: Quantity) {
    let mut bought = 0;
    let mut sold = 0;
    for order in orders {
        assert!(order.quantity != 0, "zero-quantity order emitted: {}", order);
        if order.quantity > 0 {
            bought += order.quantity;
        } else {
            sold += -order.quantity;
        }
    }
    assert!(
        bought <= limit - position,
        "buys {} exceed headroom {} (position {}, limit {})",
        bought,
        limit - position,
        position,
        limit
    );
    assert!(
        sold <= position + limit,
        "sells {} exceed headroom {} (position {}, limit {})",
        sold,
        position + limit,
        position,
        limit
    );
}
