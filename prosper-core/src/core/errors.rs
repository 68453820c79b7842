//! Domain-specific error types
//!
//! Nothing on the tick path returns these: a tick always produces a
//! (possibly empty) decision. They exist at the configuration boundary and
//! at the persisted-state boundary, where the engine downgrades them to
//! "start from empty history".

use thiserror::Error;

/// Errors raised while validating a [`Config`](crate::config::Config)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("history capacity must be positive")]
    ZeroHistoryCapacity,

    #[error("fair value minimum sample size must be positive")]
    ZeroFairValueSamples,

    #[error("no instruments configured")]
    NoInstruments,

    #[error("instrument {symbol} configured more than once")]
    DuplicateSymbol { symbol: String },

    #[error("instrument {symbol} has negative position limit {limit}")]
    NegativeLimit { symbol: String, limit: i64 },

    #[error("{symbol}: window of {window} entries exceeds history capacity {capacity}")]
    WindowExceedsCapacity {
        symbol: String,
        window: usize,
        capacity: usize,
    },

    #[error("{symbol}: min_samples {min_samples} is below the {required} entries its windows need")]
    MinSamplesTooSmall {
        symbol: String,
        min_samples: usize,
        required: usize,
    },

    #[error("{symbol}: {reason}")]
    InvalidParameter { symbol: String, reason: String },

    #[error("invalid log level '{level}', must be one of trace, debug, info, warn, error")]
    InvalidLogLevel { level: String },

    #[error("basket {basket} has no components")]
    EmptyBasket { basket: String },

    #[error("basket {basket}: component {component} has zero weight")]
    ZeroWeight { basket: String, component: String },

    #[error("basket {basket}: component {component} is the basket itself")]
    SelfReferentialBasket { basket: String, component: String },
}

/// Errors decoding or encoding the persisted state blob
#[derive(Debug, Error)]
pub enum StateError {
    #[error("persisted state is not valid JSON for the expected layout: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode state: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("persisted history for {symbol} contains a non-finite price")]
    NonFinite { symbol: String },
}
