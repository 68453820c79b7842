use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing logger
///
/// `RUST_LOG` wins over `log_level` when set. An unparseable `log_level` is
/// an error; calling this twice in one process is a no-op for the second
/// call.
pub fn init_logger(log_level: &str, json_logs: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .with_context(|| format!("Invalid log level '{}'", log_level))?;

    let result = if json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false))
            .try_init()
    };

    if let Err(e) = result {
        tracing::debug!("Logger already initialized: {}", e);
    }
    Ok(())
}

/// Initialize from the `[logging]` section of a config
pub fn init_from_config(config: &LoggingConfig) -> Result<()> {
    init_logger(&config.level, config.json)
}
