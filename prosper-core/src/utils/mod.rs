pub mod logger;

pub use logger::{init_from_config, init_logger};
