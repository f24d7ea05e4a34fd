//! Configuration types
//!
//! Display wiring and timing, plus a parser for the `[display]` TOML table.

pub mod toml;
pub mod types;

pub use self::toml::{parse_config, ConfigError};
pub use types::*;
