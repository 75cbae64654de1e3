//! Configuration module for Paddock
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PADDOCK_*)
//! 3. Project config (./paddock.toml)
//! 4. User config ($XDG_CONFIG_HOME/paddock/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{parse_with_warnings, ConfigError, ConfigWarning};
pub use types::{
    Config, LoggingConfig, NamingConfig, RepairConfig, StoreConfig, TransactionsConfig,
};
