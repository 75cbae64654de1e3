//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::loader::{self, ConfigError, ConfigWarning};

/// Default record names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    #[serde(default = "default_farm_prefix")]
    pub farm_prefix: String,

    #[serde(default = "default_fence_prefix")]
    pub fence_prefix: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            farm_prefix: default_farm_prefix(),
            fence_prefix: default_fence_prefix(),
        }
    }
}

fn default_farm_prefix() -> String {
    "farm".to_string()
}

fn default_fence_prefix() -> String {
    "fence".to_string()
}

/// Unit-of-work retry budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionsConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for TransactionsConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_max_attempts() -> u32 {
    5
}

/// Repair pass configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairConfig {
    /// Run the repair pass before every fence listing
    #[serde(default = "default_true")]
    pub on_read: bool,

    /// Detach fences whose farm was deleted
    #[serde(default)]
    pub detach_orphans: bool,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            on_read: true,
            detach_orphans: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Store location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("~/.paddock/store.json")
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "paddock=info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub transactions: TransactionsConfig,

    #[serde(default)]
    pub repair: RepairConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (PADDOCK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Store path with a leading `~` expanded
    pub fn store_path(&self) -> PathBuf {
        crate::infrastructure::expand_home(&self.store.path)
    }
}
