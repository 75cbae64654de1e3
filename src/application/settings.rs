//! Engine settings
//!
//! The subset of configuration the use cases need, decoupled from the TOML
//! layout so tests can build it directly.

use crate::config::Config;
use crate::domain::policies::RepairPolicy;

/// Knobs shared by the lifecycle and activation engines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// Default name prefix for farms ("farm1", "farm2", ...)
    pub farm_prefix: String,
    /// Default name prefix for fences
    pub fence_prefix: String,
    /// Attempts per operation before a retryable failure is reported
    pub max_attempts: u32,
    /// Run the repair pass before listing fences
    pub repair_on_read: bool,
    pub repair: RepairPolicy,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            farm_prefix: "farm".to_string(),
            fence_prefix: "fence".to_string(),
            max_attempts: 5,
            repair_on_read: true,
            repair: RepairPolicy::default(),
        }
    }
}

impl EngineSettings {
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn with_repair_on_read(mut self, enabled: bool) -> Self {
        self.repair_on_read = enabled;
        self
    }

    pub fn with_detach_orphans(mut self, enabled: bool) -> Self {
        self.repair.detach_orphans = enabled;
        self
    }
}

impl From<&Config> for EngineSettings {
    fn from(config: &Config) -> Self {
        Self {
            farm_prefix: config.naming.farm_prefix.clone(),
            fence_prefix: config.naming.fence_prefix.clone(),
            max_attempts: config.transactions.max_attempts,
            repair_on_read: config.repair.on_read,
            repair: RepairPolicy {
                detach_orphans: config.repair.detach_orphans,
            },
        }
    }
}
