//! Paddock - farm and fence consistency engine
//!
//! Keeps an account's farms and fences consistent: unique per-owner names
//! with automatic `prefixN` allocation, at most one active fence per farm,
//! transactional counters, farm selection and a repair pass that restores
//! the activation rule after the fact.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    AccountRegistry, EngineSettings, FarmDraft, FarmLifecycleManager, FarmSelectionEngine,
    FenceActivationEngine, FenceDraft, FenceLifecycleManager, RepairReport,
};
pub use config::Config;
pub use domain::entities::{Account, Cow, Farm, Fence};
pub use domain::services::{area, parse_points};
pub use domain::value_objects::{
    AccountToken, ActingAccount, CowToken, EntityKind, FarmToken, FenceToken, Point, Role,
};
pub use error::{PaddockError, PaddockResult};
