//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, policies, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Opens exactly one unit of work per operation
//!
//! ## Use Cases
//!
//! - `FarmLifecycleManager` - Create, rename, relocate, delete and list farms
//! - `FenceLifecycleManager` - Draw, rename, delete and list fences
//! - `FenceActivationEngine` - Explicit fence selection and the repair pass
//! - `FarmSelectionEngine` - Per-account farm selection
//!
//! - `AccountRegistry` - Register owning accounts
//!
//! ## Services
//!
//! - `OwnershipResolver` - Acting account to `{owner, developer}`
//! - `atomically` - Transactional unit of work with whole-operation retry

pub mod accounts;
pub mod activation;
pub mod farm;
pub mod fence;
pub mod ownership;
pub mod selection;
pub mod settings;
pub mod unit_of_work;

#[cfg(test)]
pub(crate) mod testing;

pub use accounts::AccountRegistry;
pub use activation::{FenceActivationEngine, RepairReport};
pub use farm::{FarmDeletion, FarmDraft, FarmLifecycleManager};
pub use fence::{FenceCreation, FenceDraft, FenceLifecycleManager};
pub use ownership::{FenceOwnership, OwnershipResolver};
pub use selection::FarmSelectionEngine;
pub use settings::EngineSettings;
pub use unit_of_work::atomically;
