//! Fence Activation
//!
//! Keeps at most one fence active per farm.
//!
//! This module handles:
//! - Switching off a farm's fences before a new one is activated
//! - Explicit selection of a fence, optionally moving it to another farm
//! - The repair pass that activates the sole fence of single-fence farms

mod report;
mod use_case;

pub use report::RepairReport;
pub use use_case::{deactivate_farm_fences, repair_in, FenceActivationEngine};
