//! Domain Policies
//!
//! Business rules expressed as pure functions over domain values.

mod activation_policy;
mod repair_policy;

pub use activation_policy::FencePlacement;
pub use repair_policy::{Recount, RepairPlan, RepairPolicy};
