//! Fence Results

use serde::Serialize;

use crate::application::activation::RepairReport;
use crate::domain::entities::Fence;

/// Outcome of drawing a fence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FenceCreation {
    pub fence: Fence,
    /// What the repair pass run after the insert changed elsewhere
    pub repair: RepairReport,
}
