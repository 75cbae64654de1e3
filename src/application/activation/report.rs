//! Repair report

use serde::Serialize;

use crate::domain::policies::Recount;
use crate::domain::value_objects::FenceToken;

/// What a repair pass changed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepairReport {
    /// Sole fences of single-fence farms that were switched on
    pub activated: Vec<FenceToken>,
    /// Farm counters corrected to the live fence count
    pub recounted: Vec<Recount>,
    /// Fences pointing at a farm that no longer exists
    pub orphans: Vec<FenceToken>,
    /// Orphans that were detached from their missing farm
    pub detached: Vec<FenceToken>,
}

impl RepairReport {
    /// True when the pass found nothing to change
    pub fn is_clean(&self) -> bool {
        self.activated.is_empty() && self.recounted.is_empty() && self.detached.is_empty()
    }
}
