//! Farm Results

use serde::Serialize;

use crate::domain::entities::Farm;
use crate::domain::value_objects::FarmToken;

/// Outcome of a farm deletion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FarmDeletion {
    /// The removed row as it was just before deletion
    pub farm: Farm,
    /// Farm that received the cows, if a transfer was requested
    pub transferred_to: Option<FarmToken>,
    /// Cows that were reassigned or released
    pub cows: usize,
}

impl FarmDeletion {
    /// Cows left without a farm
    pub fn cows_released(&self) -> usize {
        if self.transferred_to.is_some() {
            0
        } else {
            self.cows
        }
    }

    /// Cows moved to the transfer target
    pub fn cows_moved(&self) -> usize {
        self.cows - self.cows_released()
    }
}
