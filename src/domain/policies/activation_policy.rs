//! Activation Policy
//!
//! Decides the `active` flag of a newly drawn fence. The deactivation of its
//! siblings is carried out by the activation engine inside the same
//! transaction; this policy only states the rule.

use crate::domain::value_objects::FarmToken;

/// Where a new fence lands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FencePlacement {
    /// Assigned to a farm: becomes the farm's only active fence
    OnFarm(FarmToken),
    /// Not assigned: inactive, since activity only means something per farm
    Unassigned,
}

impl FencePlacement {
    pub fn from_farm(farm: Option<FarmToken>) -> Self {
        match farm {
            Some(token) => FencePlacement::OnFarm(token),
            None => FencePlacement::Unassigned,
        }
    }

    pub fn initial_active(&self) -> bool {
        matches!(self, FencePlacement::OnFarm(_))
    }

    /// Whether existing fences of the farm must be switched off first
    pub fn deactivates_siblings(&self) -> bool {
        self.initial_active()
    }

    pub fn farm(&self) -> Option<&FarmToken> {
        match self {
            FencePlacement::OnFarm(token) => Some(token),
            FencePlacement::Unassigned => None,
        }
    }
}
