//! Fence entity
//!
//! A polygon boundary optionally assigned to a farm. Among fences sharing a
//! farm at most one is `active`; that is the fence live cow positions are
//! evaluated against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AccountToken, FarmToken, FenceToken, Point};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fence {
    pub token: FenceToken,
    pub name: String,
    pub owner: AccountToken,
    pub developer: Option<AccountToken>,
    /// `None` for an unassigned fence
    pub farm: Option<FarmToken>,
    pub boundary: Vec<Point>,
    /// Cached at creation from `boundary`
    pub area: f64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Fence {
    pub fn is_owned_by(&self, account: &AccountToken) -> bool {
        &self.owner == account
    }

    pub fn is_on_farm(&self, farm: &FarmToken) -> bool {
        self.farm.as_ref() == Some(farm)
    }
}
