//! Farm entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AccountToken, FarmToken, Ownership};

/// An owned land parcel with zero or more fences and cows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Farm {
    pub token: FarmToken,
    pub name: String,
    pub owner: AccountToken,
    pub developer: Option<AccountToken>,
    /// Opaque location descriptor, never interpreted here
    #[serde(default)]
    pub gps: String,
    /// "Currently viewing" marker, owned by the selection engine
    #[serde(default)]
    pub selected: bool,
    pub fence_count: u32,
    pub cow_count: u32,
    pub created_at: DateTime<Utc>,
}

impl Farm {
    pub fn new(
        token: FarmToken,
        name: String,
        ownership: Ownership,
        gps: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            token,
            name,
            owner: ownership.owner,
            developer: ownership.developer,
            gps,
            selected: false,
            fence_count: 0,
            cow_count: 0,
            created_at,
        }
    }

    pub fn ownership(&self) -> Ownership {
        Ownership::new(self.owner.clone(), self.developer.clone())
    }

    pub fn is_owned_by(&self, account: &AccountToken) -> bool {
        &self.owner == account
    }

    /// Owner or managing developer
    pub fn is_managed_by(&self, account: &AccountToken) -> bool {
        self.is_owned_by(account) || self.developer.as_ref() == Some(account)
    }
}
