//! Cow entity
//!
//! Cows are written by the livestock-ingestion side. The only mutation made
//! here is clearing or moving the farm reference when a farm is deleted.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AccountToken, CowToken, FarmToken};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cow {
    pub token: CowToken,
    pub owner: AccountToken,
    pub farm: Option<FarmToken>,
}

impl Cow {
    pub fn new(token: CowToken, owner: AccountToken, farm: Option<FarmToken>) -> Self {
        Self { token, owner, farm }
    }
}
