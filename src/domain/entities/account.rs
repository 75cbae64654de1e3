//! Account entity
//!
//! The owning-account row that farms and fences reference. Authentication
//! lives elsewhere; this record only exists so that every owned row points at
//! something real.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AccountToken, Role};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub token: AccountToken,
    pub role: Role,
    /// Managing developer, if any
    pub developer: Option<AccountToken>,
    /// Number of farms this account owns
    pub farm_count: u32,
    /// True for mirror rows materialized on behalf of a developer
    #[serde(default)]
    pub placeholder: bool,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn farmer(
        token: AccountToken,
        developer: Option<AccountToken>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            token,
            role: Role::Farmer,
            developer,
            farm_count: 0,
            placeholder: false,
            created_at,
        }
    }

    /// Minimal owner row standing in for a developer that owns farms itself.
    ///
    /// The developer link points back at the developer's own token.
    pub fn developer_mirror(token: AccountToken, created_at: DateTime<Utc>) -> Self {
        Self {
            developer: Some(token.clone()),
            token,
            role: Role::Developer,
            farm_count: 0,
            placeholder: true,
            created_at,
        }
    }
}
