//! Identity value objects
//!
//! `ActingAccount` is what the external identity provider hands us for every
//! request. `Ownership` is what `OwnershipResolver` turns it into: the
//! account a record belongs to plus its optional managing developer.

use serde::{Deserialize, Serialize};

use super::{AccountToken, Role};

/// The authenticated caller of an operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActingAccount {
    pub token: AccountToken,
    pub role: Role,
}

impl ActingAccount {
    pub fn new(token: impl Into<AccountToken>, role: Role) -> Self {
        Self {
            token: token.into(),
            role,
        }
    }

    pub fn farmer(token: impl Into<AccountToken>) -> Self {
        Self::new(token, Role::Farmer)
    }

    pub fn developer(token: impl Into<AccountToken>) -> Self {
        Self::new(token, Role::Developer)
    }
}

/// Effective owner/developer pair for a farm or fence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ownership {
    pub owner: AccountToken,
    pub developer: Option<AccountToken>,
}

impl Ownership {
    pub fn new(owner: AccountToken, developer: Option<AccountToken>) -> Self {
        Self { owner, developer }
    }
}

/// Kind of record, used in error messages and constraint reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Account,
    Farm,
    Fence,
    Cow,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Account => write!(f, "account"),
            EntityKind::Farm => write!(f, "farm"),
            EntityKind::Fence => write!(f, "fence"),
            EntityKind::Cow => write!(f, "cow"),
        }
    }
}
