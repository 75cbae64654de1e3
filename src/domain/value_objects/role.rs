//! Account role value object
//!
//! - `Farmer`: owns farms directly
//! - `Developer`: manages farms on behalf of farmers, and may own farms itself

use serde::{Deserialize, Serialize};

/// Role of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Farmer,
    Developer,
}

impl Role {
    pub fn is_developer(&self) -> bool {
        matches!(self, Role::Developer)
    }

    pub fn is_farmer(&self) -> bool {
        matches!(self, Role::Farmer)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Farmer => write!(f, "farmer"),
            Role::Developer => write!(f, "developer"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "farmer" | "user" => Ok(Role::Farmer),
            "developer" | "dev" => Ok(Role::Developer),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}
