//! Opaque identity tokens
//!
//! Tokens are generated outside the domain (see `ports::TokenGenerator`) and
//! compared by value only. Each record kind gets its own newtype so a farm
//! token can never be passed where a fence token is expected.

use serde::{Deserialize, Serialize};

macro_rules! opaque_token {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

opaque_token!(
    /// Identifies an account (farmer, or developer acting as owner)
    AccountToken
);

opaque_token!(
    /// Identifies a farm
    FarmToken
);

opaque_token!(
    /// Identifies a fence
    FenceToken
);

opaque_token!(
    /// Identifies a cow
    CowToken
);
