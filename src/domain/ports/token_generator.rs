//! TokenGenerator port
//!
//! Supplies fresh opaque identifiers for new farms and fences. Collisions are
//! treated as impossible; callers never re-check.

use crate::domain::value_objects::{FarmToken, FenceToken};

pub trait TokenGenerator: Send + Sync {
    fn generate(&self) -> String;

    fn farm_token(&self) -> FarmToken {
        FarmToken::new(self.generate())
    }

    fn fence_token(&self) -> FenceToken {
        FenceToken::new(self.generate())
    }
}
