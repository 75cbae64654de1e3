//! Token generators

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::domain::ports::TokenGenerator;

/// Random v4 UUIDs in simple (hyphen-free) form
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidTokenGenerator;

impl TokenGenerator for UuidTokenGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Predictable tokens `{prefix}-1`, `{prefix}-2`, ... for tests and demos
#[derive(Debug)]
pub struct SequentialTokens {
    prefix: String,
    next: AtomicU64,
}

impl SequentialTokens {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialTokens {
    fn default() -> Self {
        Self::new("t")
    }
}

impl TokenGenerator for SequentialTokens {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}
