//! Clock port
//!
//! Timestamps are record metadata only; no invariant depends on them.

use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
