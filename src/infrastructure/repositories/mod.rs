//! Store implementations
//!
//! - `InMemoryStore` - process-local tables, used by tests and embedding
//! - `JsonFileStore` - single JSON document guarded by a lock file

mod json;
mod memory;
mod snapshot;

pub use json::{expand_home, JsonFileStore};
pub use memory::InMemoryStore;
pub use snapshot::{StoreSnapshot, SNAPSHOT_VERSION};
