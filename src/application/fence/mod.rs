//! Fence Lifecycle
//!
//! Drawing, renaming, deleting and listing fences.
//!
//! ## Structure
//!
//! - `options` - Request types (`FenceDraft`)
//! - `result` - Result types (`FenceCreation`)
//! - `use_case` - Core use case logic (`FenceLifecycleManager`)

mod options;
mod result;
mod use_case;

pub use options::FenceDraft;
pub use result::FenceCreation;
pub use use_case::FenceLifecycleManager;
