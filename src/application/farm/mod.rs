//! Farm Lifecycle
//!
//! Creation, renaming, relocation and deletion of farms.
//!
//! ## Structure
//!
//! - `options` - Request types (`FarmDraft`)
//! - `result` - Result types (`FarmDeletion`)
//! - `use_case` - Core use case logic (`FarmLifecycleManager`)

mod options;
mod result;
mod use_case;

pub use options::FarmDraft;
pub use result::FarmDeletion;
pub use use_case::FarmLifecycleManager;
