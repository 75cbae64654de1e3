//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Account` - Owning account row (farmer, or developer mirror)
//! - `Farm` - Land parcel with counters and a selection marker
//! - `Fence` - Boundary polygon, optionally assigned to a farm
//! - `Cow` - Livestock reference, touched only on farm deletion

mod account;
mod cow;
mod farm;
mod fence;

pub use account::Account;
pub use cow::Cow;
pub use farm::Farm;
pub use fence::Fence;
