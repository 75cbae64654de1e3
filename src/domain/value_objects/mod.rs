//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod identity;
mod point;
mod role;
mod token;

pub use identity::{ActingAccount, EntityKind, Ownership};
pub use point::Point;
pub use role::Role;
pub use token::{AccountToken, CowToken, FarmToken, FenceToken};
