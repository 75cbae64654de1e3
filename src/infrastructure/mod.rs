//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `repositories/` - `FarmStore` implementations (in-memory, JSON file)
//! - `tokens` - `TokenGenerator` implementations
//! - `clock` - `Clock` implementations

pub mod clock;
pub mod repositories;
pub mod tokens;

pub use clock::{FixedClock, SystemClock};
pub use repositories::{expand_home, InMemoryStore, JsonFileStore, StoreSnapshot};
pub use tokens::{SequentialTokens, UuidTokenGenerator};
