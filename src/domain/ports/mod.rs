//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod clock;
pub mod farm_store;
pub mod token_generator;

pub use clock::Clock;
pub use farm_store::{FarmStore, StoreError, StoreResult, StoreTransaction};
pub use token_generator::TokenGenerator;
