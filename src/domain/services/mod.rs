//! Domain Services
//!
//! Pure business logic services that operate on domain values.
//! These services have no I/O dependencies and are easily testable.

pub mod geometry;
mod name_allocator;

pub use geometry::{area, parse_points, MIN_BOUNDARY_POINTS};
pub use name_allocator::{NameAllocation, NameAllocator, MAX_SUFFIX};
