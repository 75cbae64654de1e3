//! Domain Layer
//!
//! The core of Paddock - farm/fence rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Account, Farm, Fence, Cow)
//! - `value_objects/` - Immutable value types (tokens, Role, Point, Ownership)
//! - `services/` - Domain services (geometry, NameAllocator)
//! - `policies/` - Business rules (FencePlacement, RepairPolicy)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches storage directly
//! 2. **Pure Functions** - Services and policies are stateless and testable
//! 3. **Ports & Adapters** - All persistence goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
