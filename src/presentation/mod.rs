//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating engines with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command-line definition
//! - `factory` - Wires engines onto a store (dependency injection)
//! - `output` - Output rendering
//!
//! ## Usage
//!
//! ```ignore
//! use paddock::presentation::factory;
//!
//! let engines = factory::create_file_engines(&config, None);
//! let farms = engines.farms.list(&acting)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{AccountCommands, Cli, Commands, FarmCommands, FenceCommands};
pub use factory::{create_engines, create_file_engines, create_memory_engines, Engines};
pub use output::OutputFormat;
