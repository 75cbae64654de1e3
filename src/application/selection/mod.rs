//! Farm Selection
//!
//! The per-account "currently viewing" marker on farms. Each call replaces
//! the whole selection set of the acting account.

mod use_case;

pub use use_case::FarmSelectionEngine;
