//! Name allocation service
//!
//! Produces human-readable names that are unique per owner. The existence
//! check is supplied by the caller, normally a closure over the open store
//! transaction, so this service stays free of I/O.
//!
//! Rules:
//! - a blank name becomes `{prefix}{sequence + 1}`
//! - a free name is returned unchanged
//! - a taken name gets a two-digit suffix, `01` through `99`, first free wins
//! - with `auto_rename` off the suffixed name is only *proposed*

use crate::domain::value_objects::EntityKind;
use crate::error::{PaddockError, PaddockResult};

/// Highest suffix tried before giving up
pub const MAX_SUFFIX: u32 = 99;

/// Outcome of an allocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameAllocation {
    /// Ready to insert
    Available(String),
    /// `original` is taken and the caller did not ask for renaming
    Conflict { original: String, proposed: String },
}

impl NameAllocation {
    pub fn is_conflict(&self) -> bool {
        matches!(self, NameAllocation::Conflict { .. })
    }

    /// The name to insert, or a `Conflict` error naming `entity`
    pub fn into_name(self, entity: EntityKind) -> PaddockResult<String> {
        match self {
            NameAllocation::Available(name) => Ok(name),
            NameAllocation::Conflict { original, proposed } => Err(PaddockError::Conflict {
                entity,
                original,
                proposed,
            }),
        }
    }
}

/// Allocates names for one kind of record (farms or fences)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameAllocator {
    prefix: String,
}

impl NameAllocator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Name used when the caller leaves it blank
    pub fn default_name(&self, sequence: usize) -> String {
        format!("{}{}", self.prefix, sequence + 1)
    }

    /// Allocate a name.
    ///
    /// `sequence` is the owner's current number of records of this kind.
    pub fn allocate<F>(
        &self,
        desired: &str,
        sequence: usize,
        auto_rename: bool,
        mut exists: F,
    ) -> PaddockResult<NameAllocation>
    where
        F: FnMut(&str) -> PaddockResult<bool>,
    {
        let desired = if desired.trim().is_empty() {
            self.default_name(sequence)
        } else {
            desired.to_string()
        };

        if !exists(&desired)? {
            return Ok(NameAllocation::Available(desired));
        }

        let proposed = self.first_free_suffix(&desired, &mut exists)?;
        if auto_rename {
            Ok(NameAllocation::Available(proposed))
        } else {
            Ok(NameAllocation::Conflict {
                original: desired,
                proposed,
            })
        }
    }

    /// First `{base}NN` that `exists` reports as free
    pub fn first_free_suffix<F>(&self, base: &str, mut exists: F) -> PaddockResult<String>
    where
        F: FnMut(&str) -> PaddockResult<bool>,
    {
        for counter in 1..=MAX_SUFFIX {
            let candidate = format!("{}{:02}", base, counter);
            if !exists(&candidate)? {
                return Ok(candidate);
            }
        }
        Err(PaddockError::IntegrityViolation(format!(
            "no free name derived from '{}' after {} attempts",
            base, MAX_SUFFIX
        )))
    }
}
