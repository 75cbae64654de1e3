//! Error types for Paddock
//!
//! Uses `thiserror` for library errors. Every public operation reports one of
//! five outcomes to its caller: `NotFound`, `Conflict`, `InvalidInput`,
//! `IntegrityViolation` or `Unavailable`.

use thiserror::Error;

use crate::domain::ports::StoreError;
use crate::domain::value_objects::EntityKind;

/// Result type alias for Paddock operations
pub type PaddockResult<T> = Result<T, PaddockError>;

/// Main error type for Paddock operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaddockError {
    /// Target does not exist, or is owned by another account.
    /// The two cases are deliberately indistinguishable.
    #[error("{entity} '{token}' not found")]
    NotFound { entity: EntityKind, token: String },

    /// Name collision without automatic renaming; nothing was written
    #[error("{entity} name '{original}' is already taken; '{proposed}' is available")]
    Conflict {
        entity: EntityKind,
        original: String,
        proposed: String,
    },

    /// Malformed request, rejected before any mutation
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A referential or uniqueness rule could not be upheld
    #[error("integrity violation: {0}")]
    IntegrityViolation(String),

    /// Storage could not complete the transaction; safe to retry
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Raw storage failure raised inside a unit of work.
    ///
    /// `application::unit_of_work::atomically` converts this into
    /// `IntegrityViolation` or `Unavailable` before an operation returns.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl PaddockError {
    pub fn not_found(entity: EntityKind, token: impl Into<String>) -> Self {
        PaddockError::NotFound {
            entity,
            token: token.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        PaddockError::InvalidInput(message.into())
    }

    /// Whether the whole operation may be re-run from scratch
    pub fn is_retryable(&self) -> bool {
        match self {
            PaddockError::Unavailable(_) => true,
            PaddockError::Store(err) => err.is_retryable(),
            _ => false,
        }
    }

    /// Map a leftover storage error into the caller-facing taxonomy
    pub fn settle(self) -> Self {
        match self {
            PaddockError::Store(err) if err.is_transient() => {
                PaddockError::Unavailable(err.to_string())
            }
            PaddockError::Store(err) => PaddockError::IntegrityViolation(err.to_string()),
            other => other,
        }
    }
}
