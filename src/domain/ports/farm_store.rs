//! FarmStore port - transactional persistence for accounts, farms, fences and cows
//!
//! The domain never talks to a database directly. Every logical operation
//! opens one transaction via [`FarmStore::transaction`] and issues its reads
//! and writes through the [`StoreTransaction`] handed to the closure. Nothing
//! becomes visible to other transactions unless the closure returns `Ok`.
//!
//! Implementations must enforce:
//! - primary-key uniqueness for every record kind
//! - a unique index on `(owner, name)` for farms, and separately for fences
//! - that a farm or fence owner exists in the account table
//!
//! Fence-to-farm references are intentionally not enforced: deleting a farm
//! may leave fences pointing at a token that no longer exists.

use crate::domain::entities::{Account, Cow, Farm, Fence};
use crate::domain::value_objects::{AccountToken, CowToken, EntityKind, FarmToken, FenceToken};
use crate::error::PaddockResult;

/// Result type for raw storage calls
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-level failures
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("unique index violated: {entity} named '{name}' already exists for owner '{owner}'")]
    UniqueViolation {
        entity: EntityKind,
        owner: String,
        name: String,
    },

    #[error("duplicate key: {entity} '{token}' already exists")]
    DuplicateKey { entity: EntityKind, token: String },

    #[error("{entity} references missing {target} '{token}'")]
    MissingReference {
        entity: EntityKind,
        target: EntityKind,
        token: String,
    },

    #[error("no {entity} row '{token}' to update")]
    MissingRow { entity: EntityKind, token: String },

    #[error("transaction conflict: {message}")]
    Serialization { message: String },

    #[error("store unavailable: {message}")]
    Unavailable { message: String },
}

impl StoreError {
    /// Failures caused by timing rather than by the data itself
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            StoreError::Serialization { .. } | StoreError::Unavailable { .. }
        )
    }

    /// Failures worth re-running the whole operation for.
    ///
    /// A unique-index hit at commit time means a concurrent writer took the
    /// name after we checked it; a fresh run will check again.
    pub fn is_retryable(&self) -> bool {
        self.is_transient() || matches!(self, StoreError::UniqueViolation { .. })
    }
}

/// Reads and writes available inside one transaction
pub trait StoreTransaction {
    // Accounts
    fn account(&self, token: &AccountToken) -> StoreResult<Option<Account>>;
    fn insert_account(&mut self, account: Account) -> StoreResult<()>;
    fn update_account(&mut self, account: Account) -> StoreResult<()>;

    // Farms
    fn farm(&self, token: &FarmToken) -> StoreResult<Option<Farm>>;
    fn farms(&self) -> StoreResult<Vec<Farm>>;
    fn farms_owned_by(&self, owner: &AccountToken) -> StoreResult<Vec<Farm>>;
    fn count_farms_owned_by(&self, owner: &AccountToken) -> StoreResult<usize>;
    fn farm_name_taken(&self, owner: &AccountToken, name: &str) -> StoreResult<bool>;
    fn insert_farm(&mut self, farm: Farm) -> StoreResult<()>;
    fn update_farm(&mut self, farm: Farm) -> StoreResult<()>;
    fn delete_farm(&mut self, token: &FarmToken) -> StoreResult<Option<Farm>>;

    // Fences
    fn fence(&self, token: &FenceToken) -> StoreResult<Option<Fence>>;
    fn fences(&self) -> StoreResult<Vec<Fence>>;
    fn fences_owned_by(&self, owner: &AccountToken) -> StoreResult<Vec<Fence>>;
    fn fences_on_farm(&self, farm: &FarmToken) -> StoreResult<Vec<Fence>>;
    fn count_fences_owned_by(&self, owner: &AccountToken) -> StoreResult<usize>;
    fn fence_name_taken(&self, owner: &AccountToken, name: &str) -> StoreResult<bool>;
    fn insert_fence(&mut self, fence: Fence) -> StoreResult<()>;
    fn update_fence(&mut self, fence: Fence) -> StoreResult<()>;
    fn delete_fence(&mut self, token: &FenceToken) -> StoreResult<Option<Fence>>;

    // Cows
    fn cow(&self, token: &CowToken) -> StoreResult<Option<Cow>>;
    fn cows_on_farm(&self, farm: &FarmToken) -> StoreResult<Vec<Cow>>;
    fn insert_cow(&mut self, cow: Cow) -> StoreResult<()>;
    fn update_cow(&mut self, cow: Cow) -> StoreResult<()>;
}

/// Abstract transactional store
///
/// Implemented by the infrastructure layer.
pub trait FarmStore: Send + Sync {
    /// Run `work` as a single atomic unit.
    ///
    /// Writes made through the transaction are committed only if `work`
    /// returns `Ok`; an `Err` discards all of them.
    fn transaction<T, F>(&self, work: F) -> PaddockResult<T>
    where
        F: FnOnce(&mut dyn StoreTransaction) -> PaddockResult<T>;
}
