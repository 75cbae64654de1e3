//! In-memory store
//!
//! Mutex-guarded tables. Each transaction copies the tables, runs against the
//! copy and swaps it in on success, so transactions are fully serialized and
//! a failed one leaves no trace.
//!
//! Commit failures can be injected with [`InMemoryStore::fail_next_commits`]
//! to exercise the retry path.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::domain::entities::{Account, Cow};
use crate::domain::ports::{FarmStore, StoreError, StoreTransaction};
use crate::error::{PaddockError, PaddockResult};

use super::snapshot::StoreSnapshot;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<StoreSnapshot>,
    failpoints: Mutex<VecDeque<StoreError>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the committed tables
    pub fn snapshot(&self) -> StoreSnapshot {
        match self.tables.lock() {
            Ok(tables) => tables.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Make the next commits fail with these errors, in order
    pub fn fail_next_commits(&self, errors: Vec<StoreError>) {
        if let Ok(mut failpoints) = self.failpoints.lock() {
            failpoints.extend(errors);
        }
    }

    /// Insert an account row in its own transaction.
    ///
    /// Accounts are created by the identity side of the system; this is the
    /// hook for that side (and for tests) to register them.
    pub fn seed_account(&self, account: Account) -> PaddockResult<()> {
        self.transaction(|tx| Ok(tx.insert_account(account)?))
    }

    /// Insert a cow row in its own transaction
    pub fn seed_cow(&self, cow: Cow) -> PaddockResult<()> {
        self.transaction(|tx| Ok(tx.insert_cow(cow)?))
    }

    fn lock_tables(&self) -> PaddockResult<MutexGuard<'_, StoreSnapshot>> {
        self.tables.lock().map_err(|e| {
            PaddockError::Store(StoreError::Unavailable {
                message: format!("lock poisoned: {}", e),
            })
        })
    }

    fn next_failpoint(&self) -> Option<StoreError> {
        self.failpoints.lock().ok().and_then(|mut f| f.pop_front())
    }
}

impl FarmStore for InMemoryStore {
    fn transaction<T, F>(&self, work: F) -> PaddockResult<T>
    where
        F: FnOnce(&mut dyn StoreTransaction) -> PaddockResult<T>,
    {
        let mut tables = self.lock_tables()?;
        let mut working = tables.clone();

        let value = work(&mut working)?;

        if let Some(err) = self.next_failpoint() {
            debug!(error = %err, "injected commit failure");
            return Err(err.into());
        }

        *tables = working;
        Ok(value)
    }
}
