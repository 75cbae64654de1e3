//! Transactional unit of work
//!
//! Every logical operation runs through [`atomically`]: one store
//! transaction, re-run from the top when the store reports a retryable
//! failure. Individual statements are never patched up or replayed on their
//! own.

use tracing::{debug, warn};

use crate::domain::ports::{FarmStore, StoreTransaction};
use crate::error::PaddockResult;

/// Run `work` as one transaction, retrying the whole closure on conflict.
///
/// `work` may run more than once, so it must derive everything it writes
/// from what it reads inside the transaction. Once attempts are exhausted,
/// or on a non-retryable failure, raw storage errors are converted into
/// `IntegrityViolation` or `Unavailable`.
pub fn atomically<S, T, F>(
    store: &S,
    max_attempts: u32,
    operation: &str,
    mut work: F,
) -> PaddockResult<T>
where
    S: FarmStore,
    F: FnMut(&mut dyn StoreTransaction) -> PaddockResult<T>,
{
    let attempts = max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match store.transaction(|tx| work(tx)) {
            Ok(value) => {
                debug!(operation, attempt, "transaction committed");
                return Ok(value);
            }
            Err(err) if err.is_retryable() && attempt < attempts => {
                warn!(operation, attempt, error = %err, "transaction failed, retrying");
                attempt += 1;
            }
            Err(err) => {
                if err.is_retryable() {
                    warn!(operation, attempts, error = %err, "transaction attempts exhausted");
                }
                return Err(err.settle());
            }
        }
    }
}
