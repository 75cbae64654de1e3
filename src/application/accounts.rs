//! Account registration
//!
//! Owning-account rows normally arrive from the identity side of the
//! system. This is the entry point it (and the CLI) uses to register them.

use std::sync::Arc;

use tracing::info;

use crate::application::settings::EngineSettings;
use crate::application::unit_of_work::atomically;
use crate::domain::entities::Account;
use crate::domain::ports::{Clock, FarmStore, StoreError};
use crate::domain::value_objects::{AccountToken, EntityKind, Role};
use crate::error::{PaddockError, PaddockResult};

pub struct AccountRegistry<S: FarmStore> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
    settings: EngineSettings,
}

impl<S: FarmStore> AccountRegistry<S> {
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>, settings: EngineSettings) -> Self {
        Self {
            store,
            clock,
            settings,
        }
    }

    /// Register an account. An existing token is `InvalidInput`.
    pub fn register(
        &self,
        token: &AccountToken,
        role: Role,
        developer: Option<&AccountToken>,
    ) -> PaddockResult<Account> {
        if token.as_str().trim().is_empty() {
            return Err(PaddockError::invalid("account token must not be empty"));
        }

        let account = atomically(
            self.store.as_ref(),
            self.settings.max_attempts,
            "account.register",
            |tx| {
                let mut account =
                    Account::farmer(token.clone(), developer.cloned(), self.clock.now());
                account.role = role;
                match tx.insert_account(account.clone()) {
                    Ok(()) => Ok(account),
                    Err(StoreError::DuplicateKey { .. }) => Err(PaddockError::invalid(format!(
                        "account '{}' already exists",
                        token
                    ))),
                    Err(err) => Err(err.into()),
                }
            },
        )?;

        info!(account = %account.token, role = %account.role, "account registered");
        Ok(account)
    }

    pub fn get(&self, token: &AccountToken) -> PaddockResult<Account> {
        atomically(
            self.store.as_ref(),
            self.settings.max_attempts,
            "account.get",
            |tx| {
                tx.account(token)?
                    .ok_or_else(|| PaddockError::not_found(EntityKind::Account, token.as_str()))
            },
        )
    }
}
