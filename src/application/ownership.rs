//! Ownership resolution
//!
//! Turns the acting account into the `{owner, developer}` pair a new farm or
//! fence is stored under. All farmer/developer branching lives here so the
//! lifecycle managers never look at `Role` themselves.
//!
//! Runs inside the caller's transaction: the developer mirror row it may
//! create commits or rolls back together with the farm or fence that needs it.

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::{Account, Farm};
use crate::domain::ports::{Clock, StoreError, StoreTransaction};
use crate::domain::value_objects::{AccountToken, ActingAccount, EntityKind, FarmToken, Ownership};
use crate::error::{PaddockError, PaddockResult};

/// Ownership of a fence about to be drawn, plus the farm it lands on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceOwnership {
    pub ownership: Ownership,
    pub farm: Option<Farm>,
}

pub struct OwnershipResolver {
    clock: Arc<dyn Clock>,
}

impl OwnershipResolver {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Owner of a farm the acting account is creating.
    ///
    /// A developer owns its farms itself, through a mirror account row that is
    /// materialized on first use. A farmer owns them with whatever developer
    /// link its account row carries.
    pub fn resolve_farm_owner(
        &self,
        tx: &mut dyn StoreTransaction,
        acting: &ActingAccount,
    ) -> PaddockResult<Ownership> {
        if acting.role.is_developer() {
            self.ensure_developer_mirror(tx, &acting.token)?;
            return Ok(Ownership::new(
                acting.token.clone(),
                Some(acting.token.clone()),
            ));
        }

        let account = Self::farmer_account(tx, &acting.token)?;
        Ok(Ownership::new(account.token, account.developer))
    }

    /// Owner of a fence the acting account is drawing.
    ///
    /// With a target farm the fence always belongs to the farm's owner, no
    /// matter who draws it; the caller must be that owner or the farm's
    /// developer. Without one, only farmers may draw (free-standing fences
    /// belong to the farmer who drew them).
    pub fn resolve_fence_owner(
        &self,
        tx: &mut dyn StoreTransaction,
        acting: &ActingAccount,
        farm: Option<&FarmToken>,
    ) -> PaddockResult<FenceOwnership> {
        if let Some(token) = farm {
            let farm = tx
                .farm(token)?
                .filter(|f| f.is_managed_by(&acting.token))
                .ok_or_else(|| PaddockError::not_found(EntityKind::Farm, token.as_str()))?;
            return Ok(FenceOwnership {
                ownership: farm.ownership(),
                farm: Some(farm),
            });
        }

        if acting.role.is_developer() {
            return Err(PaddockError::invalid(
                "a developer must attach a new fence to a farm",
            ));
        }

        let account = Self::farmer_account(tx, &acting.token)?;
        Ok(FenceOwnership {
            ownership: Ownership::new(account.token, account.developer),
            farm: None,
        })
    }

    /// Make sure a developer has an owning account row.
    ///
    /// Idempotent: an existing row is returned untouched, and losing an insert
    /// race to a concurrent caller counts as success.
    pub fn ensure_developer_mirror(
        &self,
        tx: &mut dyn StoreTransaction,
        token: &AccountToken,
    ) -> PaddockResult<Account> {
        if let Some(existing) = tx.account(token)? {
            return Ok(existing);
        }

        let mirror = Account::developer_mirror(token.clone(), self.clock.now());
        match tx.insert_account(mirror.clone()) {
            Ok(()) => {
                info!(developer = %token, "materialized developer owner record");
                Ok(mirror)
            }
            Err(StoreError::DuplicateKey { .. }) => tx.account(token)?.ok_or_else(|| {
                PaddockError::IntegrityViolation(format!(
                    "developer owner record for '{}' vanished after insert race",
                    token
                ))
            }),
            Err(err) if err.is_transient() => Err(err.into()),
            Err(err) => Err(PaddockError::IntegrityViolation(format!(
                "could not create developer owner record for '{}': {}",
                token, err
            ))),
        }
    }

    fn farmer_account(
        tx: &mut dyn StoreTransaction,
        token: &AccountToken,
    ) -> PaddockResult<Account> {
        tx.account(token)?
            .ok_or_else(|| PaddockError::not_found(EntityKind::Account, token.as_str()))
    }
}
