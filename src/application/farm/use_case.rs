//! Farm Lifecycle Manager
//!
//! Every operation is one unit of work. Counter updates ride in the same
//! transaction as the row change that causes them.

use std::sync::Arc;

use tracing::info;

use crate::application::ownership::OwnershipResolver;
use crate::application::settings::EngineSettings;
use crate::application::unit_of_work::atomically;
use crate::domain::entities::Farm;
use crate::domain::ports::{Clock, FarmStore, StoreError, StoreTransaction, TokenGenerator};
use crate::domain::services::NameAllocator;
use crate::domain::value_objects::{AccountToken, ActingAccount, EntityKind, FarmToken};
use crate::error::{PaddockError, PaddockResult};

use super::options::FarmDraft;
use super::result::FarmDeletion;

pub struct FarmLifecycleManager<S: FarmStore> {
    store: Arc<S>,
    tokens: Arc<dyn TokenGenerator>,
    clock: Arc<dyn Clock>,
    resolver: OwnershipResolver,
    names: NameAllocator,
    settings: EngineSettings,
}

impl<S: FarmStore> FarmLifecycleManager<S> {
    pub fn new(
        store: Arc<S>,
        tokens: Arc<dyn TokenGenerator>,
        clock: Arc<dyn Clock>,
        settings: EngineSettings,
    ) -> Self {
        Self {
            store,
            tokens,
            resolver: OwnershipResolver::new(clock.clone()),
            clock,
            names: NameAllocator::new(settings.farm_prefix.clone()),
            settings,
        }
    }

    /// Create a farm owned by the acting account (or its developer mirror).
    ///
    /// A taken name yields `Conflict` unless `draft.auto_rename` is set.
    pub fn create(&self, acting: &ActingAccount, draft: &FarmDraft) -> PaddockResult<Farm> {
        let farm = atomically(
            self.store.as_ref(),
            self.settings.max_attempts,
            "farm.create",
            |tx| {
                let ownership = self.resolver.resolve_farm_owner(tx, acting)?;
                let owner = ownership.owner.clone();

                let sequence = tx.count_farms_owned_by(&owner)?;
                let name = self
                    .names
                    .allocate(&draft.name, sequence, draft.auto_rename, |candidate| {
                        Ok(tx.farm_name_taken(&owner, candidate)?)
                    })?
                    .into_name(EntityKind::Farm)?;

                let farm = Farm::new(
                    self.tokens.farm_token(),
                    name,
                    ownership,
                    draft.gps.clone(),
                    self.clock.now(),
                );
                tx.insert_farm(farm.clone())?;
                adjust_farm_count(tx, &owner, 1)?;
                Ok(farm)
            },
        )?;

        info!(farm = %farm.token, name = %farm.name, owner = %farm.owner, "farm created");
        Ok(farm)
    }

    /// Rename an owned farm.
    ///
    /// No existence check happens up front; if the unique `(owner, name)` index
    /// rejects the new name the caller gets `Conflict` with a free
    /// alternative and nothing is written.
    pub fn rename(
        &self,
        acting: &ActingAccount,
        farm: &FarmToken,
        name: &str,
    ) -> PaddockResult<Farm> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PaddockError::invalid("farm name must not be empty"));
        }

        let renamed = atomically(
            self.store.as_ref(),
            self.settings.max_attempts,
            "farm.rename",
            |tx| {
                let mut row = owned_farm(tx, acting, farm)?;
                if row.name == name {
                    return Ok(row);
                }
                row.name = name.to_string();
                match tx.update_farm(row.clone()) {
                    Ok(()) => Ok(row),
                    Err(StoreError::UniqueViolation { .. }) => {
                        let proposed = self.names.first_free_suffix(name, |candidate| {
                            Ok(tx.farm_name_taken(&row.owner, candidate)?)
                        })?;
                        Err(PaddockError::Conflict {
                            entity: EntityKind::Farm,
                            original: name.to_string(),
                            proposed,
                        })
                    }
                    Err(err) => Err(err.into()),
                }
            },
        )?;

        info!(farm = %renamed.token, name = %renamed.name, "farm renamed");
        Ok(renamed)
    }

    /// Replace the location descriptor of an owned farm
    pub fn update_location(
        &self,
        acting: &ActingAccount,
        farm: &FarmToken,
        gps: &str,
    ) -> PaddockResult<Farm> {
        atomically(
            self.store.as_ref(),
            self.settings.max_attempts,
            "farm.locate",
            |tx| {
                let mut row = owned_farm(tx, acting, farm)?;
                row.gps = gps.to_string();
                tx.update_farm(row.clone())?;
                Ok(row)
            },
        )
    }

    /// Delete an owned farm.
    ///
    /// Its cows move to `transfer_to` when given, otherwise they are left
    /// without a farm. Fences pointing at the farm are not touched; the
    /// repair pass reports them as orphans.
    pub fn delete(
        &self,
        acting: &ActingAccount,
        farm: &FarmToken,
        transfer_to: Option<&FarmToken>,
    ) -> PaddockResult<FarmDeletion> {
        if transfer_to == Some(farm) {
            return Err(PaddockError::invalid(
                "cannot transfer cows to the farm being deleted",
            ));
        }

        let deletion = atomically(
            self.store.as_ref(),
            self.settings.max_attempts,
            "farm.delete",
            |tx| {
                let row = owned_farm(tx, acting, farm)?;

                if let Some(target) = transfer_to {
                    let owned = tx
                        .farm(target)?
                        .is_some_and(|f| f.is_owned_by(&acting.token));
                    if !owned {
                        return Err(PaddockError::IntegrityViolation(format!(
                            "transfer target farm '{}' does not belong to '{}'",
                            target, acting.token
                        )));
                    }
                }

                let cows = tx.cows_on_farm(farm)?;
                let moved = cows.len();
                for mut cow in cows {
                    cow.farm = transfer_to.cloned();
                    tx.update_cow(cow)?;
                }

                tx.delete_farm(farm)?;
                adjust_farm_count(tx, &row.owner, -1)?;

                Ok(FarmDeletion {
                    farm: row,
                    transferred_to: transfer_to.cloned(),
                    cows: moved,
                })
            },
        )?;

        info!(
            farm = %farm,
            cows = deletion.cows,
            transferred_to = ?deletion.transferred_to.as_ref().map(FarmToken::as_str),
            "farm deleted"
        );
        Ok(deletion)
    }

    /// Farms owned by the acting account, by name
    pub fn list(&self, acting: &ActingAccount) -> PaddockResult<Vec<Farm>> {
        atomically(
            self.store.as_ref(),
            self.settings.max_attempts,
            "farm.list",
            |tx| {
                let mut farms = tx.farms_owned_by(&acting.token)?;
                farms.sort_by(|a, b| a.name.cmp(&b.name));
                Ok(farms)
            },
        )
    }

    pub fn get(&self, acting: &ActingAccount, farm: &FarmToken) -> PaddockResult<Farm> {
        atomically(
            self.store.as_ref(),
            self.settings.max_attempts,
            "farm.get",
            |tx| owned_farm(tx, acting, farm),
        )
    }
}

fn owned_farm(
    tx: &mut dyn StoreTransaction,
    acting: &ActingAccount,
    farm: &FarmToken,
) -> PaddockResult<Farm> {
    tx.farm(farm)?
        .filter(|f| f.is_owned_by(&acting.token))
        .ok_or_else(|| PaddockError::not_found(EntityKind::Farm, farm.as_str()))
}

fn adjust_farm_count(
    tx: &mut dyn StoreTransaction,
    owner: &AccountToken,
    delta: i32,
) -> PaddockResult<()> {
    let mut account = tx.account(owner)?.ok_or_else(|| {
        PaddockError::IntegrityViolation(format!("owner account '{}' is missing", owner))
    })?;
    account.farm_count = account.farm_count.saturating_add_signed(delta);
    tx.update_account(account)?;
    Ok(())
}
