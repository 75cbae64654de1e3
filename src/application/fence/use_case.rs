//! Fence Lifecycle Manager
//!
//! Creating a fence on a farm switches the farm's other fences off and the
//! new one on, bumps the farm's fence counter and finishes with the repair
//! pass, all in one transaction. Deleting a fence only decrements the
//! counter; no sibling is re-activated.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::activation::{deactivate_farm_fences, repair_in};
use crate::application::ownership::OwnershipResolver;
use crate::application::settings::EngineSettings;
use crate::application::unit_of_work::atomically;
use crate::domain::entities::Fence;
use crate::domain::policies::FencePlacement;
use crate::domain::ports::{Clock, FarmStore, StoreError, StoreTransaction, TokenGenerator};
use crate::domain::services::{area, NameAllocator, MIN_BOUNDARY_POINTS};
use crate::domain::value_objects::{ActingAccount, EntityKind, FarmToken, FenceToken};
use crate::error::{PaddockError, PaddockResult};

use super::options::FenceDraft;
use super::result::FenceCreation;

pub struct FenceLifecycleManager<S: FarmStore> {
    store: Arc<S>,
    tokens: Arc<dyn TokenGenerator>,
    clock: Arc<dyn Clock>,
    resolver: OwnershipResolver,
    names: NameAllocator,
    settings: EngineSettings,
}

impl<S: FarmStore> FenceLifecycleManager<S> {
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
            names: NameAllocator::new(settings.fence_prefix.clone()),
            settings,
        }
    }

    /// Draw a fence.
    ///
    /// The fence belongs to the target farm's owner when a farm is given,
    /// otherwise to the acting farmer.
    pub fn create(
        &self,
        acting: &ActingAccount,
        draft: &FenceDraft,
    ) -> PaddockResult<FenceCreation> {
        if draft.boundary.len() < MIN_BOUNDARY_POINTS {
            return Err(PaddockError::invalid(format!(
                "a fence boundary needs at least {} points, got {}",
                MIN_BOUNDARY_POINTS,
                draft.boundary.len()
            )));
        }
        let enclosed = area(&draft.boundary);
        if !enclosed.is_finite() {
            return Err(PaddockError::invalid(
                "fence boundary is out of range: its area is not a finite number",
            ));
        }

        let creation = atomically(
            self.store.as_ref(),
            self.settings.max_attempts,
            "fence.create",
            |tx| {
                let resolved = self
                    .resolver
                    .resolve_fence_owner(tx, acting, draft.farm.as_ref())?;
                let owner = resolved.ownership.owner.clone();

                let sequence = tx.count_fences_owned_by(&owner)?;
                let name = self
                    .names
                    .allocate(&draft.name, sequence, draft.auto_rename, |candidate| {
                        Ok(tx.fence_name_taken(&owner, candidate)?)
                    })?
                    .into_name(EntityKind::Fence)?;

                let placement = FencePlacement::from_farm(draft.farm.clone());
                if placement.deactivates_siblings() {
                    if let Some(farm) = placement.farm() {
                        let switched = deactivate_farm_fences(tx, farm)?;
                        debug!(farm = %farm, switched, "switched off sibling fences");
                    }
                }

                let fence = Fence {
                    token: self.tokens.fence_token(),
                    name,
                    owner: resolved.ownership.owner,
                    developer: resolved.ownership.developer,
                    farm: placement.farm().cloned(),
                    boundary: draft.boundary.clone(),
                    area: enclosed,
                    active: placement.initial_active(),
                    created_at: self.clock.now(),
                };
                tx.insert_fence(fence.clone())?;

                if let Some(mut farm) = resolved.farm {
                    farm.fence_count += 1;
                    tx.update_farm(farm)?;
                }

                let repair = repair_in(tx, self.settings.repair)?;
                Ok(FenceCreation { fence, repair })
            },
        )?;

        info!(
            fence = %creation.fence.token,
            name = %creation.fence.name,
            farm = ?creation.fence.farm.as_ref().map(FarmToken::as_str),
            active = creation.fence.active,
            "fence created"
        );
        Ok(creation)
    }

    /// Rename an owned fence. Same contract as farm renaming.
    pub fn rename(
        &self,
        acting: &ActingAccount,
        fence: &FenceToken,
        name: &str,
    ) -> PaddockResult<Fence> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PaddockError::invalid("fence name must not be empty"));
        }

        let renamed = atomically(
            self.store.as_ref(),
            self.settings.max_attempts,
            "fence.rename",
            |tx| {
                let mut row = owned_fence(tx, acting, fence)?;
                if row.name == name {
                    return Ok(row);
                }
                row.name = name.to_string();
                match tx.update_fence(row.clone()) {
                    Ok(()) => Ok(row),
                    Err(StoreError::UniqueViolation { .. }) => {
                        let proposed = self.names.first_free_suffix(name, |candidate| {
                            Ok(tx.fence_name_taken(&row.owner, candidate)?)
                        })?;
                        Err(PaddockError::Conflict {
                            entity: EntityKind::Fence,
                            original: name.to_string(),
                            proposed,
                        })
                    }
                    Err(err) => Err(err.into()),
                }
            },
        )?;

        info!(fence = %renamed.token, name = %renamed.name, "fence renamed");
        Ok(renamed)
    }

    /// Delete an owned fence and return the removed row
    pub fn delete(&self, acting: &ActingAccount, fence: &FenceToken) -> PaddockResult<Fence> {
        let removed = atomically(
            self.store.as_ref(),
            self.settings.max_attempts,
            "fence.delete",
            |tx| {
                let row = owned_fence(tx, acting, fence)?;
                tx.delete_fence(fence)?;

                if let Some(token) = row.farm.as_ref() {
                    if let Some(mut farm) = tx.farm(token)? {
                        farm.fence_count = farm.fence_count.saturating_sub(1);
                        tx.update_farm(farm)?;
                    }
                }
                Ok(row)
            },
        )?;

        info!(
            fence = %removed.token,
            farm = ?removed.farm.as_ref().map(FarmToken::as_str),
            "fence deleted"
        );
        Ok(removed)
    }

    /// Fences owned by the acting account, by name, optionally only those on
    /// `farm`.
    ///
    /// With `repair_on_read` the repair pass runs first, in the same
    /// transaction.
    pub fn list(
        &self,
        acting: &ActingAccount,
        farm: Option<&FarmToken>,
    ) -> PaddockResult<Vec<Fence>> {
        atomically(
            self.store.as_ref(),
            self.settings.max_attempts,
            "fence.list",
            |tx| {
                if self.settings.repair_on_read {
                    repair_in(tx, self.settings.repair)?;
                }
                let mut fences: Vec<Fence> = tx
                    .fences_owned_by(&acting.token)?
                    .into_iter()
                    .filter(|f| farm.map_or(true, |token| f.is_on_farm(token)))
                    .collect();
                fences.sort_by(|a, b| a.name.cmp(&b.name));
                Ok(fences)
            },
        )
    }

    pub fn get(&self, acting: &ActingAccount, fence: &FenceToken) -> PaddockResult<Fence> {
        atomically(
            self.store.as_ref(),
            self.settings.max_attempts,
            "fence.get",
            |tx| owned_fence(tx, acting, fence),
        )
    }
}

fn owned_fence(
    tx: &mut dyn StoreTransaction,
    acting: &ActingAccount,
    fence: &FenceToken,
) -> PaddockResult<Fence> {
    tx.fence(fence)?
        .filter(|f| f.is_owned_by(&acting.token))
        .ok_or_else(|| PaddockError::not_found(EntityKind::Fence, fence.as_str()))
}
