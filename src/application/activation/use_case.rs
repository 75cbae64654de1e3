//! Fence Activation Engine
//!
//! Transitions of the per-farm `active` flags:
//! - create under a farm: siblings off, new fence on (see `FenceLifecycleManager`)
//! - explicit select with a farm: siblings off, fence moved there and on
//! - explicit select without a farm: fence on, siblings untouched
//! - delete: nothing, a farm may be left without an active fence
//! - repair: sole fence of a single-fence farm on

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::settings::EngineSettings;
use crate::application::unit_of_work::atomically;
use crate::domain::entities::Fence;
use crate::domain::policies::RepairPolicy;
use crate::domain::ports::{FarmStore, StoreError, StoreTransaction};
use crate::domain::value_objects::{ActingAccount, EntityKind, FarmToken, FenceToken};
use crate::error::{PaddockError, PaddockResult};

use super::report::RepairReport;

/// Switch off every active fence of `farm`. Returns how many were switched.
pub fn deactivate_farm_fences(
    tx: &mut dyn StoreTransaction,
    farm: &FarmToken,
) -> PaddockResult<usize> {
    let mut switched = 0;
    for mut fence in tx.fences_on_farm(farm)? {
        if fence.active {
            fence.active = false;
            tx.update_fence(fence)?;
            switched += 1;
        }
    }
    Ok(switched)
}

/// Run the repair pass inside an open transaction.
///
/// Idempotent: running it again over the result changes nothing.
pub fn repair_in(
    tx: &mut dyn StoreTransaction,
    policy: RepairPolicy,
) -> PaddockResult<RepairReport> {
    let plan = policy.plan(&tx.farms()?, &tx.fences()?);
    let mut report = RepairReport {
        orphans: plan.orphans.clone(),
        ..RepairReport::default()
    };
    if plan.is_empty() {
        debug!(orphans = report.orphans.len(), "repair pass found nothing to change");
        return Ok(report);
    }

    for token in plan.activate {
        let mut fence = load_fence(tx, &token)?;
        fence.active = true;
        tx.update_fence(fence)?;
        warn!(fence = %token, "activated sole fence of single-fence farm");
        report.activated.push(token);
    }

    for recount in plan.recount {
        let Some(mut farm) = tx.farm(&recount.farm)? else {
            continue;
        };
        farm.fence_count = recount.actual;
        tx.update_farm(farm)?;
        warn!(
            farm = %recount.farm,
            recorded = recount.recorded,
            actual = recount.actual,
            "corrected farm fence counter"
        );
        report.recounted.push(recount);
    }

    if plan.detach_orphans {
        for token in plan.orphans {
            let mut fence = load_fence(tx, &token)?;
            fence.farm = None;
            fence.active = false;
            tx.update_fence(fence)?;
            warn!(fence = %token, "detached fence from missing farm");
            report.detached.push(token);
        }
    }

    Ok(report)
}

fn load_fence(tx: &mut dyn StoreTransaction, token: &FenceToken) -> PaddockResult<Fence> {
    tx.fence(token)?.ok_or_else(|| {
        StoreError::MissingRow {
            entity: EntityKind::Fence,
            token: token.to_string(),
        }
        .into()
    })
}

/// Explicit fence selection and the repair pass as standalone operations
pub struct FenceActivationEngine<S: FarmStore> {
    store: Arc<S>,
    settings: EngineSettings,
}

impl<S: FarmStore> FenceActivationEngine<S> {
    pub fn new(store: Arc<S>, settings: EngineSettings) -> Self {
        Self { store, settings }
    }

    /// Make `fence` the active one.
    ///
    /// With `farm`, every fence of that farm is switched off first and the
    /// fence is moved onto it; the fence counters of both farms follow the
    /// move. Without `farm`, the fence is switched on where it is and its
    /// siblings keep their flags.
    pub fn select(
        &self,
        acting: &ActingAccount,
        fence: &FenceToken,
        farm: Option<&FarmToken>,
    ) -> PaddockResult<Fence> {
        let selected = atomically(
            self.store.as_ref(),
            self.settings.max_attempts,
            "fence.select",
            |tx| {
                let mut selected = tx
                    .fence(fence)?
                    .filter(|f| f.is_owned_by(&acting.token))
                    .ok_or_else(|| PaddockError::not_found(EntityKind::Fence, fence.as_str()))?;

                let Some(target) = farm else {
                    selected.active = true;
                    tx.update_fence(selected.clone())?;
                    return Ok(selected);
                };

                let mut target_farm = tx
                    .farm(target)?
                    .filter(|f| f.is_owned_by(&acting.token))
                    .ok_or_else(|| PaddockError::not_found(EntityKind::Farm, target.as_str()))?;

                deactivate_farm_fences(tx, target)?;

                if !selected.is_on_farm(target) {
                    if let Some(previous) = selected.farm.as_ref() {
                        if let Some(mut old) = tx.farm(previous)? {
                            old.fence_count = old.fence_count.saturating_sub(1);
                            tx.update_farm(old)?;
                        }
                    }
                    target_farm.fence_count += 1;
                    tx.update_farm(target_farm)?;
                    selected.farm = Some(target.clone());
                }

                selected.active = true;
                tx.update_fence(selected.clone())?;
                Ok(selected)
            },
        )?;

        info!(
            fence = %selected.token,
            farm = ?selected.farm.as_ref().map(FarmToken::as_str),
            "fence selected"
        );
        Ok(selected)
    }

    /// Run the repair pass over every farm in one transaction
    pub fn repair(&self) -> PaddockResult<RepairReport> {
        let policy = self.settings.repair;
        let report = atomically(
            self.store.as_ref(),
            self.settings.max_attempts,
            "fence.repair",
            |tx| repair_in(tx, policy),
        )?;
        if !report.orphans.is_empty() && report.detached.is_empty() {
            warn!(
                count = report.orphans.len(),
                "fences reference deleted farms; left in place"
            );
        }
        Ok(report)
    }
}
