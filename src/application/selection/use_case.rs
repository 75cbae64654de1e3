//! Farm Selection Engine

use std::sync::Arc;

use tracing::info;

use crate::application::settings::EngineSettings;
use crate::application::unit_of_work::atomically;
use crate::domain::entities::Farm;
use crate::domain::ports::{FarmStore, StoreTransaction};
use crate::domain::value_objects::{ActingAccount, FarmToken};
use crate::error::PaddockResult;

pub struct FarmSelectionEngine<S: FarmStore> {
    store: Arc<S>,
    settings: EngineSettings,
}

impl<S: FarmStore> FarmSelectionEngine<S> {
    pub fn new(store: Arc<S>, settings: EngineSettings) -> Self {
        Self { store, settings }
    }

    /// Select exactly `farm` among the acting account's farms.
    ///
    /// When `farm` is not owned by the caller every selection is still
    /// cleared and `None` is returned.
    pub fn select_one(
        &self,
        acting: &ActingAccount,
        farm: &FarmToken,
    ) -> PaddockResult<Option<Farm>> {
        let selected = atomically(
            self.store.as_ref(),
            self.settings.max_attempts,
            "farm.select",
            |tx| {
                let farms = tx.farms_owned_by(&acting.token)?;
                let mut selected = None;
                for row in farms {
                    if &row.token == farm {
                        selected = Some(set_selected(tx, row, true)?);
                    } else {
                        set_selected(tx, row, false)?;
                    }
                }
                Ok(selected)
            },
        )?;

        match &selected {
            Some(row) => info!(account = %acting.token, farm = %row.token, "farm selected"),
            None => info!(
                account = %acting.token,
                farm = %farm,
                "farm not owned; selection cleared"
            ),
        }
        Ok(selected)
    }

    /// Select every farm of the acting account
    pub fn select_all(&self, acting: &ActingAccount) -> PaddockResult<Vec<Farm>> {
        let selected = atomically(
            self.store.as_ref(),
            self.settings.max_attempts,
            "farm.select_all",
            |tx| {
                let farms = tx.farms_owned_by(&acting.token)?;
                let mut selected = Vec::with_capacity(farms.len());
                for row in farms {
                    selected.push(set_selected(tx, row, true)?);
                }
                selected.sort_by(|a, b| a.name.cmp(&b.name));
                Ok(selected)
            },
        )?;

        info!(account = %acting.token, count = selected.len(), "all farms selected");
        Ok(selected)
    }
}

fn set_selected(
    tx: &mut dyn StoreTransaction,
    mut farm: Farm,
    selected: bool,
) -> PaddockResult<Farm> {
    if farm.selected != selected {
        farm.selected = selected;
        tx.update_farm(farm.clone())?;
    }
    Ok(farm)
}
