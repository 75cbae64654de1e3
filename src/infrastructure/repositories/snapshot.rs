//! Store snapshot
//!
//! Plain tables shared by the in-memory and JSON-file stores. A transaction
//! runs against a private copy of a snapshot; the copy replaces the original
//! only on commit. Constraint checks happen at the statement that would break
//! them, the way a relational engine with immediate constraints behaves.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Account, Cow, Farm, Fence};
use crate::domain::ports::{StoreError, StoreResult, StoreTransaction};
use crate::domain::value_objects::{AccountToken, CowToken, EntityKind, FarmToken, FenceToken};

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub version: u32,
    #[serde(default)]
    pub accounts: BTreeMap<AccountToken, Account>,
    #[serde(default)]
    pub farms: BTreeMap<FarmToken, Farm>,
    #[serde(default)]
    pub fences: BTreeMap<FenceToken, Fence>,
    #[serde(default)]
    pub cows: BTreeMap<CowToken, Cow>,
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            accounts: BTreeMap::new(),
            farms: BTreeMap::new(),
            fences: BTreeMap::new(),
            cows: BTreeMap::new(),
        }
    }
}

impl StoreSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    fn require_owner(&self, entity: EntityKind, owner: &AccountToken) -> StoreResult<()> {
        if self.accounts.contains_key(owner) {
            Ok(())
        } else {
            Err(StoreError::MissingReference {
                entity,
                target: EntityKind::Account,
                token: owner.to_string(),
            })
        }
    }

    fn check_farm_name(&self, farm: &Farm) -> StoreResult<()> {
        let clash = self
            .farms
            .values()
            .any(|f| f.token != farm.token && f.owner == farm.owner && f.name == farm.name);
        if clash {
            return Err(StoreError::UniqueViolation {
                entity: EntityKind::Farm,
                owner: farm.owner.to_string(),
                name: farm.name.clone(),
            });
        }
        Ok(())
    }

    fn check_fence_name(&self, fence: &Fence) -> StoreResult<()> {
        let clash = self
            .fences
            .values()
            .any(|f| f.token != fence.token && f.owner == fence.owner && f.name == fence.name);
        if clash {
            return Err(StoreError::UniqueViolation {
                entity: EntityKind::Fence,
                owner: fence.owner.to_string(),
                name: fence.name.clone(),
            });
        }
        Ok(())
    }
}

fn duplicate(entity: EntityKind, token: impl ToString) -> StoreError {
    StoreError::DuplicateKey {
        entity,
        token: token.to_string(),
    }
}

fn missing_row(entity: EntityKind, token: impl ToString) -> StoreError {
    StoreError::MissingRow {
        entity,
        token: token.to_string(),
    }
}

impl StoreTransaction for StoreSnapshot {
    fn account(&self, token: &AccountToken) -> StoreResult<Option<Account>> {
        Ok(self.accounts.get(token).cloned())
    }

    fn insert_account(&mut self, account: Account) -> StoreResult<()> {
        if self.accounts.contains_key(&account.token) {
            return Err(duplicate(EntityKind::Account, &account.token));
        }
        self.accounts.insert(account.token.clone(), account);
        Ok(())
    }

    fn update_account(&mut self, account: Account) -> StoreResult<()> {
        match self.accounts.get_mut(&account.token) {
            Some(row) => {
                *row = account;
                Ok(())
            }
            None => Err(missing_row(EntityKind::Account, &account.token)),
        }
    }

    fn farm(&self, token: &FarmToken) -> StoreResult<Option<Farm>> {
        Ok(self.farms.get(token).cloned())
    }

    fn farms(&self) -> StoreResult<Vec<Farm>> {
        Ok(self.farms.values().cloned().collect())
    }

    fn farms_owned_by(&self, owner: &AccountToken) -> StoreResult<Vec<Farm>> {
        Ok(self
            .farms
            .values()
            .filter(|f| &f.owner == owner)
            .cloned()
            .collect())
    }

    fn count_farms_owned_by(&self, owner: &AccountToken) -> StoreResult<usize> {
        Ok(self.farms.values().filter(|f| &f.owner == owner).count())
    }

    fn farm_name_taken(&self, owner: &AccountToken, name: &str) -> StoreResult<bool> {
        Ok(self
            .farms
            .values()
            .any(|f| &f.owner == owner && f.name == name))
    }

    fn insert_farm(&mut self, farm: Farm) -> StoreResult<()> {
        if self.farms.contains_key(&farm.token) {
            return Err(duplicate(EntityKind::Farm, &farm.token));
        }
        self.require_owner(EntityKind::Farm, &farm.owner)?;
        self.check_farm_name(&farm)?;
        self.farms.insert(farm.token.clone(), farm);
        Ok(())
    }

    fn update_farm(&mut self, farm: Farm) -> StoreResult<()> {
        if !self.farms.contains_key(&farm.token) {
            return Err(missing_row(EntityKind::Farm, &farm.token));
        }
        self.require_owner(EntityKind::Farm, &farm.owner)?;
        self.check_farm_name(&farm)?;
        self.farms.insert(farm.token.clone(), farm);
        Ok(())
    }

    fn delete_farm(&mut self, token: &FarmToken) -> StoreResult<Option<Farm>> {
        Ok(self.farms.remove(token))
    }

    fn fence(&self, token: &FenceToken) -> StoreResult<Option<Fence>> {
        Ok(self.fences.get(token).cloned())
    }

    fn fences(&self) -> StoreResult<Vec<Fence>> {
        Ok(self.fences.values().cloned().collect())
    }

    fn fences_owned_by(&self, owner: &AccountToken) -> StoreResult<Vec<Fence>> {
        Ok(self
            .fences
            .values()
            .filter(|f| &f.owner == owner)
            .cloned()
            .collect())
    }

    fn fences_on_farm(&self, farm: &FarmToken) -> StoreResult<Vec<Fence>> {
        Ok(self
            .fences
            .values()
            .filter(|f| f.is_on_farm(farm))
            .cloned()
            .collect())
    }

    fn count_fences_owned_by(&self, owner: &AccountToken) -> StoreResult<usize> {
        Ok(self.fences.values().filter(|f| &f.owner == owner).count())
    }

    fn fence_name_taken(&self, owner: &AccountToken, name: &str) -> StoreResult<bool> {
        Ok(self
            .fences
            .values()
            .any(|f| &f.owner == owner && f.name == name))
    }

    fn insert_fence(&mut self, fence: Fence) -> StoreResult<()> {
        if self.fences.contains_key(&fence.token) {
            return Err(duplicate(EntityKind::Fence, &fence.token));
        }
        self.require_owner(EntityKind::Fence, &fence.owner)?;
        self.check_fence_name(&fence)?;
        self.fences.insert(fence.token.clone(), fence);
        Ok(())
    }

    fn update_fence(&mut self, fence: Fence) -> StoreResult<()> {
        if !self.fences.contains_key(&fence.token) {
            return Err(missing_row(EntityKind::Fence, &fence.token));
        }
        self.require_owner(EntityKind::Fence, &fence.owner)?;
        self.check_fence_name(&fence)?;
        self.fences.insert(fence.token.clone(), fence);
        Ok(())
    }

    fn delete_fence(&mut self, token: &FenceToken) -> StoreResult<Option<Fence>> {
        Ok(self.fences.remove(token))
    }

    fn cow(&self, token: &CowToken) -> StoreResult<Option<Cow>> {
        Ok(self.cows.get(token).cloned())
    }

    fn cows_on_farm(&self, farm: &FarmToken) -> StoreResult<Vec<Cow>> {
        Ok(self
            .cows
            .values()
            .filter(|c| c.farm.as_ref() == Some(farm))
            .cloned()
            .collect())
    }

    fn insert_cow(&mut self, cow: Cow) -> StoreResult<()> {
        if self.cows.contains_key(&cow.token) {
            return Err(duplicate(EntityKind::Cow, &cow.token));
        }
        self.cows.insert(cow.token.clone(), cow);
        Ok(())
    }

    fn update_cow(&mut self, cow: Cow) -> StoreResult<()> {
        match self.cows.get_mut(&cow.token) {
            Some(row) => {
                *row = cow;
                Ok(())
            }
            None => Err(missing_row(EntityKind::Cow, &cow.token)),
        }
    }
}
