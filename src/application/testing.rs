//! Shared fixtures for use case tests

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::domain::entities::{Account, Cow, Farm, Fence};
use crate::domain::value_objects::{AccountToken, ActingAccount, CowToken, FarmToken, Point};
use crate::infrastructure::{FixedClock, InMemoryStore, SequentialTokens, StoreSnapshot};

use super::{
    EngineSettings, FarmDraft, FarmLifecycleManager, FarmSelectionEngine, FenceActivationEngine,
    FenceDraft, FenceLifecycleManager,
};

/// Every engine wired to one in-memory store
pub struct Harness {
    pub store: Arc<InMemoryStore>,
    pub farms: FarmLifecycleManager<InMemoryStore>,
    pub fences: FenceLifecycleManager<InMemoryStore>,
    pub activation: FenceActivationEngine<InMemoryStore>,
    pub selection: FarmSelectionEngine<InMemoryStore>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_settings(EngineSettings::default())
    }

    pub fn with_settings(settings: EngineSettings) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let tokens = Arc::new(SequentialTokens::new("t"));
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
        ));
        Self {
            farms: FarmLifecycleManager::new(
                store.clone(),
                tokens.clone(),
                clock.clone(),
                settings.clone(),
            ),
            fences: FenceLifecycleManager::new(store.clone(), tokens, clock, settings.clone()),
            activation: FenceActivationEngine::new(store.clone(), settings.clone()),
            selection: FarmSelectionEngine::new(store.clone(), settings),
            store,
        }
    }

    /// Register a farmer account and act as it
    pub fn farmer(&self, token: &str) -> ActingAccount {
        self.store
            .seed_account(Account::farmer(AccountToken::new(token), None, Utc::now()))
            .unwrap();
        ActingAccount::farmer(token)
    }

    /// Register a farmer managed by `developer`
    pub fn managed_farmer(&self, token: &str, developer: &str) -> ActingAccount {
        self.store
            .seed_account(Account::farmer(
                AccountToken::new(token),
                Some(AccountToken::new(developer)),
                Utc::now(),
            ))
            .unwrap();
        ActingAccount::farmer(token)
    }

    pub fn farm(&self, acting: &ActingAccount, name: &str) -> Farm {
        self.farms.create(acting, &FarmDraft::new(name)).unwrap()
    }

    pub fn fence(&self, acting: &ActingAccount, farm: Option<&Farm>, name: &str) -> Fence {
        let mut draft = FenceDraft::new(name, square(10.0));
        draft.farm = farm.map(|f| f.token.clone());
        self.fences.create(acting, &draft).unwrap().fence
    }

    pub fn cow(&self, token: &str, owner: &ActingAccount, farm: &Farm) {
        self.store
            .seed_cow(Cow::new(
                CowToken::new(token),
                owner.token.clone(),
                Some(farm.token.clone()),
            ))
            .unwrap();
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.store.snapshot()
    }

    pub fn farm_row(&self, token: &FarmToken) -> Farm {
        self.snapshot().farms[token].clone()
    }

    pub fn fence_row(&self, fence: &Fence) -> Fence {
        self.snapshot().fences[&fence.token].clone()
    }

    /// Fences of `farm` that are currently active
    pub fn active_on(&self, farm: &FarmToken) -> Vec<String> {
        self.snapshot()
            .fences
            .values()
            .filter(|f| f.is_on_farm(farm) && f.active)
            .map(|f| f.name.clone())
            .collect()
    }
}

/// Axis-aligned square with its corner at the origin
pub fn square(side: f64) -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(side, 0.0),
        Point::new(side, side),
        Point::new(0.0, side),
    ]
}
