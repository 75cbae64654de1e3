//! In-memory world for library-level tests.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use paddock::domain::entities::Cow;
use paddock::infrastructure::{FixedClock, InMemoryStore, SequentialTokens, StoreSnapshot};
use paddock::presentation::factory::{create_engines, MemoryEngines};
use paddock::{
    AccountToken, ActingAccount, CowToken, EngineSettings, Farm, FarmDraft, FarmToken, Fence,
    FenceDraft, Point, Role,
};

pub struct World {
    pub engines: MemoryEngines,
}

impl World {
    pub fn new() -> Self {
        Self::with_settings(EngineSettings::default())
    }

    pub fn with_settings(settings: EngineSettings) -> Self {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap());
        Self {
            engines: create_engines(
                Arc::new(InMemoryStore::new()),
                Arc::new(SequentialTokens::new("t")),
                Arc::new(clock),
                settings,
            ),
        }
    }

    pub fn store(&self) -> &InMemoryStore {
        self.engines.store.as_ref()
    }

    /// Register an unmanaged farmer and act as it
    pub fn farmer(&self, token: &str) -> ActingAccount {
        self.engines
            .accounts
            .register(&AccountToken::new(token), Role::Farmer, None)
            .unwrap();
        ActingAccount::farmer(token)
    }

    /// Register a farmer managed by `developer`
    pub fn managed_farmer(&self, token: &str, developer: &str) -> ActingAccount {
        self.engines
            .accounts
            .register(
                &AccountToken::new(token),
                Role::Farmer,
                Some(&AccountToken::new(developer)),
            )
            .unwrap();
        ActingAccount::farmer(token)
    }

    pub fn farm(&self, acting: &ActingAccount, name: &str) -> Farm {
        self.engines
            .farms
            .create(acting, &FarmDraft::new(name))
            .unwrap()
    }

    pub fn fence(&self, acting: &ActingAccount, farm: Option<&FarmToken>, name: &str) -> Fence {
        let mut draft = FenceDraft::new(name, square(10.0));
        if let Some(farm) = farm {
            draft = draft.on_farm(farm.clone());
        }
        self.engines.fences.create(acting, &draft).unwrap().fence
    }

    pub fn cow(&self, token: &str, owner: &ActingAccount, farm: Option<&FarmToken>) {
        self.store()
            .seed_cow(Cow::new(
                CowToken::new(token),
                owner.token.clone(),
                farm.cloned(),
            ))
            .unwrap();
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.store().snapshot()
    }

    pub fn farm_row(&self, farm: &FarmToken) -> Farm {
        self.snapshot().farms[farm].clone()
    }

    /// Active fences currently referencing `farm`
    pub fn active_count(&self, farm: &FarmToken) -> usize {
        self.snapshot()
            .fences
            .values()
            .filter(|f| f.is_on_farm(farm) && f.active)
            .count()
    }

    /// Fences currently referencing `farm`
    pub fn live_fence_count(&self, farm: &FarmToken) -> u32 {
        self.snapshot()
            .fences
            .values()
            .filter(|f| f.is_on_farm(farm))
            .count() as u32
    }
}

/// Axis-aligned square boundary with its corner at the origin
pub fn square(side: f64) -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(side, 0.0),
        Point::new(side, side),
        Point::new(0.0, side),
    ]
}
