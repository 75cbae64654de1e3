//! Engine Factory
//!
//! Creates the use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::application::{
    AccountRegistry, EngineSettings, FarmLifecycleManager, FarmSelectionEngine,
    FenceActivationEngine, FenceLifecycleManager,
};
use crate::config::Config;
use crate::domain::ports::{Clock, FarmStore, TokenGenerator};
use crate::infrastructure::{InMemoryStore, JsonFileStore, SystemClock, UuidTokenGenerator};

/// Every engine sharing one store, one clock and one token source
pub struct Engines<S: FarmStore> {
    pub store: Arc<S>,
    pub accounts: AccountRegistry<S>,
    pub farms: FarmLifecycleManager<S>,
    pub fences: FenceLifecycleManager<S>,
    pub activation: FenceActivationEngine<S>,
    pub selection: FarmSelectionEngine<S>,
}

/// Engines backed by the JSON store file
pub type FileEngines = Engines<JsonFileStore>;

/// Engines backed by the in-memory store
pub type MemoryEngines = Engines<InMemoryStore>;

/// Wire every engine onto `store`
pub fn create_engines<S: FarmStore>(
    store: Arc<S>,
    tokens: Arc<dyn TokenGenerator>,
    clock: Arc<dyn Clock>,
    settings: EngineSettings,
) -> Engines<S> {
    Engines {
        accounts: AccountRegistry::new(store.clone(), clock.clone(), settings.clone()),
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

/// Engines for the CLI: the JSON store at `store_override`, or at the
/// configured path.
pub fn create_file_engines(config: &Config, store_override: Option<&Path>) -> FileEngines {
    let path = match store_override {
        Some(path) => path.to_path_buf(),
        None => config.store_path(),
    };
    create_engines(
        Arc::new(JsonFileStore::with_path(path)),
        Arc::new(UuidTokenGenerator),
        Arc::new(SystemClock),
        EngineSettings::from(config),
    )
}

/// Engines over a fresh in-memory store
pub fn create_memory_engines(settings: EngineSettings) -> MemoryEngines {
    create_engines(
        Arc::new(InMemoryStore::new()),
        Arc::new(UuidTokenGenerator),
        Arc::new(SystemClock),
        settings,
    )
}
