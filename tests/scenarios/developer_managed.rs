//! Scenario: A developer manages farms for a farmer and owns some itself
//!
//! Steps:
//! 1. The developer creates its own farm; an owner row is materialized for it
//! 2. The developer draws a fence on the farmer's farm; the farmer owns it
//! 3. The developer cannot draw a free-standing fence

use paddock::{AccountToken, ActingAccount, FarmDraft, FenceDraft, PaddockError};

use crate::common::*;

/// SCENARIO: Developer mirror ownership and fence ownership by farm
#[test]
fn scenario_developer_manages_farmer() {
    let world = World::new();
    let farmer = world.managed_farmer("U1", "D1");
    let developer = ActingAccount::developer("D1");
    let farmers_farm = world.farm(&farmer, "home");
    assert_eq!(farmers_farm.developer, Some(AccountToken::new("D1")));

    // Step 1
    let own = world
        .engines
        .farms
        .create(&developer, &FarmDraft::unnamed())
        .unwrap();
    assert_eq!(own.owner, AccountToken::new("D1"));
    assert_eq!(own.name, "farm1");
    let mirror = &world.snapshot().accounts[&AccountToken::new("D1")];
    assert!(mirror.placeholder);
    assert_eq!(mirror.farm_count, 1);

    // A second farm reuses the mirror row
    world
        .engines
        .farms
        .create(&developer, &FarmDraft::unnamed())
        .unwrap();
    assert_eq!(world.snapshot().accounts.len(), 2);

    // Step 2
    let fence = world
        .engines
        .fences
        .create(
            &developer,
            &FenceDraft::new("", square(4.0)).on_farm(farmers_farm.token.clone()),
        )
        .unwrap()
        .fence;
    assert_eq!(fence.owner, AccountToken::new("U1"));
    assert_eq!(fence.developer, Some(AccountToken::new("D1")));
    assert!(fence.active);
    assert_eq!(fence.area, 16.0);

    // The farmer sees it; the developer's own listing does not
    assert_eq!(world.engines.fences.list(&farmer, None).unwrap().len(), 1);
    assert!(world.engines.fences.list(&developer, None).unwrap().is_empty());

    // Step 3
    let err = world
        .engines
        .fences
        .create(&developer, &FenceDraft::new("loose", square(4.0)))
        .unwrap_err();
    assert!(matches!(err, PaddockError::InvalidInput(_)));
}

/// SCENARIO: A stranger cannot see or touch another farmer's farm
#[test]
fn scenario_foreign_farm_is_not_found() {
    let world = World::new();
    let owner = world.farmer("U1");
    let stranger = world.farmer("U2");
    let farm = world.farm(&owner, "home");

    let err = world
        .engines
        .fences
        .create(
            &stranger,
            &FenceDraft::new("", square(4.0)).on_farm(farm.token.clone()),
        )
        .unwrap_err();
    assert!(matches!(err, PaddockError::NotFound { .. }));

    let err = world
        .engines
        .farms
        .rename(&stranger, &farm.token, "mine")
        .unwrap_err();
    assert!(matches!(err, PaddockError::NotFound { .. }));
    assert_eq!(world.farm_row(&farm.token).name, "home");
}
