//! Scenario: A farmer retires a farm and moves the herd
//!
//! Steps:
//! 1. Farm "old" has two cows and a fence; farm "new" has one cow
//! 2. Delete "old", transferring its cows to "new"
//! 3. The fence on "old" is now an orphan; repair reports it
//! 4. Repair with orphan detachment clears the fence's farm reference

use paddock::EngineSettings;

use crate::common::*;

/// SCENARIO: Transfer on delete, then orphan handling
#[test]
fn scenario_retire_farm_with_transfer() {
    let world = World::with_settings(EngineSettings::default().with_repair_on_read(false));
    let u1 = world.farmer("U1");
    let old = world.farm(&u1, "old");
    let new = world.farm(&u1, "new");
    let fence = world.fence(&u1, Some(&old.token), "paddock");

    // Step 1
    world.cow("c1", &u1, Some(&old.token));
    world.cow("c2", &u1, Some(&old.token));
    world.cow("c3", &u1, Some(&new.token));

    // Step 2
    let deletion = world
        .engines
        .farms
        .delete(&u1, &old.token, Some(&new.token))
        .unwrap();
    assert_eq!(deletion.cows_moved(), 2);
    assert_eq!(deletion.cows_released(), 0);
    let snapshot = world.snapshot();
    assert!(snapshot
        .cows
        .values()
        .all(|cow| cow.farm.as_ref() == Some(&new.token)));
    assert_eq!(snapshot.accounts[&u1.token].farm_count, 1);
    assert_eq!(
        snapshot.fences[&fence.token].farm.as_ref(),
        Some(&old.token),
        "farm deletion leaves fences alone"
    );

    // Step 3
    let report = world.engines.activation.repair().unwrap();
    assert_eq!(report.orphans, vec![fence.token.clone()]);
    assert!(report.detached.is_empty());

    // Step 4
    let detaching = World::with_settings(EngineSettings::default().with_detach_orphans(true));
    let u1b = detaching.farmer("U1");
    let gone = detaching.farm(&u1b, "gone");
    let stray = detaching.fence(&u1b, Some(&gone.token), "stray");
    detaching.engines.farms.delete(&u1b, &gone.token, None).unwrap();

    let report = detaching.engines.activation.repair().unwrap();
    assert_eq!(report.detached, vec![stray.token.clone()]);
    assert_eq!(detaching.snapshot().fences[&stray.token].farm, None);
}

/// SCENARIO: Deleting without a transfer target releases the herd
#[test]
fn scenario_retire_farm_releasing_cows() {
    let world = World::new();
    let u1 = world.farmer("U1");
    let farm = world.farm(&u1, "old");
    world.cow("c1", &u1, Some(&farm.token));

    let deletion = world.engines.farms.delete(&u1, &farm.token, None).unwrap();
    assert_eq!(deletion.cows_released(), 1);
    assert!(world.snapshot().cows.values().all(|cow| cow.farm.is_none()));
}
