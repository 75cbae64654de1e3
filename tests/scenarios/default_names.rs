//! Scenario: A new farmer creates farms without naming them
//!
//! Steps:
//! 1. Create two unnamed farms, getting "farm1" and "farm2"
//! 2. Ask for "farm1" explicitly without auto-rename: conflict, "farm101" proposed
//! 3. Ask again with auto-rename: the farm is called "farm101"

use paddock::{EntityKind, FarmDraft, PaddockError};

use crate::common::*;

/// SCENARIO: Default and suffixed farm names
#[test]
fn scenario_default_farm_names() {
    let world = World::new();
    let u1 = world.farmer("U1");

    // Step 1
    let first = world.engines.farms.create(&u1, &FarmDraft::unnamed()).unwrap();
    let second = world.engines.farms.create(&u1, &FarmDraft::unnamed()).unwrap();
    assert_eq!(first.name, "farm1");
    assert_eq!(second.name, "farm2");

    // Step 2
    let err = world
        .engines
        .farms
        .create(&u1, &FarmDraft::new("farm1"))
        .unwrap_err();
    assert_eq!(
        err,
        PaddockError::Conflict {
            entity: EntityKind::Farm,
            original: "farm1".to_string(),
            proposed: "farm101".to_string(),
        }
    );
    assert_eq!(world.snapshot().farms.len(), 2, "a conflict writes nothing");

    // Step 3
    let third = world
        .engines
        .farms
        .create(&u1, &FarmDraft::new("farm1").with_auto_rename(true))
        .unwrap();
    assert_eq!(third.name, "farm101");

    let names: Vec<String> = world
        .engines
        .farms
        .list(&u1)
        .unwrap()
        .into_iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names, ["farm1", "farm101", "farm2"]);
    assert_eq!(world.snapshot().accounts[&u1.token].farm_count, 3);
}

/// SCENARIO: Two farmers may use the same names
#[test]
fn scenario_names_are_scoped_per_owner() {
    let world = World::new();
    let u1 = world.farmer("U1");
    let u2 = world.farmer("U2");

    world.farm(&u1, "home");
    let theirs = world.farm(&u2, "home");
    assert_eq!(theirs.name, "home");

    world.fence(&u1, None, "north");
    let fence = world.fence(&u2, None, "north");
    assert_eq!(fence.name, "north");
}
