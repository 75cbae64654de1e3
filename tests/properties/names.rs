//! Property tests for per-owner name uniqueness under create/rename.

use std::collections::HashSet;

use proptest::prelude::*;

use paddock::{FarmDraft, FenceDraft, PaddockError};

use crate::common::{square, World};

const NAMES: &[&str] = &["", "farm1", "farm2", "farm101", "home", "fence1", "north"];

#[derive(Debug, Clone)]
enum Op {
    Create { name: usize, auto_rename: bool },
    Rename { target: usize, name: usize },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..NAMES.len(), any::<bool>())
            .prop_map(|(name, auto_rename)| Op::Create { name, auto_rename }),
        (0usize..16, 1..NAMES.len()).prop_map(|(target, name)| Op::Rename { target, name }),
    ]
}

fn assert_unique<'a>(names: impl Iterator<Item = &'a str>) -> Result<(), TestCaseError> {
    let mut seen = HashSet::new();
    for name in names {
        prop_assert!(seen.insert(name), "name '{}' appears twice", name);
    }
    Ok(())
}

fn expected_failure(err: &PaddockError) -> bool {
    matches!(err, PaddockError::Conflict { .. })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: An owner's farm names stay unique; the only failures are
    /// name conflicts.
    #[test]
    fn property_farm_names_unique(ops in proptest::collection::vec(op(), 1..20)) {
        let world = World::new();
        let acting = world.farmer("u1");
        let mut farms = Vec::new();

        for op in ops {
            let outcome = match op {
                Op::Create { name, auto_rename } => {
                    let draft = FarmDraft::new(NAMES[name]).with_auto_rename(auto_rename);
                    world.engines.farms.create(&acting, &draft).map(|farm| {
                        farms.push(farm.token);
                    })
                }
                Op::Rename { target, name } => {
                    if farms.is_empty() {
                        continue;
                    }
                    let farm = &farms[target % farms.len()];
                    world.engines.farms.rename(&acting, farm, NAMES[name]).map(|_| ())
                }
            };
            if let Err(err) = outcome {
                prop_assert!(expected_failure(&err), "unexpected error: {}", err);
            }

            let snapshot = world.snapshot();
            assert_unique(snapshot.farms.values().map(|f| f.name.as_str()))?;
        }
    }

    /// PROPERTY: The same holds for fences, including unassigned ones.
    #[test]
    fn property_fence_names_unique(ops in proptest::collection::vec(op(), 1..20)) {
        let world = World::new();
        let acting = world.farmer("u1");
        let farm = world.farm(&acting, "home");
        let mut fences = Vec::new();

        for (step, op) in ops.into_iter().enumerate() {
            let outcome = match op {
                Op::Create { name, auto_rename } => {
                    let mut draft =
                        FenceDraft::new(NAMES[name], square(3.0)).with_auto_rename(auto_rename);
                    if step % 2 == 0 {
                        draft = draft.on_farm(farm.token.clone());
                    }
                    world.engines.fences.create(&acting, &draft).map(|created| {
                        fences.push(created.fence.token);
                    })
                }
                Op::Rename { target, name } => {
                    if fences.is_empty() {
                        continue;
                    }
                    let fence = &fences[target % fences.len()];
                    world.engines.fences.rename(&acting, fence, NAMES[name]).map(|_| ())
                }
            };
            if let Err(err) = outcome {
                prop_assert!(expected_failure(&err), "unexpected error: {}", err);
            }

            let snapshot = world.snapshot();
            assert_unique(snapshot.fences.values().map(|f| f.name.as_str()))?;
        }
    }
}

#[test]
fn auto_rename_never_fails_on_collision() {
    let world = World::new();
    let acting = world.farmer("u1");
    for _ in 0..5 {
        world
            .engines
            .farms
            .create(&acting, &FarmDraft::new("home").with_auto_rename(true))
            .unwrap();
    }
    let names: HashSet<String> = world
        .snapshot()
        .farms
        .into_values()
        .map(|f| f.name)
        .collect();
    assert_eq!(names.len(), 5);
    assert!(names.contains("home"));
}
