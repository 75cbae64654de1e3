//! Property tests for farm counters and the farm-deletion cascade.

use proptest::prelude::*;

use paddock::{FarmToken, FenceToken};

use crate::common::World;

const FARMS: usize = 3;

#[derive(Debug, Clone)]
enum Op {
    Create(usize),
    Delete(usize),
    Move(usize, usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..FARMS).prop_map(Op::Create),
        2 => (0usize..32).prop_map(Op::Delete),
        1 => (0usize..32, 0..FARMS).prop_map(|(f, m)| Op::Move(f, m)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A farm's fence counter always equals the number of fences
    /// referencing it.
    #[test]
    fn property_fence_count_matches_live_fences(ops in proptest::collection::vec(op(), 1..24)) {
        let world = World::new();
        let acting = world.farmer("u1");
        let farms: Vec<FarmToken> = (0..FARMS).map(|_| world.farm(&acting, "").token).collect();
        let mut fences: Vec<FenceToken> = Vec::new();

        for op in ops {
            match op {
                Op::Create(m) => fences.push(world.fence(&acting, Some(&farms[m]), "").token),
                Op::Delete(f) => {
                    if fences.is_empty() {
                        continue;
                    }
                    let fence = fences.remove(f % fences.len());
                    world.engines.fences.delete(&acting, &fence).unwrap();
                }
                Op::Move(f, m) => {
                    if fences.is_empty() {
                        continue;
                    }
                    let fence = &fences[f % fences.len()];
                    world
                        .engines
                        .activation
                        .select(&acting, fence, Some(&farms[m]))
                        .unwrap();
                }
            }

            for farm in &farms {
                prop_assert_eq!(world.farm_row(farm).fence_count, world.live_fence_count(farm));
            }
        }
    }

    /// PROPERTY: Deleting a farm releases or transfers every one of its cows
    /// and leaves the transfer target's counters alone.
    #[test]
    fn property_deletion_cascade(cows in 0usize..8, bystanders in 0usize..4, transfer in any::<bool>()) {
        let world = World::new();
        let acting = world.farmer("u1");
        let doomed = world.farm(&acting, "doomed");
        let target = world.farm(&acting, "target");
        world.fence(&acting, Some(&target.token), "");

        for n in 0..cows {
            world.cow(&format!("c{}", n), &acting, Some(&doomed.token));
        }
        for n in 0..bystanders {
            world.cow(&format!("b{}", n), &acting, Some(&target.token));
        }
        let target_before = world.farm_row(&target.token);

        let transfer_to = transfer.then(|| target.token.clone());
        let deletion = world
            .engines
            .farms
            .delete(&acting, &doomed.token, transfer_to.as_ref())
            .unwrap();
        prop_assert_eq!(deletion.cows, cows);

        let snapshot = world.snapshot();
        for (token, cow) in &snapshot.cows {
            if token.as_str().starts_with('c') {
                prop_assert_eq!(cow.farm.as_ref(), transfer_to.as_ref());
            } else {
                prop_assert_eq!(cow.farm.as_ref(), Some(&target.token));
            }
        }

        let target_after = world.farm_row(&target.token);
        prop_assert_eq!(target_after.fence_count, target_before.fence_count);
        prop_assert_eq!(target_after.cow_count, target_before.cow_count);
        prop_assert!(!snapshot.farms.contains_key(&doomed.token));
    }
}
