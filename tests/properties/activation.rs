//! Property tests for fence activation: at most one active fence per farm
//! after create/select sequences, and repair activating sole fences.

use proptest::prelude::*;

use paddock::{ActingAccount, FarmToken, FenceDraft, FenceToken};

use crate::common::{square, World};

const FARMS: usize = 3;

#[derive(Debug, Clone)]
enum Op {
    /// Draw a fence on farm `n`, or unassigned when `None`
    Create(Option<usize>),
    /// Select the `n`th fence (modulo count) onto farm `m`
    SelectOnto(usize, usize),
    Repair,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => proptest::option::of(0..FARMS).prop_map(Op::Create),
        3 => (0usize..32, 0..FARMS).prop_map(|(f, m)| Op::SelectOnto(f, m)),
        1 => Just(Op::Repair),
    ]
}

fn setup() -> (World, ActingAccount, Vec<FarmToken>) {
    let world = World::new();
    let acting = world.farmer("u1");
    let farms = (0..FARMS)
        .map(|_| world.farm(&acting, "").token)
        .collect();
    (world, acting, farms)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: No farm ever has two active fences after creates and
    /// farm-targeted selects.
    #[test]
    fn property_single_active_fence(ops in proptest::collection::vec(op(), 1..24)) {
        let (world, acting, farms) = setup();
        let mut fences: Vec<FenceToken> = Vec::new();

        for op in ops {
            match op {
                Op::Create(farm) => {
                    let mut draft = FenceDraft::new("", square(5.0));
                    if let Some(n) = farm {
                        draft = draft.on_farm(farms[n].clone());
                    }
                    let created = world.engines.fences.create(&acting, &draft).unwrap();
                    fences.push(created.fence.token);
                }
                Op::SelectOnto(f, m) => {
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
                Op::Repair => {
                    world.engines.activation.repair().unwrap();
                }
            }

            for farm in &farms {
                prop_assert!(
                    world.active_count(farm) <= 1,
                    "farm {} has several active fences",
                    farm
                );
            }
        }
    }

    /// PROPERTY: After repair every single-fence farm has its fence active,
    /// whatever state deletions left behind.
    #[test]
    fn property_repair_heals_single_fence_farms(
        extra in proptest::collection::vec(0usize..4, FARMS),
        delete_newest in proptest::collection::vec(any::<bool>(), FARMS),
    ) {
        let (world, acting, farms) = setup();

        for (i, farm) in farms.iter().enumerate() {
            let mut drawn = Vec::new();
            for _ in 0..=extra[i] {
                drawn.push(world.fence(&acting, Some(farm), "").token);
            }
            // Dropping the newest (active) fence leaves the rest inactive
            if delete_newest[i] && drawn.len() >= 2 {
                world.engines.fences.delete(&acting, &drawn[drawn.len() - 1]).unwrap();
            }
        }

        world.engines.activation.repair().unwrap();

        for farm in &farms {
            if world.live_fence_count(farm) == 1 {
                prop_assert_eq!(world.active_count(farm), 1);
            }
        }

        // A second pass changes nothing
        let again = world.engines.activation.repair().unwrap();
        prop_assert!(again.is_clean());
    }
}
