//! Repair Policy
//!
//! Pure planning half of the repair pass. Given a snapshot of farms and
//! fences it decides which fences to activate, which farm counters to
//! correct and which fences are orphaned. Applying the plan is left to the
//! activation engine.
//!
//! Only single-fence farms have activation touched. Farms with zero or two
//! or more fences keep their flags exactly as they are.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::domain::entities::{Farm, Fence};
use crate::domain::value_objects::{FarmToken, FenceToken};

/// Options for the repair pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RepairPolicy {
    /// Detach fences whose farm no longer exists
    pub detach_orphans: bool,
}

/// A farm counter that disagrees with the live fence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recount {
    pub farm: FarmToken,
    pub recorded: u32,
    pub actual: u32,
}

/// What a repair pass would change
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepairPlan {
    pub activate: Vec<FenceToken>,
    pub recount: Vec<Recount>,
    pub orphans: Vec<FenceToken>,
    pub detach_orphans: bool,
}

impl RepairPlan {
    /// True when applying the plan would write nothing
    pub fn is_empty(&self) -> bool {
        self.activate.is_empty()
            && self.recount.is_empty()
            && (self.orphans.is_empty() || !self.detach_orphans)
    }
}

impl RepairPolicy {
    pub fn plan(&self, farms: &[Farm], fences: &[Fence]) -> RepairPlan {
        let known: HashSet<&FarmToken> = farms.iter().map(|f| &f.token).collect();

        let mut by_farm: BTreeMap<&FarmToken, Vec<&Fence>> = BTreeMap::new();
        let mut orphans = Vec::new();
        for fence in fences {
            let Some(farm) = fence.farm.as_ref() else {
                continue;
            };
            if known.contains(farm) {
                by_farm.entry(farm).or_default().push(fence);
            } else {
                orphans.push(fence.token.clone());
            }
        }

        let mut plan = RepairPlan {
            orphans,
            detach_orphans: self.detach_orphans,
            ..RepairPlan::default()
        };

        for farm in farms {
            let members = by_farm.get(&farm.token).map(Vec::as_slice).unwrap_or(&[]);
            let actual = members.len() as u32;
            if actual != farm.fence_count {
                plan.recount.push(Recount {
                    farm: farm.token.clone(),
                    recorded: farm.fence_count,
                    actual,
                });
            }
            if let [only] = members {
                if !only.active {
                    plan.activate.push(only.token.clone());
                }
            }
        }

        plan
    }
}
