//! Property-based tests for the budget calculator and the eviction selector
//!
//! These verify the invariants of a plan across arbitrary inventories rather
//! than hand-picked scenarios.

use curator_core::{Budget, IndexDescriptor, IndexName};
use curator_policy::{compute_budget, select_for_eviction};
use proptest::prelude::*;
use std::collections::HashSet;

/// Inventories with unique names and frequent timestamp ties
fn arb_inventory() -> impl Strategy<Value = Vec<IndexDescriptor>> {
    prop::collection::vec((0_u64..10_000, 0_i64..20), 0..40).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (size, ts))| {
                IndexDescriptor::new(IndexName::new(format!("index-{i:03}")).unwrap(), size, ts)
            })
            .collect()
    })
}

fn arb_budget() -> impl Strategy<Value = Budget> {
    (prop::collection::vec(0_u64..50_000, 0..5), 0_u32..=100)
        .prop_map(|(nodes, pct)| compute_budget(&nodes, pct))
}

proptest! {
    #[test]
    fn prop_budget_is_monotonic_in_percentage(
        nodes in prop::collection::vec(any::<u64>(), 0..8),
        low in 0_u32..=100,
        high in 0_u32..=100,
    ) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        prop_assert!(compute_budget(&nodes, low) <= compute_budget(&nodes, high));
    }

    #[test]
    fn prop_budget_scaling(nodes in prop::collection::vec(0_u64..u64::MAX / 16, 0..8)) {
        let total: u64 = nodes.iter().sum();
        prop_assert_eq!(compute_budget(&nodes, 100), Budget::from_bytes(total));
        prop_assert!(compute_budget(&nodes, 0).is_zero());
    }

    #[test]
    fn prop_partition_is_complete_and_disjoint(
        indices in arb_inventory(),
        budget in arb_budget(),
    ) {
        let plan = select_for_eviction(&indices, budget);

        let deleted: HashSet<&str> = plan.to_delete().iter().map(|n| n.as_str()).collect();
        let retained: HashSet<&str> = plan.to_retain().iter().map(|n| n.as_str()).collect();
        let all: HashSet<&str> = indices.iter().map(|d| d.name().as_str()).collect();

        prop_assert!(deleted.is_disjoint(&retained));
        prop_assert_eq!(deleted.union(&retained).copied().collect::<HashSet<_>>(), all);
        prop_assert_eq!(plan.len(), indices.len());
    }

    #[test]
    fn prop_retained_size_stays_below_budget(
        indices in arb_inventory(),
        budget in arb_budget(),
    ) {
        let plan = select_for_eviction(&indices, budget);
        let retained_sum: u128 = indices
            .iter()
            .filter(|d| plan.is_retained(d.name()))
            .map(|d| u128::from(d.size_bytes()))
            .sum();

        prop_assert_eq!(retained_sum, plan.retained_bytes());
        if !plan.to_retain().is_empty() {
            prop_assert!(budget.admits(retained_sum));
        }
        if budget.is_zero() {
            prop_assert!(plan.to_retain().is_empty());
        }
    }

    #[test]
    fn prop_newer_index_wins_over_older(
        newer_size in 1_u64..1_000,
        older_size in 1_u64..1_000,
        newer_ts in 1_000_i64..2_000,
        age_gap in 1_i64..1_000,
    ) {
        // Budget admits the newer index alone but not both together
        let budget = Budget::from_bytes(newer_size + 1);
        prop_assume!(!budget.admits(u128::from(newer_size + older_size)));

        let indices = vec![
            IndexDescriptor::new(IndexName::new("older").unwrap(), older_size, newer_ts - age_gap),
            IndexDescriptor::new(IndexName::new("newer").unwrap(), newer_size, newer_ts),
        ];
        let plan = select_for_eviction(&indices, budget);

        prop_assert!(plan.is_retained("newer"));
        prop_assert!(plan.is_deleted("older"));
    }

    #[test]
    fn prop_selection_is_deterministic(
        indices in arb_inventory(),
        budget in arb_budget(),
    ) {
        let first = select_for_eviction(&indices, budget);
        let second = select_for_eviction(&indices, budget);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_traversal_order_is_newest_first(
        indices in arb_inventory(),
        budget in arb_budget(),
    ) {
        let plan = select_for_eviction(&indices, budget);
        let timestamp = |name: &IndexName| {
            indices
                .iter()
                .find(|d| d.name() == name)
                .map(|d| d.creation_timestamp())
                .unwrap()
        };

        for pair in plan.to_delete().windows(2) {
            prop_assert!(timestamp(&pair[0]) >= timestamp(&pair[1]));
        }
        let oldest: Vec<&IndexName> = plan.oldest_first().collect();
        for pair in oldest.windows(2) {
            prop_assert!(timestamp(pair[0]) <= timestamp(pair[1]));
        }
    }
}
