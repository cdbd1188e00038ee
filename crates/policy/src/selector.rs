//! The size-budget eviction walk

use crate::plan::EvictionPlan;
use curator_core::{Budget, IndexDescriptor};
use curator_utils::tracing::{index_marked, index_retained};

/// Descriptors ordered newest first. Equal timestamps keep their input order.
pub fn newest_first(indices: &[IndexDescriptor]) -> Vec<&IndexDescriptor> {
    let mut ordered: Vec<&IndexDescriptor> = indices.iter().collect();
    // `sort_by` is stable
    ordered.sort_by(|a, b| b.creation_timestamp().cmp(&a.creation_timestamp()));
    ordered
}

/// Partition `indices` into retained and deleted sets under `budget`.
///
/// Indices are visited newest first while a running total of retained bytes
/// is kept. An index is retained only if both the running total and the total
/// including it stay strictly below the budget. A deleted index does not count
/// towards the total, so a smaller, older index may still be retained after a
/// larger one was rejected.
pub fn select_for_eviction(indices: &[IndexDescriptor], budget: Budget) -> EvictionPlan {
    let mut plan = EvictionPlan::new();
    // u128 so a run of u64-sized indices cannot saturate
    let mut accumulated: u128 = 0;

    for index in newest_first(indices) {
        let projected = accumulated + u128::from(index.size_bytes());

        if budget.admits(accumulated) && budget.admits(projected) {
            index_retained(index.name(), accumulated, &budget);
            accumulated = projected;
            plan.retain(index);
        } else {
            index_marked(index.name(), accumulated, &budget);
            plan.delete(index);
        }
    }

    plan
}
