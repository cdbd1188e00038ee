//! Budget calculation from cluster disk totals

use curator_core::Budget;

/// Total disk capacity across all nodes
pub fn cluster_capacity(node_disk_totals: &[u64]) -> u128 {
    node_disk_totals.iter().copied().map(u128::from).sum()
}

/// Byte budget for `percentage_threshold` percent of the cluster's disk.
///
/// An empty node list gives a zero budget. The percentage is not range
/// checked here; values above 100 scale the capacity up.
pub fn compute_budget(node_disk_totals: &[u64], percentage_threshold: u32) -> Budget {
    Budget::from_capacity(cluster_capacity(node_disk_totals), percentage_threshold)
}
