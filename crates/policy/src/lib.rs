//! Retention decisions for size-bearing, age-stamped indices
//!
//! Everything in this crate is pure: given a snapshot of the cluster it
//! computes a disk budget and an [`EvictionPlan`] without touching the network.
//! The same input always yields the same plan.

pub mod budget;
pub mod eviction;
pub mod plan;
pub mod selector;

pub use budget::{cluster_capacity, compute_budget};
pub use eviction::{
    create_retention_policy, CompositePolicy, MaxAgePolicy, RetentionPolicy, SizeBudgetPolicy,
};
pub use plan::EvictionPlan;
pub use selector::{newest_first, select_for_eviction};
