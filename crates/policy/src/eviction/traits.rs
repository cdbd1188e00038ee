//! Core retention policy trait definition

use crate::plan::EvictionPlan;
use curator_core::IndexDescriptor;

/// Retention policy trait
pub trait RetentionPolicy: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Partition a snapshot of indices into retained and deleted sets
    fn plan(&self, indices: &[IndexDescriptor]) -> EvictionPlan;
}
