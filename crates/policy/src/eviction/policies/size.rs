//! Disk budget policy

use crate::eviction::traits::RetentionPolicy;
use crate::plan::EvictionPlan;
use crate::selector::select_for_eviction;
use curator_core::{Budget, IndexDescriptor};

/// Keeps the newest indices whose combined size stays under a budget
#[derive(Debug, Clone, Copy)]
pub struct SizeBudgetPolicy {
    budget: Budget,
}

impl SizeBudgetPolicy {
    pub fn new(budget: Budget) -> Self {
        Self { budget }
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }
}

impl RetentionPolicy for SizeBudgetPolicy {
    fn name(&self) -> &'static str {
        "size"
    }

    fn plan(&self, indices: &[IndexDescriptor]) -> EvictionPlan {
        select_for_eviction(indices, self.budget)
    }
}
