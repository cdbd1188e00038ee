//! Union of several policies

use crate::eviction::traits::RetentionPolicy;
use crate::plan::EvictionPlan;
use crate::selector::newest_first;
use curator_core::IndexDescriptor;
use std::collections::HashSet;

/// Deletes an index when any member policy deletes it
pub struct CompositePolicy {
    policies: Vec<Box<dyn RetentionPolicy>>,
}

impl CompositePolicy {
    pub fn new(policies: Vec<Box<dyn RetentionPolicy>>) -> Self {
        Self { policies }
    }
}

impl RetentionPolicy for CompositePolicy {
    fn name(&self) -> &'static str {
        "composite"
    }

    fn plan(&self, indices: &[IndexDescriptor]) -> EvictionPlan {
        let member_plans: Vec<EvictionPlan> =
            self.policies.iter().map(|policy| policy.plan(indices)).collect();
        let mut deleted: HashSet<&str> = HashSet::new();
        for member in &member_plans {
            deleted.extend(member.to_delete().iter().map(|name| name.as_str()));
        }

        let mut plan = EvictionPlan::new();
        for index in newest_first(indices) {
            if deleted.contains(index.name().as_str()) {
                plan.delete(index);
            } else {
                plan.retain(index);
            }
        }
        plan
    }
}
