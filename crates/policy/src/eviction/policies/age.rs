//! Retention window policy

use crate::eviction::traits::RetentionPolicy;
use crate::plan::EvictionPlan;
use crate::selector::newest_first;
use chrono::{DateTime, Duration, Utc};
use curator_core::{Error, IndexDescriptor, Result, RETENTION_DAYS_VAR};
use curator_utils::tracing::index_expired;

/// Deletes indices created before `now - retention_days`
#[derive(Debug, Clone, Copy)]
pub struct MaxAgePolicy {
    /// Epoch milliseconds; indices created strictly before this are expired
    cutoff: i64,
}

impl MaxAgePolicy {
    /// `now` is captured once per run by the caller so repeated evaluations
    /// of the same snapshot agree.
    ///
    /// Fails when the cutoff falls outside the representable date range.
    pub fn new(retention_days: u32, now: DateTime<Utc>) -> Result<Self> {
        let cutoff = Duration::try_days(i64::from(retention_days))
            .and_then(|window| now.checked_sub_signed(window))
            .ok_or_else(|| {
                Error::configuration(format!(
                    "Retention period in days is too long ({RETENTION_DAYS_VAR}={retention_days})"
                ))
            })?;
        Ok(Self {
            cutoff: cutoff.timestamp_millis(),
        })
    }

    pub fn cutoff(&self) -> i64 {
        self.cutoff
    }

    fn is_expired(&self, index: &IndexDescriptor) -> bool {
        index.creation_timestamp() < self.cutoff
    }
}

impl RetentionPolicy for MaxAgePolicy {
    fn name(&self) -> &'static str {
        "age"
    }

    fn plan(&self, indices: &[IndexDescriptor]) -> EvictionPlan {
        let mut plan = EvictionPlan::new();
        for index in newest_first(indices) {
            if self.is_expired(index) {
                index_expired(index.name(), index.creation_timestamp(), self.cutoff);
                plan.delete(index);
            } else {
                plan.retain(index);
            }
        }
        plan
    }
}
