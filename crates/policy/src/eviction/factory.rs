//! Factory for creating retention policies

use chrono::{DateTime, Utc};
use curator_core::{Budget, Error, PolicyKind, Result, RETENTION_DAYS_VAR};

use super::policies::{CompositePolicy, MaxAgePolicy, SizeBudgetPolicy};
use super::traits::RetentionPolicy;

/// Retention policy factory
pub fn create_retention_policy(
    kind: PolicyKind,
    budget: Budget,
    retention_days: Option<u32>,
    now: DateTime<Utc>,
) -> Result<Box<dyn RetentionPolicy>> {
    let age_policy = || -> Result<MaxAgePolicy> {
        match retention_days {
            Some(days) if days > 0 => MaxAgePolicy::new(days, now),
            _ => Err(Error::configuration(format!(
                "Retention policy '{kind}' requires a positive {RETENTION_DAYS_VAR}"
            ))),
        }
    };

    match kind {
        PolicyKind::Size => Ok(Box::new(SizeBudgetPolicy::new(budget))),
        PolicyKind::Age => Ok(Box::new(age_policy()?)),
        PolicyKind::SizeAndAge => Ok(Box::new(CompositePolicy::new(vec![
            Box::new(SizeBudgetPolicy::new(budget)),
            Box::new(age_policy()?),
        ]))),
    }
}
