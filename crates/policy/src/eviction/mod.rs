//! Pluggable retention policies
//!
//! The size-budget walk is the default policy. An age window from
//! `RETENTION_DAYS` can replace it or be combined with it.

mod factory;
mod policies;
mod traits;

pub use factory::create_retention_policy;
pub use policies::{CompositePolicy, MaxAgePolicy, SizeBudgetPolicy};
pub use traits::RetentionPolicy;
