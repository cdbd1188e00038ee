//! Byte budget for the retained index set

use serde::{Serialize, Serializer};
use std::fmt::{self, Display};

/// Maximum aggregate bytes the retained indices may occupy.
///
/// A budget is `capacity * percentage / 100`, which is generally fractional.
/// It is stored scaled by 100 so comparisons against whole byte counts are
/// exact: `bytes < budget` is evaluated as `bytes * 100 < capacity * percentage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Budget {
    centibytes: u128,
}

impl Budget {
    pub const ZERO: Budget = Budget { centibytes: 0 };

    /// Budget for `percentage` percent of `capacity_bytes`. Percentages above
    /// 100 are taken at face value.
    pub fn from_capacity(capacity_bytes: u128, percentage: u32) -> Self {
        Self {
            centibytes: capacity_bytes.saturating_mul(u128::from(percentage)),
        }
    }

    /// Budget of exactly `bytes` bytes
    pub fn from_bytes(bytes: u64) -> Self {
        Self {
            centibytes: u128::from(bytes) * 100,
        }
    }

    /// True when `bytes` is strictly below the budget
    pub fn admits(&self, bytes: u128) -> bool {
        // A saturated product is never below any budget
        bytes.saturating_mul(100) < self.centibytes
    }

    pub fn is_zero(&self) -> bool {
        self.centibytes == 0
    }

    /// Whole bytes, rounded down
    pub fn whole_bytes(&self) -> u128 {
        self.centibytes / 100
    }

    pub fn as_f64(&self) -> f64 {
        self.centibytes as f64 / 100.0
    }
}

impl Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.centibytes / 100;
        let fraction = self.centibytes % 100;
        if fraction == 0 {
            write!(f, "{whole}")
        } else {
            write!(f, "{whole}.{fraction:02}")
        }
    }
}

impl Serialize for Budget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}
