//! Index names and descriptor snapshots

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::ops::Deref;
use std::str::FromStr;

/// A validated index name that cannot be empty
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IndexName(String);

impl IndexName {
    /// Create a new IndexName with validation
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::input_validation("index", "index name cannot be empty"));
        }
        Ok(IndexName(name))
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for IndexName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Deref for IndexName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for IndexName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for IndexName {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for IndexName {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

impl From<IndexName> for String {
    fn from(name: IndexName) -> Self {
        name.0
    }
}

/// Read-only snapshot of one index taken at the start of a run.
///
/// `size_bytes` is unsigned, so the non-negative size contract holds by
/// construction. Raw inventory values go through [`IndexDescriptor::from_raw`],
/// which rejects negative sizes instead of letting them skew a plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexDescriptor {
    name: IndexName,
    size_bytes: u64,
    /// Epoch milliseconds, as reported by the cluster's `creation_date`
    creation_timestamp: i64,
}

impl IndexDescriptor {
    pub fn new(name: IndexName, size_bytes: u64, creation_timestamp: i64) -> Self {
        Self {
            name,
            size_bytes,
            creation_timestamp,
        }
    }

    /// Build a descriptor from unvalidated inventory values
    pub fn from_raw(name: &str, size_bytes: i64, creation_timestamp: i64) -> Result<Self> {
        let name = IndexName::new(name)?;
        let size_bytes = u64::try_from(size_bytes).map_err(|_| {
            Error::input_validation(
                "size_bytes",
                format!("index '{name}' reports a negative size ({size_bytes})"),
            )
        })?;
        Ok(Self::new(name, size_bytes, creation_timestamp))
    }

    pub fn name(&self) -> &IndexName {
        &self.name
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn creation_timestamp(&self) -> i64 {
        self.creation_timestamp
    }
}
