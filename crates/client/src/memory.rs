//! In-memory inventory and executor
//!
//! Used by orchestrator tests and anywhere a cluster is not available.

use crate::traits::{DeletionExecutor, InventoryProvider};
use async_trait::async_trait;
use curator_core::{Error, IndexDescriptor, Result};
use parking_lot::Mutex;
use std::collections::HashSet;

/// Fixed inventory snapshot
#[derive(Debug, Clone, Default)]
pub struct StaticInventory {
    indices: Vec<IndexDescriptor>,
    node_totals: Vec<u64>,
}

impl StaticInventory {
    pub fn new(indices: Vec<IndexDescriptor>, node_totals: Vec<u64>) -> Self {
        Self {
            indices,
            node_totals,
        }
    }
}

#[async_trait]
impl InventoryProvider for StaticInventory {
    async fn list_indices(&self, prefix: &str) -> Result<Vec<IndexDescriptor>> {
        Ok(self
            .indices
            .iter()
            .filter(|d| d.name().starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn node_disk_totals(&self) -> Result<Vec<u64>> {
        Ok(self.node_totals.clone())
    }
}

/// Records delete calls instead of performing them
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    deleted: Mutex<Vec<String>>,
    failing: HashSet<String>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make deletes of the given names fail
    pub fn failing<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            deleted: Mutex::new(Vec::new()),
            failing: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Names successfully deleted, in call order
    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().clone()
    }
}

#[async_trait]
impl DeletionExecutor for RecordingExecutor {
    async fn delete_index(&self, name: &str) -> Result<()> {
        if self.failing.contains(name) {
            return Err(Error::deletion(name, "simulated failure"));
        }
        self.deleted.lock().push(name.to_string());
        Ok(())
    }
}
