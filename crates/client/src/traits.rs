//! Seams between the orchestrator and the cluster

use async_trait::async_trait;
use curator_core::{IndexDescriptor, Result};

/// Source of the per-run inventory snapshot
#[async_trait]
pub trait InventoryProvider: Send + Sync {
    /// List every index whose name starts with `prefix`
    async fn list_indices(&self, prefix: &str) -> Result<Vec<IndexDescriptor>>;

    /// Total disk capacity of each data node, in bytes
    async fn node_disk_totals(&self) -> Result<Vec<u64>>;
}

/// Removes one index at a time
#[async_trait]
pub trait DeletionExecutor: Send + Sync {
    async fn delete_index(&self, name: &str) -> Result<()>;
}
