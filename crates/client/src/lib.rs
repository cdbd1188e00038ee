//! Cluster access for curator
//!
//! The policy crate only ever sees descriptors and byte counts. This crate is
//! where those come from, and where deletions go.

pub mod elasticsearch;
pub mod memory;
pub mod traits;

pub use elasticsearch::ElasticsearchClient;
pub use memory::{RecordingExecutor, StaticInventory};
pub use traits::{DeletionExecutor, InventoryProvider};
