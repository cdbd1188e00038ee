//! The partition produced by one evaluation

use curator_core::{IndexDescriptor, IndexName};
use serde::Serialize;

/// Indices to delete and to retain, both in the newest-first order in which
/// a policy visited them.
///
/// `to_delete` keeps that traversal order, so its first entry is the newest
/// deleted index. Use [`EvictionPlan::oldest_first`] for the order in which
/// deletions should actually be issued.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EvictionPlan {
    to_delete: Vec<IndexName>,
    to_retain: Vec<IndexName>,
    retained_bytes: u128,
    deleted_bytes: u128,
}

impl EvictionPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn retain(&mut self, index: &IndexDescriptor) {
        self.retained_bytes += u128::from(index.size_bytes());
        self.to_retain.push(index.name().clone());
    }

    pub(crate) fn delete(&mut self, index: &IndexDescriptor) {
        self.deleted_bytes += u128::from(index.size_bytes());
        self.to_delete.push(index.name().clone());
    }

    /// Names to delete, newest first
    pub fn to_delete(&self) -> &[IndexName] {
        &self.to_delete
    }

    /// Names to keep, newest first
    pub fn to_retain(&self) -> &[IndexName] {
        &self.to_retain
    }

    /// Names to delete, oldest first
    pub fn oldest_first(&self) -> impl DoubleEndedIterator<Item = &IndexName> + ExactSizeIterator {
        self.to_delete.iter().rev()
    }

    pub fn is_deleted(&self, name: &str) -> bool {
        self.to_delete.iter().any(|n| n.as_str() == name)
    }

    pub fn is_retained(&self, name: &str) -> bool {
        self.to_retain.iter().any(|n| n.as_str() == name)
    }

    /// Sum of `size_bytes` over the retained indices
    pub fn retained_bytes(&self) -> u128 {
        self.retained_bytes
    }

    /// Sum of `size_bytes` over the indices to delete
    pub fn deleted_bytes(&self) -> u128 {
        self.deleted_bytes
    }

    /// True when nothing needs to be deleted
    pub fn is_empty(&self) -> bool {
        self.to_delete.is_empty()
    }

    /// Number of descriptors the plan covers
    pub fn len(&self) -> usize {
        self.to_delete.len() + self.to_retain.len()
    }
}
