//! Ties inventory, policy and deletion together for one run
//!
//! The orchestrator is the only place that performs I/O around the pure
//! policy crate. Inventory is read once per run, the plan is computed from
//! that snapshot, and deletions are issued one at a time, oldest first.

use chrono::{DateTime, Utc};
use curator_client::{DeletionExecutor, InventoryProvider};
use curator_config::Settings;
use curator_core::{Budget, IndexDescriptor, Result, ResultExt};
use curator_policy::{cluster_capacity, compute_budget, create_retention_policy, EvictionPlan};
use curator_utils::tracing::{deletion_outcome, run_span};
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;
use tracing::Instrument;

/// Cluster capacity and the budget derived from it
#[derive(Debug, Clone, Serialize)]
pub struct BudgetReport {
    pub node_disk_totals: Vec<u64>,
    pub capacity_bytes: u128,
    pub percentage_threshold: u32,
    pub budget: Budget,
}

/// A delete request that did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedDeletion {
    pub index: String,
    pub error: String,
}

/// Outcome of one run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    /// Planned deletions, in the order they were issued
    pub planned: Vec<String>,
    pub deleted: Vec<String>,
    pub failed: Vec<FailedDeletion>,
    pub dry_run: bool,
}

impl RunReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs the evaluate-then-delete cycle against one cluster
pub struct Orchestrator {
    settings: Arc<Settings>,
    inventory: Arc<dyn InventoryProvider>,
    executor: Arc<dyn DeletionExecutor>,
}

impl Orchestrator {
    pub fn new(
        settings: Arc<Settings>,
        inventory: Arc<dyn InventoryProvider>,
        executor: Arc<dyn DeletionExecutor>,
    ) -> Self {
        Self {
            settings,
            inventory,
            executor,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Fetch indices for every configured prefix
    ///
    /// An index matched by several prefixes appears once, attributed to the
    /// first prefix that listed it.
    pub async fn inventory(&self) -> Result<Vec<IndexDescriptor>> {
        let mut by_name: IndexMap<String, IndexDescriptor> = IndexMap::new();

        for prefix in &self.settings.index_prefixes {
            let listed = self
                .inventory
                .list_indices(prefix)
                .await
                .with_context(|| format!("Could not list indices for '{prefix}*'"))?;
            tracing::debug!(prefix = %prefix, count = listed.len(), "fetched inventory");
            for descriptor in listed {
                by_name
                    .entry(descriptor.name().to_string())
                    .or_insert(descriptor);
            }
        }

        Ok(by_name.into_values().collect())
    }

    /// Read node capacities and derive the disk budget
    pub async fn budget(&self) -> Result<BudgetReport> {
        let node_disk_totals = self
            .inventory
            .node_disk_totals()
            .await
            .context("Could not read node disk allocation")?;
        let percentage_threshold = self.settings.percentage_threshold;

        Ok(BudgetReport {
            capacity_bytes: cluster_capacity(&node_disk_totals),
            budget: compute_budget(&node_disk_totals, percentage_threshold),
            percentage_threshold,
            node_disk_totals,
        })
    }

    /// Compute the plan for the current cluster state without deleting
    pub async fn plan(&self, now: DateTime<Utc>) -> Result<EvictionPlan> {
        let budget = self.budget().await?;
        tracing::info!(
            capacity = %budget.capacity_bytes,
            percentage = budget.percentage_threshold,
            limit = budget.budget.as_f64(),
            "computed disk budget"
        );

        let indices = self.inventory().await?;
        if indices.is_empty() {
            tracing::info!("No indices found");
        }

        let policy = create_retention_policy(
            self.settings.policy,
            budget.budget,
            self.settings.retention_days,
            now,
        )?;
        tracing::debug!(policy = policy.name(), "evaluating retention policy");

        Ok(policy.plan(&indices))
    }

    /// Evaluate and, unless `dry_run`, delete the planned indices
    ///
    /// Inventory failures abort the run. Delete failures do not: each is
    /// recorded in the report and the remaining deletions still run.
    pub async fn run(&self, dry_run: bool) -> Result<RunReport> {
        let span = run_span(dry_run, self.settings.index_prefixes.len());
        self.run_inner(dry_run).instrument(span).await
    }

    async fn run_inner(&self, dry_run: bool) -> Result<RunReport> {
        let now = Utc::now();
        let plan = self.plan(now).await?;

        let mut report = RunReport {
            planned: plan.oldest_first().map(|n| n.to_string()).collect(),
            dry_run,
            ..RunReport::default()
        };

        if dry_run {
            tracing::info!(
                count = report.planned.len(),
                planned = ?report.planned,
                "dry run, skipping deletions"
            );
            return Ok(report);
        }

        for name in &report.planned {
            let result = self.executor.delete_index(name).await;
            deletion_outcome(name, result.as_ref().map(|_| ()));
            match result {
                Ok(()) => report.deleted.push(name.clone()),
                Err(err) => report.failed.push(FailedDeletion {
                    index: name.clone(),
                    error: err.to_string(),
                }),
            }
        }

        tracing::info!(
            planned = report.planned.len(),
            deleted = report.deleted.len(),
            failed = report.failed.len(),
            "run finished"
        );

        Ok(report)
    }
}
