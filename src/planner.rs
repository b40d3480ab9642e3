/*
 * Scan planning: groups file splits into scan tasks.
 *
 * Splits arrive in table-scan order and are packed into tasks of
 * roughly `split_size_bytes` each. A split's weight is its length
 * floored at `split_open_cost_bytes`, so many tiny files still spread
 * across tasks instead of piling into one.
 */

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::{PackerConfig, PlanningConfig};
use crate::error::Result;
use crate::metrics::PackingMetrics;
use crate::packer::PackingIterator;
use crate::split::{ScanTask, SplitMetadata};

/// Groups file splits into scan tasks using lookback-bounded packing.
pub struct ScanPlanner {
    config: PlanningConfig,
    metrics: Arc<PackingMetrics>,
}

impl ScanPlanner {
    /// Creates a planner with the given config and a fresh metrics
    /// registry.
    pub fn new(config: PlanningConfig) -> Self {
        Self {
            config,
            metrics: Arc::new(PackingMetrics::new()),
        }
    }

    /// Creates a planner recording into a shared metrics registry.
    pub fn with_metrics(config: PlanningConfig, metrics: Arc<PackingMetrics>) -> Self {
        Self { config, metrics }
    }

    /// Shared metrics registry for this planner.
    pub fn metrics(&self) -> Arc<PackingMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Packs `splits` into scan tasks, preserving scan order within
    /// each task.
    pub fn plan_tasks(&self, splits: Vec<SplitMetadata>) -> Result<Vec<ScanTask>> {
        let split_count = splits.len();
        let open_cost = self.config.split_open_cost_bytes;

        let packer_config = PackerConfig {
            target_weight: self.config.split_size_bytes as i64,
            lookback: self.config.lookback,
            policy: self.config.policy,
        };

        let groups = PackingIterator::new(splits, packer_config, |split: &SplitMetadata| {
            split.length.max(open_cost) as i64
        })
        .with_metrics(Arc::clone(&self.metrics))
        .collect::<Result<Vec<_>>>()?;

        let tasks: Vec<ScanTask> = groups
            .into_iter()
            .map(|group| {
                let task = ScanTask::new(group);
                self.metrics.record_task_planned();
                debug!(
                    "planned scan task {}: {} splits, {} bytes",
                    task.task_id, task.split_count, task.total_size_bytes
                );
                task
            })
            .collect();

        info!(
            "planned {} scan tasks from {} splits (target {} bytes, lookback {})",
            tasks.len(),
            split_count,
            self.config.split_size_bytes,
            self.config.lookback
        );

        Ok(tasks)
    }
}
