/*
 * Packing metrics.
 *
 * Counters for observing packer behavior: how many bins were opened
 * and emitted, how many items flowed through, and how often an
 * oversize item forced a singleton bin.
 */

use std::sync::atomic::{AtomicU64, Ordering};

/// Shared counter registry for one or more packing runs.
#[derive(Debug, Default)]
pub struct PackingMetrics {
    pub items_packed: AtomicU64,
    pub bins_opened: AtomicU64,
    pub bins_emitted: AtomicU64,
    pub oversize_items: AtomicU64,
    pub tasks_planned: AtomicU64,
}

impl PackingMetrics {
    /// Creates a new metrics instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an item routed into the window.
    pub fn record_item_packed(&self) {
        self.items_packed.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a freshly opened bin.
    pub fn record_bin_opened(&self) {
        self.bins_opened.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a bin evicted from the window and emitted as a group.
    pub fn record_bin_emitted(&self) {
        self.bins_emitted.fetch_add(1, Ordering::Relaxed);
    }

    /// Records an item whose weight alone exceeds the bin target.
    pub fn record_oversize_item(&self) {
        self.oversize_items.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a scan task produced by the planner.
    pub fn record_task_planned(&self) {
        self.tasks_planned.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns a point-in-time snapshot of current counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            items_packed: self.items_packed.load(Ordering::Relaxed),
            bins_opened: self.bins_opened.load(Ordering::Relaxed),
            bins_emitted: self.bins_emitted.load(Ordering::Relaxed),
            oversize_items: self.oversize_items.load(Ordering::Relaxed),
            tasks_planned: self.tasks_planned.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of packing metrics.
#[derive(Debug, Clone, Default)]
pub struct MetricsSnapshot {
    pub items_packed: u64,
    pub bins_opened: u64,
    pub bins_emitted: u64,
    pub oversize_items: u64,
    pub tasks_planned: u64,
}

impl MetricsSnapshot {
    /// Bins still open: opened but not yet emitted.
    pub fn open_bins(&self) -> u64 {
        self.bins_opened.saturating_sub(self.bins_emitted)
    }

    /// Average items per emitted bin.
    pub fn avg_items_per_bin(&self) -> f64 {
        if self.bins_emitted == 0 {
            0.0
        } else {
            self.items_packed as f64 / self.bins_emitted as f64
        }
    }
}
