/*
 * Lookback-bounded online bin packing.
 *
 * Items are pulled one at a time from an upstream source, routed into
 * the first open bin that fits (oldest bin first), and emitted as
 * completed groups once the open-bin window exceeds its lookback bound.
 * Relative input order is preserved within each group; across groups it
 * may shift by at most the lookback window.
 */

use std::sync::Arc;

use tracing::trace;

use crate::bin::Bin;
use crate::config::{EvictionPolicy, PackerConfig};
use crate::error::{PackingError, Result};
use crate::metrics::PackingMetrics;
use crate::window::OpenWindow;

/// Where the iterator is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Items remain upstream.
    Running,
    /// The source is exhausted; the window is being flushed.
    Draining,
    /// Terminal; no further output.
    Done,
}

/// Lazily packs an item source into weight-bounded groups.
///
/// Yields `Ok(group)` for each completed bin, in eviction order, then
/// `None` once the source is exhausted and the window has drained. The
/// sequence is single-pass and non-restartable; iterate a fresh
/// instance to pack again.
///
/// The weight function must be pure: returning different weights for
/// the same item across calls is unsupported and goes undetected.
pub struct PackingIterator<I, F>
where
    I: Iterator,
    F: Fn(&I::Item) -> i64,
{
    source: I,
    weight_fn: F,
    config: PackerConfig,
    window: OpenWindow<I::Item>,
    state: State,
    metrics: Option<Arc<PackingMetrics>>,
}

impl<I, F> PackingIterator<I, F>
where
    I: Iterator,
    F: Fn(&I::Item) -> i64,
{
    /// Creates a packing iterator over `source`.
    pub fn new(source: impl IntoIterator<IntoIter = I>, config: PackerConfig, weight_fn: F) -> Self {
        Self {
            source: source.into_iter(),
            weight_fn,
            window: OpenWindow::new(config.lookback),
            config,
            state: State::Running,
            metrics: None,
        }
    }

    /// Attaches a shared metrics registry; counters are updated as
    /// items are placed and bins are emitted.
    pub fn with_metrics(mut self, metrics: Arc<PackingMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Places one item into the window, opening a new bin if no open
    /// bin accepts it. Returns an error for a negative weight.
    fn place(&mut self, item: I::Item) -> Result<()> {
        let weight = (self.weight_fn)(&item);
        if weight < 0 {
            return Err(PackingError::InvalidWeight { weight });
        }

        if let Some(metrics) = &self.metrics {
            metrics.record_item_packed();
            if weight > self.config.target_weight {
                metrics.record_oversize_item();
            }
        }

        match self.window.find_fit(weight) {
            Some(index) => self.window.bin_mut(index).add(item, weight),
            None => {
                let mut bin = Bin::new(self.config.target_weight);
                bin.add(item, weight);
                self.window.insert_new(bin);
                if let Some(metrics) = &self.metrics {
                    metrics.record_bin_opened();
                }
            }
        }
        Ok(())
    }

    fn emit(&mut self, bin: Bin<I::Item>) -> Vec<I::Item> {
        trace!(
            "emitting bin: {} items, weight {}",
            bin.len(),
            bin.current_weight()
        );
        if let Some(metrics) = &self.metrics {
            metrics.record_bin_emitted();
        }
        bin.into_items()
    }
}

impl<I, F> Iterator for PackingIterator<I, F>
where
    I: Iterator,
    F: Fn(&I::Item) -> i64,
{
    type Item = Result<Vec<I::Item>>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.state == State::Running {
            let Some(item) = self.source.next() else {
                self.state = State::Draining;
                break;
            };

            if let Err(e) = self.place(item) {
                // Internal state after a weight fault is unspecified;
                // refuse further output.
                self.state = State::Done;
                return Some(Err(e));
            }

            // An item may be consumed without producing output; only a
            // window overflow completes a bin while running.
            if self.window.needs_eviction() {
                if let Some(bin) = self.window.evict_one(self.config.policy) {
                    return Some(Ok(self.emit(bin)));
                }
            }
        }

        if self.state == State::Draining {
            match self.window.evict_one(self.config.policy) {
                Some(bin) => return Some(Ok(self.emit(bin))),
                None => self.state = State::Done,
            }
        }

        None
    }
}

/// A bin-packer that groups items into bins of a target size.
///
/// Eager convenience over [`PackingIterator`]: packs a whole item
/// source at once, preserving input order within each bin.
pub struct ListPacker {
    config: PackerConfig,
}

impl ListPacker {
    /// Creates a new packer with the given target weight per bin and
    /// the default lookback and eviction policy.
    pub fn new(target_weight: i64) -> Self {
        Self {
            config: PackerConfig::with_target_weight(target_weight),
        }
    }

    /// Creates a new packer with custom lookback.
    pub fn with_lookback(target_weight: i64, lookback: usize) -> Self {
        Self {
            config: PackerConfig {
                target_weight,
                lookback,
                ..Default::default()
            },
        }
    }

    /// Creates a new packer from a full config.
    pub fn from_config(config: PackerConfig) -> Self {
        Self { config }
    }

    /// Packs items into bins, first-fit within the lookback window.
    pub fn pack<T, F>(&self, items: impl IntoIterator<Item = T>, weight_fn: F) -> Result<Vec<Vec<T>>>
    where
        F: Fn(&T) -> i64,
    {
        PackingIterator::new(items.into_iter(), self.config, weight_fn).collect()
    }
}
