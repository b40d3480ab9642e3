/*
 * The lookback window of open bins.
 *
 * Bins are kept in creation order. Placement is first-fit from the
 * oldest bin toward the newest, so older bins keep filling longest and
 * a placement scan touches at most `lookback + 1` bins. Removal order
 * is decided by the eviction policy.
 */

use std::collections::VecDeque;

use crate::bin::Bin;
use crate::config::EvictionPolicy;

/// An ordered queue of at most `lookback + 1` transiently open bins.
///
/// The window may hold `lookback + 1` bins only for the instant between
/// inserting a fresh bin and the eviction that follows; it never grows
/// further.
#[derive(Debug)]
pub struct OpenWindow<T> {
    bins: VecDeque<Bin<T>>,
    lookback: usize,
}

impl<T> OpenWindow<T> {
    pub fn new(lookback: usize) -> Self {
        Self {
            bins: VecDeque::new(),
            lookback,
        }
    }

    /// Appends a freshly created bin at the tail (newest position).
    pub fn insert_new(&mut self, bin: Bin<T>) {
        self.bins.push_back(bin);
    }

    /// First-fit scan, oldest to newest: index of the first open bin
    /// that can accept `weight`, if any.
    pub fn find_fit(&self, weight: i64) -> Option<usize> {
        self.bins.iter().position(|bin| bin.can_accept(weight))
    }

    pub fn bin_mut(&mut self, index: usize) -> &mut Bin<T> {
        &mut self.bins[index]
    }

    /// True when the window holds more than `lookback` bins and one
    /// must be evicted.
    pub fn needs_eviction(&self) -> bool {
        self.bins.len() > self.lookback
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Removes and returns one bin per `policy`, or `None` if the
    /// window is empty.
    ///
    /// Oldest-first pops the queue head. Largest-first removes the bin
    /// with the maximum current weight; on a tie the bin closer to the
    /// head (opened earlier) wins, keeping eviction deterministic.
    /// Removals from the middle are stable, so queue order remains
    /// creation order afterwards.
    pub fn evict_one(&mut self, policy: EvictionPolicy) -> Option<Bin<T>> {
        match policy {
            EvictionPolicy::OldestFirst => self.bins.pop_front(),
            EvictionPolicy::LargestFirst => {
                let largest = self
                    .bins
                    .iter()
                    .enumerate()
                    .max_by(|(ai, a), (bi, b)| {
                        a.current_weight()
                            .cmp(&b.current_weight())
                            // max_by keeps the later element on Equal, so
                            // order equal weights by descending index to
                            // make the earliest bin win.
                            .then(bi.cmp(ai))
                    })
                    .map(|(i, _)| i)?;
                self.bins.remove(largest)
            }
        }
    }

    /// Empties the window through repeated eviction; used once the
    /// input source is exhausted.
    pub fn drain_all(&mut self, policy: EvictionPolicy) -> Vec<Bin<T>> {
        let mut drained = Vec::with_capacity(self.bins.len());
        while let Some(bin) = self.evict_one(policy) {
            drained.push(bin);
        }
        drained
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bin_with(target: i64, weights: &[i64]) -> Bin<u64> {
        let mut bin = Bin::new(target);
        for &w in weights {
            bin.add(w as u64, w);
        }
        bin
    }

    #[test]
    fn test_find_fit_prefers_oldest() {
        let mut window = OpenWindow::new(3);
        window.insert_new(bin_with(100, &[50])); // room for 50
        window.insert_new(bin_with(100, &[10])); // room for 90
        window.insert_new(bin_with(100, &[90])); // room for 10

        // Both bin 0 and bin 1 fit; the older one wins.
        assert_eq!(window.find_fit(40), Some(0));
        assert_eq!(window.find_fit(60), Some(1));
        assert_eq!(window.find_fit(95), None);
    }

    #[test]
    fn test_needs_eviction_at_lookback_plus_one() {
        let mut window = OpenWindow::new(1);
        window.insert_new(bin_with(100, &[10]));
        assert!(!window.needs_eviction());

        window.insert_new(bin_with(100, &[20]));
        assert!(window.needs_eviction());
    }

    #[test]
    fn test_evict_oldest_first_is_fifo() {
        let mut window = OpenWindow::new(2);
        window.insert_new(bin_with(100, &[10]));
        window.insert_new(bin_with(100, &[20]));
        window.insert_new(bin_with(100, &[30]));

        let evicted = window.evict_one(EvictionPolicy::OldestFirst).unwrap();
        assert_eq!(evicted.current_weight(), 10);
        assert_eq!(window.len(), 2);
    }

    #[test]
    fn test_evict_largest_first() {
        let mut window = OpenWindow::new(2);
        window.insert_new(bin_with(100, &[10]));
        window.insert_new(bin_with(100, &[80]));
        window.insert_new(bin_with(100, &[30]));

        let evicted = window.evict_one(EvictionPolicy::LargestFirst).unwrap();
        assert_eq!(evicted.current_weight(), 80);
    }

    #[test]
    fn test_largest_first_tie_goes_to_earliest() {
        let mut window = OpenWindow::new(3);
        window.insert_new(bin_with(100, &[10]));
        window.insert_new(bin_with(100, &[50, 10])); // weight 60, opened second
        window.insert_new(bin_with(100, &[60])); // weight 60, opened third

        let evicted = window.evict_one(EvictionPolicy::LargestFirst).unwrap();
        assert_eq!(evicted.into_items(), vec![50, 10]);
    }

    #[test]
    fn test_drain_all_largest_first_non_increasing() {
        let mut window = OpenWindow::new(4);
        window.insert_new(bin_with(100, &[30]));
        window.insert_new(bin_with(100, &[70]));
        window.insert_new(bin_with(100, &[50]));

        let weights: Vec<i64> = window
            .drain_all(EvictionPolicy::LargestFirst)
            .into_iter()
            .map(|b| b.current_weight())
            .collect();
        assert_eq!(weights, vec![70, 50, 30]);
        assert!(window.is_empty());
    }

    #[test]
    fn test_evict_empty_window() {
        let mut window: OpenWindow<u64> = OpenWindow::new(2);
        assert!(window.evict_one(EvictionPolicy::OldestFirst).is_none());
        assert!(window.evict_one(EvictionPolicy::LargestFirst).is_none());
    }
}
