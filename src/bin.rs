/*
 * A capacity-bounded accumulator of items.
 *
 * A bin stays open while the packer fills it and becomes immutable once
 * it is evicted from the open window and emitted as a group.
 */

/// An open bin: a target weight fixed at creation, a running total, and
/// the items placed so far in insertion order.
#[derive(Debug)]
pub struct Bin<T> {
    target_weight: i64,
    current_weight: i64,
    items: Vec<T>,
}

impl<T> Bin<T> {
    /// Creates an empty bin with the given target weight.
    pub fn new(target_weight: i64) -> Self {
        Self {
            target_weight,
            current_weight: 0,
            items: Vec::new(),
        }
    }

    /// Returns true if an item of `weight` may be placed here.
    ///
    /// An empty bin accepts anything, so an item heavier than the target
    /// still makes progress as a singleton; a non-empty bin accepts only
    /// while the running total stays within the target.
    pub fn can_accept(&self, weight: i64) -> bool {
        self.items.is_empty() || self.current_weight + weight <= self.target_weight
    }

    /// Appends `item` and accumulates its weight. Callers check
    /// `can_accept` first, except for the first item placed into a
    /// freshly created bin.
    pub fn add(&mut self, item: T, weight: i64) {
        self.items.push(item);
        self.current_weight += weight;
    }

    /// The sum of the weights of the items placed so far.
    pub fn current_weight(&self) -> i64 {
        self.current_weight
    }

    /// Number of items placed so far.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the bin, handing its items to the consumer in the order
    /// they were added.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
