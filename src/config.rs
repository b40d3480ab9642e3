/*
 * Configuration for split packing and scan planning.
 */

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Core knobs for the bin packer.
///
/// Weights and the target are signed so that a non-positive target is
/// expressible: it is a legal degenerate configuration that isolates
/// every item into its own bin, not an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Builder)]
#[builder(setter(into), default)]
pub struct PackerConfig {
    /// Target weight per bin. A non-empty bin never grows past this;
    /// a single oversize item still gets a (singleton) bin of its own.
    pub target_weight: i64,

    /// Maximum number of bins kept open at once. `0` forces strict
    /// in-order packing with a single open bin.
    pub lookback: usize,

    /// Which open bin to close when the lookback bound is exceeded.
    pub policy: EvictionPolicy,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            target_weight: 128 * 1024 * 1024, // 128MB
            lookback: 10,
            policy: EvictionPolicy::OldestFirst,
        }
    }
}

impl PackerConfig {
    /// Creates a config with the given target weight and the default
    /// lookback and policy.
    pub fn with_target_weight(target_weight: i64) -> Self {
        Self {
            target_weight,
            ..Default::default()
        }
    }
}

/// Configuration for grouping file splits into scan tasks.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into), default)]
pub struct PlanningConfig {
    /// Target combined size for one scan task (default: 128MB)
    pub split_size_bytes: u64,

    /// How many task groups may stay open while packing (default: 10)
    pub lookback: usize,

    /// Floor applied to each split's weight, accounting for the fixed
    /// cost of opening a file regardless of its length (default: 4MB)
    pub split_open_cost_bytes: u64,

    /// Eviction policy used when the lookback bound is exceeded
    pub policy: EvictionPolicy,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            split_size_bytes: 128 * 1024 * 1024,  // 128MB
            lookback: 10,
            split_open_cost_bytes: 4 * 1024 * 1024, // 4MB
            policy: EvictionPolicy::OldestFirst,
        }
    }
}

/// Rule selecting which open bin to close when the open-bin limit is
/// exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EvictionPolicy {
    /// Close the bin that was opened first (FIFO).
    #[default]
    OldestFirst,
    /// Close the bin with the largest current weight; ties go to the
    /// earlier-opened bin so eviction stays deterministic.
    LargestFirst,
}
