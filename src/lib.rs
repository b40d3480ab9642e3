/*
 * Lookback-bounded online bin packing for scan and compaction planning.
 *
 * Groups an ordered stream of weighted items into consecutive bins held
 * near a target weight, while capping how many bins stay open at once.
 * Data-lake table engines use this to group file splits into scan or
 * compaction tasks under bounded memory and file-handle residency,
 * approximately preserving input order.
 *
 * The packing is single-pass and greedy: each item is placed first-fit
 * into the open-bin window and never moved again. Per-item cost is
 * O(lookback); this is not an optimal (NP-hard) bin packer.
 */

pub mod bin;
pub mod config;
pub mod error;
pub mod metrics;
pub mod packer;
pub mod planner;
pub mod split;
pub mod window;

pub use config::{EvictionPolicy, PackerConfig, PackerConfigBuilder, PlanningConfig, PlanningConfigBuilder};
pub use error::{PackingError, Result};
pub use metrics::{MetricsSnapshot, PackingMetrics};
pub use packer::{ListPacker, PackingIterator};
pub use planner::ScanPlanner;
pub use split::{ScanTask, SplitMetadata};
