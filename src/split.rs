/*
 * Split and scan-task descriptors.
 *
 * A split is a contiguous byte range of one data file; a scan task is
 * a packed group of splits meant to be read by one worker. Both are
 * serializable so tasks can be handed across process boundaries. The
 * packing core never looks inside these: it sees only each split's
 * weight.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata for one file split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitMetadata {
    /// Path to the file
    pub file_path: String,
    /// Byte offset where this split begins
    pub start: u64,
    /// Split length in bytes
    pub length: u64,
    /// Record count (if known)
    pub record_count: Option<u64>,
    /// Sequence number for ordering (if known)
    pub sequence_number: Option<i64>,
}

impl SplitMetadata {
    /// Creates a split covering a whole file.
    pub fn whole_file(file_path: impl Into<String>, length: u64) -> Self {
        Self {
            file_path: file_path.into(),
            start: 0,
            length,
            record_count: None,
            sequence_number: None,
        }
    }
}

/// A group of splits to be scanned together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanTask {
    /// Unique task ID
    pub task_id: Uuid,
    /// Splits in this task, in packing order
    pub splits: Vec<SplitMetadata>,
    /// Total size of the splits
    pub total_size_bytes: u64,
    /// Number of splits
    pub split_count: usize,
}

impl ScanTask {
    /// Creates a task from a packed group of splits, deriving totals.
    pub fn new(splits: Vec<SplitMetadata>) -> Self {
        let total_size_bytes = splits.iter().map(|s| s.length).sum();
        let split_count = splits.len();

        Self {
            task_id: Uuid::now_v7(),
            splits,
            total_size_bytes,
            split_count,
        }
    }

    /// Returns true if the task holds no splits.
    pub fn is_empty(&self) -> bool {
        self.splits.is_empty()
    }
}
