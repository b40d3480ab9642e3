/*
 * Error types for split packing.
 *
 * The packing core is purely in-memory, so there is no retryable
 * category here: every error is a caller-side contract violation and
 * propagates immediately.
 */

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PackingError {
    /// The weight function returned a negative value. Weights must be
    /// non-negative; a negative weight would silently corrupt a bin's
    /// running total, so it is rejected at the point of computation.
    #[error("invalid weight {weight}: weights must be non-negative")]
    InvalidWeight { weight: i64 },

    #[error("planning error: {0}")]
    Planning(String),
}

pub type Result<T> = std::result::Result<T, PackingError>;
