//! Error types for engine operations.
//!
//! The layout computations themselves are total functions and never fail;
//! errors only arise at the edges (configuration files, board ingestion,
//! drag-session setup against stale ids).

use crate::api::BlockId;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Error type for engine operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration file missing, unreadable, or malformed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A drag was started against a block id that is not in the lane.
    #[error("Unknown block: {0}")]
    UnknownBlock(BlockId),

    /// A block span failed validation (`start_date` after `end_date`).
    #[error("Invalid span for block {block_id}: {start} is after {end}")]
    InvalidSpan {
        block_id: BlockId,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
}

impl EngineError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
