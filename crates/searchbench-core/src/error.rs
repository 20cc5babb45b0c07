//! Error types for SearchBench

use thiserror::Error;

/// Main error type for SearchBench operations.
///
/// A search that does not find its target is not an error; see
/// [`SearchOutcome::NotFound`](crate::SearchOutcome::NotFound).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchBenchError {
    /// Requested dataset size is not a positive integer
    #[error("Invalid dataset size: {0}")]
    InvalidSize(String),

    /// Search target supplied by a caller is not numeric
    #[error("Invalid search target: {0}")]
    InvalidTarget(String),

    /// Target position lies outside the generated dataset
    #[error("Target position {position} is out of range for a dataset of {len} elements")]
    TargetOutOfRange { position: usize, len: usize },

    /// Benchmark parameters cannot produce a measurement
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for SearchBench operations
pub type Result<T> = std::result::Result<T, SearchBenchError>;
