//! SearchBench Core - search algorithms and dataset generation
//!
//! This crate provides the pieces the benchmark harness is built from:
//! - [`search`]: linear and binary search behind the [`SearchAlgorithm`] trait
//! - [`data`]: sorted dataset generation and target selection
//! - [`error`]: the crate error type
//!
//! Searching never fails; absence is reported as [`SearchOutcome::NotFound`].
//! Errors only arise from invalid caller input.

pub mod data;
pub mod error;
pub mod search;

pub use data::{parse_size, DataGenerator, Dataset, TargetPolicy};
pub use error::{Result, SearchBenchError};
pub use search::{
    binary_search, linear_search, parse_target, timed_search, AlgorithmKind, BinarySearch,
    LinearSearch, SearchAlgorithm, SearchOutcome, TimedSearch,
};
