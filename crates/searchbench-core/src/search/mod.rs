//! Search algorithms over integer sequences.
//!
//! Both strategies implement [`SearchAlgorithm`], so callers can time them
//! through the same entry point:
//!
//! ```
//! use searchbench_core::search::{timed_search, BinarySearch, LinearSearch, SearchOutcome};
//!
//! let data = [2, 4, 8, 16, 32];
//! assert_eq!(timed_search(&LinearSearch, &data, 16).outcome, SearchOutcome::Found(3));
//! assert_eq!(timed_search(&BinarySearch, &data, 5).outcome, SearchOutcome::NotFound);
//! ```

mod binary;
mod linear;

#[cfg(test)]
mod tests;

use std::fmt;
use std::hint::black_box;
use std::str::FromStr;
use std::time::{Duration, Instant};

pub use binary::{binary_search, BinarySearch};
pub use linear::{linear_search, LinearSearch};

use crate::error::SearchBenchError;

/// Outcome of a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// Target found at this 0-based index.
    Found(usize),
    /// Target absent from the sequence.
    NotFound,
}

impl SearchOutcome {
    /// Returns the index if the target was found.
    pub fn index(self) -> Option<usize> {
        match self {
            SearchOutcome::Found(index) => Some(index),
            SearchOutcome::NotFound => None,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

impl From<Option<usize>> for SearchOutcome {
    fn from(index: Option<usize>) -> Self {
        index.map_or(SearchOutcome::NotFound, SearchOutcome::Found)
    }
}

impl From<SearchOutcome> for Option<usize> {
    fn from(outcome: SearchOutcome) -> Self {
        outcome.index()
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Found(index) => write!(f, "found at index {}", index),
            SearchOutcome::NotFound => write!(f, "not found"),
        }
    }
}

/// A strategy for locating a value in a sequence.
///
/// Implementations are stateless; calling `search` repeatedly with the same
/// input yields the same outcome.
pub trait SearchAlgorithm {
    /// Short machine name (`"linear"`, `"binary"`).
    fn name(&self) -> &'static str;

    /// Label used in benchmark reports.
    fn label(&self) -> &'static str;

    /// Whether the algorithm requires ascending input.
    fn requires_sorted(&self) -> bool;

    /// Searches `sequence` for `target`.
    fn search(&self, sequence: &[i64], target: i64) -> SearchOutcome;
}

/// Runtime-selectable algorithm, for callers that pick a strategy from user input.
///
/// # Example
///
/// ```
/// use searchbench_core::search::{AlgorithmKind, SearchAlgorithm};
///
/// let kind: AlgorithmKind = "binary".parse().unwrap();
/// assert_eq!(kind.label(), "Binaria");
/// assert_eq!(AlgorithmKind::ALL.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AlgorithmKind {
    Linear,
    Binary,
}

impl AlgorithmKind {
    /// Every algorithm, in report order.
    pub const ALL: [AlgorithmKind; 2] = [AlgorithmKind::Linear, AlgorithmKind::Binary];
}

impl SearchAlgorithm for AlgorithmKind {
    fn name(&self) -> &'static str {
        match self {
            AlgorithmKind::Linear => LinearSearch.name(),
            AlgorithmKind::Binary => BinarySearch.name(),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AlgorithmKind::Linear => LinearSearch.label(),
            AlgorithmKind::Binary => BinarySearch.label(),
        }
    }

    fn requires_sorted(&self) -> bool {
        match self {
            AlgorithmKind::Linear => LinearSearch.requires_sorted(),
            AlgorithmKind::Binary => BinarySearch.requires_sorted(),
        }
    }

    fn search(&self, sequence: &[i64], target: i64) -> SearchOutcome {
        match self {
            AlgorithmKind::Linear => LinearSearch.search(sequence, target),
            AlgorithmKind::Binary => BinarySearch.search(sequence, target),
        }
    }
}

impl FromStr for AlgorithmKind {
    type Err = SearchBenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" | "lineal" => Ok(AlgorithmKind::Linear),
            "binary" | "binaria" => Ok(AlgorithmKind::Binary),
            other => Err(SearchBenchError::InvalidConfig(format!(
                "unknown search algorithm '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A search outcome paired with its elapsed monotonic time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedSearch {
    pub outcome: SearchOutcome,
    pub elapsed: Duration,
}

impl TimedSearch {
    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Runs one search and measures it with [`Instant`].
pub fn timed_search<A>(algorithm: &A, sequence: &[i64], target: i64) -> TimedSearch
where
    A: SearchAlgorithm + ?Sized,
{
    let start = Instant::now();
    let outcome = black_box(algorithm.search(black_box(sequence), black_box(target)));
    let elapsed = start.elapsed();
    TimedSearch { outcome, elapsed }
}

/// Parses caller-supplied text into a search target.
///
/// # Example
///
/// ```
/// use searchbench_core::search::parse_target;
/// use searchbench_core::SearchBenchError;
///
/// assert_eq!(parse_target(" 42 "), Ok(42));
/// assert!(matches!(parse_target("abc"), Err(SearchBenchError::InvalidTarget(_))));
/// ```
pub fn parse_target(text: &str) -> crate::error::Result<i64> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| SearchBenchError::InvalidTarget(format!("'{}' is not an integer", trimmed)))
}
