//! Sequential scan.

use super::{SearchAlgorithm, SearchOutcome};

/// Scans from the front and stops at the first match. O(n).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearSearch;

impl SearchAlgorithm for LinearSearch {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn label(&self) -> &'static str {
        "Lineal"
    }

    fn requires_sorted(&self) -> bool {
        false
    }

    fn search(&self, sequence: &[i64], target: i64) -> SearchOutcome {
        linear_search(sequence, target)
    }
}

/// Returns the first index holding `target`, or [`SearchOutcome::NotFound`].
///
/// No ordering is assumed.
///
/// # Example
///
/// ```
/// use searchbench_core::search::{linear_search, SearchOutcome};
///
/// let data = [11, 4, 30, 110, 20];
/// assert_eq!(linear_search(&data, 4), SearchOutcome::Found(1));
/// assert_eq!(linear_search(&data, 40), SearchOutcome::NotFound);
/// ```
pub fn linear_search(sequence: &[i64], target: i64) -> SearchOutcome {
    for (i, &element) in sequence.iter().enumerate() {
        if element == target {
            return SearchOutcome::Found(i);
        }
    }
    SearchOutcome::NotFound
}
