//! Closed-interval bisection.

use std::cmp::Ordering;

use super::{SearchAlgorithm, SearchOutcome};

/// Bisects a non-decreasing sequence. O(log n).
///
/// Unsorted input yields an unspecified outcome but never panics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinarySearch;

impl SearchAlgorithm for BinarySearch {
    fn name(&self) -> &'static str {
        "binary"
    }

    fn label(&self) -> &'static str {
        "Binaria"
    }

    fn requires_sorted(&self) -> bool {
        true
    }

    fn search(&self, sequence: &[i64], target: i64) -> SearchOutcome {
        binary_search(sequence, target)
    }
}

/// Searches the closed interval `[low, high]`, starting at `[0, n - 1]`.
///
/// The probe is `floor((low + high) / 2)`, so the returned index for a
/// given input is fully determined.
///
/// # Example
///
/// ```
/// use searchbench_core::search::{binary_search, SearchOutcome};
///
/// let data = [1, 3, 5, 7, 9, 11];
/// assert_eq!(binary_search(&data, 7), SearchOutcome::Found(3));
/// assert_eq!(binary_search(&data, 8), SearchOutcome::NotFound);
/// assert_eq!(binary_search(&[], 8), SearchOutcome::NotFound);
/// ```
pub fn binary_search(sequence: &[i64], target: i64) -> SearchOutcome {
    let mut low = 0usize;
    // An empty sequence has no closed interval to search.
    let Some(mut high) = sequence.len().checked_sub(1) else {
        return SearchOutcome::NotFound;
    };

    while low <= high {
        let mid = low + (high - low) / 2;
        match sequence[mid].cmp(&target) {
            Ordering::Equal => return SearchOutcome::Found(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => match mid.checked_sub(1) {
                Some(next) => high = next,
                None => break,
            },
        }
    }

    SearchOutcome::NotFound
}
