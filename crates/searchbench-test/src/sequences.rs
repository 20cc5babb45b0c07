//! Sequences that break the sorted-and-distinct invariant.

use searchbench_core::Dataset;

/// A fixed unsorted sequence.
pub fn unsorted_sequence() -> Vec<i64> {
    vec![11, 4, 30, 110, 20, 2, 70, 45, -8, 0]
}

/// A non-decreasing sequence in which `value` repeats `count` times in the middle.
///
/// # Example
///
/// ```
/// use searchbench_test::with_duplicates;
///
/// assert_eq!(with_duplicates(5, 3), vec![1, 2, 5, 5, 5, 8, 9]);
/// ```
pub fn with_duplicates(value: i64, count: usize) -> Vec<i64> {
    let mut values = vec![value - 4, value - 3];
    values.extend(std::iter::repeat(value).take(count));
    values.extend([value + 3, value + 4]);
    values
}

/// Values guaranteed absent from `dataset`: one below, one above, and
/// every gap between neighbours.
pub fn absent_values(dataset: &Dataset) -> Vec<i64> {
    let (Some(&first), Some(&last)) = (dataset.first(), dataset.last()) else {
        return vec![0];
    };

    let mut absent = vec![first - 1, last + 1];
    absent.extend(
        dataset
            .windows(2)
            .filter(|w| w[1] - w[0] > 1)
            .map(|w| w[0] + 1),
    );
    absent
}
