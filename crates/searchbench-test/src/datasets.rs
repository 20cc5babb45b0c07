//! Sorted dataset fixtures.

use searchbench_core::{DataGenerator, Dataset};

/// Seed shared by fixtures so failures reproduce.
pub const FIXTURE_SEED: u64 = 0x5EA2C4;

/// A generated dataset of `size` elements using [`FIXTURE_SEED`].
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn seeded_dataset(size: usize) -> Dataset {
    DataGenerator::with_seed(FIXTURE_SEED)
        .generate(size)
        .expect("fixture size must be positive")
}

/// `len` values `start, start + step, ...` in ascending order.
///
/// # Example
///
/// ```
/// use searchbench_test::stepped_dataset;
///
/// let data = stepped_dataset(1, 3, 4);
/// assert_eq!(data.as_slice(), &[1, 4, 7, 10]);
/// ```
pub fn stepped_dataset(start: i64, step: i64, len: usize) -> Dataset {
    let step = step.max(1);
    Dataset::from_unsorted((0..len as i64).map(|i| start + i * step).collect())
}
