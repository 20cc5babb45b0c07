//! Sorted dataset generation and target selection.


use std::ops::Deref;

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use crate::error::{Result, SearchBenchError};

/// Number of leading and trailing elements shown by [`Dataset::preview`].
pub const PREVIEW_LEN: usize = 10;

/// An ascending sequence of distinct integers.
///
/// Immutable once produced; borrow it as `&[i64]` to search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    values: Vec<i64>,
}

impl Dataset {
    /// Builds a dataset from arbitrary values, sorting and removing duplicates.
    ///
    /// # Example
    ///
    /// ```
    /// use searchbench_core::Dataset;
    ///
    /// let data = Dataset::from_unsorted(vec![5, 1, 3, 1]);
    /// assert_eq!(data.as_slice(), &[1, 3, 5]);
    /// ```
    pub fn from_unsorted(mut values: Vec<i64>) -> Self {
        values.sort_unstable();
        values.dedup();
        Self { values }
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<i64> {
        self.values
    }

    /// Renders the first and last [`PREVIEW_LEN`] elements, eliding the middle.
    ///
    /// # Example
    ///
    /// ```
    /// use searchbench_core::Dataset;
    ///
    /// let data = Dataset::from_unsorted((1..=25).collect());
    /// let preview = data.preview();
    /// assert!(preview.starts_with("[1, 2,"));
    /// assert!(preview.contains(", ..., 16,"));
    /// assert!(preview.ends_with("25]"));
    /// ```
    pub fn preview(&self) -> String {
        let render = |slice: &[i64]| {
            slice
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };

        if self.values.len() <= PREVIEW_LEN * 2 {
            return format!("[{}]", render(&self.values));
        }

        let head = &self.values[..PREVIEW_LEN];
        let tail = &self.values[self.values.len() - PREVIEW_LEN..];
        format!("[{}, ..., {}]", render(head), render(tail))
    }
}

impl Deref for Dataset {
    type Target = [i64];

    fn deref(&self) -> &[i64] {
        &self.values
    }
}

impl AsRef<[i64]> for Dataset {
    fn as_ref(&self) -> &[i64] {
        &self.values
    }
}

/// How a benchmark picks a target that is guaranteed to be present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TargetPolicy {
    /// A uniformly drawn element, using the generator's RNG.
    #[default]
    Random,
    /// The element at `len / 2`.
    Middle,
    /// The element at this 0-based position.
    Position(usize),
}

/// Produces sorted datasets of distinct integers.
///
/// Unseeded generators draw from OS entropy, so each call may differ.
/// Seeded generators are reproducible.
///
/// # Example
///
/// ```
/// use searchbench_core::DataGenerator;
///
/// let mut generator = DataGenerator::with_seed(42);
/// let data = generator.generate(100).unwrap();
///
/// assert_eq!(data.len(), 100);
/// assert!(data.windows(2).all(|w| w[0] < w[1]));
/// assert!(data.iter().all(|&v| (1..1000).contains(&v)));
/// ```
#[derive(Debug, Clone)]
pub struct DataGenerator {
    rng: StdRng,
    seed: Option<u64>,
}

impl DataGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Builds a seeded generator when `seed` is set, otherwise an unseeded one.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::with_seed)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Samples `size` distinct integers from `[1, 10 * size)` and sorts them.
    ///
    /// # Errors
    ///
    /// Returns [`SearchBenchError::InvalidSize`] when `size` is zero or the
    /// value range would overflow `i64`.
    pub fn generate(&mut self, size: usize) -> Result<Dataset> {
        if size == 0 {
            return Err(SearchBenchError::InvalidSize(
                "size must be a positive integer, got 0".to_string(),
            ));
        }

        let upper = size
            .checked_mul(10)
            .filter(|&upper| i64::try_from(upper).is_ok())
            .ok_or_else(|| SearchBenchError::InvalidSize(format!("size {} is too large", size)))?;

        // Offsets in [0, upper - 1) map onto values in [1, upper).
        let mut values: Vec<i64> = index::sample(&mut self.rng, upper - 1, size)
            .into_iter()
            .map(|offset| offset as i64 + 1)
            .collect();
        values.sort_unstable();

        Ok(Dataset { values })
    }

    /// Picks a target value present in `dataset` according to `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchBenchError::InvalidSize`] for an empty dataset and
    /// [`SearchBenchError::TargetOutOfRange`] when a fixed position exceeds it.
    pub fn pick_target(&mut self, dataset: &Dataset, policy: TargetPolicy) -> Result<i64> {
        if dataset.is_empty() {
            return Err(SearchBenchError::InvalidSize(
                "cannot pick a target from an empty dataset".to_string(),
            ));
        }

        let position = match policy {
            TargetPolicy::Random => self.rng.random_range(0..dataset.len()),
            TargetPolicy::Middle => dataset.len() / 2,
            TargetPolicy::Position(position) => position,
        };

        dataset
            .get(position)
            .copied()
            .ok_or(SearchBenchError::TargetOutOfRange {
                position,
                len: dataset.len(),
            })
    }
}

impl Default for DataGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses caller-supplied text into a dataset size.
///
/// # Example
///
/// ```
/// use searchbench_core::{parse_size, SearchBenchError};
///
/// assert_eq!(parse_size("100"), Ok(100));
/// assert!(matches!(parse_size("-5"), Err(SearchBenchError::InvalidSize(_))));
/// assert!(matches!(parse_size("0"), Err(SearchBenchError::InvalidSize(_))));
/// ```
pub fn parse_size(text: &str) -> Result<usize> {
    let trimmed = text.trim();
    let value: i128 = trimmed.parse().map_err(|_| {
        SearchBenchError::InvalidSize(format!("'{}' is not an integer", trimmed))
    })?;

    if value <= 0 {
        return Err(SearchBenchError::InvalidSize(format!(
            "size must be a positive integer, got {}",
            value
        )));
    }

    usize::try_from(value)
        .map_err(|_| SearchBenchError::InvalidSize(format!("size {} is too large", value)))
}
