//! Benchmark result types.

use std::collections::BTreeMap;
use std::time::Duration;

use searchbench_core::SearchOutcome;

/// Timings of one algorithm against one dataset size.
///
/// # Example
///
/// ```
/// use searchbench_benchmark::Measurement;
/// use searchbench_core::SearchOutcome;
/// use std::time::Duration;
///
/// let measurement = Measurement {
///     size: 100,
///     target: 42,
///     outcome: SearchOutcome::Found(7),
///     samples: vec![Duration::from_micros(1000), Duration::from_micros(3000)],
/// };
///
/// assert!((measurement.avg_ms() - 2.0).abs() < 1e-9);
/// assert!((measurement.min_ms() - 1.0).abs() < 1e-9);
/// assert!((measurement.max_ms() - 3.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Dataset size.
    pub size: usize,
    /// Value searched for; present in the dataset.
    pub target: i64,
    /// Outcome of the last measured run.
    pub outcome: SearchOutcome,
    /// Elapsed time of each measured run.
    pub samples: Vec<Duration>,
}

impl Measurement {
    /// Returns the number of measured runs.
    pub fn run_count(&self) -> usize {
        self.samples.len()
    }

    /// Mean elapsed milliseconds, or 0 when nothing was measured.
    pub fn avg_ms(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let total: f64 = self.samples.iter().map(|d| duration_ms(*d)).sum();
        total / self.samples.len() as f64
    }

    pub fn min_ms(&self) -> f64 {
        self.samples
            .iter()
            .min()
            .map(|d| duration_ms(*d))
            .unwrap_or(0.0)
    }

    pub fn max_ms(&self) -> f64 {
        self.samples
            .iter()
            .max()
            .map(|d| duration_ms(*d))
            .unwrap_or(0.0)
    }
}

/// All measurements of one algorithm, in size order.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmSeries {
    /// Report label ("Lineal", "Binaria").
    pub label: String,
    /// Machine name ("linear", "binary").
    pub name: String,
    pub measurements: Vec<Measurement>,
}

impl AlgorithmSeries {
    pub fn new(label: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            measurements: Vec::new(),
        }
    }

    /// Average milliseconds per size, in size order.
    pub fn averages_ms(&self) -> Vec<f64> {
        self.measurements.iter().map(Measurement::avg_ms).collect()
    }
}

/// Aggregated results of a benchmark run.
///
/// Maps each algorithm label to its ordered average timings, one per size.
///
/// # Example
///
/// ```
/// use searchbench_benchmark::{AlgorithmSeries, BenchmarkReport};
///
/// let mut report = BenchmarkReport::new("Test", vec![100, 1000], 5, None);
/// report.add_series(AlgorithmSeries::new("Lineal", "linear"));
///
/// assert_eq!(report.labels(), vec!["Lineal"]);
/// assert!(report.averages("Binaria").is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    /// Benchmark name.
    pub name: String,
    /// Dataset sizes, in measurement order.
    pub sizes: Vec<usize>,
    /// Measured runs per algorithm and size.
    pub repetitions: usize,
    /// Seed used for datasets and targets, if fixed.
    pub seed: Option<u64>,
    /// One series per algorithm, in configuration order.
    pub series: Vec<AlgorithmSeries>,
}

impl BenchmarkReport {
    pub fn new(
        name: impl Into<String>,
        sizes: Vec<usize>,
        repetitions: usize,
        seed: Option<u64>,
    ) -> Self {
        Self {
            name: name.into(),
            sizes,
            repetitions,
            seed,
            series: Vec::new(),
        }
    }

    pub fn add_series(&mut self, series: AlgorithmSeries) {
        self.series.push(series);
    }

    /// Labels of every series, in report order.
    pub fn labels(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn series(&self, label: &str) -> Option<&AlgorithmSeries> {
        self.series.iter().find(|s| s.label == label)
    }

    /// Ordered average milliseconds for `label`.
    pub fn averages(&self, label: &str) -> Option<Vec<f64>> {
        self.series(label).map(AlgorithmSeries::averages_ms)
    }

    /// Label → ordered averages.
    pub fn to_map(&self) -> BTreeMap<String, Vec<f64>> {
        self.series
            .iter()
            .map(|s| (s.label.clone(), s.averages_ms()))
            .collect()
    }

    /// Ratio `baseline / candidate` per size.
    ///
    /// `None` for a size where the candidate average is zero or either
    /// series lacks a measurement.
    pub fn speedup(&self, baseline: &str, candidate: &str) -> Option<Vec<Option<f64>>> {
        let base = self.averages(baseline)?;
        let cand = self.averages(candidate)?;
        Some(
            (0..self.sizes.len())
                .map(|i| match (base.get(i), cand.get(i)) {
                    (Some(&b), Some(&c)) if c > 0.0 => Some(b / c),
                    _ => None,
                })
                .collect(),
        )
    }

    /// Largest average across every series, or 0 for an empty report.
    pub fn max_avg_ms(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.measurements.iter().map(Measurement::avg_ms))
            .fold(0.0, f64::max)
    }
}

pub(crate) fn duration_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
