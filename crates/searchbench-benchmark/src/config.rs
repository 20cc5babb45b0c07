//! Benchmark configuration.

use searchbench_config::{SearchBenchConfig, DEFAULT_REPETITIONS, DEFAULT_SIZES};
use searchbench_core::{AlgorithmKind, TargetPolicy};

/// Configuration for a benchmark run.
///
/// Controls dataset sizes, repetitions, seeding, target selection, and
/// optional output paths.
///
/// # Example
///
/// ```
/// use searchbench_benchmark::BenchmarkConfig;
///
/// let config = BenchmarkConfig::new("My Benchmark")
///     .with_sizes(vec![100, 1000])
///     .with_repetitions(10);
///
/// assert_eq!(config.name(), "My Benchmark");
/// assert_eq!(config.sizes(), &[100, 1000]);
/// assert_eq!(config.repetitions(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    name: String,
    sizes: Vec<usize>,
    repetitions: usize,
    warmup_count: usize,
    seed: Option<u64>,
    target: TargetPolicy,
    algorithms: Vec<AlgorithmKind>,
    csv_output_path: Option<String>,
    markdown_output_path: Option<String>,
}

impl BenchmarkConfig {
    /// Creates a new benchmark configuration with the given name.
    ///
    /// Defaults:
    /// - sizes: 100, 1 000, 10 000, 100 000
    /// - repetitions: 5
    /// - warmup_count: 0
    /// - target: random element of each dataset
    ///
    /// # Example
    ///
    /// ```
    /// use searchbench_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test Benchmark");
    /// assert_eq!(config.repetitions(), 5);
    /// assert_eq!(config.warmup_count(), 0);
    /// assert_eq!(config.sizes().len(), 4);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sizes: DEFAULT_SIZES.to_vec(),
            repetitions: DEFAULT_REPETITIONS,
            warmup_count: 0,
            seed: None,
            target: TargetPolicy::Random,
            algorithms: AlgorithmKind::ALL.to_vec(),
            csv_output_path: None,
            markdown_output_path: None,
        }
    }

    /// Builds a configuration from loaded settings.
    ///
    /// # Example
    ///
    /// ```
    /// use searchbench_benchmark::BenchmarkConfig;
    /// use searchbench_config::SearchBenchConfig;
    ///
    /// let settings = SearchBenchConfig::new().with_sizes(vec![10]).with_random_seed(3);
    /// let config = BenchmarkConfig::from_settings(&settings);
    /// assert_eq!(config.sizes(), &[10]);
    /// assert_eq!(config.seed(), Some(3));
    /// ```
    pub fn from_settings(settings: &SearchBenchConfig) -> Self {
        Self {
            name: settings.name.clone(),
            sizes: settings.sizes.clone(),
            repetitions: settings.repetitions,
            warmup_count: settings.warmup_count,
            seed: settings.random_seed,
            target: settings.target,
            algorithms: settings.algorithms.clone(),
            csv_output_path: settings.output.csv.clone(),
            markdown_output_path: settings.output.markdown.clone(),
        }
    }

    /// Sets the dataset sizes, measured in the given order.
    pub fn with_sizes(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    /// Sets the number of measured runs per algorithm and size.
    pub fn with_repetitions(mut self, count: usize) -> Self {
        self.repetitions = count;
        self
    }

    /// Sets the number of warmup iterations (not measured).
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.warmup_count = count;
        self
    }

    /// Fixes the random seed for datasets and targets.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets how the guaranteed-present target is chosen.
    pub fn with_target(mut self, target: TargetPolicy) -> Self {
        self.target = target;
        self
    }

    /// Replaces the compared algorithms.
    pub fn with_algorithms(mut self, algorithms: impl Into<Vec<AlgorithmKind>>) -> Self {
        self.algorithms = algorithms.into();
        self
    }

    /// Sets the output path for CSV export.
    ///
    /// # Example
    ///
    /// ```
    /// use searchbench_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test")
    ///     .with_csv_output("results.csv");
    /// assert_eq!(config.csv_output_path(), Some("results.csv"));
    /// ```
    pub fn with_csv_output(mut self, path: impl Into<String>) -> Self {
        self.csv_output_path = Some(path.into());
        self
    }

    /// Sets the output path for Markdown report.
    pub fn with_markdown_output(mut self, path: impl Into<String>) -> Self {
        self.markdown_output_path = Some(path.into());
        self
    }

    /// Returns the benchmark name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    pub fn warmup_count(&self) -> usize {
        self.warmup_count
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn target(&self) -> TargetPolicy {
        self.target
    }

    pub fn algorithms(&self) -> &[AlgorithmKind] {
        &self.algorithms
    }

    /// Returns the CSV output path, if set.
    pub fn csv_output_path(&self) -> Option<&str> {
        self.csv_output_path.as_deref()
    }

    /// Returns the Markdown output path, if set.
    pub fn markdown_output_path(&self) -> Option<&str> {
        self.markdown_output_path.as_deref()
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new("Search Comparison")
    }
}
