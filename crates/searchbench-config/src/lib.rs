//! Configuration system for SearchBench.
//!
//! Load benchmark configuration from TOML or YAML files to control dataset
//! sizes, repetitions, seeding, and report outputs without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use searchbench_config::SearchBenchConfig;
//! use searchbench_core::TargetPolicy;
//!
//! let config = SearchBenchConfig::from_toml_str(r#"
//!     sizes = [100, 1000]
//!     repetitions = 3
//!     random_seed = 42
//!     target = "middle"
//!
//!     [output]
//!     csv = "results.csv"
//! "#).unwrap();
//!
//! assert_eq!(config.sizes, vec![100, 1000]);
//! assert_eq!(config.target, TargetPolicy::Middle);
//! assert_eq!(config.output.csv.as_deref(), Some("results.csv"));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use searchbench_config::SearchBenchConfig;
//!
//! let config = SearchBenchConfig::load("searchbench.toml").unwrap_or_default();
//! assert_eq!(config.repetitions, 5);
//! ```

#[cfg(test)]
mod tests;

use std::path::Path;

use searchbench_core::{AlgorithmKind, TargetPolicy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dataset sizes measured when none are configured.
pub const DEFAULT_SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

/// Measured repetitions per algorithm and size when none are configured.
pub const DEFAULT_REPETITIONS: usize = 5;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main benchmark configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct SearchBenchConfig {
    /// Benchmark name used in report titles.
    pub name: String,

    /// Dataset sizes, measured in this order.
    pub sizes: Vec<usize>,

    /// Measured runs per algorithm and size.
    pub repetitions: usize,

    /// Unmeasured runs before the measured ones.
    pub warmup_count: usize,

    /// Random seed for reproducible datasets and targets.
    pub random_seed: Option<u64>,

    /// How the guaranteed-present target is chosen.
    pub target: TargetPolicy,

    /// Algorithms to compare, in report order.
    pub algorithms: Vec<AlgorithmKind>,

    /// Report outputs.
    pub output: OutputConfig,
}

impl Default for SearchBenchConfig {
    fn default() -> Self {
        Self {
            name: "Search Comparison".to_string(),
            sizes: DEFAULT_SIZES.to_vec(),
            repetitions: DEFAULT_REPETITIONS,
            warmup_count: 0,
            random_seed: None,
            target: TargetPolicy::default(),
            algorithms: AlgorithmKind::ALL.to_vec(),
            output: OutputConfig::default(),
        }
    }
}

impl SearchBenchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, choosing YAML for `.yaml`/`.yml`
    /// extensions and TOML otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, fails to parse, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path)?,
            _ => Self::from_toml_file(path)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Checks that the configuration can produce a measurement.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::Invalid("at least one size is required".into()));
        }
        if let Some(zero) = self.sizes.iter().position(|&s| s == 0) {
            return Err(ConfigError::Invalid(format!(
                "sizes[{}] must be a positive integer",
                zero
            )));
        }
        if self.repetitions == 0 {
            return Err(ConfigError::Invalid("repetitions must be at least 1".into()));
        }
        if self.algorithms.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one algorithm is required".into(),
            ));
        }
        // Reports key series by label, so each algorithm may appear once.
        for (i, algorithm) in self.algorithms.iter().enumerate() {
            if self.algorithms[..i].contains(algorithm) {
                return Err(ConfigError::Invalid(format!(
                    "algorithm '{}' is listed more than once",
                    algorithm
                )));
            }
        }
        Ok(())
    }

    /// Sets the benchmark name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replaces the dataset sizes.
    pub fn with_sizes(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    /// Sets the measured repetitions.
    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Sets the warmup count.
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.warmup_count = count;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the target policy.
    pub fn with_target(mut self, target: TargetPolicy) -> Self {
        self.target = target;
        self
    }

    /// Sets the CSV output path.
    pub fn with_csv_output(mut self, path: impl Into<String>) -> Self {
        self.output.csv = Some(path.into());
        self
    }

    /// Sets the Markdown output path.
    pub fn with_markdown_output(mut self, path: impl Into<String>) -> Self {
        self.output.markdown = Some(path.into());
        self
    }
}

/// Report output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OutputConfig {
    /// CSV export path.
    pub csv: Option<String>,

    /// Markdown report path.
    pub markdown: Option<String>,

    /// Whether to print the text chart after a run.
    #[serde(default = "default_chart")]
    pub chart: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv: None,
            markdown: None,
            chart: default_chart(),
        }
    }
}

fn default_chart() -> bool {
    true
}
