//! Benchmark runner.

use std::time::Instant;

use searchbench_core::{
    timed_search, AlgorithmKind, DataGenerator, Result, SearchAlgorithm, SearchBenchError,
    SearchOutcome,
};
use tracing::{debug, info};

use crate::config::BenchmarkConfig;
use crate::result::{AlgorithmSeries, BenchmarkReport, Measurement};

/// Times search algorithms across dataset sizes.
///
/// Each size gets exactly one dataset and one guaranteed-present target;
/// every algorithm is measured against that same pair.
pub struct Benchmark {
    config: BenchmarkConfig,
}

impl Benchmark {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Runs the configured algorithms and returns aggregated results.
    ///
    /// # Errors
    ///
    /// Propagates [`SearchBenchError::InvalidSize`] from dataset generation,
    /// and returns [`SearchBenchError::InvalidConfig`] when there is nothing
    /// to measure.
    pub fn run(&self) -> Result<BenchmarkReport> {
        let algorithms: Vec<AlgorithmKind> = self.config.algorithms().to_vec();
        self.run_algorithms(&algorithms)
    }

    /// Runs the given algorithms instead of the configured ones.
    pub fn run_algorithms<A: SearchAlgorithm>(&self, algorithms: &[A]) -> Result<BenchmarkReport> {
        self.validate(algorithms)?;

        let config = &self.config;
        let started = Instant::now();
        info!(
            event = "bench_start",
            bench = config.name(),
            size_count = config.sizes().len() as u64,
            algorithm_count = algorithms.len() as u64,
            repetitions = config.repetitions() as u64,
        );

        let mut generator = DataGenerator::from_seed_option(config.seed());
        let mut series: Vec<AlgorithmSeries> = algorithms
            .iter()
            .map(|a| AlgorithmSeries::new(a.label(), a.name()))
            .collect();

        for &size in config.sizes() {
            let dataset = generator.generate(size)?;
            let target = generator.pick_target(&dataset, config.target())?;
            debug!(event = "size_start", size = size as u64, value = target);

            for (algorithm, series) in algorithms.iter().zip(series.iter_mut()) {
                let measurement = self.measure(algorithm, &dataset, size, target);
                info!(
                    event = "measurement",
                    algorithm = algorithm.label(),
                    size = size as u64,
                    avg_ms = measurement.avg_ms(),
                    found = measurement.outcome.is_found(),
                );
                series.measurements.push(measurement);
            }
        }

        let mut report = BenchmarkReport::new(
            config.name(),
            config.sizes().to_vec(),
            config.repetitions(),
            config.seed(),
        );
        for s in series {
            report.add_series(s);
        }

        info!(
            event = "bench_end",
            bench = config.name(),
            duration_ms = started.elapsed().as_millis() as u64,
        );
        Ok(report)
    }

    fn validate<A: SearchAlgorithm>(&self, algorithms: &[A]) -> Result<()> {
        if self.config.sizes().is_empty() {
            return Err(SearchBenchError::InvalidConfig(
                "at least one dataset size is required".to_string(),
            ));
        }
        if self.config.repetitions() == 0 {
            return Err(SearchBenchError::InvalidConfig(
                "repetitions must be at least 1".to_string(),
            ));
        }
        if algorithms.is_empty() {
            return Err(SearchBenchError::InvalidConfig(
                "at least one algorithm is required".to_string(),
            ));
        }
        // Series are looked up by label; a repeated label would shadow its twin.
        for (i, algorithm) in algorithms.iter().enumerate() {
            let label = algorithm.label();
            if algorithms[..i].iter().any(|a| a.label() == label) {
                return Err(SearchBenchError::InvalidConfig(format!(
                    "algorithm '{}' is listed more than once",
                    label
                )));
            }
        }
        Ok(())
    }

    /// Times one algorithm against a fixed dataset/target pair.
    fn measure<A: SearchAlgorithm>(
        &self,
        algorithm: &A,
        dataset: &[i64],
        size: usize,
        target: i64,
    ) -> Measurement {
        // Warmup runs
        for _ in 0..self.config.warmup_count() {
            timed_search(algorithm, dataset, target);
        }

        // Measurement runs
        let mut samples = Vec::with_capacity(self.config.repetitions());
        let mut outcome = SearchOutcome::NotFound;
        for _ in 0..self.config.repetitions() {
            let timed = timed_search(algorithm, dataset, target);
            outcome = timed.outcome;
            samples.push(timed.elapsed);
        }

        Measurement {
            size,
            target,
            outcome,
            samples,
        }
    }
}

/// Builder for creating benchmarks with fluent API.
pub struct BenchmarkBuilder {
    config: BenchmarkConfig,
}

impl BenchmarkBuilder {
    /// Creates a new benchmark builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: BenchmarkConfig::new(name),
        }
    }

    pub fn with_sizes(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.config = self.config.with_sizes(sizes);
        self
    }

    pub fn with_repetitions(mut self, count: usize) -> Self {
        self.config = self.config.with_repetitions(count);
        self
    }

    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.config = self.config.with_warmup_count(count);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    pub fn with_target(mut self, target: searchbench_core::TargetPolicy) -> Self {
        self.config = self.config.with_target(target);
        self
    }

    pub fn build(self) -> Benchmark {
        Benchmark::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchbench_core::{BinarySearch, LinearSearch, TargetPolicy};

    #[test]
    fn test_two_sizes_three_repetitions() {
        let report = BenchmarkBuilder::new("Test")
            .with_sizes(vec![100, 1000])
            .with_repetitions(3)
            .build()
            .run()
            .unwrap();

        for label in ["Lineal", "Binaria"] {
            let averages = report.averages(label).unwrap();
            assert_eq!(averages.len(), 2);
            assert!(averages.iter().all(|&ms| ms >= 0.0));
        }
        assert_eq!(report.sizes, vec![100, 1000]);
    }

    #[test]
    fn test_every_search_succeeds() {
        let report = BenchmarkBuilder::new("Test")
            .with_sizes(vec![10, 50, 200])
            .with_repetitions(2)
            .with_seed(11)
            .build()
            .run()
            .unwrap();

        for series in &report.series {
            for m in &series.measurements {
                assert!(m.outcome.is_found(), "{} size {}", series.label, m.size);
                assert_eq!(m.run_count(), 2);
            }
        }
    }

    #[test]
    fn test_same_target_for_each_algorithm() {
        let report = BenchmarkBuilder::new("Test")
            .with_sizes(vec![300])
            .with_repetitions(1)
            .with_seed(5)
            .with_target(TargetPolicy::Position(150))
            .build()
            .run()
            .unwrap();

        let linear = &report.series("Lineal").unwrap().measurements[0];
        let binary = &report.series("Binaria").unwrap().measurements[0];
        assert_eq!(linear.target, binary.target);
        assert_eq!(linear.outcome, SearchOutcome::Found(150));
        assert_eq!(binary.outcome, SearchOutcome::Found(150));
    }

    #[test]
    fn test_seeded_runs_pick_same_targets() {
        let run = || {
            BenchmarkBuilder::new("Test")
                .with_sizes(vec![100, 1000])
                .with_repetitions(1)
                .with_seed(77)
                .build()
                .run()
                .unwrap()
        };
        let targets = |r: &BenchmarkReport| -> Vec<i64> {
            r.series[0].measurements.iter().map(|m| m.target).collect()
        };
        assert_eq!(targets(&run()), targets(&run()));
    }

    #[test]
    fn test_invalid_size_propagates() {
        let result = BenchmarkBuilder::new("Test")
            .with_sizes(vec![10, 0])
            .build()
            .run();
        assert!(matches!(result, Err(SearchBenchError::InvalidSize(_))));
    }

    #[test]
    fn test_empty_parameters_rejected() {
        let no_sizes = BenchmarkBuilder::new("Test").with_sizes(Vec::new()).build();
        assert!(matches!(no_sizes.run(), Err(SearchBenchError::InvalidConfig(_))));

        let no_reps = BenchmarkBuilder::new("Test").with_repetitions(0).build();
        assert!(matches!(no_reps.run(), Err(SearchBenchError::InvalidConfig(_))));

        let none: [LinearSearch; 0] = [];
        let bench = BenchmarkBuilder::new("Test").with_sizes(vec![10]).build();
        assert!(matches!(
            bench.run_algorithms(&none),
            Err(SearchBenchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_duplicate_algorithms_rejected() {
        let bench = BenchmarkBuilder::new("Test")
            .with_sizes(vec![100])
            .with_repetitions(1)
            .build();

        assert!(matches!(
            bench.run_algorithms(&[AlgorithmKind::Linear, AlgorithmKind::Linear]),
            Err(SearchBenchError::InvalidConfig(_))
        ));
        assert!(matches!(
            bench.run_algorithms(&[LinearSearch, LinearSearch]),
            Err(SearchBenchError::InvalidConfig(_))
        ));

        let configured = Benchmark::new(
            BenchmarkConfig::new("Test")
                .with_sizes(vec![100])
                .with_algorithms(vec![AlgorithmKind::Binary, AlgorithmKind::Binary]),
        );
        assert!(matches!(
            configured.run(),
            Err(SearchBenchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_target_position_out_of_range() {
        let result = BenchmarkBuilder::new("Test")
            .with_sizes(vec![10])
            .with_target(TargetPolicy::Position(10))
            .build()
            .run();
        assert!(matches!(
            result,
            Err(SearchBenchError::TargetOutOfRange { position: 10, len: 10 })
        ));
    }

    #[test]
    fn test_run_single_concrete_algorithm() {
        let bench = BenchmarkBuilder::new("Test")
            .with_sizes(vec![64])
            .with_repetitions(2)
            .with_warmup_count(1)
            .build();
        let report = bench.run_algorithms(&[BinarySearch]).unwrap();
        assert_eq!(report.labels(), vec!["Binaria"]);
        assert!(report.averages("Lineal").is_none());
    }
}
