//! Benchmarking framework for SearchBench.
//!
//! This crate times search algorithms against generated sorted datasets and
//! turns the averages into reports.
//!
//! # Overview
//!
//! For every configured dataset size the runner:
//! - generates one dataset and picks a target that is guaranteed present
//! - executes optional warmup runs (not measured)
//! - times each algorithm `repetitions` times against that fixed pair
//! - records the mean elapsed milliseconds, preserving size order
//!
//! Results can be exported to CSV and Markdown, or drawn as a text chart.
//!
//! # Example
//!
//! ```
//! use searchbench_benchmark::{Benchmark, BenchmarkConfig};
//!
//! let config = BenchmarkConfig::new("Quick")
//!     .with_sizes(vec![100, 1000])
//!     .with_repetitions(3)
//!     .with_seed(42);
//!
//! let report = Benchmark::new(config).run().unwrap();
//!
//! assert_eq!(report.averages("Lineal").unwrap().len(), 2);
//! assert_eq!(report.averages("Binaria").unwrap().len(), 2);
//! ```

mod chart;
mod config;
mod report;
mod result;
mod runner;

pub use chart::TextChart;
pub use config::BenchmarkConfig;
pub use report::{CsvExporter, MarkdownReport};
pub use result::{AlgorithmSeries, BenchmarkReport, Measurement};
pub use runner::{Benchmark, BenchmarkBuilder};
