//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use searchbench_config::SearchBenchConfig;
use searchbench_core::{AlgorithmKind, TargetPolicy};

#[derive(Debug, Parser)]
#[command(name = "searchbench", version, about = "Compare linear and binary search")]
pub struct Cli {
    /// Skip the banner and event log.
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a sorted list and print its start and end.
    Generate {
        /// Number of distinct integers.
        #[arg(allow_hyphen_values = true)]
        size: String,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate a list and search it once.
    Search {
        #[arg(value_enum)]
        algorithm: AlgorithmArg,

        /// Value to look for.
        #[arg(allow_hyphen_values = true)]
        target: String,

        /// Size of the generated list.
        #[arg(long, default_value = "100", allow_hyphen_values = true)]
        size: String,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Time both algorithms over several list sizes.
    Bench(BenchArgs),

    /// Interactive session: generate lists and search them repeatedly.
    Shell {
        #[arg(long)]
        seed: Option<u64>,

        /// Benchmark configuration used by the `bench` command.
        #[arg(long, short)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Linear,
    Binary,
}

impl From<AlgorithmArg> for AlgorithmKind {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Linear => AlgorithmKind::Linear,
            AlgorithmArg::Binary => AlgorithmKind::Binary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetArg {
    Random,
    Middle,
}

#[derive(Debug, Default, Args)]
pub struct BenchArgs {
    /// TOML or YAML configuration file.
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Comma-separated list sizes, e.g. 100,1000,10000.
    #[arg(long, value_delimiter = ',')]
    pub sizes: Vec<usize>,

    /// Measured runs per algorithm and size.
    #[arg(long, short)]
    pub repetitions: Option<usize>,

    /// Unmeasured runs before each measurement.
    #[arg(long)]
    pub warmup: Option<usize>,

    #[arg(long)]
    pub seed: Option<u64>,

    /// How the searched value is chosen from each list.
    #[arg(long, value_enum, conflicts_with = "position")]
    pub target: Option<TargetArg>,

    /// Search the element at this 0-based position.
    #[arg(long)]
    pub position: Option<usize>,

    #[arg(long)]
    pub csv: Option<String>,

    #[arg(long)]
    pub markdown: Option<String>,

    /// Do not print the text chart.
    #[arg(long)]
    pub no_chart: bool,
}

impl BenchArgs {
    /// Overlays explicit flags on loaded settings.
    pub fn apply(&self, mut settings: SearchBenchConfig) -> SearchBenchConfig {
        if !self.sizes.is_empty() {
            settings.sizes = self.sizes.clone();
        }
        if let Some(repetitions) = self.repetitions {
            settings.repetitions = repetitions;
        }
        if let Some(warmup) = self.warmup {
            settings.warmup_count = warmup;
        }
        if let Some(seed) = self.seed {
            settings.random_seed = Some(seed);
        }
        match (self.position, self.target) {
            (Some(position), _) => settings.target = TargetPolicy::Position(position),
            (None, Some(TargetArg::Random)) => settings.target = TargetPolicy::Random,
            (None, Some(TargetArg::Middle)) => settings.target = TargetPolicy::Middle,
            (None, None) => {}
        }
        if let Some(csv) = &self.csv {
            settings.output.csv = Some(csv.clone());
        }
        if let Some(markdown) = &self.markdown {
            settings.output.markdown = Some(markdown.clone());
        }
        if self.no_chart {
            settings.output.chart = false;
        }
        settings
    }
}
