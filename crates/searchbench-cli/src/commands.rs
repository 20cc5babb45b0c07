//! Subcommand handlers.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use searchbench_benchmark::{Benchmark, BenchmarkConfig, CsvExporter, MarkdownReport, TextChart};
use searchbench_config::{ConfigError, SearchBenchConfig};
use searchbench_core::{AlgorithmKind, SearchOutcome};
use thiserror::Error;

use crate::cli::BenchArgs;
use crate::session::{Session, SessionError};
use crate::shell::Shell;

/// Configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "searchbench.toml";

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Loads settings from `explicit`, or from [`DEFAULT_CONFIG_PATH`] when present.
///
/// An explicit file must load; a broken default file is reported on stderr
/// and ignored.
pub fn load_settings(explicit: Option<&Path>) -> Result<SearchBenchConfig, CliError> {
    load_settings_from(explicit, Path::new(DEFAULT_CONFIG_PATH), io::stderr().lock())
}

fn load_settings_from<W: Write>(
    explicit: Option<&Path>,
    default_path: &Path,
    mut warnings: W,
) -> Result<SearchBenchConfig, CliError> {
    if let Some(path) = explicit {
        return Ok(SearchBenchConfig::load(path)?);
    }

    if !default_path.exists() {
        return Ok(SearchBenchConfig::default());
    }
    match SearchBenchConfig::load(default_path) {
        Ok(settings) => Ok(settings),
        Err(err) => {
            writeln!(
                warnings,
                "{} ignoring {}: {}",
                "warning:".yellow().bold(),
                default_path.display(),
                err
            )?;
            Ok(SearchBenchConfig::default())
        }
    }
}

pub fn generate(size: &str, seed: Option<u64>) -> Result<(), CliError> {
    let mut session = Session::new(seed);
    let generated = session.generate(size)?;
    println!("{}", generated);
    Ok(())
}

pub fn search(
    algorithm: AlgorithmKind,
    target: &str,
    size: &str,
    seed: Option<u64>,
) -> Result<(), CliError> {
    let mut session = Session::new(seed);
    let generated = session.generate(size)?;
    println!("{}", generated);

    let report = session.search(algorithm, target)?;
    match report.timed.outcome {
        SearchOutcome::Found(_) => println!("{}", report.to_string().bright_green()),
        SearchOutcome::NotFound => println!("{}", report.to_string().yellow()),
    }
    Ok(())
}

pub fn bench(args: &BenchArgs) -> Result<(), CliError> {
    let settings = args.apply(load_settings(args.config.as_deref())?);
    settings.validate()?;

    let config = BenchmarkConfig::from_settings(&settings);
    let report = Benchmark::new(config.clone()).run().map_err(SessionError::from)?;

    let mut stdout = io::stdout().lock();
    if settings.output.chart {
        writeln!(stdout)?;
        write!(stdout, "{}", TextChart::new().render(&report))?;
    }
    writeln!(stdout)?;
    write!(stdout, "{}", MarkdownReport::to_string(&report))?;

    if let Some(path) = config.csv_output_path() {
        CsvExporter::to_file(&report, path).map_err(|source| CliError::Output {
            path: path.into(),
            source,
        })?;
        writeln!(stdout, "{} {}", "wrote".bright_green(), path)?;
    }
    if let Some(path) = config.markdown_output_path() {
        MarkdownReport::to_file(&report, path).map_err(|source| CliError::Output {
            path: path.into(),
            source,
        })?;
        writeln!(stdout, "{} {}", "wrote".bright_green(), path)?;
    }
    Ok(())
}

pub fn shell(seed: Option<u64>, config: Option<&Path>) -> Result<(), CliError> {
    let mut settings = load_settings(config)?;
    if seed.is_some() {
        settings.random_seed = seed;
    }
    settings.validate()?;

    let mut session = Session::new(settings.random_seed);
    let bench_config = BenchmarkConfig::from_settings(&settings);
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Shell::new(&mut session, bench_config).run(stdin, stdout)?;
    Ok(())
}
