//! Report generation for benchmark results.

use std::fmt::{self, Write as _};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::result::BenchmarkReport;

/// CSV exporter for benchmark results.
///
/// One row per (size, algorithm) with the target, the index found, the
/// number of runs, and average/min/max milliseconds.
///
/// # Example
///
/// ```
/// use searchbench_benchmark::{BenchmarkReport, CsvExporter};
///
/// let report = BenchmarkReport::new("Test", vec![100], 5, None);
/// let csv = CsvExporter::to_string(&report);
/// assert!(csv.starts_with("size,algorithm,target,index,runs,avg_ms,min_ms,max_ms"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports the report to a CSV string.
    pub fn to_string(report: &BenchmarkReport) -> String {
        let mut output = String::new();
        let _ = Self::render(&mut output, report);
        output
    }

    fn render(output: &mut String, report: &BenchmarkReport) -> fmt::Result {
        writeln!(output, "size,algorithm,target,index,runs,avg_ms,min_ms,max_ms")?;

        // Size-major, so rows line up with the plotted x axis
        for (i, &size) in report.sizes.iter().enumerate() {
            for series in &report.series {
                let Some(m) = series.measurements.get(i) else {
                    continue;
                };
                let index = m
                    .outcome
                    .index()
                    .map(|idx| idx.to_string())
                    .unwrap_or_default();
                writeln!(
                    output,
                    "{},{},{},{},{},{:.6},{:.6},{:.6}",
                    size,
                    series.label,
                    m.target,
                    index,
                    m.run_count(),
                    m.avg_ms(),
                    m.min_ms(),
                    m.max_ms(),
                )?;
            }
        }
        Ok(())
    }

    /// Exports the report to a CSV file.
    pub fn to_file(report: &BenchmarkReport, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(report))
    }

    /// Writes the report as CSV to a writer.
    pub fn write<W: Write>(report: &BenchmarkReport, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(report).as_bytes())
    }
}

/// Markdown report generator.
///
/// Produces a summary table of average times per size with the speedup of
/// the last algorithm over the first, followed by per-algorithm details.
///
/// # Example
///
/// ```
/// use searchbench_benchmark::{BenchmarkReport, MarkdownReport};
///
/// let report = BenchmarkReport::new("Test", vec![100], 5, None);
/// let md = MarkdownReport::to_string(&report);
/// assert!(md.contains("# Benchmark: Test"));
/// assert!(md.contains("*No runs completed.*"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    pub fn to_string(report: &BenchmarkReport) -> String {
        let mut output = String::new();
        let _ = Self::render(&mut output, report);
        output
    }

    fn render(output: &mut String, report: &BenchmarkReport) -> fmt::Result {
        writeln!(output, "# Benchmark: {}", report.name)?;
        writeln!(output)?;

        let sizes: Vec<String> = report.sizes.iter().map(|s| s.to_string()).collect();
        writeln!(output, "- **Sizes**: {}", sizes.join(", "))?;
        writeln!(output, "- **Repetitions**: {}", report.repetitions)?;
        match report.seed {
            Some(seed) => writeln!(output, "- **Seed**: {}", seed)?,
            None => writeln!(output, "- **Seed**: random")?,
        }
        writeln!(output)?;

        writeln!(output, "## Summary")?;
        writeln!(output)?;

        if report.series.iter().all(|s| s.measurements.is_empty()) {
            writeln!(output, "*No runs completed.*")?;
            return Ok(());
        }

        let labels = report.labels();
        let speedup = match (labels.first(), labels.last()) {
            (Some(first), Some(last)) if labels.len() > 1 => report.speedup(first, last),
            _ => None,
        };

        write!(output, "| Size |")?;
        for label in &labels {
            write!(output, " {} (ms) |", label)?;
        }
        if speedup.is_some() {
            write!(output, " Speedup |")?;
        }
        writeln!(output)?;

        write!(output, "|------|")?;
        for _ in &labels {
            write!(output, "------|")?;
        }
        if speedup.is_some() {
            write!(output, "---------|")?;
        }
        writeln!(output)?;

        for (i, size) in report.sizes.iter().enumerate() {
            write!(output, "| {} |", size)?;
            for series in &report.series {
                match series.measurements.get(i) {
                    Some(m) => write!(output, " {:.6} |", m.avg_ms())?,
                    None => write!(output, " N/A |")?,
                }
            }
            if let Some(ratios) = &speedup {
                match ratios.get(i).copied().flatten() {
                    Some(ratio) => write!(output, " {:.1}x |", ratio)?,
                    None => write!(output, " N/A |")?,
                }
            }
            writeln!(output)?;
        }
        writeln!(output)?;

        writeln!(output, "## Run Details")?;
        for series in &report.series {
            writeln!(output)?;
            writeln!(output, "### {} ({})", series.label, series.name)?;
            writeln!(output)?;
            writeln!(output, "| Size | Target | Index | Avg (ms) | Min (ms) | Max (ms) |")?;
            writeln!(output, "|------|--------|-------|----------|----------|----------|")?;
            for m in &series.measurements {
                let index = m
                    .outcome
                    .index()
                    .map(|idx| idx.to_string())
                    .unwrap_or_else(|| "not found".to_string());
                writeln!(
                    output,
                    "| {} | {} | {} | {:.6} | {:.6} | {:.6} |",
                    m.size,
                    m.target,
                    index,
                    m.avg_ms(),
                    m.min_ms(),
                    m.max_ms(),
                )?;
            }
        }

        Ok(())
    }

    /// Writes the Markdown report to a file.
    pub fn to_file(report: &BenchmarkReport, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(report))
    }

    /// Writes the Markdown report to a writer.
    pub fn write<W: Write>(report: &BenchmarkReport, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(report).as_bytes())
    }
}
