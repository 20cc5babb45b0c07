//! Text rendering of average times per dataset size.

use std::fmt::{self, Write as _};

use crate::result::BenchmarkReport;

const DEFAULT_WIDTH: usize = 40;

/// Horizontal bar chart: one group per size, one bar per algorithm.
///
/// Bars share a single scale, so the longest bar is the slowest average
/// across the whole report.
///
/// # Example
///
/// ```
/// use searchbench_benchmark::{BenchmarkReport, TextChart};
///
/// let report = BenchmarkReport::new("Empty", vec![], 5, None);
/// assert!(TextChart::new().render(&report).contains("no measurements"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextChart {
    width: usize,
}

impl TextChart {
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
        }
    }

    /// Sets the width of the longest bar, in characters.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    pub fn render(&self, report: &BenchmarkReport) -> String {
        let mut output = String::new();
        let _ = self.render_into(&mut output, report);
        output
    }

    fn render_into(&self, output: &mut String, report: &BenchmarkReport) -> fmt::Result {
        writeln!(output, "Average search time (ms) by list size")?;

        let measured = report.series.iter().any(|s| !s.measurements.is_empty());
        if report.sizes.is_empty() || !measured {
            writeln!(output, "  (no measurements)")?;
            return Ok(());
        }

        let max = report.max_avg_ms();
        let label_width = report
            .series
            .iter()
            .map(|s| s.label.chars().count())
            .max()
            .unwrap_or(0);

        for (i, size) in report.sizes.iter().enumerate() {
            writeln!(output)?;
            writeln!(output, "n = {}", size)?;
            for series in &report.series {
                let Some(m) = series.measurements.get(i) else {
                    continue;
                };
                let avg = m.avg_ms();
                let filled = self.bar_len(avg, max);
                writeln!(
                    output,
                    "  {:<label_width$} |{}{}| {:.6}",
                    series.label,
                    "#".repeat(filled),
                    " ".repeat(self.width - filled),
                    avg,
                    label_width = label_width,
                )?;
            }
        }
        Ok(())
    }

    fn bar_len(&self, value: f64, max: f64) -> usize {
        if max <= 0.0 || value <= 0.0 {
            return 0;
        }
        let scaled = (value / max * self.width as f64).round() as usize;
        scaled.clamp(1, self.width)
    }
}

impl Default for TextChart {
    fn default() -> Self {
        Self::new()
    }
}
