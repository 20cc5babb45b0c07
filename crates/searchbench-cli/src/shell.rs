//! Line-oriented command loop over a [`Session`].

use std::io::{self, BufRead, Write};

use searchbench_benchmark::{Benchmark, BenchmarkConfig, MarkdownReport, TextChart};
use searchbench_core::AlgorithmKind;

use crate::session::Session;

const HELP: &str = "\
Commands:
  generate <size>   generate a sorted list of <size> distinct integers
  linear <value>    linear search for <value> in the current list
  binary <value>    binary search for <value> in the current list
  show              print the start and end of the current list
  bench             time both algorithms over the configured sizes
  help              show this message
  quit              leave the shell";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Generate(String),
    Search(AlgorithmKind, String),
    Show,
    Bench,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl ShellCommand {
    /// Parses one line; arguments are validated later by the session.
    pub fn parse(line: &str) -> Self {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return ShellCommand::Empty;
        };
        let argument = parts.next().unwrap_or("").to_string();

        match command.to_ascii_lowercase().as_str() {
            "generate" | "gen" => ShellCommand::Generate(argument),
            "linear" => ShellCommand::Search(AlgorithmKind::Linear, argument),
            "binary" => ShellCommand::Search(AlgorithmKind::Binary, argument),
            "show" => ShellCommand::Show,
            "bench" | "plot" => ShellCommand::Bench,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => ShellCommand::Unknown(other.to_string()),
        }
    }
}

/// Drives a session from text input.
pub struct Shell<'a> {
    session: &'a mut Session,
    bench_config: BenchmarkConfig,
    chart: TextChart,
}

impl<'a> Shell<'a> {
    pub fn new(session: &'a mut Session, bench_config: BenchmarkConfig) -> Self {
        Self {
            session,
            bench_config,
            chart: TextChart::new(),
        }
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// Handler failures are written to `output` and the loop continues.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "Type 'help' for commands.")?;
        prompt(&mut output)?;

        for line in input.lines() {
            let line = line?;
            if !self.execute(ShellCommand::parse(&line), &mut output)? {
                break;
            }
            prompt(&mut output)?;
        }
        Ok(())
    }

    /// Executes one command; returns `false` when the shell should stop.
    fn execute<W: Write>(&mut self, command: ShellCommand, output: &mut W) -> io::Result<bool> {
        match command {
            ShellCommand::Generate(size) => match self.session.generate(&size) {
                Ok(generated) => writeln!(output, "{}", generated)?,
                Err(err) => writeln!(output, "error: {}", err)?,
            },
            ShellCommand::Search(algorithm, target) => {
                match self.session.search(algorithm, &target) {
                    Ok(report) => writeln!(output, "{}", report)?,
                    Err(err) => writeln!(output, "error: {}", err)?,
                }
            }
            ShellCommand::Show => match self.session.dataset() {
                Some(dataset) => writeln!(output, "{}", dataset.preview())?,
                None => writeln!(output, "no list generated yet")?,
            },
            // Benchmarks generate their own lists; the session list is left as is.
            ShellCommand::Bench => match Benchmark::new(self.bench_config.clone()).run() {
                Ok(report) => {
                    write!(output, "{}", self.chart.render(&report))?;
                    writeln!(output)?;
                    write!(output, "{}", MarkdownReport::to_string(&report))?;
                }
                Err(err) => writeln!(output, "error: {}", err)?,
            },
            ShellCommand::Help => writeln!(output, "{}", HELP)?,
            ShellCommand::Quit => return Ok(false),
            ShellCommand::Empty => {}
            ShellCommand::Unknown(command) => {
                writeln!(output, "unknown command '{}'; type 'help'", command)?
            }
        }
        Ok(true)
    }
}

fn prompt<W: Write>(output: &mut W) -> io::Result<()> {
    write!(output, "> ")?;
    output.flush()
}
