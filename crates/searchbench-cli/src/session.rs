//! Interactive session state.
//!
//! A [`Session`] owns the current dataset and the generator that produced
//! it. Front ends hold one session and pass it to every handler.

use std::fmt;

use searchbench_core::{
    parse_size, parse_target, timed_search, AlgorithmKind, DataGenerator, Dataset,
    SearchAlgorithm, SearchBenchError, SearchOutcome, TimedSearch,
};
use thiserror::Error;

/// Failures surfaced to the user by session handlers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no list generated yet; generate data first")]
    NoDataset,

    #[error(transparent)]
    Core(#[from] SearchBenchError),
}

/// Summary of a freshly generated dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub size: usize,
    pub preview: String,
}

impl fmt::Display for Generated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "List generated with {} elements (sorted).", self.size)?;
        write!(f, "Sample of the generated list:\n{}", self.preview)
    }
}

/// Outcome and timing of one user-requested search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub algorithm: AlgorithmKind,
    pub target: i64,
    pub timed: TimedSearch,
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.timed.outcome {
            SearchOutcome::Found(index) => {
                write!(f, "Element {} found at index {}.", self.target, index)?
            }
            SearchOutcome::NotFound => write!(f, "Element {} not found.", self.target)?,
        }
        write!(
            f,
            " Time: {:.5} ms ({} search)",
            self.timed.elapsed_ms(),
            self.algorithm.name()
        )
    }
}

/// Application state shared by all handlers.
#[derive(Debug)]
pub struct Session {
    generator: DataGenerator,
    dataset: Option<Dataset>,
}

impl Session {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            generator: DataGenerator::from_seed_option(seed),
            dataset: None,
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Validates `size_text` and replaces the current dataset.
    ///
    /// The previous dataset survives a validation failure.
    pub fn generate(&mut self, size_text: &str) -> Result<Generated, SessionError> {
        let size = parse_size(size_text)?;
        self.generate_size(size)
    }

    pub fn generate_size(&mut self, size: usize) -> Result<Generated, SessionError> {
        let dataset = self.generator.generate(size)?;
        let generated = Generated {
            size: dataset.len(),
            preview: dataset.preview(),
        };
        self.dataset = Some(dataset);
        Ok(generated)
    }

    /// Searches the current dataset for the value in `target_text`.
    pub fn search(
        &self,
        algorithm: AlgorithmKind,
        target_text: &str,
    ) -> Result<SearchReport, SessionError> {
        let dataset = self.dataset.as_ref().ok_or(SessionError::NoDataset)?;
        let target = parse_target(target_text)?;
        let timed = timed_search(&algorithm, dataset, target);
        tracing::debug!(
            algorithm = algorithm.label(),
            value = target,
            found = timed.outcome.is_found(),
            "session search"
        );
        Ok(SearchReport {
            algorithm,
            target,
            timed,
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_before_generate() {
        let session = Session::new(Some(1));
        assert_eq!(
            session.search(AlgorithmKind::Linear, "5"),
            Err(SessionError::NoDataset)
        );
    }

    #[test]
    fn test_generate_and_search_both_algorithms() {
        let mut session = Session::new(Some(3));
        let generated = session.generate("1000").unwrap();
        assert_eq!(generated.size, 1000);
        assert!(generated.preview.contains("..."));

        let target = session.dataset().unwrap()[499];
        for algorithm in AlgorithmKind::ALL {
            let report = session.search(algorithm, &target.to_string()).unwrap();
            assert_eq!(report.timed.outcome, SearchOutcome::Found(499));
            assert!(report.to_string().starts_with(&format!(
                "Element {} found at index 499.",
                target
            )));
        }
    }

    #[test]
    fn test_missing_value_reports_not_found() {
        let mut session = Session::new(Some(3));
        session.generate("10").unwrap();
        let report = session.search(AlgorithmKind::Binary, "0").unwrap();
        assert_eq!(report.timed.outcome, SearchOutcome::NotFound);
        assert!(report.to_string().starts_with("Element 0 not found."));
    }

    #[test]
    fn test_absent_values_not_found() {
        let mut session = Session::new(Some(12));
        session.generate("200").unwrap();
        let absent = searchbench_test::absent_values(session.dataset().unwrap());
        assert!(!absent.is_empty());

        for value in absent {
            for algorithm in AlgorithmKind::ALL {
                let report = session.search(algorithm, &value.to_string()).unwrap();
                assert_eq!(report.timed.outcome, SearchOutcome::NotFound);
            }
        }
    }

    #[test]
    fn test_invalid_inputs() {
        let mut session = Session::new(Some(3));
        assert!(matches!(
            session.generate("-5"),
            Err(SessionError::Core(SearchBenchError::InvalidSize(_)))
        ));
        assert!(session.dataset().is_none());

        session.generate("20").unwrap();
        assert!(matches!(
            session.search(AlgorithmKind::Linear, "abc"),
            Err(SessionError::Core(SearchBenchError::InvalidTarget(_)))
        ));

        assert!(session.generate("zero").is_err());
        assert_eq!(session.dataset().unwrap().len(), 20);
    }
}
