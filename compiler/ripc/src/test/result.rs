//! Fixture result types.

use std::path::PathBuf;
use std::time::Duration;

use crate::{Mode, Outcome};

/// Result of evaluating one fixture line.
#[derive(Debug)]
pub struct FixtureResult {
    pub file: PathBuf,
    pub line: usize,
    pub source: String,
    pub outcome: Outcome,
    /// Time taken to evaluate the fixture.
    pub duration: Duration,
}

/// Summary of results for a single fixture file.
#[derive(Debug)]
pub struct FileSummary {
    pub path: PathBuf,
    pub mode: Mode,
    /// Results in line order.
    pub results: Vec<FixtureResult>,
    pub passed: usize,
    pub mismatched: usize,
    pub setup_errors: usize,
    /// Process failures, timeouts included.
    pub process_errors: usize,
    pub timeouts: usize,
    pub duration: Duration,
    /// Why the file could not be read or split into fixtures.
    pub error: Option<String>,
}

impl FileSummary {
    pub fn new(path: PathBuf, mode: Mode) -> Self {
        FileSummary {
            path,
            mode,
            results: Vec::new(),
            passed: 0,
            mismatched: 0,
            setup_errors: 0,
            process_errors: 0,
            timeouts: 0,
            duration: Duration::ZERO,
            error: None,
        }
    }

    pub fn add_result(&mut self, result: FixtureResult) {
        match &result.outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Mismatch { .. } => self.mismatched += 1,
            Outcome::SetupError(_) => self.setup_errors += 1,
            Outcome::ProcessError(err) => {
                self.process_errors += 1;
                if err.is_timeout() {
                    self.timeouts += 1;
                }
            }
        }
        self.duration += result.duration;
        self.results.push(result);
    }

    #[cold]
    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
    }

    pub fn total(&self) -> usize {
        self.passed + self.mismatched + self.setup_errors + self.process_errors
    }

    pub fn has_failures(&self) -> bool {
        self.total() != self.passed || self.error.is_some()
    }
}

/// Overall summary of a fixture run.
#[derive(Debug, Default)]
pub struct TestSummary {
    /// Results for each file, sorted by path.
    pub files: Vec<FileSummary>,
    pub passed: usize,
    pub mismatched: usize,
    pub setup_errors: usize,
    pub process_errors: usize,
    pub timeouts: usize,
    /// Files that could not be loaded.
    pub error_files: usize,
    /// Wall time for the whole run.
    pub duration: Duration,
}

impl TestSummary {
    pub fn new() -> Self {
        TestSummary::default()
    }

    pub fn add_file(&mut self, summary: FileSummary) {
        self.passed += summary.passed;
        self.mismatched += summary.mismatched;
        self.setup_errors += summary.setup_errors;
        self.process_errors += summary.process_errors;
        self.timeouts += summary.timeouts;
        if summary.error.is_some() {
            self.error_files += 1;
        }
        self.files.push(summary);
    }

    pub fn total(&self) -> usize {
        self.passed + self.mismatched + self.setup_errors + self.process_errors
    }

    pub fn has_failures(&self) -> bool {
        self.total() != self.passed || self.error_files > 0
    }

    /// Every fixture result, in (file, line) order.
    pub fn results(&self) -> impl Iterator<Item = &FixtureResult> {
        self.files.iter().flat_map(|file| &file.results)
    }

    /// Get exit code: 0 = all pass, 1 = any failure, 2 = no fixtures found.
    pub fn exit_code(&self) -> i32 {
        if self.total() == 0 && self.error_files == 0 {
            2
        } else {
            i32::from(self.has_failures())
        }
    }
}

#[cfg(test)]
mod tests;
