use super::*;
use crate::{Divergence, ProcessError, SetupError};
use rip_lexer::LexError;

fn result(line: usize, outcome: Outcome) -> FixtureResult {
    FixtureResult {
        file: PathBuf::from("parse.rb"),
        line,
        source: "1".into(),
        outcome,
        duration: Duration::from_millis(2),
    }
}

fn mismatch() -> Outcome {
    Outcome::Mismatch {
        expected: "INTEGER=2".into(),
        subject: "INTEGER=1".into(),
        reference: "INTEGER=1".into(),
        divergence: Divergence::StaleFixture,
    }
}

fn timeout() -> Outcome {
    Outcome::ProcessError(ProcessError::Timeout {
        after: Duration::from_secs(1),
        stdout: String::new(),
        stderr: String::new(),
    })
}

#[test]
fn test_file_summary_counts_each_outcome() {
    let mut summary = FileSummary::new(PathBuf::from("parse.rb"), Mode::Parse);
    summary.add_result(result(1, Outcome::Passed));
    summary.add_result(result(2, mismatch()));
    summary.add_result(result(
        3,
        Outcome::SetupError(SetupError::Lex(LexError::Unrecognized {
            line: 1,
            column: 0,
            text: "'".into(),
        })),
    ));
    summary.add_result(result(4, timeout()));

    assert_eq!(summary.passed, 1);
    assert_eq!(summary.mismatched, 1);
    assert_eq!(summary.setup_errors, 1);
    assert_eq!(summary.process_errors, 1);
    assert_eq!(summary.timeouts, 1);
    assert_eq!(summary.total(), 4);
    assert_eq!(summary.duration, Duration::from_millis(8));
    assert!(summary.has_failures());
}

#[test]
fn test_file_error_is_a_failure() {
    let mut summary = FileSummary::new(PathBuf::from("parse.rb"), Mode::Parse);
    assert!(!summary.has_failures());
    summary.set_error("line 3: missing delimiter".into());
    assert!(summary.has_failures());
}

#[test]
fn test_summary_exit_code() {
    let mut summary = TestSummary::new();
    assert_eq!(summary.exit_code(), 2); // No fixtures

    let mut file = FileSummary::new(PathBuf::from("parse.rb"), Mode::Parse);
    file.add_result(result(1, Outcome::Passed));
    summary.add_file(file);
    assert_eq!(summary.exit_code(), 0);

    let mut file = FileSummary::new(PathBuf::from("tokenize.rb"), Mode::Tokenize);
    file.add_result(result(1, mismatch()));
    summary.add_file(file);
    assert_eq!(summary.exit_code(), 1);
    assert_eq!(summary.total(), 2);
}

#[test]
fn test_summary_unreadable_file_fails_the_run() {
    let mut summary = TestSummary::new();
    let mut file = FileSummary::new(PathBuf::from("parse.rb"), Mode::Parse);
    file.set_error("cannot read parse.rb".into());
    summary.add_file(file);
    assert_eq!(summary.error_files, 1);
    assert_eq!(summary.exit_code(), 1);
}

#[test]
fn test_summary_results_in_file_order() {
    let mut summary = TestSummary::new();
    for name in ["a/parse.rb", "b/parse.rb"] {
        let mut file = FileSummary::new(PathBuf::from(name), Mode::Parse);
        for line in 1..=2 {
            let mut r = result(line, Outcome::Passed);
            r.file = PathBuf::from(name);
            file.add_result(r);
        }
        summary.add_file(file);
    }
    let order: Vec<_> = summary
        .results()
        .map(|r| (r.file.display().to_string(), r.line))
        .collect();
    assert_eq!(
        order,
        [
            ("a/parse.rb".to_string(), 1),
            ("a/parse.rb".to_string(), 2),
            ("b/parse.rb".to_string(), 1),
            ("b/parse.rb".to_string(), 2),
        ]
    );
}
