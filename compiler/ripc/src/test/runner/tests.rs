use super::*;
#[cfg(unix)]
use crate::Divergence;
use tempfile::tempdir;

/// A subject that always answers `INTEGER=1`.
#[cfg(unix)]
fn constant_subject() -> SubjectRunner {
    SubjectRunner::new("sh", Duration::from_secs(10))
        .with_args(["-c", "cat >/dev/null; echo INTEGER=1"])
}

#[cfg(unix)]
fn write_fixtures(dir: &Path) {
    std::fs::write(
        dir.join("parse.rb"),
        "1 # INTEGER=1\n\n2 # INTEGER=2\n1 # INTEGER=1\n",
    )
    .unwrap();
}

#[test]
fn test_config_defaults() {
    let config = OracleConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(10));
    assert!(config.parallel);
    assert!(!config.verbose);
    assert!(config.filter.is_none());
}

#[test]
fn test_explicit_subject_wins() {
    let config = OracleConfig {
        subject: Some(PathBuf::from("/opt/subject")),
        ..OracleConfig::default()
    };
    assert_eq!(config.subject_program(), Some(PathBuf::from("/opt/subject")));
    assert_eq!(config.runner().unwrap().timeout(), Duration::from_secs(10));
}

#[cfg(unix)]
#[test]
fn test_run_collects_results_in_line_order() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    let summary = run_fixtures(dir.path(), &constant_subject(), &OracleConfig::default());
    assert_eq!(summary.total(), 3);
    assert_eq!(summary.passed, 2);
    assert_eq!(summary.mismatched, 1);
    assert_eq!(summary.exit_code(), 1);

    let lines: Vec<_> = summary.results().map(|r| r.line).collect();
    assert_eq!(lines, [1, 3, 4]);
    assert!(matches!(
        summary.files[0].results[1].outcome,
        Outcome::Mismatch {
            divergence: Divergence::Subject,
            ..
        }
    ));
}

#[cfg(unix)]
#[test]
fn test_sequential_matches_parallel() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());
    let runner = constant_subject();

    let parallel = run_fixtures(dir.path(), &runner, &OracleConfig::default());
    let sequential = run_fixtures(
        dir.path(),
        &runner,
        &OracleConfig {
            parallel: false,
            ..OracleConfig::default()
        },
    );
    let render = |summary: &TestSummary| {
        summary
            .results()
            .map(|r| format!("{}:{:?}", r.line, r.outcome))
            .collect::<Vec<_>>()
    };
    assert_eq!(render(&parallel), render(&sequential));
}

#[cfg(unix)]
#[test]
fn test_filter_selects_by_source() {
    let dir = tempdir().unwrap();
    write_fixtures(dir.path());

    let config = OracleConfig {
        filter: Some("2".into()),
        ..OracleConfig::default()
    };
    let summary = run_fixtures(dir.path(), &constant_subject(), &config);
    assert_eq!(summary.total(), 1);
    assert_eq!(summary.mismatched, 1);
}

#[cfg(unix)]
#[test]
fn test_malformed_line_fails_alone() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("parse.rb"),
        "1 # INTEGER=1\n1 INTEGER=1\n1 # INTEGER=1\n",
    )
    .unwrap();

    let summary = run_fixtures(dir.path(), &constant_subject(), &OracleConfig::default());
    assert_eq!(summary.error_files, 0);
    assert_eq!(summary.passed, 2);
    assert_eq!(summary.setup_errors, 1);
    assert_eq!(summary.exit_code(), 1);

    let broken = &summary.files[0].results[1];
    assert_eq!(broken.line, 2);
    assert_eq!(broken.source, "1 INTEGER=1");
    assert!(matches!(
        broken.outcome,
        Outcome::SetupError(SetupError::Fixture(MissingDelimiter { line: 2, .. }))
    ));
}

#[test]
fn test_unreadable_file_is_reported_not_fatal() {
    let dir = tempdir().unwrap();
    // Not valid UTF-8, so the file cannot be read as text.
    std::fs::write(dir.path().join("parse.rb"), [0xff, 0xfe, b'\n']).unwrap();
    std::fs::write(dir.path().join("tokenize.rb"), "").unwrap();

    let runner = SubjectRunner::new("/nonexistent/rip-subject", Duration::from_secs(1));
    let summary = run_fixtures(dir.path(), &runner, &OracleConfig::default());
    assert_eq!(summary.files.len(), 2);
    assert_eq!(summary.error_files, 1);
    assert!(summary.files[0].error.as_deref().unwrap().contains("parse.rb"));
    assert_eq!(summary.exit_code(), 1);
}

#[test]
fn test_empty_tree_finds_nothing() {
    let dir = tempdir().unwrap();
    let runner = SubjectRunner::new("/nonexistent/rip-subject", Duration::from_secs(1));
    let summary = run_fixtures(dir.path(), &runner, &OracleConfig::default());
    assert_eq!(summary.exit_code(), 2);
}
