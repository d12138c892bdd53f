//! Fixture files.
//!
//! One fixture per line: `<source> # <expected>`. The line is split on
//! the first ` # `, so the expected output may itself contain ` # `
//! (a comment token) while the source may not.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Which subject operation a fixture file exercises.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Tokenize,
    Parse,
}

impl Mode {
    /// The mode named by a fixture file's stem prefix (`tokenize_ops.rb`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let stem = path.file_stem()?.to_str()?;
        if stem.starts_with("tokenize") {
            Some(Mode::Tokenize)
        } else if stem.starts_with("parse") {
            Some(Mode::Parse)
        } else {
            None
        }
    }

    /// The subject subcommand for this mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Tokenize => "tokenize",
            Mode::Parse => "parse",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fixture line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixture {
    /// 1-based line in the fixture file.
    pub line: usize,
    pub source: String,
    pub expected: String,
}

/// A fixture file could not be read.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A non-blank line with no ` # ` between source and expected output.
///
/// Only that line fails; the rest of its file still loads.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: missing ` # ` between source and expected output")]
pub struct MissingDelimiter {
    pub line: usize,
    /// The whole line as written.
    pub text: String,
}

const DELIMITER: &str = " # ";

/// Parse the fixtures in `content`, one entry per fixture line.
///
/// Blank lines and lines whose source part is empty are skipped.
pub fn parse_fixtures(content: &str) -> Vec<Result<Fixture, MissingDelimiter>> {
    let mut fixtures = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let line_number = i + 1;
        if line.trim().is_empty() {
            continue;
        }
        let Some((source, expected)) = line.split_once(DELIMITER) else {
            fixtures.push(Err(MissingDelimiter {
                line: line_number,
                text: line.to_string(),
            }));
            continue;
        };
        if source.is_empty() {
            continue;
        }
        fixtures.push(Ok(Fixture {
            line: line_number,
            source: source.to_string(),
            expected: expected.to_string(),
        }));
    }
    fixtures
}

/// Read and parse the fixture file at `path`.
pub fn load(path: &Path) -> Result<Vec<Result<Fixture, MissingDelimiter>>, FixtureError> {
    let content = fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_fixtures(&content))
}
