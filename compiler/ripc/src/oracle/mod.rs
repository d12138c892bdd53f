//! Three-way fixture evaluation.
//!
//! A fixture passes only when its expected output, the subject's output
//! and the reference output are all equal after normalization. Any other
//! combination is a mismatch, and which side disagrees tells whether the
//! subject, the fixture or the reference needs attention.

use std::fmt;

use tracing::{debug, trace};

use crate::{render_labels, render_tokens, Fixture, Mode, ProcessError, SetupError, SubjectRunner};

/// Which of the three outputs disagrees with the other two.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Divergence {
    /// Fixture and reference agree; the subject is wrong.
    Subject,
    /// Subject and reference agree; the fixture is out of date.
    StaleFixture,
    /// Fixture and subject agree; the reference side is wrong.
    Reference,
    AllDiffer,
}

impl Divergence {
    fn of(expected: &str, subject: &str, reference: &str) -> Self {
        if expected == reference {
            Divergence::Subject
        } else if subject == reference {
            Divergence::StaleFixture
        } else if expected == subject {
            Divergence::Reference
        } else {
            Divergence::AllDiffer
        }
    }
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Divergence::Subject => "subject diverges",
            Divergence::StaleFixture => "stale fixture",
            Divergence::Reference => "reference diverges",
            Divergence::AllDiffer => "all three differ",
        })
    }
}

/// Result of evaluating one fixture.
#[derive(Debug)]
pub enum Outcome {
    Passed,
    Mismatch {
        expected: String,
        subject: String,
        reference: String,
        divergence: Divergence,
    },
    /// The reference side could not produce an output.
    SetupError(SetupError),
    /// The subject could not be run to a successful exit.
    ProcessError(ProcessError),
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

/// Collapse an output to one line: one trailing newline is dropped and
/// every remaining newline becomes a single space.
pub fn normalize(output: &str) -> String {
    output
        .strip_suffix('\n')
        .unwrap_or(output)
        .replace('\n', " ")
}

/// The reference output for `source` in `mode`.
pub fn reference(mode: Mode, source: &str) -> Result<String, SetupError> {
    match mode {
        Mode::Tokenize => render_tokens(source),
        Mode::Parse => render_labels(source),
    }
}

/// Evaluate `fixture` in `mode` against the subject behind `runner`.
pub fn evaluate(fixture: &Fixture, mode: Mode, runner: &SubjectRunner) -> Outcome {
    let reference = match reference(mode, &fixture.source) {
        Ok(reference) => normalize(&reference),
        Err(err) => {
            debug!(line = fixture.line, %err, "reference setup failed");
            return Outcome::SetupError(err);
        }
    };
    let subject = match runner.run(mode, &fixture.source) {
        Ok(output) => normalize(&output.stdout),
        Err(err) => {
            debug!(line = fixture.line, %err, "subject run failed");
            return Outcome::ProcessError(err);
        }
    };
    let expected = normalize(&fixture.expected);
    trace!(line = fixture.line, %expected, %subject, %reference, "compared");

    if expected == subject && subject == reference {
        return Outcome::Passed;
    }
    let divergence = Divergence::of(&expected, &subject, &reference);
    Outcome::Mismatch {
        expected,
        subject,
        reference,
        divergence,
    }
}
