//! Reference-side failures.

use rip_ir::PositionError;
use rip_lexer::LexError;
use rip_parse::ParseError;

use crate::fixture::MissingDelimiter;
use crate::ClassifyError;

/// The reference side could not produce its output for a fixture.
///
/// A setup error means the fixture (or the reference) is broken, not
/// the subject, so it is reported apart from mismatches.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("reference lexer: {0}")]
    Lex(#[from] LexError),
    #[error("reference parser: {0}")]
    Parse(#[from] ParseError),
    #[error("position: {0}")]
    Position(#[from] PositionError),
    #[error("classifier: {0}")]
    Classify(#[from] ClassifyError),
    #[error("token event {0:?} is not namespaced with `on_`")]
    MissingNamespace(&'static str),
    #[error("fixture {0}")]
    Fixture(#[from] MissingDelimiter),
}
