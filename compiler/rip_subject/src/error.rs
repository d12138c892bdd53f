use rip_lexer_core::RawTag;
use thiserror::Error;

/// Anything that stops the subject from producing output.
///
/// Offsets are character offsets into the whole source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubjectError {
    #[error("{offset}: unexpected character {text:?}")]
    InvalidInput { offset: usize, text: String },

    #[error("{offset}: expected {expected}, found {found:?}")]
    Unexpected {
        offset: usize,
        expected: &'static str,
        found: String,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("{offset}: `{keyword}` is not supported")]
    UnsupportedKeyword { offset: usize, keyword: String },

    /// A production completed with an operator the label table lacks.
    #[error("no label for operator {0:?}")]
    Unlabeled(RawTag),
}
