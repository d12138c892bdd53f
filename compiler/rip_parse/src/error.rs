//! Parse errors.

use rip_lexer::LexError;

/// Why the reference parser rejected a snippet.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("{line}:{column}: expected {expected}, found {found:?}")]
    Unexpected {
        line: usize,
        column: usize,
        expected: &'static str,
        found: String,
    },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("{line}:{column}: {construct} is not part of the supported grammar")]
    Unsupported {
        line: usize,
        column: usize,
        construct: String,
    },
    #[error("{line}:{column}: `{operator}` is non-associative")]
    NonAssociative {
        line: usize,
        column: usize,
        operator: String,
    },
    #[error("{line}:{column}: cannot assign to `{target}`")]
    InvalidTarget {
        line: usize,
        column: usize,
        target: String,
    },
}
