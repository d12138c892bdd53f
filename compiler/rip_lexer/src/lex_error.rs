//! Lexer errors.

/// Why the reference lexer rejected a snippet.
///
/// Positions are 1-based lines and character columns.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("{line}:{column}: unrecognized input {text:?}")]
    Unrecognized {
        line: usize,
        column: usize,
        text: String,
    },
    #[error("{line}:{column}: {construct} is not part of the supported grammar")]
    Unsupported {
        line: usize,
        column: usize,
        construct: &'static str,
    },
}
