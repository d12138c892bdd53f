//! Hand-built tokenizer and parser for the ripcheck Ruby subset.
//!
//! This is the implementation the oracle checks. It shares nothing with
//! the reference lexer and parser: tokens come from
//! [`rip_lexer_core::RawScanner`] and labels from a Pratt parser that
//! reports productions to a [`Visitor`].

mod error;
mod lexer;
mod parser;
mod printer;
mod visitor;

pub use error::SubjectError;
pub use lexer::{lex, Token};
pub use printer::Printer;
pub use visitor::Visitor;

/// Render the token stream, one `start-end event text` line per token.
pub fn tokenize(source: &str) -> Result<Vec<String>, SubjectError> {
    Ok(lex(source)?
        .iter()
        .map(|t| format!("{}-{} {} {}", t.start, t.end, t.event(), t.text))
        .collect())
}

/// Parse `source` into its labels, in completion order.
pub fn parse(source: &str) -> Result<Vec<String>, SubjectError> {
    let tokens = lex(source)?;
    let mut printer = Printer::new();
    parser::parse(&tokens, &mut printer)?;
    Ok(printer.into_labels())
}

/// Drive any visitor over `source`.
pub fn visit(source: &str, visitor: &mut dyn Visitor) -> Result<(), SubjectError> {
    let tokens = lex(source)?;
    parser::parse(&tokens, visitor)
}
