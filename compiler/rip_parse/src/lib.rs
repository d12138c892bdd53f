//! Reference parser for the ripcheck Ruby subset.
//!
//! Recursive descent over the reference token stream, producing a
//! [`Program`] whose post-order walk ([`rip_ir::events`]) gives the
//! production completion order.
//!
//! Local variables are tracked the way the language does it: an
//! identifier becomes local at the point it is assigned (before the
//! right-hand side is parsed), so later bare uses are variable references
//! instead of method calls.

mod cursor;
mod error;
mod grammar;

use rip_ir::{Node, NodeId, Program, SyntaxArena};
use rustc_hash::FxHashSet;
use tracing::debug;

use cursor::Cursor;
pub use error::ParseError;

/// Parse `source` into a syntax tree.
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = rip_lexer::tokenize(source)?;
    let mut parser = Parser::new(tokens);
    let program = parser.parse_program()?;
    debug!(
        statements = program.statements.len(),
        nodes = program.arena.len(),
        "parsed snippet"
    );
    Ok(program)
}

pub(crate) struct Parser<'src> {
    cursor: Cursor<'src>,
    arena: SyntaxArena,
    locals: FxHashSet<String>,
}

impl<'src> Parser<'src> {
    fn new(tokens: Vec<rip_lexer::Token<'src>>) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            arena: SyntaxArena::new(),
            locals: FxHashSet::default(),
        }
    }

    #[inline]
    fn alloc(&mut self, node: Node) -> NodeId {
        self.arena.alloc(node)
    }

    /// Error for the current token, or end of input.
    fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.cursor.current() {
            Some(token) => ParseError::Unexpected {
                line: token.raw.line,
                column: token.raw.column,
                expected,
                found: token.raw.text.to_string(),
            },
            None => ParseError::UnexpectedEof { expected },
        }
    }

    fn unsupported(&self, construct: impl Into<String>) -> ParseError {
        let (line, column) = self.position();
        ParseError::Unsupported {
            line,
            column,
            construct: construct.into(),
        }
    }

    fn position(&self) -> (usize, usize) {
        self.cursor
            .current()
            .map_or((0, 0), |t| (t.raw.line, t.raw.column))
    }

    fn expect_op(&mut self, op: &'static str) -> Result<(), ParseError> {
        if self.cursor.check_op(op) {
            self.cursor.advance();
            Ok(())
        } else {
            Err(self.unexpected(op))
        }
    }

    fn expect_kw(&mut self, kw: &'static str) -> Result<(), ParseError> {
        if self.cursor.check_kw(kw) {
            self.cursor.advance();
            Ok(())
        } else {
            Err(self.unexpected(kw))
        }
    }

    fn expect(&mut self, event: rip_ir::TokenEvent, what: &'static str) -> Result<(), ParseError> {
        if self.cursor.check(event) {
            self.cursor.advance();
            Ok(())
        } else {
            Err(self.unexpected(what))
        }
    }

    fn finish(&mut self, statements: Vec<NodeId>) -> Program {
        Program {
            arena: std::mem::take(&mut self.arena),
            statements,
        }
    }
}

#[cfg(test)]
mod tests;
