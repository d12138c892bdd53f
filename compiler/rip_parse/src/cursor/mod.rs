//! Token cursor.
//!
//! Walks the reference token stream, stepping over trivia so the parser
//! only ever looks at significant tokens and statement-ending newlines.
//! Whitespace stays queryable through [`Cursor::space_before`] and
//! [`Cursor::space_after`].

use rip_ir::TokenEvent;
use rip_lexer::{Role, Token};
use tracing::trace;

pub struct Cursor<'src> {
    tokens: Vec<Token<'src>>,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(tokens: Vec<Token<'src>>) -> Self {
        let mut cursor = Cursor { tokens, pos: 0 };
        cursor.skip_trivia();
        cursor
    }

    fn skip_trivia(&mut self) {
        while self
            .tokens
            .get(self.pos)
            .is_some_and(|t| t.role == Role::Trivia)
        {
            self.pos += 1;
        }
    }

    /// Current non-trivia token, if any.
    #[inline]
    pub fn current(&self) -> Option<&Token<'src>> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Consume the current token and step over the trivia after it.
    pub fn advance(&mut self) -> Option<Token<'src>> {
        let token = self.tokens.get(self.pos).copied();
        if let Some(token) = token {
            trace!(event = token.raw.event.event_name(), text = token.raw.text, "advance");
            self.pos += 1;
            self.skip_trivia();
        }
        token
    }

    /// Current significant token's event.
    pub fn event(&self) -> Option<TokenEvent> {
        self.current()
            .filter(|t| t.role == Role::Significant)
            .map(|t| t.raw.event)
    }

    #[inline]
    pub fn check(&self, event: TokenEvent) -> bool {
        self.event() == Some(event)
    }

    fn text_of(&self, event: TokenEvent) -> Option<&'src str> {
        self.current()
            .filter(|t| t.role == Role::Significant && t.raw.event == event)
            .map(|t| t.raw.text)
    }

    /// Text of the current operator token.
    pub fn op(&self) -> Option<&'src str> {
        self.text_of(TokenEvent::Op)
    }

    /// Text of the current keyword token.
    pub fn kw(&self) -> Option<&'src str> {
        self.text_of(TokenEvent::Kw)
    }

    pub fn check_op(&self, text: &str) -> bool {
        self.op() == Some(text)
    }

    pub fn check_kw(&self, text: &str) -> bool {
        self.kw() == Some(text)
    }

    /// Current operator, if it is one of `ops`.
    pub fn op_in(&self, ops: &[&str]) -> Option<&'src str> {
        self.op().filter(|op| ops.contains(op))
    }

    /// True at a newline (or comment) that ends a statement.
    pub fn at_newline(&self) -> bool {
        self.current().is_some_and(|t| t.role == Role::Newline)
    }

    pub fn skip_newlines(&mut self) {
        while self.at_newline() {
            self.advance();
        }
    }

    /// Whitespace directly precedes the current token.
    pub fn space_before(&self) -> bool {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .is_some_and(|t| t.raw.event == TokenEvent::Sp)
    }

    /// Whitespace directly follows the current token.
    pub fn space_after(&self) -> bool {
        self.tokens
            .get(self.pos + 1)
            .is_some_and(|t| t.raw.event == TokenEvent::Sp)
    }
}
