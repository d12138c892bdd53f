//! Statements.
//!
//! ```text
//! program    := statements EOF
//! statements := terms? (stmt (terms stmt)*)? terms?
//! stmt       := expr (modifier)*
//! modifier   := ("if" | "unless" | "while" | "until") expr
//!             | "rescue" expr
//! terms      := (NEWLINE | ";")+
//! ```
//!
//! Modifiers are left-associative, so `a if b while c` wraps the `if`
//! form in the `while` form.

use rip_ir::{LoopKind, Modifier, Node, NodeId, Program, TokenEvent};
use rip_stack::with_stack;
use tracing::trace;

use crate::{ParseError, Parser};

impl<'src> Parser<'src> {
    pub(crate) fn parse_program(&mut self) -> Result<Program, ParseError> {
        let statements = self.parse_statements(&[])?;
        if !self.cursor.is_eof() {
            return Err(self.unexpected("end of input"));
        }
        Ok(self.finish(statements))
    }

    fn at_closer(&self, closers: &[&str]) -> bool {
        match self.cursor.event() {
            Some(TokenEvent::Kw) => self.cursor.kw().is_some_and(|kw| closers.contains(&kw)),
            Some(TokenEvent::RParen) => closers.contains(&")"),
            _ => false,
        }
    }

    fn skip_terms(&mut self) -> bool {
        let mut any = false;
        while self.cursor.at_newline() || self.cursor.check(TokenEvent::Semicolon) {
            self.cursor.advance();
            any = true;
        }
        any
    }

    /// Statements up to end of input or one of `closers` (not consumed).
    pub(crate) fn parse_statements(
        &mut self,
        closers: &[&str],
    ) -> Result<Vec<NodeId>, ParseError> {
        let mut statements = Vec::new();
        self.skip_terms();
        while !self.cursor.is_eof() && !self.at_closer(closers) {
            statements.push(self.parse_stmt()?);
            if !self.skip_terms() && !self.cursor.is_eof() && !self.at_closer(closers) {
                return Err(self.unexpected("end of statement"));
            }
        }
        Ok(statements)
    }

    fn parse_stmt(&mut self) -> Result<NodeId, ParseError> {
        with_stack(|| {
            let mut statement = self.parse_expr()?;
            loop {
                let kind = match self.cursor.kw() {
                    Some("if") => Modifier::If,
                    Some("unless") => Modifier::Unless,
                    Some("while") => Modifier::While,
                    Some("until") => Modifier::Until,
                    Some("rescue") => Modifier::Rescue,
                    _ => break,
                };
                trace!(?kind, "statement modifier");
                self.cursor.advance();
                let predicate = self.parse_expr()?;
                statement = self.alloc(Node::Modifier {
                    kind,
                    statement,
                    predicate,
                });
            }
            Ok(statement)
        })
    }

    /// `begin statements [ensure statements] end`
    pub(crate) fn parse_begin(&mut self) -> Result<NodeId, ParseError> {
        self.expect_kw("begin")?;
        let body = self.parse_statements(&["end", "ensure", "rescue", "else"])?;
        let ensure = if self.cursor.check_kw("ensure") {
            self.cursor.advance();
            Some(self.parse_statements(&["end", "rescue", "else"])?)
        } else {
            None
        };
        if let Some(clause @ ("rescue" | "else")) = self.cursor.kw() {
            return Err(self.unsupported(format!("`{clause}` clause")));
        }
        self.expect_kw("end")?;
        Ok(self.alloc(Node::Begin { body, ensure }))
    }

    /// `while expr (do | terms) statements end`, likewise `until`.
    pub(crate) fn parse_loop(&mut self, kind: LoopKind) -> Result<NodeId, ParseError> {
        self.cursor.advance();
        let predicate = self.parse_expr()?;
        if self.cursor.check_kw("do") {
            self.cursor.advance();
        } else if !self.skip_terms() {
            return Err(self.unexpected("`do` or end of line"));
        }
        let body = self.parse_statements(&["end"])?;
        self.expect_kw("end")?;
        Ok(self.alloc(Node::Loop {
            kind,
            predicate,
            body,
        }))
    }
}
