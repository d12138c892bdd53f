//! Primary expressions: literals, variables, calls, groups, arrays and
//! keyword-introduced forms.

use rip_ir::{LoopKind, Node, NodeId, TokenEvent};
use rip_lexer::Role;
use tracing::trace;

use crate::{ParseError, Parser};

/// Keywords that introduce constructs outside the supported grammar.
const UNSUPPORTED_KEYWORDS: &[&str] = &[
    "BEGIN", "END", "alias", "break", "case", "class", "def", "for", "if", "module", "next",
    "redo", "retry", "return", "super", "undef", "unless", "yield",
];

impl<'src> Parser<'src> {
    pub(super) fn parse_primary(&mut self) -> Result<NodeId, ParseError> {
        let Some(token) = self
            .cursor
            .current()
            .copied()
            .filter(|t| t.role == Role::Significant)
        else {
            return Err(self.unexpected("expression"));
        };
        let text = token.raw.text;

        match token.raw.event {
            TokenEvent::Int => {
                self.cursor.advance();
                Ok(self.alloc(Node::Int(text.to_string())))
            }
            TokenEvent::GVar => {
                self.cursor.advance();
                let leaf = self.alloc(Node::GlobalVar(text.to_string()));
                Ok(self.alloc(Node::VarRef(leaf)))
            }
            TokenEvent::Backref => {
                self.cursor.advance();
                Ok(self.alloc(Node::BackRef(text.to_string())))
            }
            TokenEvent::Ident => self.parse_identifier(text),
            TokenEvent::Const => self.parse_constant(text),
            TokenEvent::Kw => self.parse_keyword(text),
            TokenEvent::LParen => {
                self.cursor.advance();
                let statements = self.parse_statements(&[")"])?;
                self.expect(TokenEvent::RParen, "`)`")?;
                Ok(self.alloc(Node::Paren(statements)))
            }
            TokenEvent::LBracket => {
                self.cursor.advance();
                let items = self.parse_list(TokenEvent::RBracket, "`]`")?;
                Ok(self.alloc(Node::Array(items)))
            }
            _ => Err(self.unexpected("expression")),
        }
    }

    fn parse_identifier(&mut self, name: &'src str) -> Result<NodeId, ParseError> {
        self.cursor.advance();
        if self.cursor.check(TokenEvent::LParen) && !self.cursor.space_before() {
            return self.parse_fcall(name);
        }
        if self.locals.contains(name) {
            let leaf = self.alloc(Node::Ident(name.to_string()));
            return Ok(self.alloc(Node::VarRef(leaf)));
        }
        if self.starts_command_argument() {
            return Err(self.unsupported("command call"));
        }
        trace!(name, "method call without arguments");
        if name.ends_with(['?', '!']) {
            Ok(self.alloc(Node::FCall {
                name: name.to_string(),
                args: None,
            }))
        } else {
            Ok(self.alloc(Node::VCall(name.to_string())))
        }
    }

    fn parse_constant(&mut self, name: &'src str) -> Result<NodeId, ParseError> {
        self.cursor.advance();
        if self.cursor.check(TokenEvent::LParen) && !self.cursor.space_before() {
            return self.parse_fcall(name);
        }
        if self.starts_command_argument() {
            return Err(self.unsupported("command call"));
        }
        let leaf = self.alloc(Node::Const(name.to_string()));
        Ok(self.alloc(Node::VarRef(leaf)))
    }

    /// `name(args)` with the cursor on `(`.
    fn parse_fcall(&mut self, name: &str) -> Result<NodeId, ParseError> {
        self.cursor.advance();
        let args = self.parse_list(TokenEvent::RParen, "`)`")?;
        Ok(self.alloc(Node::FCall {
            name: name.to_string(),
            args: Some(args.unwrap_or_default()),
        }))
    }

    fn parse_keyword(&mut self, kw: &'src str) -> Result<NodeId, ParseError> {
        match kw {
            "true" | "false" | "nil" | "self" | "__FILE__" | "__LINE__" | "__ENCODING__" => {
                self.cursor.advance();
                let leaf = self.alloc(Node::Keyword(kw.to_string()));
                Ok(self.alloc(Node::VarRef(leaf)))
            }
            "defined?" => {
                self.cursor.advance();
                let operand = if self.cursor.check(TokenEvent::LParen) && !self.cursor.space_before()
                {
                    self.parse_parenthesized_expr()?
                } else {
                    self.cursor.skip_newlines();
                    self.parse_arg()?
                };
                Ok(self.alloc(Node::Defined(operand)))
            }
            "not" => {
                self.cursor.advance();
                if !self.cursor.check(TokenEvent::LParen) || self.cursor.space_before() {
                    return Err(self.unsupported("`not` without parentheses inside an operand"));
                }
                let operand = self.parse_parenthesized_expr()?;
                Ok(self.alloc(Node::Unary {
                    operator: "not".to_string(),
                    operand,
                }))
            }
            "begin" => self.parse_begin(),
            "while" => self.parse_loop(LoopKind::While),
            "until" => self.parse_loop(LoopKind::Until),
            _ if UNSUPPORTED_KEYWORDS.contains(&kw) => {
                Err(self.unsupported(format!("`{kw}` expression")))
            }
            _ => Err(self.unexpected("expression")),
        }
    }

    /// `( expr )` with the cursor on `(`; no group node is produced.
    fn parse_parenthesized_expr(&mut self) -> Result<NodeId, ParseError> {
        self.cursor.advance();
        self.cursor.skip_newlines();
        let expr = self.parse_expr()?;
        self.cursor.skip_newlines();
        self.expect(TokenEvent::RParen, "`)`")?;
        Ok(expr)
    }

    /// Comma-separated operands up to `close`, with an optional trailing
    /// comma. `None` when the list is empty.
    pub(super) fn parse_list(
        &mut self,
        close: TokenEvent,
        what: &'static str,
    ) -> Result<Option<Vec<NodeId>>, ParseError> {
        self.cursor.skip_newlines();
        if self.cursor.check(close) {
            self.cursor.advance();
            return Ok(None);
        }
        let mut items = Vec::new();
        loop {
            items.push(self.parse_arg()?);
            self.cursor.skip_newlines();
            if !self.cursor.check(TokenEvent::Comma) {
                break;
            }
            self.cursor.advance();
            self.cursor.skip_newlines();
            if self.cursor.check(close) {
                break;
            }
        }
        self.expect(close, what)?;
        Ok(Some(items))
    }
}
