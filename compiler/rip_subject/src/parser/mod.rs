//! Pratt parser.
//!
//! Drives a [`Visitor`] instead of building a tree: every parse function
//! reports its production after its operands, so calls arrive in
//! completion order. Operators come from the table in [`rules`].
//!
//! The parser sees significant tokens plus statement-ending newlines;
//! whitespace, comments and ignored newlines are dropped up front, keeping
//! only whether whitespace preceded each token.

mod rules;

use rip_lexer_core::RawTag;
use rip_stack::with_stack;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::lexer::{is_assignment, Token};
use crate::{SubjectError, Visitor};

use rules::Prec;

/// Reserved words accepted as plain values.
const PSEUDO_VARIABLES: &[&str] = &["__FILE__", "__LINE__", "__ENCODING__"];

/// Items in a list are single operands: no `and`/`or`/`not` at top level.
const ITEM: Prec = Prec::Assignment;

#[derive(Copy, Clone, Debug)]
struct Tok<'src> {
    tag: RawTag,
    text: &'src str,
    start: usize,
    spaced: bool,
}

impl Tok<'_> {
    fn eof(start: usize) -> Self {
        Tok {
            tag: RawTag::Eof,
            text: "",
            start,
            spaced: false,
        }
    }
}

/// Parse `tokens`, reporting productions to `visitor`.
pub fn parse(tokens: &[Token<'_>], visitor: &mut dyn Visitor) -> Result<(), SubjectError> {
    let mut parser = Parser::new(tokens, visitor);
    let statements = parser.statements(&[])?;
    if parser.current().tag != RawTag::Eof {
        return Err(parser.unexpected("end of input"));
    }
    debug!(statements, "parsed snippet");
    Ok(())
}

pub(crate) struct Parser<'src, 'v> {
    tokens: Vec<Tok<'src>>,
    pos: usize,
    previous: Tok<'src>,
    visitor: &'v mut dyn Visitor,
    locals: FxHashSet<&'src str>,
}

impl<'src, 'v> Parser<'src, 'v> {
    fn new(tokens: &[Token<'src>], visitor: &'v mut dyn Visitor) -> Self {
        let mut kept = Vec::with_capacity(tokens.len() + 1);
        let mut spaced = false;
        for token in tokens {
            if token.tag.is_trivia() && !token.terminator {
                spaced = true;
                continue;
            }
            let tag = if token.terminator {
                RawTag::Newline
            } else {
                token.tag
            };
            kept.push(Tok {
                tag,
                text: token.text,
                start: token.start,
                spaced,
            });
            spaced = false;
        }
        let end = tokens.last().map_or(0, |t| t.end);
        kept.push(Tok::eof(end));
        Parser {
            tokens: kept,
            pos: 0,
            previous: Tok::eof(0),
            visitor,
            locals: FxHashSet::default(),
        }
    }

    // ─── Token access ──────────────────────────────────────────

    fn current(&self) -> Tok<'src> {
        self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn check(&self, tag: RawTag) -> bool {
        self.current().tag == tag
    }

    /// The current token is `tag` with no whitespace before it.
    fn check_adjacent(&self, tag: RawTag) -> bool {
        let current = self.current();
        current.tag == tag && !current.spaced
    }

    fn advance(&mut self) -> Tok<'src> {
        let token = self.current();
        if token.tag != RawTag::Eof {
            self.pos += 1;
        }
        self.previous = token;
        token
    }

    fn accept(&mut self, tag: RawTag) -> bool {
        if self.check(tag) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, tag: RawTag, what: &'static str) -> Result<(), SubjectError> {
        if self.accept(tag) {
            Ok(())
        } else {
            Err(self.unexpected(what))
        }
    }

    fn unexpected(&self, expected: &'static str) -> SubjectError {
        let current = self.current();
        match current.tag {
            RawTag::Eof => SubjectError::UnexpectedEof { expected },
            RawTag::Newline => SubjectError::Unexpected {
                offset: current.start,
                expected,
                found: "end of line".to_string(),
            },
            _ => SubjectError::Unexpected {
                offset: current.start,
                expected,
                found: current.text.to_string(),
            },
        }
    }

    fn skip_newlines(&mut self) {
        while self.accept(RawTag::Newline) {}
    }

    /// Skip newlines and semicolons; true if any were skipped.
    fn skip_terms(&mut self) -> bool {
        let mut any = false;
        while matches!(self.current().tag, RawTag::Newline | RawTag::Semicolon) {
            self.advance();
            any = true;
        }
        any
    }

    // ─── Statements ────────────────────────────────────────────

    fn at_end(&self, closers: &[RawTag]) -> bool {
        let tag = self.current().tag;
        tag == RawTag::Eof || closers.contains(&tag)
    }

    /// Statements up to end of input or one of `closers` (not consumed).
    fn statements(&mut self, closers: &[RawTag]) -> Result<usize, SubjectError> {
        let mut count = 0;
        self.skip_terms();
        while !self.at_end(closers) {
            self.expression(Prec::Lowest)?;
            count += 1;
            if !self.skip_terms() && !self.at_end(closers) {
                return Err(self.unexpected("end of statement"));
            }
        }
        Ok(count)
    }

    fn expression(&mut self, min: Prec) -> Result<(), SubjectError> {
        with_stack(|| self.precedence(min))
    }

    fn precedence(&mut self, min: Prec) -> Result<(), SubjectError> {
        let Some(prefix) = Self::rule(self.current().tag).prefix else {
            return Err(self.unexpected("expression"));
        };
        self.advance();
        prefix(self)?;

        loop {
            let rule = Self::rule(self.current().tag);
            let Some(infix) = rule.infix else { break };
            if rule.left < min {
                break;
            }
            self.advance();
            infix(self)?;
        }
        Ok(())
    }

    /// The current token can begin an operand. Loop keywords here are
    /// modifiers, not loops.
    fn starts_operand(&self) -> bool {
        let tag = self.current().tag;
        !matches!(tag, RawTag::While | RawTag::Until) && Self::rule(tag).prefix.is_some()
    }

    /// Comma-separated operands up to `close`, trailing comma allowed.
    fn list(&mut self, close: RawTag, what: &'static str) -> Result<usize, SubjectError> {
        self.skip_newlines();
        let mut count = 0;
        while !self.check(close) {
            self.expression(ITEM)?;
            count += 1;
            self.skip_newlines();
            if !self.accept(RawTag::Comma) {
                break;
            }
            self.skip_newlines();
        }
        self.expect(close, what)?;
        Ok(count)
    }

    // ─── Prefix rules ──────────────────────────────────────────

    fn literal(&mut self) -> Result<(), SubjectError> {
        let token = self.previous;
        match token.tag {
            RawTag::Int => self.visitor.integer(token.text),
            RawTag::GlobalVar => self.visitor.global_variable(token.text),
            RawTag::BackRef => self.visitor.back_reference(token.text),
            RawTag::NthRef => self.visitor.nth_reference(token.text),
            RawTag::OtherKeyword if PSEUDO_VARIABLES.contains(&token.text) => {}
            RawTag::OtherKeyword => {
                return Err(SubjectError::UnsupportedKeyword {
                    offset: token.start,
                    keyword: token.text.to_string(),
                })
            }
            keyword => self.visitor.keyword_literal(keyword)?,
        }
        Ok(())
    }

    /// Identifiers and constants: locals, assignment targets and calls.
    fn identifier(&mut self) -> Result<(), SubjectError> {
        let token = self.previous;
        let name = token.text;
        if self.check_adjacent(RawTag::LeftParen) {
            self.advance();
            let args = self.list(RawTag::RightParen, "`)`")?;
            self.visitor.fcall(name, args);
            return Ok(());
        }
        match token.tag {
            RawTag::Const => {}
            RawTag::MethodIdent => self.visitor.fcall(name, 0),
            _ if self.locals.contains(name) => {}
            _ if is_assignment(self.current().tag) => {
                trace!(name, "new local");
                self.locals.insert(name);
            }
            _ => self.visitor.vcall(name),
        }
        Ok(())
    }

    fn group(&mut self) -> Result<(), SubjectError> {
        self.statements(&[RawTag::RightParen])?;
        self.expect(RawTag::RightParen, "`)`")?;
        self.visitor.group();
        Ok(())
    }

    fn array(&mut self) -> Result<(), SubjectError> {
        let len = self.list(RawTag::RightBracket, "`]`")?;
        self.visitor.array(len);
        Ok(())
    }

    /// `begin statements [ensure statements] end`
    fn begin(&mut self) -> Result<(), SubjectError> {
        self.statements(&[RawTag::Ensure, RawTag::End])?;
        let has_ensure = self.accept(RawTag::Ensure);
        if has_ensure {
            self.statements(&[RawTag::End])?;
        }
        self.expect(RawTag::End, "`end`")?;
        self.visitor.begin_block(has_ensure);
        Ok(())
    }

    /// `while expr (do | terms) statements end`, likewise `until`.
    fn loop_block(&mut self) -> Result<(), SubjectError> {
        let keyword = self.previous.tag;
        self.expression(Prec::Lowest)?;
        if !self.accept(RawTag::Do) && !self.skip_terms() {
            return Err(self.unexpected("`do` or end of line"));
        }
        self.statements(&[RawTag::End])?;
        self.expect(RawTag::End, "`end`")?;
        self.visitor.loop_block(keyword)
    }

    fn defined(&mut self) -> Result<(), SubjectError> {
        if self.check_adjacent(RawTag::LeftParen) {
            self.advance();
            self.skip_newlines();
            self.expression(Prec::Lowest)?;
            self.skip_newlines();
            self.expect(RawTag::RightParen, "`)`")?;
        } else {
            self.expression(Prec::Assignment)?;
        }
        self.visitor.defined();
        Ok(())
    }

    fn not(&mut self) -> Result<(), SubjectError> {
        self.expression(Prec::Not)?;
        self.visitor.unary(RawTag::Not)
    }

    /// `!x` `~x` `+x`
    fn unary(&mut self) -> Result<(), SubjectError> {
        let operator = self.previous.tag;
        self.expression(Prec::Unary)?;
        self.visitor.unary(operator)
    }

    /// `-x` binds looser than `**`: `-2 ** 2` negates the power.
    fn unary_minus(&mut self) -> Result<(), SubjectError> {
        self.expression(Prec::Exponent)?;
        self.visitor.unary(RawTag::Minus)
    }

    /// `..x` `...x`
    fn beginless(&mut self) -> Result<(), SubjectError> {
        let operator = self.previous.tag;
        self.expression(Prec::Range.next())?;
        self.visitor.range(operator, false)
    }

    // ─── Infix rules ───────────────────────────────────────────

    fn binary(&mut self) -> Result<(), SubjectError> {
        let operator = self.previous.tag;
        self.expression(Self::rule(operator).right)?;
        self.visitor.binary(operator)
    }

    fn assign(&mut self) -> Result<(), SubjectError> {
        let operator = self.previous.tag;
        self.expression(Self::rule(operator).right)?;
        self.visitor.assign(operator)
    }

    fn modifier(&mut self) -> Result<(), SubjectError> {
        let keyword = self.previous.tag;
        self.expression(Self::rule(keyword).right)?;
        self.visitor.modifier(keyword)
    }

    /// `x..y`, or endless `x..` when no operand follows.
    fn range(&mut self) -> Result<(), SubjectError> {
        let operator = self.previous.tag;
        if self.starts_operand() {
            self.expression(Self::rule(operator).right)?;
        }
        self.visitor.range(operator, true)
    }

    fn ternary(&mut self) -> Result<(), SubjectError> {
        self.expression(Prec::Ternary)?;
        self.skip_newlines();
        self.expect(RawTag::Colon, "`:`")?;
        self.expression(Prec::Ternary)?;
        self.visitor.ternary();
        Ok(())
    }

    /// `recv[expr]` or `recv[]`.
    fn index(&mut self) -> Result<(), SubjectError> {
        if self.accept(RawTag::RightBracket) {
            self.visitor.index(false);
            return Ok(());
        }
        self.skip_newlines();
        self.expression(Prec::Ternary)?;
        self.skip_newlines();
        self.expect(RawTag::RightBracket, "`]`")?;
        self.visitor.index(true);
        Ok(())
    }
}
