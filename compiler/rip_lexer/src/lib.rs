//! Reference lexer for the ripcheck Ruby subset.
//!
//! Produces the full token stream of a snippet, trivia included, in the
//! vocabulary of [`TokenEvent`]. Lexemes come from logos; this module
//! layers the expression state on top:
//!
//! - `Beg`: an expression may start here (after operators, `(`, `,`, ...).
//!   Newlines are `ignored_nl`, `+1` is one integer, `/` `%` `?` `:` open
//!   literal forms.
//! - `Arg`: after a method name that could take command arguments. Behaves
//!   like `Beg` for an operator preceded by a space and followed by a
//!   non-space.
//! - `End`: an expression just ended. Newlines terminate statements.
//!
//! Identifiers assigned with `=` or a compound assignment become locals,
//! which end an expression instead of starting command arguments.

mod keywords;
mod lex_error;
mod lexeme;

use std::ops::Range;

use logos::Logos;
use rip_ir::{RawToken, TokenEvent};
use rustc_hash::FxHashSet;

pub use keywords::is_keyword;
pub use lex_error::LexError;

use keywords::keyword_state;
use lexeme::Lexeme;

/// How a token takes part in parsing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Role {
    /// Whitespace, ignored newlines and comments inside an expression.
    Trivia,
    /// A newline (or a comment swallowing one) that ends a statement.
    Newline,
    Significant,
}

/// A reference token plus its parsing role.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    pub raw: RawToken<'src>,
    pub role: Role,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum State {
    Beg,
    Arg,
    End,
}

const ASSIGNMENT_OPERATORS: [&str; 14] = [
    "=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "&&=", "||=", "<<=", ">>=", "**=",
];

/// Lex `source` into tokens with parsing roles.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let lexemes: Vec<(Result<Lexeme, ()>, Range<usize>)> =
        Lexeme::lexer(source).spanned().collect();
    let mut cooker = Cooker::new(source);
    let mut i = 0;
    while let Some((lexeme, range)) = lexemes.get(i) {
        let next = lexemes.get(i + 1);
        i += cooker.cook(*lexeme, range.clone(), next)?;
    }
    Ok(cooker.out)
}

/// Lex `source` into the raw reference token stream.
pub fn lex(source: &str) -> Result<Vec<RawToken<'_>>, LexError> {
    Ok(tokenize(source)?.into_iter().map(|t| t.raw).collect())
}

struct Cooker<'src> {
    source: &'src str,
    out: Vec<Token<'src>>,
    state: State,
    space_seen: bool,
    /// Previous significant token, when it was an assignable identifier.
    last_ident: Option<&'src str>,
    locals: FxHashSet<&'src str>,
    line: usize,
    line_start: usize,
}

impl<'src> Cooker<'src> {
    fn new(source: &'src str) -> Self {
        Cooker {
            source,
            out: Vec::new(),
            state: State::Beg,
            space_seen: false,
            last_ident: None,
            locals: FxHashSet::default(),
            line: 1,
            line_start: 0,
        }
    }

    /// Cook one lexeme; returns how many lexemes were consumed.
    fn cook(
        &mut self,
        lexeme: Result<Lexeme, ()>,
        range: Range<usize>,
        next: Option<&(Result<Lexeme, ()>, Range<usize>)>,
    ) -> Result<usize, LexError> {
        let Ok(lexeme) = lexeme else {
            return Err(LexError::Unrecognized {
                line: self.line,
                column: self.column(range.start),
                text: self.source[range].to_string(),
            });
        };

        let mut last_ident = None;
        let (event, state) = match lexeme {
            Lexeme::Space | Lexeme::Continuation => {
                self.push(TokenEvent::Sp, range, Role::Trivia);
                self.space_seen = true;
                return Ok(1);
            }
            Lexeme::Newline => {
                if self.state == State::Beg {
                    self.push(TokenEvent::IgnoredNl, range, Role::Trivia);
                } else {
                    self.push(TokenEvent::Nl, range, Role::Newline);
                    self.state = State::Beg;
                }
                self.space_seen = false;
                return Ok(1);
            }
            Lexeme::Comment => {
                let ends_line = self.source[range.clone()].ends_with('\n');
                if ends_line && self.state != State::Beg {
                    self.push(TokenEvent::Comment, range, Role::Newline);
                    self.state = State::Beg;
                } else {
                    self.push(TokenEvent::Comment, range, Role::Trivia);
                }
                self.space_seen = false;
                return Ok(1);
            }
            Lexeme::Comma => (TokenEvent::Comma, State::Beg),
            Lexeme::Semicolon => (TokenEvent::Semicolon, State::Beg),
            Lexeme::LParen => (TokenEvent::LParen, State::Beg),
            Lexeme::LBracket => (TokenEvent::LBracket, State::Beg),
            Lexeme::RParen => (TokenEvent::RParen, State::End),
            Lexeme::RBracket => (TokenEvent::RBracket, State::End),
            Lexeme::Int => (TokenEvent::Int, State::End),
            Lexeme::GVar => (TokenEvent::GVar, State::End),
            Lexeme::Backref => (TokenEvent::Backref, State::End),
            Lexeme::Word => {
                let text = &self.source[range.clone()];
                if let Some(state) = keyword_state(text) {
                    (TokenEvent::Kw, state)
                } else if text.starts_with(|c: char| c.is_ascii_uppercase()) {
                    (TokenEvent::Const, State::Arg)
                } else if self.locals.contains(text) {
                    last_ident = Some(text);
                    (TokenEvent::Ident, State::End)
                } else {
                    if !text.ends_with(['?', '!']) {
                        last_ident = Some(text);
                    }
                    (TokenEvent::Ident, State::Arg)
                }
            }
            Lexeme::Op => {
                let text = &self.source[range.clone()];
                self.check_literal_start(text, range.clone())?;
                if text == "+" && self.begins_operand(range.end) {
                    if let Some((Ok(Lexeme::Int), int)) = next {
                        if int.start == range.end {
                            self.push_significant(TokenEvent::Int, range.start..int.end);
                            self.state = State::End;
                            self.last_ident = None;
                            return Ok(2);
                        }
                    }
                }
                if ASSIGNMENT_OPERATORS.contains(&text) {
                    if let Some(name) = self.last_ident {
                        self.locals.insert(name);
                    }
                }
                (TokenEvent::Op, State::Beg)
            }
            Lexeme::Float => return Err(self.unsupported("float literal", range.start)),
            Lexeme::Unsupported => {
                let construct = match &self.source[range.clone()] {
                    "\"" | "'" => "string literal",
                    "`" => "command literal",
                    "{" | "}" => "brace block or hash",
                    "@" => "instance variable",
                    "->" => "lambda literal",
                    _ => "method call",
                };
                return Err(self.unsupported(construct, range.start));
            }
        };

        self.push_significant(event, range);
        self.state = state;
        self.last_ident = last_ident;
        Ok(1)
    }

    /// True where an operator starts an operand rather than continuing an
    /// expression: expression start, or a spaced operator directly before
    /// its operand after a command-capable name.
    fn begins_operand(&self, end: usize) -> bool {
        match self.state {
            State::Beg => true,
            State::Arg => {
                self.space_seen
                    && self.source[end..]
                        .chars()
                        .next()
                        .is_some_and(|c| !c.is_whitespace())
            }
            State::End => false,
        }
    }

    fn check_literal_start(&self, text: &str, range: Range<usize>) -> Result<(), LexError> {
        let after = self.source[range.end..].chars().next();
        let construct = match text {
            "/" | "/=" if self.begins_operand(range.end) => Some("regexp literal"),
            "%" | "%=" if self.begins_operand(range.end) => Some("percent literal"),
            "?" if self.state != State::End && after.is_some_and(|c| !c.is_whitespace()) => {
                Some("character literal")
            }
            ":" if self.state != State::End && after.is_some_and(|c| !c.is_whitespace()) => {
                Some("symbol literal")
            }
            "<<" if self.begins_operand(range.end)
                && after.is_some_and(|c| {
                    c.is_ascii_alphabetic() || matches!(c, '_' | '"' | '\'' | '`' | '-' | '~')
                }) =>
            {
                Some("heredoc")
            }
            _ => None,
        };
        match construct {
            Some(construct) => Err(self.unsupported(construct, range.start)),
            None => Ok(()),
        }
    }

    fn unsupported(&self, construct: &'static str, at: usize) -> LexError {
        LexError::Unsupported {
            line: self.line,
            column: self.column(at),
            construct,
        }
    }

    fn column(&self, at: usize) -> usize {
        self.source[self.line_start..at].chars().count()
    }

    fn push_significant(&mut self, event: TokenEvent, range: Range<usize>) {
        self.push(event, range, Role::Significant);
        self.space_seen = false;
    }

    fn push(&mut self, event: TokenEvent, range: Range<usize>, role: Role) {
        let text = &self.source[range.clone()];
        let raw = RawToken {
            line: self.line,
            column: self.column(range.start),
            event,
            text,
        };
        self.out.push(Token { raw, role });
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                self.line += 1;
                self.line_start = range.start + offset + 1;
            }
        }
    }
}
