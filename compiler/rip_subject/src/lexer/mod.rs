//! Cooked tokens with character offsets.
//!
//! Wraps [`RawScanner`] with the little state Ruby's lexer keeps between
//! tokens: whether an operand is expected (`Beg`), an argument may follow
//! a method name (`Arg`), or an expression just ended (`End`). That state
//! decides two things the raw scanner cannot:
//!
//! - a newline is `ignored_nl` at `Beg` and a statement-ending `nl`
//!   otherwise (a comment that ends the line takes over that role);
//! - `+` directly followed by digits is part of the integer where an
//!   operand may start (`+1` at `Beg`, or `foo +1` at `Arg`).

use rip_lexer_core::{RawScanner, RawTag, SourceBuffer};
use rustc_hash::FxHashSet;

use crate::SubjectError;

/// One cooked token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    pub tag: RawTag,
    pub text: &'src str,
    /// Character offset of the first character.
    pub start: usize,
    /// Character offset one past the last character.
    pub end: usize,
    /// Newline (or line-ending comment) that ends a statement.
    pub terminator: bool,
}

impl Token<'_> {
    /// Ripper event name without the `on_` prefix.
    pub fn event(&self) -> &'static str {
        match self.tag {
            RawTag::Newline if !self.terminator => "ignored_nl",
            tag => tag.ripper_event().unwrap_or("error"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Beg,
    Arg,
    End,
}

const ASSIGNMENT_TAGS: [RawTag; 14] = [
    RawTag::Eq,
    RawTag::PlusEq,
    RawTag::MinusEq,
    RawTag::StarEq,
    RawTag::SlashEq,
    RawTag::PercentEq,
    RawTag::AmpEq,
    RawTag::PipeEq,
    RawTag::CaretEq,
    RawTag::AmpAmpEq,
    RawTag::PipePipeEq,
    RawTag::ShlEq,
    RawTag::ShrEq,
    RawTag::StarStarEq,
];

pub(crate) fn is_assignment(tag: RawTag) -> bool {
    ASSIGNMENT_TAGS.contains(&tag)
}

/// Reserved words outside the grammar that still end an expression.
fn keyword_ends_expression(text: &str) -> bool {
    matches!(
        text,
        "__FILE__" | "__LINE__" | "__ENCODING__" | "redo" | "retry"
    )
}

/// Tokenize `source`, trivia included.
pub fn lex(source: &str) -> Result<Vec<Token<'_>>, SubjectError> {
    let buffer = SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buffer.cursor());
    let mut raw = Vec::new();
    loop {
        let start = scanner.pos() as usize;
        let token = scanner.next_token();
        if token.tag == RawTag::Eof {
            break;
        }
        raw.push(Span {
            tag: token.tag,
            start,
            end: start + token.len as usize,
        });
    }

    let mut cooker = Cooker {
        source,
        out: Vec::with_capacity(raw.len()),
        offset: 0,
        state: State::Beg,
        space_seen: false,
        last_ident: None,
        locals: FxHashSet::default(),
    };
    let mut i = 0;
    while i < raw.len() {
        i += cooker.cook(raw[i], raw.get(i + 1).copied())?;
    }
    Ok(cooker.out)
}

/// Byte range of one raw token.
#[derive(Clone, Copy)]
struct Span {
    tag: RawTag,
    start: usize,
    end: usize,
}

struct Cooker<'src> {
    source: &'src str,
    out: Vec<Token<'src>>,
    /// Running character offset.
    offset: usize,
    state: State,
    space_seen: bool,
    last_ident: Option<&'src str>,
    locals: FxHashSet<&'src str>,
}

impl<'src> Cooker<'src> {
    fn push(&mut self, tag: RawTag, text: &'src str, terminator: bool) {
        let start = self.offset;
        self.offset += text.chars().count();
        self.out.push(Token {
            tag,
            text,
            start,
            end: self.offset,
            terminator,
        });
    }

    /// Cook one raw token; returns how many raw tokens were consumed.
    fn cook(&mut self, span: Span, next: Option<Span>) -> Result<usize, SubjectError> {
        let source = self.source;
        let tag = span.tag;
        let text = &source[span.start..span.end];
        if tag.is_error() {
            return Err(SubjectError::InvalidInput {
                offset: self.offset,
                text: text.to_string(),
            });
        }

        match tag {
            RawTag::Whitespace | RawTag::LineContinuation => {
                self.push(tag, text, false);
                self.space_seen = true;
                return Ok(1);
            }
            RawTag::Newline | RawTag::LineComment => {
                let ends_line = tag == RawTag::Newline || text.ends_with('\n');
                let terminator = ends_line && self.state != State::Beg;
                self.push(tag, text, terminator);
                if terminator {
                    self.state = State::Beg;
                }
                self.space_seen = false;
                return Ok(1);
            }
            _ => {}
        }

        if tag == RawTag::Plus && self.begins_operand() {
            if let Some(digits) = next.filter(|n| n.tag == RawTag::Int && n.start == span.end) {
                self.push(RawTag::Int, &source[span.start..digits.end], false);
                self.finish_significant(State::End, None);
                return Ok(2);
            }
        }

        if is_assignment(tag) {
            if let Some(name) = self.last_ident {
                self.locals.insert(name);
            }
        }

        let mut ident = None;
        let state = match tag {
            RawTag::Ident => {
                ident = Some(text);
                if self.locals.contains(text) {
                    State::End
                } else {
                    State::Arg
                }
            }
            RawTag::MethodIdent | RawTag::Const | RawTag::Defined | RawTag::Not => State::Arg,
            _ if tag.ends_operand() => State::End,
            RawTag::OtherKeyword if keyword_ends_expression(text) => State::End,
            _ => State::Beg,
        };
        self.push(tag, text, false);
        self.finish_significant(state, ident);
        Ok(1)
    }

    fn finish_significant(&mut self, state: State, ident: Option<&'src str>) {
        self.state = state;
        self.last_ident = ident;
        self.space_seen = false;
    }

    /// `+` here starts an operand rather than adding.
    fn begins_operand(&self) -> bool {
        match self.state {
            State::Beg => true,
            State::Arg => self.space_seen,
            State::End => false,
        }
    }
}
