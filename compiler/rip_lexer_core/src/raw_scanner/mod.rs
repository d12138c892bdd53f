//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! Main dispatch covers every byte value. Each arm calls a focused method
//! that advances the cursor and returns a [`RawToken`]. The scanner never
//! fails: unknown bytes come out as [`RawTag::InvalidByte`] and the
//! consumer decides what to do with them.

use crate::cursor::{is_horizontal_space, Cursor};
use crate::tag::{RawTag, RawToken};

/// Allocation-free scanner producing one token per call.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Current byte offset.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Source text of the token that ends at the current position.
    pub fn text(&self, start: u32) -> &'a str {
        self.cursor.slice_from(start)
    }

    /// Produce the next raw token. Returns `Eof` (length 0) forever once
    /// the source is exhausted.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.nul(start),
            b' ' | b'\t' | b'\r' | 0x0B | 0x0C => self.whitespace(start),
            b'\n' => self.single(start, RawTag::Newline),
            b'\\' => self.backslash(start),
            b'#' => self.comment(start),
            b'a'..=b'z' | b'_' => self.word(start, RawTag::Ident),
            b'A'..=b'Z' => self.word(start, RawTag::Const),
            b'0'..=b'9' => self.number(start),
            b'$' => self.global(start),
            b',' => self.single(start, RawTag::Comma),
            b';' => self.single(start, RawTag::Semicolon),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b':' => self.single(start, RawTag::Colon),
            b'?' => self.single(start, RawTag::Question),
            b'~' => self.single(start, RawTag::Tilde),
            b'=' => self.equal(start),
            b'<' => self.less(start),
            b'>' => self.greater(start),
            b'+' => self.with_assign(start, RawTag::Plus, RawTag::PlusEq),
            b'-' => self.with_assign(start, RawTag::Minus, RawTag::MinusEq),
            b'/' => self.with_assign(start, RawTag::Slash, RawTag::SlashEq),
            b'%' => self.with_assign(start, RawTag::Percent, RawTag::PercentEq),
            b'^' => self.with_assign(start, RawTag::Caret, RawTag::CaretEq),
            b'*' => self.star(start),
            b'&' => self.doubled(
                start,
                b'&',
                RawTag::Amp,
                RawTag::AmpEq,
                RawTag::AmpAmp,
                RawTag::AmpAmpEq,
            ),
            b'|' => self.doubled(
                start,
                b'|',
                RawTag::Pipe,
                RawTag::PipeEq,
                RawTag::PipePipe,
                RawTag::PipePipeEq,
            ),
            b'!' => self.bang(start),
            b'.' => self.dot(start),
            1..=8 | 14..=31 | b'"' | b'\'' | b'`' | b'@' | b'{' | b'}' | 127..=255 => {
                self.invalid(start)
            }
        }
    }

    fn token(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(start, tag)
    }

    // ─── Trivia ────────────────────────────────────────────────

    fn nul(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            self.single(start, RawTag::InteriorNull)
        }
    }

    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(is_horizontal_space);
        self.token(start, RawTag::Whitespace)
    }

    fn backslash(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'\r' && self.cursor.peek() == b'\n' {
            self.cursor.advance_n(2);
            return self.token(start, RawTag::LineContinuation);
        }
        if self.cursor.eat(b'\n') {
            return self.token(start, RawTag::LineContinuation);
        }
        self.token(start, RawTag::InvalidByte)
    }

    fn comment(&mut self, start: u32) -> RawToken {
        self.cursor.eat_until_newline_or_eof();
        self.cursor.eat(b'\n');
        self.token(start, RawTag::LineComment)
    }

    fn invalid(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        self.token(start, RawTag::InvalidByte)
    }

    // ─── Words ─────────────────────────────────────────────────

    fn word(&mut self, start: u32, plain: RawTag) -> RawToken {
        self.cursor.eat_while(is_ident_byte);
        // `foo?` / `foo!`, unless the suffix begins `!=` or `?=`.
        let suffixed = matches!(self.cursor.current(), b'?' | b'!') && self.cursor.peek() != b'=';
        if suffixed {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        if let Some(keyword) = RawTag::keyword(text) {
            return self.token(start, keyword);
        }
        let tag = match plain {
            RawTag::Ident if suffixed => RawTag::MethodIdent,
            other => other,
        };
        self.token(start, tag)
    }

    // ─── Numbers ───────────────────────────────────────────────

    /// Decimal, `0x`, `0b`, `0o` and `0d` integers with `_` separators.
    fn number(&mut self, start: u32) -> RawToken {
        if self.cursor.current() == b'0' {
            if let Some(is_digit) = radix_digit(self.cursor.peek()) {
                if is_digit(self.cursor.peek2()) {
                    self.cursor.advance_n(2);
                    self.digits(is_digit);
                    return self.token(start, RawTag::Int);
                }
            }
        }
        self.digits(|b| b.is_ascii_digit());
        self.token(start, RawTag::Int)
    }

    /// A digit run where `_` may only sit between two digits.
    fn digits(&mut self, is_digit: impl Fn(u8) -> bool) {
        loop {
            self.cursor.eat_while(&is_digit);
            if self.cursor.current() == b'_' && is_digit(self.cursor.peek()) {
                self.cursor.advance();
            } else {
                break;
            }
        }
    }

    // ─── Globals ───────────────────────────────────────────────

    fn global(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        let tag = match self.cursor.current() {
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                self.cursor.eat_while(is_ident_byte);
                RawTag::GlobalVar
            }
            b'~' | b'*' | b'$' | b'?' | b'!' | b'@' | b'/' | b'\\' | b';' | b',' | b'.'
            | b'=' | b':' | b'<' | b'>' | b'"' | b'0' => {
                self.cursor.advance();
                RawTag::GlobalVar
            }
            b'-' if is_ident_byte(self.cursor.peek()) => {
                self.cursor.advance_n(2);
                RawTag::GlobalVar
            }
            b'&' | b'`' | b'\'' | b'+' => {
                self.cursor.advance();
                RawTag::BackRef
            }
            b'1'..=b'9' => {
                self.cursor.eat_while(|b| b.is_ascii_digit());
                RawTag::NthRef
            }
            _ => RawTag::InvalidByte,
        };
        self.token(start, tag)
    }

    // ─── Operators ─────────────────────────────────────────────

    /// `op` or `op=`.
    fn with_assign(&mut self, start: u32, plain: RawTag, assign: RawTag) -> RawToken {
        self.cursor.advance();
        let tag = if self.cursor.eat(b'=') { assign } else { plain };
        self.token(start, tag)
    }

    /// `&` `&=` `&&` `&&=`, likewise for `|`.
    fn doubled(
        &mut self,
        start: u32,
        byte: u8,
        single: RawTag,
        single_eq: RawTag,
        double: RawTag,
        double_eq: RawTag,
    ) -> RawToken {
        self.cursor.advance();
        let tag = if self.cursor.eat(byte) {
            if self.cursor.eat(b'=') {
                double_eq
            } else {
                double
            }
        } else if self.cursor.eat(b'=') {
            single_eq
        } else {
            single
        };
        self.token(start, tag)
    }

    /// `=` `==` `===` `=~`
    fn equal(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        let tag = if self.cursor.eat(b'~') {
            RawTag::EqTilde
        } else if self.cursor.eat(b'=') {
            if self.cursor.eat(b'=') {
                RawTag::EqEqEq
            } else {
                RawTag::EqEq
            }
        } else {
            RawTag::Eq
        };
        self.token(start, tag)
    }

    /// `<` `<<` `<<=` `<=` `<=>`
    fn less(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        let tag = if self.cursor.eat(b'<') {
            if self.cursor.eat(b'=') {
                RawTag::ShlEq
            } else {
                RawTag::Shl
            }
        } else if self.cursor.eat(b'=') {
            if self.cursor.eat(b'>') {
                RawTag::Compare
            } else {
                RawTag::LessEq
            }
        } else {
            RawTag::Less
        };
        self.token(start, tag)
    }

    /// `>` `>>` `>>=` `>=`
    fn greater(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        let tag = if self.cursor.eat(b'>') {
            if self.cursor.eat(b'=') {
                RawTag::ShrEq
            } else {
                RawTag::Shr
            }
        } else if self.cursor.eat(b'=') {
            RawTag::GreaterEq
        } else {
            RawTag::Greater
        };
        self.token(start, tag)
    }

    /// `*` `*=` `**` `**=`
    fn star(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        let tag = if self.cursor.eat(b'*') {
            if self.cursor.eat(b'=') {
                RawTag::StarStarEq
            } else {
                RawTag::StarStar
            }
        } else if self.cursor.eat(b'=') {
            RawTag::StarEq
        } else {
            RawTag::Star
        };
        self.token(start, tag)
    }

    /// `!` `!=` `!~`
    fn bang(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        let tag = if self.cursor.eat(b'=') {
            RawTag::BangEq
        } else if self.cursor.eat(b'~') {
            RawTag::BangTilde
        } else {
            RawTag::Bang
        };
        self.token(start, tag)
    }

    /// `..` `...`; a lone `.` (method call) is outside the grammar.
    fn dot(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        let tag = if self.cursor.eat(b'.') {
            if self.cursor.eat(b'.') {
                RawTag::DotDotDot
            } else {
                RawTag::DotDot
            }
        } else {
            RawTag::InvalidByte
        };
        self.token(start, tag)
    }
}

/// Digit predicate for the radix letter after a leading `0`.
fn radix_digit(letter: u8) -> Option<fn(u8) -> bool> {
    fn binary(b: u8) -> bool {
        matches!(b, b'0' | b'1')
    }
    fn octal(b: u8) -> bool {
        matches!(b, b'0'..=b'7')
    }
    fn decimal(b: u8) -> bool {
        b.is_ascii_digit()
    }
    fn hex(b: u8) -> bool {
        b.is_ascii_hexdigit()
    }
    match letter {
        b'x' | b'X' => Some(hex),
        b'b' | b'B' => Some(binary),
        b'o' | b'O' => Some(octal),
        b'd' | b'D' => Some(decimal),
        _ => None,
    }
}

#[inline]
fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}
