//! Lexer tokens before and after canonicalization.

use std::fmt;

/// Lexical event reported by the reference lexer.
///
/// Each variant corresponds to one scanner event of the reference
/// vocabulary; [`TokenEvent::event_name`] returns its namespaced name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenEvent {
    Sp,
    Nl,
    IgnoredNl,
    Comment,
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Op,
    Kw,
    Ident,
    Const,
    Int,
    GVar,
    Backref,
}

impl TokenEvent {
    pub const ALL: [TokenEvent; 17] = [
        TokenEvent::Sp,
        TokenEvent::Nl,
        TokenEvent::IgnoredNl,
        TokenEvent::Comment,
        TokenEvent::Comma,
        TokenEvent::Semicolon,
        TokenEvent::LParen,
        TokenEvent::RParen,
        TokenEvent::LBracket,
        TokenEvent::RBracket,
        TokenEvent::Op,
        TokenEvent::Kw,
        TokenEvent::Ident,
        TokenEvent::Const,
        TokenEvent::Int,
        TokenEvent::GVar,
        TokenEvent::Backref,
    ];

    /// Namespaced event name, e.g. `on_comma`.
    pub const fn event_name(self) -> &'static str {
        match self {
            TokenEvent::Sp => "on_sp",
            TokenEvent::Nl => "on_nl",
            TokenEvent::IgnoredNl => "on_ignored_nl",
            TokenEvent::Comment => "on_comment",
            TokenEvent::Comma => "on_comma",
            TokenEvent::Semicolon => "on_semicolon",
            TokenEvent::LParen => "on_lparen",
            TokenEvent::RParen => "on_rparen",
            TokenEvent::LBracket => "on_lbracket",
            TokenEvent::RBracket => "on_rbracket",
            TokenEvent::Op => "on_op",
            TokenEvent::Kw => "on_kw",
            TokenEvent::Ident => "on_ident",
            TokenEvent::Const => "on_const",
            TokenEvent::Int => "on_int",
            TokenEvent::GVar => "on_gvar",
            TokenEvent::Backref => "on_backref",
        }
    }

    /// Whitespace, newlines and comments.
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenEvent::Sp | TokenEvent::Nl | TokenEvent::IgnoredNl | TokenEvent::Comment
        )
    }
}

/// A token as the reference lexer reports it.
///
/// `line` is 1-based; `column` is 0-based and counted in characters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RawToken<'src> {
    pub line: usize,
    pub column: usize,
    pub event: TokenEvent,
    pub text: &'src str,
}

/// A token with absolute character offsets and a bare type label.
///
/// Invariant: `end - start == text.chars().count()`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CanonicalToken<'src> {
    pub start: usize,
    pub end: usize,
    pub kind: &'static str,
    pub text: &'src str,
}

impl fmt::Display for CanonicalToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {} {}", self.start, self.end, self.kind, self.text)
    }
}
