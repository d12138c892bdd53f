//! Context-free lexemes recognized by logos.
//!
//! Everything state-dependent (keywords, `nl` vs `ignored_nl`, signed
//! integers, literal forms that only exist at expression start) is
//! decided afterwards by the cooker in `lib.rs`.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lexeme {
    #[regex(r"[ \t\r\x0B\x0C]+")]
    Space,

    #[regex(r"\\\r?\n")]
    Continuation,

    #[token("\n")]
    Newline,

    // The terminating newline belongs to the comment.
    #[regex(r"#[^\n]*\n?")]
    Comment,

    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    #[token("!")]
    #[token("!=")]
    #[token("!~")]
    #[token("%")]
    #[token("%=")]
    #[token("&")]
    #[token("&&")]
    #[token("&&=")]
    #[token("&=")]
    #[token("*")]
    #[token("**")]
    #[token("**=")]
    #[token("*=")]
    #[token("+")]
    #[token("+=")]
    #[token("-")]
    #[token("-=")]
    #[token("..")]
    #[token("...")]
    #[token("/")]
    #[token("/=")]
    #[token(":")]
    #[token("::")]
    #[token("<")]
    #[token("<<")]
    #[token("<<=")]
    #[token("<=")]
    #[token("<=>")]
    #[token("=")]
    #[token("==")]
    #[token("===")]
    #[token("=~")]
    #[token("=>")]
    #[token(">")]
    #[token(">=")]
    #[token(">>")]
    #[token(">>=")]
    #[token("?")]
    #[token("^")]
    #[token("^=")]
    #[token("|")]
    #[token("|=")]
    #[token("||")]
    #[token("||=")]
    #[token("~")]
    Op,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", method_suffix)]
    Word,

    #[regex(r"[0-9]+(_[0-9]+)*")]
    #[regex(r"0[xX][0-9a-fA-F]+(_[0-9a-fA-F]+)*")]
    #[regex(r"0[bB][01]+(_[01]+)*")]
    #[regex(r"0[oO][0-7]+(_[0-7]+)*")]
    #[regex(r"0[dD][0-9]+(_[0-9]+)*")]
    Int,

    #[regex(r"[0-9]+(_[0-9]+)*\.[0-9]+")]
    Float,

    #[regex(r"\$[A-Za-z_][A-Za-z0-9_]*")]
    #[regex(r"\$-[A-Za-z0-9_]")]
    #[regex(r#"\$[~*$?!@/\\;,.=:<>"0]"#)]
    GVar,

    #[regex(r"\$[&`'+]")]
    #[regex(r"\$[1-9][0-9]*")]
    Backref,

    #[token("\"")]
    #[token("'")]
    #[token("`")]
    #[token("{")]
    #[token("}")]
    #[token("@")]
    #[token(".")]
    #[token("&.")]
    #[token("->")]
    Unsupported,
}

/// `foo?` and `foo!` are single method names unless the suffix starts
/// an operator such as `!=`.
fn method_suffix(lex: &mut logos::Lexer<'_, Lexeme>) {
    let rest = lex.remainder().as_bytes();
    if matches!(rest.first(), Some(b'?' | b'!')) && rest.get(1) != Some(&b'=') {
        lex.bump(1);
    }
}
