//! Raw token tags.
//!
//! One tag per distinct token the subject grammar cares about. Keywords are
//! resolved by the scanner; everything the grammar does not use but the
//! language still reserves comes out as [`RawTag::OtherKeyword`].

/// Token kind produced by [`RawScanner`](crate::RawScanner).
///
/// Discriminants are grouped by category so a tag fits in one byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // Identifiers & literals: 0-15
    Ident = 0,
    /// `foo?` / `foo!`.
    MethodIdent = 1,
    Const = 2,
    Int = 3,
    GlobalVar = 4,
    /// `$&`, `` $` ``, `$'`, `$+`.
    BackRef = 5,
    /// `$1` .. `$9`, `$10` ...
    NthRef = 6,

    // Keywords: 16-47
    And = 16,
    Begin = 17,
    Defined = 18,
    Do = 19,
    End = 20,
    Ensure = 21,
    False = 22,
    If = 23,
    Nil = 24,
    Not = 25,
    Or = 26,
    Rescue = 27,
    SelfKw = 28,
    True = 29,
    Unless = 30,
    Until = 31,
    While = 32,
    /// Reserved words outside the grammar (`def`, `class`, `else` ...).
    OtherKeyword = 33,

    // Operators: 48-95
    Amp = 48,
    AmpAmp = 49,
    AmpAmpEq = 50,
    AmpEq = 51,
    Bang = 52,
    BangEq = 53,
    BangTilde = 54,
    Caret = 55,
    CaretEq = 56,
    Colon = 57,
    Compare = 58,
    DotDot = 59,
    DotDotDot = 60,
    Eq = 61,
    EqEq = 62,
    EqEqEq = 63,
    EqTilde = 64,
    Greater = 65,
    GreaterEq = 66,
    Less = 67,
    LessEq = 68,
    Minus = 69,
    MinusEq = 70,
    Percent = 71,
    PercentEq = 72,
    Pipe = 73,
    PipeEq = 74,
    PipePipe = 75,
    PipePipeEq = 76,
    Plus = 77,
    PlusEq = 78,
    Question = 79,
    Shl = 80,
    ShlEq = 81,
    Shr = 82,
    ShrEq = 83,
    Slash = 84,
    SlashEq = 85,
    Star = 86,
    StarEq = 87,
    StarStar = 88,
    StarStarEq = 89,
    Tilde = 90,

    // Delimiters: 96-111
    Comma = 96,
    Semicolon = 97,
    LeftParen = 98,
    RightParen = 99,
    LeftBracket = 100,
    RightBracket = 101,

    // Trivia: 112-127
    Whitespace = 112,
    /// `\` followed by a newline.
    LineContinuation = 113,
    Newline = 114,
    /// `#` to end of line, including the newline when present.
    LineComment = 115,

    // Errors: 240-254
    InvalidByte = 240,
    InteriorNull = 241,

    // Control
    Eof = 255,
}

const _: () = assert!(std::mem::size_of::<RawTag>() == 1);

impl RawTag {
    /// Tag for a reserved word, if `word` is one.
    pub fn keyword(word: &str) -> Option<RawTag> {
        Some(match word {
            "and" => RawTag::And,
            "begin" => RawTag::Begin,
            "defined?" => RawTag::Defined,
            "do" => RawTag::Do,
            "end" => RawTag::End,
            "ensure" => RawTag::Ensure,
            "false" => RawTag::False,
            "if" => RawTag::If,
            "nil" => RawTag::Nil,
            "not" => RawTag::Not,
            "or" => RawTag::Or,
            "rescue" => RawTag::Rescue,
            "self" => RawTag::SelfKw,
            "true" => RawTag::True,
            "unless" => RawTag::Unless,
            "until" => RawTag::Until,
            "while" => RawTag::While,
            "BEGIN" | "END" | "__ENCODING__" | "__FILE__" | "__LINE__" | "alias" | "break"
            | "case" | "class" | "def" | "else" | "elsif" | "for" | "in" | "module" | "next"
            | "redo" | "retry" | "return" | "super" | "then" | "undef" | "when" | "yield" => {
                RawTag::OtherKeyword
            }
            _ => return None,
        })
    }

    /// Ripper scanner event name, without the `on_` prefix.
    ///
    /// Error tags and `Eof` have no event and return `None`.
    pub fn ripper_event(self) -> Option<&'static str> {
        use RawTag as T;
        Some(match self {
            T::Ident | T::MethodIdent => "ident",
            T::Const => "const",
            T::Int => "int",
            T::GlobalVar => "gvar",
            T::BackRef | T::NthRef => "backref",
            T::And
            | T::Begin
            | T::Defined
            | T::Do
            | T::End
            | T::Ensure
            | T::False
            | T::If
            | T::Nil
            | T::Not
            | T::Or
            | T::Rescue
            | T::SelfKw
            | T::True
            | T::Unless
            | T::Until
            | T::While
            | T::OtherKeyword => "kw",
            T::Amp
            | T::AmpAmp
            | T::AmpAmpEq
            | T::AmpEq
            | T::Bang
            | T::BangEq
            | T::BangTilde
            | T::Caret
            | T::CaretEq
            | T::Colon
            | T::Compare
            | T::DotDot
            | T::DotDotDot
            | T::Eq
            | T::EqEq
            | T::EqEqEq
            | T::EqTilde
            | T::Greater
            | T::GreaterEq
            | T::Less
            | T::LessEq
            | T::Minus
            | T::MinusEq
            | T::Percent
            | T::PercentEq
            | T::Pipe
            | T::PipeEq
            | T::PipePipe
            | T::PipePipeEq
            | T::Plus
            | T::PlusEq
            | T::Question
            | T::Shl
            | T::ShlEq
            | T::Shr
            | T::ShrEq
            | T::Slash
            | T::SlashEq
            | T::Star
            | T::StarEq
            | T::StarStar
            | T::StarStarEq
            | T::Tilde => "op",
            T::Comma => "comma",
            T::Semicolon => "semicolon",
            T::LeftParen => "lparen",
            T::RightParen => "rparen",
            T::LeftBracket => "lbracket",
            T::RightBracket => "rbracket",
            T::Whitespace | T::LineContinuation => "sp",
            T::Newline => "nl",
            T::LineComment => "comment",
            T::InvalidByte | T::InteriorNull | T::Eof => return None,
        })
    }

    /// Whitespace, continuations, newlines and comments.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            RawTag::Whitespace | RawTag::LineContinuation | RawTag::Newline | RawTag::LineComment
        )
    }

    pub fn is_error(self) -> bool {
        matches!(self, RawTag::InvalidByte | RawTag::InteriorNull)
    }

    /// After this tag an expression is complete, so a newline ends the
    /// statement. Anything else leaves an operand pending.
    pub fn ends_operand(self) -> bool {
        matches!(
            self,
            RawTag::Ident
                | RawTag::MethodIdent
                | RawTag::Const
                | RawTag::Int
                | RawTag::GlobalVar
                | RawTag::BackRef
                | RawTag::NthRef
                | RawTag::End
                | RawTag::False
                | RawTag::Nil
                | RawTag::SelfKw
                | RawTag::True
                | RawTag::RightParen
                | RawTag::RightBracket
        )
    }
}

/// A scanned token: tag plus byte length. Position is implied by the
/// running sum of lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}
