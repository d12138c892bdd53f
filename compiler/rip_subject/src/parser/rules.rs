//! Pratt rule table.
//!
//! Each tag maps to an optional prefix parser, an optional infix parser and
//! a pair of binding powers. `left` decides whether the infix parser runs
//! at the current level; `right` is the level its right operand is parsed
//! at. Left-associative operators bind their right side one level tighter.

use rip_lexer_core::RawTag;

use super::Parser;
use crate::SubjectError;

/// Binding power, loosest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Prec {
    None,
    Lowest,
    /// `if` `unless` `while` `until`
    Modifier,
    /// `and` `or`
    Composition,
    Not,
    Defined,
    Assignment,
    ModifierRescue,
    Ternary,
    Range,
    LogicalOr,
    LogicalAnd,
    Equality,
    Comparison,
    /// `|` `^`
    BitwiseOr,
    BitwiseAnd,
    Shift,
    Term,
    Factor,
    Exponent,
    /// `!` `~` unary `+`
    Unary,
    Index,
}

impl Prec {
    /// One level tighter.
    pub(crate) fn next(self) -> Prec {
        use Prec as P;
        match self {
            P::None => P::Lowest,
            P::Lowest => P::Modifier,
            P::Modifier => P::Composition,
            P::Composition => P::Not,
            P::Not => P::Defined,
            P::Defined => P::Assignment,
            P::Assignment => P::ModifierRescue,
            P::ModifierRescue => P::Ternary,
            P::Ternary => P::Range,
            P::Range => P::LogicalOr,
            P::LogicalOr => P::LogicalAnd,
            P::LogicalAnd => P::Equality,
            P::Equality => P::Comparison,
            P::Comparison => P::BitwiseOr,
            P::BitwiseOr => P::BitwiseAnd,
            P::BitwiseAnd => P::Shift,
            P::Shift => P::Term,
            P::Term => P::Factor,
            P::Factor => P::Exponent,
            P::Exponent => P::Unary,
            P::Unary | P::Index => P::Index,
        }
    }
}

pub(crate) type ParseFn<'src, 'v> = fn(&mut Parser<'src, 'v>) -> Result<(), SubjectError>;

pub(crate) struct Rule<'src, 'v> {
    pub prefix: Option<ParseFn<'src, 'v>>,
    pub infix: Option<ParseFn<'src, 'v>>,
    pub left: Prec,
    pub right: Prec,
}

impl<'src, 'v> Rule<'src, 'v> {
    fn new(
        prefix: Option<ParseFn<'src, 'v>>,
        infix: Option<ParseFn<'src, 'v>>,
        (left, right): (Prec, Prec),
    ) -> Self {
        Rule {
            prefix,
            infix,
            left,
            right,
        }
    }
}

fn left(prec: Prec) -> (Prec, Prec) {
    (prec, prec.next())
}

fn right(prec: Prec) -> (Prec, Prec) {
    (prec, prec)
}

const NONE: (Prec, Prec) = (Prec::None, Prec::None);

impl<'src, 'v> Parser<'src, 'v> {
    pub(crate) fn rule(tag: RawTag) -> Rule<'src, 'v> {
        use RawTag as T;
        match tag {
            T::Int
            | T::GlobalVar
            | T::BackRef
            | T::NthRef
            | T::True
            | T::False
            | T::Nil
            | T::SelfKw
            | T::OtherKeyword => Rule::new(Some(Self::literal), None, NONE),
            T::Ident | T::MethodIdent | T::Const => Rule::new(Some(Self::identifier), None, NONE),
            T::LeftParen => Rule::new(Some(Self::group), None, NONE),
            T::LeftBracket => Rule::new(Some(Self::array), Some(Self::index), left(Prec::Index)),
            T::Begin => Rule::new(Some(Self::begin), None, NONE),
            T::Defined => Rule::new(Some(Self::defined), None, NONE),
            T::Not => Rule::new(Some(Self::not), None, NONE),
            T::Bang | T::Tilde => Rule::new(Some(Self::unary), None, NONE),
            T::Plus => Rule::new(Some(Self::unary), Some(Self::binary), left(Prec::Term)),
            T::Minus => Rule::new(Some(Self::unary_minus), Some(Self::binary), left(Prec::Term)),
            T::DotDot | T::DotDotDot => {
                Rule::new(Some(Self::beginless), Some(Self::range), left(Prec::Range))
            }
            T::While | T::Until => {
                Rule::new(Some(Self::loop_block), Some(Self::modifier), left(Prec::Modifier))
            }
            T::If | T::Unless => Rule::new(None, Some(Self::modifier), left(Prec::Modifier)),
            T::Rescue => Rule::new(None, Some(Self::modifier), left(Prec::ModifierRescue)),
            T::And | T::Or => Rule::new(None, Some(Self::binary), left(Prec::Composition)),
            T::Question => Rule::new(None, Some(Self::ternary), right(Prec::Ternary)),
            T::PipePipe => Rule::new(None, Some(Self::binary), left(Prec::LogicalOr)),
            T::AmpAmp => Rule::new(None, Some(Self::binary), left(Prec::LogicalAnd)),
            T::Compare | T::EqEq | T::EqEqEq | T::BangEq | T::EqTilde | T::BangTilde => {
                Rule::new(None, Some(Self::binary), left(Prec::Equality))
            }
            T::Less | T::LessEq | T::Greater | T::GreaterEq => {
                Rule::new(None, Some(Self::binary), left(Prec::Comparison))
            }
            T::Pipe | T::Caret => Rule::new(None, Some(Self::binary), left(Prec::BitwiseOr)),
            T::Amp => Rule::new(None, Some(Self::binary), left(Prec::BitwiseAnd)),
            T::Shl | T::Shr => Rule::new(None, Some(Self::binary), left(Prec::Shift)),
            T::Star | T::Slash | T::Percent => {
                Rule::new(None, Some(Self::binary), left(Prec::Factor))
            }
            T::StarStar => Rule::new(None, Some(Self::binary), right(Prec::Exponent)),
            T::Eq
            | T::PlusEq
            | T::MinusEq
            | T::StarEq
            | T::SlashEq
            | T::PercentEq
            | T::AmpEq
            | T::PipeEq
            | T::CaretEq
            | T::AmpAmpEq
            | T::PipePipeEq
            | T::ShlEq
            | T::ShrEq
            | T::StarStarEq => Rule::new(None, Some(Self::assign), right(Prec::Assignment)),
            T::Do
            | T::End
            | T::Ensure
            | T::Colon
            | T::Comma
            | T::Semicolon
            | T::RightParen
            | T::RightBracket
            | T::Whitespace
            | T::LineContinuation
            | T::Newline
            | T::LineComment
            | T::InvalidByte
            | T::InteriorNull
            | T::Eof => Rule::new(None, None, NONE),
        }
    }
}
