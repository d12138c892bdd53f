//! Operator tables and lookahead helpers.

use rip_ir::TokenEvent;

use crate::Parser;

pub(super) const LOGICAL_OR: &[&str] = &["||"];
pub(super) const LOGICAL_AND: &[&str] = &["&&"];
pub(super) const EQUALITY: &[&str] = &["<=>", "==", "===", "!=", "=~", "!~"];
pub(super) const COMPARISON: &[&str] = &["<", ">", "<=", ">="];
pub(super) const BITWISE_OR: &[&str] = &["|", "^"];
pub(super) const BITWISE_AND: &[&str] = &["&"];
pub(super) const SHIFT: &[&str] = &["<<", ">>"];
pub(super) const ADDITIVE: &[&str] = &["+", "-"];
pub(super) const MULTIPLICATIVE: &[&str] = &["*", "/", "%"];

/// `=` and the compound assignments.
pub(super) const ASSIGNMENT: &[&str] = &[
    "=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "&&=", "||=", "<<=", ">>=", "**=",
];

/// Keywords that begin an operand.
const OPERAND_KEYWORDS: &[&str] = &[
    "true",
    "false",
    "nil",
    "self",
    "__FILE__",
    "__LINE__",
    "__ENCODING__",
    "defined?",
    "not",
    "begin",
    "while",
    "until",
];

/// Prefix operators that begin an operand.
const PREFIX_OPERATORS: &[&str] = &["-", "+", "!", "~"];

/// Operators that start a command argument when written `name -x`.
const COMMAND_PREFIXES: &[&str] = &["-", "*", "**", "&", "::", "!", "~"];

impl Parser<'_> {
    /// The current token can begin an operand.
    pub(super) fn starts_operand(&self) -> bool {
        match self.cursor.event() {
            Some(
                TokenEvent::Int
                | TokenEvent::GVar
                | TokenEvent::Backref
                | TokenEvent::Ident
                | TokenEvent::Const
                | TokenEvent::LParen
                | TokenEvent::LBracket,
            ) => true,
            Some(TokenEvent::Kw) => self.cursor.kw().is_some_and(|kw| OPERAND_KEYWORDS.contains(&kw)),
            Some(TokenEvent::Op) => self.cursor.op_in(PREFIX_OPERATORS).is_some(),
            _ => false,
        }
    }

    /// After a method name: the current token would be parsed as a
    /// command argument (`foo 1`, `foo [1]`, `foo -x`).
    pub(super) fn starts_command_argument(&self) -> bool {
        if !self.cursor.space_before() {
            return false;
        }
        match self.cursor.event() {
            Some(TokenEvent::Op) => {
                self.cursor.op_in(COMMAND_PREFIXES).is_some() && !self.cursor.space_after()
            }
            Some(TokenEvent::Kw) => self
                .cursor
                .kw()
                .is_some_and(|kw| {
                    OPERAND_KEYWORDS.contains(&kw) && !matches!(kw, "not" | "while" | "until")
                }),
            _ => self.starts_operand(),
        }
    }
}
