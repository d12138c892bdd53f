//! Canonical production labels.
//!
//! The vocabulary is closed: every label either is a constant word or
//! embeds exactly one value (literal text, a name or an element count).

use std::fmt;

/// Binary operator labels, one per supported operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryLabel {
    LogicalOr,
    LogicalAnd,
    Compare,
    DoubleEqual,
    TripleEqual,
    BangEqual,
    EqualTilde,
    BangTilde,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Exponent,
    CompositionAnd,
    CompositionOr,
}

impl BinaryLabel {
    pub const fn as_str(self) -> &'static str {
        match self {
            BinaryLabel::LogicalOr => "LOGICAL_OR",
            BinaryLabel::LogicalAnd => "LOGICAL_AND",
            BinaryLabel::Compare => "COMPARE",
            BinaryLabel::DoubleEqual => "DOUBLE_EQUAL",
            BinaryLabel::TripleEqual => "TRIPLE_EQUAL",
            BinaryLabel::BangEqual => "BANG_EQUAL",
            BinaryLabel::EqualTilde => "EQUAL_TILDE",
            BinaryLabel::BangTilde => "BANG_TILDE",
            BinaryLabel::Add => "ADD",
            BinaryLabel::Subtract => "SUBTRACT",
            BinaryLabel::Multiply => "MULTIPLY",
            BinaryLabel::Divide => "DIVIDE",
            BinaryLabel::Modulo => "MODULO",
            BinaryLabel::Exponent => "EXPONENT",
            BinaryLabel::CompositionAnd => "COMPOSITION_AND",
            BinaryLabel::CompositionOr => "COMPOSITION_OR",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryLabel {
    Plus,
    Minus,
    Bang,
    Tilde,
    Not,
}

impl UnaryLabel {
    pub const fn as_str(self) -> &'static str {
        match self {
            UnaryLabel::Plus => "UPLUS",
            UnaryLabel::Minus => "UMINUS",
            UnaryLabel::Bang => "UBANG",
            UnaryLabel::Tilde => "UTILDE",
            UnaryLabel::Not => "NOT",
        }
    }
}

/// Compound assignment labels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OpAssignLabel {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    LogicalAnd,
    LogicalOr,
    ShiftLeft,
    ShiftRight,
    Exponent,
}

impl OpAssignLabel {
    pub const fn as_str(self) -> &'static str {
        match self {
            OpAssignLabel::Add => "ADD_ASSIGN",
            OpAssignLabel::Subtract => "SUBTRACT_ASSIGN",
            OpAssignLabel::Multiply => "MULTIPLY_ASSIGN",
            OpAssignLabel::Divide => "DIVIDE_ASSIGN",
            OpAssignLabel::Modulo => "MODULO_ASSIGN",
            OpAssignLabel::BitwiseAnd => "BITWISE_AND_ASSIGN",
            OpAssignLabel::BitwiseOr => "BITWISE_OR_ASSIGN",
            OpAssignLabel::BitwiseXor => "BITWISE_XOR_ASSIGN",
            OpAssignLabel::LogicalAnd => "LOGICAL_AND_ASSIGN",
            OpAssignLabel::LogicalOr => "LOGICAL_OR_ASSIGN",
            OpAssignLabel::ShiftLeft => "SHIFT_LEFT_ASSIGN",
            OpAssignLabel::ShiftRight => "SHIFT_RIGHT_ASSIGN",
            OpAssignLabel::Exponent => "EXPONENT_ASSIGN",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RangeLabel {
    Inclusive,
    Exclusive,
    BeginlessInclusive,
    BeginlessExclusive,
}

impl RangeLabel {
    /// Combine the two independent range properties.
    pub const fn new(exclusive: bool, has_left: bool) -> Self {
        match (exclusive, has_left) {
            (false, true) => RangeLabel::Inclusive,
            (true, true) => RangeLabel::Exclusive,
            (false, false) => RangeLabel::BeginlessInclusive,
            (true, false) => RangeLabel::BeginlessExclusive,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            RangeLabel::Inclusive => "RANGE_INCLUSIVE",
            RangeLabel::Exclusive => "RANGE_EXCLUSIVE",
            RangeLabel::BeginlessInclusive => "BEGINLESS_RANGE_INCLUSIVE",
            RangeLabel::BeginlessExclusive => "BEGINLESS_RANGE_EXCLUSIVE",
        }
    }
}

/// A canonical label.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    Integer(String),
    GlobalVariable(String),
    BackReference(String),
    NthReference(String),
    VCall(String),
    FCall(String),
    Array(usize),
    Index,
    IndexCall,
    Assign,
    OpAssign(OpAssignLabel),
    Binary(BinaryLabel),
    Unary(UnaryLabel),
    Range(RangeLabel),
    Ternary,
    Defined,
    IfModifier,
    UnlessModifier,
    WhileModifier,
    UntilModifier,
    RescueModifier,
    While,
    Until,
    Begin,
    True,
    False,
    Nil,
    SelfRef,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Integer(text) => write!(f, "INTEGER={text}"),
            Label::GlobalVariable(name) => write!(f, "GLOBAL_VARIABLE={name}"),
            Label::BackReference(text) => write!(f, "BACK_REFERENCE={text}"),
            Label::NthReference(text) => write!(f, "NTH_REFERENCE={text}"),
            Label::VCall(name) => write!(f, "VCALL={name}"),
            Label::FCall(name) => write!(f, "FCALL={name}"),
            Label::Array(count) => write!(f, "ARRAY={count}"),
            Label::Index => f.write_str("INDEX"),
            Label::IndexCall => f.write_str("INDEX_CALL"),
            Label::Assign => f.write_str("ASSIGN"),
            Label::OpAssign(op) => f.write_str(op.as_str()),
            Label::Binary(op) => f.write_str(op.as_str()),
            Label::Unary(op) => f.write_str(op.as_str()),
            Label::Range(range) => f.write_str(range.as_str()),
            Label::Ternary => f.write_str("TERNARY"),
            Label::Defined => f.write_str("DEFINED"),
            Label::IfModifier => f.write_str("IF_MODIFIER"),
            Label::UnlessModifier => f.write_str("UNLESS_MODIFIER"),
            Label::WhileModifier => f.write_str("WHILE_MODIFIER"),
            Label::UntilModifier => f.write_str("UNTIL_MODIFIER"),
            Label::RescueModifier => f.write_str("RESCUE_MODIFIER"),
            Label::While => f.write_str("WHILE"),
            Label::Until => f.write_str("UNTIL"),
            Label::Begin => f.write_str("BEGIN"),
            Label::True => f.write_str("TRUE"),
            Label::False => f.write_str("FALSE"),
            Label::Nil => f.write_str("NIL"),
            Label::SelfRef => f.write_str("SELF"),
        }
    }
}
