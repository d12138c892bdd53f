//! Label printer.
//!
//! Renders every production as its canonical label. The operator tables
//! cover more than the reference classifier accepts (comparison, bitwise
//! and shift operators all have labels here), so fixtures using them fail
//! on the reference side rather than in the subject.

use rip_lexer_core::RawTag;

use crate::{SubjectError, Visitor};

/// Collects labels in completion order.
#[derive(Debug, Default)]
pub struct Printer {
    labels: Vec<String>,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_labels(self) -> Vec<String> {
        self.labels
    }

    fn emit(&mut self, label: impl Into<String>) {
        self.labels.push(label.into());
    }
}

fn binary_label(operator: RawTag) -> Option<&'static str> {
    Some(match operator {
        RawTag::PipePipe => "LOGICAL_OR",
        RawTag::AmpAmp => "LOGICAL_AND",
        RawTag::Compare => "COMPARE",
        RawTag::EqEq => "DOUBLE_EQUAL",
        RawTag::EqEqEq => "TRIPLE_EQUAL",
        RawTag::BangEq => "BANG_EQUAL",
        RawTag::EqTilde => "EQUAL_TILDE",
        RawTag::BangTilde => "BANG_TILDE",
        RawTag::Less => "LESS",
        RawTag::LessEq => "LESS_EQUAL",
        RawTag::Greater => "GREATER",
        RawTag::GreaterEq => "GREATER_EQUAL",
        RawTag::Pipe => "BITWISE_OR",
        RawTag::Caret => "BITWISE_XOR",
        RawTag::Amp => "BITWISE_AND",
        RawTag::Shl => "SHIFT_LEFT",
        RawTag::Shr => "SHIFT_RIGHT",
        RawTag::Plus => "ADD",
        RawTag::Minus => "SUBTRACT",
        RawTag::Star => "MULTIPLY",
        RawTag::Slash => "DIVIDE",
        RawTag::Percent => "MODULO",
        RawTag::StarStar => "EXPONENT",
        RawTag::And => "COMPOSITION_AND",
        RawTag::Or => "COMPOSITION_OR",
        _ => return None,
    })
}

fn assign_label(operator: RawTag) -> Option<&'static str> {
    Some(match operator {
        RawTag::Eq => "ASSIGN",
        RawTag::PlusEq => "ADD_ASSIGN",
        RawTag::MinusEq => "SUBTRACT_ASSIGN",
        RawTag::StarEq => "MULTIPLY_ASSIGN",
        RawTag::SlashEq => "DIVIDE_ASSIGN",
        RawTag::PercentEq => "MODULO_ASSIGN",
        RawTag::AmpEq => "BITWISE_AND_ASSIGN",
        RawTag::PipeEq => "BITWISE_OR_ASSIGN",
        RawTag::CaretEq => "BITWISE_XOR_ASSIGN",
        RawTag::AmpAmpEq => "LOGICAL_AND_ASSIGN",
        RawTag::PipePipeEq => "LOGICAL_OR_ASSIGN",
        RawTag::ShlEq => "SHIFT_LEFT_ASSIGN",
        RawTag::ShrEq => "SHIFT_RIGHT_ASSIGN",
        RawTag::StarStarEq => "EXPONENT_ASSIGN",
        _ => return None,
    })
}

fn unary_label(operator: RawTag) -> Option<&'static str> {
    Some(match operator {
        RawTag::Plus => "UPLUS",
        RawTag::Minus => "UMINUS",
        RawTag::Bang => "UBANG",
        RawTag::Tilde => "UTILDE",
        RawTag::Not => "NOT",
        _ => return None,
    })
}

fn labeled(label: Option<&'static str>, operator: RawTag) -> Result<&'static str, SubjectError> {
    label.ok_or(SubjectError::Unlabeled(operator))
}

impl Visitor for Printer {
    fn integer(&mut self, text: &str) {
        self.emit(format!("INTEGER={text}"));
    }

    fn global_variable(&mut self, name: &str) {
        self.emit(format!("GLOBAL_VARIABLE={name}"));
    }

    fn back_reference(&mut self, text: &str) {
        self.emit(format!("BACK_REFERENCE={text}"));
    }

    fn nth_reference(&mut self, text: &str) {
        self.emit(format!("NTH_REFERENCE={text}"));
    }

    fn keyword_literal(&mut self, keyword: RawTag) -> Result<(), SubjectError> {
        let label = match keyword {
            RawTag::True => "TRUE",
            RawTag::False => "FALSE",
            RawTag::Nil => "NIL",
            RawTag::SelfKw => "SELF",
            other => return Err(SubjectError::Unlabeled(other)),
        };
        self.emit(label);
        Ok(())
    }

    fn vcall(&mut self, name: &str) {
        self.emit(format!("VCALL={name}"));
    }

    fn fcall(&mut self, name: &str, _args: usize) {
        self.emit(format!("FCALL={name}"));
    }

    fn array(&mut self, len: usize) {
        self.emit(format!("ARRAY={len}"));
    }

    fn index(&mut self, has_index: bool) {
        self.emit(if has_index { "INDEX" } else { "INDEX_CALL" });
    }

    fn assign(&mut self, operator: RawTag) -> Result<(), SubjectError> {
        let label = labeled(assign_label(operator), operator)?;
        self.emit(label);
        Ok(())
    }

    fn binary(&mut self, operator: RawTag) -> Result<(), SubjectError> {
        let label = labeled(binary_label(operator), operator)?;
        self.emit(label);
        Ok(())
    }

    fn unary(&mut self, operator: RawTag) -> Result<(), SubjectError> {
        let label = labeled(unary_label(operator), operator)?;
        self.emit(label);
        Ok(())
    }

    fn range(&mut self, operator: RawTag, has_left: bool) -> Result<(), SubjectError> {
        let label = match (operator, has_left) {
            (RawTag::DotDot, true) => "RANGE_INCLUSIVE",
            (RawTag::DotDotDot, true) => "RANGE_EXCLUSIVE",
            (RawTag::DotDot, false) => "BEGINLESS_RANGE_INCLUSIVE",
            (RawTag::DotDotDot, false) => "BEGINLESS_RANGE_EXCLUSIVE",
            (other, _) => return Err(SubjectError::Unlabeled(other)),
        };
        self.emit(label);
        Ok(())
    }

    fn ternary(&mut self) {
        self.emit("TERNARY");
    }

    fn defined(&mut self) {
        self.emit("DEFINED");
    }

    fn modifier(&mut self, keyword: RawTag) -> Result<(), SubjectError> {
        let label = match keyword {
            RawTag::If => "IF_MODIFIER",
            RawTag::Unless => "UNLESS_MODIFIER",
            RawTag::While => "WHILE_MODIFIER",
            RawTag::Until => "UNTIL_MODIFIER",
            RawTag::Rescue => "RESCUE_MODIFIER",
            other => return Err(SubjectError::Unlabeled(other)),
        };
        self.emit(label);
        Ok(())
    }

    fn loop_block(&mut self, keyword: RawTag) -> Result<(), SubjectError> {
        let label = match keyword {
            RawTag::While => "WHILE",
            RawTag::Until => "UNTIL",
            other => return Err(SubjectError::Unlabeled(other)),
        };
        self.emit(label);
        Ok(())
    }

    fn begin_block(&mut self, _has_ensure: bool) {
        self.emit("BEGIN");
    }
}

#[cfg(test)]
mod tests;
