//! Production classification.
//!
//! Maps every completed production of the reference parse to at most one
//! canonical [`Label`]. Structural productions (assignment targets,
//! argument wrappers, parentheses, the program itself) carry no label.

use rip_ir::{
    BinaryLabel, Label, LoopKind, Modifier, OpAssignLabel, ProductionEvent, RangeLabel,
    UnaryLabel, Variable,
};
use tracing::debug;

use crate::SetupError;

/// A production the label tables do not cover.
///
/// Always a gap between the reference parser and the classifier, so the
/// fixture is reported as a setup error rather than a mismatch.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error("no label for binary operator `{0}`")]
    UnknownBinaryOperator(String),
    #[error("no label for unary operator `{0}`")]
    UnknownUnaryOperator(String),
    #[error("no label for compound assignment `{0}`")]
    UnknownOpAssign(String),
}

/// Label of one production, or `None` for structural productions.
pub fn classify(event: &ProductionEvent<'_>) -> Result<Option<Label>, ClassifyError> {
    let label = match *event {
        ProductionEvent::Int(text) => Label::Integer(text.to_string()),
        ProductionEvent::GlobalVar(name) => Label::GlobalVariable(name.to_string()),
        ProductionEvent::BackRef(text) => back_reference(text),
        ProductionEvent::VarRef(Variable::Keyword(keyword)) => match keyword {
            "true" => Label::True,
            "false" => Label::False,
            "nil" => Label::Nil,
            "self" => Label::SelfRef,
            _ => return Ok(None),
        },
        ProductionEvent::VCall(name) => Label::VCall(name.to_string()),
        ProductionEvent::FCall { name, .. } => Label::FCall(name.to_string()),
        ProductionEvent::Array { elements } => Label::Array(elements.unwrap_or(0)),
        ProductionEvent::Aref { index } | ProductionEvent::ArefField { index } => match index {
            Some(n) if n > 0 => Label::Index,
            _ => Label::IndexCall,
        },
        ProductionEvent::Assign => Label::Assign,
        ProductionEvent::OpAssign { operator } => Label::OpAssign(op_assign_label(operator)?),
        ProductionEvent::Binary { operator } => Label::Binary(binary_label(operator)?),
        ProductionEvent::Unary { operator } => Label::Unary(unary_label(operator)?),
        ProductionEvent::Range {
            exclusive,
            has_left,
        } => Label::Range(RangeLabel::new(exclusive, has_left)),
        ProductionEvent::Ternary => Label::Ternary,
        ProductionEvent::Defined => Label::Defined,
        ProductionEvent::Modifier(kind) => match kind {
            Modifier::If => Label::IfModifier,
            Modifier::Unless => Label::UnlessModifier,
            Modifier::While => Label::WhileModifier,
            Modifier::Until => Label::UntilModifier,
            Modifier::Rescue => Label::RescueModifier,
        },
        ProductionEvent::Loop(LoopKind::While) => Label::While,
        ProductionEvent::Loop(LoopKind::Until) => Label::Until,
        ProductionEvent::Begin { .. } => Label::Begin,
        ProductionEvent::Word(_)
        | ProductionEvent::VarRef(
            Variable::Local(_) | Variable::Global(_) | Variable::Const(_),
        )
        | ProductionEvent::VarField(_)
        | ProductionEvent::Paren
        | ProductionEvent::Program { .. } => return Ok(None),
    };
    Ok(Some(label))
}

/// `$1`, `$10` are numbered groups; `$&`, `` $` `` and friends are named.
fn back_reference(text: &str) -> Label {
    let numbered = text
        .strip_prefix('$')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));
    if numbered {
        Label::NthReference(text.to_string())
    } else {
        Label::BackReference(text.to_string())
    }
}

fn binary_label(operator: &str) -> Result<BinaryLabel, ClassifyError> {
    Ok(match operator {
        "||" => BinaryLabel::LogicalOr,
        "&&" => BinaryLabel::LogicalAnd,
        "<=>" => BinaryLabel::Compare,
        "==" => BinaryLabel::DoubleEqual,
        "===" => BinaryLabel::TripleEqual,
        "!=" => BinaryLabel::BangEqual,
        "=~" => BinaryLabel::EqualTilde,
        "!~" => BinaryLabel::BangTilde,
        "+" => BinaryLabel::Add,
        "-" => BinaryLabel::Subtract,
        "*" => BinaryLabel::Multiply,
        "/" => BinaryLabel::Divide,
        "%" => BinaryLabel::Modulo,
        "**" => BinaryLabel::Exponent,
        "and" => BinaryLabel::CompositionAnd,
        "or" => BinaryLabel::CompositionOr,
        _ => return Err(ClassifyError::UnknownBinaryOperator(operator.to_string())),
    })
}

fn unary_label(operator: &str) -> Result<UnaryLabel, ClassifyError> {
    Ok(match operator {
        "+@" => UnaryLabel::Plus,
        "-@" => UnaryLabel::Minus,
        "!" => UnaryLabel::Bang,
        "~" => UnaryLabel::Tilde,
        "not" => UnaryLabel::Not,
        _ => return Err(ClassifyError::UnknownUnaryOperator(operator.to_string())),
    })
}

fn op_assign_label(operator: &str) -> Result<OpAssignLabel, ClassifyError> {
    Ok(match operator {
        "+=" => OpAssignLabel::Add,
        "-=" => OpAssignLabel::Subtract,
        "*=" => OpAssignLabel::Multiply,
        "/=" => OpAssignLabel::Divide,
        "%=" => OpAssignLabel::Modulo,
        "&=" => OpAssignLabel::BitwiseAnd,
        "|=" => OpAssignLabel::BitwiseOr,
        "^=" => OpAssignLabel::BitwiseXor,
        "&&=" => OpAssignLabel::LogicalAnd,
        "||=" => OpAssignLabel::LogicalOr,
        "<<=" => OpAssignLabel::ShiftLeft,
        ">>=" => OpAssignLabel::ShiftRight,
        "**=" => OpAssignLabel::Exponent,
        _ => return Err(ClassifyError::UnknownOpAssign(operator.to_string())),
    })
}

/// Parse `source` with the reference parser and label its productions in
/// completion order.
pub fn label_stream(source: &str) -> Result<Vec<Label>, SetupError> {
    let program = rip_parse::parse(source)?;
    let events = rip_ir::events(&program);
    let mut labels = Vec::with_capacity(events.len());
    for event in &events {
        if let Some(label) = classify(event)? {
            labels.push(label);
        }
    }
    debug!(events = events.len(), labels = labels.len(), "classified");
    Ok(labels)
}

/// Labels of `source`, joined by single spaces.
pub fn render_labels(source: &str) -> Result<String, SetupError> {
    Ok(label_stream(source)?
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" "))
}

#[cfg(test)]
mod tests;
