#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

fn labels(source: &str) -> String {
    render_labels(source).unwrap()
}

// === Leaves ===

#[test]
fn integers_keep_their_source_text() {
    assert_eq!(labels("1"), "INTEGER=1");
    assert_eq!(labels("0x10"), "INTEGER=0x10");
    assert_eq!(labels("1_000"), "INTEGER=1_000");
}

#[test]
fn keyword_references() {
    assert_eq!(labels("true; false; nil; self"), "TRUE FALSE NIL SELF");
    assert_eq!(labels("__LINE__"), "");
}

#[test]
fn back_references_split_on_digits() {
    assert_eq!(labels("$1"), "NTH_REFERENCE=$1");
    assert_eq!(labels("$10"), "NTH_REFERENCE=$10");
    assert_eq!(labels("$&"), "BACK_REFERENCE=$&");
    assert_eq!(labels("$'"), "BACK_REFERENCE=$'");
}

#[test]
fn plain_variable_references_are_unlabeled() {
    assert_eq!(labels("Foo"), "");
    assert_eq!(labels("a = 1; a"), "INTEGER=1 ASSIGN");
}

// === Calls ===

#[test]
fn calls_follow_their_arguments() {
    assert_eq!(labels("foo"), "VCALL=foo");
    assert_eq!(labels("foo?"), "FCALL=foo?");
    assert_eq!(labels("foo(1, 2)"), "INTEGER=1 INTEGER=2 FCALL=foo");
}

// === Operators ===

#[test]
fn binary_operands_come_first() {
    assert_eq!(labels("1 + 2 * 3"), "INTEGER=1 INTEGER=2 INTEGER=3 MULTIPLY ADD");
    assert_eq!(labels("1 <=> 2"), "INTEGER=1 INTEGER=2 COMPARE");
    assert_eq!(labels("true and false"), "TRUE FALSE COMPOSITION_AND");
}

#[test]
fn every_binary_operator_has_its_own_label() {
    let table = [
        ("||", "LOGICAL_OR"),
        ("&&", "LOGICAL_AND"),
        ("<=>", "COMPARE"),
        ("==", "DOUBLE_EQUAL"),
        ("===", "TRIPLE_EQUAL"),
        ("!=", "BANG_EQUAL"),
        ("=~", "EQUAL_TILDE"),
        ("!~", "BANG_TILDE"),
        ("+", "ADD"),
        ("-", "SUBTRACT"),
        ("*", "MULTIPLY"),
        ("/", "DIVIDE"),
        ("%", "MODULO"),
        ("**", "EXPONENT"),
        ("and", "COMPOSITION_AND"),
        ("or", "COMPOSITION_OR"),
    ];
    for (operator, label) in table {
        assert_eq!(
            labels(&format!("1 {operator} 2")),
            format!("INTEGER=1 INTEGER=2 {label}"),
            "operator {operator}"
        );
    }
}

#[test]
fn every_compound_assignment_has_its_own_label() {
    let table = [
        ("+=", "ADD_ASSIGN"),
        ("-=", "SUBTRACT_ASSIGN"),
        ("*=", "MULTIPLY_ASSIGN"),
        ("/=", "DIVIDE_ASSIGN"),
        ("%=", "MODULO_ASSIGN"),
        ("&=", "BITWISE_AND_ASSIGN"),
        ("|=", "BITWISE_OR_ASSIGN"),
        ("^=", "BITWISE_XOR_ASSIGN"),
        ("&&=", "LOGICAL_AND_ASSIGN"),
        ("||=", "LOGICAL_OR_ASSIGN"),
        ("<<=", "SHIFT_LEFT_ASSIGN"),
        (">>=", "SHIFT_RIGHT_ASSIGN"),
        ("**=", "EXPONENT_ASSIGN"),
    ];
    for (operator, label) in table {
        assert_eq!(
            labels(&format!("a {operator} 1")),
            format!("INTEGER=1 {label}"),
            "operator {operator}"
        );
    }
}

#[test]
fn every_unary_operator_has_its_own_label() {
    let table = [
        ("+ 2", "UPLUS"),
        ("- 2", "UMINUS"),
        ("!2", "UBANG"),
        ("~2", "UTILDE"),
        ("not 2", "NOT"),
    ];
    for (source, label) in table {
        assert_eq!(labels(source), format!("INTEGER=2 {label}"), "source {source}");
    }
}

#[test]
fn unary_minus_wraps_the_power() {
    assert_eq!(labels("-2 ** 2"), "INTEGER=2 INTEGER=2 EXPONENT UMINUS");
}

#[test]
fn unary_operators() {
    assert_eq!(labels("+ 2"), "INTEGER=2 UPLUS");
    assert_eq!(labels("!true"), "TRUE UBANG");
    assert_eq!(labels("~1"), "INTEGER=1 UTILDE");
    assert_eq!(labels("not true"), "TRUE NOT");
}

#[test]
fn parentheses_are_structural() {
    assert_eq!(labels("(1 + 2)"), "INTEGER=1 INTEGER=2 ADD");
}

// === Assignment ===

#[test]
fn assignments() {
    assert_eq!(labels("a += 1"), "INTEGER=1 ADD_ASSIGN");
    assert_eq!(labels("$a = 1"), "GLOBAL_VARIABLE=$a INTEGER=1 ASSIGN");
    assert_eq!(labels("foo[0] = 1"), "VCALL=foo INTEGER=0 INDEX INTEGER=1 ASSIGN");
    assert_eq!(labels("foo[1] += 2"), "VCALL=foo INTEGER=1 INDEX INTEGER=2 ADD_ASSIGN");
    assert_eq!(labels("a = 1 rescue 2"), "INTEGER=1 INTEGER=2 RESCUE_MODIFIER ASSIGN");
}

// === Composite expressions ===

#[test]
fn arrays_count_their_elements() {
    assert_eq!(labels("[1, 2]"), "INTEGER=1 INTEGER=2 ARRAY=2");
    assert_eq!(labels("[]"), "ARRAY=0");
}

#[test]
fn subscripts() {
    assert_eq!(labels("foo[1]"), "VCALL=foo INTEGER=1 INDEX");
    assert_eq!(labels("foo[nil]"), "VCALL=foo NIL INDEX");
    assert_eq!(labels("foo[]"), "VCALL=foo INDEX_CALL");
}

#[test]
fn ranges() {
    assert_eq!(labels("1..2"), "INTEGER=1 INTEGER=2 RANGE_INCLUSIVE");
    assert_eq!(labels("1...2"), "INTEGER=1 INTEGER=2 RANGE_EXCLUSIVE");
    assert_eq!(labels("..2"), "INTEGER=2 BEGINLESS_RANGE_INCLUSIVE");
    assert_eq!(labels("...2"), "INTEGER=2 BEGINLESS_RANGE_EXCLUSIVE");
}

#[test]
fn modifiers_and_blocks_never_share_labels() {
    assert_eq!(labels("1 if true"), "INTEGER=1 TRUE IF_MODIFIER");
    assert_eq!(labels("1 unless true"), "INTEGER=1 TRUE UNLESS_MODIFIER");
    assert_eq!(labels("while true; 1; end"), "TRUE INTEGER=1 WHILE");
    assert_eq!(labels("begin; 1; end while true"), "INTEGER=1 BEGIN TRUE WHILE_MODIFIER");
}

#[test]
fn loop_modifiers_and_until() {
    assert_eq!(labels("1 while true"), "INTEGER=1 TRUE WHILE_MODIFIER");
    assert_eq!(labels("1 until true"), "INTEGER=1 TRUE UNTIL_MODIFIER");
    assert_eq!(labels("until true; 1; end"), "TRUE INTEGER=1 UNTIL");
    assert_eq!(labels("until false do 1 end"), "FALSE INTEGER=1 UNTIL");
    assert_eq!(labels("begin; 1; end until true"), "INTEGER=1 BEGIN TRUE UNTIL_MODIFIER");
}

#[test]
fn ternary_and_defined() {
    assert_eq!(labels("true ? 1 : 2"), "TRUE INTEGER=1 INTEGER=2 TERNARY");
    assert_eq!(labels("defined? foo"), "VCALL=foo DEFINED");
}

// === Table lookups ===

#[test]
fn every_event_kind_is_handled() {
    assert_eq!(classify(&ProductionEvent::Paren).unwrap(), None);
    assert_eq!(
        classify(&ProductionEvent::Program { statements: 3 }).unwrap(),
        None
    );
    assert_eq!(
        classify(&ProductionEvent::VarField(Variable::Local("a"))).unwrap(),
        None
    );
    assert_eq!(
        classify(&ProductionEvent::ArefField { index: Some(1) }).unwrap(),
        Some(Label::Index)
    );
    assert_eq!(
        classify(&ProductionEvent::Begin { ensure: true }).unwrap(),
        Some(Label::Begin)
    );
}

#[test]
fn unknown_operators_fail_hard() {
    assert_eq!(
        classify(&ProductionEvent::Binary { operator: "<" }),
        Err(ClassifyError::UnknownBinaryOperator("<".into()))
    );
    assert_eq!(
        classify(&ProductionEvent::Unary { operator: "-" }),
        Err(ClassifyError::UnknownUnaryOperator("-".into()))
    );
    assert_eq!(
        classify(&ProductionEvent::OpAssign { operator: "=" }),
        Err(ClassifyError::UnknownOpAssign("=".into()))
    );
}

#[test]
fn unclassified_operators_are_setup_errors() {
    assert_eq!(
        label_stream("1 < 2"),
        Err(SetupError::Classify(ClassifyError::UnknownBinaryOperator(
            "<".into()
        )))
    );
    assert!(matches!(label_stream("1 +"), Err(SetupError::Parse(_))));
}
