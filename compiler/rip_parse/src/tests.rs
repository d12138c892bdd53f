#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;
use rip_ir::{events, ProductionEvent, Variable};

/// Compact rendering of the completion order, program event excluded.
fn order(source: &str) -> Vec<String> {
    let program = parse(source).unwrap();
    events(&program)
        .into_iter()
        .filter_map(|event| match event {
            ProductionEvent::Int(text) => Some(format!("int:{text}")),
            ProductionEvent::GlobalVar(text) => Some(format!("gvar:{text}")),
            ProductionEvent::BackRef(text) => Some(format!("backref:{text}")),
            ProductionEvent::Word(_) => None,
            ProductionEvent::VarRef(var) => Some(format!("var_ref:{}", variable(var))),
            ProductionEvent::VarField(var) => Some(format!("var_field:{}", variable(var))),
            ProductionEvent::VCall(name) => Some(format!("vcall:{name}")),
            ProductionEvent::FCall { name, args } => Some(format!("fcall:{name}/{args}")),
            ProductionEvent::Paren => Some("paren".into()),
            ProductionEvent::Array { elements } => Some(format!("array:{elements:?}")),
            ProductionEvent::Aref { index } => Some(format!("aref:{index:?}")),
            ProductionEvent::ArefField { index } => Some(format!("aref_field:{index:?}")),
            ProductionEvent::Assign => Some("assign".into()),
            ProductionEvent::OpAssign { operator } => Some(format!("opassign:{operator}")),
            ProductionEvent::Binary { operator } => Some(format!("binary:{operator}")),
            ProductionEvent::Unary { operator } => Some(format!("unary:{operator}")),
            ProductionEvent::Range {
                exclusive,
                has_left,
            } => Some(format!(
                "range:{}{}",
                if has_left { "" } else { "beginless:" },
                if exclusive { "..." } else { ".." }
            )),
            ProductionEvent::Ternary => Some("ternary".into()),
            ProductionEvent::Defined => Some("defined".into()),
            ProductionEvent::Modifier(kind) => Some(format!("modifier:{kind:?}")),
            ProductionEvent::Loop(kind) => Some(format!("loop:{kind:?}")),
            ProductionEvent::Begin { ensure } => Some(format!("begin:{ensure}")),
            ProductionEvent::Program { .. } => None,
        })
        .collect()
}

fn variable(var: Variable<'_>) -> String {
    match var {
        Variable::Keyword(text) => format!("kw:{text}"),
        Variable::Local(text) => format!("local:{text}"),
        Variable::Global(text) => format!("global:{text}"),
        Variable::Const(text) => format!("const:{text}"),
    }
}

fn parse_err(source: &str) -> ParseError {
    parse(source).unwrap_err()
}

// === Literals and variables ===

#[test]
fn integer_statement() {
    assert_eq!(order("1"), ["int:1"]);
}

#[test]
fn empty_program() {
    let program = parse("").unwrap();
    assert!(program.statements.is_empty());
    assert_eq!(
        events(&program),
        [ProductionEvent::Program { statements: 0 }]
    );
}

#[test]
fn statements_separated_by_terms() {
    let program = parse("1; 2\n\n3").unwrap();
    assert_eq!(program.statements.len(), 3);
}

#[test]
fn keyword_values() {
    assert_eq!(
        order("true; nil; self"),
        ["var_ref:kw:true", "var_ref:kw:nil", "var_ref:kw:self"]
    );
}

#[test]
fn back_references() {
    assert_eq!(order("$1; $&"), ["backref:$1", "backref:$&"]);
}

#[test]
fn constant_reference() {
    assert_eq!(order("Foo"), ["var_ref:const:Foo"]);
}

// === Calls ===

#[test]
fn bare_identifier_is_vcall() {
    assert_eq!(order("foo"), ["vcall:foo"]);
}

#[test]
fn predicate_name_is_fcall() {
    assert_eq!(order("foo?"), ["fcall:foo?/0"]);
}

#[test]
fn call_arguments_complete_before_call() {
    assert_eq!(order("foo(1, 2)"), ["int:1", "int:2", "fcall:foo/2"]);
    assert_eq!(order("foo()"), ["fcall:foo/0"]);
    assert_eq!(order("Foo(1,)"), ["int:1", "fcall:Foo/1"]);
}

#[test]
fn command_call_is_unsupported() {
    assert!(matches!(
        parse_err("foo 1"),
        ParseError::Unsupported { construct, .. } if construct == "command call"
    ));
    assert!(matches!(
        parse_err("foo [1]"),
        ParseError::Unsupported { .. }
    ));
}

#[test]
fn spaced_operator_after_method_is_binary() {
    assert_eq!(order("foo - 1"), ["vcall:foo", "int:1", "binary:-"]);
}

// === Assignment ===

#[test]
fn assignment_declares_local() {
    assert_eq!(
        order("a = 1; a"),
        ["var_field:local:a", "int:1", "assign", "var_ref:local:a"]
    );
}

#[test]
fn op_assign_global() {
    assert_eq!(
        order("$a += 1"),
        ["var_field:global:$a", "int:1", "opassign:+="]
    );
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(
        order("a = b = 1"),
        [
            "var_field:local:a",
            "var_field:local:b",
            "int:1",
            "assign",
            "assign"
        ]
    );
}

#[test]
fn assignment_value_takes_rescue_modifier() {
    assert_eq!(
        order("a = 1 rescue 2"),
        [
            "var_field:local:a",
            "int:1",
            "int:2",
            "modifier:Rescue",
            "assign"
        ]
    );
}

#[test]
fn index_assignment() {
    assert_eq!(
        order("foo[0] = 1"),
        ["vcall:foo", "int:0", "aref_field:Some(1)", "int:1", "assign"]
    );
}

#[test]
fn index_op_assignment_reduces_the_target_first() {
    assert_eq!(
        order("foo[1] += 2"),
        ["vcall:foo", "int:1", "aref_field:Some(1)", "int:2", "opassign:+="]
    );
}

#[test]
fn keyword_target_is_invalid() {
    assert!(matches!(
        parse_err("nil = 1"),
        ParseError::InvalidTarget { target, .. } if target == "nil"
    ));
    assert!(matches!(
        parse_err("$1 = 1"),
        ParseError::InvalidTarget { .. }
    ));
}

// === Arrays and indexing ===

#[test]
fn arrays() {
    assert_eq!(order("[1, 2]"), ["int:1", "int:2", "array:Some(2)"]);
    assert_eq!(order("[]"), ["array:None"]);
    assert_eq!(order("[\n1,\n]"), ["int:1", "array:Some(1)"]);
}

#[test]
fn index_forms() {
    assert_eq!(order("foo[1]"), ["vcall:foo", "int:1", "aref:Some(1)"]);
    assert_eq!(order("foo[]"), ["vcall:foo", "aref:None"]);
    assert_eq!(
        order("foo[1][2]"),
        ["vcall:foo", "int:1", "aref:Some(1)", "int:2", "aref:Some(1)"]
    );
}

// === Operators ===

#[test]
fn precedence_climbs() {
    assert_eq!(
        order("1 + 2 * 3"),
        ["int:1", "int:2", "int:3", "binary:*", "binary:+"]
    );
    assert_eq!(
        order("1 - 2 - 3"),
        ["int:1", "int:2", "binary:-", "int:3", "binary:-"]
    );
}

#[test]
fn power_is_right_associative() {
    assert_eq!(
        order("2 ** 3 ** 2"),
        ["int:2", "int:3", "int:2", "binary:**", "binary:**"]
    );
}

#[test]
fn unary_minus_wraps_power() {
    assert_eq!(
        order("-2 ** 2"),
        ["int:2", "int:2", "binary:**", "unary:-@"]
    );
    assert_eq!(order("-1"), ["int:1", "unary:-@"]);
}

#[test]
fn prefix_operators() {
    assert_eq!(order("+ 2"), ["int:2", "unary:+@"]);
    assert_eq!(order("!true"), ["var_ref:kw:true", "unary:!"]);
    assert_eq!(order("~1"), ["int:1", "unary:~"]);
}

#[test]
fn not_and_composition() {
    assert_eq!(order("not true"), ["var_ref:kw:true", "unary:not"]);
    assert_eq!(
        order("true and false or nil"),
        [
            "var_ref:kw:true",
            "var_ref:kw:false",
            "binary:and",
            "var_ref:kw:nil",
            "binary:or"
        ]
    );
}

#[test]
fn equality_is_non_associative() {
    assert!(matches!(
        parse_err("1 == 2 == 3"),
        ParseError::NonAssociative { operator, .. } if operator == "=="
    ));
}

#[test]
fn ranges() {
    assert_eq!(order("1..2"), ["int:1", "int:2", "range:.."]);
    assert_eq!(order("1..."), ["int:1", "range:..."]);
    assert_eq!(order("..2"), ["int:2", "range:beginless:.."]);
    assert!(matches!(
        parse_err("1..2..3"),
        ParseError::NonAssociative { .. }
    ));
}

#[test]
fn ternary() {
    assert_eq!(
        order("true ? 1 : 2"),
        ["var_ref:kw:true", "int:1", "int:2", "ternary"]
    );
}

#[test]
fn defined_check() {
    assert_eq!(order("defined? foo"), ["vcall:foo", "defined"]);
    assert_eq!(order("defined?(foo)"), ["vcall:foo", "defined"]);
}

#[test]
fn parenthesized_group() {
    assert_eq!(
        order("(1 + 2)"),
        ["int:1", "int:2", "binary:+", "paren"]
    );
}

// === Statements ===

#[test]
fn modifiers() {
    assert_eq!(
        order("1 if true"),
        ["int:1", "var_ref:kw:true", "modifier:If"]
    );
    assert_eq!(
        order("1 rescue 2"),
        ["int:1", "int:2", "modifier:Rescue"]
    );
    assert_eq!(
        order("1 if true while false"),
        [
            "int:1",
            "var_ref:kw:true",
            "modifier:If",
            "var_ref:kw:false",
            "modifier:While"
        ]
    );
}

#[test]
fn while_loop() {
    assert_eq!(
        order("while true; 1; end"),
        ["var_ref:kw:true", "int:1", "loop:While"]
    );
    assert_eq!(
        order("until false do 1 end"),
        ["var_ref:kw:false", "int:1", "loop:Until"]
    );
}

#[test]
fn begin_ensure() {
    assert_eq!(
        order("begin; 1; ensure; 2; end"),
        ["int:1", "int:2", "begin:true"]
    );
    assert_eq!(
        order("begin; 1; end while true"),
        ["int:1", "begin:false", "var_ref:kw:true", "modifier:While"]
    );
}

#[test]
fn begin_rescue_clause_is_unsupported() {
    assert!(matches!(
        parse_err("begin; 1; rescue; 2; end"),
        ParseError::Unsupported { .. }
    ));
}

#[test]
fn unsupported_keywords() {
    assert!(matches!(
        parse_err("def foo; end"),
        ParseError::Unsupported { .. }
    ));
}

#[test]
fn lex_errors_pass_through() {
    assert!(matches!(parse_err("'a'"), ParseError::Lex(_)));
}

#[test]
fn missing_close_is_eof_error() {
    assert!(matches!(
        parse_err("[1, 2"),
        ParseError::UnexpectedEof { .. }
    ));
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 5_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let program = parse(&source).unwrap();
    assert_eq!(events(&program).len(), depth + 2);
}
