use super::*;
use pretty_assertions::assert_eq;

#[test]
fn leaf_labels_embed_text() {
    let mut printer = Printer::new();
    printer.integer("0x10");
    printer.global_variable("$a");
    printer.back_reference("$&");
    printer.nth_reference("$1");
    printer.vcall("foo");
    printer.fcall("foo?", 0);
    printer.array(0);
    assert_eq!(
        printer.into_labels(),
        [
            "INTEGER=0x10",
            "GLOBAL_VARIABLE=$a",
            "BACK_REFERENCE=$&",
            "NTH_REFERENCE=$1",
            "VCALL=foo",
            "FCALL=foo?",
            "ARRAY=0"
        ]
    );
}

#[test]
fn operators_outside_the_reference_vocabulary() {
    let mut printer = Printer::new();
    for op in [RawTag::Less, RawTag::Pipe, RawTag::Shl] {
        assert_eq!(printer.binary(op), Ok(()));
    }
    assert_eq!(printer.assign(RawTag::AmpEq), Ok(()));
    assert_eq!(
        printer.into_labels(),
        ["LESS", "BITWISE_OR", "SHIFT_LEFT", "BITWISE_AND_ASSIGN"]
    );
}

#[test]
fn unary_and_binary_share_tags() {
    let mut printer = Printer::new();
    assert_eq!(printer.unary(RawTag::Minus), Ok(()));
    assert_eq!(printer.binary(RawTag::Minus), Ok(()));
    assert_eq!(printer.unary(RawTag::Not), Ok(()));
    assert_eq!(printer.into_labels(), ["UMINUS", "SUBTRACT", "NOT"]);
}

#[test]
fn ranges_by_operator_and_left_operand() {
    let mut printer = Printer::new();
    assert_eq!(printer.range(RawTag::DotDot, true), Ok(()));
    assert_eq!(printer.range(RawTag::DotDotDot, false), Ok(()));
    assert_eq!(
        printer.into_labels(),
        ["RANGE_INCLUSIVE", "BEGINLESS_RANGE_EXCLUSIVE"]
    );
}

#[test]
fn postfix_and_block_forms_differ() {
    let mut printer = Printer::new();
    assert_eq!(printer.modifier(RawTag::While), Ok(()));
    assert_eq!(printer.loop_block(RawTag::While), Ok(()));
    printer.begin_block(true);
    printer.group();
    assert_eq!(printer.into_labels(), ["WHILE_MODIFIER", "WHILE", "BEGIN"]);
}

#[test]
fn unknown_operators_are_rejected() {
    let mut printer = Printer::new();
    assert_eq!(
        printer.binary(RawTag::Question),
        Err(SubjectError::Unlabeled(RawTag::Question))
    );
    assert_eq!(
        printer.unary(RawTag::Star),
        Err(SubjectError::Unlabeled(RawTag::Star))
    );
    assert_eq!(
        printer.modifier(RawTag::Do),
        Err(SubjectError::Unlabeled(RawTag::Do))
    );
    assert!(printer.into_labels().is_empty());
}
