use super::*;
use pretty_assertions::assert_eq;

#[test]
fn alloc_returns_sequential_ids() {
    let mut arena = SyntaxArena::new();
    let a = arena.alloc(Node::Int("1".into()));
    let b = arena.alloc(Node::Int("2".into()));
    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(arena.len(), 2);
    assert_eq!(arena.get(b), &Node::Int("2".into()));
}

#[test]
fn aref_children_without_index() {
    let mut arena = SyntaxArena::new();
    let recv = arena.alloc(Node::VCall("foo".into()));
    let aref = Node::Aref {
        receiver: recv,
        index: None,
    };
    assert_eq!(aref.children(), vec![recv]);
}

#[test]
fn beginless_range_has_only_right_child() {
    let mut arena = SyntaxArena::new();
    let right = arena.alloc(Node::Int("2".into()));
    let range = Node::Range {
        left: None,
        right: Some(right),
        exclusive: false,
    };
    assert_eq!(range.children(), vec![right]);
}

#[test]
fn modifier_children_are_in_source_order() {
    let mut arena = SyntaxArena::new();
    let statement = arena.alloc(Node::Int("1".into()));
    let predicate = arena.alloc(Node::Keyword("true".into()));
    let node = Node::Modifier {
        kind: Modifier::If,
        statement,
        predicate,
    };
    assert_eq!(node.children(), vec![statement, predicate]);
}

#[test]
fn begin_children_include_ensure() {
    let mut arena = SyntaxArena::new();
    let body = arena.alloc(Node::Int("1".into()));
    let ensure = arena.alloc(Node::Int("2".into()));
    let node = Node::Begin {
        body: vec![body],
        ensure: Some(vec![ensure]),
    };
    assert_eq!(node.children(), vec![body, ensure]);
}
