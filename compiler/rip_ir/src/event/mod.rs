//! Production events in completion order.
//!
//! A bottom-up parser completes every sub-expression before the
//! expression that contains it, so the completion order of a parse is a
//! post-order traversal of its tree. [`events`] reproduces that order with
//! an explicit stack, visiting children left to right.

use crate::ast::{LoopKind, Modifier, Node, NodeId, Program, SyntaxArena};

/// What a variable reference or assignment target names.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Variable<'a> {
    Keyword(&'a str),
    Local(&'a str),
    Global(&'a str),
    Const(&'a str),
}

/// One completed production, with the data derived from its children.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProductionEvent<'a> {
    Int(&'a str),
    GlobalVar(&'a str),
    /// Named (`$&`) and numbered (`$1`) back-references alike.
    BackRef(&'a str),
    /// Identifier, constant or keyword token with no production of its own.
    Word(&'a str),
    VarRef(Variable<'a>),
    VarField(Variable<'a>),
    VCall(&'a str),
    FCall {
        name: &'a str,
        args: usize,
    },
    Paren,
    Array {
        elements: Option<usize>,
    },
    Aref {
        index: Option<usize>,
    },
    ArefField {
        index: Option<usize>,
    },
    Assign,
    OpAssign {
        operator: &'a str,
    },
    Binary {
        operator: &'a str,
    },
    Unary {
        operator: &'a str,
    },
    Range {
        exclusive: bool,
        has_left: bool,
    },
    Ternary,
    Defined,
    Modifier(Modifier),
    Loop(LoopKind),
    Begin {
        ensure: bool,
    },
    Program {
        statements: usize,
    },
}

/// All production events of `program`, in completion order.
///
/// The final event is always [`ProductionEvent::Program`].
pub fn events(program: &Program) -> Vec<ProductionEvent<'_>> {
    let arena = &program.arena;
    let mut out = Vec::with_capacity(arena.len() + 1);
    // (node, children already pushed)
    let mut stack: Vec<(NodeId, bool)> = program
        .statements
        .iter()
        .rev()
        .map(|&id| (id, false))
        .collect();

    while let Some((id, expanded)) = stack.pop() {
        let node = arena.get(id);
        if expanded {
            out.push(event_for(arena, node));
            continue;
        }
        stack.push((id, true));
        for child in node.children().into_iter().rev() {
            stack.push((child, false));
        }
    }

    out.push(ProductionEvent::Program {
        statements: program.statements.len(),
    });
    out
}

fn variable(arena: &SyntaxArena, id: NodeId) -> Variable<'_> {
    match arena.get(id) {
        Node::Keyword(text) => Variable::Keyword(text),
        Node::GlobalVar(text) => Variable::Global(text),
        Node::Const(text) => Variable::Const(text),
        Node::Ident(text) => Variable::Local(text),
        other => {
            debug_assert!(false, "variable wrapper around {other:?}");
            Variable::Local("")
        }
    }
}

fn event_for<'a>(arena: &'a SyntaxArena, node: &'a Node) -> ProductionEvent<'a> {
    match node {
        Node::Int(text) => ProductionEvent::Int(text),
        Node::GlobalVar(text) => ProductionEvent::GlobalVar(text),
        Node::BackRef(text) => ProductionEvent::BackRef(text),
        Node::Keyword(text) | Node::Ident(text) | Node::Const(text) => ProductionEvent::Word(text),
        Node::VarRef(id) => ProductionEvent::VarRef(variable(arena, *id)),
        Node::VarField(id) => ProductionEvent::VarField(variable(arena, *id)),
        Node::VCall(name) => ProductionEvent::VCall(name),
        Node::FCall { name, args } => ProductionEvent::FCall {
            name,
            args: args.as_ref().map_or(0, Vec::len),
        },
        Node::Paren(_) => ProductionEvent::Paren,
        Node::Array(items) => ProductionEvent::Array {
            elements: items.as_ref().map(Vec::len),
        },
        Node::Aref { index, .. } => ProductionEvent::Aref {
            index: index.as_ref().map(Vec::len),
        },
        Node::ArefField { index, .. } => ProductionEvent::ArefField {
            index: index.as_ref().map(Vec::len),
        },
        Node::Assign { .. } => ProductionEvent::Assign,
        Node::OpAssign { operator, .. } => ProductionEvent::OpAssign { operator },
        Node::Binary { operator, .. } => ProductionEvent::Binary { operator },
        Node::Unary { operator, .. } => ProductionEvent::Unary { operator },
        Node::Range {
            left, exclusive, ..
        } => ProductionEvent::Range {
            exclusive: *exclusive,
            has_left: left.is_some(),
        },
        Node::Ternary { .. } => ProductionEvent::Ternary,
        Node::Defined(_) => ProductionEvent::Defined,
        Node::Modifier { kind, .. } => ProductionEvent::Modifier(*kind),
        Node::Loop { kind, .. } => ProductionEvent::Loop(*kind),
        Node::Begin { ensure, .. } => ProductionEvent::Begin {
            ensure: ensure.is_some(),
        },
    }
}
