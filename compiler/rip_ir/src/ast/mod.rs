//! Syntax tree for parsed snippets.
//!
//! Nodes live in a [`SyntaxArena`] and refer to each other through
//! [`NodeId`] indices. The tree keeps exactly the structure the label
//! vocabulary needs: operator text is stored verbatim, optional parts
//! (index operands, array contents, range bounds) stay `Option` so that
//! "absent" and "present but empty" remain distinguishable.

/// Index of a node in a [`SyntaxArena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Postfix statement modifiers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    If,
    Unless,
    While,
    Until,
    Rescue,
}

/// Block loop keywords.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LoopKind {
    While,
    Until,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    // Scanner-level leaves
    Int(String),
    GlobalVar(String),
    BackRef(String),
    Keyword(String),
    Ident(String),
    Const(String),

    /// Variable read; wraps a `Keyword`, `Ident`, `Const` or `GlobalVar`.
    VarRef(NodeId),
    /// Assignment target; wraps an `Ident`, `Const` or `GlobalVar`.
    VarField(NodeId),
    /// Receiverless call without arguments, e.g. `foo`.
    VCall(String),
    /// Receiverless call with an argument list, or a `name?`/`name!` call.
    /// `args` is `None` when no parenthesized list was written.
    FCall {
        name: String,
        args: Option<Vec<NodeId>>,
    },
    Paren(Vec<NodeId>),
    /// `None` for `[]`.
    Array(Option<Vec<NodeId>>),
    /// `recv[...]`; `index` is `None` for `recv[]`.
    Aref {
        receiver: NodeId,
        index: Option<Vec<NodeId>>,
    },
    /// `recv[...]` on the left of an assignment.
    ArefField {
        receiver: NodeId,
        index: Option<Vec<NodeId>>,
    },
    Assign {
        target: NodeId,
        value: NodeId,
    },
    OpAssign {
        target: NodeId,
        operator: String,
        value: NodeId,
    },
    Binary {
        left: NodeId,
        operator: String,
        right: NodeId,
    },
    /// `operator` is `+`, `-@`, `!`, `~` or `not`.
    Unary {
        operator: String,
        operand: NodeId,
    },
    Range {
        left: Option<NodeId>,
        right: Option<NodeId>,
        exclusive: bool,
    },
    Ternary {
        predicate: NodeId,
        then: NodeId,
        otherwise: NodeId,
    },
    Defined(NodeId),
    /// `statement <kind> predicate`, children in source order.
    Modifier {
        kind: Modifier,
        statement: NodeId,
        predicate: NodeId,
    },
    Loop {
        kind: LoopKind,
        predicate: NodeId,
        body: Vec<NodeId>,
    },
    Begin {
        body: Vec<NodeId>,
        ensure: Option<Vec<NodeId>>,
    },
}

impl Node {
    /// Direct children in source order.
    pub fn children(&self) -> Vec<NodeId> {
        match self {
            Node::Int(_)
            | Node::GlobalVar(_)
            | Node::BackRef(_)
            | Node::Keyword(_)
            | Node::Ident(_)
            | Node::Const(_)
            | Node::VCall(_) => Vec::new(),
            Node::VarRef(id) | Node::VarField(id) | Node::Defined(id) => vec![*id],
            Node::Unary { operand, .. } => vec![*operand],
            Node::FCall { args, .. } => args.clone().unwrap_or_default(),
            Node::Array(items) => items.clone().unwrap_or_default(),
            Node::Paren(items) => items.clone(),
            Node::Aref { receiver, index } | Node::ArefField { receiver, index } => {
                let mut out = vec![*receiver];
                out.extend(index.iter().flatten().copied());
                out
            }
            Node::Assign { target, value } | Node::OpAssign { target, value, .. } => {
                vec![*target, *value]
            }
            Node::Binary { left, right, .. } => vec![*left, *right],
            Node::Range { left, right, .. } => left.iter().chain(right.iter()).copied().collect(),
            Node::Ternary {
                predicate,
                then,
                otherwise,
            } => vec![*predicate, *then, *otherwise],
            Node::Modifier {
                statement,
                predicate,
                ..
            } => vec![*statement, *predicate],
            Node::Loop {
                predicate, body, ..
            } => {
                let mut out = vec![*predicate];
                out.extend_from_slice(body);
                out
            }
            Node::Begin { body, ensure } => {
                let mut out = body.clone();
                out.extend(ensure.iter().flatten().copied());
                out
            }
        }
    }
}

/// Flat node storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyntaxArena {
    nodes: Vec<Node>,
}

impl SyntaxArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `node` and return its id.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = u32::try_from(self.nodes.len()).unwrap_or(u32::MAX);
        self.nodes.push(node);
        NodeId(id)
    }

    /// Look up a node allocated by this arena.
    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A parsed snippet: its arena and top-level statements in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub arena: SyntaxArena,
    pub statements: Vec<NodeId>,
}

#[cfg(test)]
mod tests;
