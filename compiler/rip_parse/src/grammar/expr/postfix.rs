//! Subscripts and assignment.
//!
//! Assignment is recognized once the target is complete, so it is valid
//! wherever an operand starts: `1 + a = 2` assigns `a`.

use rip_ir::{Node, NodeId, TokenEvent};

use super::operators::ASSIGNMENT;
use crate::{ParseError, Parser};

impl<'src> Parser<'src> {
    pub(super) fn parse_postfix(&mut self) -> Result<NodeId, ParseError> {
        let mut node = self.parse_primary()?;
        while self.cursor.check(TokenEvent::LBracket) {
            self.cursor.advance();
            let index = self.parse_list(TokenEvent::RBracket, "`]`")?;
            node = self.alloc(Node::Aref {
                receiver: node,
                index,
            });
        }
        match self.cursor.op_in(ASSIGNMENT) {
            Some(operator) => self.parse_assignment(node, operator),
            None => Ok(node),
        }
    }

    /// The target node is complete before the value is parsed, so events
    /// for `a[1] += 2` list the subscript target ahead of the value. Ruby's
    /// own Ripper reduces an op-assigned subscript only at the end of the
    /// rule (`... INTEGER=2 INDEX ADD_ASSIGN`); labels here follow the tree.
    fn parse_assignment(&mut self, target: NodeId, operator: &str) -> Result<NodeId, ParseError> {
        let target = self.assignment_target(target)?;
        self.cursor.advance();
        let value = self.parse_arg_rhs()?;
        Ok(if operator == "=" {
            self.alloc(Node::Assign { target, value })
        } else {
            self.alloc(Node::OpAssign {
                target,
                operator: operator.to_string(),
                value,
            })
        })
    }

    /// Rewrite a parsed operand into its assignment-target form,
    /// declaring bare identifiers as locals.
    fn assignment_target(&mut self, node: NodeId) -> Result<NodeId, ParseError> {
        let target = match self.arena.get(node).clone() {
            Node::VCall(name) => {
                self.locals.insert(name.clone());
                let leaf = self.alloc(Node::Ident(name));
                Node::VarField(leaf)
            }
            Node::VarRef(leaf) => match self.arena.get(leaf) {
                Node::Ident(_) | Node::GlobalVar(_) | Node::Const(_) => Node::VarField(leaf),
                Node::Keyword(kw) => return Err(self.invalid_target(kw.clone())),
                _ => return Err(self.invalid_target("expression")),
            },
            Node::Aref { receiver, index } => Node::ArefField { receiver, index },
            Node::BackRef(text) => return Err(self.invalid_target(text)),
            _ => return Err(self.invalid_target("expression")),
        };
        Ok(self.alloc(target))
    }

    fn invalid_target(&self, target: impl Into<String>) -> ParseError {
        let (line, column) = self.position();
        ParseError::InvalidTarget {
            line,
            column,
            target: target.into(),
        }
    }
}
