//! Expressions.
//!
//! Precedence, loosest first:
//!
//! | level            | operators                         | assoc |
//! |------------------|-----------------------------------|-------|
//! | composition      | `and` `or`                        | left  |
//! | negation         | `not`                             | right |
//! | defined-check    | `defined?`                        | none  |
//! | assignment       | `=` `+=` ...                      | right |
//! | ternary          | `? :`                             | right |
//! | range            | `..` `...`                        | none  |
//! | logical          | `\|\|`, then `&&`                 | left  |
//! | equality         | `<=>` `==` `===` `!=` `=~` `!~`   | none  |
//! | comparison       | `<` `>` `<=` `>=`                 | left  |
//! | bitwise          | `\|` `^`, then `&`                | left  |
//! | shift            | `<<` `>>`                         | left  |
//! | additive         | `+` `-`                           | left  |
//! | multiplicative   | `*` `/` `%`                       | left  |
//! | unary minus      | `-`                               | right |
//! | power            | `**`                              | right |
//! | unary            | `!` `~` `+`                       | right |
//!
//! `defined?` and assignment are recognized where their operand starts
//! (in the primary and postfix parsers), which lets them appear on the
//! right of tighter operators the way the language allows (`1 + a = 2`).

mod operators;
mod postfix;
mod primary;

use rip_ir::{Node, NodeId};
use rip_stack::with_stack;

use crate::{ParseError, Parser};
use operators::{
    ADDITIVE, BITWISE_AND, BITWISE_OR, COMPARISON, EQUALITY, LOGICAL_AND, LOGICAL_OR,
    MULTIPLICATIVE, SHIFT,
};

type Level<'src> = fn(&mut Parser<'src>) -> Result<NodeId, ParseError>;

impl<'src> Parser<'src> {
    /// `expr`: composition with `and`/`or` over negations.
    pub(crate) fn parse_expr(&mut self) -> Result<NodeId, ParseError> {
        let mut left = self.parse_not()?;
        while let Some(op @ ("and" | "or")) = self.cursor.kw() {
            self.cursor.advance();
            self.cursor.skip_newlines();
            let right = self.parse_not()?;
            left = self.binary(left, op, right);
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> Result<NodeId, ParseError> {
        if self.cursor.check_kw("not") {
            self.cursor.advance();
            self.cursor.skip_newlines();
            let operand = self.parse_not()?;
            return Ok(self.unary("not", operand));
        }
        self.parse_arg()
    }

    /// `arg`: a single operand expression.
    pub(crate) fn parse_arg(&mut self) -> Result<NodeId, ParseError> {
        with_stack(|| self.parse_ternary())
    }

    /// Right-hand side of an assignment: `arg [rescue arg]`.
    pub(crate) fn parse_arg_rhs(&mut self) -> Result<NodeId, ParseError> {
        let statement = self.parse_arg()?;
        if !self.cursor.check_kw("rescue") {
            return Ok(statement);
        }
        self.cursor.advance();
        let predicate = self.parse_arg()?;
        Ok(self.alloc(Node::Modifier {
            kind: rip_ir::Modifier::Rescue,
            statement,
            predicate,
        }))
    }

    fn parse_ternary(&mut self) -> Result<NodeId, ParseError> {
        let predicate = self.parse_range()?;
        if !self.cursor.check_op("?") {
            return Ok(predicate);
        }
        self.cursor.advance();
        let then = self.parse_arg()?;
        self.cursor.skip_newlines();
        self.expect_op(":")?;
        let otherwise = self.parse_ternary()?;
        Ok(self.alloc(Node::Ternary {
            predicate,
            then,
            otherwise,
        }))
    }

    fn parse_range(&mut self) -> Result<NodeId, ParseError> {
        if let Some(op) = self.cursor.op_in(&["..", "..."]) {
            self.cursor.advance();
            let right = self.parse_logical_or()?;
            return Ok(self.range(None, op, Some(right)));
        }

        let left = self.parse_logical_or()?;
        let Some(op) = self.cursor.op_in(&["..", "..."]) else {
            return Ok(left);
        };
        self.cursor.advance();
        let right = if self.starts_operand() {
            Some(self.parse_logical_or()?)
        } else {
            None
        };
        if let Some(again) = self.cursor.op_in(&["..", "..."]) {
            return Err(self.non_associative(again));
        }
        Ok(self.range(Some(left), op, right))
    }

    fn parse_logical_or(&mut self) -> Result<NodeId, ParseError> {
        self.left_assoc(LOGICAL_OR, Self::parse_logical_and)
    }

    fn parse_logical_and(&mut self) -> Result<NodeId, ParseError> {
        self.left_assoc(LOGICAL_AND, Self::parse_equality)
    }

    fn parse_equality(&mut self) -> Result<NodeId, ParseError> {
        let left = self.parse_comparison()?;
        let Some(op) = self.cursor.op_in(EQUALITY) else {
            return Ok(left);
        };
        self.cursor.advance();
        let right = self.parse_comparison()?;
        if let Some(again) = self.cursor.op_in(EQUALITY) {
            return Err(self.non_associative(again));
        }
        Ok(self.binary(left, op, right))
    }

    fn parse_comparison(&mut self) -> Result<NodeId, ParseError> {
        self.left_assoc(COMPARISON, Self::parse_bitwise_or)
    }

    fn parse_bitwise_or(&mut self) -> Result<NodeId, ParseError> {
        self.left_assoc(BITWISE_OR, Self::parse_bitwise_and)
    }

    fn parse_bitwise_and(&mut self) -> Result<NodeId, ParseError> {
        self.left_assoc(BITWISE_AND, Self::parse_shift)
    }

    fn parse_shift(&mut self) -> Result<NodeId, ParseError> {
        self.left_assoc(SHIFT, Self::parse_additive)
    }

    fn parse_additive(&mut self) -> Result<NodeId, ParseError> {
        self.left_assoc(ADDITIVE, Self::parse_multiplicative)
    }

    fn parse_multiplicative(&mut self) -> Result<NodeId, ParseError> {
        self.left_assoc(MULTIPLICATIVE, Self::parse_unary_minus)
    }

    /// `-x` binds looser than `**`: `-2 ** 2` negates the power.
    fn parse_unary_minus(&mut self) -> Result<NodeId, ParseError> {
        if self.cursor.check_op("-") {
            self.cursor.advance();
            let operand = with_stack(|| self.parse_unary_minus())?;
            return Ok(self.unary("-@", operand));
        }
        self.parse_power()
    }

    fn parse_power(&mut self) -> Result<NodeId, ParseError> {
        let base = self.parse_unary()?;
        if !self.cursor.check_op("**") {
            return Ok(base);
        }
        self.cursor.advance();
        let exponent = with_stack(|| self.parse_unary_minus())?;
        Ok(self.binary(base, "**", exponent))
    }

    fn parse_unary(&mut self) -> Result<NodeId, ParseError> {
        match self.cursor.op() {
            Some(op @ ("!" | "~" | "+")) => {
                self.cursor.advance();
                let operand = with_stack(|| self.parse_unary())?;
                // Unary plus is the `+@` method, as unary minus is `-@`.
                let operator = if op == "+" { "+@" } else { op };
                Ok(self.unary(operator, operand))
            }
            Some("-") => self.parse_unary_minus(),
            _ => self.parse_postfix(),
        }
    }

    fn left_assoc(&mut self, ops: &[&str], next: Level<'src>) -> Result<NodeId, ParseError> {
        let mut left = next(self)?;
        while let Some(op) = self.cursor.op_in(ops) {
            self.cursor.advance();
            let right = next(self)?;
            left = self.binary(left, op, right);
        }
        Ok(left)
    }

    fn binary(&mut self, left: NodeId, operator: &str, right: NodeId) -> NodeId {
        self.alloc(Node::Binary {
            left,
            operator: operator.to_string(),
            right,
        })
    }

    fn unary(&mut self, operator: &str, operand: NodeId) -> NodeId {
        self.alloc(Node::Unary {
            operator: operator.to_string(),
            operand,
        })
    }

    fn range(&mut self, left: Option<NodeId>, op: &str, right: Option<NodeId>) -> NodeId {
        self.alloc(Node::Range {
            left,
            right,
            exclusive: op == "...",
        })
    }

    fn non_associative(&self, operator: &str) -> ParseError {
        let (line, column) = self.position();
        ParseError::NonAssociative {
            line,
            column,
            operator: operator.to_string(),
        }
    }
}
