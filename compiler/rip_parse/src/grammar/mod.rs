//! Grammar productions.
//!
//! - `stmt.rs`: programs, statement lists, modifiers, `begin` and loops
//! - `expr/`: the operator precedence chain, primaries and postfix forms

mod expr;
mod stmt;
