//! Shared data model for the ripcheck oracle.
//!
//! - [`LineIndex`] maps `(line, column)` coordinates to absolute character
//!   offsets.
//! - [`RawToken`] / [`CanonicalToken`] carry lexer output before and after
//!   normalization.
//! - [`SyntaxArena`] holds a parsed snippet as a flat tree addressed by
//!   [`NodeId`].
//! - [`ProductionEvent`] is one completed production, produced in
//!   completion order by [`events`].
//! - [`Label`] is the closed vocabulary the two parsers are compared in.
//!
//! Offsets everywhere in this crate are counted in characters, never bytes.

pub mod ast;
mod event;
mod label;
mod position;
mod token;

pub use ast::{LoopKind, Modifier, Node, NodeId, Program, SyntaxArena};
pub use event::{events, ProductionEvent, Variable};
pub use label::{BinaryLabel, Label, OpAssignLabel, RangeLabel, UnaryLabel};
pub use position::{LineIndex, PositionError};
pub use token::{CanonicalToken, RawToken, TokenEvent};
