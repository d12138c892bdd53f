//! Callbacks fired as each production completes.

use rip_lexer_core::RawTag;

use crate::SubjectError;

/// Receives one call per completed production, in completion order.
///
/// Hooks that carry an operator tag may reject it; everything else is
/// infallible.
pub trait Visitor {
    fn integer(&mut self, text: &str);

    fn global_variable(&mut self, name: &str);

    fn back_reference(&mut self, text: &str);

    fn nth_reference(&mut self, text: &str);

    /// `true`, `false`, `nil` or `self`.
    fn keyword_literal(&mut self, keyword: RawTag) -> Result<(), SubjectError>;

    fn vcall(&mut self, name: &str);

    fn fcall(&mut self, name: &str, args: usize);

    fn array(&mut self, len: usize);

    /// `recv[expr]` (`has_index`) or `recv[]`.
    fn index(&mut self, has_index: bool);

    fn assign(&mut self, operator: RawTag) -> Result<(), SubjectError>;

    fn binary(&mut self, operator: RawTag) -> Result<(), SubjectError>;

    /// Prefix operators, `not` included.
    fn unary(&mut self, operator: RawTag) -> Result<(), SubjectError>;

    fn range(&mut self, operator: RawTag, has_left: bool) -> Result<(), SubjectError>;

    fn ternary(&mut self);

    fn defined(&mut self);

    /// Statement modifier; `rescue` included.
    fn modifier(&mut self, keyword: RawTag) -> Result<(), SubjectError>;

    fn loop_block(&mut self, keyword: RawTag) -> Result<(), SubjectError>;

    fn begin_block(&mut self, has_ensure: bool);

    fn group(&mut self) {}
}
