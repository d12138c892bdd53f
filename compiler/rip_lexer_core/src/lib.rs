//! Low-level scanner for the ripcheck subject.
//!
//! Produces `(RawTag, len)` pairs from a sentinel-terminated buffer. The
//! scanner is context-free: newline significance and signed integers are
//! decided by the consumer (`rip_subject`), which knows what came before.
//!
//! This crate deliberately shares nothing with the reference lexer
//! (`rip_lexer`); the two are compared against each other.

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::RawScanner;
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
