//! Line/column to absolute offset mapping.
//!
//! The reference lexer reports positions as a 1-based line and a 0-based
//! column, while canonical tokens carry `[start, end)` offsets into the
//! whole source. Both sides are measured in characters: a byte-based line
//! table would shift every offset after the first non-ASCII line.

use memchr::memchr_iter;

/// A position that does not exist in the indexed source.
///
/// Always a defect in whatever produced the coordinate; never clamped.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("line {line} is outside 1..={lines}")]
    LineOutOfRange { line: usize, lines: usize },
    #[error("column {column} is past the end of line {line} ({len} characters)")]
    ColumnOutOfRange {
        line: usize,
        column: usize,
        len: usize,
    },
}

/// Character offset at which each line of a source begins.
///
/// Entry 0 is always 0. Entries are strictly increasing and
/// `starts[i + 1] - starts[i]` is the character length of line `i`
/// including its `\n`. A source ending in `\n` has a final, empty line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    starts: Vec<usize>,
    total: usize,
}

impl LineIndex {
    /// Build the index for `source`.
    pub fn new(source: &str) -> Self {
        let mut starts = vec![0];
        let mut chars = 0;
        let mut prev = 0;
        for newline in memchr_iter(b'\n', source.as_bytes()) {
            // `\n` is ASCII, so `newline + 1` is always a char boundary.
            chars += source[prev..=newline].chars().count();
            starts.push(chars);
            prev = newline + 1;
        }
        let total = chars + source[prev..].chars().count();
        LineIndex { starts, total }
    }

    /// Number of lines, counting a trailing empty line.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Total length of the source in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.total
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Offset of the first character of 1-based `line`.
    pub fn line_start(&self, line: usize) -> Result<usize, PositionError> {
        line.checked_sub(1)
            .and_then(|i| self.starts.get(i).copied())
            .ok_or(PositionError::LineOutOfRange {
                line,
                lines: self.line_count(),
            })
    }

    /// Character length of 1-based `line`, excluding its terminator.
    pub fn line_len(&self, line: usize) -> Result<usize, PositionError> {
        let start = self.line_start(line)?;
        Ok(match self.starts.get(line) {
            Some(&next) => next - start - 1,
            None => self.total - start,
        })
    }

    /// Map a token at `(line, column)` with text `text` to `[start, end)`.
    ///
    /// `column` may equal the line length so tokens sitting on the line
    /// terminator are addressable.
    pub fn span(
        &self,
        line: usize,
        column: usize,
        text: &str,
    ) -> Result<(usize, usize), PositionError> {
        let start = self.line_start(line)?;
        let len = self.line_len(line)?;
        if column > len {
            return Err(PositionError::ColumnOutOfRange { line, column, len });
        }
        let start = start + column;
        Ok((start, start + text.chars().count()))
    }
}
