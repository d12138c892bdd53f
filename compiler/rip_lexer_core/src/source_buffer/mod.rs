//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the scanner detects end of input without bounds checks of its own.
//! The total size is rounded up to the next 64-byte boundary, which also
//! leaves zero padding for `peek()` and `peek2()` near the end.

use crate::Cursor;

/// Cache line size in bytes, used for buffer padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    source_len: u32,
    /// Byte offsets of NUL bytes inside the source content.
    interior_nulls: Vec<u32>,
}

impl SourceBuffer {
    /// Copy `source` into a padded buffer with a trailing sentinel.
    ///
    /// Sources longer than `u32::MAX` bytes saturate `len()`; fixtures are
    /// single lines, so this never matters in practice.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        let interior_nulls = memchr::memchr_iter(0, source_bytes)
            .filter_map(|pos| u32::try_from(pos).ok())
            .collect();

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
            interior_nulls,
        }
    }

    /// Source bytes, without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// The full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// A [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    pub fn interior_nulls(&self) -> &[u32] {
        &self.interior_nulls
    }
}
