//! Byte cursor over a sentinel-terminated buffer.
//!
//! End of input is the sentinel (`0x00`) at or past the source length. A
//! NUL before the source length is an interior null, which the scanner
//! reports as an error token instead of stopping.

/// Byte cursor over a sentinel-terminated buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// `Copy`, so a scanner can snapshot it for lookahead.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source + sentinel + padding.
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// `buf[source_len]` and everything after it must be `0x00`.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte at the current position; `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos as usize)
    }

    /// Byte one position ahead.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos as usize + 1)
    }

    /// Byte two positions ahead.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos as usize + 2)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.buf.get(index).copied().unwrap_or(0)
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Consume the current byte if it equals `byte`.
    #[inline]
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.current() == byte && !self.is_eof() {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source text between two byte offsets.
    ///
    /// Offsets come from token boundaries, which the scanner only places on
    /// character boundaries; anything else yields the empty string.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        let end = end.min(self.source_len) as usize;
        let start = (start as usize).min(end);
        let bytes: &'a [u8] = self.buf;
        std::str::from_utf8(&bytes[start..end]).unwrap_or_default()
    }

    /// Source text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds, stopping at end of input.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Width of the UTF-8 character whose leading byte is `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character. Call only before end of input.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.pos = (self.pos + width).min(self.source_len);
    }

    /// Advance to the next `\n` (not consumed) or end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        match memchr::memchr(b'\n', remaining) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len,
        }
    }

    /// Advance past horizontal whitespace: space, tab, CR, VT and FF.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_horizontal_space);
    }
}

/// Whitespace that never ends a statement.
#[inline]
pub(crate) fn is_horizontal_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | 0x0B | 0x0C)
}
