//! Byte cursor over a sentinel-terminated buffer.
//!
//! The cursor advances byte-by-byte. EOF is detected when the current
//! byte equals the sentinel (`0x00`) and the position has reached the
//! source length; a null byte before that point is interior data, not
//! EOF. No bounds checking is needed in the common case -- the
//! sentinel guarantees termination of every scanning loop whose
//! predicate rejects `0x00`.

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], which makes speculative lookahead a plain
/// assignment: copy, scan ahead, and either adopt the copy or drop it.
///
/// # Invariant
///
/// `buf[source_len] == 0x00`, and all bytes after it are `0x00`
/// (padding). Guaranteed by [`SourceBuffer`](crate::SourceBuffer)
/// construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position.
    pos: usize,
    /// Length of the source content (excludes sentinel and padding).
    source_len: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    pub(crate) fn new(buf: &'a [u8], source_len: usize) -> Self {
        debug_assert!(source_len < buf.len(), "sentinel must be within bounds");
        debug_assert!(buf[source_len] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// The byte at the current position; `0x00` at EOF (the sentinel).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos]
    }

    /// The byte one position ahead. Safe at any position: the sentinel
    /// and padding guarantee a valid read.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos + 1]
    }

    /// Advance by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// `true` once the cursor has consumed the whole source.
    ///
    /// Distinguishes the sentinel from interior null bytes by also
    /// checking the position against the source length.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Extract a source substring as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the source content and on UTF-8
    /// character boundaries. The reader only slices at delimiter
    /// positions, which are ASCII, so the contract holds for every
    /// call site.
    #[allow(
        unsafe_code,
        reason = "from_utf8_unchecked on a buffer originally validated as &str"
    )]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(end <= self.source_len, "slice end {end} out of source");
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        // SAFETY: the buffer was built from `&str` (valid UTF-8) and the
        // bounds fall on ASCII delimiter positions (char boundaries).
        unsafe { std::str::from_utf8_unchecked(&self.buf[start..end]) }
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` accepts the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false` so the sentinel stops the loop.
    /// True for every byte class the reader scans with (digits,
    /// whitespace, non-delimiters never include `0x00` -- except
    /// interior nulls, which token scanning handles with an explicit
    /// EOF check instead of this method).
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos]) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` or to EOF, whichever comes first.
    ///
    /// Used to skip `;` comment bodies. Scans only within the source
    /// content, never into the padding.
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf[self.pos..self.source_len];
        match memchr::memchr(b'\n', remaining) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source_len,
        }
    }

    /// Advance past ordinary string-literal content to the next `"` or
    /// `\`, returning the byte found (`0` for EOF).
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = &self.buf[self.pos..self.source_len];
        match memchr::memchr2(b'"', b'\\', remaining) {
            Some(offset) => {
                self.pos += offset;
                self.buf[self.pos]
            }
            None => {
                self.pos = self.source_len;
                0
            }
        }
    }

    /// Width in bytes of the UTF-8 character whose leading byte is
    /// `byte`. ASCII, continuation, and invalid bytes report 1.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> usize {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }
}
