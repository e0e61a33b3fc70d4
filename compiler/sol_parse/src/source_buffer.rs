//! Sentinel-terminated source buffer.
//!
//! The reader scans bytes, and almost every scanning loop wants to stop
//! at end of input. Appending a `0x00` sentinel after the source lets
//! the cursor detect EOF by value instead of bounds-checking every
//! read: no Sol delimiter class contains the null byte, so every loop
//! terminates at the sentinel naturally.

use crate::Cursor;

/// Buffer size granularity. Rounding up to a 64-byte boundary keeps the
/// tail zero-filled so one-byte lookahead near the end reads padding,
/// never out of bounds.
const CACHE_LINE: usize = 64;

/// Owned source bytes followed by a `0x00` sentinel and zero padding.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^
///  0                source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the source content (excludes sentinel and padding).
    source_len: usize,
}

impl SourceBuffer {
    /// Copy `source` into a sentinel-terminated buffer.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to the next 64-byte boundary (minimum: source + sentinel).
        let padded_len = (source_len + CACHE_LINE) & !(CACHE_LINE - 1);

        // The sentinel at buf[source_len] and the padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        Self { buf, source_len }
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> usize {
        self.source_len
    }

    /// `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_follows_source() {
        let buf = SourceBuffer::new("abc");
        assert_eq!(buf.len(), 3);
        let cursor = buf.cursor();
        assert_eq!(cursor.current(), b'a');
    }

    #[test]
    fn empty_source_is_all_sentinel() {
        let buf = SourceBuffer::new("");
        assert!(buf.is_empty());
        assert!(buf.cursor().is_eof());
    }

    #[test]
    fn exact_multiple_of_granularity_still_has_sentinel() {
        let source = "x".repeat(64);
        let buf = SourceBuffer::new(&source);
        assert_eq!(buf.len(), 64);
        let mut cursor = buf.cursor();
        cursor.advance_n(64);
        assert!(cursor.is_eof());
    }
}
