//! String escape sequences.
//!
//! Recognised escapes: `\b`, `\t`, `\n`, `\f`, `\r`, `\"`, `\\`.
//! Anything else is not an error: the reader warns and the escaped
//! character comes through literally (`\q` yields `q`).

/// Resolve a recognised escape byte to its replacement character.
///
/// Returns `None` for unrecognised escapes; the caller falls through
/// to the literal character.
#[inline]
pub(crate) fn resolve_escape(byte: u8) -> Option<char> {
    match byte {
        b'b' => Some('\u{8}'),
        b't' => Some('\t'),
        b'n' => Some('\n'),
        b'f' => Some('\u{c}'),
        b'r' => Some('\r'),
        b'"' => Some('"'),
        b'\\' => Some('\\'),
        _ => None,
    }
}
