//! Dotted-getter expansion.
//!
//! After a token is scanned, any `.` or `@` inside it splits it into a
//! chain of property accesses: `a.b` becomes `(a get :b)` and `a@b`
//! becomes `(a @get :b)`, where each chain link is an object-mode list
//! marked implicitly frozen. The segmentation follows the pattern
//! `([.@]? [^.@]+ [.@]*)+`:
//!
//! - a segment ending in a separator continues the chain, contributing
//!   everything before its *last* byte as token text (so `a..b` chains
//!   through the token `a.`);
//! - a leading separator belongs to the segment's token text (`.foo`
//!   and `@foo` stay plain tokens when nothing follows them);
//! - a terminal segment without a trailing separator becomes the
//!   chain's frozen argument.
//!
//! A token with no separator at all -- or nothing but separators --
//! passes through unchanged.

use sol_ir::{List, Value};

#[inline]
fn is_separator(byte: u8) -> bool {
    byte == b'.' || byte == b'@'
}

/// Start a new chain link holding `head`, an implicitly-frozen
/// object-mode list ending in the getter token for `separator`.
fn chain_link(head: Value, separator: u8) -> List {
    let mut link = List::new(true);
    link.mark_implicitly_frozen();
    link.push(head);
    link.push(Value::token(if separator == b'.' { "get" } else { "@get" }));
    link
}

/// Expand a raw token into a value: either the token itself or a
/// nested getter chain.
pub(crate) fn expand(raw: &str) -> Value {
    if !raw.bytes().any(is_separator) {
        return Value::Token(raw.to_owned());
    }

    let bytes = raw.as_bytes();
    let mut pos = 0;
    let mut chain: Option<List> = None;

    while pos < bytes.len() {
        let segment_start = pos;
        // Optional leading separator, kept as part of the token text.
        if is_separator(bytes[pos]) {
            pos += 1;
        }
        // The non-separator run. An empty run means the rest of the
        // token is separators only: no further segment matches.
        let run_start = pos;
        while pos < bytes.len() && !is_separator(bytes[pos]) {
            pos += 1;
        }
        if pos == run_start {
            break;
        }
        // Trailing separator run; only the last byte acts as the
        // chain separator.
        while pos < bytes.len() && is_separator(bytes[pos]) {
            pos += 1;
        }
        let segment = &raw[segment_start..pos];

        if is_separator(bytes[pos - 1]) {
            let text = &segment[..segment.len() - 1];
            let head = match chain.take() {
                None => Value::token(text),
                Some(mut prev) => {
                    prev.push(Value::frozen(Value::token(text)));
                    Value::List(prev)
                }
            };
            chain = Some(chain_link(head, bytes[pos - 1]));
        } else {
            return match chain.take() {
                None => Value::Token(segment.to_owned()),
                Some(mut prev) => {
                    prev.push(Value::frozen(Value::token(segment)));
                    Value::List(prev)
                }
            };
        }
    }

    match chain {
        Some(list) => Value::List(list),
        // Nothing but separators: pass the token through.
        None => Value::Token(raw.to_owned()),
    }
}
