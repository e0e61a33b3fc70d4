//! Reader error types.
//!
//! Every error is fatal for the compilation unit: the reader stops at
//! the first malformed construct and reports it. There is no recovery
//! and, by design, no source-location tracking.

use thiserror::Error;

/// Fatal reader errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// End of input before a `)` or `]` closed the open list.
    #[error("encountered unclosed list")]
    UnclosedList,

    /// End of input before a `}` closed an object or function literal.
    #[error("encountered unclosed literal")]
    UnclosedLiteral,

    /// An object-literal key position held something other than a token.
    #[error("object literal key was not a token")]
    BadLiteralKey,

    /// The `name` in `@name{…}` did not lex as a single token
    /// (for example, it contained a dotted-getter separator).
    #[error("object literal parent was not a token")]
    BadLiteralParent,

    /// A `^` function modifier's parameter list was not followed by a
    /// `{…}` body.
    #[error("function modifier found before a construct that is not a function body")]
    BadFunctionForm,

    /// End of input inside a `"…"` string literal.
    #[error("encountered unterminated string")]
    UnterminatedString,

    /// A closing delimiter with nothing open to close, such as a stray
    /// `)` at top level or a `]` closing a `(` list.
    #[error("unexpected delimiter `{found}`")]
    UnexpectedDelimiter {
        /// The delimiter byte that was found.
        found: char,
    },

    /// End of input where a value was required.
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof {
        /// What the reader was looking for.
        expected: &'static str,
    },

    /// A scanned number literal failed to parse. Unreachable for any
    /// input the dispatch table routes to the number scanner; kept so
    /// the conversion stays total.
    #[error("malformed number literal `{text}`")]
    InvalidNumber {
        /// The offending literal text.
        text: String,
    },
}
