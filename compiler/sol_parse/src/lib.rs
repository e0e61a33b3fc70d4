//! Reader for the Sol language.
//!
//! Turns source text into a tree of [`sol_ir::Value`]s. The surface
//! syntax is s-expressions with a handful of context-sensitive sugars:
//!
//! - `(…)` reads as a frozen (literal) list, `[…]` as an evaluable one
//! - `^[…]`, `^(…){…}` and `^{…}` are function shorthand
//! - `@[…]` switches a list to object-mode dispatch; `@{…}` and
//!   `@name{…}` open object literals
//! - `:` freezes the next value
//! - `.` and `@` inside tokens expand to `get`/`@get` chains
//!
//! # Usage
//!
//! ```
//! let program = sol_parse::parse("(print \"hi\")")?;
//! assert_eq!(program.len(), 1);
//! # Ok::<(), sol_parse::ParseError>(())
//! ```
//!
//! The reader consumes the whole input and fails fatally on the first
//! malformed construct; there is no error recovery and no
//! source-location tracking. Whitespace and `;` comments between
//! values never influence the result.

mod cursor;
mod error;
mod escape;
mod getter;
mod reader;
mod source_buffer;

pub use cursor::Cursor;
pub use error::ParseError;
pub use source_buffer::SourceBuffer;

use sol_ir::List;
use tracing::debug;

/// Parse a complete source text into the top-level value list.
///
/// The returned list owns its contents and always has
/// `object_mode == false` and a zero freeze count; its children are
/// the top-level expressions in source order.
pub fn parse(source: &str) -> Result<List, ParseError> {
    let buffer = SourceBuffer::new(source);
    let mut reader = reader::Reader::new(buffer.cursor());
    let program = reader.read_program()?;
    debug!(
        bytes = buffer.len(),
        values = program.len(),
        "parsed source"
    );
    Ok(program)
}
