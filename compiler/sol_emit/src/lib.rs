//! Binary emitter for the Sol language.
//!
//! Encodes a parsed value tree into the compact tagged `SOLBIN`
//! artifact consumed by the Sol runtime:
//!
//! ```text
//! "SOLBIN"                      // 6-byte magic
//! <encoded top-level value> *   // tagged, length-prefixed
//! 0x00                          // end-of-stream
//! ```
//!
//! All multibyte integers are big-endian regardless of the host.
//! Lengths and counts use the 4-band variable-width encoding of
//! [`decode_length`]'s module; numbers use the sign/mantissa/exponent
//! split of [`decode_number`]'s module. For a given tree the output
//! is byte-exact across runs and platforms.
//!
//! # Usage
//!
//! ```
//! let program = sol_parse::parse("42")?;
//! let binary = sol_emit::emit(&program)?;
//! assert!(binary.starts_with(sol_emit::MAGIC));
//! assert_eq!(binary.last(), Some(&0x00));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod length;
mod number;
mod writer;

pub use error::EmitError;
pub use length::{decode_length, MAX_LENGTH};
pub use number::decode_number;
pub use writer::{emit, MAGIC};
