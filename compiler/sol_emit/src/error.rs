//! Emitter error types.

use thiserror::Error;

/// Fatal emitter errors. Either one aborts emission; no partial
/// output is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EmitError {
    /// The tree contains a value with no encoding. With the value
    /// universe a closed sum, the only way to get here is a number
    /// with no (significand, exponent) form: NaN or an infinity.
    #[error("unsupported value: {reason}")]
    UnsupportedValue {
        /// Why the value cannot be encoded.
        reason: &'static str,
    },

    /// A length or count exceeds the band-4 ceiling of 2^60 - 1.
    #[error("length {length} exceeds the maximum encodable length")]
    LengthOverflow {
        /// The offending length.
        length: u64,
    },
}
