//! Variable-width length encoding.
//!
//! Lengths and counts use a 4-band big-endian encoding. The top four
//! bits of the first byte carry the band tag `1..=4`; the remaining
//! bits carry the value. Total widths are 1, 2, 4 and 8 bytes, holding
//! values up to 2^4 - 1, 2^12 - 1, 2^28 - 1 and 2^60 - 1. The emitter
//! always picks the smallest band that fits; decoders dispatch on the
//! first nibble.

use crate::error::EmitError;

/// Largest encodable length: the band-4 payload is 60 bits.
pub const MAX_LENGTH: u64 = (1 << 60) - 1;

const BAND_1_MAX: u64 = 0xF;
const BAND_2_MAX: u64 = 0xFFF;
const BAND_3_MAX: u64 = 0xFFF_FFFF;

/// Append the banded encoding of `length` to `out`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "each narrowing is guarded by the band range check above it"
)]
pub(crate) fn write_length(out: &mut Vec<u8>, length: u64) -> Result<(), EmitError> {
    if length <= BAND_1_MAX {
        out.push(0x10 | length as u8);
    } else if length <= BAND_2_MAX {
        out.extend_from_slice(&(0x2000 | length as u16).to_be_bytes());
    } else if length <= BAND_3_MAX {
        out.extend_from_slice(&(0x3000_0000 | length as u32).to_be_bytes());
    } else if length <= MAX_LENGTH {
        out.extend_from_slice(&(0x4000_0000_0000_0000 | length).to_be_bytes());
    } else {
        return Err(EmitError::LengthOverflow { length });
    }
    Ok(())
}

/// Decode a banded length from the front of `bytes`.
///
/// Returns the value and the number of bytes consumed, or `None` when
/// the input is truncated or the band tag is not `1..=4`.
pub fn decode_length(bytes: &[u8]) -> Option<(u64, usize)> {
    let first = *bytes.first()?;
    match first >> 4 {
        1 => Some((u64::from(first & 0x0F), 1)),
        2 => {
            let word: [u8; 2] = bytes.get(..2)?.try_into().ok()?;
            Some((u64::from(u16::from_be_bytes(word)) & BAND_2_MAX, 2))
        }
        3 => {
            let word: [u8; 4] = bytes.get(..4)?.try_into().ok()?;
            Some((u64::from(u32::from_be_bytes(word)) & BAND_3_MAX, 4))
        }
        4 => {
            let word: [u8; 8] = bytes.get(..8)?.try_into().ok()?;
            Some((u64::from_be_bytes(word) & MAX_LENGTH, 8))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests;
