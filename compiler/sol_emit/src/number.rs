//! Number payload encoding.
//!
//! A finite double `x` is split as `x = ±f · 2^e` with `|f| ∈ [0.5, 1)`
//! and stored as three fields:
//!
//! - one sign byte: bit 0 set when `e >= 0`, bit 1 set when the value
//!   itself is non-negative;
//! - an eight-byte big-endian word holding `|f| · 2^53`, an exact
//!   integer for every finite double, since a double carries 53
//!   significand bits;
//! - `|e|` as a banded length.
//!
//! The decomposition and the reassembly are done on the bit pattern,
//! so the round trip is bit-exact (including `-0.0`) and independent
//! of host endianness. NaN and the infinities have no such form and
//! are rejected by the caller.

use crate::length::{decode_length, write_length};
use crate::EmitError;

/// Significand bits of a double, including the implicit leading bit.
const MANTISSA_DIGITS: u32 = 53;

/// Exponent-field mask of an IEEE-754 double.
const EXP_MASK: u64 = 0x7FF0_0000_0000_0000;

/// `2.0^e` for `e` in the normal range `-1022..=1023`.
#[inline]
fn pow2(e: i32) -> f64 {
    debug_assert!((-1022..=1023).contains(&e));
    f64::from_bits(u64::from(1023u32.wrapping_add_signed(e)) << 52)
}

/// Split `x` into `(fraction, exponent)` with `x = fraction · 2^exponent`
/// and `|fraction| ∈ [0.5, 1)` for non-zero `x`; zero yields `(x, 0)`.
fn frexp(x: f64) -> (f64, i32) {
    let bits = x.to_bits();
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the exponent field is 11 bits"
    )]
    let exp_field = ((bits >> 52) & 0x7FF) as i32;
    if exp_field == 0 {
        if x == 0.0 {
            return (x, 0);
        }
        // Subnormal: scale into the normal range, then adjust.
        let (fraction, exponent) = frexp(x * pow2(64));
        return (fraction, exponent - 64);
    }
    let fraction = f64::from_bits((bits & !EXP_MASK) | (0x3FE << 52));
    (fraction, exp_field - 1022)
}

/// Multiply `x` by `2^n` with a single final rounding, staying in
/// range through intermediate steps (the scalbn construction).
fn scalbn(x: f64, mut n: i32) -> f64 {
    let mut y = x;
    if n > 1023 {
        y *= pow2(1023);
        n -= 1023;
        if n > 1023 {
            y *= pow2(1023);
            n = (n - 1023).min(1023);
        }
    } else if n < -1022 {
        // Scale by 2^-969 so the intermediate stays normal and exact.
        y *= pow2(-1022) * pow2(53);
        n += 1022 - 53;
        if n < -1022 {
            y *= pow2(-1022) * pow2(53);
            n = (n + 1022 - 53).max(-1022);
        }
    }
    y * pow2(n)
}

/// The three wire fields of a number payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NumberPayload {
    /// Bit 0: exponent is non-negative. Bit 1: value is non-negative.
    pub signs: u8,
    /// `|fraction| · 2^53`.
    pub mantissa: u64,
    /// `|exponent|`.
    pub exponent: u64,
}

/// Encode a finite double; `None` for NaN or the infinities.
pub(crate) fn encode_number(value: f64) -> Option<NumberPayload> {
    if !value.is_finite() {
        return None;
    }
    let (fraction, exponent) = frexp(value);
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "|fraction| * 2^53 is an exact non-negative integer below 2^53"
    )]
    let mantissa = (fraction.abs() * exp2_53()) as u64;
    let signs = u8::from(exponent >= 0) | (u8::from(!value.is_sign_negative()) << 1);
    Some(NumberPayload {
        signs,
        mantissa,
        exponent: u64::from(exponent.unsigned_abs()),
    })
}

/// `2^53` as a double (exact).
#[inline]
fn exp2_53() -> f64 {
    f64::from_bits(u64::from(1023 + MANTISSA_DIGITS) << 52)
}

/// Append the full number payload (sign byte, mantissa word, banded
/// exponent) to `out`.
pub(crate) fn write_number_payload(
    out: &mut Vec<u8>,
    payload: NumberPayload,
) -> Result<(), EmitError> {
    out.push(payload.signs);
    out.extend_from_slice(&payload.mantissa.to_be_bytes());
    write_length(out, payload.exponent)
}

/// Decode a number payload from the front of `bytes`.
///
/// Returns the value and the number of bytes consumed, or `None` when
/// the input is truncated or the exponent band is malformed.
pub fn decode_number(bytes: &[u8]) -> Option<(f64, usize)> {
    let signs = *bytes.first()?;
    let word: [u8; 8] = bytes.get(1..9)?.try_into().ok()?;
    let mantissa = u64::from_be_bytes(word);
    let (abs_exponent, width) = decode_length(bytes.get(9..)?)?;

    let abs_exponent = i32::try_from(abs_exponent).ok()?;
    let exponent = if signs & 0x01 != 0 {
        abs_exponent
    } else {
        -abs_exponent
    };

    #[allow(
        clippy::cast_precision_loss,
        reason = "the mantissa word is at most 2^53, exactly representable"
    )]
    let fraction = mantissa as f64 / exp2_53();
    let magnitude = scalbn(fraction, exponent);
    let value = if signs & 0x02 != 0 {
        magnitude
    } else {
        -magnitude
    };
    Some((value, 9 + width))
}

#[cfg(test)]
mod tests;
