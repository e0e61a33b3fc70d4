#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests can panic"
)]

use super::{decode_length, write_length, MAX_LENGTH};
use crate::error::EmitError;
use proptest::prelude::*;

fn encode(length: u64) -> Vec<u8> {
    let mut out = Vec::new();
    write_length(&mut out, length).expect("length should encode");
    out
}

// === Band selection ===

#[test]
fn band_1_covers_zero_to_fifteen() {
    assert_eq!(encode(0), [0x10]);
    assert_eq!(encode(6), [0x16]);
    assert_eq!(encode(15), [0x1F]);
}

#[test]
fn band_2_starts_at_sixteen() {
    assert_eq!(encode(16), [0x20, 0x10]);
    assert_eq!(encode(0xABC), [0x2A, 0xBC]);
    assert_eq!(encode(0xFFF), [0x2F, 0xFF]);
}

#[test]
fn band_3_starts_after_twelve_bits() {
    assert_eq!(encode(0x1000), [0x30, 0x00, 0x10, 0x00]);
    assert_eq!(encode(0xFFF_FFFF), [0x3F, 0xFF, 0xFF, 0xFF]);
}

#[test]
fn band_4_starts_after_twenty_eight_bits() {
    assert_eq!(
        encode(0x1000_0000),
        [0x40, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00]
    );
    assert_eq!(
        encode(MAX_LENGTH),
        [0x4F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
    );
}

#[test]
fn beyond_band_4_overflows() {
    let mut out = Vec::new();
    assert_eq!(
        write_length(&mut out, MAX_LENGTH + 1),
        Err(EmitError::LengthOverflow {
            length: MAX_LENGTH + 1
        })
    );
    assert_eq!(
        write_length(&mut out, u64::MAX),
        Err(EmitError::LengthOverflow { length: u64::MAX })
    );
}

// === Decoding ===

#[test]
fn decode_reports_width() {
    assert_eq!(decode_length(&[0x16]), Some((6, 1)));
    assert_eq!(decode_length(&[0x2A, 0xBC]), Some((0xABC, 2)));
    assert_eq!(decode_length(&[0x30, 0x00, 0x10, 0x00]), Some((0x1000, 4)));
}

#[test]
fn decode_ignores_trailing_bytes() {
    assert_eq!(decode_length(&[0x12, 0xAA, 0xBB]), Some((2, 1)));
}

#[test]
fn decode_rejects_truncation_and_bad_tags() {
    assert_eq!(decode_length(&[]), None);
    assert_eq!(decode_length(&[0x20]), None);
    assert_eq!(decode_length(&[0x30, 0x00]), None);
    assert_eq!(decode_length(&[0x00]), None);
    assert_eq!(decode_length(&[0x5F]), None);
}

// === Properties ===

proptest! {
    /// Every encodable length picks the smallest band that fits and
    /// survives the round trip.
    #[test]
    fn smallest_band_and_round_trip(length in 0..=MAX_LENGTH) {
        let bytes = encode(length);
        let expected_width = match length {
            0..=0xF => 1,
            0x10..=0xFFF => 2,
            0x1000..=0xFFF_FFFF => 4,
            _ => 8,
        };
        prop_assert_eq!(bytes.len(), expected_width);
        prop_assert_eq!(decode_length(&bytes), Some((length, expected_width)));
    }
}
