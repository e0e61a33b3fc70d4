#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests can panic"
)]

use super::{decode_number, encode_number, write_number_payload, NumberPayload};
use proptest::prelude::*;

fn encode_bytes(value: f64) -> Vec<u8> {
    let payload = encode_number(value).expect("finite values encode");
    let mut out = Vec::new();
    write_number_payload(&mut out, payload).expect("payload writes");
    out
}

fn round_trip(value: f64) -> f64 {
    let bytes = encode_bytes(value);
    let (decoded, width) = decode_number(&bytes).expect("payload decodes");
    assert_eq!(width, bytes.len());
    decoded
}

// === Field-level expectations ===

#[test]
fn forty_two_splits_as_documented() {
    // 42 = 0.65625 * 2^6; 0.65625 * 2^53 = 0x0015_0000_0000_0000.
    assert_eq!(
        encode_number(42.0),
        Some(NumberPayload {
            signs: 0x03,
            mantissa: 0x0015_0000_0000_0000,
            exponent: 6,
        })
    );
}

#[test]
fn forty_two_payload_bytes() {
    assert_eq!(
        encode_bytes(42.0),
        [0x03, 0x00, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x16]
    );
}

#[test]
fn one_has_unit_exponent() {
    assert_eq!(
        encode_number(1.0),
        Some(NumberPayload {
            signs: 0x03,
            mantissa: 1 << 52,
            exponent: 1,
        })
    );
}

#[test]
fn sign_bits_cover_all_four_quadrants() {
    // value >= 0, exponent >= 0
    assert_eq!(encode_number(2.0).map(|p| p.signs), Some(0x03));
    // value < 0, exponent >= 0
    assert_eq!(encode_number(-2.0).map(|p| p.signs), Some(0x01));
    // value >= 0, exponent < 0
    assert_eq!(encode_number(0.25).map(|p| p.signs), Some(0x02));
    // value < 0, exponent < 0
    assert_eq!(encode_number(-0.25).map(|p| p.signs), Some(0x00));
}

#[test]
fn zero_encodes_all_zero_fields() {
    assert_eq!(
        encode_number(0.0),
        Some(NumberPayload {
            signs: 0x03,
            mantissa: 0,
            exponent: 0,
        })
    );
}

#[test]
fn negative_zero_keeps_its_sign() {
    assert_eq!(encode_number(-0.0).map(|p| p.signs), Some(0x01));
    assert!(round_trip(-0.0).is_sign_negative());
}

#[test]
fn non_finite_values_are_rejected() {
    assert_eq!(encode_number(f64::NAN), None);
    assert_eq!(encode_number(f64::INFINITY), None);
    assert_eq!(encode_number(f64::NEG_INFINITY), None);
}

// === Round trips ===

#[test]
fn round_trips_simple_values() {
    for value in [
        0.0, 1.0, -1.0, 42.0, -42.0, 0.5, -0.5, 3.25, 1e100, -1e-100, 0.1,
    ] {
        assert_eq!(round_trip(value).to_bits(), value.to_bits(), "{value}");
    }
}

#[test]
fn round_trips_extremes() {
    for value in [
        f64::MAX,
        f64::MIN,
        f64::MIN_POSITIVE,
        -f64::MIN_POSITIVE,
        5e-324,
        -5e-324,
    ] {
        assert_eq!(round_trip(value).to_bits(), value.to_bits(), "{value}");
    }
}

#[test]
fn decode_rejects_truncated_input() {
    assert_eq!(decode_number(&[]), None);
    assert_eq!(decode_number(&[0x03, 0x00, 0x15]), None);
    // Missing the exponent length byte entirely.
    assert_eq!(
        decode_number(&[0x03, 0x00, 0x15, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
        None
    );
}

// === Properties ===

proptest! {
    /// Every finite double survives the wire round trip bit-exactly.
    #[test]
    fn round_trip_is_bit_exact(
        value in prop::num::f64::POSITIVE
            | prop::num::f64::NEGATIVE
            | prop::num::f64::NORMAL
            | prop::num::f64::SUBNORMAL
            | prop::num::f64::ZERO
    ) {
        prop_assert_eq!(round_trip(value).to_bits(), value.to_bits());
    }
}
