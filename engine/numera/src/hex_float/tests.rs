use numera_format::NumberFormat;
use pretty_assertions::assert_eq;

use crate::buffer::{F32_HEX_CAPACITY, F64_HEX_CAPACITY};
use crate::status::Reject;
use crate::styles::NumberStyles;

use super::{hex_buffer_to_float, try_scan_hex_float};

fn parse64(text: &str) -> Result<f64, Reject> {
    parse64_styled(text, NumberStyles::HEX_FLOAT)
}

fn parse64_styled(text: &str, styles: NumberStyles) -> Result<f64, Reject> {
    let number = try_scan_hex_float::<F64_HEX_CAPACITY>(text, styles, &NumberFormat::INVARIANT)?;
    Ok(hex_buffer_to_float(&number))
}

fn parse32(text: &str) -> Result<f32, Reject> {
    let number = try_scan_hex_float::<F32_HEX_CAPACITY>(
        text,
        NumberStyles::HEX_FLOAT,
        &NumberFormat::INVARIANT,
    )?;
    Ok(hex_buffer_to_float(&number))
}

// === Grammar ===

#[test]
fn prefix_is_optional() {
    assert_eq!(parse64("0x1.8p3"), Ok(12.0));
    assert_eq!(parse64("1.8p3"), Ok(12.0));
    assert_eq!(parse64("0X1.8P3"), Ok(12.0));
}

#[test]
fn point_and_exponent_are_optional() {
    assert_eq!(parse64("0xFF"), Ok(255.0));
    assert_eq!(parse64("0x10p0"), Ok(16.0));
    assert_eq!(parse64(".8p1"), Ok(1.0));
    assert_eq!(parse64("0x.4"), Ok(0.25));
}

#[test]
fn sign_needs_no_flag() {
    assert_eq!(parse64("-0x1p2"), Ok(-4.0));
    assert_eq!(parse64("+0x1p2"), Ok(4.0));
}

#[test]
fn parentheses_and_trailing_sign() {
    assert_eq!(parse64("(1p2)"), Ok(-4.0));
    assert_eq!(parse64("  1p2  -"), Ok(-4.0));
    assert!(matches!(parse64("(1p2"), Err(Reject::NoNumber)));
}

#[test]
fn exponent_without_digits_rolls_back() {
    assert!(matches!(parse64("1p"), Err(Reject::Trailing { consumed: 1 })));
    assert!(matches!(parse64("0x1p+"), Err(Reject::Trailing { consumed: 3 })));
}

#[test]
fn exponent_needs_its_flag() {
    let styles = NumberStyles::HEX_FLOAT & !NumberStyles::ALLOW_EXPONENT;
    assert_eq!(parse64_styled("0x1.8", styles), Ok(1.5));
    assert!(parse64_styled("1p2", styles).is_err());
}

#[test]
fn not_a_number() {
    assert!(matches!(parse64(""), Err(Reject::NoNumber)));
    assert!(matches!(parse64("p3"), Err(Reject::NoNumber)));
    assert!(matches!(parse64(".p3"), Err(Reject::NoNumber)));
    // A lone "0x" is a zero followed by junk, not a prefix.
    assert!(matches!(parse64("0x"), Err(Reject::Trailing { consumed: 1 })));
}

#[test]
fn trailing_nuls_are_tolerated() {
    assert_eq!(parse64("0x1p2\0\0"), Ok(4.0));
    assert!(parse64("0x1p2\0x").is_err());
}

// === Values ===

#[test]
fn zero_keeps_its_sign() {
    assert_eq!(parse64("0x0.0p0"), Ok(0.0));
    let value = parse64("-0x0p0").unwrap();
    assert_eq!(value, 0.0);
    assert!(value.is_sign_negative());
}

#[test]
fn leading_zeros_are_not_significant() {
    assert_eq!(parse64("0x0001.8p3"), Ok(12.0));
    assert_eq!(parse64("0x0.08p0"), Ok(0.03125));
}

#[test]
fn extreme_exponents() {
    assert_eq!(parse64("0x1p-1022"), Ok(f64::MIN_POSITIVE));
    assert_eq!(parse64("-0x1.0p-1022"), Ok(-f64::MIN_POSITIVE));
    assert_eq!(parse64("0x1p-1074"), Ok(5e-324));
    assert_eq!(parse64("0x1p1024"), Ok(f64::INFINITY));
    assert_eq!(parse32("0x1p-149"), Ok(f32::from_bits(1)));
    assert_eq!(parse32("0x1p128"), Ok(f32::INFINITY));
}

#[test]
fn saturated_exponents() {
    assert_eq!(
        parse64("1p99999999999999999999999"),
        Ok(f64::INFINITY)
    );
    assert_eq!(parse64("1p-99999999999999999999999"), Ok(0.0));
}

#[test]
fn rounding_is_nearest_even_with_sticky() {
    // 1 + 2^-53 is a tie; even wins.
    assert_eq!(parse64("0x1.00000000000008p0"), Ok(1.0));
    // Any dropped non-zero digit breaks the tie upward.
    assert_eq!(
        parse64("0x1.00000000000008001p0"),
        Ok(1.0 + f64::EPSILON)
    );
    // Just above the tie within the stored digits.
    assert_eq!(parse64("0x1.00000000000009p0"), Ok(1.0 + f64::EPSILON));
}

#[test]
fn f32_rounds_at_its_own_precision() {
    // 1 + 2^-24 ties to 1.0 for f32.
    assert_eq!(parse32("0x1.000001p0"), Ok(1.0));
    assert_eq!(parse32("0x1.000002p0"), Ok(1.0 + f32::EPSILON));
    // The dropped eighth digit acts as a sticky bit.
    assert_eq!(parse32("0x1.0000011p0"), Ok(1.0 + f32::EPSILON));
}
