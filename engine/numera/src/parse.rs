//! Public entry points: one `try_parse_*`/`parse_*` pair per target type.
//!
//! Each call validates the style set once, routes to the cheapest scanner
//! that covers it, converts, and classifies the outcome exactly once. The
//! `try` surface never panics and collapses every failure into a
//! [`ParsingStatus`] (returning `0`/`0.0` alongside it); the throwing
//! surface keeps the failure detail in a [`ParseError`].
//!
//! Routing, integer targets: a hex style set goes to the hex fast path
//! (signed targets reinterpret the unsigned result in two's complement);
//! a plain-integer style set under invariant signs goes to the decimal
//! fast path; everything else runs the general scanner and a converter.
//! Float targets run the hex-float pipeline under a hex style set and the
//! decimal pipeline otherwise; a failed float scan gets one more chance
//! against the format's Infinity/NaN symbols before it is reported.

use numera_format::NumberFormat;

use crate::buffer::{
    NumberKind, F32_CAPACITY, F32_HEX_CAPACITY, F64_CAPACITY, F64_HEX_CAPACITY, I32_CAPACITY,
    I64_CAPACITY, U32_CAPACITY, U64_CAPACITY,
};
use crate::convert::{
    number_to_float, number_to_i32, number_to_i64, number_to_u32, number_to_u64,
};
use crate::error::{ParseError, TargetType};
use crate::fast_path::{
    parse_i32_integer_style, parse_i64_integer_style, parse_u32_hex_style,
    parse_u32_integer_style, parse_u64_hex_style, parse_u64_integer_style,
};
use crate::hex_float::{hex_buffer_to_float, try_scan_hex_float};
use crate::raw_float::RawFloat;
use crate::scan::try_scan_number;
use crate::status::{ParsingStatus, Reject};
use crate::styles::NumberStyles;

fn classify(reject: Reject, target: TargetType) -> ParseError {
    match reject {
        Reject::NoNumber => ParseError::NotANumber { target },
        Reject::Trailing { consumed } => ParseError::TrailingCharacters {
            target,
            at: consumed,
        },
        Reject::Overflow => ParseError::Overflow { target },
    }
}

/// True when the style set stays inside the grammar the decimal integer
/// fast paths implement (they match signs as single bytes, so the format's
/// signs must be the invariant ones).
#[inline]
fn integer_fast_path(styles: NumberStyles, fmt: &NumberFormat) -> bool {
    NumberStyles::INTEGER.contains(styles) && fmt.has_invariant_signs()
}

// === i32 ===

#[allow(clippy::cast_possible_wrap)]
fn parse_i32_inner(text: &str, styles: NumberStyles, fmt: &NumberFormat) -> Result<i32, Reject> {
    if styles.contains(NumberStyles::ALLOW_HEX_SPECIFIER) {
        return parse_u32_hex_style(text, styles).map(|bits| bits as i32);
    }
    if integer_fast_path(styles, fmt) {
        return parse_i32_integer_style(text, styles);
    }
    let number = try_scan_number::<I32_CAPACITY>(text, styles, fmt, NumberKind::Integer)?;
    number_to_i32(&number).ok_or(Reject::Overflow)
}

/// Parse an `i32`, reporting the outcome as a tri-state status. Returns
/// `0` alongside any non-`Ok` status. Never panics; an invalid style set
/// is a plain `Failed`.
pub fn try_parse_i32(text: &str, styles: NumberStyles, fmt: &NumberFormat) -> (ParsingStatus, i32) {
    if styles.validate_for_integer().is_err() {
        return (ParsingStatus::Failed, 0);
    }
    match parse_i32_inner(text, styles, fmt) {
        Ok(value) => (ParsingStatus::Ok, value),
        Err(reject) => (reject.status(), 0),
    }
}

/// Parse an `i32` or say why it could not be done.
pub fn parse_i32(text: &str, styles: NumberStyles, fmt: &NumberFormat) -> Result<i32, ParseError> {
    styles.validate_for_integer()?;
    parse_i32_inner(text, styles, fmt).map_err(|reject| classify(reject, TargetType::Int32))
}

// === i64 ===

#[allow(clippy::cast_possible_wrap)]
fn parse_i64_inner(text: &str, styles: NumberStyles, fmt: &NumberFormat) -> Result<i64, Reject> {
    if styles.contains(NumberStyles::ALLOW_HEX_SPECIFIER) {
        return parse_u64_hex_style(text, styles).map(|bits| bits as i64);
    }
    if integer_fast_path(styles, fmt) {
        return parse_i64_integer_style(text, styles);
    }
    let number = try_scan_number::<I64_CAPACITY>(text, styles, fmt, NumberKind::Integer)?;
    number_to_i64(&number).ok_or(Reject::Overflow)
}

/// Parse an `i64`, reporting the outcome as a tri-state status.
pub fn try_parse_i64(text: &str, styles: NumberStyles, fmt: &NumberFormat) -> (ParsingStatus, i64) {
    if styles.validate_for_integer().is_err() {
        return (ParsingStatus::Failed, 0);
    }
    match parse_i64_inner(text, styles, fmt) {
        Ok(value) => (ParsingStatus::Ok, value),
        Err(reject) => (reject.status(), 0),
    }
}

/// Parse an `i64` or say why it could not be done.
pub fn parse_i64(text: &str, styles: NumberStyles, fmt: &NumberFormat) -> Result<i64, ParseError> {
    styles.validate_for_integer()?;
    parse_i64_inner(text, styles, fmt).map_err(|reject| classify(reject, TargetType::Int64))
}

// === u32 ===

fn parse_u32_inner(text: &str, styles: NumberStyles, fmt: &NumberFormat) -> Result<u32, Reject> {
    if styles.contains(NumberStyles::ALLOW_HEX_SPECIFIER) {
        return parse_u32_hex_style(text, styles);
    }
    if integer_fast_path(styles, fmt) {
        return parse_u32_integer_style(text, styles);
    }
    let number = try_scan_number::<U32_CAPACITY>(text, styles, fmt, NumberKind::Integer)?;
    number_to_u32(&number).ok_or(Reject::Overflow)
}

/// Parse a `u32`, reporting the outcome as a tri-state status. A negative
/// input with a non-zero magnitude is an overflow, not a format failure.
pub fn try_parse_u32(text: &str, styles: NumberStyles, fmt: &NumberFormat) -> (ParsingStatus, u32) {
    if styles.validate_for_integer().is_err() {
        return (ParsingStatus::Failed, 0);
    }
    match parse_u32_inner(text, styles, fmt) {
        Ok(value) => (ParsingStatus::Ok, value),
        Err(reject) => (reject.status(), 0),
    }
}

/// Parse a `u32` or say why it could not be done.
pub fn parse_u32(text: &str, styles: NumberStyles, fmt: &NumberFormat) -> Result<u32, ParseError> {
    styles.validate_for_integer()?;
    parse_u32_inner(text, styles, fmt).map_err(|reject| classify(reject, TargetType::UInt32))
}

// === u64 ===

fn parse_u64_inner(text: &str, styles: NumberStyles, fmt: &NumberFormat) -> Result<u64, Reject> {
    if styles.contains(NumberStyles::ALLOW_HEX_SPECIFIER) {
        return parse_u64_hex_style(text, styles);
    }
    if integer_fast_path(styles, fmt) {
        return parse_u64_integer_style(text, styles);
    }
    let number = try_scan_number::<U64_CAPACITY>(text, styles, fmt, NumberKind::Integer)?;
    number_to_u64(&number).ok_or(Reject::Overflow)
}

/// Parse a `u64`, reporting the outcome as a tri-state status.
pub fn try_parse_u64(text: &str, styles: NumberStyles, fmt: &NumberFormat) -> (ParsingStatus, u64) {
    if styles.validate_for_integer().is_err() {
        return (ParsingStatus::Failed, 0);
    }
    match parse_u64_inner(text, styles, fmt) {
        Ok(value) => (ParsingStatus::Ok, value),
        Err(reject) => (reject.status(), 0),
    }
}

/// Parse a `u64` or say why it could not be done.
pub fn parse_u64(text: &str, styles: NumberStyles, fmt: &NumberFormat) -> Result<u64, ParseError> {
    styles.validate_for_integer()?;
    parse_u64_inner(text, styles, fmt).map_err(|reject| classify(reject, TargetType::UInt64))
}

// === Floats ===

fn parse_float_inner<F: RawFloat, const CAP: usize, const HEX_CAP: usize>(
    text: &str,
    styles: NumberStyles,
    fmt: &NumberFormat,
) -> Result<F, Reject> {
    if styles.contains(NumberStyles::ALLOW_HEX_SPECIFIER) {
        return match try_scan_hex_float::<HEX_CAP>(text, styles, fmt) {
            Ok(number) => Ok(hex_buffer_to_float(&number)),
            Err(reject) => parse_float_symbol(text, fmt).ok_or(reject),
        };
    }
    match try_scan_number::<CAP>(text, styles, fmt, NumberKind::FloatingPoint) {
        Ok(number) => Ok(number_to_float(&number)),
        Err(reject) => parse_float_symbol(text, fmt).ok_or(reject),
    }
}

/// The special-symbol fallback a failed float scan gets: the whole input,
/// whitespace-trimmed, compared ordinally and case-insensitively against
/// the format's Infinity/NaN symbols, then against the sign-prefixed
/// forms.
fn parse_float_symbol<F: RawFloat>(text: &str, fmt: &NumberFormat) -> Option<F> {
    let trimmed = text.trim();
    if eq_ignore_case(trimmed, fmt.positive_infinity_symbol()) {
        return Some(F::infinity());
    }
    if eq_ignore_case(trimmed, fmt.negative_infinity_symbol()) {
        return Some(-F::infinity());
    }
    if eq_ignore_case(trimmed, fmt.nan_symbol()) {
        return Some(F::nan());
    }
    if let Some(rest) = strip_prefix_ignore_case(trimmed, fmt.positive_sign()) {
        if eq_ignore_case(rest, fmt.positive_infinity_symbol()) {
            return Some(F::infinity());
        }
        if eq_ignore_case(rest, fmt.nan_symbol()) {
            return Some(F::nan());
        }
    }
    if let Some(rest) = strip_prefix_ignore_case(trimmed, fmt.negative_sign()) {
        if eq_ignore_case(rest, fmt.nan_symbol()) {
            return Some(F::nan());
        }
    }
    None
}

/// Ordinal case-insensitive equality, folding each scalar independently.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Strip `prefix` case-insensitively. An empty prefix never matches.
fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return None;
    }
    let mut rest = text;
    for expected in prefix.chars() {
        let ch = rest.chars().next()?;
        if !ch.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        rest = &rest[ch.len_utf8()..];
    }
    Some(rest)
}

/// Parse an `f64`, reporting the outcome as a tri-state status. Float
/// targets never report `Overflow`: out-of-range magnitudes round to
/// ±infinity instead.
pub fn try_parse_f64(text: &str, styles: NumberStyles, fmt: &NumberFormat) -> (ParsingStatus, f64) {
    if styles.validate_for_float().is_err() {
        return (ParsingStatus::Failed, 0.0);
    }
    match parse_float_inner::<f64, F64_CAPACITY, F64_HEX_CAPACITY>(text, styles, fmt) {
        Ok(value) => (ParsingStatus::Ok, value),
        Err(reject) => (reject.status(), 0.0),
    }
}

/// Parse an `f64` or say why it could not be done.
pub fn parse_f64(text: &str, styles: NumberStyles, fmt: &NumberFormat) -> Result<f64, ParseError> {
    styles.validate_for_float()?;
    parse_float_inner::<f64, F64_CAPACITY, F64_HEX_CAPACITY>(text, styles, fmt)
        .map_err(|reject| classify(reject, TargetType::Float64))
}

/// Parse an `f32`, reporting the outcome as a tri-state status.
pub fn try_parse_f32(text: &str, styles: NumberStyles, fmt: &NumberFormat) -> (ParsingStatus, f32) {
    if styles.validate_for_float().is_err() {
        return (ParsingStatus::Failed, 0.0);
    }
    match parse_float_inner::<f32, F32_CAPACITY, F32_HEX_CAPACITY>(text, styles, fmt) {
        Ok(value) => (ParsingStatus::Ok, value),
        Err(reject) => (reject.status(), 0.0),
    }
}

/// Parse an `f32` or say why it could not be done.
pub fn parse_f32(text: &str, styles: NumberStyles, fmt: &NumberFormat) -> Result<f32, ParseError> {
    styles.validate_for_float()?;
    parse_float_inner::<f32, F32_CAPACITY, F32_HEX_CAPACITY>(text, styles, fmt)
        .map_err(|reject| classify(reject, TargetType::Float32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FMT: &NumberFormat = &NumberFormat::INVARIANT;

    // === Routing equivalence ===

    #[test]
    fn fast_and_general_paths_agree() {
        // A non-invariant sign disables the fast path; the general scanner
        // must land on the same values.
        let custom = NumberFormat::INVARIANT.with_positive_sign("\u{2795}");
        for text in ["0", "42", "-42", "  2147483647 ", "-2147483648", "007"] {
            assert_eq!(
                parse_i32(text, NumberStyles::INTEGER, FMT).ok(),
                parse_i32(text, NumberStyles::INTEGER, &custom).ok(),
                "disagreement on {text:?}"
            );
        }
        for text in ["2147483648", "", "12 34", "abc"] {
            assert_eq!(
                try_parse_i32(text, NumberStyles::INTEGER, FMT).0,
                try_parse_i32(text, NumberStyles::INTEGER, &custom).0,
                "disagreement on {text:?}"
            );
        }
    }

    #[test]
    fn hex_styles_reinterpret_for_signed_targets() {
        assert_eq!(
            parse_i32("FFFFFFFF", NumberStyles::HEX_NUMBER, FMT),
            Ok(-1)
        );
        assert_eq!(
            parse_i64("0xFFFFFFFFFFFFFFFF", NumberStyles::HEX_NUMBER, FMT),
            Ok(-1)
        );
        assert_eq!(parse_u32("FFFFFFFF", NumberStyles::HEX_NUMBER, FMT), Ok(u32::MAX));
    }

    // === Status classification ===

    #[test]
    fn try_surface_collapses_to_the_tri_state() {
        assert_eq!(
            try_parse_i32("123", NumberStyles::INTEGER, FMT),
            (ParsingStatus::Ok, 123)
        );
        assert_eq!(
            try_parse_i32("abc", NumberStyles::INTEGER, FMT),
            (ParsingStatus::Failed, 0)
        );
        assert_eq!(
            try_parse_i32("9999999999", NumberStyles::INTEGER, FMT),
            (ParsingStatus::Overflow, 0)
        );
        // Format errors outrank overflow.
        assert_eq!(
            try_parse_i32("9999999999abc", NumberStyles::INTEGER, FMT),
            (ParsingStatus::Failed, 0)
        );
    }

    #[test]
    fn throwing_surface_keeps_the_detail() {
        assert!(matches!(
            parse_i32("abc", NumberStyles::INTEGER, FMT),
            Err(ParseError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_i32("12xy", NumberStyles::INTEGER, FMT),
            Err(ParseError::TrailingCharacters { at: 2, .. })
        ));
        assert!(matches!(
            parse_i32("9999999999", NumberStyles::INTEGER, FMT),
            Err(ParseError::Overflow { .. })
        ));
    }

    #[test]
    fn invalid_styles_fail_before_scanning() {
        let styles = NumberStyles::HEX_NUMBER | NumberStyles::ALLOW_THOUSANDS;
        assert_eq!(try_parse_i32("1A", styles, FMT).0, ParsingStatus::Failed);
        assert!(matches!(
            parse_i32("1A", styles, FMT),
            Err(ParseError::InvalidStyle(_))
        ));
        let styles = NumberStyles::HEX_FLOAT | NumberStyles::ALLOW_CURRENCY_SYMBOL;
        assert!(matches!(
            parse_f64("1p2", styles, FMT),
            Err(ParseError::InvalidStyle(_))
        ));
    }

    // === Symbol fallback ===

    #[test]
    fn infinity_and_nan_symbols() {
        assert_eq!(parse_f64("Infinity", NumberStyles::FLOAT, FMT), Ok(f64::INFINITY));
        assert_eq!(
            parse_f64(" -Infinity ", NumberStyles::FLOAT, FMT),
            Ok(f64::NEG_INFINITY)
        );
        assert_eq!(parse_f64("INFINITY", NumberStyles::FLOAT, FMT), Ok(f64::INFINITY));
        assert_eq!(parse_f64("+Infinity", NumberStyles::FLOAT, FMT), Ok(f64::INFINITY));
        assert!(parse_f64("NaN", NumberStyles::FLOAT, FMT).map(f64::is_nan).unwrap_or(false));
        assert!(parse_f64("-nan", NumberStyles::FLOAT, FMT).map(f64::is_nan).unwrap_or(false));
        assert!(parse_f32("Infinity", NumberStyles::FLOAT, FMT).map(f32::is_infinite).unwrap_or(false));
        // The fallback also applies under the hex grammar.
        assert_eq!(
            parse_f64("Infinity", NumberStyles::HEX_FLOAT, FMT),
            Ok(f64::INFINITY)
        );
    }

    #[test]
    fn symbols_never_apply_to_integer_targets() {
        assert_eq!(
            try_parse_i32("Infinity", NumberStyles::INTEGER, FMT).0,
            ParsingStatus::Failed
        );
    }

    #[test]
    fn custom_symbols_win_over_the_defaults() {
        let fmt = NumberFormat::INVARIANT
            .with_positive_infinity_symbol("beaucoup")
            .with_nan_symbol("rien");
        assert_eq!(
            parse_f64("Beaucoup", NumberStyles::FLOAT, &fmt),
            Ok(f64::INFINITY)
        );
        assert!(parse_f64("RIEN", NumberStyles::FLOAT, &fmt)
            .map(f64::is_nan)
            .unwrap_or(false));
        assert!(parse_f64("Infinity", NumberStyles::FLOAT, &fmt).is_err());
    }

    // === Case helpers ===

    #[test]
    fn ordinal_case_insensitive_helpers() {
        assert!(eq_ignore_case("Infinity", "INFINITY"));
        assert!(eq_ignore_case("\u{39a}\u{391}\u{399}", "\u{3ba}\u{3b1}\u{3b9}"));
        assert!(!eq_ignore_case("Infinity", "Infinit"));
        assert_eq!(strip_prefix_ignore_case("-NaN", "-"), Some("NaN"));
        assert_eq!(strip_prefix_ignore_case("NaN", ""), None);
        assert_eq!(strip_prefix_ignore_case("N", "NaN"), None);
    }
}
