//! Single-pass integer scanners for the restricted style sets.
//!
//! When a style set stays inside the plain-integer grammar (whitespace,
//! one leading sign, digits) and the format snapshot uses the invariant
//! signs, the general scanner's digit buffer is pure overhead: these
//! scanners accumulate the value directly, byte by byte. Each one admits
//! as many digits as can never overflow its target, then treats exactly
//! one more digit as a boundary case and anything past that as overflow.
//!
//! Trailing-character validation runs before the overflow verdict, so
//! malformed text is reported as a format failure even when the digits
//! already overflowed.
//!
//! The hex scanners cover `ALLOW_HEX_SPECIFIER` sets. They accept no
//! sign; signed targets reinterpret the unsigned result in two's
//! complement at the entry-point layer.

use crate::scan::{is_white, trailing_nuls_only};
use crate::status::Reject;
use crate::styles::NumberStyles;

/// Skip leading whitespace when the style set allows it.
#[inline]
fn eat_leading_white(bytes: &[u8], styles: NumberStyles) -> usize {
    let mut index = 0;
    if styles.contains(NumberStyles::ALLOW_LEADING_WHITE) {
        while index < bytes.len() && is_white(bytes[index]) {
            index += 1;
        }
    }
    index
}

/// Consume a single-byte sign when the style set allows one. Returns the
/// new position and whether the sign was negative.
#[inline]
fn eat_sign(bytes: &[u8], index: usize, styles: NumberStyles) -> (usize, bool) {
    if styles.contains(NumberStyles::ALLOW_LEADING_SIGN) {
        match bytes.get(index) {
            Some(b'+') => return (index + 1, false),
            Some(b'-') => return (index + 1, true),
            _ => {}
        }
    }
    (index, false)
}

/// Validate everything after the digits: optional trailing whitespace,
/// then nothing but ASCII NUL. Runs before any overflow verdict.
fn check_trailing(bytes: &[u8], index: usize, styles: NumberStyles) -> Result<(), Reject> {
    let mut index = index;
    if styles.contains(NumberStyles::ALLOW_TRAILING_WHITE) {
        while index < bytes.len() && is_white(bytes[index]) {
            index += 1;
        }
    }
    if index < bytes.len() && !trailing_nuls_only(bytes, index) {
        return Err(Reject::Trailing { consumed: index });
    }
    Ok(())
}

/// Skip an integral type-suffix pair (`l`/`L` and `u`/`U`, either order)
/// when the style set allows one, then validate the rest of the input.
fn check_hex_tail(bytes: &[u8], index: usize, styles: NumberStyles) -> Result<(), Reject> {
    let mut index = index;
    if styles.contains(NumberStyles::ALLOW_TYPE_SPECIFIER) {
        match bytes.get(index) {
            Some(b'l' | b'L') => {
                index += 1;
                if matches!(bytes.get(index), Some(b'u' | b'U')) {
                    index += 1;
                }
            }
            Some(b'u' | b'U') => {
                index += 1;
                if matches!(bytes.get(index), Some(b'l' | b'L')) {
                    index += 1;
                }
            }
            _ => {}
        }
    }
    check_trailing(bytes, index, styles)
}

/// Shared scanner prologue: require at least one digit, then consume a
/// leading-zero run, returning `0` early when nothing significant follows.
/// A macro because it early-returns from the calling scanner and the digit
/// predicate differs between the decimal and hex variants.
macro_rules! prologue {
    ($bytes:ident, $styles:ident, $index:ident, $is_digit:expr) => {{
        if $index >= $bytes.len() || !$is_digit($bytes[$index]) {
            return Err(Reject::NoNumber);
        }
        if $bytes[$index] == b'0' {
            loop {
                $index += 1;
                if $index >= $bytes.len() {
                    return Ok(0);
                }
                if $bytes[$index] != b'0' {
                    break;
                }
            }
            if !$is_digit($bytes[$index]) {
                check_trailing($bytes, $index, $styles)?;
                return Ok(0);
            }
        }
    }};
}

fn is_decimal_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Value of a hex digit, or `None`.
#[inline]
pub(crate) fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub(crate) fn parse_i32_integer_style(text: &str, styles: NumberStyles) -> Result<i32, Reject> {
    let bytes = text.as_bytes();
    let index = eat_leading_white(bytes, styles);
    let (mut index, negative) = eat_sign(bytes, index, styles);
    let sign: i32 = if negative { -1 } else { 1 };
    prologue!(bytes, styles, index, is_decimal_digit);

    // First significant digit plus eight more can never overflow.
    let mut answer = i32::from(bytes[index] - b'0');
    index += 1;
    for _ in 0..8 {
        let Some(&byte) = bytes.get(index) else {
            return Ok(answer * sign);
        };
        if !byte.is_ascii_digit() {
            check_trailing(bytes, index, styles)?;
            return Ok(answer * sign);
        }
        answer = answer * 10 + i32::from(byte - b'0');
        index += 1;
    }

    // Tenth digit: wrap and check the sign-aware bound (the negative bound
    // is one higher, which is what admits i32::MIN).
    let mut overflow = false;
    if let Some(&byte) = bytes.get(index) {
        if byte.is_ascii_digit() {
            overflow = answer > i32::MAX / 10;
            answer = answer.wrapping_mul(10).wrapping_add(i32::from(byte - b'0'));
            index += 1;
            overflow |= answer as u32 > i32::MAX as u32 + u32::from(negative);
            while index < bytes.len() && bytes[index].is_ascii_digit() {
                overflow = true;
                index += 1;
            }
        }
    }
    check_trailing(bytes, index, styles)?;
    if overflow {
        return Err(Reject::Overflow);
    }
    Ok(answer.wrapping_mul(sign))
}

#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub(crate) fn parse_i64_integer_style(text: &str, styles: NumberStyles) -> Result<i64, Reject> {
    let bytes = text.as_bytes();
    let index = eat_leading_white(bytes, styles);
    let (mut index, negative) = eat_sign(bytes, index, styles);
    let sign: i64 = if negative { -1 } else { 1 };
    prologue!(bytes, styles, index, is_decimal_digit);

    let mut answer = i64::from(bytes[index] - b'0');
    index += 1;
    for _ in 0..17 {
        let Some(&byte) = bytes.get(index) else {
            return Ok(answer * sign);
        };
        if !byte.is_ascii_digit() {
            check_trailing(bytes, index, styles)?;
            return Ok(answer * sign);
        }
        answer = answer * 10 + i64::from(byte - b'0');
        index += 1;
    }

    let mut overflow = false;
    if let Some(&byte) = bytes.get(index) {
        if byte.is_ascii_digit() {
            overflow = answer > i64::MAX / 10;
            answer = answer.wrapping_mul(10).wrapping_add(i64::from(byte - b'0'));
            index += 1;
            overflow |= answer as u64 > i64::MAX as u64 + u64::from(negative);
            while index < bytes.len() && bytes[index].is_ascii_digit() {
                overflow = true;
                index += 1;
            }
        }
    }
    check_trailing(bytes, index, styles)?;
    if overflow {
        return Err(Reject::Overflow);
    }
    Ok(answer.wrapping_mul(sign))
}

pub(crate) fn parse_u32_integer_style(text: &str, styles: NumberStyles) -> Result<u32, Reject> {
    let bytes = text.as_bytes();
    let index = eat_leading_white(bytes, styles);
    let (mut index, negative) = eat_sign(bytes, index, styles);
    prologue!(bytes, styles, index, is_decimal_digit);

    let mut answer = u32::from(bytes[index] - b'0');
    index += 1;
    let mut overflow = false;
    for _ in 0..8 {
        let Some(&byte) = bytes.get(index) else {
            return finish_unsigned(answer, negative);
        };
        if !byte.is_ascii_digit() {
            check_trailing(bytes, index, styles)?;
            return finish_unsigned(answer, negative);
        }
        answer = answer * 10 + u32::from(byte - b'0');
        index += 1;
    }

    if let Some(&byte) = bytes.get(index) {
        if byte.is_ascii_digit() {
            overflow = answer > u32::MAX / 10 || (answer == u32::MAX / 10 && byte > b'5');
            answer = answer.wrapping_mul(10).wrapping_add(u32::from(byte - b'0'));
            index += 1;
            while index < bytes.len() && bytes[index].is_ascii_digit() {
                overflow = true;
                index += 1;
            }
        }
    }
    check_trailing(bytes, index, styles)?;
    if overflow {
        return Err(Reject::Overflow);
    }
    finish_unsigned(answer, negative)
}

pub(crate) fn parse_u64_integer_style(text: &str, styles: NumberStyles) -> Result<u64, Reject> {
    let bytes = text.as_bytes();
    let index = eat_leading_white(bytes, styles);
    let (mut index, negative) = eat_sign(bytes, index, styles);
    prologue!(bytes, styles, index, is_decimal_digit);

    let mut answer = u64::from(bytes[index] - b'0');
    index += 1;
    let mut overflow = false;
    for _ in 0..18 {
        let Some(&byte) = bytes.get(index) else {
            return finish_unsigned(answer, negative);
        };
        if !byte.is_ascii_digit() {
            check_trailing(bytes, index, styles)?;
            return finish_unsigned(answer, negative);
        }
        answer = answer * 10 + u64::from(byte - b'0');
        index += 1;
    }

    if let Some(&byte) = bytes.get(index) {
        if byte.is_ascii_digit() {
            overflow = answer > u64::MAX / 10 || (answer == u64::MAX / 10 && byte > b'5');
            answer = answer.wrapping_mul(10).wrapping_add(u64::from(byte - b'0'));
            index += 1;
            while index < bytes.len() && bytes[index].is_ascii_digit() {
                overflow = true;
                index += 1;
            }
        }
    }
    check_trailing(bytes, index, styles)?;
    if overflow {
        return Err(Reject::Overflow);
    }
    finish_unsigned(answer, negative)
}

/// A consumed negative sign on an unsigned target only survives when the
/// magnitude is zero.
#[inline]
fn finish_unsigned<T: Default + PartialEq>(answer: T, negative: bool) -> Result<T, Reject> {
    if negative && answer != T::default() {
        return Err(Reject::Overflow);
    }
    Ok(answer)
}

pub(crate) fn parse_u32_hex_style(text: &str, styles: NumberStyles) -> Result<u32, Reject> {
    parse_u64_hex_style_impl(text, styles, 8).and_then(|answer| {
        u32::try_from(answer).map_err(|_| Reject::Overflow)
    })
}

pub(crate) fn parse_u64_hex_style(text: &str, styles: NumberStyles) -> Result<u64, Reject> {
    parse_u64_hex_style_impl(text, styles, 16)
}

/// Shared hex scanner: an optional `0x`/`0X` prefix, leading zeros, then
/// at most `max_digits` significant hex digits. Leading zeros are skipped
/// first, so any digit past the limit is an overflow regardless of value.
fn parse_u64_hex_style_impl(
    text: &str,
    styles: NumberStyles,
    max_digits: u32,
) -> Result<u64, Reject> {
    let bytes = text.as_bytes();
    let mut index = eat_leading_white(bytes, styles);
    if index + 1 < bytes.len()
        && bytes[index] == b'0'
        && matches!(bytes[index + 1], b'x' | b'X')
        && bytes.get(index + 2).copied().is_some_and(|b| hex_value(b).is_some())
    {
        index += 2;
    }
    let is_hex = |byte: u8| hex_value(byte).is_some();
    prologue!(bytes, styles, index, is_hex);

    let mut answer = 0u64;
    let mut significant = 0u32;
    let mut overflow = false;
    while let Some(value) = bytes.get(index).copied().and_then(hex_value) {
        if significant < max_digits {
            answer = answer << 4 | u64::from(value);
            significant += 1;
        } else {
            overflow = true;
        }
        index += 1;
    }
    check_hex_tail(bytes, index, styles)?;
    if overflow {
        return Err(Reject::Overflow);
    }
    Ok(answer)
}
