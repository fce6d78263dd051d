//! The hexadecimal floating-point pipeline: `[sign] [0x] hexdigits [. hexdigits]
//! [p exponent]`.
//!
//! Unlike the decimal pipeline, the significand here is already binary, so
//! the converter performs the final round-to-nearest-even itself through
//! [`assemble_bits`] instead of delegating to the standard library. The
//! leading sign and the hex point are intrinsic to this grammar: they are
//! always accepted, with no style flag to switch them off. The hex point
//! is a literal `.` regardless of the configured decimal separator.

use numera_format::NumberFormat;

use crate::buffer::{HexFloatBuffer, HEX_EXPONENT_CAPACITY};
use crate::cursor::Cursor;
use crate::fast_path::hex_value;
use crate::raw_float::{assemble_bits, RawFloat};
use crate::scan::{is_white, match_chars, match_negative_sign, trailing_nuls_only};
use crate::status::Reject;
use crate::styles::NumberStyles;

/// Binary-exponent magnitude substituted once the verbatim digits are known
/// to exceed [`HEX_EXPONENT_CAPACITY`] or any representable range. Large
/// enough to force the zero/infinity outcome for every target.
const EXPONENT_SAT: i64 = 1 << 32;

/// Scan `text` under the hex-float grammar, then apply the trailing-NUL
/// tolerance to whatever the scan left unconsumed. Returns the filled
/// buffer; the caller moves it into exactly one converter.
pub(crate) fn try_scan_hex_float<const CAP: usize>(
    text: &str,
    styles: NumberStyles,
    fmt: &NumberFormat,
) -> Result<HexFloatBuffer<CAP>, Reject> {
    let mut number = HexFloatBuffer::new();
    let bytes = text.as_bytes();
    let consumed = scan_hex_float(bytes, styles, fmt, &mut number).ok_or(Reject::NoNumber)?;
    if consumed < bytes.len() && !trailing_nuls_only(bytes, consumed) {
        return Err(Reject::Trailing { consumed });
    }
    Ok(number)
}

/// One scan pass. Returns the number of bytes consumed on success; `None`
/// when no hex digit was found or an open parenthesis was never closed.
fn scan_hex_float<const CAP: usize>(
    bytes: &[u8],
    styles: NumberStyles,
    fmt: &NumberFormat,
    number: &mut HexFloatBuffer<CAP>,
) -> Option<usize> {
    let mut cur = Cursor::new(bytes);
    let mut seen_sign = false;
    let mut open_paren = false;

    // Prefix loop: whitespace, sign, open paren. Whitespace after a sign
    // is legal only under negative pattern 2.
    loop {
        let ch = cur.current();
        let skippable_white = is_white(ch)
            && styles.contains(NumberStyles::ALLOW_LEADING_WHITE)
            && !(seen_sign && fmt.negative_pattern() != 2);
        if skippable_white {
            cur.advance();
            continue;
        }
        if !seen_sign {
            if let Some(end) = match_chars(bytes, cur.pos(), fmt.positive_sign()) {
                seen_sign = true;
                cur.set_pos(end);
                continue;
            }
            if let Some(end) = match_negative_sign(bytes, cur.pos(), fmt) {
                seen_sign = true;
                number.is_negative = true;
                cur.set_pos(end);
                continue;
            }
            if ch == b'(' && styles.contains(NumberStyles::ALLOW_PARENTHESES) {
                seen_sign = true;
                open_paren = true;
                number.is_negative = true;
                cur.advance();
                continue;
            }
        }
        break;
    }

    // Optional 0x/0X, consumed only when a significand follows it (a lone
    // "0x" is a zero with trailing junk, not a prefix).
    if cur.current() == b'0'
        && matches!(cur.peek(), b'x' | b'X')
        && bytes
            .get(cur.pos() + 2)
            .is_some_and(|&b| b == b'.' || hex_value(b).is_some())
    {
        cur.advance_n(2);
    }

    // Significand: hex digits around one literal point. Leading zeros are
    // skipped; fractional leading zeros lower the scale; digits past a
    // sub-buffer's capacity become the sticky tail.
    let mut seen_digits = false;
    let mut seen_nonzero = false;
    let mut seen_point = false;
    loop {
        let ch = cur.current();
        if let Some(value) = hex_value(ch) {
            seen_digits = true;
            if value != 0 || seen_nonzero {
                seen_nonzero = true;
                if seen_point {
                    if number.decimal_count < CAP {
                        number.decimal[number.decimal_count] = value;
                        number.decimal_count += 1;
                    } else if value != 0 {
                        number.has_nonzero_tail = true;
                    }
                } else {
                    if number.integer_count < CAP {
                        number.integer[number.integer_count] = value;
                        number.integer_count += 1;
                    } else if value != 0 {
                        number.has_nonzero_tail = true;
                    }
                    number.scale += 1;
                }
            } else if seen_point {
                number.scale -= 1;
            }
            cur.advance();
            continue;
        }
        if ch == b'.' && !seen_point {
            seen_point = true;
            cur.advance();
            continue;
        }
        break;
    }
    if !seen_digits {
        return None;
    }

    // Binary exponent. A consumed `p`/sign with no digit after it rolls
    // back. Digits are kept verbatim (the magnitude may exceed any machine
    // integer); leading zeros are not significant.
    if styles.contains(NumberStyles::ALLOW_EXPONENT) && matches!(cur.current(), b'p' | b'P') {
        let before_exponent = cur;
        cur.advance();
        if let Some(end) = match_chars(bytes, cur.pos(), fmt.positive_sign()) {
            cur.set_pos(end);
        } else if let Some(end) = match_negative_sign(bytes, cur.pos(), fmt) {
            cur.set_pos(end);
            number.exponent_is_negative = true;
        }
        if cur.current().is_ascii_digit() {
            while cur.current() == b'0' {
                cur.advance();
            }
            while cur.current().is_ascii_digit() {
                if number.exponent_count < HEX_EXPONENT_CAPACITY {
                    number.exponent[number.exponent_count] = cur.current();
                    number.exponent_count += 1;
                } else {
                    number.exponent_saturated = true;
                }
                cur.advance();
            }
        } else {
            cur = before_exponent;
            number.exponent_is_negative = false;
        }
    }

    // Suffix loop: trailing whitespace, trailing sign, closing paren.
    loop {
        let ch = cur.current();
        if is_white(ch) && styles.contains(NumberStyles::ALLOW_TRAILING_WHITE) {
            cur.advance();
            continue;
        }
        if styles.contains(NumberStyles::ALLOW_TRAILING_SIGN) && !seen_sign {
            if let Some(end) = match_chars(bytes, cur.pos(), fmt.positive_sign()) {
                seen_sign = true;
                cur.set_pos(end);
                continue;
            }
            if let Some(end) = match_negative_sign(bytes, cur.pos(), fmt) {
                seen_sign = true;
                number.is_negative = true;
                cur.set_pos(end);
                continue;
            }
        }
        if ch == b')' && open_paren {
            open_paren = false;
            cur.advance();
            continue;
        }
        break;
    }
    if open_paren {
        return None;
    }
    if !seen_nonzero {
        number.scale = 0;
    }
    Some(cur.pos())
}

/// Convert a hex-float scan to a value, correctly rounded.
///
/// Up to fifteen significand digits (60 bits, comfortably past any
/// target's precision plus a rounding bit) are folded into a binary
/// significand; everything below them only contributes a sticky bit. The
/// power-of-16 scale and the binary exponent combine into one
/// power-of-two exponent for [`assemble_bits`].
pub(crate) fn hex_buffer_to_float<F: RawFloat, const CAP: usize>(
    number: &HexFloatBuffer<CAP>,
) -> F {
    let value = if number.significand_is_zero() {
        F::from_bits64(0)
    } else {
        let mut exponent: i64 = 0;
        for &digit in &number.exponent[..number.exponent_count] {
            if exponent <= EXPONENT_SAT {
                exponent = exponent * 10 + i64::from(digit - b'0');
            }
        }
        if number.exponent_saturated || exponent > EXPONENT_SAT {
            exponent = EXPONENT_SAT;
        }
        if number.exponent_is_negative {
            exponent = -exponent;
        }

        let mut significand: u64 = 0;
        let mut folded: i64 = 0;
        let mut sticky = number.has_nonzero_tail;
        for digit in number.significand() {
            if folded < 15 {
                significand = significand << 4 | u64::from(digit);
                folded += 1;
            } else if digit != 0 {
                sticky = true;
            }
        }
        let e2 = 4 * (i64::from(number.scale) - folded) + exponent;
        F::from_bits64(assemble_bits::<F>(significand, e2, sticky))
    };
    if number.is_negative { -value } else { value }
}

#[cfg(test)]
mod tests;
