//! The general digit-buffer scanner.
//!
//! One left-to-right pass over the input under the style grammar and the
//! format snapshot: a prefix loop (whitespace, sign, open paren, currency
//! symbol), the digit loop (digits, decimal point, thousands separators),
//! the optional exponent, the optional literal type suffix, and a suffix
//! loop mirroring the prefix. The pass fills a [`NumberBuffer`] and reports
//! how many bytes it consumed; anything left after that position is
//! tolerated only if it is all ASCII NUL.
//!
//! Sub-matches never retry: a failed sign match falls through to the
//! currency match, then to "stop". The scanner itself fails only when no
//! digit was seen or an open parenthesis was never closed.

use bitflags::bitflags;

use numera_format::NumberFormat;

use crate::buffer::{NumberBuffer, NumberKind};
use crate::cursor::Cursor;
use crate::status::Reject;
use crate::styles::NumberStyles;

bitflags! {
    /// Progress flags threaded through one scan pass.
    #[derive(Copy, Clone, Eq, PartialEq, Debug)]
    struct ScanState: u8 {
        /// A sign (or open paren) was consumed.
        const SIGN = 1 << 0;
        /// An open paren is waiting for its `)`.
        const PARENS = 1 << 1;
        /// At least one digit was seen.
        const DIGITS = 1 << 2;
        /// At least one significant (non-leading-zero) digit was seen.
        const NONZERO = 1 << 3;
        /// The decimal point was consumed.
        const DECIMAL = 1 << 4;
        /// The currency symbol was consumed.
        const CURRENCY = 1 << 5;
    }
}

/// Whitespace as the grammar defines it: ASCII space or `0x09..=0x0D`.
#[inline]
pub(crate) fn is_white(byte: u8) -> bool {
    byte == 0x20 || (0x09..=0x0d).contains(&byte)
}

/// True when every byte from `from` on is ASCII NUL. This is the legacy
/// trailing-zero tolerance shared by the general scanner and the fast
/// paths; it is deliberately not a whitespace check.
pub(crate) fn trailing_nuls_only(bytes: &[u8], from: usize) -> bool {
    bytes[from..].iter().all(|&b| b == 0)
}

fn is_space_replacing(ch: char) -> bool {
    // Separator strings built from non-breaking or narrow-no-break spaces
    // also match a plain keyboard space in the input.
    ch == '\u{a0}' || ch == '\u{202f}'
}

/// Match `target` against the input at `pos`, returning the position just
/// past the match. Empty targets never match.
pub(crate) fn match_chars(bytes: &[u8], pos: usize, target: &str) -> Option<usize> {
    if target.is_empty() {
        return None;
    }
    let mut at = pos;
    for ch in target.chars() {
        if is_space_replacing(ch) && bytes.get(at) == Some(&b' ') {
            at += 1;
            continue;
        }
        let mut utf8 = [0u8; 4];
        let encoded = ch.encode_utf8(&mut utf8).as_bytes();
        if !bytes.get(at..)?.starts_with(encoded) {
            return None;
        }
        at += encoded.len();
    }
    Some(at)
}

/// Match the configured negative sign, falling back to a bare ASCII hyphen
/// when the format snapshot enables that accommodation.
pub(crate) fn match_negative_sign(bytes: &[u8], pos: usize, fmt: &NumberFormat) -> Option<usize> {
    if let Some(end) = match_chars(bytes, pos, fmt.negative_sign()) {
        return Some(end);
    }
    if fmt.allow_hyphen() && bytes.get(pos) == Some(&b'-') {
        return Some(pos + 1);
    }
    None
}

/// Scan `text` under the style grammar, then apply the trailing-NUL
/// tolerance to whatever the scan left unconsumed. Returns the filled
/// buffer; the caller moves it into exactly one converter.
pub(crate) fn try_scan_number<const CAP: usize>(
    text: &str,
    styles: NumberStyles,
    fmt: &NumberFormat,
    kind: NumberKind,
) -> Result<NumberBuffer<CAP>, Reject> {
    let mut number = NumberBuffer::new(kind);
    let bytes = text.as_bytes();
    let consumed = scan_number(bytes, styles, fmt, &mut number).ok_or(Reject::NoNumber)?;
    if consumed < bytes.len() && !trailing_nuls_only(bytes, consumed) {
        return Err(Reject::Trailing { consumed });
    }
    Ok(number)
}

/// One scan pass. Returns the number of bytes consumed on success; `None`
/// when no digit was found or the grammar was violated.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn scan_number<const CAP: usize>(
    bytes: &[u8],
    styles: NumberStyles,
    fmt: &NumberFormat,
    number: &mut NumberBuffer<CAP>,
) -> Option<usize> {
    let parsing_currency = styles.contains(NumberStyles::ALLOW_CURRENCY_SYMBOL);
    // Currency parsing prefers the currency separators but falls back to
    // the plain numeric ones while no symbol has been consumed.
    let (dec_sep, group_sep) = if parsing_currency {
        (fmt.currency_decimal_separator(), fmt.currency_group_separator())
    } else {
        (fmt.decimal_separator(), fmt.group_separator())
    };
    let mut currency_symbol = parsing_currency.then(|| fmt.currency_symbol());

    let mut state = ScanState::empty();
    let mut cur = Cursor::new(bytes);

    // Prefix loop: whitespace, sign, open paren, currency, in priority
    // order. Whitespace after a sign is legal only once a currency symbol
    // was consumed, or under negative pattern 2 ("sign, space, number").
    loop {
        let ch = cur.current();
        let skippable_white = is_white(ch)
            && styles.contains(NumberStyles::ALLOW_LEADING_WHITE)
            && !(state.contains(ScanState::SIGN)
                && !state.contains(ScanState::CURRENCY)
                && fmt.negative_pattern() != 2);
        if skippable_white {
            cur.advance();
            continue;
        }
        if styles.contains(NumberStyles::ALLOW_LEADING_SIGN) && !state.contains(ScanState::SIGN) {
            if let Some(end) = match_chars(bytes, cur.pos(), fmt.positive_sign()) {
                state |= ScanState::SIGN;
                cur.set_pos(end);
                continue;
            }
            if let Some(end) = match_negative_sign(bytes, cur.pos(), fmt) {
                state |= ScanState::SIGN;
                number.is_negative = true;
                cur.set_pos(end);
                continue;
            }
        }
        if ch == b'('
            && styles.contains(NumberStyles::ALLOW_PARENTHESES)
            && !state.contains(ScanState::SIGN)
        {
            state |= ScanState::SIGN | ScanState::PARENS;
            number.is_negative = true;
            cur.advance();
            continue;
        }
        if let Some(symbol) = currency_symbol {
            if let Some(end) = match_chars(bytes, cur.pos(), symbol) {
                // At most one currency symbol; clearing the slot stops the
                // suffix loop from matching a second one.
                state |= ScanState::CURRENCY;
                currency_symbol = None;
                cur.set_pos(end);
                continue;
            }
        }
        break;
    }

    // Digit loop. Leading zeros are tracked but not stored: before the
    // decimal point they are insignificant, after it each one lowers the
    // scale. Stored digits are capped at CAP; dropped non-zero digits set
    // the sticky tail. Every digit before the decimal point raises the
    // scale.
    let mut dig_count = 0usize;
    let mut dig_end = 0usize;
    let mut trailing_zero_run = 0usize;
    loop {
        let ch = cur.current();
        if ch.is_ascii_digit() {
            state |= ScanState::DIGITS;
            if ch != b'0' || state.contains(ScanState::NONZERO) {
                if dig_count < CAP {
                    number.digits[dig_count] = ch;
                    // Integer buffers keep trailing zeros out of the
                    // significant count; the converter re-expands them
                    // through the scale.
                    if ch != b'0' || number.kind != NumberKind::Integer {
                        dig_end = dig_count + 1;
                    }
                    if ch == b'0' {
                        trailing_zero_run += 1;
                    } else {
                        trailing_zero_run = 0;
                    }
                } else if ch != b'0' {
                    number.has_nonzero_tail = true;
                }
                if !state.contains(ScanState::DECIMAL) {
                    number.scale += 1;
                }
                dig_count += 1;
                state |= ScanState::NONZERO;
            } else if state.contains(ScanState::DECIMAL) {
                number.scale -= 1;
            }
            cur.advance();
            continue;
        }
        if styles.contains(NumberStyles::ALLOW_DECIMAL_POINT) && !state.contains(ScanState::DECIMAL)
        {
            if let Some(end) = match_chars(bytes, cur.pos(), dec_sep) {
                state |= ScanState::DECIMAL;
                cur.set_pos(end);
                continue;
            }
            if parsing_currency && !state.contains(ScanState::CURRENCY) {
                if let Some(end) = match_chars(bytes, cur.pos(), fmt.decimal_separator()) {
                    state |= ScanState::DECIMAL;
                    cur.set_pos(end);
                    continue;
                }
            }
        }
        if styles.contains(NumberStyles::ALLOW_THOUSANDS)
            && state.contains(ScanState::DIGITS)
            && !state.contains(ScanState::DECIMAL)
        {
            if let Some(end) = match_chars(bytes, cur.pos(), group_sep) {
                cur.set_pos(end);
                continue;
            }
            if parsing_currency && !state.contains(ScanState::CURRENCY) {
                if let Some(end) = match_chars(bytes, cur.pos(), fmt.group_separator()) {
                    cur.set_pos(end);
                    continue;
                }
            }
        }
        break;
    }
    number.count = dig_end;

    if !state.contains(ScanState::DIGITS) {
        return None;
    }

    // Exponent. A consumed `e`/sign with no digit after it rolls back.
    if styles.contains(NumberStyles::ALLOW_EXPONENT) && matches!(cur.current(), b'e' | b'E') {
        let before_exponent = cur;
        cur.advance();
        let mut negative_exponent = false;
        if let Some(end) = match_chars(bytes, cur.pos(), fmt.positive_sign()) {
            cur.set_pos(end);
        } else if let Some(end) = match_negative_sign(bytes, cur.pos(), fmt) {
            cur.set_pos(end);
            negative_exponent = true;
        }
        if cur.current().is_ascii_digit() {
            let mut exponent: i32 = 0;
            loop {
                exponent = exponent * 10 + i32::from(cur.current() - b'0');
                cur.advance();
                if exponent > 1000 {
                    // Legacy clamp: anything past the threshold is equally
                    // out of range, but the remaining digits must still be
                    // consumed so the scan position stays accurate.
                    exponent = 9999;
                    while cur.current().is_ascii_digit() {
                        cur.advance();
                    }
                }
                if !cur.current().is_ascii_digit() {
                    break;
                }
            }
            if negative_exponent {
                exponent = -exponent;
            }
            number.scale += exponent;
        } else {
            cur = before_exponent;
        }
    }

    // Trailing fractional zeros of a float scan carry no information
    // unless digits were dropped past capacity; trim them back off.
    if number.kind == NumberKind::FloatingPoint && !number.has_nonzero_tail {
        let fractional_digits = dig_end as i32 - number.scale;
        if fractional_digits > 0 {
            let trim = trailing_zero_run.min(fractional_digits as usize);
            number.count = dig_end - trim;
        }
    }

    // Literal type suffix: one float suffix, or (for integral forms) an
    // `l`/`u` pair in either order.
    if styles.contains(NumberStyles::ALLOW_TYPE_SPECIFIER) {
        match cur.current() {
            b'f' | b'F' | b'd' | b'D' | b'm' | b'M' => cur.advance(),
            b'l' | b'L' if !state.contains(ScanState::DECIMAL) => {
                cur.advance();
                if matches!(cur.current(), b'u' | b'U') {
                    cur.advance();
                }
            }
            b'u' | b'U' if !state.contains(ScanState::DECIMAL) => {
                cur.advance();
                if matches!(cur.current(), b'l' | b'L') {
                    cur.advance();
                }
            }
            _ => {}
        }
    }

    // Suffix loop: trailing whitespace, trailing sign, closing paren,
    // currency symbol.
    loop {
        let ch = cur.current();
        if is_white(ch) && styles.contains(NumberStyles::ALLOW_TRAILING_WHITE) {
            cur.advance();
            continue;
        }
        if styles.contains(NumberStyles::ALLOW_TRAILING_SIGN) && !state.contains(ScanState::SIGN) {
            if let Some(end) = match_chars(bytes, cur.pos(), fmt.positive_sign()) {
                state |= ScanState::SIGN;
                cur.set_pos(end);
                continue;
            }
            if let Some(end) = match_negative_sign(bytes, cur.pos(), fmt) {
                state |= ScanState::SIGN;
                number.is_negative = true;
                cur.set_pos(end);
                continue;
            }
        }
        if ch == b')' && state.contains(ScanState::PARENS) {
            state.remove(ScanState::PARENS);
            cur.advance();
            continue;
        }
        if let Some(symbol) = currency_symbol {
            if let Some(end) = match_chars(bytes, cur.pos(), symbol) {
                currency_symbol = None;
                cur.set_pos(end);
                continue;
            }
        }
        break;
    }

    if state.contains(ScanState::PARENS) {
        return None;
    }
    if !state.contains(ScanState::NONZERO) {
        // All zeros: normalize the scale, and an integral form with no
        // decimal point sheds its sign so "-0" converts cleanly.
        number.scale = 0;
        if number.kind == NumberKind::Integer && !state.contains(ScanState::DECIMAL) {
            number.is_negative = false;
        }
    }
    Some(cur.pos())
}
