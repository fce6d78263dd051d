//! Converters from a scanned [`NumberBuffer`] to a concrete value.
//!
//! The integer converters return `None` for any value outside the target
//! range; the caller reports that as an overflow, so a scan that matched
//! the grammar but carries fractional digits is an overflow too, never a
//! format error. The decimal float converter cannot fail: out-of-range
//! magnitudes saturate to zero or infinity.

use crate::buffer::NumberBuffer;
use crate::raw_float::RawFloat;

const I32_PRECISION: i32 = 10;
const I64_PRECISION: i32 = 19;
const U32_PRECISION: i32 = 10;
const U64_PRECISION: i32 = 20;

/// Shared range precheck: the value has more integral digits than the
/// target can ever hold, or significant digits extend past the decimal
/// point (a fractional value never fits an integer target).
#[inline]
#[allow(clippy::cast_possible_wrap)]
fn out_of_integer_range<const CAP: usize>(number: &NumberBuffer<CAP>, precision: i32) -> bool {
    number.scale > precision || number.scale < number.count as i32
}

pub(crate) fn number_to_i32<const CAP: usize>(number: &NumberBuffer<CAP>) -> Option<i32> {
    if out_of_integer_range(number, I32_PRECISION) {
        return None;
    }
    let mut digits = number.digits().iter();
    let mut n: i32 = 0;
    for _ in 0..number.scale {
        // Wrapping accumulation: the guard catches everything more than one
        // digit out of range, and the final sign check catches the rest.
        // i32::MIN survives the wrap, as it must.
        if n as u32 > i32::MAX as u32 / 10 {
            return None;
        }
        n = n.wrapping_mul(10);
        if let Some(&digit) = digits.next() {
            n = n.wrapping_add(i32::from(digit - b'0'));
        }
    }
    if number.is_negative {
        n = n.wrapping_neg();
        if n > 0 {
            return None;
        }
    } else if n < 0 {
        return None;
    }
    Some(n)
}

pub(crate) fn number_to_i64<const CAP: usize>(number: &NumberBuffer<CAP>) -> Option<i64> {
    if out_of_integer_range(number, I64_PRECISION) {
        return None;
    }
    let mut digits = number.digits().iter();
    let mut n: i64 = 0;
    for _ in 0..number.scale {
        if n as u64 > i64::MAX as u64 / 10 {
            return None;
        }
        n = n.wrapping_mul(10);
        if let Some(&digit) = digits.next() {
            n = n.wrapping_add(i64::from(digit - b'0'));
        }
    }
    if number.is_negative {
        n = n.wrapping_neg();
        if n > 0 {
            return None;
        }
    } else if n < 0 {
        return None;
    }
    Some(n)
}

pub(crate) fn number_to_u32<const CAP: usize>(number: &NumberBuffer<CAP>) -> Option<u32> {
    // The scanner already sheds the sign of an integral "-0"; any sign
    // still present belongs to a non-zero magnitude.
    if number.is_negative || out_of_integer_range(number, U32_PRECISION) {
        return None;
    }
    let mut digits = number.digits().iter();
    let mut n: u32 = 0;
    for _ in 0..number.scale {
        n = n.checked_mul(10)?;
        if let Some(&digit) = digits.next() {
            n = n.checked_add(u32::from(digit - b'0'))?;
        }
    }
    Some(n)
}

pub(crate) fn number_to_u64<const CAP: usize>(number: &NumberBuffer<CAP>) -> Option<u64> {
    if number.is_negative || out_of_integer_range(number, U64_PRECISION) {
        return None;
    }
    let mut digits = number.digits().iter();
    let mut n: u64 = 0;
    for _ in 0..number.scale {
        n = n.checked_mul(10)?;
        if let Some(&digit) = digits.next() {
            n = n.checked_add(u64::from(digit - b'0'))?;
        }
    }
    Some(n)
}

/// Convert a decimal scan to a float, correctly rounded.
///
/// Magnitudes whose decimal exponent falls outside the representable
/// bracket short-circuit to zero or infinity. Everything else is rendered
/// back to a canonical `0.<digits>e<scale>` form and handed to the
/// standard library's decimal parser, which performs the final
/// round-to-nearest-even; a dropped non-zero tail becomes one extra digit,
/// which is exactly a sticky bit at that position.
pub(crate) fn number_to_float<F: RawFloat, const CAP: usize>(number: &NumberBuffer<CAP>) -> F {
    let value = if number.count == 0 || number.scale < F::MIN_DECIMAL_EXPONENT {
        F::from_bits64(0)
    } else if number.scale > F::MAX_DECIMAL_EXPONENT {
        F::infinity()
    } else {
        let mut text = String::with_capacity(number.count + 8);
        text.push_str("0.");
        text.extend(number.digits().iter().map(|&b| char::from(b)));
        if number.has_nonzero_tail {
            text.push('1');
        }
        text.push('e');
        text.push_str(&number.scale.to_string());
        // The rendition above is always grammatical; the fallback is
        // unreachable.
        text.parse::<F>().unwrap_or_else(|_| F::from_bits64(0))
    };
    // Negating (rather than parsing a sign) preserves a signed zero.
    if number.is_negative { -value } else { value }
}

#[cfg(test)]
mod tests {
    use numera_format::NumberFormat;
    use pretty_assertions::assert_eq;

    use crate::buffer::{NumberBuffer, NumberKind, F64_CAPACITY, I32_CAPACITY, I64_CAPACITY};
    use crate::scan::try_scan_number;
    use crate::styles::NumberStyles;

    use super::*;

    fn scan_int<const CAP: usize>(text: &str) -> NumberBuffer<CAP> {
        try_scan_number(
            text,
            NumberStyles::NUMBER,
            &NumberFormat::INVARIANT,
            NumberKind::Integer,
        )
        .unwrap()
    }

    fn scan_float(text: &str) -> NumberBuffer<F64_CAPACITY> {
        try_scan_number(
            text,
            NumberStyles::FLOAT,
            &NumberFormat::INVARIANT,
            NumberKind::FloatingPoint,
        )
        .unwrap()
    }

    // === Signed ===

    #[test]
    fn i32_range_boundaries() {
        assert_eq!(number_to_i32(&scan_int::<I32_CAPACITY>("2147483647")), Some(i32::MAX));
        assert_eq!(number_to_i32(&scan_int::<I32_CAPACITY>("-2147483648")), Some(i32::MIN));
        assert_eq!(number_to_i32(&scan_int::<I32_CAPACITY>("2147483648")), None);
        assert_eq!(number_to_i32(&scan_int::<I32_CAPACITY>("-2147483649")), None);
    }

    #[test]
    fn i64_range_boundaries() {
        assert_eq!(
            number_to_i64(&scan_int::<I64_CAPACITY>("9223372036854775807")),
            Some(i64::MAX)
        );
        assert_eq!(
            number_to_i64(&scan_int::<I64_CAPACITY>("-9223372036854775808")),
            Some(i64::MIN)
        );
        assert_eq!(
            number_to_i64(&scan_int::<I64_CAPACITY>("9223372036854775808")),
            None
        );
    }

    #[test]
    fn exponent_expands_before_converting() {
        assert_eq!(number_to_i32(&scan_int::<I32_CAPACITY>("1e2")), Some(100));
        assert_eq!(number_to_i32(&scan_int::<I32_CAPACITY>("1e10")), None);
    }

    #[test]
    fn fractional_digits_do_not_fit_an_integer() {
        // Grammar accepts "1.5"; the conversion is what rejects it.
        assert_eq!(number_to_i32(&scan_int::<I32_CAPACITY>("1.5")), None);
        // A fraction that is all zeros converts cleanly.
        assert_eq!(number_to_i32(&scan_int::<I32_CAPACITY>("1.0")), Some(1));
        assert_eq!(number_to_i32(&scan_int::<I32_CAPACITY>("-0")), Some(0));
    }

    // === Unsigned ===

    #[test]
    fn u32_range_boundaries() {
        assert_eq!(number_to_u32(&scan_int::<I32_CAPACITY>("4294967295")), Some(u32::MAX));
        assert_eq!(number_to_u32(&scan_int::<I32_CAPACITY>("4294967296")), None);
        assert_eq!(number_to_u32(&scan_int::<I32_CAPACITY>("-1")), None);
        assert_eq!(number_to_u32(&scan_int::<I32_CAPACITY>("-0")), Some(0));
    }

    #[test]
    fn u64_range_boundaries() {
        assert_eq!(
            number_to_u64(&scan_int::<20>("18446744073709551615")),
            Some(u64::MAX)
        );
        assert_eq!(number_to_u64(&scan_int::<20>("18446744073709551616")), None);
    }

    // === Floats ===

    #[test]
    fn float_values_round_correctly() {
        let value: f64 = number_to_float(&scan_float("1.5"));
        assert_eq!(value, 1.5);
        let value: f64 = number_to_float(&scan_float("-0.25e2"));
        assert_eq!(value, -25.0);
        let value: f32 = number_to_float(&scan_float("3.14159"));
        assert_eq!(value, 3.14159_f32);
    }

    #[test]
    fn signed_zero_survives() {
        let value: f64 = number_to_float(&scan_float("-0.0"));
        assert_eq!(value, 0.0);
        assert!(value.is_sign_negative());
    }

    #[test]
    fn out_of_range_exponents_saturate() {
        let value: f64 = number_to_float(&scan_float("1e2000"));
        assert_eq!(value, f64::INFINITY);
        let value: f64 = number_to_float(&scan_float("-1e2000"));
        assert_eq!(value, f64::NEG_INFINITY);
        let value: f64 = number_to_float(&scan_float("1e-2000"));
        assert_eq!(value, 0.0);
        let value: f32 = number_to_float(&scan_float("1e39"));
        assert_eq!(value, f32::INFINITY);
        let value: f32 = number_to_float(&scan_float("1e-46"));
        assert_eq!(value, 0.0);
    }

    #[test]
    fn long_inputs_keep_the_sticky_digit() {
        // 768 significant digits fit exactly; the 769th forces the tail.
        let text = "1".repeat(769);
        let number = scan_float(&text);
        assert!(number.has_nonzero_tail);
        let expected: f64 = text.parse().unwrap();
        let value: f64 = number_to_float(&number);
        assert_eq!(value, expected);
    }
}
