//! Fixed-capacity digit buffers filled by the scanners and consumed by the
//! converters.
//!
//! A buffer is allocated empty with a capacity chosen per target type,
//! filled exactly once by one scanner pass, moved into exactly one
//! converter, then discarded. Digits beyond capacity are not stored; their
//! non-zero-ness is recorded in `has_nonzero_tail`, which is what keeps
//! round-to-nearest-even exact at the capacity boundary.

/// Stored significant digits for each decimal target. The float capacities
/// are the maximum digit counts that can influence the rounded result
/// (767 for `f64`, 112 for `f32`) plus one rounding digit; anything past
/// them only matters as a sticky bit.
pub(crate) const I32_CAPACITY: usize = 10;
pub(crate) const I64_CAPACITY: usize = 19;
pub(crate) const U32_CAPACITY: usize = 10;
pub(crate) const U64_CAPACITY: usize = 20;
pub(crate) const F32_CAPACITY: usize = 113;
pub(crate) const F64_CAPACITY: usize = 768;

/// Stored hex significand digits per part for each float target: enough to
/// cover the binary significand (53 / 24 bits) plus one rounding digit.
pub(crate) const F32_HEX_CAPACITY: usize = 7;
pub(crate) const F64_HEX_CAPACITY: usize = 15;

/// Verbatim binary-exponent digits kept for a hex float. Twenty significant
/// decimal digits are already far past the representable exponent range;
/// beyond that the scanner only records saturation.
pub(crate) const HEX_EXPONENT_CAPACITY: usize = 20;

/// What the digit buffer is destined for. Integer scans do not count
/// trailing zeros as significant; floating-point scans do (and trim them
/// afterwards).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum NumberKind {
    Integer,
    FloatingPoint,
}

/// Normalized decimal scan result: sign, significant digits (ASCII, no
/// sign, no leading zeros), and the power-of-ten position of the decimal
/// point relative to the first stored digit.
#[derive(Clone, Debug)]
pub(crate) struct NumberBuffer<const CAP: usize> {
    pub(crate) kind: NumberKind,
    pub(crate) is_negative: bool,
    pub(crate) has_nonzero_tail: bool,
    pub(crate) scale: i32,
    /// Number of significant stored digits. Always `<= CAP`.
    pub(crate) count: usize,
    pub(crate) digits: [u8; CAP],
}

impl<const CAP: usize> NumberBuffer<CAP> {
    pub(crate) fn new(kind: NumberKind) -> Self {
        Self {
            kind,
            is_negative: false,
            has_nonzero_tail: false,
            scale: 0,
            count: 0,
            digits: [0; CAP],
        }
    }

    /// The stored significant digits, as ASCII bytes.
    #[inline]
    pub(crate) fn digits(&self) -> &[u8] {
        &self.digits[..self.count]
    }
}

/// Hex-float scan result. Significand digits (values `0..=15`, leading
/// zeros skipped) are split around the hex point into integer and decimal
/// sub-buffers; `scale` is the power-of-16 position of the point relative
/// to the first stored digit, and keeps counting integer-part digits even
/// after the sub-buffer fills. The binary exponent is kept as verbatim
/// decimal digits because its magnitude may exceed any machine integer.
#[derive(Clone, Debug)]
pub(crate) struct HexFloatBuffer<const CAP: usize> {
    pub(crate) is_negative: bool,
    pub(crate) has_nonzero_tail: bool,
    pub(crate) scale: i32,
    pub(crate) integer: [u8; CAP],
    pub(crate) integer_count: usize,
    pub(crate) decimal: [u8; CAP],
    pub(crate) decimal_count: usize,
    /// Significant exponent digits (ASCII), sign stripped.
    pub(crate) exponent: [u8; HEX_EXPONENT_CAPACITY],
    pub(crate) exponent_count: usize,
    pub(crate) exponent_is_negative: bool,
    /// More significant exponent digits arrived than fit; the magnitude is
    /// far outside any representable range either way.
    pub(crate) exponent_saturated: bool,
}

impl<const CAP: usize> HexFloatBuffer<CAP> {
    pub(crate) fn new() -> Self {
        Self {
            is_negative: false,
            has_nonzero_tail: false,
            scale: 0,
            integer: [0; CAP],
            integer_count: 0,
            decimal: [0; CAP],
            decimal_count: 0,
            exponent: [0; HEX_EXPONENT_CAPACITY],
            exponent_count: 0,
            exponent_is_negative: false,
            exponent_saturated: false,
        }
    }

    #[inline]
    pub(crate) fn integer_part_is_zero(&self) -> bool {
        self.integer_count == 0
    }

    #[inline]
    pub(crate) fn decimal_part_is_zero(&self) -> bool {
        self.decimal_count == 0
    }

    /// True when every scanned significand digit was zero (leading zeros
    /// are never stored, so an empty significand with no dropped non-zero
    /// digits means the value is exactly zero).
    #[inline]
    pub(crate) fn significand_is_zero(&self) -> bool {
        self.integer_part_is_zero() && self.decimal_part_is_zero() && !self.has_nonzero_tail
    }

    /// Stored significand digits: integer part then decimal part.
    #[inline]
    pub(crate) fn significand(&self) -> impl Iterator<Item = u8> + '_ {
        self.integer[..self.integer_count]
            .iter()
            .chain(&self.decimal[..self.decimal_count])
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_buffer_starts_empty() {
        let buffer = NumberBuffer::<I32_CAPACITY>::new(NumberKind::Integer);
        assert_eq!(buffer.count, 0);
        assert_eq!(buffer.scale, 0);
        assert!(buffer.digits().is_empty());
        assert!(!buffer.is_negative);
        assert!(!buffer.has_nonzero_tail);
    }

    #[test]
    fn hex_buffer_zero_detection() {
        let mut buffer = HexFloatBuffer::<F64_HEX_CAPACITY>::new();
        assert!(buffer.significand_is_zero());

        buffer.decimal[0] = 0x8;
        buffer.decimal_count = 1;
        assert!(buffer.integer_part_is_zero());
        assert!(!buffer.significand_is_zero());
        assert_eq!(buffer.significand().collect::<Vec<_>>(), vec![0x8]);
    }

    #[test]
    fn hex_buffer_sticky_tail_defeats_zero_detection() {
        let mut buffer = HexFloatBuffer::<F32_HEX_CAPACITY>::new();
        buffer.has_nonzero_tail = true;
        assert!(!buffer.significand_is_zero());
    }
}
