//! Bit-level description of the binary floating-point targets, plus the
//! shared round-to-nearest-even assembler the hex-float converter feeds.
//!
//! The decimal converter never touches these bit constants (it delegates
//! the final rounding to the standard library's correctly-rounded decimal
//! parser); they exist for the hex pipeline, where the significand is
//! already binary and the rounding must be performed here.

use std::ops::Neg;
use std::str::FromStr;

/// A binary floating-point target the converters can produce.
///
/// `MANTISSA_BITS` counts the explicit (stored) fraction bits; the full
/// precision is one more. The exponent bounds are for the unbiased
/// power-of-two exponent of a normal value. The decimal-exponent bounds
/// bracket the representable range in powers of ten and drive the
/// zero/infinity shortcuts.
pub(crate) trait RawFloat: Copy + PartialEq + Neg<Output = Self> + FromStr {
    const MANTISSA_BITS: i64;
    const MAX_EXPONENT: i64;
    const MIN_EXPONENT: i64;
    const EXPONENT_BIAS: i64;
    /// Bit pattern of positive infinity, widened to `u64`.
    const INFINITY_BITS: u64;
    /// Any decimal exponent below this yields zero even with a full
    /// significand.
    const MIN_DECIMAL_EXPONENT: i32;
    /// Any decimal exponent above this yields infinity.
    const MAX_DECIMAL_EXPONENT: i32;

    /// Reinterpret the low bits of `bits` as this type.
    fn from_bits64(bits: u64) -> Self;

    fn infinity() -> Self;

    fn nan() -> Self;
}

impl RawFloat for f64 {
    const MANTISSA_BITS: i64 = 52;
    const MAX_EXPONENT: i64 = 1023;
    const MIN_EXPONENT: i64 = -1022;
    const EXPONENT_BIAS: i64 = 1023;
    const INFINITY_BITS: u64 = 0x7FF0_0000_0000_0000;
    const MIN_DECIMAL_EXPONENT: i32 = -324;
    const MAX_DECIMAL_EXPONENT: i32 = 309;

    #[inline]
    fn from_bits64(bits: u64) -> Self {
        f64::from_bits(bits)
    }

    #[inline]
    fn infinity() -> Self {
        f64::INFINITY
    }

    #[inline]
    fn nan() -> Self {
        f64::NAN
    }
}

impl RawFloat for f32 {
    const MANTISSA_BITS: i64 = 23;
    const MAX_EXPONENT: i64 = 127;
    const MIN_EXPONENT: i64 = -126;
    const EXPONENT_BIAS: i64 = 127;
    const INFINITY_BITS: u64 = 0x7F80_0000;
    const MIN_DECIMAL_EXPONENT: i32 = -45;
    const MAX_DECIMAL_EXPONENT: i32 = 39;

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn from_bits64(bits: u64) -> Self {
        f32::from_bits(bits as u32)
    }

    #[inline]
    fn infinity() -> Self {
        f32::INFINITY
    }

    #[inline]
    fn nan() -> Self {
        f32::NAN
    }
}

/// Assemble the non-negative bit pattern for `significand * 2^exponent`,
/// rounding to nearest with ties to even. `sticky` records that non-zero
/// bits below the significand were already discarded upstream.
///
/// Handles normals, subnormals, underflow to zero, and overflow to
/// infinity. The caller applies the sign by negating the finished value.
#[allow(clippy::cast_sign_loss)]
pub(crate) fn assemble_bits<F: RawFloat>(significand: u64, exponent: i64, sticky: bool) -> u64 {
    if significand == 0 {
        return 0;
    }
    let nbits = 64 - i64::from(significand.leading_zeros());
    // Unbiased exponent of the leading significand bit.
    let mut exp = exponent + nbits - 1;
    if exp > F::MAX_EXPONENT {
        return F::INFINITY_BITS;
    }

    let precision = F::MANTISSA_BITS + 1;
    let subnormal = exp < F::MIN_EXPONENT;
    // A subnormal keeps fewer bits the further below MIN_EXPONENT it sits;
    // past `precision` bits of loss the value is all rounding.
    let effective = if subnormal {
        precision - (F::MIN_EXPONENT - exp)
    } else {
        precision
    };

    let drop = nbits - effective;
    let mut mantissa;
    let round;
    let mut sticky = sticky;
    if drop <= 0 {
        mantissa = significand << ((-drop) as u64);
        round = false;
    } else if drop >= 64 {
        mantissa = 0;
        if drop == 64 {
            round = significand >> 63 == 1;
            sticky |= significand << 1 != 0;
        } else {
            round = false;
            sticky = true;
        }
    } else {
        mantissa = significand >> drop;
        round = (significand >> (drop - 1)) & 1 == 1;
        sticky |= significand & ((1 << (drop - 1)) - 1) != 0;
    }
    if round && (sticky || mantissa & 1 == 1) {
        mantissa += 1;
    }

    if subnormal {
        // A carry up to `1 << MANTISSA_BITS` lands exactly on the smallest
        // normal encoding, so the mantissa is the complete bit pattern.
        return mantissa;
    }
    if mantissa == 1 << precision {
        mantissa >>= 1;
        exp += 1;
        if exp > F::MAX_EXPONENT {
            return F::INFINITY_BITS;
        }
    }
    ((exp + F::EXPONENT_BIAS) as u64) << (F::MANTISSA_BITS as u64)
        | (mantissa & ((1 << F::MANTISSA_BITS) - 1))
}
