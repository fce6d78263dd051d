//! The style grammar: which optional syntax elements a scan accepts.
//!
//! `NumberStyles` is pure data. Scanners test individual flags; the named
//! composites cover the grammars callers actually ask for (`INTEGER`,
//! `FLOAT`, `NUMBER`, `CURRENCY`, the hex pair, and `ANY`). Validation
//! happens once per entry point, before any scanning: hex parsing has its
//! own grammar and only tolerates the small flag subsets below.

use bitflags::bitflags;

use crate::error::InvalidStyleError;

bitflags! {
    /// Grammar elements a parse is allowed to consume.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct NumberStyles: u32 {
        /// Whitespace before the number.
        const ALLOW_LEADING_WHITE = 1 << 0;
        /// Whitespace after the number.
        const ALLOW_TRAILING_WHITE = 1 << 1;
        /// A sign before the digits.
        const ALLOW_LEADING_SIGN = 1 << 2;
        /// A sign after the digits.
        const ALLOW_TRAILING_SIGN = 1 << 3;
        /// `(123)` as the negative form of `123`.
        const ALLOW_PARENTHESES = 1 << 4;
        /// The decimal separator.
        const ALLOW_DECIMAL_POINT = 1 << 5;
        /// Group separators between digits.
        const ALLOW_THOUSANDS = 1 << 6;
        /// A decimal exponent (`e`/`E`), or the binary exponent (`p`/`P`)
        /// in the hex-float grammar.
        const ALLOW_EXPONENT = 1 << 7;
        /// The currency symbol, before or after the number.
        const ALLOW_CURRENCY_SYMBOL = 1 << 8;
        /// Hexadecimal digits (and an optional `0x` prefix).
        const ALLOW_HEX_SPECIFIER = 1 << 9;
        /// Literal type suffixes (`f F d D m M`, `l L`, `u U`).
        const ALLOW_TYPE_SPECIFIER = 1 << 10;
    }
}

impl NumberStyles {
    /// No optional grammar at all: bare digits only.
    pub const NONE: Self = Self::empty();

    /// Plain integer: surrounding whitespace and a leading sign.
    pub const INTEGER: Self = Self::from_bits_truncate(
        Self::ALLOW_LEADING_WHITE.bits()
            | Self::ALLOW_TRAILING_WHITE.bits()
            | Self::ALLOW_LEADING_SIGN.bits(),
    );

    /// [`INTEGER`](Self::INTEGER) plus decimal point and exponent.
    pub const FLOAT: Self = Self::from_bits_truncate(
        Self::INTEGER.bits() | Self::ALLOW_DECIMAL_POINT.bits() | Self::ALLOW_EXPONENT.bits(),
    );

    /// [`FLOAT`](Self::FLOAT) plus thousands separators, a trailing sign,
    /// and parentheses.
    pub const NUMBER: Self = Self::from_bits_truncate(
        Self::FLOAT.bits()
            | Self::ALLOW_THOUSANDS.bits()
            | Self::ALLOW_TRAILING_SIGN.bits()
            | Self::ALLOW_PARENTHESES.bits(),
    );

    /// Hex integer: surrounding whitespace and hex digits.
    pub const HEX_NUMBER: Self = Self::from_bits_truncate(
        Self::ALLOW_LEADING_WHITE.bits()
            | Self::ALLOW_TRAILING_WHITE.bits()
            | Self::ALLOW_HEX_SPECIFIER.bits(),
    );

    /// Hex significand with a binary (`p`) exponent. The leading sign and
    /// the hex point are intrinsic to this grammar and need no flags.
    pub const HEX_FLOAT: Self = Self::from_bits_truncate(
        Self::ALLOW_LEADING_WHITE.bits()
            | Self::ALLOW_TRAILING_WHITE.bits()
            | Self::ALLOW_TRAILING_SIGN.bits()
            | Self::ALLOW_PARENTHESES.bits()
            | Self::ALLOW_HEX_SPECIFIER.bits()
            | Self::ALLOW_EXPONENT.bits(),
    );

    /// [`NUMBER`](Self::NUMBER) plus the currency symbol.
    pub const CURRENCY: Self =
        Self::from_bits_truncate(Self::NUMBER.bits() | Self::ALLOW_CURRENCY_SYMBOL.bits());

    /// Everything except hex.
    pub const ANY: Self =
        Self::from_bits_truncate(Self::CURRENCY.bits() | Self::ALLOW_TYPE_SPECIFIER.bits());

    /// Check a style set for an integer target.
    ///
    /// Hex parsing uses its own grammar: when `ALLOW_HEX_SPECIFIER` is set,
    /// only the [`HEX_NUMBER`](Self::HEX_NUMBER) flags plus the type suffix
    /// are tolerated.
    pub(crate) fn validate_for_integer(self) -> Result<(), InvalidStyleError> {
        self.validate_defined()?;
        if self.contains(Self::ALLOW_HEX_SPECIFIER)
            && !(self & !(Self::HEX_NUMBER | Self::ALLOW_TYPE_SPECIFIER)).is_empty()
        {
            return Err(InvalidStyleError::new(
                self,
                "hex integer parsing only combines with whitespace and type-suffix styles",
            ));
        }
        Ok(())
    }

    /// Check a style set for a floating-point target.
    ///
    /// When `ALLOW_HEX_SPECIFIER` is set, only the
    /// [`HEX_FLOAT`](Self::HEX_FLOAT) flags plus the (redundant) leading-sign
    /// and decimal-point bits are tolerated.
    pub(crate) fn validate_for_float(self) -> Result<(), InvalidStyleError> {
        self.validate_defined()?;
        if self.contains(Self::ALLOW_HEX_SPECIFIER)
            && !(self & !(Self::HEX_FLOAT | Self::ALLOW_LEADING_SIGN | Self::ALLOW_DECIMAL_POINT))
                .is_empty()
        {
            return Err(InvalidStyleError::new(
                self,
                "hex float parsing does not combine with thousands, currency, or suffix styles",
            ));
        }
        Ok(())
    }

    fn validate_defined(self) -> Result<(), InvalidStyleError> {
        if Self::from_bits(self.bits()).is_none() {
            return Err(InvalidStyleError::new(self, "undefined style bits"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn composites_layer_on_each_other() {
        assert_eq!(NumberStyles::INTEGER.bits(), 0x7);
        assert_eq!(NumberStyles::FLOAT.bits(), 0xa7);
        assert_eq!(NumberStyles::NUMBER.bits(), 0xff);
        assert_eq!(NumberStyles::HEX_NUMBER.bits(), 0x203);
        assert!(NumberStyles::CURRENCY.contains(NumberStyles::NUMBER));
        assert!(NumberStyles::ANY.contains(NumberStyles::CURRENCY));
        assert!(!NumberStyles::ANY.contains(NumberStyles::ALLOW_HEX_SPECIFIER));
    }

    #[test]
    fn hex_float_carries_no_sign_or_point_flag() {
        assert!(!NumberStyles::HEX_FLOAT.contains(NumberStyles::ALLOW_LEADING_SIGN));
        assert!(!NumberStyles::HEX_FLOAT.contains(NumberStyles::ALLOW_DECIMAL_POINT));
        assert!(NumberStyles::HEX_FLOAT.contains(NumberStyles::ALLOW_EXPONENT));
    }

    #[test]
    fn integer_validation_rejects_hex_mixed_with_decimal_styles() {
        assert!(NumberStyles::HEX_NUMBER.validate_for_integer().is_ok());
        assert!((NumberStyles::HEX_NUMBER | NumberStyles::ALLOW_TYPE_SPECIFIER)
            .validate_for_integer()
            .is_ok());
        assert!((NumberStyles::HEX_NUMBER | NumberStyles::ALLOW_THOUSANDS)
            .validate_for_integer()
            .is_err());
        assert!((NumberStyles::ALLOW_HEX_SPECIFIER | NumberStyles::ALLOW_DECIMAL_POINT)
            .validate_for_integer()
            .is_err());
        assert!(NumberStyles::ANY.validate_for_integer().is_ok());
    }

    #[test]
    fn float_validation_scopes_hex_to_the_hex_float_grammar() {
        assert!(NumberStyles::HEX_FLOAT.validate_for_float().is_ok());
        assert!(
            (NumberStyles::HEX_FLOAT | NumberStyles::ALLOW_LEADING_SIGN)
                .validate_for_float()
                .is_ok()
        );
        assert!(
            (NumberStyles::HEX_FLOAT | NumberStyles::ALLOW_CURRENCY_SYMBOL)
                .validate_for_float()
                .is_err()
        );
        assert!(NumberStyles::ANY.validate_for_float().is_ok());
    }

    #[test]
    fn undefined_bits_are_rejected() {
        let bogus = NumberStyles::from_bits_retain(1 << 20);
        assert!(bogus.validate_for_integer().is_err());
        assert!(bogus.validate_for_float().is_err());
    }
}
