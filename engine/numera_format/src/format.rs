//! The per-locale format snapshot.

use std::borrow::Cow;

/// Separator, sign, and symbol strings for one formatting locale.
///
/// Values are snapshots: once built, a `NumberFormat` never changes, so a
/// single instance can back any number of concurrent parse calls. All string
/// fields are free-form (multi-character separators are legal); the engine
/// matches them by ordinal prefix comparison.
///
/// `negative_pattern` is the locale's negative-number layout index (0..=4):
/// `(n)`, `-n`, `- n`, `n-`, `n -`. Only pattern 2 ("sign, space, number")
/// changes parsing behavior: it permits whitespace between a leading sign and
/// the digits.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NumberFormat {
    decimal_separator: Cow<'static, str>,
    group_separator: Cow<'static, str>,
    currency_symbol: Cow<'static, str>,
    currency_decimal_separator: Cow<'static, str>,
    currency_group_separator: Cow<'static, str>,
    positive_sign: Cow<'static, str>,
    negative_sign: Cow<'static, str>,
    positive_infinity_symbol: Cow<'static, str>,
    negative_infinity_symbol: Cow<'static, str>,
    nan_symbol: Cow<'static, str>,
    negative_pattern: u8,
    allow_hyphen: bool,
}

impl NumberFormat {
    /// The culture-independent snapshot: `.` decimal point, `,` group
    /// separator, `¤` currency symbol, ASCII signs, English special symbols.
    pub const INVARIANT: NumberFormat = NumberFormat {
        decimal_separator: Cow::Borrowed("."),
        group_separator: Cow::Borrowed(","),
        currency_symbol: Cow::Borrowed("\u{a4}"),
        currency_decimal_separator: Cow::Borrowed("."),
        currency_group_separator: Cow::Borrowed(","),
        positive_sign: Cow::Borrowed("+"),
        negative_sign: Cow::Borrowed("-"),
        positive_infinity_symbol: Cow::Borrowed("Infinity"),
        negative_infinity_symbol: Cow::Borrowed("-Infinity"),
        nan_symbol: Cow::Borrowed("NaN"),
        negative_pattern: 1,
        allow_hyphen: false,
    };

    // === Accessors ===

    #[inline]
    pub fn decimal_separator(&self) -> &str {
        &self.decimal_separator
    }

    #[inline]
    pub fn group_separator(&self) -> &str {
        &self.group_separator
    }

    #[inline]
    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    #[inline]
    pub fn currency_decimal_separator(&self) -> &str {
        &self.currency_decimal_separator
    }

    #[inline]
    pub fn currency_group_separator(&self) -> &str {
        &self.currency_group_separator
    }

    #[inline]
    pub fn positive_sign(&self) -> &str {
        &self.positive_sign
    }

    #[inline]
    pub fn negative_sign(&self) -> &str {
        &self.negative_sign
    }

    #[inline]
    pub fn positive_infinity_symbol(&self) -> &str {
        &self.positive_infinity_symbol
    }

    #[inline]
    pub fn negative_infinity_symbol(&self) -> &str {
        &self.negative_infinity_symbol
    }

    #[inline]
    pub fn nan_symbol(&self) -> &str {
        &self.nan_symbol
    }

    #[inline]
    pub fn negative_pattern(&self) -> u8 {
        self.negative_pattern
    }

    /// Whether a bare ASCII `-` is accepted as a negative sign even when the
    /// configured negative sign is a different string (locales whose sign is
    /// U+2212 MINUS SIGN enable this so keyboard input still parses).
    #[inline]
    pub fn allow_hyphen(&self) -> bool {
        self.allow_hyphen
    }

    /// True when the signs are exactly the invariant `+`/`-`, which lets the
    /// integer fast paths match signs as single bytes.
    #[inline]
    pub fn has_invariant_signs(&self) -> bool {
        self.positive_sign == "+" && self.negative_sign == "-"
    }

    // === Builders ===

    #[must_use]
    pub fn with_decimal_separator(mut self, s: impl Into<Cow<'static, str>>) -> Self {
        self.decimal_separator = s.into();
        self
    }

    #[must_use]
    pub fn with_group_separator(mut self, s: impl Into<Cow<'static, str>>) -> Self {
        self.group_separator = s.into();
        self
    }

    #[must_use]
    pub fn with_currency_symbol(mut self, s: impl Into<Cow<'static, str>>) -> Self {
        self.currency_symbol = s.into();
        self
    }

    #[must_use]
    pub fn with_currency_decimal_separator(mut self, s: impl Into<Cow<'static, str>>) -> Self {
        self.currency_decimal_separator = s.into();
        self
    }

    #[must_use]
    pub fn with_currency_group_separator(mut self, s: impl Into<Cow<'static, str>>) -> Self {
        self.currency_group_separator = s.into();
        self
    }

    #[must_use]
    pub fn with_positive_sign(mut self, s: impl Into<Cow<'static, str>>) -> Self {
        self.positive_sign = s.into();
        self
    }

    #[must_use]
    pub fn with_negative_sign(mut self, s: impl Into<Cow<'static, str>>) -> Self {
        self.negative_sign = s.into();
        self
    }

    #[must_use]
    pub fn with_positive_infinity_symbol(mut self, s: impl Into<Cow<'static, str>>) -> Self {
        self.positive_infinity_symbol = s.into();
        self
    }

    #[must_use]
    pub fn with_negative_infinity_symbol(mut self, s: impl Into<Cow<'static, str>>) -> Self {
        self.negative_infinity_symbol = s.into();
        self
    }

    #[must_use]
    pub fn with_nan_symbol(mut self, s: impl Into<Cow<'static, str>>) -> Self {
        self.nan_symbol = s.into();
        self
    }

    /// Set the negative-number layout index. Values outside 0..=4 are kept
    /// as-is and simply never match the patterns the engine consults.
    #[must_use]
    pub fn with_negative_pattern(mut self, pattern: u8) -> Self {
        debug_assert!(pattern <= 4, "negative pattern index out of range");
        self.negative_pattern = pattern;
        self
    }

    #[must_use]
    pub fn with_allow_hyphen(mut self, allow: bool) -> Self {
        self.allow_hyphen = allow;
        self
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::INVARIANT
    }
}

#[cfg(test)]
mod tests;
