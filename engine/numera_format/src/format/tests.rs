use pretty_assertions::assert_eq;

use super::*;

// === Invariant Snapshot ===

#[test]
fn invariant_values() {
    let fmt = NumberFormat::INVARIANT;
    assert_eq!(fmt.decimal_separator(), ".");
    assert_eq!(fmt.group_separator(), ",");
    assert_eq!(fmt.currency_symbol(), "\u{a4}");
    assert_eq!(fmt.positive_sign(), "+");
    assert_eq!(fmt.negative_sign(), "-");
    assert_eq!(fmt.positive_infinity_symbol(), "Infinity");
    assert_eq!(fmt.negative_infinity_symbol(), "-Infinity");
    assert_eq!(fmt.nan_symbol(), "NaN");
    assert_eq!(fmt.negative_pattern(), 1);
    assert!(!fmt.allow_hyphen());
}

#[test]
fn default_is_invariant() {
    assert_eq!(NumberFormat::default(), NumberFormat::INVARIANT);
}

#[test]
fn invariant_signs_detected() {
    assert!(NumberFormat::INVARIANT.has_invariant_signs());
}

// === Builders ===

#[test]
fn builders_replace_fields() {
    let fmt = NumberFormat::INVARIANT
        .with_decimal_separator(",")
        .with_group_separator("\u{a0}")
        .with_currency_symbol("\u{20ac}")
        .with_negative_pattern(2);

    assert_eq!(fmt.decimal_separator(), ",");
    assert_eq!(fmt.group_separator(), "\u{a0}");
    assert_eq!(fmt.currency_symbol(), "\u{20ac}");
    assert_eq!(fmt.negative_pattern(), 2);
}

#[test]
fn owned_strings_accepted() {
    let sep = String::from(";");
    let fmt = NumberFormat::INVARIANT.with_decimal_separator(sep);
    assert_eq!(fmt.decimal_separator(), ";");
}

#[test]
fn non_ascii_signs_break_invariant_detection() {
    let fmt = NumberFormat::INVARIANT.with_negative_sign("\u{2212}");
    assert!(!fmt.has_invariant_signs());

    let fmt = fmt.with_allow_hyphen(true);
    assert!(fmt.allow_hyphen());
}

#[test]
fn currency_separators_independent_of_plain() {
    let fmt = NumberFormat::INVARIANT
        .with_currency_decimal_separator(",")
        .with_currency_group_separator(".");

    assert_eq!(fmt.decimal_separator(), ".");
    assert_eq!(fmt.group_separator(), ",");
    assert_eq!(fmt.currency_decimal_separator(), ",");
    assert_eq!(fmt.currency_group_separator(), ".");
}
