//! Errors raised by the throwing (`parse_*`) entry points.
//!
//! The `try_parse_*` surface never constructs these; it collapses every
//! failure into [`ParsingStatus`](crate::ParsingStatus). The throwing
//! surface classifies the internal rejection exactly once, at the boundary.

use std::fmt;

use crate::styles::NumberStyles;

/// Numeric target a parse was directed at. Selects error messages; carries
/// no behavior.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TargetType {
    Int32,
    Int64,
    UInt32,
    UInt64,
    Float32,
    Float64,
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetType::Int32 => "a 32-bit signed integer",
            TargetType::Int64 => "a 64-bit signed integer",
            TargetType::UInt32 => "a 32-bit unsigned integer",
            TargetType::UInt64 => "a 64-bit unsigned integer",
            TargetType::Float32 => "a 32-bit floating-point number",
            TargetType::Float64 => "a 64-bit floating-point number",
        };
        f.write_str(name)
    }
}

/// Why a `parse_*` call failed.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum ParseError {
    /// Nothing in the input matched the numeric grammar.
    #[error("input is not recognizable as {target}")]
    NotANumber { target: TargetType },

    /// A number was recognized, but disallowed characters follow it.
    #[error("invalid characters after {target} at byte offset {at}")]
    TrailingCharacters { target: TargetType, at: usize },

    /// The grammar matched but the magnitude exceeds the target's range.
    #[error("value is out of range for {target}")]
    Overflow { target: TargetType },

    /// The style set was rejected before scanning.
    #[error(transparent)]
    InvalidStyle(#[from] InvalidStyleError),
}

/// A style combination the requested target cannot accept.
///
/// Reported by `parse_*` before any scanning happens; the `try_parse_*`
/// surface reports the same condition as a plain
/// [`Failed`](crate::ParsingStatus::Failed).
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct InvalidStyleError {
    styles: NumberStyles,
    reason: &'static str,
}

impl InvalidStyleError {
    pub(crate) fn new(styles: NumberStyles, reason: &'static str) -> Self {
        Self { styles, reason }
    }

    /// The offending style set.
    pub fn styles(&self) -> NumberStyles {
        self.styles
    }
}

impl fmt::Display for InvalidStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid number styles {:?}: {}", self.styles, self.reason)
    }
}

impl std::error::Error for InvalidStyleError {}
