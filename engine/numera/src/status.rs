//! Tri-state outcome shared by every scan+convert pipeline.

use std::fmt;

/// Outcome of one parse attempt.
///
/// `Failed` means the text did not match the grammar; `Overflow` means the
/// grammar matched but the value exceeds the target type's range. A status is
/// produced exactly once per call and never retried.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[must_use]
pub enum ParsingStatus {
    Ok,
    Failed,
    Overflow,
}

impl ParsingStatus {
    #[inline]
    pub fn is_ok(self) -> bool {
        self == ParsingStatus::Ok
    }
}

impl fmt::Display for ParsingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsingStatus::Ok => write!(f, "ok"),
            ParsingStatus::Failed => write!(f, "failed"),
            ParsingStatus::Overflow => write!(f, "overflow"),
        }
    }
}

/// Internal failure detail threaded from scanners and converters to the
/// public classifiers. Collapses to [`ParsingStatus`] for the `try` surface;
/// the throwing surface keeps the distinction for error messages.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Reject {
    /// Nothing in the input matched the numeric grammar.
    NoNumber,
    /// A number matched, but disallowed characters follow the first
    /// `consumed` bytes.
    Trailing { consumed: usize },
    /// Grammar matched; magnitude exceeds the target range.
    Overflow,
}

impl Reject {
    #[inline]
    pub(crate) fn status(self) -> ParsingStatus {
        match self {
            Reject::Overflow => ParsingStatus::Overflow,
            _ => ParsingStatus::Failed,
        }
    }
}
