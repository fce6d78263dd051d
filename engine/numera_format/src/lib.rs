//! Separator, sign, and symbol tables consumed by the numera parsing engine.
//!
//! A [`NumberFormat`] is an immutable per-locale snapshot: which strings act
//! as the decimal point, group separator, currency symbol, signs, and the
//! textual NaN/Infinity symbols. The engine never mutates a snapshot; callers
//! build one up front (usually starting from [`NumberFormat::INVARIANT`]) and
//! share it freely across threads.
//!
//! This crate is standalone so that tools can describe formats without
//! pulling in the engine.

mod format;

pub use format::NumberFormat;
