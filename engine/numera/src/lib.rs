//! Style-driven text-to-number parsing with runtime-compatible semantics.
//!
//! The engine turns text into `i32`/`i64`/`u32`/`u64`/`f32`/`f64` under an
//! explicit grammar: a [`NumberStyles`] flag set says which optional syntax
//! elements (whitespace, signs, separators, exponents, hex digits, ...) are
//! accepted, and a [`NumberFormat`] snapshot says which strings play each
//! role. Results are bit-for-bit deterministic: the same text, styles, and
//! format always produce the same value, including correctly rounded floats
//! at every digit count.
//!
//! Two surfaces per target type: `try_parse_*` reports a tri-state
//! [`ParsingStatus`] (format failure vs. out-of-range are distinct) and
//! never panics; `parse_*` returns a descriptive [`ParseError`].
//!
//! ```
//! use numera::{parse_i32, try_parse_f64, NumberFormat, NumberStyles};
//!
//! let fmt = NumberFormat::INVARIANT;
//! assert_eq!(parse_i32("1,234", NumberStyles::NUMBER, &fmt), Ok(1234));
//!
//! let (status, value) = try_parse_f64("1.5e3", NumberStyles::FLOAT, &fmt);
//! assert!(status.is_ok());
//! assert_eq!(value, 1500.0);
//! ```
//!
//! Internally a call routes through one of three scanners (the general
//! digit-buffer scanner, the hex-float scanner, or a restricted-style
//! integer fast path) and one converter; scanning and converting never
//! allocate except for the final decimal-to-binary rendition.

#![cfg_attr(test, allow(clippy::unwrap_used))]

mod buffer;
mod convert;
mod cursor;
mod error;
mod fast_path;
mod hex_float;
mod parse;
mod raw_float;
mod scan;
mod status;
mod styles;

pub use numera_format::NumberFormat;

pub use crate::error::{InvalidStyleError, ParseError, TargetType};
pub use crate::parse::{
    parse_f32, parse_f64, parse_i32, parse_i64, parse_u32, parse_u64, try_parse_f32,
    try_parse_f64, try_parse_i32, try_parse_i64, try_parse_u32, try_parse_u64,
};
pub use crate::status::ParsingStatus;
pub use crate::styles::NumberStyles;
