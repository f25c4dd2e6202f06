//! Entry points: classify a numeric literal, or parse it into a fixed type.
//!
//! Every entry point tries an exact fast path first and moves strictly
//! forward to the next tier when it cannot guarantee the exact result:
//!
//! 1. a plain digit accumulator for integer literals,
//! 2. the decimal scanner with an exact reconstruction,
//! 3. the correctly rounded fallback parser (floats only).
//!
//! A literal that the scanner can prove malformed is rejected without
//! consulting the fallback, which would reject it just the same.

use crate::error::{Error, Result, Target};
use crate::fallback;
use crate::float::{self, Float};
use crate::integer::{accumulate_u64, apply_sign, reconstruct_i64, reconstruct_u64};
use crate::number::ParsedValue;
use crate::profile::PrecisionProfile;
use crate::scan::scan_decimal;

/// Parses one numeric literal, keeping integers exact.
///
/// - `-` followed by digits only gives `ParsedValue::Int`, or a range error
///   if the value is below `i64::MIN`.
/// - Digits only give `ParsedValue::Uint`, or `ParsedValue::Int` when
///   `prefer_signed_int` is set (a range error above `i64::MAX`).
/// - Anything else, including integers that overflow 64 bits, is parsed as
///   `ParsedValue::Float`.
///
/// The literal must already be isolated from its surroundings: no
/// whitespace, no delimiters.
///
/// ```
/// use json_number::{parse_number, ParsedValue};
///
/// assert_eq!(parse_number(b"123", false)?, ParsedValue::Uint(123));
/// assert_eq!(parse_number(b"123", true)?, ParsedValue::Int(123));
/// assert_eq!(parse_number(b"-123", false)?, ParsedValue::Int(-123));
/// assert_eq!(parse_number(b"123.0", false)?, ParsedValue::Float(123.0));
/// assert!(parse_number(b"1.2.3", false).is_err());
/// # Ok::<(), json_number::Error>(())
/// ```
pub fn parse_number(bytes: &[u8], prefer_signed_int: bool) -> Result<ParsedValue> {
    if let Some(digits) = bytes.strip_prefix(b"-") {
        if let Some(magnitude) = accumulate_u64(digits) {
            // A negative integer below i64::MIN is not a float in disguise.
            return match apply_sign(magnitude, true) {
                Some(i) => Ok(ParsedValue::Int(i)),
                None => Err(Error::out_of_range(bytes, Target::Number)),
            };
        }
    } else if let Some(u) = accumulate_u64(bytes) {
        if !prefer_signed_int {
            return Ok(ParsedValue::Uint(u));
        }
        return match apply_sign(u, false) {
            Some(i) => Ok(ParsedValue::Int(i)),
            None => Err(Error::out_of_range(bytes, Target::Number)),
        };
    }

    parse_float::<f64>(bytes, Target::Number).map(ParsedValue::Float)
}

/// Parses a numeric literal as an `f64`.
///
/// The result is always the correctly rounded value of the literal. Exactly
/// representable literals such as `1.25` or `0.070` skip the general parser.
///
/// ```
/// assert_eq!(json_number::parse_f64(b"0.070")?, 0.07);
/// assert_eq!(json_number::parse_f64(b"-1e-5")?, -0.00001);
/// # Ok::<(), json_number::Error>(())
/// ```
pub fn parse_f64(bytes: &[u8]) -> Result<f64> {
    parse_float(bytes, Target::F64)
}

/// Parses a numeric literal as an `f32`, rounding directly to single
/// precision.
pub fn parse_f32(bytes: &[u8]) -> Result<f32> {
    parse_float(bytes, Target::F32)
}

/// Parses a numeric literal as a `u64`.
///
/// Literals with a fraction or exponent are accepted when their value is an
/// exact integer, so `1e2` and `1.50e1` give 100 and 15 while `1.5` is an
/// error.
pub fn parse_u64(bytes: &[u8]) -> Result<u64> {
    if bytes.first() == Some(&b'-') {
        return Err(Error::invalid_number(bytes, Target::U64));
    }
    if let Some(u) = accumulate_u64(bytes) {
        return Ok(u);
    }

    let scan = scan_decimal(bytes, &PrecisionProfile::U64);
    if scan.malformed {
        return Err(Error::invalid_number(bytes, Target::U64));
    }
    if !scan.exact {
        return Err(Error::out_of_range(bytes, Target::U64));
    }
    reconstruct_u64(&scan).map_err(|code| Error::number(code, bytes, Target::U64))
}

/// Parses a numeric literal as an `i64`.
///
/// Like [`parse_u64`], literals with a fraction or exponent are accepted when
/// their value is an exact integer.
pub fn parse_i64(bytes: &[u8]) -> Result<i64> {
    let (negative, digits) = match bytes.strip_prefix(b"-") {
        Some(digits) => (true, digits),
        None => (false, bytes),
    };
    if let Some(magnitude) = accumulate_u64(digits) {
        return apply_sign(magnitude, negative)
            .ok_or_else(|| Error::out_of_range(bytes, Target::I64));
    }

    let scan = scan_decimal(bytes, &PrecisionProfile::I64);
    if scan.malformed {
        return Err(Error::invalid_number(bytes, Target::I64));
    }
    if !scan.exact {
        return Err(Error::out_of_range(bytes, Target::I64));
    }
    reconstruct_i64(&scan).map_err(|code| Error::number(code, bytes, Target::I64))
}

fn parse_float<F: Float>(bytes: &[u8], target: Target) -> Result<F> {
    let scan = scan_decimal(bytes, &F::PROFILE);
    if scan.malformed {
        return Err(Error::invalid_number(bytes, target));
    }
    if scan.exact {
        if let Some(value) = float::fast_path::<F>(&scan) {
            return Ok(value);
        }
    }
    fallback::parse_float(bytes, target)
}

/// A reusable number parser carrying the classification policy.
///
/// ```
/// use json_number::{NumberParser, ParsedValue};
///
/// let parser = NumberParser::new().prefer_signed_int(true);
/// assert_eq!(parser.parse(b"42")?, ParsedValue::Int(42));
/// assert!(parser.parse(b"18446744073709551615").is_err());
/// # Ok::<(), json_number::Error>(())
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NumberParser {
    prefer_signed_int: bool,
}

impl NumberParser {
    /// Creates a parser that classifies non-negative integers as
    /// `ParsedValue::Uint`.
    pub const fn new() -> Self {
        NumberParser {
            prefer_signed_int: false,
        }
    }

    /// Classify non-negative integers as `ParsedValue::Int` instead of
    /// `ParsedValue::Uint`, failing for integers above `i64::MAX`.
    #[must_use]
    pub const fn prefer_signed_int(mut self, prefer_signed_int: bool) -> Self {
        self.prefer_signed_int = prefer_signed_int;
        self
    }

    /// Parses one numeric literal under this parser's policy. See
    /// [`parse_number`].
    pub fn parse(&self, bytes: &[u8]) -> Result<ParsedValue> {
        parse_number(bytes, self.prefer_signed_int)
    }
}
