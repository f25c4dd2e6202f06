//! Correctly rounded parsing for every literal the fast path declines.
//!
//! This is the standard library's float parser behind the crate's error
//! type. It accepts a wider grammar than the fast path (`inf`, a leading
//! `+`, exponents of any length) but any literal both can parse yields the
//! same bits from either.

use crate::error::{Error, Result, Target};
use crate::float::Float;
use core::str;

pub(crate) fn parse_float<F: Float>(bytes: &[u8], target: Target) -> Result<F> {
    let s = match str::from_utf8(bytes) {
        Ok(s) => s,
        Err(_) => return Err(Error::invalid_number(bytes, target)),
    };
    let value: F = match s.parse() {
        Ok(value) => value,
        Err(_) => return Err(Error::invalid_number(bytes, target)),
    };
    if value.is_finite() {
        Ok(value)
    } else if is_numeric_literal(bytes) {
        // A finite literal that rounds to infinity.
        Err(Error::out_of_range(bytes, target))
    } else {
        // `inf`, `nan` and friends are not numbers here.
        Err(Error::invalid_number(bytes, target))
    }
}

fn is_numeric_literal(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .all(|&b| matches!(b, b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-'))
}
