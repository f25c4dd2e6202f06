//! 64-bit integer accumulation and the integer reconstructors.

use crate::error::ErrorCode;
use crate::pow10::u64_pow10;
use crate::profile::UINT64_CUTOFF;
use crate::scan::DecimalScan;

/// Accumulates a run of ASCII digits with no sign into a `u64`.
///
/// Returns `None` for an empty slice, for any non-digit byte, and on
/// overflow. Callers fall back to the decimal scanner, which also covers
/// integral literals spelled with a fraction or exponent such as `1e2`.
pub(crate) fn accumulate_u64(bytes: &[u8]) -> Option<u64> {
    if bytes.is_empty() {
        return None;
    }
    let mut n: u64 = 0;
    for &c in bytes {
        if !c.is_ascii_digit() {
            return None;
        }
        // (u64::MAX - 5) * 10 does not overflow cleanly, so check the cutoff
        // before multiplying.
        if n >= UINT64_CUTOFF {
            return None;
        }
        n *= 10;
        let sum = n.wrapping_add(u64::from(c - b'0'));
        if sum < n {
            return None;
        }
        n = sum;
    }
    Some(n)
}

/// Applies a sign to a magnitude, failing if the result leaves the `i64`
/// range. `i64::MIN` has a magnitude one past `i64::MAX`.
#[inline]
pub(crate) fn apply_sign(magnitude: u64, negative: bool) -> Option<i64> {
    if negative {
        if magnitude > i64::MIN.unsigned_abs() {
            None
        } else {
            Some(0i64.wrapping_sub_unsigned(magnitude))
        }
    } else {
        i64::try_from(magnitude).ok()
    }
}

/// Scales the mantissa of an exact scan back to an integer. A fractional
/// remainder is a syntax error for an integer target, a product past
/// `u64::MAX` is a range error.
fn scale_mantissa(scan: &DecimalScan) -> Result<u64, ErrorCode> {
    let scale = scan.scale_exponent;
    if scale < 0 {
        let divisor = u64_pow10(scale.unsigned_abs());
        if scan.mantissa % divisor != 0 {
            return Err(ErrorCode::InvalidNumber);
        }
        Ok(scan.mantissa / divisor)
    } else {
        let multiplier = u64_pow10(scale.unsigned_abs());
        scan.mantissa
            .checked_mul(multiplier)
            .ok_or(ErrorCode::NumberOutOfRange)
    }
}

/// Converts an exact scan into an unsigned integer.
pub(crate) fn reconstruct_u64(scan: &DecimalScan) -> Result<u64, ErrorCode> {
    debug_assert!(scan.exact, "integer reconstruction of an inexact scan");
    let magnitude = scale_mantissa(scan)?;
    if scan.negative && magnitude != 0 {
        return Err(ErrorCode::NumberOutOfRange);
    }
    Ok(magnitude)
}

/// Converts an exact scan into a signed integer.
pub(crate) fn reconstruct_i64(scan: &DecimalScan) -> Result<i64, ErrorCode> {
    debug_assert!(scan.exact, "integer reconstruction of an inexact scan");
    let magnitude = scale_mantissa(scan)?;
    apply_sign(magnitude, scan.negative).ok_or(ErrorCode::NumberOutOfRange)
}
