//! Exact float reconstruction from a scanned decimal.

use crate::pow10::{f32_pow10, f64_pow10};
use crate::profile::PrecisionProfile;
use crate::scan::DecimalScan;
use core::ops::{Div, Mul, Neg};
use core::str::FromStr;

/// Floating-point widths the fast path can produce.
pub(crate) trait Float:
    Copy
    + PartialOrd
    + FromStr
    + Neg<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Exactness limits for this width.
    const PROFILE: PrecisionProfile;

    /// Largest intermediate product that can still be multiplied by
    /// `10^max_exact_pow10` without rounding twice.
    const MAX_EXACT_MULTIPLIER: Self;

    /// Converts a mantissa already known to fit the significand.
    fn from_mantissa(mantissa: u64) -> Self;

    /// Looks up an exact power of ten.
    fn pow10(exponent: u8) -> Self;

    fn is_finite(self) -> bool;
}

impl Float for f32 {
    const PROFILE: PrecisionProfile = PrecisionProfile::F32;
    const MAX_EXACT_MULTIPLIER: f32 = 1e7;

    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn from_mantissa(mantissa: u64) -> f32 {
        mantissa as f32
    }

    #[inline]
    fn pow10(exponent: u8) -> f32 {
        f32_pow10(exponent)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl Float for f64 {
    const PROFILE: PrecisionProfile = PrecisionProfile::F64;
    const MAX_EXACT_MULTIPLIER: f64 = 1e15;

    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn from_mantissa(mantissa: u64) -> f64 {
        mantissa as f64
    }

    #[inline]
    fn pow10(exponent: u8) -> f64 {
        f64_pow10(exponent)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

/// Rebuilds the value of an exact scan with at most two correctly rounded
/// operations.
///
/// Returns `None` when a large positive scale would push the intermediate
/// product past `F::MAX_EXACT_MULTIPLIER`; the caller must then use the
/// fallback parser.
pub(crate) fn fast_path<F: Float>(scan: &DecimalScan) -> Option<F> {
    debug_assert!(scan.exact, "fast path on an inexact scan: {:?}", scan);

    let max_exact = F::PROFILE.max_exact_pow10;
    let scale = scan.scale_exponent;
    let mut value = F::from_mantissa(scan.mantissa);

    if scale < 0 {
        value = value / F::pow10(scale.unsigned_abs());
    } else if scale > max_exact {
        // Check to see if we have a disguised fast-path, where the
        // number of digits in the mantissa is very small, so digits can
        // be shifted from the exponent to the mantissa.
        value = value * F::pow10((scale - max_exact).unsigned_abs());
        if value > F::MAX_EXACT_MULTIPLIER {
            return None;
        }
        value = value * F::pow10(max_exact.unsigned_abs());
    } else if scale > 0 {
        value = value * F::pow10(scale.unsigned_abs());
    }

    if scan.negative {
        value = -value;
    }
    Some(value)
}
