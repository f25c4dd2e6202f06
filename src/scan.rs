//! Single-pass scan of a numeric literal into a decimal mantissa and scale.
//!
//! The scan never performs floating-point arithmetic. It only decides
//! whether the literal can be rebuilt exactly from a small integer and a
//! power of ten, and leaves the arithmetic to the reconstructors.

use crate::profile::PrecisionProfile;

/// Decimal representation of one literal: `mantissa × 10^scale_exponent`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct DecimalScan {
    /// Significant digits with the decimal point removed.
    pub mantissa: u64,
    /// Power of ten to apply to the mantissa. Only meaningful when `exact`.
    pub scale_exponent: i8,
    pub negative: bool,
    pub saw_decimal_point: bool,
    pub saw_exponent_marker: bool,
    /// A significant digit did not fit the mantissa.
    pub truncated: bool,
    /// The literal is not a number at all.
    pub malformed: bool,
    /// The scan completed inside the profile's exactness limits.
    pub exact: bool,
}

impl DecimalScan {
    /// Neither exact nor malformed: the fast path declines and a general
    /// parser must decide.
    pub(crate) fn needs_fallback(&self) -> bool {
        !self.exact && !self.malformed
    }
}

/// Scans `bytes` left to right, stopping at the first byte that rules out an
/// exact conversion under `profile`.
///
/// An empty slice scans as an exact zero.
pub(crate) fn scan_decimal(bytes: &[u8], profile: &PrecisionProfile) -> DecimalScan {
    let mut scan = DecimalScan::default();
    if bytes.is_empty() {
        scan.exact = true;
        return scan;
    }

    let start = if bytes[0] == b'-' {
        scan.negative = true;
        1
    } else {
        0
    };

    // Leading zeros never reach the mantissa, so the counters below only
    // start moving at the first significant digit. Counters are wider than
    // the final scale so arbitrarily long zero runs cannot overflow them.
    let cutoff = profile.mantissa_cutoff();
    let mut digits: i64 = 0;
    let mut mantissa_digits: i64 = 0;
    let mut decimal_point: i64 = 0;
    let mut saw_digit = false;
    let mut exponent_start = None;

    for (index, &byte) in bytes.iter().enumerate().skip(start) {
        match byte {
            b'0'..=b'9' => {
                saw_digit = true;
                let digit = u64::from(byte - b'0');
                if digit == 0 && digits == 0 {
                    decimal_point -= 1;
                } else {
                    digits += 1;
                    if scan.mantissa < cutoff {
                        match scan.mantissa.checked_mul(10).and_then(|m| m.checked_add(digit)) {
                            Some(mantissa) => {
                                scan.mantissa = mantissa;
                                mantissa_digits += 1;
                            }
                            None => {
                                scan.truncated = true;
                                return scan;
                            }
                        }
                    } else if digit != 0 {
                        // Trailing zeros past the cutoff fold into the scale,
                        // anything else would need rounding.
                        scan.truncated = true;
                        return scan;
                    }
                }
            }
            b'.' => {
                if scan.saw_decimal_point {
                    scan.malformed = true;
                    return scan;
                }
                scan.saw_decimal_point = true;
                decimal_point = digits;
            }
            b'e' | b'E' => {
                exponent_start = Some(index + 1);
                break;
            }
            _ => {
                scan.malformed = true;
                return scan;
            }
        }
    }

    if !saw_digit {
        scan.malformed = true;
        return scan;
    }
    if !scan.saw_decimal_point {
        decimal_point = digits;
    }

    if let Some(mut index) = exponent_start {
        scan.saw_exponent_marker = true;
        let mut negative_exponent = false;
        match bytes.get(index) {
            Some(b'+') => index += 1,
            Some(b'-') => {
                negative_exponent = true;
                index += 1;
            }
            _ => {}
        }

        let exponent_digits = &bytes[index..];
        match exponent_digits.len() {
            0 => {
                scan.malformed = true;
                return scan;
            }
            1 | 2 => {}
            // Exact results never need more than two exponent digits.
            _ => return scan,
        }

        let mut exponent: i64 = 0;
        for &byte in exponent_digits {
            if !byte.is_ascii_digit() {
                scan.malformed = true;
                return scan;
            }
            exponent = exponent * 10 + i64::from(byte - b'0');
        }
        if negative_exponent {
            decimal_point -= exponent;
        } else {
            decimal_point += exponent;
        }
    }

    if scan.mantissa != 0 {
        let (min, max) = profile.scale_range();
        scan.scale_exponent = match i8::try_from(decimal_point - mantissa_digits) {
            Ok(scale) if min <= scale && scale <= max => scale,
            _ => return scan,
        };
        if !profile.fits_mantissa(scan.mantissa) {
            return scan;
        }
    }

    scan.exact = true;
    scan
}
