//! Exact powers of ten.
//!
//! Every entry is bit-exact for its type. Callers range-check the exponent
//! against the matching `PrecisionProfile` before looking anything up, so an
//! out-of-range index here is a bug in the scanner and panics instead of
//! wrapping.

/// Precalculated values of 10**i for i in range [0, 19].
static U64_POW10: [u64; 20] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
    10_000_000_000_000_000_000,
];

/// Precalculated values of 10**i for i in range [0, 22].
/// 5**22 < 2**53, so each value can be **exactly** represented.
static F64_POW10: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

/// Precalculated values of 10**i for i in range [0, 10].
/// 5**10 < 2**24, so each value can be **exactly** represented.
static F32_POW10: [f32; 11] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10,
];

#[inline]
pub(crate) fn u64_pow10(exponent: u8) -> u64 {
    debug_assert!(
        (exponent as usize) < U64_POW10.len(),
        "10^{} is not an exact u64",
        exponent,
    );
    U64_POW10[exponent as usize]
}

#[inline]
pub(crate) fn f64_pow10(exponent: u8) -> f64 {
    debug_assert!(
        (exponent as usize) < F64_POW10.len(),
        "10^{} is not an exact f64",
        exponent,
    );
    F64_POW10[exponent as usize]
}

#[inline]
pub(crate) fn f32_pow10(exponent: u8) -> f32 {
    debug_assert!(
        (exponent as usize) < F32_POW10.len(),
        "10^{} is not an exact f32",
        exponent,
    );
    F32_POW10[exponent as usize]
}
