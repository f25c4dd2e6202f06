//! Per-width precision limits for the fast path.

// 2^23 =                 838 8608 (between 10^ 6 and 10^ 7) (significand bits of f32)
// 2^32 =             42 9496 7296 (between 10^ 9 and 10^10) (full u32)
// 2^52 =      4503 5996 2737 0496 (between 10^15 and 10^16) (significand bits of f64)
// 2^64 = 1844 6744 0737 0955 1616 (between 10^19 and 10^20) (full u64)

/// Accumulating one more digit into a value below this cannot overflow u64.
pub(crate) const UINT64_CUTOFF: u64 = u64::MAX / 10 + 1;

/// Same as `UINT64_CUTOFF` for a 32-bit accumulator.
pub(crate) const UINT32_CUTOFF: u64 = u32::MAX as u64 / 10 + 1;

/// Limits under which a decimal literal converts exactly into one numeric
/// width. One constant instance exists per width.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct PrecisionProfile {
    /// Explicit significand bits of a floating-point width, 0 for integers.
    pub mantissa_bits: u8,
    /// Whether the width is 32 bits.
    pub is_narrow: bool,
    /// Largest `n` such that `10^n` is exact in this width.
    pub max_exact_pow10: i8,
    /// Largest `n` such that every integer up to `10^n` is exact in this
    /// width. Zero for integer widths.
    pub max_exact_integer_pow10: i8,
}

impl PrecisionProfile {
    pub const F32: Self = PrecisionProfile {
        mantissa_bits: 23,
        is_narrow: true,
        max_exact_pow10: 10,
        max_exact_integer_pow10: 7,
    };

    pub const F64: Self = PrecisionProfile {
        mantissa_bits: 52,
        is_narrow: false,
        max_exact_pow10: 22,
        max_exact_integer_pow10: 15,
    };

    pub const U64: Self = PrecisionProfile {
        mantissa_bits: 0,
        is_narrow: false,
        max_exact_pow10: 19,
        max_exact_integer_pow10: 0,
    };

    pub const I64: Self = PrecisionProfile {
        mantissa_bits: 0,
        is_narrow: false,
        max_exact_pow10: 19,
        max_exact_integer_pow10: 0,
    };

    /// The scanner keeps accumulating digits into the mantissa while it is
    /// strictly below this value.
    pub(crate) const fn mantissa_cutoff(&self) -> u64 {
        if self.mantissa_bits != 0 {
            (1u64 << self.mantissa_bits) - 1
        } else if self.is_narrow {
            UINT32_CUTOFF
        } else {
            UINT64_CUTOFF
        }
    }

    /// Inclusive range of scale exponents the reconstructors can handle
    /// without losing precision.
    pub(crate) const fn scale_range(&self) -> (i8, i8) {
        (
            -self.max_exact_pow10,
            self.max_exact_integer_pow10 + self.max_exact_pow10,
        )
    }

    /// Whether `mantissa` fits in the significand of a floating-point width.
    /// Always true for integer widths.
    pub(crate) const fn fits_mantissa(&self, mantissa: u64) -> bool {
        self.mantissa_bits == 0 || mantissa >> self.mantissa_bits == 0
    }
}
