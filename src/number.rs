use crate::error::Error;
use crate::parse::parse_number;
use core::fmt::{self, Display};
use core::str::FromStr;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A parsed numeric literal, whether integer or floating point.
///
/// Integers keep their exact value: a literal without a fraction or exponent
/// is never turned into a float, and a literal with one is never turned into
/// an integer even when its value is integral.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ParsedValue {
    /// A signed integer. Always produced for negative integer literals.
    Int(i64),
    /// An unsigned integer.
    Uint(u64),
    /// A finite 64-bit float.
    Float(f64),
}

impl ParsedValue {
    /// Returns true if the value is an integer between `i64::MIN` and
    /// `i64::MAX`.
    ///
    /// For any `ParsedValue` on which `is_i64` returns true, `as_i64` is
    /// guaranteed to return the integer value.
    #[inline]
    pub fn is_i64(&self) -> bool {
        match *self {
            ParsedValue::Int(_) => true,
            ParsedValue::Uint(v) => v <= i64::MAX as u64,
            ParsedValue::Float(_) => false,
        }
    }

    /// Returns true if the value is an integer between zero and `u64::MAX`.
    ///
    /// For any `ParsedValue` on which `is_u64` returns true, `as_u64` is
    /// guaranteed to return the integer value.
    #[inline]
    pub fn is_u64(&self) -> bool {
        match *self {
            ParsedValue::Int(v) => v >= 0,
            ParsedValue::Uint(_) => true,
            ParsedValue::Float(_) => false,
        }
    }

    /// Returns true if the value was parsed from a literal with a fraction or
    /// an exponent, or from an integer too large for 64 bits.
    ///
    /// This function returns true if and only if both `is_i64` and `is_u64`
    /// return false.
    #[inline]
    pub fn is_f64(&self) -> bool {
        matches!(self, ParsedValue::Float(_))
    }

    /// If the value is an integer, represent it as i64 if possible. Returns
    /// None otherwise.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            ParsedValue::Int(v) => Some(v),
            ParsedValue::Uint(v) => i64::try_from(v).ok(),
            ParsedValue::Float(_) => None,
        }
    }

    /// If the value is an integer, represent it as u64 if possible. Returns
    /// None otherwise.
    #[inline]
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            ParsedValue::Int(v) => u64::try_from(v).ok(),
            ParsedValue::Uint(v) => Some(v),
            ParsedValue::Float(_) => None,
        }
    }

    /// Represents the value as f64. Integers beyond 2^53 lose precision.
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> f64 {
        match *self {
            ParsedValue::Int(v) => v as f64,
            ParsedValue::Uint(v) => v as f64,
            ParsedValue::Float(v) => v,
        }
    }
}

impl Display for ParsedValue {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParsedValue::Int(i) => formatter.write_str(itoa::Buffer::new().format(i)),
            ParsedValue::Uint(u) => formatter.write_str(itoa::Buffer::new().format(u)),
            ParsedValue::Float(f) => {
                let mut buffer = zmij::Buffer::new();
                let s = buffer.format(f);
                formatter.write_str(s)?;
                // Keep the literal a float when it is read back.
                if !s.bytes().any(|b| matches!(b, b'.' | b'e' | b'E')) && f.is_finite() {
                    formatter.write_str(".0")?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for ParsedValue {
    type Err = Error;

    /// Parses with the default policy: non-negative integers become
    /// `ParsedValue::Uint`.
    fn from_str(s: &str) -> Result<Self, Error> {
        parse_number(s.as_bytes(), false)
    }
}

impl Serialize for ParsedValue {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            ParsedValue::Int(i) => serializer.serialize_i64(i),
            ParsedValue::Uint(u) => serializer.serialize_u64(u),
            ParsedValue::Float(f) => serializer.serialize_f64(f),
        }
    }
}

impl<'de> Deserialize<'de> for ParsedValue {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<ParsedValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ParsedValueVisitor;

        impl<'de> Visitor<'de> for ParsedValueVisitor {
            type Value = ParsedValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number or a numeric literal")
            }

            #[inline]
            fn visit_i64<E>(self, value: i64) -> Result<ParsedValue, E> {
                Ok(value.into())
            }

            #[inline]
            fn visit_u64<E>(self, value: u64) -> Result<ParsedValue, E> {
                Ok(value.into())
            }

            #[inline]
            fn visit_f64<E>(self, value: f64) -> Result<ParsedValue, E>
            where
                E: de::Error,
            {
                if value.is_finite() {
                    Ok(ParsedValue::Float(value))
                } else {
                    Err(de::Error::custom("not a finite number"))
                }
            }

            fn visit_str<E>(self, value: &str) -> Result<ParsedValue, E>
            where
                E: de::Error,
            {
                self.visit_bytes(value.as_bytes())
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<ParsedValue, E>
            where
                E: de::Error,
            {
                parse_number(value, false).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(ParsedValueVisitor)
    }
}

macro_rules! from_signed {
    ($($signed_ty:ident)*) => {
        $(
            impl From<$signed_ty> for ParsedValue {
                #[inline]
                fn from(i: $signed_ty) -> Self {
                    ParsedValue::Int(i as i64)
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($unsigned_ty:ident)*) => {
        $(
            impl From<$unsigned_ty> for ParsedValue {
                #[inline]
                fn from(u: $unsigned_ty) -> Self {
                    ParsedValue::Uint(u as u64)
                }
            }
        )*
    };
}

from_signed!(i8 i16 i32 i64 isize);
from_unsigned!(u8 u16 u32 u64 usize);
