//! Exact fast-path parsing of JSON numeric literals.
//!
//! A JSON decoder spends much of its number handling on literals like `42`,
//! `-7`, `3.25` or `1.5e3`: short, handwritten, and exactly representable
//! from a small integer and a power of ten. This crate turns such a literal
//! into an integer or a float with a single byte scan and at most two
//! correctly rounded float operations, and hands everything else to a
//! correctly rounded general parser. The result is bit-for-bit what the
//! general parser would produce; the fast path never approximates.
//!
//! # Classifying a literal
//!
//! [`parse_number`] keeps integers exact and reports which kind of value the
//! literal spelled:
//!
//! ```
//! use json_number::{parse_number, ParsedValue};
//!
//! assert_eq!(parse_number(b"007", false)?, ParsedValue::Uint(7));
//! assert_eq!(parse_number(b"-9223372036854775808", false)?, ParsedValue::Int(i64::MIN));
//! assert_eq!(parse_number(b"0.070", false)?, ParsedValue::Float(0.07));
//!
//! // Too large for 64 bits, so it is read as a float instead.
//! assert_eq!(
//!     parse_number(b"18446744073709551616", false)?,
//!     ParsedValue::Float(1.8446744073709552e19),
//! );
//! # Ok::<(), json_number::Error>(())
//! ```
//!
//! # Parsing into a known type
//!
//! [`parse_f64`], [`parse_f32`], [`parse_u64`] and [`parse_i64`] serve
//! decoders that already know the destination type. The integer variants
//! accept literals like `1e2` whose value is an exact integer.
//!
//! ```
//! assert_eq!(json_number::parse_u64(b"1.50e1")?, 15);
//! assert!(json_number::parse_i64(b"-9223372036854775809").is_err());
//! # Ok::<(), json_number::Error>(())
//! ```
//!
//! # Input
//!
//! Every function takes one literal, already isolated from the surrounding
//! document: an optional `-`, digits, an optional fraction and an optional
//! exponent. Hexadecimal floats, digit separators and `inf`/`nan` are not
//! numbers here.

#![doc(html_root_url = "https://docs.rs/json_number/0.1.0")]
#![deny(clippy::all, clippy::pedantic)]
// Ignored clippy lints
#![allow(
    clippy::comparison_chain,
    clippy::manual_range_contains,
    clippy::unnecessary_cast
)]
// Ignored clippy_pedantic lints
#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal
)]
#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

extern crate serde_core as serde;

mod features_check;

pub mod error;
mod fallback;
mod float;
mod integer;
mod number;
mod parse;
mod pow10;
mod profile;
mod scan;

#[doc(inline)]
pub use crate::error::{Error, Result};
#[doc(inline)]
pub use crate::number::ParsedValue;
#[doc(inline)]
pub use crate::parse::{parse_f32, parse_f64, parse_i64, parse_number, parse_u64, NumberParser};
